//! `namecheap.users.*` commands: balances, pricing and account funding.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::{command, insert_opt};
use crate::error::{Result, ValidationError};

/// The only payment type the API accepts for add-funds requests.
const CREDIT_CARD: &str = "creditcard";

service!(
    /// Account level commands.
    UsersService
);

// ============ Arguments ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductType {
    #[default]
    Domain,
    SslCertificate,
}

impl ProductType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Domain => "DOMAIN",
            Self::SslCertificate => "SSLCERTIFICATE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductCategory {
    Domains,
    Comodo,
}

impl ProductCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Domains => "DOMAINS",
            Self::Comodo => "COMODO",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionName {
    Register,
    Renew,
    Reactivate,
    Transfer,
    Purchase,
}

impl ActionName {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Register => "REGISTER",
            Self::Renew => "RENEW",
            Self::Reactivate => "REACTIVATE",
            Self::Transfer => "TRANSFER",
            Self::Purchase => "PURCHASE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductName {
    Com,
    InstantSsl,
}

impl ProductName {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Com => "COM",
            Self::InstantSsl => "INSTANTSSL",
        }
    }
}

/// Filters of `namecheap.users.getPricing`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetPricingArgs {
    pub product_type: ProductType,
    pub product_category: Option<ProductCategory>,
    pub promotion_code: Option<String>,
    pub action_name: Option<ActionName>,
    pub product_name: Option<ProductName>,
}

impl GetPricingArgs {
    fn to_params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        params.insert(
            "ProductType".to_string(),
            self.product_type.as_str().to_string(),
        );
        insert_opt(
            &mut params,
            "ProductCategory",
            self.product_category.map(ProductCategory::as_str),
        );
        insert_opt(&mut params, "PromotionCode", self.promotion_code.as_deref());
        insert_opt(
            &mut params,
            "ActionName",
            self.action_name.map(ActionName::as_str),
        );
        insert_opt(
            &mut params,
            "ProductName",
            self.product_name.map(ProductName::as_str),
        );
        params
    }
}

/// Arguments of `namecheap.users.createaddfundsrequest`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateAddFundsRequestArgs {
    /// Must be `creditcard`.
    pub payment_type: String,
    pub amount: f64,
    /// Where the payment page sends the user back to.
    pub return_url: String,
}

impl CreateAddFundsRequestArgs {
    fn to_params(&self) -> std::result::Result<BTreeMap<String, String>, ValidationError> {
        if self.payment_type.is_empty() {
            return Err(ValidationError::missing("PaymentType"));
        }
        if self.payment_type != CREDIT_CARD {
            return Err(ValidationError::invalid(
                "PaymentType",
                format!("{} (only '{CREDIT_CARD}' is allowed)", self.payment_type),
            ));
        }
        if self.amount.is_nan() || self.amount <= 0.0 {
            return Err(ValidationError::invalid(
                "Amount",
                format!("{}, must be greater than 0", self.amount),
            ));
        }
        if self.return_url.trim().is_empty() {
            return Err(ValidationError::missing("ReturnURL"));
        }

        Ok(BTreeMap::from([
            ("PaymentType".to_string(), self.payment_type.clone()),
            ("Amount".to_string(), self.amount.to_string()),
            ("ReturnURL".to_string(), self.return_url.clone()),
        ]))
    }
}

// ============ Results ============

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsersGetBalancesCommandResponse {
    #[serde(rename = "UserGetBalancesResult")]
    pub result: Option<UserGetBalancesResult>,
}

/// Amounts are kept as the decimal text the API returns.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserGetBalancesResult {
    #[serde(rename = "@Currency")]
    pub currency: Option<String>,
    #[serde(rename = "@AvailableBalance")]
    pub available_balance: Option<String>,
    #[serde(rename = "@AccountBalance")]
    pub account_balance: Option<String>,
    #[serde(rename = "@EarnedAmount")]
    pub earned_amount: Option<String>,
    #[serde(rename = "@WithdrawableAmount")]
    pub withdrawable_amount: Option<String>,
    #[serde(rename = "@FundsRequiredForAutoRenew")]
    pub funds_required_for_auto_renew: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsersGetPricingCommandResponse {
    #[serde(rename = "UserGetPricingResult")]
    pub result: Option<UserGetPricingResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserGetPricingResult {
    #[serde(rename = "ProductType", default)]
    pub product_types: Vec<ProductTypePricing>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductTypePricing {
    #[serde(rename = "@Name")]
    pub name: Option<String>,
    #[serde(rename = "ProductCategory", default)]
    pub categories: Vec<ProductCategoryPricing>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductCategoryPricing {
    #[serde(rename = "@Name")]
    pub name: Option<String>,
    #[serde(rename = "Product", default)]
    pub products: Vec<ProductPricing>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPricing {
    #[serde(rename = "@Name")]
    pub name: Option<String>,
    #[serde(rename = "Price", default)]
    pub prices: Vec<PriceEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PriceEntry {
    #[serde(rename = "@Duration")]
    pub duration: Option<u32>,
    /// `YEAR` or `MONTH`.
    #[serde(rename = "@DurationType")]
    pub duration_type: Option<String>,
    #[serde(rename = "@Price")]
    pub price: Option<String>,
    #[serde(rename = "@RegularPrice")]
    pub regular_price: Option<String>,
    #[serde(rename = "@YourPrice")]
    pub your_price: Option<String>,
    #[serde(rename = "@CouponPrice")]
    pub coupon_price: Option<String>,
    #[serde(rename = "@Currency")]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsersCreateAddFundsRequestCommandResponse {
    #[serde(rename = "Createaddfundsrequestresult")]
    pub result: Option<CreateAddFundsRequestResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAddFundsRequestResult {
    #[serde(rename = "@TokenID")]
    pub token_id: Option<String>,
    #[serde(rename = "@ReturnURL")]
    pub return_url: Option<String>,
    #[serde(rename = "@RedirectURL")]
    pub redirect_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsersGetAddFundsStatusCommandResponse {
    #[serde(rename = "GetAddFundsStatusResult")]
    pub result: Option<GetAddFundsStatusResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetAddFundsStatusResult {
    #[serde(rename = "@TransactionID")]
    pub transaction_id: Option<String>,
    #[serde(rename = "@Amount")]
    pub amount: Option<String>,
    /// `CREATED`, `COMPLETED`, `FAILED`, ...
    #[serde(rename = "@Status")]
    pub status: Option<String>,
}

// ============ Commands ============

impl UsersService<'_> {
    pub async fn get_balances(&self) -> Result<UsersGetBalancesCommandResponse> {
        self.client
            .do_xml(command("namecheap.users.getBalances"))
            .await
    }

    /// Returns the price list for a product type.
    pub async fn get_pricing(&self, args: &GetPricingArgs) -> Result<UsersGetPricingCommandResponse> {
        let mut params = command("namecheap.users.getPricing");
        params.extend(args.to_params());
        self.client.do_xml(params).await
    }

    /// Starts a credit card payment; the caller sends the user to `RedirectURL`.
    pub async fn create_add_funds_request(
        &self,
        args: &CreateAddFundsRequestArgs,
    ) -> Result<UsersCreateAddFundsRequestCommandResponse> {
        let mut params = command("namecheap.users.createaddfundsrequest");
        params.extend(args.to_params()?);
        self.client.do_xml(params).await
    }

    pub async fn get_add_funds_status(
        &self,
        token_id: &str,
    ) -> Result<UsersGetAddFundsStatusCommandResponse> {
        if token_id.trim().is_empty() {
            return Err(ValidationError::missing("TokenID").into());
        }
        let mut params = command("namecheap.users.getAddFundsStatus");
        params.insert("TokenID".to_string(), token_id.to_string());
        self.client.do_xml(params).await
    }
}
