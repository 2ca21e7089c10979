//! Endpoint groups of the Namecheap API.
//!
//! Each service borrows the [`Client`](crate::Client) and maps one method to one API command:
//! arguments are validated locally, flattened into request parameters, dispatched,
//! and the typed `CommandResponse` is returned.

macro_rules! service {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name<'a> {
            client: &'a $crate::client::Client,
        }

        impl<'a> $name<'a> {
            pub(crate) fn new(client: &'a $crate::client::Client) -> Self {
                Self { client }
            }
        }
    };
}

mod domains;
mod domains_dns;
mod domains_ns;
mod users;

use std::collections::BTreeMap;

pub use domains::{
    ContactInfo, CurrentAttributes, DnsDetails, DomainCheckResult, DomainContact,
    DomainContactsResult, DomainCreateResult, DomainGetInfoResult, DomainGetListResult,
    DomainInfoDetails, DomainListEntry, DomainReactivateResult, DomainRenewResult,
    DomainsCheckCommandResponse, DomainsCreateArgs, DomainsCreateCommandResponse,
    DomainsGetContactsCommandResponse, DomainsGetInfoCommandResponse, DomainsGetListArgs,
    DomainsGetListCommandResponse, DomainsGetRegistrarLockCommandResponse,
    DomainsGetTldListCommandResponse, DomainsReactivateCommandResponse,
    DomainsRenewCommandResponse, DomainsService, DomainsSetRegistrarLockCommandResponse,
    GetRegistrarLockResult, ListType, LockAction, Paging, ReactivateArgs, RenewArgs,
    RenewDomainDetails, SetRegistrarLockResult, SortBy, Tld, TldList, WhoisGuardContact,
    WhoisguardInfo,
};
pub use domains_dns::{
    DomainDnsGetEmailForwardingResult, DomainDnsGetHostsResult, DomainDnsGetListResult,
    DomainDnsSetCustomResult, DomainDnsSetDefaultResult, DomainDnsSetEmailForwardingResult,
    DomainDnsSetHostsResult, DomainsDnsGetEmailForwardingCommandResponse,
    DomainsDnsGetHostsCommandResponse, DomainsDnsGetListCommandResponse,
    DomainsDnsService, DomainsDnsSetCustomCommandResponse, DomainsDnsSetDefaultCommandResponse,
    DomainsDnsSetEmailForwardingCommandResponse, DomainsDnsSetHostsCommandResponse,
    EmailForwardingEntry, EmailForwardingRule, HostEntry,
};
pub use domains_ns::{
    DomainNsCreateResult, DomainNsDeleteResult, DomainNsInfoResult, DomainNsUpdateResult,
    DomainsNsCreateCommandResponse, DomainsNsDeleteCommandResponse,
    DomainsNsGetInfoCommandResponse, DomainsNsService, DomainsNsUpdateCommandResponse,
    NameserverStatuses,
};
pub use users::{
    ActionName, CreateAddFundsRequestArgs, CreateAddFundsRequestResult, GetAddFundsStatusResult,
    GetPricingArgs, PriceEntry, ProductCategory, ProductCategoryPricing, ProductName,
    ProductPricing, ProductType, ProductTypePricing, UserGetBalancesResult,
    UserGetPricingResult, UsersCreateAddFundsRequestCommandResponse,
    UsersGetAddFundsStatusCommandResponse, UsersGetBalancesCommandResponse,
    UsersGetPricingCommandResponse, UsersService,
};

/// Parameter map seeded with `Command`.
fn command(name: &str) -> BTreeMap<String, String> {
    BTreeMap::from([("Command".to_string(), name.to_string())])
}

/// Inserts `value` under `key` when present.
fn insert_opt(params: &mut BTreeMap<String, String>, key: &str, value: Option<impl ToString>) {
    if let Some(value) = value {
        params.insert(key.to_string(), value.to_string());
    }
}

/// `yes` / `no` flags used by a few domain commands.
fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
