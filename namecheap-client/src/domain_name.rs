//! Host name decomposition against the public suffix list.

use std::fmt;

use crate::error::DomainError;

/// A host name split into `third_level.second_level.top_level`.
///
/// `second_level.top_level` is the registrable domain. `top_level` may span several
/// labels (`com.ua`, `co.uk`) and `third_level` is empty when the input is exactly the
/// registrable domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainNameParts {
    pub third_level: String,
    pub second_level: String,
    pub top_level: String,
}

impl DomainNameParts {
    /// `SLD.TLD`
    pub fn registrable(&self) -> String {
        format!("{}.{}", self.second_level, self.top_level)
    }
}

impl fmt::Display for DomainNameParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.third_level.is_empty() {
            write!(f, "{}.{}", self.second_level, self.top_level)
        } else {
            write!(
                f,
                "{}.{}.{}",
                self.third_level, self.second_level, self.top_level
            )
        }
    }
}

/// Splits `input` into its subdomain, second-level and public-suffix parts.
///
/// The input is lowercased before the lookup. Anything other than dot-separated
/// labels of ASCII letters, digits and hyphens (with an alphanumeric last label) is
/// rejected with [`DomainError::InvalidFormat`]. A bare public suffix yields
/// [`DomainError::NotRegistrable`].
pub fn parse_domain(input: &str) -> Result<DomainNameParts, DomainError> {
    if !has_domain_shape(input) {
        return Err(DomainError::InvalidFormat {
            input: input.to_string(),
        });
    }

    let name = input.to_ascii_lowercase();
    let not_registrable = || DomainError::NotRegistrable {
        input: input.to_string(),
    };

    let registrable = psl::domain_str(&name).ok_or_else(not_registrable)?;
    let suffix = psl::suffix_str(&name).ok_or_else(not_registrable)?;

    let second_level = registrable
        .strip_suffix(suffix)
        .and_then(|rest| rest.strip_suffix('.'))
        .filter(|label| !label.is_empty())
        .ok_or_else(not_registrable)?;

    let third_level = name
        .strip_suffix(registrable)
        .map(|rest| rest.trim_end_matches('.'))
        .unwrap_or_default();

    Ok(DomainNameParts {
        third_level: third_level.to_string(),
        second_level: second_level.to_string(),
        top_level: suffix.to_string(),
    })
}

/// `label(.label)+`, labels of `[A-Za-z0-9-]`, last label alphanumeric only.
fn has_domain_shape(input: &str) -> bool {
    let labels: Vec<&str> = input.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    let Some((last, rest)) = labels.split_last() else {
        return false;
    };

    let valid_label = |label: &&str| {
        !label.is_empty()
            && label
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-')
    };

    rest.iter().all(valid_label) && !last.is_empty() && last.bytes().all(|b| b.is_ascii_alphanumeric())
}
