//! # Provider Entity
//!
//! Static description of one upstream postal lookup provider.
//!
//! # Examples
//!
//! ```
//! use cep_race::domain::entities::provider::ProviderSpec;
//! use cep_race::domain::value_objects::PostalCode;
//!
//! let spec = ProviderSpec::new("viacep", "https://viacep.com.br/ws/{cep}/json/").unwrap();
//! let cep = PostalCode::parse("01001000").unwrap();
//!
//! let target = spec.target_for(&cep);
//! assert_eq!(target.url(), "https://viacep.com.br/ws/01001000/json/");
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{PostalCode, ProviderName};
use std::fmt;

/// Placeholder substituted by the postal code in endpoint templates.
pub const POSTAL_CODE_PLACEHOLDER: &str = "{cep}";

/// A provider name paired with its endpoint template.
///
/// Identity is the name. Specs are built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSpec {
    name: ProviderName,
    endpoint_template: String,
}

impl ProviderSpec {
    /// Creates a provider spec.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidProviderName` for an unusable name, or
    /// `DomainError::InvalidEndpointTemplate` if the template lacks the
    /// [`POSTAL_CODE_PLACEHOLDER`] or is not an http(s) URL.
    pub fn new(
        name: impl Into<String>,
        endpoint_template: impl Into<String>,
    ) -> DomainResult<Self> {
        let name = ProviderName::new(name)?;
        let endpoint_template = endpoint_template.into();

        if !endpoint_template.contains(POSTAL_CODE_PLACEHOLDER) {
            return Err(DomainError::invalid_endpoint_template(
                name.as_str(),
                format!("template has no {POSTAL_CODE_PLACEHOLDER} placeholder"),
            ));
        }
        if !(endpoint_template.starts_with("http://") || endpoint_template.starts_with("https://"))
        {
            return Err(DomainError::invalid_endpoint_template(
                name.as_str(),
                "template must start with http:// or https://",
            ));
        }

        Ok(Self {
            name,
            endpoint_template,
        })
    }

    /// Returns the provider name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &ProviderName {
        &self.name
    }

    /// Returns the raw endpoint template.
    #[inline]
    #[must_use]
    pub fn endpoint_template(&self) -> &str {
        &self.endpoint_template
    }

    /// Builds the concrete request target for a postal code.
    ///
    /// The code is percent-encoded so it cannot alter the path or query
    /// structure of the template.
    #[must_use]
    pub fn target_for(&self, code: &PostalCode) -> ProviderTarget {
        ProviderTarget {
            name: self.name.clone(),
            url: self
                .endpoint_template
                .replace(POSTAL_CODE_PLACEHOLDER, &urlencoding::encode(code.as_str())),
        }
    }
}

impl fmt::Display for ProviderSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.name, self.endpoint_template)
    }
}

/// A provider with its template resolved for one postal code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderTarget {
    name: ProviderName,
    url: String,
}

impl ProviderTarget {
    /// Returns the provider name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &ProviderName {
        &self.name
    }

    /// Returns the request URL.
    #[inline]
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_placeholder_in_query_string() {
        let spec = ProviderSpec::new(
            "republicavirtual",
            "https://republicavirtual.com.br/web_cep.php?cep={cep}&formato=json",
        )
        .unwrap();
        let target = spec.target_for(&PostalCode::parse("22041001").unwrap());
        assert_eq!(
            target.url(),
            "https://republicavirtual.com.br/web_cep.php?cep=22041001&formato=json"
        );
        assert_eq!(target.name().as_str(), "republicavirtual");
    }

    #[test]
    fn template_without_placeholder_is_rejected() {
        let err = ProviderSpec::new("viacep", "https://viacep.com.br/ws/json/").unwrap_err();
        assert!(matches!(err, DomainError::InvalidEndpointTemplate { .. }));
    }

    #[test]
    fn reserved_characters_are_encoded() {
        let spec = ProviderSpec::new("viacep", "https://viacep.com.br/ws/{cep}/json/").unwrap();
        let target = spec.target_for(&PostalCode::parse("01/01?00").unwrap());
        assert_eq!(target.url(), "https://viacep.com.br/ws/01%2F01%3F00/json/");
    }

    #[test]
    fn non_http_template_is_rejected() {
        assert!(ProviderSpec::new("ftp", "ftp://example.com/{cep}").is_err());
    }
}
