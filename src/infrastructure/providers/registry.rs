//! # Provider Registry
//!
//! Immutable set of upstream providers, built once at startup.
//!
//! The registry turns a validated postal code into one request target per
//! provider. Template problems are caught in [`ProviderRegistry::new`], so
//! [`ProviderRegistry::targets`] cannot fail.
//!
//! # Examples
//!
//! ```
//! use cep_race::domain::value_objects::PostalCode;
//! use cep_race::infrastructure::providers::registry::ProviderRegistry;
//!
//! let registry = ProviderRegistry::with_default_providers().unwrap();
//! let targets = registry.targets(&PostalCode::parse("01001000").unwrap());
//! assert_eq!(targets.len(), 3);
//! ```

use crate::domain::entities::provider::{ProviderSpec, ProviderTarget};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{PostalCode, ProviderName};
use reqwest::Url;
use std::collections::HashSet;
use thiserror::Error;

/// Providers queried when no configuration overrides them.
pub const DEFAULT_PROVIDERS: &[(&str, &str)] = &[
    ("viacep", "https://viacep.com.br/ws/{cep}/json/"),
    ("postmon", "https://api.postmon.com.br/v1/cep/{cep}"),
    (
        "republicavirtual",
        "https://republicavirtual.com.br/web_cep.php?cep={cep}&formato=json",
    ),
];

/// Postal code used to check that templates render to valid URLs.
const PROBE_POSTAL_CODE: &str = "00000000";

/// Error raised while building a registry.
#[derive(Debug, Clone, Error)]
pub enum RegistryError {
    /// No provider was configured.
    #[error("at least one provider must be configured")]
    Empty,

    /// Two providers share a name.
    #[error("duplicate provider name: {0}")]
    DuplicateProvider(ProviderName),

    /// A provider spec is invalid.
    #[error(transparent)]
    InvalidProvider(#[from] DomainError),
}

/// Result type for registry construction.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registered providers in configuration order.
#[derive(Debug, Clone)]
pub struct ProviderRegistry {
    providers: Vec<ProviderSpec>,
}

impl ProviderRegistry {
    /// Creates a registry from provider specs.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Empty` if `providers` is empty,
    /// `RegistryError::DuplicateProvider` if two specs share a name, and
    /// `RegistryError::InvalidProvider` if a template does not render to an
    /// absolute URL.
    pub fn new(providers: Vec<ProviderSpec>) -> RegistryResult<Self> {
        if providers.is_empty() {
            return Err(RegistryError::Empty);
        }

        let probe = PostalCode::parse(PROBE_POSTAL_CODE)?;
        let mut seen = HashSet::with_capacity(providers.len());
        for spec in &providers {
            if !seen.insert(spec.name().clone()) {
                return Err(RegistryError::DuplicateProvider(spec.name().clone()));
            }

            let target = spec.target_for(&probe);
            let url = Url::parse(target.url()).map_err(|e| {
                DomainError::invalid_endpoint_template(spec.name().as_str(), e.to_string())
            })?;
            if url.host_str().is_none() {
                return Err(DomainError::invalid_endpoint_template(
                    spec.name().as_str(),
                    "template has no host",
                )
                .into());
            }
        }

        Ok(Self { providers })
    }

    /// Creates a registry from `(name, template)` pairs.
    ///
    /// # Errors
    ///
    /// Same as [`ProviderRegistry::new`].
    pub fn from_pairs<N, T>(pairs: impl IntoIterator<Item = (N, T)>) -> RegistryResult<Self>
    where
        N: Into<String>,
        T: Into<String>,
    {
        let providers = pairs
            .into_iter()
            .map(|(name, template)| ProviderSpec::new(name, template))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(providers)
    }

    /// Creates a registry with [`DEFAULT_PROVIDERS`].
    ///
    /// # Errors
    ///
    /// Same as [`ProviderRegistry::new`].
    pub fn with_default_providers() -> RegistryResult<Self> {
        Self::from_pairs(DEFAULT_PROVIDERS.iter().copied())
    }

    /// Builds one request target per provider for `code`.
    #[must_use]
    pub fn targets(&self, code: &PostalCode) -> Vec<ProviderTarget> {
        self.providers
            .iter()
            .map(|spec| spec.target_for(code))
            .collect()
    }

    /// Returns the registered providers.
    #[must_use]
    pub fn providers(&self) -> &[ProviderSpec] {
        &self.providers
    }

    /// Returns the number of providers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Always false; an empty registry cannot be built.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_targets_every_provider() {
        let registry = ProviderRegistry::with_default_providers().unwrap();
        let targets = registry.targets(&PostalCode::parse("01001000").unwrap());

        let urls: Vec<&str> = targets.iter().map(ProviderTarget::url).collect();
        assert_eq!(
            urls,
            vec![
                "https://viacep.com.br/ws/01001000/json/",
                "https://api.postmon.com.br/v1/cep/01001000",
                "https://republicavirtual.com.br/web_cep.php?cep=01001000&formato=json",
            ]
        );
    }

    #[test]
    fn empty_registry_is_rejected() {
        let err = ProviderRegistry::new(vec![]).unwrap_err();
        assert!(matches!(err, RegistryError::Empty));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = ProviderRegistry::from_pairs([
            ("viacep", "https://a.example/{cep}"),
            ("viacep", "https://b.example/{cep}"),
        ])
        .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateProvider(_)));
    }

    #[test]
    fn template_without_host_is_rejected() {
        let err = ProviderRegistry::from_pairs([("broken", "http://{cep}:notaport/")]).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidProvider(_)));
    }

    #[test]
    fn template_without_placeholder_is_rejected() {
        let err = ProviderRegistry::from_pairs([("viacep", "https://viacep.com.br/")]).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::InvalidProvider(DomainError::InvalidEndpointTemplate { .. })
        ));
    }
}
