//! Provider support lookup
//!
//! Answers whether a resource type belongs to a cloud provider that has
//! pricing data at all. A type can be recognized here and still be unpriced.

/// Resource type prefixes recognized out of the box.
pub const DEFAULT_PROVIDER_PREFIXES: &[&str] = &["aws_", "google_", "azurerm_"];

/// Decides whether any pricing provider recognizes a resource type.
pub trait ProviderSupport {
    fn has_supported_provider(&self, resource_type: &str) -> bool;
}

/// Recognizes resource types by their provider prefix (`aws_instance` → `aws_`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixProviders {
    prefixes: Vec<String>,
}

impl PrefixProviders {
    pub fn new(prefixes: Vec<String>) -> Self {
        Self { prefixes }
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }
}

impl Default for PrefixProviders {
    fn default() -> Self {
        Self::new(DEFAULT_PROVIDER_PREFIXES.iter().map(|p| p.to_string()).collect())
    }
}

impl ProviderSupport for PrefixProviders {
    fn has_supported_provider(&self, resource_type: &str) -> bool {
        self.prefixes.iter().any(|prefix| resource_type.starts_with(prefix.as_str()))
    }
}
