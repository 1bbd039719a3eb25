use std::fmt;

use indexmap::IndexMap;

use crate::discovery::DiscoveredExtension;
use crate::error::OemError;

use super::RegisteredExtension;

/// Registry of the vendor extensions published under one resource-type
/// namespace.
///
/// Immutable once built; lookups are case-insensitive. Entries keep their
/// publication order.
pub struct VendorRegistry {
    namespace: String,
    extensions: IndexMap<String, RegisteredExtension>,
}

impl fmt::Debug for VendorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VendorRegistry")
            .field("namespace", &self.namespace)
            .field("vendors", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

impl VendorRegistry {
    /// Create an empty registry for a namespace.
    #[must_use]
    pub fn empty(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            extensions: IndexMap::new(),
        }
    }

    /// Build a registry from discovery output.
    ///
    /// Fails when discovery yielded nothing for the namespace.
    pub fn from_discovered(
        namespace: impl Into<String>,
        discovered: Vec<DiscoveredExtension>,
    ) -> Result<Self, OemError> {
        let mut registry = Self::empty(namespace);
        for extension in discovered {
            registry.register(extension);
        }
        if registry.is_empty() {
            return Err(OemError::NoExtensionsFound {
                namespace: registry.namespace,
            });
        }
        Ok(registry)
    }

    /// Register or replace the extension for its (lowercased) vendor name.
    pub fn register(&mut self, extension: DiscoveredExtension) {
        let entry = RegisteredExtension::new(extension);
        let key = entry.name().to_owned();
        self.extensions.insert(key, entry);
    }

    /// Namespace the registry was built for.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Case-insensitive lookup of a vendor's registered extension.
    pub fn get(&self, vendor: &str) -> Option<&RegisteredExtension> {
        self.extensions.get(&vendor.to_lowercase())
    }

    /// Returns `true` if an extension is registered for the vendor name.
    pub fn contains(&self, vendor: &str) -> bool {
        self.extensions.contains_key(&vendor.to_lowercase())
    }

    /// Iterate over registered extensions in publication order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredExtension> {
        self.extensions.values()
    }

    /// Vendor names in publication order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.extensions.keys().map(String::as_str)
    }

    /// Number of registered extensions.
    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    /// Returns `true` when the registry holds no extensions.
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}
