use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use redfin_oem_api::{
    ExtensionDiscovery, OemError, OemExtension, OemResource, VendorRegistry, oem_namespace,
};

/// Resolves `(resource type, vendor)` pairs to vendor extension instances.
///
/// One registry is built per resource type, on first lookup, and cached for
/// the lifetime of the resolver. Construct the resolver once and share it by
/// reference across call sites.
pub struct OemResolver {
    discovery: Box<dyn ExtensionDiscovery>,
    registries: RwLock<HashMap<String, Arc<VendorRegistry>>>,
}

impl OemResolver {
    /// Create a resolver backed by the given discovery source.
    pub fn new<D>(discovery: D) -> Self
    where
        D: ExtensionDiscovery + 'static,
    {
        Self {
            discovery: Box::new(discovery),
            registries: RwLock::new(HashMap::new()),
        }
    }

    /// Resolver over the built-in vendor extensions.
    #[must_use]
    pub fn with_builtins() -> Self {
        Self::new(super::builtin_discovery())
    }

    /// Return the extension registry for a resource type, building and
    /// caching it on first use.
    ///
    /// Fails when discovery yields no extensions for the resource type's
    /// namespace, or when the loading step itself fails. A failed build is
    /// not cached.
    pub fn registry(&self, resource_type: &str) -> Result<Arc<VendorRegistry>, OemError> {
        if let Some(registry) = self
            .registries
            .read()
            .expect("registry cache poisoned")
            .get(resource_type)
        {
            return Ok(Arc::clone(registry));
        }

        let mut registries = self.registries.write().expect("registry cache poisoned");
        // Re-check: another caller may have built the registry while we
        // waited on the write lock.
        if let Some(registry) = registries.get(resource_type) {
            return Ok(Arc::clone(registry));
        }

        let namespace = oem_namespace(resource_type);
        let discovered = self.discovery.discover(&namespace)?;
        let registry = Arc::new(VendorRegistry::from_discovered(namespace, discovered)?);
        tracing::debug!(
            resource_type,
            namespace = registry.namespace(),
            vendors = registry.len(),
            "built OEM extension registry"
        );
        registries.insert(resource_type.to_owned(), Arc::clone(&registry));
        Ok(registry)
    }

    /// Resolve a vendor's extension for a resource, constructing the
    /// singleton instance on first access.
    ///
    /// Vendor matching is case-insensitive. Fails with a diagnostic naming
    /// the namespace and the vendor when no extension matches.
    pub fn resolve(
        &self,
        resource_type: &str,
        vendor: &str,
        resource: Arc<dyn OemResource>,
    ) -> Result<Arc<dyn OemExtension>, OemError> {
        let registry = self.registry(resource_type)?;
        let vendor = vendor.to_lowercase();
        match registry.get(&vendor) {
            Some(entry) => Ok(entry.instance(resource)),
            None => Err(OemError::ExtensionNotFound {
                namespace: registry.namespace().to_owned(),
                vendor,
            }),
        }
    }
}
