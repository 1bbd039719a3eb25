use std::collections::HashMap;
use std::sync::Arc;

use crate::error::OemError;
use crate::extension::{ExtensionFactory, OemExtension};
use crate::resource::OemResource;

/// Format the discovery namespace for a resource type.
///
/// `"system"` maps to `redfin.resources.system.oems`; vendor crates publish
/// their extensions under these namespaces.
pub fn oem_namespace(resource_type: &str) -> String {
    format!("redfin.resources.{resource_type}.oems")
}

/// A single extension surfaced by discovery: a vendor name paired with the
/// factory that builds the extension for a concrete resource.
#[derive(Clone)]
pub struct DiscoveredExtension {
    name: String,
    factory: ExtensionFactory,
}

impl DiscoveredExtension {
    pub fn new<F>(name: impl Into<String>, factory: F) -> Self
    where
        F: Fn(Arc<dyn OemResource>) -> Arc<dyn OemExtension> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            factory: Arc::new(factory),
        }
    }

    /// Vendor name the extension was published under.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn into_parts(self) -> (String, ExtensionFactory) {
        (self.name, self.factory)
    }
}

/// Source of extensions for a namespace.
///
/// Production wires a [`StaticDiscovery`] holding the built-in vendor
/// tables; tests supply fixed lists or failing doubles. A failure here is
/// fatal to the lookup that triggered it and is never retried within it.
pub trait ExtensionDiscovery: Send + Sync {
    /// Return every extension published under `namespace`.
    ///
    /// A namespace nothing was published under yields `Ok(vec![])`; whether
    /// that is an error is the caller's decision.
    fn discover(&self, namespace: &str) -> Result<Vec<DiscoveredExtension>, OemError>;
}

/// Discovery backed by a fixed table, populated at startup.
#[derive(Clone, Default)]
pub struct StaticDiscovery {
    namespaces: HashMap<String, Vec<DiscoveredExtension>>,
}

impl StaticDiscovery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish an extension under a namespace.
    pub fn publish(&mut self, namespace: impl Into<String>, extension: DiscoveredExtension) {
        let namespace = namespace.into();
        tracing::debug!(
            namespace = %namespace,
            vendor = extension.name(),
            "publishing OEM extension"
        );
        self.namespaces.entry(namespace).or_default().push(extension);
    }
}

impl ExtensionDiscovery for StaticDiscovery {
    fn discover(&self, namespace: &str) -> Result<Vec<DiscoveredExtension>, OemError> {
        Ok(self.namespaces.get(namespace).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extension::OemExtension;

    #[test]
    fn namespaces_follow_the_resource_type_convention() {
        assert_eq!(oem_namespace("system"), "redfin.resources.system.oems");
        assert_eq!(oem_namespace("manager"), "redfin.resources.manager.oems");
    }

    #[test]
    fn unpublished_namespace_discovers_nothing() {
        let discovery = StaticDiscovery::new();
        let found = discovery
            .discover("redfin.resources.chassis.oems")
            .expect("static discovery never fails");
        assert!(found.is_empty());
    }

    #[test]
    fn published_extensions_are_returned_per_namespace() {
        struct NullExtension {
            resource: Arc<dyn OemResource>,
        }

        impl OemExtension for NullExtension {
            fn vendor(&self) -> &str {
                "Null"
            }

            fn resource(&self) -> &Arc<dyn OemResource> {
                &self.resource
            }
        }

        let mut discovery = StaticDiscovery::new();
        discovery.publish(
            oem_namespace("system"),
            DiscoveredExtension::new("null", |resource| {
                Arc::new(NullExtension { resource }) as Arc<dyn OemExtension>
            }),
        );

        let found = discovery
            .discover(&oem_namespace("system"))
            .expect("static discovery never fails");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name(), "null");
        assert!(
            discovery
                .discover(&oem_namespace("manager"))
                .expect("static discovery never fails")
                .is_empty()
        );
    }
}
