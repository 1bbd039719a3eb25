use std::sync::{Arc, OnceLock};

use crate::discovery::DiscoveredExtension;
use crate::extension::{ExtensionFactory, OemExtension};
use crate::resource::OemResource;

/// Vendor name and factory pair stored by the registry, together with the
/// lazily constructed singleton instance.
pub struct RegisteredExtension {
    name: String,
    factory: ExtensionFactory,
    instance: OnceLock<Arc<dyn OemExtension>>,
}

impl RegisteredExtension {
    pub(crate) fn new(extension: DiscoveredExtension) -> Self {
        let (name, factory) = extension.into_parts();
        Self {
            name: name.to_lowercase(),
            factory,
            instance: OnceLock::new(),
        }
    }

    /// Lowercased vendor name the extension is keyed under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the singleton instance, constructing it on first access.
    ///
    /// The factory runs at most once per registry entry; later calls drop
    /// `resource` unused and return the cached instance.
    pub fn instance(&self, resource: Arc<dyn OemResource>) -> Arc<dyn OemExtension> {
        Arc::clone(self.instance.get_or_init(|| (*self.factory)(resource)))
    }

    /// Whether the singleton has been constructed yet.
    pub fn is_instantiated(&self) -> bool {
        self.instance.get().is_some()
    }
}
