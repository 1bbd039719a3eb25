use std::fmt;
use std::sync::Arc;

use crate::resource::OemResource;

/// A vendor-specific augmentation of a generic Redfish resource.
pub trait OemExtension: Send + Sync {
    /// Vendor identifier, as advertised in resource `Oem` objects.
    fn vendor(&self) -> &str;

    /// The resource this extension augments.
    fn resource(&self) -> &Arc<dyn OemResource>;
}

impl fmt::Debug for dyn OemExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OemExtension")
            .field("vendor", &self.vendor())
            .finish()
    }
}

/// Constructor invoked with the owning resource when an extension instance
/// is first accessed.
pub type ExtensionFactory =
    Arc<dyn Fn(Arc<dyn OemResource>) -> Arc<dyn OemExtension> + Send + Sync>;
