pub mod discovery;
pub mod error;
pub mod extension;
pub mod registry;
pub mod resource;

pub use discovery::{DiscoveredExtension, ExtensionDiscovery, StaticDiscovery, oem_namespace};
pub use error::OemError;
pub use extension::{ExtensionFactory, OemExtension};
pub use registry::{RegisteredExtension, VendorRegistry};
pub use resource::OemResource;
