//! OEM vendor-extension resolution for Redfish management clients.
//!
//! The root module re-exports the extension API so embedders can resolve
//! vendor extensions without digging through the module hierarchy.

pub mod oem;
pub mod resource;

pub use oem::{OemResolver, builtin_discovery};
pub use resource::JsonResource;

pub use redfin_oem_api::{
	DiscoveredExtension, ExtensionDiscovery, OemError, OemExtension, OemResource,
	RegisteredExtension, StaticDiscovery, VendorRegistry, oem_namespace,
};
