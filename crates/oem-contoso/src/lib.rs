//! Built-in Contoso OEM extension.
//!
//! Contoso is the vendor used throughout the DMTF Redfish mockups; its OEM
//! fragments carry a `ProductionLocation` object on computer systems. This
//! crate gives typed access to that data and doubles as the reference for
//! writing vendor extension crates.

use std::sync::Arc;

use serde::Deserialize;

use redfin_oem_api::{
    DiscoveredExtension, OemExtension, OemResource, StaticDiscovery, oem_namespace,
};

/// Vendor key Contoso publishes under in resource `Oem` objects.
pub const VENDOR: &str = "Contoso";

/// Production site data from a system's `Oem.Contoso.ProductionLocation`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductionLocation {
    pub facility_name: String,
    pub country: String,
}

/// Contoso augmentation of a `system` resource.
pub struct ContosoSystemExtension {
    resource: Arc<dyn OemResource>,
}

impl ContosoSystemExtension {
    fn new(resource: Arc<dyn OemResource>) -> Self {
        Self { resource }
    }

    /// Typed `ProductionLocation` from the resource's Contoso fragment.
    ///
    /// Returns `None` when the resource carries no Contoso data or the
    /// fragment does not match the mockup schema.
    pub fn production_location(&self) -> Option<ProductionLocation> {
        let location = self.resource.oem_fragment(VENDOR)?.get("ProductionLocation")?;
        serde_json::from_value(location.clone()).ok()
    }
}

impl OemExtension for ContosoSystemExtension {
    fn vendor(&self) -> &str {
        VENDOR
    }

    fn resource(&self) -> &Arc<dyn OemResource> {
        &self.resource
    }
}

/// Contoso augmentation of a `manager` resource.
pub struct ContosoManagerExtension {
    resource: Arc<dyn OemResource>,
}

impl ContosoManagerExtension {
    fn new(resource: Arc<dyn OemResource>) -> Self {
        Self { resource }
    }

    /// `@odata.type` of the Contoso fragment, when the manager carries one.
    pub fn odata_type(&self) -> Option<String> {
        self.resource
            .oem_fragment(VENDOR)?
            .get("@odata.type")
            .and_then(|value| value.as_str())
            .map(str::to_owned)
    }
}

impl OemExtension for ContosoManagerExtension {
    fn vendor(&self) -> &str {
        VENDOR
    }

    fn resource(&self) -> &Arc<dyn OemResource> {
        &self.resource
    }
}

/// Extension entry for `system` resources.
#[must_use]
pub fn system_extension() -> DiscoveredExtension {
    DiscoveredExtension::new("contoso", |resource| {
        Arc::new(ContosoSystemExtension::new(resource)) as Arc<dyn OemExtension>
    })
}

/// Extension entry for `manager` resources.
#[must_use]
pub fn manager_extension() -> DiscoveredExtension {
    DiscoveredExtension::new("contoso", |resource| {
        Arc::new(ContosoManagerExtension::new(resource)) as Arc<dyn OemExtension>
    })
}

/// Publish the Contoso extensions into a discovery table.
pub fn register(discovery: &mut StaticDiscovery) {
    discovery.publish(oem_namespace("system"), system_extension());
    discovery.publish(oem_namespace("manager"), manager_extension());
}
