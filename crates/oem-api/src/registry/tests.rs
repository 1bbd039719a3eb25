use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::{Value, json};

use super::*;
use crate::discovery::DiscoveredExtension;
use crate::error::OemError;
use crate::extension::OemExtension;
use crate::resource::OemResource;

struct StubResource {
    body: Value,
}

impl StubResource {
    fn shared() -> Arc<dyn OemResource> {
        Arc::new(Self {
            body: json!({
                "Id": "BMC",
                "@odata.id": "/redfish/v1/Managers/BMC",
                "Oem": {"Faux": {"@odata.type": "#Faux.v1_0_0.Manager"}}
            }),
        })
    }
}

impl OemResource for StubResource {
    fn identity(&self) -> &str {
        "BMC"
    }

    fn odata_id(&self) -> &str {
        "/redfish/v1/Managers/BMC"
    }

    fn body(&self) -> &Value {
        &self.body
    }
}

struct FauxExtension {
    resource: Arc<dyn OemResource>,
}

impl OemExtension for FauxExtension {
    fn vendor(&self) -> &str {
        "Faux"
    }

    fn resource(&self) -> &Arc<dyn OemResource> {
        &self.resource
    }
}

fn faux(name: &str) -> DiscoveredExtension {
    DiscoveredExtension::new(name, |resource| {
        Arc::new(FauxExtension { resource }) as Arc<dyn OemExtension>
    })
}

#[test]
fn registers_extensions_in_publication_order() {
    let registry = VendorRegistry::from_discovered(
        "redfin.resources.manager.oems",
        vec![faux("Faux"), faux("Contoso")],
    )
    .expect("registry built");

    let names: Vec<&str> = registry.names().collect();
    assert_eq!(names, vec!["faux", "contoso"]);
    assert_eq!(registry.len(), 2);
}

#[test]
fn lookup_is_case_insensitive() {
    let registry =
        VendorRegistry::from_discovered("redfin.resources.manager.oems", vec![faux("faux")])
            .expect("registry built");

    assert!(registry.contains("Faux"));
    assert!(registry.contains("FAUX"));
    assert_eq!(registry.get("fAuX").expect("entry resolved").name(), "faux");
    assert!(registry.get("contoso").is_none());
}

#[test]
fn register_replaces_entry_for_same_vendor() {
    let mut registry = VendorRegistry::empty("redfin.resources.manager.oems");
    registry.register(faux("faux"));
    registry.register(faux("Faux"));

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.names().collect::<Vec<_>>(), vec!["faux"]);
}

#[test]
fn empty_discovery_is_rejected() {
    let err = VendorRegistry::from_discovered("redfin.resources.manager.oems", Vec::new())
        .expect_err("empty namespace must not build");

    assert!(matches!(err, OemError::NoExtensionsFound { .. }));
    assert!(err.to_string().contains("No extensions found"));
    assert!(err.to_string().contains("redfin.resources.manager.oems"));
}

#[test]
fn instance_is_constructed_once() {
    let constructions = Arc::new(AtomicUsize::new(0));
    let counted = {
        let constructions = Arc::clone(&constructions);
        DiscoveredExtension::new("faux", move |resource| {
            constructions.fetch_add(1, Ordering::SeqCst);
            Arc::new(FauxExtension { resource }) as Arc<dyn OemExtension>
        })
    };
    let registry =
        VendorRegistry::from_discovered("redfin.resources.manager.oems", vec![counted])
            .expect("registry built");
    let entry = registry.get("faux").expect("entry resolved");
    assert!(!entry.is_instantiated());

    let resource = StubResource::shared();
    let first = entry.instance(Arc::clone(&resource));
    let second = entry.instance(StubResource::shared());

    assert!(Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(first.resource(), &resource));
    assert!(entry.is_instantiated());
    assert_eq!(constructions.load(Ordering::SeqCst), 1);
}
