use serde_json::Value;

use redfin_oem_api::OemResource;

/// Minimal concrete resource handle: identity, `@odata.id`, parsed body.
///
/// Client code with a full resource model implements [`OemResource`] on its
/// own types; this handle covers the CLI and tests.
#[derive(Debug, Clone)]
pub struct JsonResource {
    identity: String,
    odata_id: String,
    body: Value,
}

impl JsonResource {
    pub fn new(identity: impl Into<String>, odata_id: impl Into<String>, body: Value) -> Self {
        Self {
            identity: identity.into(),
            odata_id: odata_id.into(),
            body,
        }
    }

    /// Build a handle from a raw Redfish payload, reading `Id` and
    /// `@odata.id` out of the body.
    #[must_use]
    pub fn from_body(body: Value) -> Self {
        let identity = body
            .get("Id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();
        let odata_id = body
            .get("@odata.id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();
        Self {
            identity,
            odata_id,
            body,
        }
    }
}

impl OemResource for JsonResource {
    fn identity(&self) -> &str {
        &self.identity
    }

    fn odata_id(&self) -> &str {
        &self.odata_id
    }

    fn body(&self) -> &Value {
        &self.body
    }
}
