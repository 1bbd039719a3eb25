use serde_json::Value;

/// Boundary to the Redfish resource object model.
///
/// The resolver never looks inside a resource; it only hands the instance to
/// an extension factory. Extensions use the accessors here to read the
/// vendor-specific slice of the payload's `Oem` object.
pub trait OemResource: Send + Sync {
    /// Redfish `Id` of the resource.
    fn identity(&self) -> &str;

    /// `@odata.id` path the resource was loaded from.
    fn odata_id(&self) -> &str;

    /// Parsed JSON body of the resource.
    fn body(&self) -> &Value;

    /// The vendor's entry in the resource's `Oem` object, if present.
    fn oem_fragment(&self, vendor: &str) -> Option<&Value> {
        self.body().get("Oem")?.get(vendor)
    }
}
