use thiserror::Error;

/// Errors surfaced while resolving OEM vendor extensions.
#[derive(Debug, Error)]
pub enum OemError {
    /// Discovery completed but found nothing published under the namespace.
    #[error("No extensions found for namespace {namespace}")]
    NoExtensionsFound { namespace: String },

    /// The namespace has extensions, but none under the requested vendor
    /// name.
    #[error("No {namespace} OEM extension found by name \"{vendor}\"")]
    ExtensionNotFound { namespace: String, vendor: String },

    /// The underlying loading step failed.
    #[error("failed to load extensions for namespace {namespace}")]
    Discovery {
        namespace: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
