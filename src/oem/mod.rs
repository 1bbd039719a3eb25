//! Discovery and resolution of vendor OEM extensions.
//!
//! Vendor crates publish extension factories under per-resource-type
//! namespaces; the [`OemResolver`] builds one registry per namespace, on
//! first use, and hands out lazily constructed extension singletons.

mod resolver;


pub use resolver::OemResolver;

use redfin_oem_api::StaticDiscovery;

/// Discovery table holding every built-in vendor extension.
#[must_use]
pub fn builtin_discovery() -> StaticDiscovery {
    let mut discovery = StaticDiscovery::new();
    redfin_oem_contoso::register(&mut discovery);
    discovery
}
