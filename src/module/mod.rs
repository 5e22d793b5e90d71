//! Latest-version lookup against Go module proxies
//!
//! # Modules
//!
//! - [`types`]: `ModuleInfo` and `Origin`, the decoded `@latest` payload
//! - [`classify`]: Maps status code and content type to a handling path
//! - [`source`]: `ModuleSource` trait for fetching the latest version of a module
//! - [`go_proxy`]: HTTP implementation of `ModuleSource`
//! - [`error`]: Error types for lookups

pub mod classify;
pub mod error;
pub mod go_proxy;
pub mod source;
pub mod types;

pub use classify::ResponseKind;
pub use error::LookupError;
pub use go_proxy::GoProxyClient;
pub use source::ModuleSource;
pub use types::{ModuleInfo, Origin};
