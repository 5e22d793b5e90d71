//! GOPROXY endpoint resolution
//!
//! # Modules
//!
//! - [`endpoints`]: Picks the GOPROXY value by precedence and splits it into endpoints
//! - [`go_env`]: Queries `go env GOPROXY` for the toolchain default
//! - [`error`]: Error types for endpoint resolution

pub mod endpoints;
pub mod error;
pub mod go_env;

pub use endpoints::{ProxyEndpoints, ProxySource, parse_goproxy, resolve_endpoints};
pub use error::ProxyError;
pub use go_env::{GoCommand, GoEnv};
