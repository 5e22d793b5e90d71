//! Find the latest version of Go modules through GOPROXY mirrors
//!
//! # Modules
//!
//! - [`config`]: Constants and log level resolution
//! - [`logging`]: Builds the stderr log subscriber
//! - [`proxy`]: Resolves the ordered list of proxy endpoints
//! - [`module`]: Fetches and classifies `@latest` responses
//! - [`output`]: Prints selected fields of a module record
//! - [`finder`]: Runs lookups for each module across the endpoints

pub mod config;
pub mod finder;
pub mod logging;
pub mod module;
pub mod output;
pub mod proxy;
