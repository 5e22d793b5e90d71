//! Trait for looking up the latest version of a module

#[cfg(test)]
use mockall::automock;

use crate::module::error::LookupError;
use crate::module::types::ModuleInfo;

/// Fetches the latest version of a module from a proxy endpoint
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ModuleSource: Send + Sync {
    /// Fetches the latest version of `module` from the proxy at `endpoint`
    ///
    /// # Arguments
    /// * `endpoint` - Proxy base URL (e.g., "https://proxy.golang.org")
    /// * `module` - Module path as given by the user (e.g., "golang.org/x/text")
    ///
    /// # Returns
    /// * `Ok(ModuleInfo)` - The latest version, with `name` set to `module`
    /// * `Err(LookupError)` - If the request, the response or its body is unusable
    async fn fetch_latest(&self, endpoint: &str, module: &str) -> Result<ModuleInfo, LookupError>;
}
