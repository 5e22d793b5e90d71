//! Per-module lookup loop over the resolved proxy endpoints

use std::io::{self, Write};
use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::module::source::ModuleSource;
use crate::output::{OutputFields, write_info};

/// How many endpoints are queried per module
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LookupMode {
    /// Stop at the first endpoint that returns a result
    #[default]
    FirstMatch,
    /// Query every endpoint and print every result
    EveryEndpoint,
}

/// Outcome of a [`Finder::find`] run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupSummary {
    /// Number of records printed
    pub printed: usize,
    /// Modules for which no endpoint returned a result
    pub unresolved: Vec<String>,
}

/// Queries each module against the endpoints, in order, and prints results
pub struct Finder {
    source: Arc<dyn ModuleSource>,
    endpoints: Vec<String>,
    mode: LookupMode,
}

impl Finder {
    pub fn new(source: Arc<dyn ModuleSource>, endpoints: Vec<String>, mode: LookupMode) -> Self {
        Self {
            source,
            endpoints,
            mode,
        }
    }

    /// Looks up every module sequentially.
    ///
    /// Lookup failures are logged and skipped; only write errors are returned.
    pub async fn find<W: Write>(
        &self,
        modules: &[String],
        fields: &OutputFields,
        out: &mut W,
    ) -> io::Result<LookupSummary> {
        let mut summary = LookupSummary::default();

        if self.endpoints.is_empty() {
            warn!("No proxy endpoints to query");
        }

        for module in modules {
            let mut found = false;

            for endpoint in &self.endpoints {
                match self.source.fetch_latest(endpoint, module).await {
                    Ok(info) => {
                        write_info(out, fields, &info)?;
                        summary.printed += 1;
                        found = true;

                        if self.mode == LookupMode::FirstMatch {
                            break;
                        }
                    }
                    Err(e) => {
                        error!("{}: {}", endpoint, e);
                    }
                }
            }

            if found {
                debug!("Resolved {}", module);
            } else {
                warn!("No proxy returned a version for {}", module);
                summary.unresolved.push(module.clone());
            }
        }

        out.flush()?;
        Ok(summary)
    }
}
