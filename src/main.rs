use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{CommandFactory, Parser};
use tracing::{debug, error, warn};

use find_latest_gopkg::config::{DEFAULT_GOPROXY, GOPROXY_ENV, LogSettings};
use find_latest_gopkg::finder::{Finder, LookupMode};
use find_latest_gopkg::logging;
use find_latest_gopkg::module::GoProxyClient;
use find_latest_gopkg::output::OutputFields;
use find_latest_gopkg::proxy::{GoCommand, resolve_endpoints};

#[derive(Parser)]
#[command(name = "find-latest-gopkg")]
#[command(
    about = "Query the Go module proxy for the latest version of one or more modules",
    override_usage = "find-latest-gopkg [OPTIONS] MODULE [MODULE ...]"
)]
struct Cli {
    /// Print the module name
    #[arg(short = 'N', long)]
    name: bool,

    /// Print the module Version field
    #[arg(short = 'V', long)]
    version: bool,

    /// Print the Time field
    #[arg(short = 'T', long)]
    time: bool,

    /// Print the Origin.URL field
    #[arg(short = 'r', long)]
    repo: bool,

    /// Print the Origin.Ref field
    #[arg(short = 'R', long = "ref", alias = "tag")]
    reference: bool,

    /// Print the Origin.Hash field
    #[arg(short = 'H', long)]
    hash: bool,

    /// Print the entire JSON response
    #[arg(short = 'D', long)]
    dump: bool,

    /// Go module mirror endpoint (go env GOPROXY). Leave empty to use default
    #[arg(short = 'g', long)]
    goproxy: Option<String>,

    /// Query every proxy endpoint and print each result instead of stopping at the first
    #[arg(short = 'a', long)]
    all: bool,

    /// Log level
    #[arg(short = 'l', long)]
    log_level: Option<String>,

    /// Increase logging verbosity (debug)
    #[arg(short = 'd', long)]
    debug: bool,

    /// Increase logging verbosity (info)
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Module paths to look up
    #[arg(value_name = "MODULE")]
    modules: Vec<String>,
}

impl Cli {
    fn output_fields(&self) -> OutputFields {
        OutputFields {
            name: self.name,
            version: self.version,
            time: self.time,
            repo: self.repo,
            reference: self.reference,
            hash: self.hash,
            dump: self.dump,
        }
    }

    fn lookup_mode(&self) -> LookupMode {
        if self.all {
            LookupMode::EveryEndpoint
        } else {
            LookupMode::FirstMatch
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let settings = LogSettings::from_flags(cli.debug, cli.verbose, cli.log_level.as_deref());
    let dispatch = logging::build_dispatch(&settings);

    tracing::dispatcher::with_default(&dispatch, || {
        logging::log_settings(&settings);
        run(cli)
    })
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    if cli.modules.is_empty() {
        eprint!("{}", Cli::command().render_help());
        return Ok(ExitCode::FAILURE);
    }

    let fields = cli.output_fields();
    if fields.is_empty() {
        warn!("No output fields selected, see --help");
    }

    let env_goproxy = std::env::var(GOPROXY_ENV).ok();
    let endpoints = resolve_endpoints(
        cli.goproxy.as_deref(),
        env_goproxy.as_deref(),
        &GoCommand::default(),
        DEFAULT_GOPROXY,
    )
    .inspect_err(|e| error!("{}", e))?;

    let source = GoProxyClient::new()?;
    let finder = Finder::new(Arc::new(source), endpoints.endpoints, cli.lookup_mode());

    let summary = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(finder.find(&cli.modules, &fields, &mut io::stdout().lock()))?;

    debug!("{:?}", summary);
    Ok(ExitCode::SUCCESS)
}
