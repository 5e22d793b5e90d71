//! Proxy test utilities

use std::io::{self, Write};
use std::process::Command;
use std::sync::{Arc, Mutex};

use find_latest_gopkg::proxy::GoEnv;
use mockito::{Mock, ServerGuard};
use tracing_subscriber::fmt::MakeWriter;

/// Environment variables that would otherwise leak into the binary under test
const ISOLATED_ENV: &[&str] = &[
    "GOPROXY",
    "LOG_LEVEL",
    "RUST_LOG",
    "HTTP_PROXY",
    "http_proxy",
    "HTTPS_PROXY",
    "https_proxy",
    "ALL_PROXY",
    "all_proxy",
];

/// `GoEnv` that answers with a fixed value
pub struct FixedGoEnv(pub Option<String>);

impl GoEnv for FixedGoEnv {
    fn goproxy(&self) -> Option<String> {
        self.0.clone()
    }
}

/// `@latest` body as served by proxy.golang.org
pub fn latest_body(version: &str, url: &str) -> String {
    format!(
        r#"{{"Version":"{version}","Time":"2023-01-01T00:00:00Z","Origin":{{"VCS":"git","URL":"{url}","Ref":"refs/tags/{version}","Hash":"abc123"}}}}"#
    )
}

/// Registers a successful `@latest` response for `module`
pub fn mock_latest(server: &mut ServerGuard, module: &str, version: &str) -> Mock {
    server
        .mock("GET", format!("/{}/@v/@latest", module).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(latest_body(version, &format!("https://{}", module)))
        .create()
}

/// Registers a JSON 404 for `module`
pub fn mock_not_found(server: &mut ServerGuard, module: &str) -> Mock {
    server
        .mock("GET", format!("/{}/@v/@latest", module).as_str())
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":"not found"}"#)
        .create()
}

/// Command for the compiled binary with proxy and logging variables cleared
pub fn find_latest_command() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_find-latest-gopkg"));
    for name in ISOLATED_ENV {
        command.env_remove(name);
    }
    command
}

/// Log sink shared between a test and the subscriber writing into it
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
