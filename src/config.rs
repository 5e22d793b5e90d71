use std::str::FromStr;

use tracing::Level;

// =============================================================================
// Proxy-related constants
// =============================================================================

/// GOPROXY value used when neither the flag, the environment nor `go env` provide one
pub const DEFAULT_GOPROXY: &str = "https://proxy.golang.org,direct";

/// Environment variable inherited from the Go toolchain
pub const GOPROXY_ENV: &str = "GOPROXY";

/// Path suffix appended to `{endpoint}/{module}` to ask for the latest version
pub const LATEST_SUFFIX: &str = "@v/@latest";

// =============================================================================
// Logging-related constants
// =============================================================================

/// Environment variable consulted when no logging flag is given
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Level used when nothing else selects one
pub const DEFAULT_LOG_LEVEL: Level = Level::INFO;

/// Where the effective log level came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelSource {
    DebugFlag,
    VerboseFlag,
    LevelFlag,
    Environment,
    Default,
}

/// Effective logging configuration derived from the CLI flags and `LOG_LEVEL`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: Level,
    pub source: LevelSource,
    /// Level name given with `--log-level`, kept so overrides can be reported
    pub requested: Option<String>,
    /// Set when a level name could not be parsed and the default was used instead
    pub unrecognized: Option<String>,
}

impl LogSettings {
    /// Resolves the log level from the CLI flags, reading `LOG_LEVEL` from the process
    /// environment only when no flag selects a level.
    pub fn from_flags(debug: bool, verbose: bool, level_name: Option<&str>) -> Self {
        Self::with_env(
            debug,
            verbose,
            level_name,
            std::env::var(LOG_LEVEL_ENV).ok(),
        )
    }

    /// Precedence: `--debug`, `--verbose`, `--log-level`, `LOG_LEVEL`, default.
    pub fn with_env(
        debug: bool,
        verbose: bool,
        level_name: Option<&str>,
        env_level: Option<String>,
    ) -> Self {
        let requested = level_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        if debug {
            return Self::fixed(Level::DEBUG, LevelSource::DebugFlag, requested);
        }
        if verbose {
            return Self::fixed(Level::INFO, LevelSource::VerboseFlag, requested);
        }
        if let Some(name) = requested {
            return Self::parsed(&name, LevelSource::LevelFlag, Some(name.clone()));
        }

        match env_level
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
        {
            Some(name) => Self::parsed(name, LevelSource::Environment, None),
            None => Self::fixed(DEFAULT_LOG_LEVEL, LevelSource::Default, None),
        }
    }

    fn fixed(level: Level, source: LevelSource, requested: Option<String>) -> Self {
        Self {
            level,
            source,
            requested,
            unrecognized: None,
        }
    }

    fn parsed(name: &str, source: LevelSource, requested: Option<String>) -> Self {
        match parse_level(name) {
            Some(level) => Self::fixed(level, source, requested),
            None => Self {
                level: DEFAULT_LOG_LEVEL,
                source,
                requested,
                unrecognized: Some(name.to_string()),
            },
        }
    }
}

/// Parses a level name, accepting the aliases other Go tooling uses (`warning`, `fatal`).
pub fn parse_level(name: &str) -> Option<Level> {
    match name.trim().to_ascii_lowercase().as_str() {
        "warning" => Some(Level::WARN),
        "fatal" | "panic" => Some(Level::ERROR),
        other => Level::from_str(other).ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("debug", Some(Level::DEBUG))]
    #[case("INFO", Some(Level::INFO))]
    #[case("warn", Some(Level::WARN))]
    #[case("warning", Some(Level::WARN))]
    #[case(" error ", Some(Level::ERROR))]
    #[case("fatal", Some(Level::ERROR))]
    #[case("trace", Some(Level::TRACE))]
    #[case("loud", None)]
    fn parse_level_returns_expected(#[case] name: &str, #[case] expected: Option<Level>) {
        assert_eq!(parse_level(name), expected);
    }

    #[test]
    fn debug_flag_overrides_log_level_name() {
        let settings = LogSettings::with_env(true, true, Some("error"), Some("warn".into()));

        assert_eq!(settings.level, Level::DEBUG);
        assert_eq!(settings.source, LevelSource::DebugFlag);
        assert_eq!(settings.requested.as_deref(), Some("error"));
    }

    #[test]
    fn verbose_flag_overrides_log_level_name() {
        let settings = LogSettings::with_env(false, true, Some("error"), None);

        assert_eq!(settings.level, Level::INFO);
        assert_eq!(settings.source, LevelSource::VerboseFlag);
    }

    #[test]
    fn log_level_name_beats_environment() {
        let settings = LogSettings::with_env(false, false, Some("warn"), Some("debug".into()));

        assert_eq!(settings.level, Level::WARN);
        assert_eq!(settings.source, LevelSource::LevelFlag);
    }

    #[test]
    fn environment_is_used_when_no_flag_is_set() {
        let settings = LogSettings::with_env(false, false, None, Some("error".into()));

        assert_eq!(settings.level, Level::ERROR);
        assert_eq!(settings.source, LevelSource::Environment);
    }

    #[test]
    fn blank_values_fall_back_to_default() {
        let settings = LogSettings::with_env(false, false, Some("  "), Some("".into()));

        assert_eq!(settings.level, DEFAULT_LOG_LEVEL);
        assert_eq!(settings.source, LevelSource::Default);
        assert_eq!(settings.requested, None);
    }

    #[test]
    fn unknown_level_name_is_reported_and_defaults() {
        let settings = LogSettings::with_env(false, false, Some("chatty"), None);

        assert_eq!(settings.level, DEFAULT_LOG_LEVEL);
        assert_eq!(settings.unrecognized.as_deref(), Some("chatty"));
    }
}
