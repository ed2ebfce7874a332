//! Runner configuration from environment and arguments.

use std::path::PathBuf;

/// Where scenarios are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioSource {
    /// The built-in reference scenarios.
    Demo,
    /// JSON on standard input.
    Stdin,
    /// JSON file on disk.
    File(PathBuf),
}

impl ScenarioSource {
    /// Interpret a command-line or environment value.
    pub fn parse(value: &str) -> Self {
        match value {
            "demo" | "" => Self::Demo,
            "-" => Self::Stdin,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

/// Configuration for a runner invocation.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Scenario input
    pub source: ScenarioSource,

    /// Reject unknown operation codes and out-of-range station ids
    pub strict: bool,

    /// Log filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            source: ScenarioSource::Demo,
            strict: false,
            log_filter: "powergrid=info,powergrid_topology=info".to_string(),
        }
    }
}

impl RunnerConfig {
    /// Create config from environment variables with defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let source = lookup("POWERGRID_SCENARIO")
            .map(|s| ScenarioSource::parse(s.trim()))
            .unwrap_or(defaults.source);

        let strict = lookup("POWERGRID_STRICT")
            .map(|s| parse_flag(&s))
            .unwrap_or(defaults.strict);

        let log_filter = lookup("POWERGRID_LOG").unwrap_or(defaults.log_filter);

        Self {
            source,
            strict,
            log_filter,
        }
    }

    /// Override settings from command-line arguments (program name excluded).
    ///
    /// `--strict` enables strict mode; the first other argument is the
    /// scenario source.
    pub fn with_args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut source_seen = false;
        for arg in args {
            match arg.as_str() {
                "--strict" => self.strict = true,
                _ if !source_seen => {
                    self.source = ScenarioSource::parse(&arg);
                    source_seen = true;
                }
                _ => tracing::warn!(%arg, "ignoring extra argument"),
            }
        }
        self
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
