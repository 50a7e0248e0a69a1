use std::path::PathBuf;

/// Name of the diagnostic log written to the system temp directory.
pub const DEBUG_LOG_FILE_NAME: &str = "hook_debug.log";

/// Gatekeeper settings. All values are compiled in; nothing is read from
/// disk or the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Tool name whose invocations are inspected; everything else passes through
    pub managed_tool: String,

    /// How a block is explained on stderr
    pub message_style: MessageStyle,

    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MessageStyle {
    /// Multi-line explanation with remediation guidance
    #[default]
    Detailed,
    /// Single line naming the command
    Terse,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// tracing filter directive for the diagnostic log
    pub level: String,

    /// Append-only diagnostic log; `None` disables the file sink
    pub file: Option<PathBuf>,
}

fn default_managed_tool() -> String {
    "Bash".to_string()
}
fn default_log_level() -> String {
    "debug".to_string()
}
fn default_log_file() -> Option<PathBuf> {
    Some(std::env::temp_dir().join(DEBUG_LOG_FILE_NAME))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            managed_tool: default_managed_tool(),
            message_style: MessageStyle::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}
