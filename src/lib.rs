//! wsl-guard — PreToolUse hook that keeps crash-prone Node.js commands out of
//! WSL terminals.
//!
//! One process handles one tool call: read the JSON payload from stdin, match
//! the Bash command against compiled-in deny rules, exit 0 (allow) or 2
//! (block).

pub mod config;
pub mod error;
pub mod filters;
pub mod hooks;
pub mod logging;

pub use config::Config;
