//! PreToolUse hook for the assistant's Bash tool
//!
//! The host runs this binary once per tool call and pipes the call to stdin:
//!
//! ```json
//! {
//!   "tool": "Bash",
//!   "params": { "command": "pnpm test 2>&1 | tail" }
//! }
//! ```
//!
//! Exit code 0 = allow, 2 = block (with an explanation on stderr).
//! Only the managed tool is inspected; every other tool passes through.
//! Input that cannot be read or decoded is allowed, so a broken hook never
//! stops legitimate work.

mod event;
mod runner;

pub use event::ToolInvocation;
pub use runner::{EXIT_ALLOW, EXIT_BLOCK, Gatekeeper, HookDecision};
