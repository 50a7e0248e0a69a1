//! Hook decision engine

use std::io::{Read, Write};

use tracing::{debug, info, warn};

use super::event::ToolInvocation;
use crate::config::{Config, MessageStyle};
use crate::error::{GatekeeperError, Result};
use crate::filters::{CommandFilter, CommandRule};

/// Exit status telling the host to let the tool call run.
pub const EXIT_ALLOW: u8 = 0;
/// Exit status telling the host to refuse the tool call.
pub const EXIT_BLOCK: u8 = 2;

/// Decision returned for one hook invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookDecision {
    /// Allow the operation to proceed
    Allow,
    /// Block the command; `rule` names the deny rule that matched
    Block {
        command: String,
        rule: &'static str,
        reason: &'static str,
    },
}

impl HookDecision {
    /// Check if this decision allows the operation
    pub fn is_allowed(&self) -> bool {
        matches!(self, HookDecision::Allow)
    }

    /// Process exit status the host interprets
    pub fn exit_code(&self) -> u8 {
        match self {
            HookDecision::Allow => EXIT_ALLOW,
            HookDecision::Block { .. } => EXIT_BLOCK,
        }
    }

    fn block(command: &str, rule: &CommandRule) -> Self {
        HookDecision::Block {
            command: command.to_string(),
            rule: rule.name,
            reason: rule.reason,
        }
    }
}

/// Inspects managed tool invocations against a command filter
pub struct Gatekeeper {
    config: Config,
    filter: &'static CommandFilter,
}

impl Gatekeeper {
    /// Create a gatekeeper using the built-in deny rules
    pub fn new(config: Config) -> Self {
        Self {
            config,
            filter: CommandFilter::builtin(),
        }
    }

    /// Decide on an already decoded invocation
    pub fn decide(&self, invocation: &ToolInvocation) -> HookDecision {
        if !invocation.is_tool(&self.config.managed_tool) {
            debug!("Tool '{}' is not managed, allowing", invocation.tool);
            return HookDecision::Allow;
        }

        let command = invocation.command();
        match self.filter.first_match(command) {
            Some(rule) => {
                info!(rule = rule.name, command, "Blocked command");
                HookDecision::block(command, rule)
            }
            None => {
                debug!(command, "No deny rule matched, allowing");
                HookDecision::Allow
            }
        }
    }

    /// Decode a raw payload and decide on it
    pub fn evaluate(&self, raw: &str) -> Result<HookDecision> {
        debug!(input = raw, "Received hook input");
        let invocation = ToolInvocation::from_json(raw).inspect_err(|e| {
            warn!(error = %e, input = raw, "Undecodable hook input, allowing");
        })?;
        Ok(self.decide(&invocation))
    }

    /// Read the whole payload from `input`, decide, and explain the outcome on
    /// `diag`. Never fails: read and decode errors are reported and the
    /// command is allowed.
    pub fn run<R: Read, W: Write>(&self, mut input: R, diag: &mut W) -> HookDecision {
        let mut raw = String::new();
        if let Err(e) = input.read_to_string(&mut raw) {
            let err = GatekeeperError::from(e);
            warn!(error = %err, "Could not read hook input, allowing");
            report(diag, &format!("Hook: {}", err));
            return HookDecision::Allow;
        }

        let decision = match self.evaluate(&raw) {
            Ok(decision) => decision,
            Err(e) => {
                report(diag, &format!("Hook: {}", e));
                HookDecision::Allow
            }
        };

        if let Some(message) = self.block_message(&decision) {
            report(diag, &message);
        }

        decision
    }

    /// Text written to stderr for a blocked command
    pub fn block_message(&self, decision: &HookDecision) -> Option<String> {
        let HookDecision::Block {
            command, reason, ..
        } = decision
        else {
            return None;
        };

        Some(match self.config.message_style {
            MessageStyle::Terse => format!("❌ BLOCKED WSL-unsafe command: {}", command),
            MessageStyle::Detailed => format!(
                "❌ BLOCKED: This command will crash in WSL!\n\
                 Command: {command}\n\
                 \n\
                 Problem: {reason}\n\
                 Solution: Run the command directly without pipes/redirects\n\
                 \n\
                 Examples:\n  \
                 ❌ pnpm test 2>&1 | tail\n  \
                 ✅ pnpm test\n\
                 \n\
                 See: CLAUDE.md for WSL constraints"
            ),
        })
    }
}

impl Default for Gatekeeper {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Best-effort write to the diagnostic stream, flushed immediately
fn report<W: Write>(diag: &mut W, message: &str) {
    if let Err(e) = writeln!(diag, "{}", message).and_then(|_| diag.flush()) {
        warn!("Failed to write hook diagnostic: {}", e);
    }
}
