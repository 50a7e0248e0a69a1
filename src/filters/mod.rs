//! Command filters for the managed Bash tool.
//!
//! A filter is an ordered list of [`CommandRule`]s. Each rule is a regex that
//! is *searched* for anywhere in the raw command text; the first rule that
//! matches decides the block and is the one reported back to the user.
//!
//! The built-in rules live in [`hardcoded`] and are compiled once per process.

pub mod hardcoded;

use once_cell::sync::Lazy;
use regex::Regex;

use hardcoded::{BASH_DENY_RULES, RuleSpec};

/// A compiled deny rule.
#[derive(Debug, Clone)]
pub struct CommandRule {
    /// Stable identifier used in logs
    pub name: &'static str,
    pub pattern: Regex,
    /// Human-readable explanation shown when the rule blocks a command
    pub reason: &'static str,
}

impl CommandRule {
    fn compile(spec: &RuleSpec) -> Result<Self, regex::Error> {
        Ok(Self {
            name: spec.name,
            pattern: Regex::new(spec.pattern)?,
            reason: spec.reason,
        })
    }

    pub fn is_match(&self, command: &str) -> bool {
        self.pattern.is_match(command)
    }
}

/// Ordered set of deny rules, first match wins.
#[derive(Debug, Clone)]
pub struct CommandFilter {
    rules: Vec<CommandRule>,
}

static BUILTIN: Lazy<CommandFilter> = Lazy::new(|| {
    CommandFilter::from_specs(BASH_DENY_RULES).expect("built-in deny rules are valid regexes")
});

impl CommandFilter {
    /// The compiled-in rule set.
    pub fn builtin() -> &'static CommandFilter {
        &BUILTIN
    }

    /// Compile a filter from rule definitions, keeping their order.
    pub fn from_specs(specs: &[RuleSpec]) -> Result<Self, regex::Error> {
        let rules = specs
            .iter()
            .map(CommandRule::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[CommandRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Return the first rule matching `command`, if any.
    pub fn first_match(&self, command: &str) -> Option<&CommandRule> {
        self.rules.iter().find(|rule| rule.is_match(command))
    }
}
