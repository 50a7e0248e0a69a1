// Compiled-in deny rules for Bash command filtering.
// Order matters: the first matching rule is the one reported.

/// A deny rule before compilation.
#[derive(Debug, Clone, Copy)]
pub struct RuleSpec {
    pub name: &'static str,
    pub pattern: &'static str,
    pub reason: &'static str,
}

/// Bash deny rules — regex patterns searched anywhere in the command text.
pub const BASH_DENY_RULES: &[RuleSpec] = &[
    // Node.js tool followed by a stderr-to-stdout redirect
    RuleSpec {
        name: "node-stderr-redirect",
        pattern: r"(pnpm|npm|node|tsx|jest).*2>&1",
        reason: "Redirecting stderr (2>&1) from Node.js tools crashes the WSL terminal",
    },
    // Node.js tool followed by a pipe
    RuleSpec {
        name: "node-pipe",
        pattern: r"(pnpm|npm|node|tsx|jest).*\|",
        reason: "Piping output from Node.js tools crashes the WSL terminal",
    },
    RuleSpec {
        name: "pnpm-test-separator",
        pattern: r"pnpm\s+test\s+.*--\s+",
        reason: "Passing arguments after `--` to pnpm test crashes the WSL terminal",
    },
];
