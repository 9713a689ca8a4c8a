//! Command fragments and the part groups that hold them
//!
//! A fragment is one composable piece of a generated command: the base
//! command, an operation, a resource type, or a flag. Each carries the
//! short token that goes into the alias name, the full text that goes into
//! the real command, and the co-occurrence rules that decide which
//! combinations are legal.

/// One composable piece of a generated command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Short token concatenated into the alias name (the `g` in `kg`).
    pub short: String,
    /// Literal text substituted into the real command (`get`).
    pub full: String,
    /// Valid only when at least one of these short forms is also present
    /// in the combination. Empty means no requirement.
    pub requires: Vec<String>,
    /// Invalid when any of these short forms is also present.
    pub excludes: Vec<String>,
}

impl Fragment {
    /// Create a fragment with no co-occurrence rules.
    pub fn new(short: impl Into<String>, full: impl Into<String>) -> Self {
        Self {
            short: short.into(),
            full: full.into(),
            requires: Vec::new(),
            excludes: Vec::new(),
        }
    }

    /// Require at least one of `shorts` to be present in any combination
    /// containing this fragment.
    pub fn requires(mut self, shorts: &[&str]) -> Self {
        self.requires = shorts.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Reject any combination that pairs this fragment with one of `shorts`.
    pub fn excludes(mut self, shorts: &[&str]) -> Self {
        self.excludes = shorts.iter().map(|s| s.to_string()).collect();
        self
    }
}

/// An ordered collection of fragments sharing one positional role.
///
/// The two flags set the arity policy: a non-optional group must
/// contribute at least one fragment to every combination, and an
/// exactly-one group contributes at most one. A free-arity group
/// (`exactly_one == false`) contributes every internal ordering of every
/// subset of its fragments.
#[derive(Debug, Clone)]
pub struct PartGroup {
    /// Candidate fragments for this position, in declaration order.
    pub fragments: Vec<Fragment>,
    /// Whether the group may contribute nothing.
    pub optional: bool,
    /// Whether the group is restricted to a single pick.
    pub exactly_one: bool,
}
