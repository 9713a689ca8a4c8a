//! Alias rendering and shell dialects
//!
//! A finished combination turns into an [`Alias`]: the concatenated short
//! forms become the name, the space-joined full forms become the command.
//! Each supported shell wraps that pair in its own declaration syntax.

use std::collections::HashSet;
use std::str::FromStr;

use thiserror::Error;

use crate::fragment::Fragment;

/// Raised when the requested dialect is not one we can render.
#[derive(Debug, Error)]
#[error("unsupported shell: {0} (options are bash, zsh, fish)")]
pub struct UnsupportedShell(pub String);

/// Output dialects with distinct alias declaration syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
}

impl Shell {
    pub fn as_str(&self) -> &str {
        match self {
            Shell::Bash => "bash",
            Shell::Zsh => "zsh",
            Shell::Fish => "fish",
        }
    }

    /// Render one alias as a declaration line in this dialect. Fish has no
    /// plain aliases, so it gets an abbreviation instead.
    pub fn format_alias(&self, alias: &Alias) -> String {
        match self {
            Shell::Bash | Shell::Zsh => format!("alias {}='{}'", alias.name, alias.command),
            Shell::Fish => format!("abbr --add {} \"{}\"", alias.name, alias.command),
        }
    }
}

impl FromStr for Shell {
    type Err = UnsupportedShell;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bash" => Ok(Shell::Bash),
            "zsh" => Ok(Shell::Zsh),
            "fish" => Ok(Shell::Fish),
            _ => Err(UnsupportedShell(s.to_string())),
        }
    }
}

/// A finished alias: the short name and the command it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    pub name: String,
    pub command: String,
}

impl Alias {
    /// Collapse a fragment sequence into its alias name and command text.
    pub fn from_sequence(sequence: &[&Fragment]) -> Alias {
        Alias {
            name: sequence.iter().map(|f| f.short.as_str()).collect(),
            command: sequence
                .iter()
                .map(|f| f.full.as_str())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

/// Names that appear more than once, one entry per repeat occurrence.
/// Later definitions silently shadow earlier ones once a shell loads the
/// output, so repeats are worth a warning but never fatal.
pub fn collisions(aliases: &[Alias]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut repeats = Vec::new();
    for alias in aliases {
        if !seen.insert(alias.name.as_str()) {
            repeats.push(alias.name.as_str());
        }
    }
    repeats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumerate;
    use crate::fragment::{Fragment, PartGroup};

    fn alias(name: &str, command: &str) -> Alias {
        Alias {
            name: name.to_string(),
            command: command.to_string(),
        }
    }

    #[test]
    fn test_bash_and_zsh_share_alias_syntax() {
        let kg = alias("kg", "kubectl get");
        assert_eq!(Shell::Bash.format_alias(&kg), "alias kg='kubectl get'");
        assert_eq!(Shell::Zsh.format_alias(&kg), "alias kg='kubectl get'");
    }

    #[test]
    fn test_fish_renders_abbreviations() {
        let kg = alias("kg", "kubectl get");
        assert_eq!(Shell::Fish.format_alias(&kg), "abbr --add kg \"kubectl get\"");
    }

    #[test]
    fn test_shell_names_parse_case_insensitively() {
        assert_eq!("bash".parse::<Shell>().unwrap(), Shell::Bash);
        assert_eq!("ZSH".parse::<Shell>().unwrap(), Shell::Zsh);
        assert_eq!("Fish".parse::<Shell>().unwrap(), Shell::Fish);
        assert_eq!(Shell::Bash.as_str(), "bash");
    }

    #[test]
    fn test_unknown_shell_is_rejected_with_options() {
        let err = "powershell".parse::<Shell>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported shell: powershell (options are bash, zsh, fish)",
        );
    }

    #[test]
    fn test_alias_concatenates_names_and_joins_commands() {
        let k = Fragment::new("k", "kubectl");
        let g = Fragment::new("g", "get");
        let po = Fragment::new("po", "pods");
        let alias = Alias::from_sequence(&[&k, &g, &po]);
        assert_eq!(alias.name, "kgpo");
        assert_eq!(alias.command, "kubectl get pods");
    }

    #[test]
    fn test_collisions_empty_for_unique_names() {
        let aliases = vec![alias("k", "kubectl"), alias("kg", "kubectl get")];
        assert!(collisions(&aliases).is_empty());
    }

    #[test]
    fn test_repeated_name_counts_once_per_repeat() {
        let twice = vec![alias("kg", "kubectl get"), alias("kg", "kubectl goose")];
        assert_eq!(collisions(&twice), vec!["kg"]);

        let thrice = vec![
            alias("kg", "kubectl get"),
            alias("kg", "kubectl goose"),
            alias("kg", "kubectl gander"),
        ];
        assert_eq!(collisions(&thrice), vec!["kg", "kg"]);
    }

    #[test]
    fn test_colliding_fragments_still_both_render() {
        // Two fragments sharing a short form produce two distinct aliases
        // under the same name; the repeat is reported, not suppressed.
        let parts = vec![PartGroup {
            fragments: vec![
                Fragment::new("kg", "kubectl get"),
                Fragment::new("kg", "kubectl kustomize"),
            ],
            optional: false,
            exactly_one: true,
        }];
        let aliases: Vec<Alias> = enumerate::combinations(&parts)
            .iter()
            .map(|c| Alias::from_sequence(c))
            .collect();
        assert_eq!(aliases.len(), 2);
        assert_eq!(collisions(&aliases), vec!["kg"]);
        assert_eq!(aliases[0].command, "kubectl get");
        assert_eq!(aliases[1].command, "kubectl kustomize");
    }
}
