//! kubealias - Shell alias generation for kubectl
//!
//! "Stop typing kubectl, start typing k."
//!
//! Usage:
//!   kubealias [SHELL]           Print aliases for SHELL (default: bash)
//!   kubealias zsh               Same alias syntax as bash
//!   kubealias fish              Abbreviations instead of aliases

use anyhow::Result;
use clap::Parser;

use kubealias::{enumerate, grammar, render, Alias, Shell};

/// License block prepended to redirected output, embedded verbatim from
/// the sibling resource file.
const LICENSE_HEADER: &str = include_str!("license_header.txt");

/// Kubealias - generate kubectl aliases for your shell
#[derive(Parser)]
#[command(name = "kubealias")]
#[command(about = "Generate kubectl shell aliases for bash, zsh, and fish")]
#[command(version)]
#[command(after_help = "\
EXAMPLES:
    kubealias                    Print bash aliases to stdout
    kubealias zsh                Print zsh aliases
    kubealias fish > ~/.config/fish/conf.d/kubectl_abbr.fish

INSTALL:
    kubealias bash > ~/.kubectl_aliases
    echo 'source ~/.kubectl_aliases' >> ~/.bashrc

NOTES:
    Redirected output starts with a license header so generated files
    carry their provenance. Alias name collisions are reported on stderr
    and never stop generation.")]
struct Cli {
    /// Shell dialect to emit (bash, zsh, or fish)
    #[arg(default_value = "bash")]
    shell: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let shell: Shell = cli.shell.parse()?;

    let parts = grammar::kubectl();
    let combinations = enumerate::combinations(&parts);
    let aliases: Vec<Alias> = combinations
        .iter()
        .map(|c| Alias::from_sequence(c))
        .collect();

    for name in render::collisions(&aliases) {
        eprintln!("Warning: alias collision detected: {}", name);
    }

    if stdout_redirected() {
        println!("{}", LICENSE_HEADER);
    }

    for alias in &aliases {
        println!("{}", shell.format_alias(alias));
    }

    Ok(())
}

/// Check if stdout is being redirected rather than read on a terminal
fn stdout_redirected() -> bool {
    !std::io::IsTerminal::is_terminal(&std::io::stdout())
}
