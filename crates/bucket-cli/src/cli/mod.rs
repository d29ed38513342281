//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "bucket-setup",
    bin_name = "bucket-setup",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Bootstrap an Open Buddhist University content bucket",
    long_about = "bucket-setup scaffolds a GitHub-Pages-hosted content repository: \
                  it derives the repository name from the git remote, writes the \
                  static scaffold files, commits and pushes them, and enables \
                  GitHub Pages.",
    after_help = "EXAMPLES:\n\
        \x20 bucket-setup setup            # full bootstrap of the current repo\n\
        \x20 bucket-setup setup --dry-run  # show what would be written\n\
        \x20 bucket-setup resolve          # just print the owner/repo pair\n\
        \x20 bucket-setup completions bash > /usr/share/bash-completion/completions/bucket-setup",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold, commit, push, and enable Pages for the current repository.
    #[command(
        about = "Run the full bootstrap",
        after_help = "EXAMPLES:\n\
            \x20 bucket-setup setup\n\
            \x20 bucket-setup setup --yes\n\
            \x20 bucket-setup setup --dry-run"
    )]
    Setup(SetupArgs),

    /// Print the owner and repository name derived from the git remote.
    #[command(about = "Resolve the GitHub owner/repo from the remote")]
    Resolve,

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 bucket-setup completions bash > ~/.local/share/bash-completion/completions/bucket-setup\n\
            \x20 bucket-setup completions zsh  > ~/.zfunc/_bucket-setup\n\
            \x20 bucket-setup completions fish > ~/.config/fish/completions/bucket-setup.fish"
    )]
    Completions(CompletionsArgs),
}

// ── setup ─────────────────────────────────────────────────────────────────────

/// Arguments for `bucket-setup setup`.
#[derive(Debug, Args)]
pub struct SetupArgs {
    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Skip confirmation and run immediately")]
    pub yes: bool,

    /// Preview what would be written without touching anything.
    #[arg(
        long = "dry-run",
        help = "Show what would be written without writing, committing, or pushing"
    )]
    pub dry_run: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `bucket-setup completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_setup_command() {
        let cli = Cli::parse_from(["bucket-setup", "setup", "--yes"]);
        match cli.command {
            Commands::Setup(args) => {
                assert!(args.yes);
                assert!(!args.dry_run);
            }
            _ => panic!("expected Setup command"),
        }
    }

    #[test]
    fn parse_dry_run() {
        let cli = Cli::parse_from(["bucket-setup", "setup", "--dry-run"]);
        match cli.command {
            Commands::Setup(args) => assert!(args.dry_run),
            _ => panic!("expected Setup command"),
        }
    }

    #[test]
    fn parse_resolve_command() {
        let cli = Cli::parse_from(["bucket-setup", "resolve"]);
        assert!(matches!(cli.command, Commands::Resolve));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["bucket-setup", "--quiet", "--verbose", "resolve"]);
        assert!(result.is_err());
    }

    #[test]
    fn no_arguments_is_an_error() {
        assert!(Cli::try_parse_from(["bucket-setup"]).is_err());
    }
}
