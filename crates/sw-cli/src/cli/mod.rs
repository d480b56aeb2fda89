use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `stockwatch` binary.
#[derive(Debug, Parser)]
#[command(
    name = "stockwatch",
    version,
    about = "Stockwatch - restock alerts from a Shopify catalog"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Table coloring: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to ./stockwatch.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            color: self.color,
            quiet: self.quiet,
            verbose: self.verbose,
            config: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["stockwatch", "--format", "table", "--verbose", "urgent"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Urgent));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["stockwatch", "category", "quilt", "--format", "raw", "-q"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        match cli.command {
            Commands::Category(args) => assert_eq!(args.slug, "quilt"),
            other => panic!("expected category, got {other:?}"),
        }
    }

    #[test]
    fn category_requires_slug() {
        assert!(Cli::try_parse_from(["stockwatch", "category"]).is_err());
    }

    #[test]
    fn probe_limit_defaults_to_five() {
        let cli = Cli::try_parse_from(["stockwatch", "probe"]).expect("cli should parse");
        match cli.command {
            Commands::Probe(args) => assert_eq!(args.limit, 5),
            other => panic!("expected probe, got {other:?}"),
        }
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["stockwatch", "--format", "xml", "urgent"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["stockwatch", "--config", "/tmp/sw.toml", "serve"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.config.as_deref(), Some("/tmp/sw.toml"));
        assert!(matches!(cli.command, Commands::Serve(ref args) if args.bind.is_none()));
    }
}
