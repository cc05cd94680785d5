//! # bitdisplay CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use bitdisplay_cli::{classify, compose};
use clap::Parser;

/// bitdisplay: deterministic `.bit` account display decisions.
#[derive(Parser, Debug)]
#[command(name = "bitdisplay", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Identicon palette, figures and grid placement.
    Identicon(compose::IdenticonArgs),
    /// Layered avatar unit choices.
    Avatar(compose::AvatarArgs),
    /// Card font size and line breaks.
    Layout(compose::LayoutArgs),
    /// Marketplace category traits.
    Classify(classify::LabelArgs),
    /// Character set of a label.
    Charset(classify::LabelArgs),
    /// ERC-721 metadata document.
    Metadata(classify::MetadataArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(command = ?cli.command, "dispatching");

    let value = match &cli.command {
        Commands::Identicon(args) => compose::run_identicon(args)?,
        Commands::Avatar(args) => compose::run_avatar(args)?,
        Commands::Layout(args) => compose::run_layout(args)?,
        Commands::Classify(args) => classify::run_classify(args)?,
        Commands::Charset(args) => classify::run_charset(args)?,
        Commands::Metadata(args) => classify::run_metadata(args)?,
    };

    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_avatar_size() {
        let cli = Cli::try_parse_from(["bitdisplay", "avatar", "abc.bit", "--size", "lg"]).unwrap();
        match cli.command {
            Commands::Avatar(args) => assert_eq!(args.size, bitdisplay_core::AvatarSize::Lg),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_size_rejected() {
        assert!(Cli::try_parse_from(["bitdisplay", "avatar", "abc.bit", "--size", "huge"]).is_err());
    }
}
