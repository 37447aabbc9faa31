//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use newsdesk::{CategoryId, MainGroup};

/// Newsdesk: category classification for authoring forms and listing filters
#[derive(Parser)]
#[command(name = "newsdesk")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Catalog file or URL (default: NEWSDESK_CATALOG / NEWSDESK_CATALOG_URL)
    #[arg(long, global = true, value_name = "PATH|URL")]
    pub catalog: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the main categories with their sub-category counts
    Groups {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Classify content: pick a main category and toggle sub-categories
    Classify {
        /// Main category (key or label, e.g. "politics", "Life & Style")
        #[arg(short, long, value_parser = parse_group)]
        group: MainGroup,

        /// Sub-category id to toggle, in order (repeatable)
        #[arg(short, long = "toggle", value_name = "ID")]
        toggle: Vec<CategoryId>,

        /// Sub-category id to mark as primary
        #[arg(short, long, value_name = "ID")]
        primary: Option<CategoryId>,

        /// Save the resulting selection as a draft
        #[arg(long, value_name = "PATH")]
        draft: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a listing filter across main categories
    Filter {
        /// Category id to toggle, in order (repeatable)
        #[arg(short, long = "toggle", value_name = "ID")]
        toggle: Vec<CategoryId>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the state of a saved draft
    Status {
        /// Path to the draft file
        #[arg(value_name = "DRAFT")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Serve the classification API over HTTP
    Serve {
        /// Port for web server
        #[arg(short, long, default_value = "3142")]
        port: u16,
    },
}

fn parse_group(value: &str) -> Result<MainGroup, String> {
    value.parse::<MainGroup>().map_err(|_| {
        let keys: Vec<_> = MainGroup::ALL.iter().map(|g| g.key()).collect();
        format!("Unknown main category: {}. Use one of: {}.", value, keys.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_classify_collects_toggles_in_order() {
        let cli = Cli::try_parse_from([
            "newsdesk", "classify", "--group", "Politics", "-t", "10", "-t", "12", "--primary", "12",
        ])
        .unwrap();

        match cli.command {
            Commands::Classify {
                group,
                toggle,
                primary,
                ..
            } => {
                assert_eq!(group, MainGroup::Politics);
                assert_eq!(toggle, vec![10, 12]);
                assert_eq!(primary, Some(12));
            }
            _ => panic!("expected classify"),
        }
    }

    #[test]
    fn test_unknown_group_is_rejected() {
        let result = Cli::try_parse_from(["newsdesk", "classify", "--group", "weather"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_catalog_flag() {
        let cli = Cli::try_parse_from(["newsdesk", "groups", "--catalog", "cats.json"]).unwrap();
        assert_eq!(cli.catalog.as_deref(), Some("cats.json"));
    }
}
