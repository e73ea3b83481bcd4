//! Command line argument parsing for the butorkereso CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// butorkereso - Hungarian furniture search
#[derive(Parser, Debug, Clone)]
#[command(name = "butorkereso")]
#[command(about = "Intent parsing, synonym expansion and catalog search for furniture queries")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ButorkeresoArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// External synonym file (JSON object: root -> [synonyms])
    #[arg(long, value_name = "FILE", env = "BUTORKERESO_SYNONYMS", global = true)]
    pub synonyms: Option<PathBuf>,

    /// Engine configuration file (JSON)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ButorkeresoArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search a product catalog
    Search(SearchArgs),

    /// Show the parsed intent of a query
    Intent(IntentArgs),

    /// Expand words through the synonym registry
    Expand(ExpandArgs),

    /// Suggest a spelling correction
    Suggest(SuggestArgs),

    /// Suggest relaxed queries
    Broaden(BroadenArgs),
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Catalog file (JSON array of products)
    #[arg(short, long, value_name = "CATALOG_FILE")]
    pub catalog: PathBuf,

    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Maximum number of results to return
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Maximum number of broaden suggestions
    #[arg(long)]
    pub max_suggestions: Option<usize>,

    /// Disable broaden suggestions
    #[arg(long)]
    pub no_broaden: bool,

    /// Disable "Did you mean?" suggestions
    #[arg(long)]
    pub no_did_you_mean: bool,
}

/// Arguments for intent parsing
#[derive(Parser, Debug, Clone)]
pub struct IntentArgs {
    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,
}

/// Arguments for synonym expansion
#[derive(Parser, Debug, Clone)]
pub struct ExpandArgs {
    /// Words to expand
    #[arg(value_name = "WORDS", required = true)]
    pub words: Vec<String>,
}

/// Arguments for spelling suggestions
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Word to correct
    #[arg(value_name = "WORD")]
    pub word: String,
}

/// Arguments for broaden suggestions
#[derive(Parser, Debug, Clone)]
pub struct BroadenArgs {
    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Number of results the query currently returns
    #[arg(short, long, default_value = "0")]
    pub count: usize,

    /// Maximum number of suggestions
    #[arg(short, long, default_value = "3")]
    pub max: usize,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_command() {
        let args = ButorkeresoArgs::try_parse_from([
            "butorkereso",
            "search",
            "--catalog",
            "catalog.json",
            "bézs kanapé",
            "--limit",
            "20",
        ])
        .unwrap();

        if let Command::Search(search_args) = args.command {
            assert_eq!(search_args.catalog, PathBuf::from("catalog.json"));
            assert_eq!(search_args.query, "bézs kanapé");
            assert_eq!(search_args.limit, Some(20));
            assert!(!search_args.no_broaden);
        } else {
            panic!("Expected Search command");
        }
    }

    #[test]
    fn test_broaden_command() {
        let args = ButorkeresoArgs::try_parse_from([
            "butorkereso",
            "broaden",
            "modern kanapé 100e alatt",
            "--count",
            "2",
            "--max",
            "5",
        ])
        .unwrap();

        if let Command::Broaden(broaden_args) = args.command {
            assert_eq!(broaden_args.count, 2);
            assert_eq!(broaden_args.max, 5);
        } else {
            panic!("Expected Broaden command");
        }
    }

    #[test]
    fn test_expand_requires_words() {
        assert!(ButorkeresoArgs::try_parse_from(["butorkereso", "expand"]).is_err());
        let args =
            ButorkeresoArgs::try_parse_from(["butorkereso", "expand", "szófa", "bézs"]).unwrap();
        if let Command::Expand(expand_args) = args.command {
            assert_eq!(expand_args.words, vec!["szófa", "bézs"]);
        } else {
            panic!("Expected Expand command");
        }
    }

    #[test]
    fn test_global_flags() {
        let args = ButorkeresoArgs::try_parse_from([
            "butorkereso",
            "suggest",
            "kanapa",
            "-vv",
            "--format",
            "json",
            "--pretty",
        ])
        .unwrap();
        assert_eq!(args.verbosity(), 2);
        assert_eq!(args.output_format, OutputFormat::Json);
        assert!(args.pretty);

        let args = ButorkeresoArgs::try_parse_from(["butorkereso", "-q", "intent", "x"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }
}
