//! Command implementations for the butorkereso CLI.

use std::time::Instant;

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::search::{SearchEngine, load_catalog};

/// Execute a CLI command.
pub fn execute_command(args: ButorkeresoArgs) -> Result<()> {
    let config = load_config(&args)?;
    let engine = config.build_engine()?;

    match &args.command {
        Command::Search(search_args) => search_catalog(search_args, &engine, &config, &args),
        Command::Intent(intent_args) => show_intent(intent_args, &engine, &args),
        Command::Expand(expand_args) => expand_words(expand_args, &engine, &args),
        Command::Suggest(suggest_args) => suggest_word(suggest_args, &engine, &args),
        Command::Broaden(broaden_args) => broaden_query(broaden_args, &engine, &config, &args),
    }
}

/// Configuration from `--config`, with `--synonyms` taking precedence.
fn load_config(args: &ButorkeresoArgs) -> Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            EngineConfig::load_from_file(path)?
        }
        None => EngineConfig::default(),
    };
    if let Some(path) = &args.synonyms {
        config.synonyms_path = Some(path.clone());
    }
    Ok(config)
}

/// Search a catalog file.
fn search_catalog(
    args: &SearchArgs,
    engine: &SearchEngine,
    config: &EngineConfig,
    cli_args: &ButorkeresoArgs,
) -> Result<()> {
    let catalog = load_catalog(&args.catalog)?;
    info!("Loaded {} products from {}", catalog.len(), args.catalog.display());

    let mut options = config.search.clone();
    if args.limit.is_some() {
        options.limit = args.limit;
    }
    if let Some(max) = args.max_suggestions {
        options.max_suggestions = max;
    }
    options.broaden &= !args.no_broaden;
    options.did_you_mean &= !args.no_did_you_mean;

    let start_time = Instant::now();
    let result = engine.smart_search(&catalog, &args.query, &options);
    let duration = start_time.elapsed();

    output_result(
        &format!("Searching {} products for '{}'", catalog.len(), args.query),
        &SearchOutput {
            query: args.query.clone(),
            total: result.total,
            results: result.results,
            intent: result.intent,
            did_you_mean: result.did_you_mean,
            broaden_suggestions: result.broaden_suggestions,
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

/// Show the parsed intent of a query.
fn show_intent(args: &IntentArgs, engine: &SearchEngine, cli_args: &ButorkeresoArgs) -> Result<()> {
    let intent = engine.parse_intent(&args.query);
    let rendered = intent.to_query_string(engine.index());

    output_result(
        &format!("Intent of '{}'", args.query),
        &IntentOutput {
            query: args.query.clone(),
            intent,
            rendered,
        },
        cli_args,
    )
}

/// Expand words through the synonym registry.
fn expand_words(args: &ExpandArgs, engine: &SearchEngine, cli_args: &ButorkeresoArgs) -> Result<()> {
    let expanded = engine.index().expand_with_synonyms(&args.words);

    output_result(
        &format!("Expansion of {} words", args.words.len()),
        &ExpansionOutput {
            words: args.words.clone(),
            expanded,
        },
        cli_args,
    )
}

/// Suggest a spelling correction.
fn suggest_word(args: &SuggestArgs, engine: &SearchEngine, cli_args: &ButorkeresoArgs) -> Result<()> {
    let suggestion = engine.did_you_mean().suggest(&args.word);

    output_result(
        &format!("Spelling suggestion for '{}'", args.word),
        &SuggestionOutput {
            word: args.word.clone(),
            suggestion,
        },
        cli_args,
    )
}

/// Suggest relaxed queries without a catalog.
fn broaden_query(
    args: &BroadenArgs,
    engine: &SearchEngine,
    config: &EngineConfig,
    cli_args: &ButorkeresoArgs,
) -> Result<()> {
    let suggestions = engine
        .broaden_advisor(config.search.plenty_threshold)
        .suggest(&args.query, args.count, args.max);

    output_result(
        &format!("Broader queries for '{}'", args.query),
        &BroadenOutput {
            query: args.query.clone(),
            current_result_count: args.count,
            suggestions,
        },
        cli_args,
    )
}
