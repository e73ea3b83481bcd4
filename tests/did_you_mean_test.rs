//! Integration tests for spelling suggestions.

use butorkereso::error::Result;
use butorkereso::get_did_you_mean_suggestion;
use butorkereso::spelling::{DidYouMean, SpellingConfig};
use butorkereso::synonym::SynonymRegistry;

#[test]
fn test_misspelled_product_type() -> Result<()> {
    let suggestion = get_did_you_mean_suggestion("kanapa");
    assert!(suggestion.is_some());
    assert!(suggestion.unwrap_or_default().contains("kanap"));

    assert_eq!(get_did_you_mean_suggestion("fotle").as_deref(), Some("fotel"));
    assert_eq!(get_did_you_mean_suggestion("Szekrny").as_deref(), Some("szekrény"));

    Ok(())
}

#[test]
fn test_known_words_get_no_suggestion() -> Result<()> {
    for word in ["kanapé", "kanape", "szófa", "Fotel", "kanapék", "nappaliba", "bézs"] {
        assert_eq!(get_did_you_mean_suggestion(word), None, "word {word:?}");
    }

    Ok(())
}

#[test]
fn test_unfixable_words() -> Result<()> {
    for word in ["", "ab", "xyznonexistent123", "qqqqqqqq", "2024"] {
        assert_eq!(get_did_you_mean_suggestion(word), None, "word {word:?}");
    }

    Ok(())
}

#[test]
fn test_query_correction_keeps_price_phrase() -> Result<()> {
    let index = SynonymRegistry::builtin().build_index()?;
    let did_you_mean = DidYouMean::new(&index);

    assert_eq!(
        did_you_mean.correct_query("skandinav fotle 80e felett").as_deref(),
        Some("skandinav fotel 80e felett")
    );
    assert_eq!(did_you_mean.correct_query("modern kanapé"), None);

    Ok(())
}

#[test]
fn test_strict_config_limits_distance() -> Result<()> {
    let index = SynonymRegistry::builtin().build_index()?;
    let strict = DidYouMean::with_config(
        &index,
        SpellingConfig {
            max_distance_long: 1,
            ..SpellingConfig::default()
        },
    );

    // two edits away from "szekrény"
    assert_eq!(strict.suggest("szkerny"), None);
    assert_eq!(strict.suggest("fotle").as_deref(), Some("fotel"));

    Ok(())
}
