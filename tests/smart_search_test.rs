//! Integration tests for catalog search and fallback suggestions.

use std::sync::Arc;

use butorkereso::error::Result;
use butorkereso::search::{ProductRecord, SearchEngine, SearchOptions};
use butorkereso::synonym::SynonymRegistry;
use butorkereso::{get_broaden_suggestions, normalize, smart_search};

fn sample_catalog() -> Vec<ProductRecord> {
    vec![
        ProductRecord::new("1", "Modern kanapé bézs", "Nappali > Kanapék", 150_000.0),
        ProductRecord::new("2", "Skandináv fotel", "Nappali > Fotelok", 80_000.0),
        ProductRecord::new("3", "Irodai szék", "Iroda > Székek", 45_000.0),
    ]
}

fn larger_catalog() -> Vec<ProductRecord> {
    vec![
        ProductRecord::new("k1", "Bézs sarokkanapé", "Nappali | Kanapék", 320_000.0),
        ProductRecord::new("k2", "Szürke bársony kanapé", "Nappali | Kanapék", 189_000.0)
            .with_sale_price(149_000.0),
        ProductRecord::new("k3", "Kinyitható kanapé, drapp", "Nappali | Kanapék", 99_000.0),
        ProductRecord::new("k4", "Chesterfield bőr kanapé", "Nappali | Kanapék", 450_000.0),
        ProductRecord::new("f1", "Zöld bársony fotel", "Nappali | Fotelok", 79_000.0)
            .with_original_price(99_000.0),
        ProductRecord::new("f2", "Rattan fotel", "Kert | Fotelok", 65_000.0),
        ProductRecord::new("x1", "Gurulós lábtartó", "Nappali | Fotelok", 15_000.0),
        ProductRecord::new("s1", "Fekete fém bárszék", "Konyha | Székek", 24_000.0),
        ProductRecord::new("s2", "Tölgyfa étkezőszék", "Étkező | Székek", 38_000.0),
        ProductRecord::new("t1", "Fehér TV-szekrény", "Nappali | TV-szekrények", 59_000.0),
        ProductRecord::new("t2", "Modern tálaló fehér", "Étkező | Szekrények", 129_000.0),
        ProductRecord::new("l1", "Arany állólámpa", "Nappali | Lámpák", 34_000.0),
    ]
}

fn engine() -> Result<SearchEngine> {
    Ok(SearchEngine::new(Arc::new(
        SynonymRegistry::builtin().build_index()?,
    )))
}

#[test]
fn test_kanape_is_found_first() -> Result<()> {
    let catalog = sample_catalog();
    let result = smart_search(&catalog, "kanapé", &SearchOptions::default());

    assert!(!result.results.is_empty());
    assert!(normalize(&result.results[0].name).contains("kanap"));

    Ok(())
}

#[test]
fn test_search_is_deterministic() -> Result<()> {
    let catalog = larger_catalog();
    let engine = engine()?;
    let options = SearchOptions::default();

    for query in ["kanapé", "bársony", "nappali", "fehér szekrény", "szék 40e alatt", "akciós"] {
        let first: Vec<&str> = engine
            .smart_search(&catalog, query, &options)
            .results
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        for _ in 0..5 {
            let again: Vec<&str> = engine
                .smart_search(&catalog, query, &options)
                .results
                .iter()
                .map(|r| r.id.as_str())
                .collect();
            assert_eq!(first, again, "query {query:?}");
        }
    }

    Ok(())
}

#[test]
fn test_ranking_order() -> Result<()> {
    let catalog = larger_catalog();
    let engine = engine()?;
    let ids = |query: &str| -> Vec<String> {
        engine
            .smart_search(&catalog, query, &SearchOptions::default())
            .results
            .iter()
            .map(|r| r.id.clone())
            .collect()
    };

    // all kanapé names match; cheapest effective price first
    assert_eq!(ids("kanapé"), vec!["k3", "k2", "k1", "k4"]);
    // facets are conjunctive
    assert_eq!(ids("bársony kanapé"), vec!["k2"]);
    assert_eq!(ids("drapp kanapé"), vec!["k3", "k1"]);
    assert_eq!(ids("tv-szekrény"), vec!["t1"]);
    // "tálaló" is a szekrény synonym in the name
    assert_eq!(ids("szekrény"), vec!["t1", "t2"]);
    assert_eq!(ids("nappali lámpa"), vec!["l1"]);
    // name hits before category-only hits, even when cheaper
    assert_eq!(ids("fotel"), vec!["f2", "f1", "x1"]);
    // category-only hits rank by price
    assert_eq!(ids("étkező"), vec!["s2", "t2"]);

    Ok(())
}

#[test]
fn test_compound_names_match_product_type() -> Result<()> {
    let catalog = vec![
        ProductRecord::new("1", "Chesterfield bőrkanapé", "Nappali", 300_000.0),
        ProductRecord::new("2", "Relaxfotel-kanapé", "Bútor", 200_000.0),
        ProductRecord::new("3", "Bőrkanapé", "Akció", 100_000.0),
    ];
    let result = engine()?.smart_search(&catalog, "kanapé", &SearchOptions::default());
    let ids: Vec<&str> = result.results.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "2", "1"]);
    assert!(result.did_you_mean.is_none());

    Ok(())
}

#[test]
fn test_seat_counts_are_not_prices() -> Result<()> {
    let catalog = vec![ProductRecord::new("1", "Kétszemélyes kanapé", "Nappali", 150_000.0)];
    let engine = engine()?;

    for query in ["kanapé max 3 személyes", "legfeljebb 2 személyes kanapé"] {
        let result = engine.smart_search(&catalog, query, &SearchOptions::default());
        assert_eq!(result.intent.price_range, None, "query {query:?}");
        assert_eq!(result.total, 1, "query {query:?}");
    }

    Ok(())
}

#[test]
fn test_price_sale_and_room_filters() -> Result<()> {
    let catalog = larger_catalog();
    let engine = engine()?;
    let options = SearchOptions::default();

    let result = engine.smart_search(&catalog, "kanapé 150e alatt", &options);
    let ids: Vec<&str> = result.results.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["k3", "k2"]);

    let result = engine.smart_search(&catalog, "olcsó fotel", &options);
    let ids: Vec<&str> = result.results.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["f1"]);

    let result = engine.smart_search(&catalog, "kerti fotel", &options);
    let ids: Vec<&str> = result.results.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["f2"]);

    let result = engine.smart_search(&catalog, "szék 30 és 40 ezer között", &options);
    let ids: Vec<&str> = result.results.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["s2"]);

    Ok(())
}

#[test]
fn test_no_match_path() -> Result<()> {
    let catalog = sample_catalog();
    let result = smart_search(&catalog, "xyznonexistent123", &SearchOptions::default());

    assert!(result.results.is_empty());
    assert_eq!(result.total, 0);
    // either no suggestion or a plain string
    if let Some(suggestion) = &result.did_you_mean {
        assert!(!suggestion.is_empty());
    }

    Ok(())
}

#[test]
fn test_typo_gets_corrected_query() -> Result<()> {
    let catalog = sample_catalog();
    let engine = engine()?;

    let result = engine.smart_search(&catalog, "modren kanapa", &SearchOptions::default());
    assert!(result.results.is_empty());
    assert_eq!(result.did_you_mean.as_deref(), Some("modern kanapé"));

    let corrected = result.did_you_mean.unwrap_or_default();
    let retry = engine.smart_search(&catalog, &corrected, &SearchOptions::default());
    assert_eq!(retry.results.len(), 1);

    Ok(())
}

#[test]
fn test_empty_catalog() -> Result<()> {
    let result = smart_search(&[], "kanapa", &SearchOptions::default());

    assert!(result.results.is_empty());
    assert_eq!(result.did_you_mean.as_deref(), Some("kanapé"));
    assert!(result.broaden_suggestions.is_empty());

    Ok(())
}

#[test]
fn test_broaden_suggestions_from_search() -> Result<()> {
    let catalog = larger_catalog();
    let engine = engine()?;
    let options = SearchOptions::default().max_suggestions(2);

    let result = engine.smart_search(&catalog, "zöld bőr kanapé 100e alatt", &options);
    assert!(result.results.is_empty());
    assert!(!result.broaden_suggestions.is_empty());
    assert!(result.broaden_suggestions.len() <= 2);

    for suggestion in &result.broaden_suggestions {
        let relaxed = engine.smart_search(&catalog, suggestion, &SearchOptions::default());
        assert!(relaxed.total > 0, "suggestion {suggestion:?} finds nothing");
    }

    Ok(())
}

#[test]
fn test_broaden_bounds() -> Result<()> {
    let query = "akciós modern szürke bársony kanapé nappaliba 200e alatt";
    for n in 0..10 {
        assert!(get_broaden_suggestions(query, 0, n).len() <= n);
    }
    assert!(get_broaden_suggestions(query, 10, 3).is_empty());
    assert!(get_broaden_suggestions(query, 1000, 3).is_empty());
    assert_eq!(get_broaden_suggestions(query, 3, 3).len(), 3);

    Ok(())
}

#[test]
fn test_catalog_from_json() -> Result<()> {
    let json = r#"[
        {"id": 1, "name": "Modern kanapé bézs", "category": "Nappali > Kanapék", "price": 150000},
        {"id": 2, "name": "Skandináv fotel", "category": "Nappali > Fotelok", "price": 80000, "salePrice": 69000}
    ]"#;
    let catalog: Vec<ProductRecord> = serde_json::from_str(json)?;

    let result = smart_search(&catalog, "akciós fotel", &SearchOptions::default());
    assert_eq!(result.results.len(), 1);
    assert_eq!(result.results[0].id, "2");

    let json = serde_json::to_value(&result)?;
    assert_eq!(json["results"][0]["salePrice"], serde_json::json!(69000.0));
    assert_eq!(json["intent"]["isOnSale"], serde_json::json!(true));

    Ok(())
}
