//! Output formatting for CLI commands.

use std::fmt::Write as _;

use serde::Serialize;

use crate::cli::args::{ButorkeresoArgs, OutputFormat};
use crate::error::Result;
use crate::intent::SearchIntent;
use crate::search::ProductRecord;

/// Result structure for catalog searches.
#[derive(Debug, Serialize)]
pub struct SearchOutput<'a> {
    pub query: String,
    pub total: usize,
    pub results: Vec<&'a ProductRecord>,
    pub intent: SearchIntent,
    pub did_you_mean: Option<String>,
    pub broaden_suggestions: Vec<String>,
    pub duration_ms: u64,
}

/// Result structure for intent parsing.
#[derive(Debug, Serialize)]
pub struct IntentOutput {
    pub query: String,
    pub intent: SearchIntent,
    /// The intent rendered back into a query.
    pub rendered: String,
}

/// Result structure for synonym expansion.
#[derive(Debug, Serialize)]
pub struct ExpansionOutput {
    pub words: Vec<String>,
    pub expanded: Vec<String>,
}

/// Result structure for spelling suggestions.
#[derive(Debug, Serialize)]
pub struct SuggestionOutput {
    pub word: String,
    pub suggestion: Option<String>,
}

/// Result structure for broaden suggestions.
#[derive(Debug, Serialize)]
pub struct BroadenOutput {
    pub query: String,
    pub current_result_count: usize,
    pub suggestions: Vec<String>,
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn to_human(&self) -> String;
}

impl HumanOutput for SearchOutput<'_> {
    fn to_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Search Results:");
        let _ = writeln!(out, "═══════════════");
        for (i, record) in self.results.iter().enumerate() {
            let _ = write!(out, "{}. {} ({})", i + 1, record.name, format_price(record.effective_price()));
            if record.is_discounted() {
                let _ = write!(out, " [akciós]");
            }
            let _ = writeln!(out);
            if !record.category.is_empty() {
                let _ = writeln!(out, "   {}", record.category);
            }
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "Total hits: {}", self.total);
        let _ = writeln!(out, "Search time: {}ms", self.duration_ms);
        if let Some(suggestion) = &self.did_you_mean {
            let _ = writeln!(out, "Did you mean: {suggestion}?");
        }
        if !self.broaden_suggestions.is_empty() {
            let _ = writeln!(out, "Try also:");
            for suggestion in &self.broaden_suggestions {
                let _ = writeln!(out, "  {suggestion}");
            }
        }
        out
    }
}

impl HumanOutput for IntentOutput {
    fn to_human(&self) -> String {
        let mut out = format_intent(&self.intent);
        let _ = writeln!(out, "rendered: {}", self.rendered);
        out
    }
}

impl HumanOutput for ExpansionOutput {
    fn to_human(&self) -> String {
        let mut out = String::new();
        for term in &self.expanded {
            let _ = writeln!(out, "{term}");
        }
        out
    }
}

impl HumanOutput for SuggestionOutput {
    fn to_human(&self) -> String {
        match &self.suggestion {
            Some(suggestion) => format!("Did you mean: {suggestion}?\n"),
            None => format!("No suggestion for '{}'\n", self.word),
        }
    }
}

impl HumanOutput for BroadenOutput {
    fn to_human(&self) -> String {
        if self.suggestions.is_empty() {
            return "No broader queries to suggest\n".to_string();
        }
        let mut out = String::new();
        for suggestion in &self.suggestions {
            let _ = writeln!(out, "{suggestion}");
        }
        out
    }
}

fn format_intent(intent: &SearchIntent) -> String {
    let mut out = String::new();
    let sets = [
        ("product types", &intent.product_types),
        ("colors", &intent.colors),
        ("styles", &intent.styles),
        ("materials", &intent.materials),
        ("rooms", &intent.rooms),
    ];
    for (label, values) in sets {
        if !values.is_empty() {
            let values: Vec<&str> = values.iter().map(String::as_str).collect();
            let _ = writeln!(out, "{label}: {}", values.join(", "));
        }
    }
    if let Some(range) = &intent.price_range {
        let min = range.min.map(format_price).unwrap_or_else(|| "-".to_string());
        let max = range.max.map(format_price).unwrap_or_else(|| "-".to_string());
        let _ = writeln!(out, "price: {min} .. {max}");
    }
    if intent.is_on_sale {
        let _ = writeln!(out, "on sale: yes");
    }
    if !intent.residual_terms.is_empty() {
        let _ = writeln!(out, "free text: {}", intent.residual_terms.join(" "));
    }
    out
}

/// Format a forint amount with thousands separators ("150 000 Ft").
pub fn format_price(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{grouped} Ft")
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &ButorkeresoArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(message: &str, result: &T, args: &ButorkeresoArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    print!("{}", result.to_human());
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &ButorkeresoArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::PriceRange;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(150_000.0), "150 000 Ft");
        assert_eq!(format_price(999.0), "999 Ft");
        assert_eq!(format_price(1_500_000.0), "1 500 000 Ft");
    }

    #[test]
    fn test_intent_human_output() {
        let mut intent = SearchIntent::new();
        intent.colors.insert("bezs".to_string());
        intent.price_range = Some(PriceRange::above(80_000.0));
        let output = IntentOutput {
            query: "bézs 80e felett".to_string(),
            intent,
            rendered: "bézs 80e felett".to_string(),
        };
        let text = output.to_human();
        assert!(text.contains("colors: bezs"));
        assert!(text.contains("price: 80 000 Ft .. -"));
        assert!(text.contains("rendered: bézs 80e felett"));
    }

    #[test]
    fn test_search_human_output() {
        let record = ProductRecord::new("1", "Skandináv fotel", "Nappali > Fotelok", 80_000.0)
            .with_sale_price(70_000.0);
        let output = SearchOutput {
            query: "fotel".to_string(),
            total: 1,
            results: vec![&record],
            intent: SearchIntent::new(),
            did_you_mean: None,
            broaden_suggestions: vec!["fotel".to_string()],
            duration_ms: 0,
        };
        let text = output.to_human();
        assert!(text.contains("1. Skandináv fotel (70 000 Ft) [akciós]"));
        assert!(text.contains("Total hits: 1"));
        assert!(text.contains("Try also:"));
    }

    #[test]
    fn test_suggestion_output_serializes() {
        let output = SuggestionOutput {
            word: "kanapa".to_string(),
            suggestion: Some("kanapé".to_string()),
        };
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["suggestion"], "kanapé");
        assert_eq!(output.to_human(), "Did you mean: kanapé?\n");
    }
}
