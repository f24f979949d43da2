//! # Quantity Parsing
//!
//! Turns free-text quantity strings ("2 tbs", "4-5", "1/2 cup", "some")
//! into a [`ParsedQuantity`]. The parser is total: text it cannot read as a
//! fuzzy term or a unit expression is preserved verbatim as
//! [`ParsedQuantity::Unparsed`] and excluded from numeric combination.

use std::sync::LazyLock;

use log::trace;
use regex::Regex;

use crate::units::{self, Unit};

/// Non-numeric quantity descriptors that cannot be summed arithmetically.
pub const FUZZY_QUANTITIES: &[&str] = &["some", "sprinkle"];

/// A parsed quantity string.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedQuantity {
    /// A magnitude with a (possibly dimensionless) unit.
    Numeric { magnitude: f64, unit: Unit },
    /// A member of the fuzzy vocabulary; keeps the caller's original casing.
    Fuzzy { label: String },
    /// Text the unit-expression grammar could not read, preserved verbatim.
    Unparsed { raw: String },
}

/// Regex patterns for parsing different quantity formats
struct QuantityPatterns {
    /// Matches fractions: "1/2", "2 1/4"
    fraction: Regex,
    /// Matches the full unit expression: magnitude + optional unit word
    expression: Regex,
}

impl QuantityPatterns {
    fn new() -> Self {
        Self {
            fraction: Regex::new(r"^(?:(\d+)\s+)?(\d+)\s*/\s*(\d+)$")
                .expect("fraction pattern should be valid"),
            expression: Regex::new(
                r"^(?P<mag>(?:\d+\s+)?\d+\s*/\s*\d+|\d+(?:\.\d+)?)\s*(?P<unit>[A-Za-z.]+)?$",
            )
            .expect("expression pattern should be valid"),
        }
    }
}

static QUANTITY_PATTERNS: LazyLock<QuantityPatterns> = LazyLock::new(QuantityPatterns::new);

/// Parse a quantity string.
///
/// Fuzzy vocabulary membership is checked first, then hyphenated ranges are
/// reduced to their upper bound, then the unit-expression grammar runs. Any
/// failure falls back to [`ParsedQuantity::Unparsed`] with the original
/// text, never an error.
pub fn parse(text: &str) -> ParsedQuantity {
    let trimmed = text.trim();

    if FUZZY_QUANTITIES.contains(&trimmed.to_lowercase().as_str()) {
        return ParsedQuantity::Fuzzy {
            label: trimmed.to_string(),
        };
    }

    match parse_expression(upper_bound(trimmed)) {
        Some(quantity) => quantity,
        None => {
            trace!("quantity '{text}' did not parse as a unit expression");
            ParsedQuantity::Unparsed {
                raw: text.to_string(),
            }
        }
    }
}

/// Take the "4-5" in "4-5 medium button mushrooms" and keep the max.
fn upper_bound(text: &str) -> &str {
    match text.rsplit('-').next() {
        Some(last) => last,
        None => text,
    }
}

fn parse_expression(text: &str) -> Option<ParsedQuantity> {
    let captures = QUANTITY_PATTERNS.expression.captures(text.trim())?;
    let magnitude = parse_magnitude(captures.name("mag")?.as_str())?;

    let unit = match captures.name("unit") {
        Some(word) => units::resolve(word.as_str())?,
        None => Unit::count(),
    };
    Some(ParsedQuantity::Numeric { magnitude, unit })
}

fn parse_magnitude(text: &str) -> Option<f64> {
    let text = text.trim();
    if let Some(captures) = QUANTITY_PATTERNS.fraction.captures(text) {
        let whole: f64 = match captures.get(1) {
            Some(m) => m.as_str().parse().ok()?,
            None => 0.0,
        };
        let numerator: f64 = captures[2].parse().ok()?;
        let denominator: f64 = captures[3].parse().ok()?;
        if denominator == 0.0 {
            return None;
        }
        return Some(whole + numerator / denominator);
    }
    text.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Dimension;

    fn magnitude_of(q: &ParsedQuantity) -> f64 {
        match q {
            ParsedQuantity::Numeric { magnitude, .. } => *magnitude,
            other => panic!("expected numeric quantity, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_bare_number() {
        let q = parse("3");
        assert_eq!(magnitude_of(&q), 3.0);
        match &q {
            ParsedQuantity::Numeric { unit, .. } => {
                assert_eq!(unit.dimension, Dimension::Count);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(magnitude_of(&parse("1.5")), 1.5);
        assert_eq!(magnitude_of(&parse("0.25")), 0.25);
    }

    #[test]
    fn test_parse_with_unit() {
        match parse("2 tbs") {
            ParsedQuantity::Numeric { magnitude, unit } => {
                assert_eq!(magnitude, 2.0);
                assert_eq!(unit.symbol, "tablespoon");
            }
            other => panic!("unexpected {other:?}"),
        }
        match parse("150 grams") {
            ParsedQuantity::Numeric { magnitude, unit } => {
                assert_eq!(magnitude, 150.0);
                assert_eq!(unit.symbol, "gram");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_parse_attached_unit() {
        match parse("500g") {
            ParsedQuantity::Numeric { magnitude, unit } => {
                assert_eq!(magnitude, 500.0);
                assert_eq!(unit.symbol, "gram");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_parse_fractions() {
        assert_eq!(magnitude_of(&parse("1/2")), 0.5);
        assert_eq!(magnitude_of(&parse("2 1/4")), 2.25);
        match parse("1/2 cup") {
            ParsedQuantity::Numeric { magnitude, unit } => {
                assert_eq!(magnitude, 0.5);
                assert_eq!(unit.symbol, "cup");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_parse_range_keeps_upper_bound() {
        // Pinned behavior: "4-5" behaves as "5", not as an average.
        assert_eq!(magnitude_of(&parse("4-5")), 5.0);
        match parse("2-3 tbs") {
            ParsedQuantity::Numeric { magnitude, unit } => {
                assert_eq!(magnitude, 3.0);
                assert_eq!(unit.symbol, "tablespoon");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_parse_fuzzy_vocabulary() {
        assert_eq!(
            parse("some"),
            ParsedQuantity::Fuzzy {
                label: "some".to_string()
            }
        );
        // Case-insensitive membership, original casing kept.
        assert_eq!(
            parse("Sprinkle"),
            ParsedQuantity::Fuzzy {
                label: "Sprinkle".to_string()
            }
        );
    }

    #[test]
    fn test_parse_unrecognized_falls_back_verbatim() {
        assert_eq!(
            parse("to taste"),
            ParsedQuantity::Unparsed {
                raw: "to taste".to_string()
            }
        );
        assert_eq!(
            parse("a pinch"),
            ParsedQuantity::Unparsed {
                raw: "a pinch".to_string()
            }
        );
        // Unknown unit word: the grammar matches but the vocabulary misses.
        assert_eq!(
            parse("2 glugs"),
            ParsedQuantity::Unparsed {
                raw: "2 glugs".to_string()
            }
        );
        assert_eq!(
            parse(""),
            ParsedQuantity::Unparsed {
                raw: "".to_string()
            }
        );
    }

    #[test]
    fn test_parse_division_by_zero_falls_back() {
        assert_eq!(
            parse("1/0"),
            ParsedQuantity::Unparsed {
                raw: "1/0".to_string()
            }
        );
    }

    #[test]
    fn test_parse_pinch_is_numeric_before_normalization() {
        // The composed picoinch survives parsing; the fold to fuzzy happens
        // in units::normalize.
        match parse("1 pinch") {
            ParsedQuantity::Numeric { magnitude, unit } => {
                assert_eq!(magnitude, 1.0);
                assert_eq!(unit.symbol, units::PINCH_ALIAS);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
