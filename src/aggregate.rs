//! # Ingredient Aggregation
//!
//! Combines a sequence of ingredient records into a deduplicated,
//! correctly-pluralized shopping list. Records group by their singularized
//! name and the base unit of their parsed quantity; compatible numeric
//! quantities sum, fuzzy quantities collapse into a single "some" term, and
//! unrecognized quantity text passes through verbatim.
//!
//! The whole pipeline is a pure function with no error paths: a quantity
//! that cannot be parsed becomes its own display term instead of failing
//! the aggregation.
//!
//! ## Usage
//!
//! ```rust
//! use grocer::aggregate::{combine, IngredientRecord};
//!
//! let ingredients = vec![
//!     IngredientRecord::new("egg", "1"),
//!     IngredientRecord::new("egg", "2"),
//! ];
//! let list = combine(&ingredients);
//! assert_eq!(list[0].name, "eggs");
//! assert_eq!(list[0].unit, "3");
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::inflect::{pluralize, singularize};
use crate::quantity::{self, ParsedQuantity};
use crate::units::{self, Dimension, Unit};

/// A raw ingredient line as supplied by the surrounding system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRecord {
    /// Free-text ingredient name; may contain hyphens for compound words.
    pub name: String,
    /// Free-text quantity ("2 tbs", "4-5", "some", "to taste").
    pub quantity: String,
}

impl IngredientRecord {
    pub fn new(name: &str, quantity: &str) -> Self {
        Self {
            name: name.to_string(),
            quantity: quantity.to_string(),
        }
    }
}

/// One combined shopping-list entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedIngredient {
    /// `" + "`-joined display of the combined quantities.
    pub unit: String,
    /// Singular name, pluralized when the combined count exceeds one.
    pub name: String,
}

/// Quantity terms that fold together into a single "some" display term.
const COLLAPSIBLE_TERMS: &[&str] = &["sprinkle", "some", "pinch"];

/// Accumulator for one (name, base unit) group.
#[derive(Debug)]
enum Bucket {
    /// Sum of compatible quantities, kept in the first-seen unit.
    Numeric { total: f64, unit: Unit },
    /// Presence marker for fuzzy quantities.
    Fuzzy,
    /// Verbatim unparsed quantity text; duplicates collapse.
    Raw(String),
}

impl Bucket {
    fn from_quantity(quantity: ParsedQuantity) -> Self {
        match quantity {
            ParsedQuantity::Numeric { magnitude, unit } => Bucket::Numeric {
                total: magnitude,
                unit,
            },
            ParsedQuantity::Fuzzy { .. } => Bucket::Fuzzy,
            ParsedQuantity::Unparsed { raw } => Bucket::Raw(raw),
        }
    }

    fn absorb(&mut self, quantity: &ParsedQuantity) {
        if let (
            Bucket::Numeric { total, unit },
            ParsedQuantity::Numeric {
                magnitude,
                unit: incoming,
            },
        ) = (self, quantity)
        {
            // Same base unit means same dimension; re-express the incoming
            // amount in this bucket's first-seen unit before adding.
            *total += magnitude * incoming.to_base / unit.to_base;
        }
        // Fuzzy and raw buckets are presence markers.
    }
}

/// Grouping key for a parsed quantity. Numeric quantities key on their base
/// unit, fuzzy ones share the "some" bucket, and each distinct unparsed
/// string is its own bucket so it is never merged with numeric quantities.
fn bucket_key(quantity: &ParsedQuantity) -> String {
    match quantity {
        ParsedQuantity::Unparsed { raw } => raw.clone(),
        other => units::base_unit(other),
    }
}

/// Combine ingredient records into a shopping list, preserving the
/// first-seen order of distinct singular names.
pub fn combine(ingredients: &[IngredientRecord]) -> Vec<CombinedIngredient> {
    let mut combined: Vec<(String, Vec<(String, Bucket)>)> = Vec::new();

    for ingredient in ingredients {
        let parsed = units::normalize(quantity::parse(&ingredient.quantity));
        let key = bucket_key(&parsed);

        let name = ingredient.name.replace('-', " ");
        let singular = singularize(&name);

        debug!(
            "ingredient '{}' ({}) -> name '{}', bucket '{}'",
            ingredient.name, ingredient.quantity, singular, key
        );

        let index = match combined.iter().position(|(n, _)| *n == singular) {
            Some(index) => index,
            None => {
                combined.push((singular, Vec::new()));
                combined.len() - 1
            }
        };
        let buckets = &mut combined[index].1;
        match buckets.iter_mut().find(|(k, _)| *k == key) {
            Some((_, bucket)) => bucket.absorb(&parsed),
            None => buckets.push((key, Bucket::from_quantity(parsed))),
        }
    }

    combined
        .into_iter()
        .map(|(name, buckets)| render_entry(name, &buckets))
        .collect()
}

fn render_entry(name: String, buckets: &[(String, Bucket)]) -> CombinedIngredient {
    let mut terms: Vec<String> = Vec::new();
    let mut some = false;
    let mut plural = false;

    for (_, bucket) in buckets {
        match bucket {
            Bucket::Numeric { total, unit } => {
                // Only dimensionless counts drive pluralization; "2 cups"
                // of flour is still flour.
                if unit.dimension == Dimension::Count && *total > 1.0 {
                    plural = true;
                }
                let rendered = render_amount(*total, unit);
                if is_collapsible(&rendered) {
                    some = true;
                } else {
                    terms.push(rendered);
                }
            }
            Bucket::Fuzzy => some = true,
            Bucket::Raw(raw) => {
                if is_collapsible(raw) {
                    some = true;
                } else {
                    terms.push(raw.clone());
                }
            }
        }
    }

    // tablespoon, sprinkle, some, pinch => tablespoon, some
    if some {
        terms.push("some".to_string());
    }

    let display_name = if plural { pluralize(&name) } else { name };
    CombinedIngredient {
        unit: terms.join(" + "),
        name: display_name,
    }
}

fn is_collapsible(term: &str) -> bool {
    COLLAPSIBLE_TERMS.iter().any(|fuzzy| term.contains(fuzzy))
}

fn render_amount(total: f64, unit: &Unit) -> String {
    let magnitude = if total.fract() == 0.0 && total.abs() < 1e15 {
        format!("{}", total as i64)
    } else {
        format!("{total}")
    };
    if unit.symbol.is_empty() {
        magnitude
    } else {
        format!("{magnitude} {}", unit.symbol)
    }
}
