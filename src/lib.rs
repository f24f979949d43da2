//! # Grocer
//!
//! English noun inflection paired with a quantity-aware ingredient
//! aggregator: parses free-text recipe quantities, groups ingredients by
//! their canonical singular name and base unit, and produces a
//! deduplicated, correctly-pluralized shopping list.

pub mod aggregate;
pub mod inflect;
pub mod inflect_rules;
pub mod quantity;
pub mod units;

pub use aggregate::{combine, CombinedIngredient, IngredientRecord};
pub use inflect::{pluralize, pluralize_with, singularize, singularize_with, PartOfSpeech};
pub use quantity::ParsedQuantity;
