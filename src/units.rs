//! # Unit Vocabulary and Normalization
//!
//! Maps unit words from quantity text onto [`Unit`] descriptors and derives
//! the canonical base unit used as an aggregation grouping key.
//!
//! Resolution tries the alias table first, then a singular fallback
//! (stripping a trailing "s", as the unit table in
//! [`crate::quantity`]'s grammar expects plural aliases too), then SI-prefix
//! composition over a small atom table. Prefix composition is what reads
//! "pinch" as pico + inch; the resulting "picoinch" is folded back to the
//! fuzzy "pinch" term by [`normalize`]. That fold is an explicit named
//! mapping, kept narrow so legitimate small quantities are never
//! reclassified.

use std::collections::HashMap;
use std::sync::LazyLock;

use log::trace;

use crate::quantity::ParsedQuantity;

/// The derived unit symbol that stands in for a pinch.
///
/// Prefix-greedy unit grammars read "pinch" as the pico prefix on "inch";
/// the composed symbol is the marker [`normalize`] folds back into the
/// fuzzy vocabulary.
pub const PINCH_ALIAS: &str = "picoinch";

/// Physical dimension of a unit, used to derive the grouping key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Volume,
    Mass,
    Length,
    /// Dimensionless counts ("2 eggs").
    Count,
}

impl Dimension {
    /// Canonical base unit symbol for this dimension. Count quantities have
    /// no symbol and group under the empty string.
    pub fn base_symbol(self) -> &'static str {
        match self {
            Dimension::Volume => "milliliter",
            Dimension::Mass => "gram",
            Dimension::Length => "meter",
            Dimension::Count => "",
        }
    }
}

/// A resolved measurement unit.
///
/// `to_base` is the multiplier into the dimension's base unit, so two units
/// of the same dimension can be summed by re-expressing one in the other.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    /// Canonical singular symbol ("tablespoon", "gram", "picoinch").
    pub symbol: String,
    pub dimension: Dimension,
    /// Multiplier into the dimension's base unit.
    pub to_base: f64,
}

impl Unit {
    /// The dimensionless unit carried by bare numbers.
    pub fn count() -> Self {
        Unit {
            symbol: String::new(),
            dimension: Dimension::Count,
            to_base: 1.0,
        }
    }

    fn new(symbol: &str, dimension: Dimension, to_base: f64) -> Self {
        Unit {
            symbol: symbol.to_string(),
            dimension,
            to_base,
        }
    }
}

type UnitSpec = (&'static str, Dimension, f64);

/// Alias word → (canonical symbol, dimension, factor to base unit).
/// Base units: milliliters for volume, grams for mass, meters for length.
static UNIT_ALIASES: LazyLock<HashMap<&'static str, UnitSpec>> = LazyLock::new(|| {
    let mut map: HashMap<&'static str, UnitSpec> = HashMap::new();

    let mut insert = |aliases: &[&'static str], spec: UnitSpec| {
        for &alias in aliases {
            map.insert(alias, spec);
        }
    };

    // Volume units
    insert(
        &["tsp", "tsp.", "teaspoon", "teaspoons"],
        ("teaspoon", Dimension::Volume, 4.928_921_593_75),
    );
    insert(
        &["tbs", "tbsp", "tbsp.", "tablespoon", "tablespoons"],
        ("tablespoon", Dimension::Volume, 14.786_764_781_25),
    );
    insert(&["cup", "cups"], ("cup", Dimension::Volume, 236.588_236_5));
    insert(&["pint", "pints", "pt"], ("pint", Dimension::Volume, 473.176_473));
    insert(&["quart", "quarts", "qt"], ("quart", Dimension::Volume, 946.352_946));
    insert(
        &["gallon", "gallons", "gal"],
        ("gallon", Dimension::Volume, 3_785.411_784),
    );
    insert(
        &["ml", "milliliter", "milliliters", "millilitre", "millilitres"],
        ("milliliter", Dimension::Volume, 1.0),
    );
    insert(&["cl"], ("centiliter", Dimension::Volume, 10.0));
    insert(&["dl"], ("deciliter", Dimension::Volume, 100.0));
    insert(
        &["l", "liter", "liters", "litre", "litres"],
        ("liter", Dimension::Volume, 1_000.0),
    );

    // Weight units
    insert(&["mg", "milligram", "milligrams"], ("milligram", Dimension::Mass, 0.001));
    insert(
        &["g", "gram", "grams", "gramme", "grammes"],
        ("gram", Dimension::Mass, 1.0),
    );
    insert(
        &["kg", "kilogram", "kilograms", "kilogramme", "kilogrammes"],
        ("kilogram", Dimension::Mass, 1_000.0),
    );
    insert(&["oz", "ounce", "ounces"], ("ounce", Dimension::Mass, 28.349_523_125));
    insert(
        &["lb", "lb.", "lbs", "pound", "pounds"],
        ("pound", Dimension::Mass, 453.592_37),
    );

    // Length units
    insert(&["inch", "inches"], ("inch", Dimension::Length, 0.0254));
    insert(&["meter", "meters", "metre", "metres"], ("meter", Dimension::Length, 1.0));

    map
});

/// Atoms eligible for SI-prefix composition.
static PREFIX_ATOMS: LazyLock<HashMap<&'static str, (Dimension, f64)>> = LazyLock::new(|| {
    HashMap::from([
        ("inch", (Dimension::Length, 0.0254)),
        ("meter", (Dimension::Length, 1.0)),
        ("gram", (Dimension::Mass, 1.0)),
        ("liter", (Dimension::Volume, 1_000.0)),
    ])
});

// (alias, canonical name, factor), longest aliases first so "pico" wins
// over "p".
const SI_PREFIXES: &[(&str, &str, f64)] = &[
    ("pico", "pico", 1e-12),
    ("nano", "nano", 1e-9),
    ("micro", "micro", 1e-6),
    ("milli", "milli", 1e-3),
    ("centi", "centi", 1e-2),
    ("deci", "deci", 1e-1),
    ("kilo", "kilo", 1e3),
    ("p", "pico", 1e-12),
    ("n", "nano", 1e-9),
    ("k", "kilo", 1e3),
];

/// Resolve a unit word to a [`Unit`], or `None` when the word is not part
/// of the unit vocabulary.
pub fn resolve(word: &str) -> Option<Unit> {
    let normalized = word.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }

    if let Some(&(symbol, dimension, to_base)) = UNIT_ALIASES.get(normalized.as_str()) {
        return Some(Unit::new(symbol, dimension, to_base));
    }

    // Try without pluralization.
    if normalized.len() > 1 {
        if let Some(stripped) = normalized.strip_suffix('s') {
            if let Some(&(symbol, dimension, to_base)) = UNIT_ALIASES.get(stripped) {
                return Some(Unit::new(symbol, dimension, to_base));
            }
        }
    }

    compose_prefixed(&normalized)
}

/// SI-prefix composition over the atom table ("pinch" → pico + inch).
fn compose_prefixed(word: &str) -> Option<Unit> {
    for &(alias, name, factor) in SI_PREFIXES {
        if let Some(rest) = word.strip_prefix(alias) {
            if let Some(&(dimension, to_base)) = PREFIX_ATOMS.get(rest) {
                let unit = Unit {
                    symbol: format!("{name}{rest}"),
                    dimension,
                    to_base: factor * to_base,
                };
                trace!("composed prefixed unit '{}' from '{}'", unit.symbol, word);
                return Some(unit);
            }
        }
    }
    None
}

/// Apply the reserved unit alias: a numeric quantity whose unit composed to
/// "picoinch" degrades to the fuzzy "pinch" term, magnitude dropped.
/// Everything else passes through untouched.
pub fn normalize(quantity: ParsedQuantity) -> ParsedQuantity {
    match quantity {
        ParsedQuantity::Numeric { ref unit, .. } if unit.symbol == PINCH_ALIAS => {
            ParsedQuantity::Fuzzy {
                label: "pinch".to_string(),
            }
        }
        other => other,
    }
}

/// Canonical grouping key for a parsed quantity.
///
/// Fuzzy quantities group under "some"; numeric quantities under their
/// dimension's base symbol; unparsed quantities under the empty string
/// (each acts as its own bucket and is never merged with numeric buckets).
pub fn base_unit(quantity: &ParsedQuantity) -> String {
    match quantity {
        ParsedQuantity::Fuzzy { .. } => "some".to_string(),
        ParsedQuantity::Numeric { unit, .. } => unit.dimension.base_symbol().to_string(),
        ParsedQuantity::Unparsed { .. } => String::new(),
    }
}
