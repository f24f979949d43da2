//! # Shopping List Example
//!
//! This example demonstrates how to combine a recipe's ingredient lines into
//! a deduplicated shopping list: quantities are parsed and summed where
//! compatible, fuzzy amounts collapse into a single "some" term, and names
//! are pluralized when the combined count calls for it.

use anyhow::Result;
use grocer::{combine, pluralize, singularize, IngredientRecord};

fn main() -> Result<()> {
    env_logger::init();

    println!("🛒 Shopping List Example");
    println!("========================\n");

    // Example 1: combining a week of recipes
    println!("📖 Example 1: Combining Ingredient Lines");
    println!("----------------------------------------");

    let ingredients = vec![
        IngredientRecord::new("egg", "1"),
        IngredientRecord::new("soy sauce", "2 tbs"),
        IngredientRecord::new("tomato", "4-5"),
        IngredientRecord::new("salt", "sprinkle"),
        IngredientRecord::new("egg", "2"),
        IngredientRecord::new("soy sauce", "1 tbs"),
        IngredientRecord::new("salt", "a pinch"),
        IngredientRecord::new("butter", "100 grams"),
        IngredientRecord::new("black pepper", "to taste"),
    ];

    let shopping_list = combine(&ingredients);
    for entry in &shopping_list {
        println!("  {}: {}", entry.name, entry.unit);
    }

    println!();

    // Example 2: the combined list as JSON, as an HTTP layer would ship it
    println!("📦 Example 2: JSON Output");
    println!("-------------------------");
    println!("{}", serde_json::to_string_pretty(&shopping_list)?);

    println!();

    // Example 3: the inflection engine on its own
    println!("🔤 Example 3: Inflection");
    println!("------------------------");
    for word in ["child", "mother-in-law", "loaf", "octopus", "sheep"] {
        println!("  {} → {}", word, pluralize(word));
    }
    for word in ["mothers-in-law", "people", "loaves"] {
        println!("  {} → {}", word, singularize(word));
    }

    Ok(())
}
