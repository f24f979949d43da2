//! # English Noun Inflection
//!
//! Rule-based pluralization and singularization of English nouns, with
//! genitive and compound-word recursion, caller-supplied overrides, and a
//! classical mode for Latin/Greek-derived plurals ("octopodes" vs
//! "octopuses").
//!
//! Both transforms are total: a word no rule recognizes comes back
//! unchanged. Ingredient names are free text, so nothing in this module may
//! fail the aggregation pipeline.
//!
//! ## Usage
//!
//! ```rust
//! use grocer::inflect::{pluralize, singularize};
//!
//! assert_eq!(pluralize("child"), "children");
//! assert_eq!(singularize("mothers-in-law"), "mother-in-law");
//! ```

use std::collections::HashMap;

use crate::inflect_rules::{
    in_category, PLURAL_PREPOSITIONS, PLURAL_RULE_GROUPS, SINGULAR_IE, SINGULAR_IRREGULAR,
    SINGULAR_RULES, SINGULAR_UNCOUNTABLE, SINGULAR_UNINFLECTED,
};

/// Part of speech of the word being inflected.
///
/// Only a very few number of adjectives inflect; they are restricted to the
/// article/demonstrative and possessive-adjective rule groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartOfSpeech {
    /// Nouns use the full rule table.
    #[default]
    Noun,
    Verb,
    Adjective,
    Adverb,
}

/// Returns the plural of a noun with the default settings: no overrides and
/// classical inflection (where "matrix" pluralizes to "matrices" and not
/// "matrixes").
pub fn pluralize(word: &str) -> String {
    pluralize_with(word, PartOfSpeech::Noun, &HashMap::new(), true)
}

/// Returns the plural of a given word, e.g., child => children.
///
/// The `custom` dictionary is an exact-match override table consulted before
/// any grammar rule. `classical` makes the classically-gated rules eligible.
pub fn pluralize_with(
    word: &str,
    pos: PartOfSpeech,
    custom: &HashMap<String, String>,
    classical: bool,
) -> String {
    if let Some(replacement) = custom.get(word) {
        return replacement.clone();
    }

    // Recurse genitives: remove the apostrophe and any trailing -s, form the
    // plural of the resultant noun, and then append an apostrophe
    // (dog's => dogs').
    if word.ends_with('\'') || word.ends_with("'s") {
        let stem = word.trim_end_matches(['\'', 's']);
        let plural_stem = pluralize_with(stem, pos, custom, classical);
        if plural_stem.ends_with('s') {
            return format!("{plural_stem}'");
        }
        return format!("{plural_stem}'s");
    }

    // Recurse compound words
    // (e.g., Postmasters General, mothers-in-law, Roman deities).
    let spaced = word.replace('-', " ");
    let tokens: Vec<&str> = spaced.split(' ').collect();
    if tokens.len() > 1 {
        if tokens[1] == "general"
            || (tokens[1] == "General" && !in_category("general-generals", tokens[0]))
        {
            return word.replace(tokens[0], &pluralize_with(tokens[0], pos, custom, classical));
        }
        if PLURAL_PREPOSITIONS.contains(&tokens[1]) {
            return word.replace(tokens[0], &pluralize_with(tokens[0], pos, custom, classical));
        }
        let last = tokens[tokens.len() - 1];
        return word.replace(last, &pluralize_with(last, pos, custom, classical));
    }

    let groups = &*PLURAL_RULE_GROUPS;
    let group_count = if pos == PartOfSpeech::Adjective {
        2
    } else {
        groups.len()
    };

    for group in &groups[..group_count] {
        for rule in group {
            if rule.classical_only && !classical {
                continue;
            }
            if let Some(category) = rule.category {
                if !in_category(category, word) {
                    continue;
                }
            }
            if rule.suffix.is_match(word) {
                return rule.suffix.replace(word, rule.inflection).into_owned();
            }
        }
    }
    word.to_string()
}

/// Returns the singular of a noun with the default settings.
pub fn singularize(word: &str) -> String {
    singularize_with(word, PartOfSpeech::Noun, &HashMap::new())
}

/// Returns the singular of a given word.
///
/// Membership tables are consulted before the suffix rules: uninflected and
/// uncountable words come back unchanged, irregular plural suffixes map
/// through the exception table, and only then do the ordered regex rules run.
pub fn singularize_with(word: &str, pos: PartOfSpeech, custom: &HashMap<String, String>) -> String {
    if let Some(replacement) = custom.get(word) {
        return replacement.clone();
    }

    // Recurse compound words (e.g. mothers-in-law).
    if word.contains('-') {
        let tokens: Vec<&str> = word.split('-').collect();
        if tokens.len() > 1 && PLURAL_PREPOSITIONS.contains(&tokens[1]) {
            return format!(
                "{}-{}",
                singularize_with(tokens[0], pos, custom),
                tokens[1..].join("-")
            );
        }
    }

    let lowercased = word.to_lowercase();

    // dogs' => dog's
    if let Some(stem) = word.strip_suffix('\'') {
        return format!("{}'s", singularize_with(stem, pos, custom));
    }

    for member in SINGULAR_UNINFLECTED {
        if member.ends_with(&lowercased) {
            return word.to_string();
        }
    }
    for member in SINGULAR_UNCOUNTABLE {
        if member.ends_with(&lowercased) {
            return word.to_string();
        }
    }
    for member in SINGULAR_IE {
        if lowercased.ends_with(&format!("{member}s")) {
            return lowercased;
        }
    }

    for (suffix, pattern, singular) in SINGULAR_IRREGULAR.iter() {
        if lowercased.ends_with(suffix) {
            return pattern.replace(word, *singular).into_owned();
        }
    }

    for (pattern, replacement) in SINGULAR_RULES.iter() {
        if pattern.is_match(word) {
            return pattern.replace(word, *replacement).into_owned();
        }
    }
    word.to_string()
}
