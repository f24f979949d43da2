#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use grocer::{pluralize, pluralize_with, singularize, singularize_with, PartOfSpeech};

    #[test]
    fn test_group_precedence() {
        // The irregular group fires before the generic -s fallback group.
        assert_eq!(pluralize("child"), "children");
        assert_eq!(pluralize("ox"), "oxen");
        assert_eq!(pluralize("goose"), "geese");
    }

    #[test]
    fn test_common_ingredient_nouns() {
        assert_eq!(pluralize("egg"), "eggs");
        assert_eq!(pluralize("potato"), "potatoes");
        assert_eq!(pluralize("tomato"), "tomatoes");
        assert_eq!(pluralize("berry"), "berries");
        assert_eq!(pluralize("loaf"), "loaves");
        assert_eq!(pluralize("peach"), "peaches");

        assert_eq!(singularize("eggs"), "egg");
        assert_eq!(singularize("potatoes"), "potato");
        assert_eq!(singularize("berries"), "berry");
        assert_eq!(singularize("loaves"), "loaf");
    }

    #[test]
    fn test_mass_nouns_do_not_inflect() {
        for word in ["rice", "water", "butter", "flour", "bread"] {
            assert_eq!(singularize(word), word, "singularize: {word}");
        }
        for word in ["rice", "water", "butter", "bread"] {
            assert_eq!(pluralize(word), word, "pluralize: {word}");
        }
    }

    #[test]
    fn test_compound_word_preposition_rule() {
        assert_eq!(pluralize("mother-in-law"), "mothers-in-law");
        assert_eq!(singularize("mothers-in-law"), "mother-in-law");
    }

    #[test]
    fn test_compound_word_last_token_rule() {
        assert_eq!(pluralize("bay leaf"), "bay leaves");
        assert_eq!(pluralize("chicken stock"), "chicken stocks");
    }

    #[test]
    fn test_genitive_recursion() {
        assert_eq!(pluralize("dog's"), "dogs'");
        assert_eq!(singularize("dogs'"), "dog's");
    }

    #[test]
    fn test_classical_toggle() {
        let no_custom = HashMap::new();
        assert_eq!(pluralize("octopus"), "octopodes");
        assert_eq!(
            pluralize_with("matrix", PartOfSpeech::Noun, &no_custom, false),
            "matrixes"
        );
        assert_eq!(pluralize("formula"), "formulae");
        assert_eq!(
            pluralize_with("formula", PartOfSpeech::Noun, &no_custom, false),
            "formulas"
        );
    }

    #[test]
    fn test_custom_overrides_take_priority() {
        let mut custom = HashMap::new();
        custom.insert("child".to_string(), "kids".to_string());
        assert_eq!(
            pluralize_with("child", PartOfSpeech::Noun, &custom, true),
            "kids"
        );
        let mut custom = HashMap::new();
        custom.insert("people".to_string(), "folk".to_string());
        assert_eq!(
            singularize_with("people", PartOfSpeech::Noun, &custom),
            "folk"
        );
    }

    #[test]
    fn test_adjectives_use_restricted_groups() {
        let no_custom = HashMap::new();
        assert_eq!(
            pluralize_with("a", PartOfSpeech::Adjective, &no_custom, true),
            "some"
        );
        assert_eq!(
            pluralize_with("that", PartOfSpeech::Adjective, &no_custom, true),
            "those"
        );
        assert_eq!(
            pluralize_with("her", PartOfSpeech::Adjective, &no_custom, true),
            "their"
        );
        // Outside groups 0-1 nothing fires for adjectives.
        assert_eq!(
            pluralize_with("fresh", PartOfSpeech::Adjective, &no_custom, true),
            "fresh"
        );
    }

    #[test]
    fn test_documented_round_trip_pairs() {
        // Pinned irregular pairs. This is not a universal law: plenty of
        // forms are lossy through the grammar, so only the documented pairs
        // are held to it.
        for word in ["ox", "person", "child", "foot", "tooth", "goose", "mouse"] {
            let plural = pluralize(word);
            assert_eq!(singularize(&plural), word, "round trip: {word}");
        }
    }

    #[test]
    fn test_totality_on_odd_input() {
        // The engine never fails; unmatched input comes back unchanged
        // (modulo the catch-all -s group for pluralization).
        assert_eq!(singularize("xylyl"), "xylyl");
        assert_eq!(pluralize("xylyl"), "xylyls");
        assert_eq!(singularize("a"), "a");
        assert_eq!(singularize("CHILDREN"), "child");
    }

    #[test]
    fn test_determinism() {
        for _ in 0..5 {
            assert_eq!(pluralize("analysis"), "analyses");
            assert_eq!(singularize("analyses"), "analysis");
        }
    }
}
