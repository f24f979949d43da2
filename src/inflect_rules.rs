//! # Inflection Rule Tables
//!
//! Static rule and exception tables backing English noun inflection:
//! the ordered pluralization rule groups, their category word sets, and the
//! singularization rule list with its irregular-form and membership tables.
//!
//! The tables are data, not control flow. They are kept verbatim so that the
//! inflection engine in [`crate::inflect`] stays a thin matcher over them.
//! Pluralization follows Damian Conway's "An Algorithmic Approach to English
//! Pluralization"; singularization mirrors the plural suffix rules in reverse.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// A single pluralization rule.
///
/// A rule fires when its suffix pattern matches and its gates pass: a rule
/// with a `category` only applies to words in that category's set, and a
/// `classical_only` rule only applies in classical mode.
pub struct PluralRule {
    /// Compiled suffix pattern.
    pub suffix: Regex,
    /// Replacement applied to the matched suffix.
    pub inflection: &'static str,
    /// Optional category gate, a key into [`struct@PLURAL_CATEGORIES`].
    pub category: Option<&'static str>,
    /// Whether the rule is restricted to classical mode.
    pub classical_only: bool,
}

/// Prepositions that mark compound forms like "mother-in-law" and
/// "man at arms", where the head token inflects instead of the last.
pub const PLURAL_PREPOSITIONS: &[&str] = &[
    "about", "before", "during", "of", "till",
    "above", "behind", "except", "off", "to",
    "across", "below", "for", "on", "under",
    "after", "beneath", "from", "onto", "until",
    "among", "beside", "in", "out", "unto",
    "around", "besides", "into", "over", "upon",
    "at", "between", "near", "since", "with",
    "athwart", "betwixt", "beyond", "but", "by",
];

// Each entry is (suffix pattern, inflection, category, classical-only).
// Groups are tried in order; within a group, rules are tried in listed order
// and the first rule that fires wins.
#[rustfmt::skip]
const PLURAL_RULES_RAW: &[&[(&str, &str, Option<&str>, bool)]] = &[
    // 0) Indefinite articles and demonstratives.
    &[
        (r"^a$|^an$", "some", None, false),
        (r"^this$", "these", None, false),
        (r"^that$", "those", None, false),
        (r"^any$", "all", None, false),
    ],
    // 1) Possessive adjectives.
    &[
        (r"^my$", "our", None, false),
        (r"^your$", "your", None, false),
        (r"^thy$", "your", None, false),
        (r"^her$|^his$", "their", None, false),
        (r"^its$", "their", None, false),
        (r"^their$", "their", None, false),
    ],
    // 2) Possessive pronouns.
    &[
        (r"^mine$", "ours", None, false),
        (r"^yours$", "yours", None, false),
        (r"^thine$", "yours", None, false),
        (r"^her$|^his$", "theirs", None, false),
        (r"^its$", "theirs", None, false),
        (r"^their$", "theirs", None, false),
    ],
    // 3) Personal pronouns.
    &[
        (r"^I$", "we", None, false),
        (r"^me$", "us", None, false),
        (r"^myself$", "ourselves", None, false),
        (r"^you$", "you", None, false),
        (r"^thou$|^thee$", "ye", None, false),
        (r"^yourself$", "yourself", None, false),
        (r"^thyself$", "yourself", None, false),
        (r"^she$|^he$", "they", None, false),
        (r"^it$|^they$", "they", None, false),
        (r"^her$|^him$", "them", None, false),
        (r"^it$|^them$", "them", None, false),
        (r"^herself$", "themselves", None, false),
        (r"^himself$", "themselves", None, false),
        (r"^itself$", "themselves", None, false),
        (r"^themself$", "themselves", None, false),
        (r"^oneself$", "oneselves", None, false),
    ],
    // 4) Words that do not inflect.
    &[
        (r"$", "", Some("uninflected"), false),
        (r"$", "", Some("uncountable"), false),
        (r"s$", "s", Some("s-singular"), false),
        (r"fish$", "fish", None, false),
        (r"([- ])bass$", "${1}bass", None, false),
        (r"ois$", "ois", None, false),
        (r"sheep$", "sheep", None, false),
        (r"deer$", "deer", None, false),
        (r"pox$", "pox", None, false),
        (r"([A-Z].*)ese$", "${1}ese", None, false),
        (r"itis$", "itis", None, false),
        (r"(fruct|gluc|galact|lact|ket|malt|rib|sacchar|cellul)ose$", "${1}ose", None, false),
    ],
    // 5) Irregular plural forms (e.g., mongoose, oxen).
    &[
        (r"atlas$", "atlantes", None, true),
        (r"atlas$", "atlases", None, false),
        (r"beef$", "beeves", None, true),
        (r"brother$", "brethren", None, true),
        (r"child$", "children", None, false),
        (r"corpus$", "corpora", None, true),
        (r"corpus$", "corpuses", None, false),
        (r"^cow$", "kine", None, true),
        (r"ephemeris$", "ephemerides", None, false),
        (r"ganglion$", "ganglia", None, true),
        (r"genie$", "genii", None, true),
        (r"genus$", "genera", None, false),
        (r"graffito$", "graffiti", None, false),
        (r"loaf$", "loaves", None, false),
        (r"money$", "monies", None, true),
        (r"mongoose$", "mongooses", None, false),
        (r"mythos$", "mythoi", None, false),
        (r"octopus$", "octopodes", None, true),
        (r"opus$", "opera", None, true),
        (r"opus$", "opuses", None, false),
        (r"^ox$", "oxen", None, false),
        (r"penis$", "penes", None, true),
        (r"penis$", "penises", None, false),
        (r"soliloquy$", "soliloquies", None, false),
        (r"testis$", "testes", None, false),
        (r"trilby$", "trilbys", None, false),
        (r"turf$", "turves", None, true),
        (r"numen$", "numena", None, false),
        (r"occiput$", "occipita", None, true),
    ],
    // 6) Irregular inflections for common suffixes (e.g., synopses, mice, men).
    &[
        (r"man$", "men", None, false),
        (r"person$", "people", None, false),
        (r"([lm])ouse$", "${1}ice", None, false),
        (r"tooth$", "teeth", None, false),
        (r"goose$", "geese", None, false),
        (r"foot$", "feet", None, false),
        (r"zoon$", "zoa", None, false),
        (r"([csx])is$", "${1}es", None, false),
    ],
    // 7) Fully assimilated classical inflections (e.g., vertebrae, codices).
    &[
        (r"ex$", "ices", Some("ex-ices"), false),
        (r"ex$", "ices", Some("ex-ices*"), true), // * = classical mode
        (r"um$", "a", Some("um-a"), false),
        (r"um$", "a", Some("um-a*"), true),
        (r"on$", "a", Some("on-a"), false),
        (r"a$", "ae", Some("a-ae"), false),
        (r"a$", "ae", Some("a-ae*"), true),
    ],
    // 8) Classical variants of modern inflections (e.g., stigmata, soprani).
    &[
        (r"trix$", "trices", None, true),
        (r"eau$", "eaux", None, true),
        (r"ieu$", "ieu", None, true),
        (r"([iay])nx$", "${1}nges", None, true),
        (r"en$", "ina", Some("en-ina*"), true),
        (r"a$", "ata", Some("a-ata*"), true),
        (r"is$", "ides", Some("is-ides*"), true),
        (r"us$", "i", Some("us-i*"), true),
        (r"us$", "us ", Some("us-us*"), true),
        (r"o$", "i", Some("o-i*"), true),
        (r"$", "i", Some("-i*"), true),
        (r"$", "im", Some("-im*"), true),
    ],
    // 9) -ch, -sh and -ss take -es in the plural (e.g., churches, classes).
    &[
        (r"([cs])h$", "${1}hes", None, false),
        (r"ss$", "sses", None, false),
        (r"x$", "xes", None, false),
    ],
    // 10) -f or -fe sometimes take -ves in the plural (e.g, lives, wolves).
    &[
        (r"([aeo]l)f$", "${1}ves", None, false),
        (r"([^d]ea)f$", "${1}ves", None, false),
        (r"arf$", "arves", None, false),
        (r"([nlw]i)fe$", "${1}ves", None, false),
    ],
    // 11) -y takes -ys if preceded by a vowel, -ies otherwise
    //     (e.g., storeys, Marys, stories).
    &[
        (r"([aeiou])y$", "${1}ys", None, false),
        (r"([A-Z].*)y$", "${1}ys", None, false),
        (r"y$", "ies", None, false),
    ],
    // 12) -o sometimes takes -os, -oes otherwise. -o preceded by a vowel
    //     takes -os (e.g., lassos, potatoes, bamboos).
    &[
        (r"o$", "os", Some("o-os"), false),
        (r"([aeiou])o$", "${1}os", None, false),
        (r"o$", "oes", None, false),
    ],
    // 13) Military stuff (e.g., Major Generals).
    &[
        (r"l$", "ls", Some("general-generals"), false),
    ],
    // 14) Assume that the plural takes -s (cats, programmes, ...).
    &[
        (r"$", "s", None, false),
    ],
];

#[rustfmt::skip]
const PLURAL_CATEGORIES_RAW: &[(&str, &[&str])] = &[
    ("uninflected", &[
        "bison", "debris", "headquarters", "news", "swine",
        "bream", "diabetes", "herpes", "pincers", "trout",
        "breeches", "djinn", "high-jinks", "pliers", "tuna",
        "britches", "eland", "homework", "proceedings", "whiting",
        "carp", "elk", "innings", "rabies", "wildebeest",
        "chassis", "flounder", "jackanapes", "salmon", "clippers",
        "gallows", "mackerel", "scissors", "cod", "graffiti",
        "measles", "series", "contretemps", "mews", "shears",
        "corps", "mumps", "species",
    ]),
    ("uncountable", &[
        "advice", "fruit", "ketchup", "meat", "sand",
        "bread", "furniture", "knowledge", "mustard", "software",
        "butter", "garbage", "love", "news", "understanding",
        "cheese", "gravel", "luggage", "progress", "water",
        "electricity", "happiness", "mathematics", "research", "equipment",
        "information", "mayonnaise", "rice",
    ]),
    ("s-singular", &[
        "acropolis", "caddis", "dais", "glottis", "pathos",
        "aegis", "cannabis", "digitalis", "ibis", "pelvis",
        "alias", "canvas", "epidermis", "lens", "polis",
        "asbestos", "chaos", "ethos", "mantis", "rhinoceros",
        "bathos", "cosmos", "gas", "marquis", "sassafras",
        "bias", "glottis", "metropolis", "trellis",
    ]),
    ("ex-ices", &["codex", "murex", "silex"]),
    ("ex-ices*", &[
        "apex", "index", "pontifex", "vertex",
        "cortex", "latex", "simplex", "vortex",
    ]),
    ("um-a", &[
        "agendum", "candelabrum", "desideratum", "extremum", "stratum",
        "bacterium", "datum", "erratum", "ovum",
    ]),
    ("um-a*", &[
        "aquarium", "emporium", "maximum", "optimum", "stadium",
        "compendium", "enconium", "medium", "phylum", "trapezium",
        "consortium", "gymnasium", "memorandum", "quantum", "ultimatum",
        "cranium", "honorarium", "millenium", "rostrum", "vacuum",
        "curriculum", "interregnum", "minimum", "spectrum", "velum",
        "dictum", "lustrum", "momentum", "speculum",
    ]),
    ("on-a", &[
        "aphelion", "hyperbaton", "perihelion", "asyndeton", "noumenon",
        "phenomenon", "criterion", "organon", "prolegomenon",
    ]),
    ("a-ae", &["alga", "alumna", "vertebra"]),
    ("a-ae*", &[
        "abscissa", "aurora", "hyperbola", "nebula", "amoeba",
        "formula", "lacuna", "nova", "antenna", "hydra",
        "medusa", "parabola",
    ]),
    ("en-ina*", &["foramen", "lumen", "stamen"]),
    ("a-ata*", &[
        "anathema", "dogma", "gumma", "miasma", "stigma",
        "bema", "drama", "lemma", "schema", "stoma",
        "carcinoma", "edema", "lymphoma", "oedema", "trauma",
        "charisma", "enema", "magma", "sarcoma", "diploma",
        "enigma", "melisma", "soma",
    ]),
    ("is-ides*", &["clitoris", "iris"]),
    ("us-i*", &[
        "focus", "nimbus", "succubus", "fungus", "nucleolus",
        "torus", "genius", "radius", "umbilicus", "incubus",
        "stylus", "uterus",
    ]),
    ("us-us*", &[
        "apparatus", "hiatus", "plexus", "status", "cantus",
        "impetus", "prospectus", "coitus", "nexus", "sinus",
    ]),
    ("o-i*", &[
        "alto", "canto", "crescendo", "soprano", "basso",
        "contralto", "solo", "tempo",
    ]),
    ("-i*", &["afreet", "afrit", "efreet"]),
    ("-im*", &["cherub", "goy", "seraph"]),
    ("o-os", &[
        "albino", "dynamo", "guano", "lumbago", "photo",
        "archipelago", "embryo", "inferno", "magneto", "pro",
        "armadillo", "fiasco", "jumbo", "manifesto", "quarto",
        "commando", "generalissimo", "medico", "rhino", "ditto",
        "ghetto", "lingo", "octavo", "stylo",
    ]),
    ("general-generals", &[
        "Adjutant", "Brigadier", "Lieutenant", "Major", "Quartermaster",
        "adjutant", "brigadier", "lieutenant", "major", "quartermaster",
    ]),
];

// Singularization suffix rules, mirroring the plural suffix rules in
// reverse. Tried in order, first match wins.
#[rustfmt::skip]
const SINGULAR_RULES_RAW: &[(&str, &str)] = &[
    (r"(?i)(.)ae$", "${1}a"),
    (r"(?i)(.)itis$", "${1}itis"),
    (r"(?i)(.)eaux$", "${1}eau"),
    (r"(?i)(quiz)zes$", "${1}"),
    (r"(?i)(matr)ices$", "${1}ix"),
    (r"(?i)(ap|vert|ind)ices$", "${1}ex"),
    (r"(?i)^(ox)en", "${1}"),
    (r"(?i)(alias|status)es$", "${1}"),
    (r"(?i)([octop|vir])i$", "${1}us"),
    (r"(?i)(cris|ax|test)es$", "${1}is"),
    (r"(?i)(shoe)s$", "${1}"),
    (r"(?i)(o)es$", "${1}"),
    (r"(?i)(bus)es$", "${1}"),
    (r"(?i)([m|l])ice$", "${1}ouse"),
    (r"(?i)(x|ch|ss|sh)es$", "${1}"),
    (r"(?i)(m)ovies$", "${1}ovie"),
    (r"(?i)(.)ombies$", "${1}ombie"),
    (r"(?i)(s)eries$", "${1}eries"),
    (r"(?i)([^aeiouy]|qu)ies$", "${1}y"),
    // -f, -fe sometimes take -ves in the plural (e.g., lives, wolves).
    (r"([aeo]l)ves$", "${1}f"),
    (r"([^d]ea)ves$", "${1}f"),
    (r"arves$", "arf"),
    (r"erves$", "erve"),
    (r"([nlw]i)ves$", "${1}fe"),
    (r"(?i)([lr])ves$", "${1}f"),
    (r"([aeo])ves$", "${1}ve"),
    (r"(?i)(sive)s$", "${1}"),
    (r"(?i)(tive)s$", "${1}"),
    (r"(?i)(hive)s$", "${1}"),
    (r"(?i)([^f])ves$", "${1}fe"),
    // -ses suffixes.
    (r"(?i)(^analy)ses$", "${1}sis"),
    (r"(?i)((a)naly|(b)a|(d)iagno|(p)arenthe|(p)rogno|(s)ynop|(t)he)ses$", "${1}${2}sis"),
    (r"(?i)(.)opses$", "${1}opsis"),
    (r"(?i)(.)yses$", "${1}ysis"),
    (r"(?i)(h|d|r|o|n|b|cl|p)oses$", "${1}ose"),
    (r"(?i)(fruct|gluc|galact|lact|ket|malt|rib|sacchar|cellul)ose$", "${1}ose"),
    (r"(?i)(.)oses$", "${1}osis"),
    // -a
    (r"(?i)([ti])a$", "${1}um"),
    (r"(?i)(n)ews$", "${1}ews"),
    (r"(?i)s$", ""),
];

/// Irregular plural suffix → singular suffix, in lookup order.
#[rustfmt::skip]
pub const SINGULAR_IRREGULAR_RAW: &[(&str, &str)] = &[
    ("atlantes", "atlas"),
    ("atlases", "atlas"),
    ("axes", "axe"),
    ("beeves", "beef"),
    ("brethren", "brother"),
    ("children", "child"),
    ("corpora", "corpus"),
    ("corpuses", "corpus"),
    ("ephemerides", "ephemeris"),
    ("feet", "foot"),
    ("ganglia", "ganglion"),
    ("geese", "goose"),
    ("genera", "genus"),
    ("genii", "genie"),
    ("graffiti", "graffito"),
    ("helves", "helve"),
    ("kine", "cow"),
    ("leaves", "leaf"),
    ("loaves", "loaf"),
    ("men", "man"),
    ("mongooses", "mongoose"),
    ("monies", "money"),
    ("moves", "move"),
    ("mythoi", "mythos"),
    ("numena", "numen"),
    ("occipita", "occiput"),
    ("octopodes", "octopus"),
    ("opera", "opus"),
    ("opuses", "opus"),
    ("our", "my"),
    ("oxen", "ox"),
    ("penes", "penis"),
    ("penises", "penis"),
    ("people", "person"),
    ("sexes", "sex"),
    ("soliloquies", "soliloquy"),
    ("teeth", "tooth"),
    ("testes", "testis"),
    ("trilbys", "trilby"),
    ("turves", "turf"),
    ("zoa", "zoon"),
];

/// Words that are the same in singular and plural form.
#[rustfmt::skip]
pub const SINGULAR_UNINFLECTED: &[&str] = &[
    "flour", "bison", "debris", "headquarters", "pincers",
    "trout", "bream", "diabetes", "herpes", "pliers",
    "tuna", "breeches", "djinn", "high-jinks", "proceedings",
    "whiting", "britches", "eland", "homework", "rabies",
    "wildebeest", "carp", "elk", "innings", "salmon",
    "chassis", "flounder", "jackanapes", "scissors", "christmas",
    "gallows", "mackerel", "series", "clippers", "georgia",
    "measles", "shears", "cod", "graffiti", "mews",
    "species", "contretemps", "mumps", "swine", "corps",
    "news", "swiss",
];

/// Mass nouns that take no plural form.
#[rustfmt::skip]
pub const SINGULAR_UNCOUNTABLE: &[&str] = &[
    "advice", "equipment", "happiness", "luggage", "news",
    "software", "bread", "fruit", "information", "mathematics",
    "progress", "understanding", "butter", "furniture", "ketchup",
    "mayonnaise", "research", "water", "cheese", "garbage",
    "knowledge", "meat", "rice", "electricity", "gravel",
    "love", "mustard", "sand",
];

/// Words ending in -ie whose plural takes a plain -s (cookie → cookies).
#[rustfmt::skip]
pub const SINGULAR_IE: &[&str] = &[
    "alergie", "cutie", "hoagie", "newbie", "softie",
    "veggie", "auntie", "doggie", "hottie", "nightie",
    "sortie", "weenie", "beanie", "eyrie", "indie",
    "oldie", "stoolie", "yuppie", "birdie", "freebie",
    "junkie", "^pie", "sweetie", "zombie", "bogie",
    "goonie", "laddie", "pixie", "techie", "bombie",
    "groupie", "laramie", "quickie", "^tie", "collie",
    "hankie", "lingerie", "reverie", "toughie", "cookie",
    "hippie", "meanie", "rookie", "valkyrie",
];

lazy_static! {
    /// Compiled pluralization rule groups, tried in order 0..=14.
    pub static ref PLURAL_RULE_GROUPS: Vec<Vec<PluralRule>> = PLURAL_RULES_RAW
        .iter()
        .map(|group| {
            group
                .iter()
                .map(|&(suffix, inflection, category, classical_only)| PluralRule {
                    suffix: Regex::new(suffix).expect("plural rule pattern should be valid"),
                    inflection,
                    category,
                    classical_only,
                })
                .collect()
        })
        .collect();

    /// Category name → member word set, used to gate category rules.
    pub static ref PLURAL_CATEGORIES: HashMap<&'static str, HashSet<&'static str>> =
        PLURAL_CATEGORIES_RAW
            .iter()
            .map(|&(name, members)| (name, members.iter().copied().collect()))
            .collect();

    /// Compiled singularization suffix rules, tried in order.
    pub static ref SINGULAR_RULES: Vec<(Regex, &'static str)> = SINGULAR_RULES_RAW
        .iter()
        .map(|&(pattern, replacement)| {
            (
                Regex::new(pattern).expect("singular rule pattern should be valid"),
                replacement,
            )
        })
        .collect();

    /// Irregular plural suffixes with their case-insensitive anchored patterns.
    pub static ref SINGULAR_IRREGULAR: Vec<(&'static str, Regex, &'static str)> =
        SINGULAR_IRREGULAR_RAW
            .iter()
            .map(|&(suffix, singular)| {
                (
                    suffix,
                    Regex::new(&format!("(?i){suffix}$"))
                        .expect("irregular suffix pattern should be valid"),
                    singular,
                )
            })
            .collect();
}

/// Whether `word` belongs to the named category set.
pub fn in_category(category: &str, word: &str) -> bool {
    PLURAL_CATEGORIES
        .get(category)
        .is_some_and(|members| members.contains(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_groups_compile() {
        // Forces compilation of every table up front.
        assert_eq!(PLURAL_RULE_GROUPS.len(), 15);
        assert!(!SINGULAR_RULES.is_empty());
        assert!(!SINGULAR_IRREGULAR.is_empty());
    }

    #[test]
    fn test_category_membership() {
        assert!(in_category("um-a*", "quantum"));
        assert!(in_category("general-generals", "Major"));
        assert!(!in_category("um-a*", "ox"));
        assert!(!in_category("no-such-category", "anything"));
    }

    #[test]
    fn test_final_group_is_catch_all() {
        let last = PLURAL_RULE_GROUPS.last().unwrap();
        assert_eq!(last.len(), 1);
        assert!(last[0].suffix.is_match("anything"));
    }
}
