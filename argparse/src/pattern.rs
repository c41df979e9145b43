//! Pattern table: context-free shape recognition.
//!
//! Each entry pairs a predicate over the raw argument with the shape it
//! recognizes. Entries are tested in table order and the first match wins;
//! an argument matching no entry is a [`ContextFreeType::Word`].
//!
//! The predicates are pairwise disjoint, so the order never changes which
//! shape an argument gets. It is kept from most to least specific anyway:
//!
//! | # | shape | example |
//! |---|-------|---------|
//! | 1 | end of options | `--` |
//! | 2 | GNU explicit assignment | `--name=value` |
//! | 3 | two-dash word | `--name` |
//! | 4 | X-toolkit explicit assignment | `-name=value` |
//! | 5 | one-dash letter | `-x` |
//! | 6 | sticky value | `-n12` |
//! | 7 | one-dash alphanumeric word | `-abc` |
//! | 8 | one-dash word | `-long-name`, `-ns.flag` |
//! | 9 | X-toolkit reverse switch | `+name` |
//! | 10 | old-style option word | `word` |
//!
//! An option body must start with an ASCII alphanumeric character, so
//! punctuation-led text such as `-_x` or `--_x` stays a word.

use argshape_core::ContextFreeType;

/// One row of the pattern table.
#[derive(Debug, Clone, Copy)]
pub struct Pattern {
    pub shape: ContextFreeType,
    pub test: fn(&str) -> bool,
}

impl Pattern {
    pub fn matches(&self, arg: &str) -> bool {
        (self.test)(arg)
    }
}

/// The pattern table, in priority order.
pub const PATTERNS: [Pattern; 10] = [
    Pattern {
        shape: ContextFreeType::EndOfOptions,
        test: is_end_of_options,
    },
    Pattern {
        shape: ContextFreeType::GnuExplicitAssignment,
        test: is_gnu_explicit_assignment,
    },
    Pattern {
        shape: ContextFreeType::TwoDashWord,
        test: is_two_dash_word,
    },
    Pattern {
        shape: ContextFreeType::XToolkitExplicitAssignment,
        test: is_xtoolkit_explicit_assignment,
    },
    Pattern {
        shape: ContextFreeType::OneDashLetter,
        test: is_one_dash_letter,
    },
    Pattern {
        shape: ContextFreeType::PosixShortStickyValue,
        test: is_sticky_value,
    },
    Pattern {
        shape: ContextFreeType::OneDashWordAlphaNum,
        test: is_one_dash_word_alphanum,
    },
    Pattern {
        shape: ContextFreeType::OneDashWord,
        test: is_one_dash_word,
    },
    Pattern {
        shape: ContextFreeType::XToolkitReverseSwitch,
        test: is_reverse_switch,
    },
    Pattern {
        shape: ContextFreeType::OptWord,
        test: is_opt_word,
    },
];

/// Returns the shape of `arg`.
pub fn classify(arg: &str) -> ContextFreeType {
    PATTERNS
        .iter()
        .find(|pattern| pattern.matches(arg))
        .map_or(ContextFreeType::Word, |pattern| pattern.shape)
}

fn is_end_of_options(arg: &str) -> bool {
    arg == "--"
}

fn is_gnu_explicit_assignment(arg: &str) -> bool {
    arg.strip_prefix("--")
        .and_then(|body| body.split_once('='))
        .is_some_and(|(name, _)| is_option_name(name))
}

fn is_two_dash_word(arg: &str) -> bool {
    arg.strip_prefix("--")
        .is_some_and(|body| body.len() >= 2 && is_option_name(body))
}

fn is_xtoolkit_explicit_assignment(arg: &str) -> bool {
    one_dash_body(arg)
        .and_then(|body| body.split_once('='))
        .is_some_and(|(name, _)| is_option_name(name))
}

fn is_one_dash_letter(arg: &str) -> bool {
    one_dash_body(arg).is_some_and(|body| body.len() == 1 && is_alphanumeric(body))
}

fn is_sticky_value(arg: &str) -> bool {
    one_dash_body(arg).is_some_and(is_sticky_body)
}

fn is_one_dash_word_alphanum(arg: &str) -> bool {
    one_dash_body(arg)
        .is_some_and(|body| body.len() >= 2 && is_alphanumeric(body) && !is_sticky_body(body))
}

fn is_one_dash_word(arg: &str) -> bool {
    one_dash_body(arg).is_some_and(|body| {
        is_option_name(body) && body.contains(|ch: char| matches!(ch, '-' | '_' | '.'))
    })
}

fn is_reverse_switch(arg: &str) -> bool {
    arg.strip_prefix('+').is_some_and(is_option_name)
}

fn is_opt_word(arg: &str) -> bool {
    let mut chars = arg.chars();
    chars.next().is_some_and(|ch| ch.is_ascii_alphanumeric())
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

/// Body after a single leading dash; `None` for `--`-prefixed arguments.
fn one_dash_body(arg: &str) -> Option<&str> {
    arg.strip_prefix('-').filter(|body| !body.starts_with('-'))
}

/// A letter followed by one or more digits.
fn is_sticky_body(body: &str) -> bool {
    let mut chars = body.chars();
    chars.next().is_some_and(|ch| ch.is_ascii_alphabetic())
        && !chars.as_str().is_empty()
        && chars.all(|ch| ch.is_ascii_digit())
}

fn is_alphanumeric(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|ch| ch.is_ascii_alphanumeric())
}

fn is_option_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|ch| ch.is_ascii_alphanumeric())
        && chars.all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One sample per shape, plus the edge cases that must fall through.
    const SAMPLES: &[(&str, ContextFreeType)] = &[
        ("--", ContextFreeType::EndOfOptions),
        ("--option=value", ContextFreeType::GnuExplicitAssignment),
        ("--option=12", ContextFreeType::GnuExplicitAssignment),
        ("--long-option=value", ContextFreeType::GnuExplicitAssignment),
        ("--long_option=12", ContextFreeType::GnuExplicitAssignment),
        ("--po=TOTO_to", ContextFreeType::GnuExplicitAssignment),
        ("--option", ContextFreeType::TwoDashWord),
        ("--long-option", ContextFreeType::TwoDashWord),
        ("--arg2", ContextFreeType::TwoDashWord),
        ("-option=value", ContextFreeType::XToolkitExplicitAssignment),
        ("-option=12", ContextFreeType::XToolkitExplicitAssignment),
        ("-long-option=value", ContextFreeType::XToolkitExplicitAssignment),
        ("-long_option=value", ContextFreeType::XToolkitExplicitAssignment),
        ("-o", ContextFreeType::OneDashLetter),
        ("-1", ContextFreeType::OneDashLetter),
        ("-n3", ContextFreeType::PosixShortStickyValue),
        ("-n12", ContextFreeType::PosixShortStickyValue),
        ("-opt", ContextFreeType::OneDashWordAlphaNum),
        ("-n12p", ContextFreeType::OneDashWordAlphaNum),
        ("-12", ContextFreeType::OneDashWordAlphaNum),
        ("-long-option", ContextFreeType::OneDashWord),
        ("-ns.flag", ContextFreeType::OneDashWord),
        ("+option", ContextFreeType::XToolkitReverseSwitch),
        ("+long-option", ContextFreeType::XToolkitReverseSwitch),
        ("+long_option", ContextFreeType::XToolkitReverseSwitch),
        ("word", ContextFreeType::OptWord),
        ("TOTO_to", ContextFreeType::OptWord),
        ("-_not_an_option", ContextFreeType::Word),
        ("--_not_an_option", ContextFreeType::Word),
        ("this is a sentence", ContextFreeType::Word),
        ("/path/to/resource", ContextFreeType::Word),
        ("http://foo.com/bar", ContextFreeType::Word),
        ("--a", ContextFreeType::Word),
        ("---", ContextFreeType::Word),
        ("-", ContextFreeType::Word),
        ("+", ContextFreeType::Word),
        ("", ContextFreeType::Word),
    ];

    #[test]
    fn test_classify_samples() {
        for (arg, expected) in SAMPLES {
            assert_eq!(classify(arg), *expected, "argument {arg:?}");
        }
    }

    #[test]
    fn test_table_priority_order() {
        let order: Vec<ContextFreeType> = PATTERNS.iter().map(|p| p.shape).collect();
        assert_eq!(
            order,
            vec![
                ContextFreeType::EndOfOptions,
                ContextFreeType::GnuExplicitAssignment,
                ContextFreeType::TwoDashWord,
                ContextFreeType::XToolkitExplicitAssignment,
                ContextFreeType::OneDashLetter,
                ContextFreeType::PosixShortStickyValue,
                ContextFreeType::OneDashWordAlphaNum,
                ContextFreeType::OneDashWord,
                ContextFreeType::XToolkitReverseSwitch,
                ContextFreeType::OptWord,
            ]
        );
    }

    #[test]
    fn test_patterns_do_not_overlap() {
        for (arg, expected) in SAMPLES {
            let hits: Vec<ContextFreeType> = PATTERNS
                .iter()
                .filter(|p| p.matches(arg))
                .map(|p| p.shape)
                .collect();
            if *expected == ContextFreeType::Word {
                assert!(hits.is_empty(), "{arg:?} matched {hits:?}");
            } else {
                assert_eq!(hits, vec![*expected], "argument {arg:?}");
            }
        }
    }

    #[test]
    fn test_word_is_not_in_table() {
        assert!(
            PATTERNS
                .iter()
                .all(|p| p.shape != ContextFreeType::Word)
        );
    }
}
