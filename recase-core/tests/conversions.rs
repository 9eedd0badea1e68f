//! Behavior of the public conversion API across all three cases.

use recase_core::{
    Case, InvalidReason, MISSING_VALUE_SENTINEL, convert_bytes, to_camel_case, to_dot_case,
    to_kebab_case,
};

/// Inputs made of letters, digits, hyphens and underscores whose first word
/// does not begin with a digit, and where no one-letter word other than the
/// first is followed by a word starting with a letter. Such a word is
/// capitalized next to another capital ("a_b_c" -> "aBC") and reads back as an
/// acronym.
const IDENTIFIER_LIKE: &[&str] = &[
    "first_name",
    "user_id",
    "SCREEN_NAME",
    "mobile-number",
    "HTNstatus",
    "helloWorld",
    "id2Name",
    "ABc",
    "aBCd",
    "alpha__beta--gamma",
    "_leading",
    "trailing_",
    "x",
    "",
];

#[test]
fn test_camel_case_is_idempotent() {
    for input in IDENTIFIER_LIKE {
        let once = to_camel_case(input).unwrap();
        let twice = to_camel_case(&once).unwrap();
        assert_eq!(once, twice, "camelCase not idempotent for {:?}", input);
    }
}

#[test]
fn test_dot_case_is_idempotent() {
    for input in IDENTIFIER_LIKE {
        let once = to_dot_case(input).unwrap();
        let twice = to_dot_case(&once).unwrap();
        assert_eq!(once, twice, "dot.case not idempotent for {:?}", input);
    }
}

/// Word shapes that `split_words` keeps whole when joined by delimiters.
const WORD_SHAPES: &[&str] = &["a", "A", "ab", "AB", "Ab", "a2", "2a"];

/// Every delimiter-joined combination of one to three word shapes.
fn word_combinations() -> Vec<Vec<&'static str>> {
    let mut combos: Vec<Vec<&str>> = WORD_SHAPES.iter().map(|w| vec![*w]).collect();
    let mut current = combos.clone();
    for _ in 1..3 {
        let next: Vec<Vec<&str>> = current
            .iter()
            .flat_map(|prefix| {
                WORD_SHAPES.iter().map(move |w| {
                    let mut words = prefix.clone();
                    words.push(*w);
                    words
                })
            })
            .collect();
        combos.extend(next.iter().cloned());
        current = next;
    }
    combos
}

/// A one-letter word after the first, followed by a word starting with a letter.
fn has_ambiguous_one_letter_word(words: &[&str]) -> bool {
    words.windows(2).skip(1).any(|pair| {
        let one_letter = pair[0].chars().count() == 1
            && pair[0].chars().all(|c| c.is_alphabetic());
        let next_starts_with_letter = pair[1].chars().next().is_some_and(|c| c.is_alphabetic());
        one_letter && next_starts_with_letter
    })
}

#[test]
fn test_camel_case_idempotence_over_word_shapes() {
    for words in word_combinations() {
        if words[0].starts_with(|c: char| c.is_ascii_digit()) {
            continue;
        }
        for delimiter in ["_", "-"] {
            let input = words.join(delimiter);
            let once = to_camel_case(&input).unwrap();
            let twice = to_camel_case(&once).unwrap();
            if has_ambiguous_one_letter_word(&words) {
                assert_ne!(once, twice, "expected {:?} to read back differently", input);
            } else {
                assert_eq!(once, twice, "camelCase not idempotent for {:?}", input);
            }
        }
    }
}

#[test]
fn test_dot_case_idempotence_over_word_shapes() {
    for words in word_combinations() {
        if words[0].starts_with(|c: char| c.is_ascii_digit()) {
            continue;
        }
        let input = words.join("-");
        let once = to_dot_case(&input).unwrap();
        assert_eq!(once, to_dot_case(&once).unwrap(), "input {:?}", input);
    }
}

#[test]
fn test_one_letter_word_before_capitalized_word_reads_back_as_acronym() {
    // a|BC|d|EF: "D" lands next to "Ef" and the second pass sees "DE"
    let once = to_camel_case("aBCdEF").unwrap();
    assert_eq!(once, "aBcDEf");
    assert_eq!(to_camel_case(&once).unwrap(), "aBcDeF");

    assert_eq!(to_camel_case("a_b_c").unwrap(), "aBC");
    assert_eq!(to_camel_case("aBC").unwrap(), "aBc");
}

#[test]
fn test_kebab_and_dot_disagree_on_case_boundaries() {
    assert_eq!(to_kebab_case("helloWorld"), "hello-world");
    assert_eq!(to_dot_case("helloWorld").unwrap(), "helloworld");
}

#[test]
fn test_sentinel_rejected_by_validating_cases() {
    for case in [Case::Camel, Case::Dot] {
        let err = case.convert(MISSING_VALUE_SENTINEL).unwrap_err();
        assert_eq!(err.reason(), InvalidReason::Sentinel);
    }
    assert_eq!(Case::Kebab.convert(MISSING_VALUE_SENTINEL).unwrap(), "na");
}

#[test]
fn test_leading_digit_rejected_by_validating_cases() {
    for case in [Case::Camel, Case::Dot] {
        let err = case.convert("5cats").unwrap_err();
        assert_eq!(err.reason(), InvalidReason::LeadingDigit);
    }
}

#[test]
fn test_empty_input_is_not_an_error() {
    for case in Case::ALL {
        assert_eq!(case.convert("").unwrap(), "");
    }
}

#[test]
fn test_non_text_input_is_rejected() {
    let latin1 = b"caf\xe9";
    for case in Case::ALL {
        let err = convert_bytes(case, latin1).unwrap_err();
        assert_eq!(err.reason(), InvalidReason::NotText);
        assert!(err.to_string().contains("input must be text"));
    }
}

#[test]
fn test_case_deserializes_from_toml() {
    #[derive(serde::Deserialize)]
    struct Settings {
        case: Case,
    }
    let settings: Settings = toml::from_str(r#"case = "dot""#).unwrap();
    assert_eq!(settings.case, Case::Dot);
}
