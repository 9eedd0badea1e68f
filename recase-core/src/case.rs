//! The three conversions and the [`Case`] selector.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, InvalidReason, Result, validate_identifier_source};

/// Characters that separate words in delimited input.
const DELIMITERS: [char; 3] = ['-', '_', ' '];

fn is_delimiter(c: char) -> bool {
    DELIMITERS.contains(&c)
}

/// Convert a string to kebab-case (e.g., "helloWorld" -> "hello-world")
///
/// A hyphen is inserted at every ASCII lowercase-to-uppercase transition.
/// Everything outside `[a-z0-9-]` after lowercasing is dropped, so spaces and
/// underscores do not become hyphens ("user_id" -> "userid").
pub fn to_kebab_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_lowercase = false;
    for c in s.chars() {
        if prev_lowercase && c.is_ascii_uppercase() {
            result.push('-');
        }
        prev_lowercase = c.is_ascii_lowercase();

        let c = c.to_ascii_lowercase();
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            result.push(c);
        }
    }
    result
}

/// Convert a string to camelCase (e.g., "SCREEN_NAME" -> "screenName")
///
/// Words are separated by runs of hyphens, underscores and spaces, and by
/// case boundaries inside a token (see [`split_words`]). The first word is
/// lowercased, every following word is capitalized.
///
/// Fails when the input starts with a digit or is the missing-value sentinel.
pub fn to_camel_case(s: &str) -> Result<String> {
    validate_identifier_source(s)?;

    let mut result = String::with_capacity(s.len());
    for (i, word) in split_words(s).into_iter().enumerate() {
        if i == 0 {
            result.push_str(&word.to_lowercase());
            continue;
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(&chars.as_str().to_lowercase());
        }
    }
    Ok(result)
}

/// Convert a string to dot.case (e.g., "mobile-number" -> "mobile.number")
///
/// Unlike kebab-case, no separator is inserted at case transitions:
/// "HTNstatus" becomes "htnstatus".
///
/// Fails when the input starts with a digit or is the missing-value sentinel.
pub fn to_dot_case(s: &str) -> Result<String> {
    validate_identifier_source(s)?;

    let mut result = String::with_capacity(s.len());
    let mut in_delimiter = false;
    for c in s.chars() {
        if is_delimiter(c) {
            if !in_delimiter {
                result.push('.');
            }
            in_delimiter = true;
        } else {
            in_delimiter = false;
            result.extend(c.to_lowercase());
        }
    }
    Ok(result)
}

/// Split input into words.
///
/// Boundaries are delimiter runs, a lowercase letter or digit followed by an
/// uppercase letter ("userId" -> "user", "Id"), and the end of an uppercase
/// run of two or more letters followed by a lowercase letter
/// ("HTNstatus" -> "HTN", "status"). Empty words are never produced.
pub(crate) fn split_words(s: &str) -> Vec<&str> {
    let mut words = Vec::new();

    for token in s.split(is_delimiter).filter(|t| !t.is_empty()) {
        let mut start = 0;
        let mut prev: Option<char> = None;
        let mut upper_run = 0usize;

        for (i, c) in token.char_indices() {
            if let Some(p) = prev {
                let lower_to_upper = (p.is_lowercase() || p.is_ascii_digit()) && c.is_uppercase();
                let acronym_end = upper_run >= 2 && c.is_lowercase();
                if lower_to_upper || acronym_end {
                    words.push(&token[start..i]);
                    start = i;
                }
            }
            upper_run = if c.is_uppercase() { upper_run + 1 } else { 0 };
            prev = Some(c);
        }
        words.push(&token[start..]);
    }

    words
}

/// Target naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    Kebab,
    Camel,
    Dot,
}

impl Case {
    pub const ALL: [Case; 3] = [Case::Kebab, Case::Camel, Case::Dot];

    pub fn name(&self) -> &'static str {
        match self {
            Case::Kebab => "kebab",
            Case::Camel => "camel",
            Case::Dot => "dot",
        }
    }

    /// Convert `input` to this case.
    pub fn convert(self, input: &str) -> Result<String> {
        match self {
            Case::Kebab => Ok(to_kebab_case(input)),
            Case::Camel => to_camel_case(input),
            Case::Dot => to_dot_case(input),
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Names are matched ignoring ASCII case, so "CAMEL" and "Dot.Case" parse.
impl FromStr for Case {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "kebab" | "kebab-case" => Ok(Case::Kebab),
            "camel" | "camelcase" | "camel-case" => Ok(Case::Camel),
            "dot" | "dot-case" | "dot.case" => Ok(Case::Dot),
            _ => Err(format!(
                "unknown case '{}', expected one of: kebab, camel, dot",
                s
            )),
        }
    }
}

/// Convert raw bytes, failing with [`InvalidReason::NotText`] unless they are
/// valid UTF-8. This is the text check for all three cases, kebab included.
pub fn convert_bytes(case: Case, bytes: &[u8]) -> Result<String> {
    let input = std::str::from_utf8(bytes).map_err(|_| {
        Error::invalid_input(String::from_utf8_lossy(bytes), InvalidReason::NotText)
    })?;
    case.convert(input)
}
