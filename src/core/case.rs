//! Case formatting for output phrases (`?case=` parameter)

use serde::{Deserialize, Serialize};

/// Output casing. Unknown values fall back to `Lower`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    #[default]
    Lower,
    Upper,
    Title,
    Sentence,
}

impl CaseMode {
    /// Lenient parsing: any casing, surrounding spaces ignored, unknown -> lower.
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()).as_deref() {
            Some("upper") => CaseMode::Upper,
            Some("title") => CaseMode::Title,
            Some("sentence") => CaseMode::Sentence,
            _ => CaseMode::Lower,
        }
    }

    pub fn apply(&self, text: &str) -> String {
        match self {
            CaseMode::Lower => text.to_lowercase(),
            CaseMode::Upper => text.to_uppercase(),
            CaseMode::Title => title_case(text),
            CaseMode::Sentence => capitalize_first(text),
        }
    }
}

/// Uppercase the first word character of every whitespace-delimited token.
/// The rest of each token is left as is, so "seRIBU" becomes "SeRIBU".
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending = true;
    for c in text.chars() {
        if c.is_whitespace() {
            pending = true;
            out.push(c);
        } else if pending && (c.is_alphanumeric() || c == '_') {
            pending = false;
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_param() {
        assert_eq!(CaseMode::from_param(None), CaseMode::Lower);
        assert_eq!(CaseMode::from_param(Some("UPPER")), CaseMode::Upper);
        assert_eq!(CaseMode::from_param(Some(" title ")), CaseMode::Title);
        assert_eq!(CaseMode::from_param(Some("sentence")), CaseMode::Sentence);
        assert_eq!(CaseMode::from_param(Some("shouting")), CaseMode::Lower);
    }

    #[test]
    fn test_apply() {
        let phrase = "minus dua ribu satu";
        assert_eq!(CaseMode::Lower.apply("Seribu"), "seribu");
        assert_eq!(CaseMode::Upper.apply(phrase), "MINUS DUA RIBU SATU");
        assert_eq!(CaseMode::Title.apply(phrase), "Minus Dua Ribu Satu");
        assert_eq!(CaseMode::Sentence.apply(phrase), "Minus dua ribu satu");
        assert_eq!(CaseMode::Sentence.apply(""), "");
    }

    #[test]
    fn test_title_skips_leading_punctuation() {
        assert_eq!(CaseMode::Title.apply("(terlalu besar)"), "(Terlalu Besar)");
    }
}
