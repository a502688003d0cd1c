//! Page counts as entered by the user

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A book's page count
///
/// Input is never rejected: anything that does not start with an integer is
/// kept verbatim as [`Pages::Unparsed`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Pages {
    /// An integer count (no range validation)
    Count(i64),

    /// Raw input that did not start with an integer
    Unparsed(String),
}

impl Pages {
    /// Leniently parse raw user input
    ///
    /// Leading whitespace and an optional sign are accepted, then the longest
    /// run of ASCII digits is taken and any trailing text ignored, so `"12abc"`
    /// and `"12.9"` both give 12.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim_start();
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        let digits = &rest[..digits_end];
        if digits.is_empty() {
            return Self::Unparsed(raw.to_string());
        }

        let signed = if negative {
            format!("-{}", digits)
        } else {
            digits.to_string()
        };
        match signed.parse::<i64>() {
            Ok(n) => Self::Count(n),
            Err(_) => Self::Unparsed(raw.to_string()),
        }
    }

    /// The count, if the input was numeric
    pub fn count(&self) -> Option<i64> {
        match self {
            Self::Count(n) => Some(*n),
            Self::Unparsed(_) => None,
        }
    }
}

impl fmt::Display for Pages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{}", n),
            Self::Unparsed(raw) => f.write_str(raw),
        }
    }
}

/// Accepts any JSON scalar
///
/// Numbers are truncated toward zero, strings go through [`Pages::parse`],
/// and anything else (`null`, booleans, out-of-range numbers) is kept as text.
impl<'de> Deserialize<'de> for Pages {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PagesVisitor)
    }
}

struct PagesVisitor;

impl<'de> Visitor<'de> for PagesVisitor {
    type Value = Pages;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a page count")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Pages, E> {
        Ok(Pages::Unparsed(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Pages, E> {
        Ok(Pages::Count(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Pages, E> {
        Ok(i64::try_from(v)
            .map(Pages::Count)
            .unwrap_or_else(|_| Pages::Unparsed(v.to_string())))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Pages, E> {
        // i64::MAX as f64 rounds up to 2^63, which is itself out of range
        if v.is_finite() && v >= i64::MIN as f64 && v < i64::MAX as f64 {
            Ok(Pages::Count(v.trunc() as i64))
        } else {
            Ok(Pages::Unparsed(v.to_string()))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Pages, E> {
        Ok(Pages::parse(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Pages, E> {
        Ok(Pages::Unparsed("null".to_string()))
    }

    fn visit_none<E: de::Error>(self) -> Result<Pages, E> {
        self.visit_unit()
    }
}
