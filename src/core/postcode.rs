//! UK postcode validation and normalisation.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Shortest valid form is `A9 9AA`, five characters once spaces are removed.
const MIN_LEN: usize = 5;

static POSTCODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{1,2}[0-9][0-9A-Z]?[0-9][A-Z]{2}$").expect("valid postcode pattern")
});

/// A syntactically valid postcode, upper-case with a single space before
/// the inward code (e.g. `ME19 4HT`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Postcode(String);

impl Postcode {
    pub fn parse(input: &str) -> AppResult<Self> {
        let compact: String = input
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();

        if compact.len() < MIN_LEN {
            return Err(AppError::InvalidInput(format!(
                "'{}' is too short to be a postcode",
                input.trim()
            )));
        }

        if !POSTCODE_RE.is_match(&compact) {
            return Err(AppError::InvalidInput(format!(
                "'{}' is not a valid UK postcode",
                input.trim()
            )));
        }

        let (outward, inward) = compact.split_at(compact.len() - 3);
        Ok(Self(format!("{outward} {inward}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// District half of the postcode (`ME19` in `ME19 4HT`).
    pub fn outward(&self) -> &str {
        self.0.split(' ').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
