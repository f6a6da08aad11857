//! Validated newtypes for the FHIR R4 primitive types.
//!
//! Each newtype enforces the lexical grammar of its type when the value is
//! created, so an in-memory value is always well-formed. Construction goes
//! through `TryFrom`/`FromStr`; serde runs the same checks on the parse path
//! via `try_from`.
//!
//! `boolean`, `integer` and `string` map to plain `bool`, `i32` and `String`.

use crate::error::{Error, Result};
use chrono::{DateTime as ChronoDateTime, FixedOffset, SecondsFormat};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use rust_decimal::Decimal;

static ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9\-\.]{1,64}$").unwrap());
static CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s]+(\s[^\s]+)*$").unwrap());
static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([0-9]([0-9]([0-9][1-9]|[1-9]0)|[1-9]00)|[1-9]000)(-(0[1-9]|1[0-2])(-(0[1-9]|[1-2][0-9]|3[0-1]))?)?$",
    )
    .unwrap()
});
static DATE_TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([0-9]([0-9]([0-9][1-9]|[1-9]0)|[1-9]00)|[1-9]000)(-(0[1-9]|1[0-2])(-(0[1-9]|[1-2][0-9]|3[0-1])(T([01][0-9]|2[0-3]):[0-5][0-9]:([0-5][0-9]|60)(\.[0-9]+)?(Z|(\+|-)((0[0-9]|1[0-3]):[0-5][0-9]|14:00)))?)?)?$",
    )
    .unwrap()
});
static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]:([0-5][0-9]|60)(\.[0-9]+)?$").unwrap());

/// Logical id: `[A-Za-z0-9\-\.]{1,64}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Id(String);

/// A symbol taken from a code system: no leading/trailing whitespace, no
/// runs of internal whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Code(String);

/// A URI (RFC 3986): non-empty, no whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Uri(String);

/// A URI referring to a canonical URL, optionally with a `|version` suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Canonical(String);

/// A string that may carry markdown; must contain visible content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Markdown(String);

/// A date, or partial date, with no time zone: `YYYY`, `YYYY-MM` or
/// `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Date(String);

/// A date/(partial) time. If hours and minutes are present a time zone
/// offset is required, per the R4 grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateTime(String);

/// A time of day: `HH:MM:SS[.fff]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Time(String);

/// An instant in time, fully specified to at least the second with a time
/// zone offset. Backed by a parsed timestamp rather than the lexical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Instant(ChronoDateTime<FixedOffset>);

/// An integer in the range 1..=2_147_483_647.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PositiveInt(u32);

/// An integer in the range 0..=2_147_483_647.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct UnsignedInt(u32);

/// Narrative content: an XHTML fragment rooted at a `<div>` element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Xhtml(String);

macro_rules! string_primitive {
    ($ty:ident, $element:literal, $check:expr) => {
        impl $ty {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $ty {
            type Error = Error;

            fn try_from(value: String) -> Result<Self> {
                let check: fn(&str) -> std::result::Result<(), String> = $check;
                check(&value).map_err(|reason| Error::invalid($element, reason))?;
                Ok($ty(value))
            }
        }

        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                $ty::try_from(s.to_string())
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> String {
                value.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_primitive!(Id, "id", |s| {
    if ID_RE.is_match(s) {
        Ok(())
    } else {
        Err(format!("{s:?} does not match [A-Za-z0-9\\-\\.]{{1,64}}"))
    }
});

string_primitive!(Code, "code", |s| {
    if CODE_RE.is_match(s) {
        Ok(())
    } else {
        Err(format!("{s:?} has leading, trailing or doubled whitespace"))
    }
});

string_primitive!(Uri, "uri", |s| {
    if s.is_empty() {
        Err("uri must not be empty".to_string())
    } else if s.contains(char::is_whitespace) {
        Err(format!("{s:?} contains whitespace"))
    } else {
        Ok(())
    }
});

string_primitive!(Canonical, "canonical", |s| {
    if s.is_empty() {
        Err("canonical must not be empty".to_string())
    } else if s.contains(char::is_whitespace) {
        Err(format!("{s:?} contains whitespace"))
    } else {
        Ok(())
    }
});

string_primitive!(Markdown, "markdown", |s| {
    if s.chars().any(|c| !c.is_whitespace()) {
        Ok(())
    } else {
        Err("markdown must contain non-whitespace content".to_string())
    }
});

string_primitive!(Date, "date", |s| {
    if DATE_RE.is_match(s) {
        Ok(())
    } else {
        Err(format!("{s:?} is not a valid FHIR date"))
    }
});

string_primitive!(DateTime, "dateTime", |s| {
    if DATE_TIME_RE.is_match(s) {
        Ok(())
    } else {
        Err(format!("{s:?} is not a valid FHIR dateTime"))
    }
});

string_primitive!(Time, "time", |s| {
    if TIME_RE.is_match(s) {
        Ok(())
    } else {
        Err(format!("{s:?} is not a valid FHIR time"))
    }
});

string_primitive!(Xhtml, "xhtml", |s| {
    let trimmed = s.trim();
    if trimmed.starts_with("<div") && trimmed.ends_with("</div>") {
        Ok(())
    } else {
        Err("xhtml narrative must be a single <div> element".to_string())
    }
});

impl Instant {
    pub fn value(&self) -> &ChronoDateTime<FixedOffset> {
        &self.0
    }
}

impl TryFrom<String> for Instant {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        let parsed = ChronoDateTime::parse_from_rfc3339(&value)
            .map_err(|e| Error::invalid("instant", e.to_string()))?;
        Ok(Instant(parsed))
    }
}

impl FromStr for Instant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Instant::try_from(s.to_string())
    }
}

impl From<ChronoDateTime<FixedOffset>> for Instant {
    fn from(value: ChronoDateTime<FixedOffset>) -> Self {
        Instant(value)
    }
}

impl From<Instant> for String {
    fn from(value: Instant) -> String {
        value.0.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl PositiveInt {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for PositiveInt {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        if value == 0 || value > i32::MAX as u32 {
            return Err(Error::invalid(
                "positiveInt",
                format!("{value} is outside 1..=2147483647"),
            ));
        }
        Ok(PositiveInt(value))
    }
}

impl From<PositiveInt> for u32 {
    fn from(value: PositiveInt) -> u32 {
        value.0
    }
}

impl fmt::Display for PositiveInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl UnsignedInt {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for UnsignedInt {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        if value > i32::MAX as u32 {
            return Err(Error::invalid(
                "unsignedInt",
                format!("{value} is outside 0..=2147483647"),
            ));
        }
        Ok(UnsignedInt(value))
    }
}

impl From<UnsignedInt> for u32 {
    fn from(value: UnsignedInt) -> u32 {
        value.0
    }
}

impl fmt::Display for UnsignedInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_grammar() {
        assert!("example-1.2".parse::<Id>().is_ok());
        assert!("a".repeat(64).parse::<Id>().is_ok());
        assert!("a".repeat(65).parse::<Id>().is_err());
        assert!("no spaces".parse::<Id>().is_err());
        assert!("under_score".parse::<Id>().is_err());
        assert!("".parse::<Id>().is_err());
    }

    #[test]
    fn code_grammar() {
        assert!("active".parse::<Code>().is_ok());
        assert!("two words".parse::<Code>().is_ok());
        assert!(" leading".parse::<Code>().is_err());
        assert!("trailing ".parse::<Code>().is_err());
        assert!("double  space".parse::<Code>().is_err());
        assert!("".parse::<Code>().is_err());
    }

    #[test]
    fn date_grammar() {
        assert!("2021".parse::<Date>().is_ok());
        assert!("2021-03".parse::<Date>().is_ok());
        assert!("2021-03-17".parse::<Date>().is_ok());
        assert!("2021-13-01".parse::<Date>().is_err());
        assert!("2021-03-32".parse::<Date>().is_err());
        assert!("21-03-17".parse::<Date>().is_err());
    }

    #[test]
    fn date_time_grammar() {
        assert!("2021".parse::<DateTime>().is_ok());
        assert!("2021-03-17".parse::<DateTime>().is_ok());
        assert!("2021-03-17T12:00:00Z".parse::<DateTime>().is_ok());
        assert!("2021-03-17T12:00:00+02:00".parse::<DateTime>().is_ok());
        // Time without a zone offset is not a valid R4 dateTime.
        assert!("2021-03-17T12:00:00".parse::<DateTime>().is_err());
    }

    #[test]
    fn time_grammar() {
        assert!("09:30:00".parse::<Time>().is_ok());
        assert!("23:59:59.999".parse::<Time>().is_ok());
        assert!("24:00:00".parse::<Time>().is_err());
    }

    #[test]
    fn instant_parses_and_round_trips() {
        let instant: Instant = "2021-03-17T12:00:00Z".parse().expect("valid instant");
        assert_eq!(String::from(instant.clone()), "2021-03-17T12:00:00Z");
        assert!("2021-03-17".parse::<Instant>().is_err());
    }

    #[test]
    fn bounded_integers() {
        assert!(PositiveInt::try_from(1).is_ok());
        assert!(PositiveInt::try_from(0).is_err());
        assert!(PositiveInt::try_from(2_147_483_648).is_err());
        assert!(UnsignedInt::try_from(0).is_ok());
        assert!(UnsignedInt::try_from(2_147_483_648).is_err());
    }

    #[test]
    fn xhtml_requires_div_root() {
        assert!("<div xmlns=\"http://www.w3.org/1999/xhtml\">ok</div>"
            .parse::<Xhtml>()
            .is_ok());
        assert!("<p>not a div</p>".parse::<Xhtml>().is_err());
    }
}
