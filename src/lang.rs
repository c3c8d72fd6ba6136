pub mod data;

use std::fmt;

use serde::{Serialize, Serializer, ser::SerializeStruct};
use smallvec::SmallVec;
use thiserror::Error;
use tracing::debug;

use crate::tag::{decode_tag, encode_tag, tag_from_bytes};
use data::{ALL_LANGUAGE_TAGS, LANGUAGE_TAG_INDEX};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LangTagError {
    #[error("unknown language tag '{text}'")]
    NotFound { tag: u32, text: String },
}

/// One row of the OpenType language system table.
///
/// `display_name` is the label from the OpenType registry and keeps its
/// spelling quirks. `iso639_name` is `None` when the tag maps to several
/// ISO 639-3 languages or to none at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LanguageTag {
    identifier: &'static str,
    tag: u32,
    display_name: &'static str,
    iso639_name: Option<&'static str>,
    iso3_list: &'static str,
    deprecated: bool,
}

impl LanguageTag {
    /// Build a row. The tag is derived from `identifier` and never stored separately.
    pub(crate) const fn new(
        identifier: &'static str,
        display_name: &'static str,
        iso639_name: Option<&'static str>,
        iso3_list: &'static str,
        deprecated: bool,
    ) -> Self {
        Self {
            identifier,
            tag: encode_tag(identifier),
            display_name,
            iso639_name,
            iso3_list,
            deprecated,
        }
    }

    #[inline(always)]
    pub const fn identifier(&self) -> &'static str {
        self.identifier
    }

    #[inline(always)]
    pub const fn tag(&self) -> u32 {
        self.tag
    }

    /// The language system as named by the OpenType registry.
    #[inline(always)]
    pub const fn display_name(&self) -> &'static str {
        self.display_name
    }

    #[inline(always)]
    pub const fn iso639_name(&self) -> Option<&'static str> {
        self.iso639_name
    }

    /// The comma-separated code list exactly as stored.
    #[inline(always)]
    pub const fn raw_iso3_list(&self) -> &'static str {
        self.iso3_list
    }

    /// ISO 639-3 codes in registry order. Empty when no code applies.
    pub fn iso3_codes(&self) -> SmallVec<[&'static str; 4]> {
        if self.iso3_list.is_empty() {
            return SmallVec::new();
        }
        self.iso3_list.split(',').collect()
    }

    pub fn covers_iso3(&self, code: &str) -> bool {
        !self.iso3_list.is_empty() && self.iso3_list.split(',').any(|c| c == code)
    }

    /// Superseded tag, still valid when reading older fonts.
    #[inline(always)]
    pub const fn is_deprecated(&self) -> bool {
        self.deprecated
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.identifier, self.display_name)
    }
}

impl Serialize for LanguageTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("LanguageTag", 6)?;
        s.serialize_field("identifier", self.identifier)?;
        s.serialize_field("tag", &self.tag)?;
        s.serialize_field("display_name", self.display_name)?;
        s.serialize_field("iso639_name", &self.iso639_name)?;
        s.serialize_field("iso3_codes", &self.iso3_codes())?;
        s.serialize_field("deprecated", &self.deprecated)?;
        s.end()
    }
}

/// Resolve a tag read from a font.
pub fn by_tag(tag: u32) -> Result<&'static LanguageTag, LangTagError> {
    let text = decode_tag(tag);
    match LANGUAGE_TAG_INDEX.get(text.as_str()) {
        Some(entry) if entry.tag() == tag => Ok(entry),
        _ => {
            debug!(tag, text = %text, "language tag not in registry");
            Err(LangTagError::NotFound { tag, text })
        }
    }
}

#[inline]
pub fn by_tag_bytes(bytes: &[u8; 4]) -> Result<&'static LanguageTag, LangTagError> {
    by_tag(tag_from_bytes(bytes))
}

/// Exact, case-sensitive: `TMH` and `tmh` are different rows.
#[inline]
pub fn by_identifier(identifier: &str) -> Option<&'static LanguageTag> {
    LANGUAGE_TAG_INDEX.get(identifier)
}

/// Every row, in table order.
#[inline(always)]
pub fn all_language_tags() -> &'static [LanguageTag] {
    ALL_LANGUAGE_TAGS
}

/// Rows listing `code` among their ISO 639-3 codes. Several rows may match.
pub fn with_iso3_code(code: &str) -> impl Iterator<Item = &'static LanguageTag> {
    ALL_LANGUAGE_TAGS.iter().filter(move |e| e.covers_iso3(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: LanguageTag = LanguageTag::new("XYZ", "Sample", None, "abk,xyz", false);
    const EMPTY: LanguageTag = LanguageTag::new("XY", "Empty", Some("Empty"), "", false);

    #[test]
    fn iso3_codes_split_in_order() {
        assert_eq!(SAMPLE.iso3_codes().as_slice(), &["abk", "xyz"]);
    }

    #[test]
    fn iso3_codes_empty_list_is_empty() {
        assert!(EMPTY.iso3_codes().is_empty());
        assert!(!EMPTY.covers_iso3(""));
    }

    #[test]
    fn covers_iso3_matches_whole_codes() {
        assert!(SAMPLE.covers_iso3("abk"));
        assert!(SAMPLE.covers_iso3("xyz"));
        assert!(!SAMPLE.covers_iso3("ab"));
        assert!(!SAMPLE.covers_iso3("abk,xyz"));
    }

    #[test]
    fn tag_is_derived_from_identifier() {
        assert_eq!(SAMPLE.tag(), encode_tag("XYZ"));
        assert_eq!(EMPTY.tag(), u32::from_be_bytes(*b"XY  "));
    }

    #[test]
    fn display_shows_identifier_and_name() {
        assert_eq!(SAMPLE.to_string(), "XYZ: Sample");
    }

    #[test]
    fn not_found_message_uses_decoded_text() {
        let err = by_tag(encode_tag("xyz")).unwrap_err();
        assert_eq!(err.to_string(), "unknown language tag 'xyz'");
        assert_eq!(
            err,
            LangTagError::NotFound {
                tag: u32::from_be_bytes(*b"xyz "),
                text: "xyz".to_string(),
            }
        );
    }

    #[test]
    fn serialize_expands_codes() {
        let json = serde_json::to_value(SAMPLE).unwrap();
        assert_eq!(json["identifier"], "XYZ");
        assert_eq!(json["iso639_name"], serde_json::Value::Null);
        assert_eq!(json["iso3_codes"], serde_json::json!(["abk", "xyz"]));
        assert_eq!(json["deprecated"], false);
    }
}
