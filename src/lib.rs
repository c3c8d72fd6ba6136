pub mod lang;
pub mod tag;

pub use lang::data;
pub use lang::{
    LangTagError, LanguageTag, all_language_tags, by_identifier, by_tag, by_tag_bytes,
    with_iso3_code,
};
pub use tag::{decode_tag, encode_tag, tag_from_bytes, try_encode_tag};
