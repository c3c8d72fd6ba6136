//! Packing of short textual identifiers into 32-bit OpenType tags.
//!
//! A tag is four ASCII bytes, big-endian, right-padded with spaces. This is
//! the layout fonts store on disk, so a value read straight out of a
//! `LangSysRecord` compares equal to [`encode_tag`] of its identifier.

const PAD: u8 = b' ';

/// Pack `identifier` into a tag, or `None` when it is empty, longer than
/// four bytes, or contains anything other than printable ASCII.
pub const fn try_encode_tag(identifier: &str) -> Option<u32> {
    let bytes = identifier.as_bytes();
    if bytes.is_empty() || bytes.len() > 4 {
        return None;
    }

    let mut packed = [PAD; 4];
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] < 0x20 || bytes[i] > 0x7E {
            return None;
        }
        packed[i] = bytes[i];
        i += 1;
    }
    Some(u32::from_be_bytes(packed))
}

/// Pack `identifier` into a tag. `"ENG"` becomes `b"ENG "` as a big-endian `u32`.
///
/// # Panics
///
/// Wherever [`try_encode_tag`] returns `None`. Table rows call this in
/// `const` context, so a malformed row fails the build instead of reaching
/// runtime.
pub const fn encode_tag(identifier: &str) -> u32 {
    match try_encode_tag(identifier) {
        Some(tag) => tag,
        None => panic!("tag identifier must be 1 to 4 printable ASCII bytes"),
    }
}

/// Tag from the four raw bytes as they appear in a font. No padding is applied.
#[inline(always)]
pub const fn tag_from_bytes(bytes: &[u8; 4]) -> u32 {
    u32::from_be_bytes(*bytes)
}

/// Textual form of a tag with trailing padding trimmed.
///
/// Printable ASCII is kept as-is; any other byte is rendered as `\xNN` so a
/// garbage tag pulled from a broken font still produces a readable message.
pub fn decode_tag(tag: u32) -> String {
    let mut out = String::with_capacity(4);
    for b in tag.to_be_bytes() {
        if (0x20..=0x7E).contains(&b) {
            out.push(char::from(b));
        } else {
            out.push_str(&format!("\\x{b:02X}"));
        }
    }
    out.truncate(out.trim_end_matches(char::from(PAD)).len());
    out
}
