mod prop_tests {
    use crate::{LangTagError, all_language_tags, by_tag, decode_tag, encode_tag};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn decode_inverts_encode(id in "[!-~]([ -~]{0,2}[!-~])?") {
            prop_assert_eq!(decode_tag(encode_tag(&id)), id);
        }

        #[test]
        fn encode_is_big_endian_space_padded(id in "[!-~]{1,4}") {
            let mut bytes = [b' '; 4];
            bytes[..id.len()].copy_from_slice(id.as_bytes());
            prop_assert_eq!(encode_tag(&id), u32::from_be_bytes(bytes));
        }

        #[test]
        fn lookup_hits_matching_entry_or_reports_text(tag in any::<u32>()) {
            match by_tag(tag) {
                Ok(e) => prop_assert_eq!(e.tag(), tag),
                Err(LangTagError::NotFound { tag: t, text }) => {
                    prop_assert_eq!(t, tag);
                    prop_assert_eq!(text, decode_tag(tag));
                    prop_assert!(all_language_tags().iter().all(|e| e.tag() != tag));
                }
            }
        }

        #[test]
        fn every_entry_resolves(i in 0..all_language_tags().len()) {
            let e = &all_language_tags()[i];
            prop_assert_eq!(by_tag(e.tag()).unwrap(), e);
        }
    }
}
