#[cfg(test)]
mod merge_tests {
    use crate::{
        codec::{
            encoder::{encode, encode_entries},
            merge::{decode_groups, decode_to_list, decode_to_mapping, Entries},
            models::{Entry, TlvMap, SEPARATOR_PAIR},
        },
        error::parse::TlvParseError,
        protocol::{pairing::state, tlv_types},
    };

    /// `060103 09FF<255 × 'a'> 092D<45 × 'a'> 010568656C6C6F`
    fn long_certificate() -> Vec<u8> {
        let mut bytes = vec![0x06, 0x01, 0x03, 0x09, 0xFF];
        bytes.extend_from_slice(&[b'a'; 255]);
        bytes.extend_from_slice(&[0x09, 0x2D]);
        bytes.extend_from_slice(&[b'a'; 45]);
        bytes.extend_from_slice(&[0x01, 0x05]);
        bytes.extend_from_slice(b"hello");
        bytes
    }

    /// `060103 09FF<25 × 'a'>`, which should have had 255 bytes of data
    fn not_enough_data() -> Vec<u8> {
        let mut bytes = vec![0x06, 0x01, 0x03, 0x09, 0xFF];
        bytes.extend_from_slice(&[b'a'; 25]);
        bytes
    }

    fn expected_list() -> Vec<Entry> {
        vec![
            Entry::new(6, [0x03]),
            Entry::new(9, vec![b'a'; 300]),
            Entry::new(1, "hello"),
        ]
    }

    fn expected_mapping() -> TlvMap {
        TlvMap::from_iter([
            (6, vec![0x03]),
            (9, vec![b'a'; 300]),
            (1, b"hello".to_vec()),
        ])
    }

    #[test]
    fn can_decode_mutable_buffer_to_list() {
        let mut bytes = long_certificate();

        assert_eq!(decode_to_list(&mut bytes).unwrap(), expected_list());
        assert_eq!(bytes, long_certificate());
    }

    #[test]
    fn can_decode_immutable_buffer_to_list() {
        let bytes: &[u8] = &long_certificate();

        assert_eq!(decode_to_list(bytes).unwrap(), expected_list());
    }

    #[test]
    fn can_decode_mutable_buffer_to_mapping() {
        let mut bytes = long_certificate();

        assert_eq!(decode_to_mapping(&mut bytes).unwrap(), expected_mapping());
    }

    #[test]
    fn can_decode_immutable_buffer_to_mapping() {
        let bytes = long_certificate().into_boxed_slice();
        let result = decode_to_mapping(&bytes).unwrap();

        assert_eq!(result, expected_mapping());
        assert_eq!(result.keys().copied().collect::<Vec<u8>>(), vec![6, 9, 1]);
    }

    #[test]
    fn cant_decode_truncated_mutable_buffer() {
        let mut bytes = not_enough_data();
        let expected = TlvParseError::TruncatedInput {
            offset: 5,
            needed: 255,
            available: 25,
        };

        assert_eq!(decode_to_list(&mut bytes), Err(expected.clone()));
        assert_eq!(decode_to_mapping(&mut bytes), Err(expected));
    }

    #[test]
    fn cant_decode_truncated_immutable_buffer() {
        let bytes: &[u8] = &not_enough_data();

        assert!(matches!(
            decode_to_list(bytes),
            Err(TlvParseError::TruncatedInput { .. })
        ));
        assert!(matches!(
            decode_to_mapping(bytes),
            Err(TlvParseError::TruncatedInput { .. })
        ));
        assert!(matches!(
            decode_groups(bytes),
            Err(TlvParseError::TruncatedInput { .. })
        ));
    }

    #[test]
    fn can_merge_long_value() {
        let value = vec![b'z'; 300];
        let bytes = encode([(tlv_types::CERTIFICATE, &value)]).unwrap();

        assert_eq!(
            decode_to_list(&bytes).unwrap(),
            vec![Entry::new(tlv_types::CERTIFICATE, value.clone())]
        );
        assert_eq!(
            decode_to_mapping(&bytes).unwrap().get(&tlv_types::CERTIFICATE),
            Some(&value)
        );
    }

    #[test]
    fn can_merge_many_chunks() {
        let value: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
        let bytes = encode([(tlv_types::ENCRYPTED_DATA, &value)]).unwrap();

        let result = decode_to_list(&bytes).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].value, value);
    }

    #[test]
    fn can_keep_adjacent_entries_of_same_type() {
        let entries = vec![
            Entry::new(tlv_types::CERTIFICATE, vec![b'a'; 255]),
            Entry::new(tlv_types::CERTIFICATE, vec![b'b'; 10]),
        ];
        let bytes = encode_entries(&entries).unwrap();

        assert_eq!(decode_to_list(&bytes).unwrap(), entries);
    }

    #[test]
    fn can_close_full_chunk_before_other_type() {
        let mut bytes = vec![0x09, 0xFF];
        bytes.extend_from_slice(&[b'a'; 255]);
        bytes.extend_from_slice(&[0x01, 0x05]);
        bytes.extend_from_slice(b"hello");

        let result = decode_to_list(&bytes).unwrap();

        assert_eq!(
            result,
            vec![Entry::new(9, vec![b'a'; 255]), Entry::new(1, "hello")]
        );
    }

    #[test]
    fn can_close_full_chunk_at_end_of_stream() {
        let mut bytes = vec![0x09, 0xFF];
        bytes.extend_from_slice(&[b'a'; 255]);

        let result = decode_to_list(&bytes).unwrap();

        assert_eq!(result, vec![Entry::new(9, vec![b'a'; 255])]);
    }

    #[test]
    fn can_start_new_entry_after_short_chunk() {
        let bytes = [0x01u8, 0x01, b'a', 0x01, 0x01, b'b'];

        let result = decode_to_list(bytes).unwrap();

        assert_eq!(result, vec![Entry::new(1, "a"), Entry::new(1, "b")]);
    }

    #[test]
    fn can_decode_empty_values() {
        let bytes = [0x01u8, 0x00, 0x01, 0x00];

        let result = decode_to_list(bytes).unwrap();

        assert_eq!(result, vec![Entry::new(1, ""), Entry::new(1, "")]);
    }

    #[test]
    fn can_decode_empty_stream() {
        let empty: [u8; 0] = [];

        assert!(decode_to_list(empty).unwrap().is_empty());
        assert!(decode_to_mapping(empty).unwrap().is_empty());
        assert!(decode_groups(empty).unwrap().is_empty());
    }

    #[test]
    fn can_keep_separators() {
        let entries = [
            (tlv_types::STATE, state::M3),
            SEPARATOR_PAIR,
            (tlv_types::STATE, state::M4),
        ];
        let bytes = encode(entries).unwrap();

        let result = decode_to_list(&bytes).unwrap();

        assert_eq!(
            result,
            vec![
                Entry::new(tlv_types::STATE, state::M3),
                Entry::separator(),
                Entry::new(tlv_types::STATE, state::M4),
            ]
        );
        assert!(result[1].is_separator());
    }

    #[test]
    fn can_overwrite_repeated_types_in_mapping() {
        let bytes = [0x01u8, 0x01, b'a', 0x02, 0x01, b'b', 0x01, 0x01, b'c'];

        let result = decode_to_mapping(bytes).unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result.get_index(0), Some((&1, &b"c".to_vec())));
        assert_eq!(result.get_index(1), Some((&2, &b"b".to_vec())));
    }

    #[test]
    fn can_decode_groups() {
        let bytes = encode([
            (tlv_types::IDENTIFIER, &b"alice"[..]),
            (tlv_types::PERMISSIONS, &[1][..]),
            SEPARATOR_PAIR,
            (tlv_types::IDENTIFIER, &b"bob"[..]),
            (tlv_types::PERMISSIONS, &[0][..]),
        ])
        .unwrap();

        let result = decode_groups(&bytes).unwrap();

        assert_eq!(
            result,
            vec![
                TlvMap::from_iter([
                    (tlv_types::IDENTIFIER, b"alice".to_vec()),
                    (tlv_types::PERMISSIONS, vec![1]),
                ]),
                TlvMap::from_iter([
                    (tlv_types::IDENTIFIER, b"bob".to_vec()),
                    (tlv_types::PERMISSIONS, vec![0]),
                ]),
            ]
        );
    }

    #[test]
    fn can_decode_empty_groups() {
        let bytes = [0xFFu8, 0x00, 0x01, 0x01, b'a', 0xFF, 0x00];

        let result = decode_groups(bytes).unwrap();

        assert_eq!(result.len(), 3);
        assert!(result[0].is_empty());
        assert_eq!(result[1].get(&1), Some(&b"a".to_vec()));
        assert!(result[2].is_empty());
    }

    #[test]
    fn can_stop_iterating_after_error() {
        let bytes = not_enough_data();
        let mut entries = Entries::new(&bytes);

        assert_eq!(entries.next(), Some(Ok(Entry::new(6, [0x03]))));
        assert!(matches!(entries.next(), Some(Err(_))));
        assert!(entries.next().is_none());
    }

    #[test]
    fn cant_merge_truncated_continuation() {
        let mut bytes = vec![0x09, 0xFF];
        bytes.extend_from_slice(&[b'a'; 255]);
        bytes.extend_from_slice(&[0x09, 0xFF]);
        bytes.extend_from_slice(&[b'a'; 25]);
        let mut entries = Entries::new(&bytes);

        assert_eq!(
            entries.next(),
            Some(Err(TlvParseError::TruncatedInput {
                offset: 259,
                needed: 255,
                available: 25,
            }))
        );
        assert!(entries.next().is_none());
        assert!(matches!(
            decode_to_list(&bytes),
            Err(TlvParseError::TruncatedInput { offset: 259, .. })
        ));
    }

    #[test]
    fn cant_merge_continuation_with_truncated_header() {
        let mut bytes = vec![0x09, 0xFF];
        bytes.extend_from_slice(&[b'a'; 255]);
        bytes.push(0x09);

        assert_eq!(
            Entries::new(&bytes).next(),
            Some(Err(TlvParseError::TruncatedInput {
                offset: 257,
                needed: 2,
                available: 1,
            }))
        );
    }
}
