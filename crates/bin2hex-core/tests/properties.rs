mod common;
use proptest::collection::vec;
use proptest::prelude::*;

use bin2hex_core::{WORD_BYTES, parse_hex_line};
use common::util_hex::{convert_to_string, is_hex16};

proptest! {
    #[test]
    fn line_count_is_ceil_of_len_over_eight(input in vec(any::<u8>(), 0..200)) {
        let out = convert_to_string(&input);
        prop_assert_eq!(out.lines().count(), input.len().div_ceil(WORD_BYTES));
    }

    #[test]
    fn every_line_is_sixteen_lowercase_hex_digits(input in vec(any::<u8>(), 1..200)) {
        let out = convert_to_string(&input);
        prop_assert!(out.ends_with('\n'));
        for line in out.lines() {
            prop_assert!(is_hex16(line), "bad line {:?}", line);
        }
    }

    #[test]
    fn decoded_lines_reproduce_input(input in vec(any::<u8>(), 0..200)) {
        let out = convert_to_string(&input);

        let mut rebuilt = Vec::with_capacity(input.len());
        for (chunk, line) in input.chunks(WORD_BYTES).zip(out.lines()) {
            let value = parse_hex_line(line).unwrap();
            rebuilt.extend_from_slice(&value.to_le_bytes()[..chunk.len()]);
        }

        prop_assert_eq!(rebuilt, input);
    }
}
