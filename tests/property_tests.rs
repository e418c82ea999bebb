mod common;

use common::{encoder, engine, finder};
use keywalk::encoder::period::smallest_repeating_unit;
use keywalk::engine::EngineBuilder;
use keywalk::path::Direction;
use keywalk::similarity::similarity;
use proptest::prelude::*;

const QWERTY_KEYS: &str = "1234567890-=qwertyuiop[]asdfghjkl;'zxcvbnm,./";

prop_compose! {
    fn arb_key()(i in 0..QWERTY_KEYS.len()) -> char {
        QWERTY_KEYS.as_bytes()[i] as char
    }
}

prop_compose! {
    fn arb_walk()(keys in proptest::collection::vec(arb_key(), 2..16)) -> String {
        keys.into_iter().collect()
    }
}

// Thousands of presses of one key between two short walks, so the glyph
// string runs past the longest single back-reference copy.
prop_compose! {
    fn arb_long_walk()(
        unit in arb_walk(),
        held in arb_key(),
        repeats in 4100usize..4300,
        tail in arb_walk(),
    ) -> String {
        let mut password = unit;
        password.extend(std::iter::repeat(held).take(repeats));
        password.push_str(&tail);
        password
    }
}

prop_compose! {
    fn arb_repetitive_walk()(
        unit in arb_walk(),
        repeats in 2usize..40,
        tail in arb_walk(),
    ) -> String {
        format!("{}{}", unit.repeat(repeats), tail)
    }
}

fn assert_back_references_transparent(
    password: &str,
    window: usize,
    start: char,
    len: usize,
) -> Result<(), TestCaseError> {
    let compressed = EngineBuilder::new()
        .with_back_references(true)
        .with_window(window)
        .build();
    let plain = EngineBuilder::new().build();

    let fp = compressed.fingerprint(password);
    let plain_fp = plain.fingerprint(password);
    let glyphs = compressed.encoder().parse(fp.as_str());
    prop_assert!(glyphs.is_ok(), "{} does not parse: {:?}", fp, glyphs);
    prop_assert_eq!(glyphs.unwrap(), plain.encoder().parse(plain_fp.as_str()).unwrap());
    prop_assert_eq!(
        compressed.encoder().decode(fp.as_str(), start, len).unwrap(),
        plain.encoder().decode(plain_fp.as_str(), start, len).unwrap()
    );
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_back_references_survive_long_walks(
        password in arb_long_walk(),
        window in 1usize..64,
        start in arb_key(),
        len in 1usize..40,
    ) {
        assert_back_references_transparent(&password, window, start, len)?;
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_back_references_are_transparent(
        password in arb_repetitive_walk(),
        window in 0usize..64,
        start in arb_key(),
        len in 1usize..40,
    ) {
        assert_back_references_transparent(&password, window, start, len)?;
    }

    #[test]
    fn prop_same_key_press_release(k in arb_key()) {
        let path = finder().find_path(k, k);
        let dirs: Vec<Direction> = path.iter().map(|s| s.direction).collect();
        prop_assert_eq!(dirs, vec![Direction::Press, Direction::Release]);
    }

    #[test]
    fn prop_route_length_is_manhattan(a in arb_key(), b in arb_key()) {
        prop_assume!(a != b);
        let f = finder();
        let path = f.find_path(a, b);
        prop_assert_eq!(path.len(), f.manhattan(a, b).unwrap() + 1);
        prop_assert_eq!(path.last().unwrap().direction, Direction::Press);
    }

    #[test]
    fn prop_fingerprint_parses_and_replays(password in arb_walk(), start in arb_key(), len in 1usize..20) {
        let engine = engine();
        let fp = engine.fingerprint(&password);
        prop_assert!(!fp.is_empty());
        prop_assert!(engine.encoder().parse(fp.as_str()).is_ok());
        prop_assert_eq!(fp.clone(), engine.fingerprint(&password));

        let decoded = encoder().decode(fp.as_str(), start, len).unwrap();
        prop_assert_eq!(decoded.chars().count(), len);
    }

    #[test]
    fn prop_unit_regenerates_input(s in proptest::collection::vec(0u8..3, 0..40)) {
        let unit = smallest_repeating_unit(&s);
        prop_assert!(unit.len() <= s.len());
        for (i, x) in s.iter().enumerate() {
            prop_assert_eq!(*x, unit[i % unit.len()]);
        }
    }

    #[test]
    fn prop_similarity_bounded_and_symmetric(a in "[►◘▲▼◄→←↑↓]{0,12}", b in "[►◘▲▼◄→←↑↓]{0,12}") {
        let s = similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&s));
        prop_assert_eq!(s, similarity(&b, &a));
        let expected_self = if a.is_empty() { 0.0 } else { 1.0 };
        prop_assert_eq!(similarity(&a, &a), expected_self);
    }
}
