mod common;

use common::{encoder, fingerprint, qwerty, StepsBuilder};
use keywalk::consts::{META_REDUNDANT_MOVES, META_REPEAT_COUNT};
use keywalk::encoder::period::reduce_str;
use keywalk::encoder::{EncodeOptions, Glyph, PathEncoder};
use keywalk::engine::EngineBuilder;
use keywalk::ergonomics::Hand;
use keywalk::path::{Direction, MetaValue};
use keywalk::KeyWalkError;
use rstest::rstest;
use strum::IntoEnumIterator;

use Direction::*;

#[rstest]
#[case("hjkl;'", "►")]
#[case("qwerty", "►")]
#[case("asdfgh", "►")]
#[case("hhhhhh", "◘")]
#[case("qWeRtY", "▷►")]
#[case("qwertg", "►►►►▼")]
#[case("asdfgt", "►►►►▲")]
#[case("qwertyh", "►►►►►▼")]
fn test_password_fingerprints(#[case] password: &str, #[case] expected: &str) {
    assert_eq!(fingerprint(password), expected);
}

#[test]
fn test_unresolvable_password_is_empty() {
    assert_eq!(fingerprint("éüß"), "");
    assert_eq!(fingerprint("a"), "");
    assert_eq!(fingerprint(""), "");
}

#[test]
fn test_glyph_symbols_round_trip() {
    let glyphs: Vec<Glyph> = Glyph::iter().collect();
    assert_eq!(glyphs.len(), 13);
    for g in glyphs {
        assert_eq!(Glyph::from_symbol(g.symbol()), Some(g));
    }
    assert_eq!(Glyph::from_symbol('x'), None);
}

#[test]
fn test_release_emits_nothing() {
    let steps = StepsBuilder::new()
        .press('a')
        .release('a')
        .press('a')
        .release('a')
        .build();
    let traced = encoder().encode_with_trace(&steps);
    assert_eq!(traced.glyphs, "◘◘");
    assert_eq!(traced.fingerprint.as_str(), "◘");
}

#[test]
fn test_trailing_movement_is_plain() {
    let steps = StepsBuilder::new().moves(Right, 1).press('w').moves(Down, 2).build();
    assert_eq!(encoder().encode(&steps).as_str(), "►↓↓");
}

#[test]
fn test_take_step_maps_directly() {
    let steps = StepsBuilder::new().take(Left).take(Left).build();
    assert_eq!(encoder().encode_with_trace(&steps).glyphs, "◄◄");
}

#[test]
fn test_fold_sets_repeat_count() {
    let steps = StepsBuilder::new().moves(Right, 3).press('r').build();
    let traced = encoder().encode_with_trace(&steps);
    assert_eq!(traced.steps.len(), 2);
    assert_eq!(traced.steps[0].meta(META_REPEAT_COUNT), Some(&MetaValue::Count(3)));
    assert_eq!(traced.fingerprint.as_str(), "→→►");
}

#[test]
fn test_partial_cancellation_is_counted() {
    let steps = StepsBuilder::new().moves(Right, 3).moves(Left, 1).press('x').build();
    let traced = encoder().encode_with_trace(&steps);
    assert_eq!(traced.fingerprint.as_str(), "→►");
    assert_eq!(traced.redundant_moves, 2);
    assert_eq!(traced.steps[1].counter(META_REDUNDANT_MOVES), 2);
}

#[test]
fn test_cancellation_exposes_new_runs() {
    let steps = StepsBuilder::new()
        .moves(Right, 1)
        .moves(Up, 1)
        .moves(Down, 1)
        .moves(Right, 1)
        .press('t')
        .build();
    let traced = encoder().encode_with_trace(&steps);
    assert_eq!(traced.steps[0].repeat_count(), 2);
    assert_eq!(traced.fingerprint.as_str(), "→►");
}

#[test]
fn test_walk_that_cancels_out_is_empty() {
    let steps = StepsBuilder::new().moves(Up, 2).moves(Down, 2).build();
    assert!(encoder().encode(&steps).is_empty());
}

#[test]
fn test_shifted_take_glyphs() {
    let steps = StepsBuilder::new()
        .moves(Up, 1)
        .shift_down(Hand::Left)
        .press('I')
        .shift_up(Hand::Left)
        .build();
    assert_eq!(encoder().encode(&steps).as_str(), "△");

    // In-place shifted takes have no glyph of their own.
    let steps = StepsBuilder::new()
        .shift_down(Hand::Right)
        .press('A')
        .release('A')
        .shift_up(Hand::Right)
        .build();
    assert_eq!(encoder().encode(&steps).as_str(), "◘");
}

#[test]
fn test_period_reduction() {
    assert_eq!(reduce_str("→←→←→←"), "→←");
    assert_eq!(reduce_str("►►►►►"), "►");
    assert_eq!(reduce_str("abcab"), "abcab");
}

#[rstest]
#[case("►", 'h', 6, "hjkl;'")]
#[case("◘", 'a', 3, "aaa")]
#[case("▷►", 'q', 6, "qWeRtY")]
#[case("►", 'o', 5, "op[]q")]
#[case("▼", 'q', 5, "qaz1q")]
#[case("►►►►▼", 'q', 6, "qwertg")]
#[case("►", 'H', 3, "Hjk")]
fn test_decode(#[case] fp: &str, #[case] start: char, #[case] len: usize, #[case] expected: &str) {
    assert_eq!(encoder().decode(fp, start, len).unwrap(), expected);
}

#[test]
fn test_decode_edge_cases() {
    let enc = encoder();
    assert_eq!(enc.decode("►", 'h', 0).unwrap(), "");
    assert_eq!(enc.decode("►", 'h', 1).unwrap(), "h");
    assert_eq!(enc.decode("►", ' ', 4).unwrap(), "");
    assert_eq!(enc.decode("→→", 'h', 3).unwrap(), "");
    assert_eq!(enc.decode("", 'h', 3).unwrap(), "");
}

#[test]
fn test_decode_rejects_unknown_glyph() {
    match encoder().decode("►x►", 'h', 4) {
        Err(KeyWalkError::MalformedFingerprint { glyph, position }) => {
            assert_eq!(glyph, 'x');
            assert_eq!(position, 1);
        }
        other => panic!("expected malformed fingerprint, got {:?}", other),
    }
}

#[test]
fn test_back_references() {
    let engine = EngineBuilder::new().with_back_references(true).build();
    let fp = engine.fingerprint("qwertyuik");
    assert_eq!(fp.as_str(), "►(1,6)▼");
    assert_eq!(engine.encoder().decode(fp.as_str(), 'q', 9).unwrap(), "qwertyuik");

    // Periodic walks still reduce first.
    assert_eq!(engine.fingerprint("qwerty").as_str(), "►");
}

#[test]
fn test_long_run_with_back_references_still_decodes() {
    let password = format!("{}j", "h".repeat(4100));
    let compressed = EngineBuilder::new().with_back_references(true).build();
    let plain = EngineBuilder::new().build();

    let fp = compressed.fingerprint(&password);
    assert_eq!(fp.as_str(), "◘(1,4096)◘◘►");
    assert_eq!(
        compressed.encoder().parse(fp.as_str()).unwrap(),
        plain.encoder().parse(plain.fingerprint(&password).as_str()).unwrap()
    );
    assert_eq!(
        compressed.encoder().decode(fp.as_str(), 'h', 10).unwrap(),
        "hhhhhhhhhh"
    );
}

#[test]
fn test_back_reference_expansion_in_decode() {
    assert_eq!(encoder().decode("►(1,2)", 'h', 4).unwrap(), "hjkl");
    assert!(matches!(
        encoder().decode("►(5,1)", 'h', 4),
        Err(KeyWalkError::MalformedBackReference(_))
    ));
}

#[test]
fn test_window_limits_reach() {
    let enc = PathEncoder::with_options(
        qwerty(),
        EncodeOptions {
            back_references: true,
            window: 0,
        },
    );
    let steps = StepsBuilder::new()
        .moves(Right, 1)
        .press('w')
        .moves(Right, 1)
        .press('e')
        .moves(Right, 1)
        .press('r')
        .moves(Right, 1)
        .press('t')
        .moves(Right, 1)
        .press('y')
        .moves(Right, 1)
        .press('u')
        .moves(Right, 1)
        .press('i')
        .moves(Down, 1)
        .press('k')
        .build();
    assert_eq!(enc.encode(&steps).as_str(), "►►►►►►►▼");
}
