use keywalk::encoder::Fingerprint;
use keywalk::similarity::similarity;
use rstest::rstest;

#[rstest]
#[case("►", "►", 1.0)]
#[case("", "", 0.0)]
#[case("►", "", 0.0)]
#[case("►►►►▼", "►►►►▲", 0.8)]
#[case("►►►►►▼", "►►►►►▲", 5.0 / 6.0)]
#[case("kitten", "sitting", 4.0 / 7.0)]
#[case("◘", "►", 0.0)]
fn test_similarity(#[case] a: &str, #[case] b: &str, #[case] expected: f64) {
    assert!((similarity(a, b) - expected).abs() < 1e-12);
    assert!((similarity(b, a) - expected).abs() < 1e-12);
}

#[test]
fn test_exact_boundary_is_not_above_threshold() {
    let a = Fingerprint::from("►►►►▼");
    let b = Fingerprint::from("►►►►▲");
    assert_eq!(a.similarity(&b), 0.8);
    assert!(!(a.similarity(&b) > keywalk::consts::SIMILARITY_THRESHOLD));
}
