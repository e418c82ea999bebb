mod common;

use common::engine;
use keywalk::api;
use keywalk::batch::{analyze_batch, analyze_batch_with, FrequencyAccumulator};
use keywalk::encoder::Fingerprint;

#[test]
fn test_counts_per_fingerprint() {
    let passwords = vec!["qwerty", "asdfgh", "zxcvbn", "hhhhhh"];
    let acc = analyze_batch(&engine(), &passwords);
    assert_eq!(acc.len(), 2);
    assert_eq!(acc.total(), 4);

    let right = acc.get(&Fingerprint::from("►")).unwrap();
    assert_eq!(right.count, 3);
    assert!(["qwerty", "asdfgh", "zxcvbn"].contains(&right.example.as_str()));
    assert_eq!(acc.get(&Fingerprint::from("◘")).unwrap().example, "hhhhhh");
}

#[test]
fn test_empty_batch() {
    let passwords: Vec<String> = Vec::new();
    assert!(analyze_batch(&engine(), &passwords).is_empty());
}

#[test]
fn test_empty_fingerprints_are_not_counted() {
    let acc = analyze_batch(&engine(), &["é", "a", "", "qw"]);
    assert_eq!(acc.len(), 1);
    assert_eq!(acc.total(), 1);
}

#[test]
fn test_failing_password_does_not_abort_batch() {
    let passwords = vec!["one", "boom", "two", "three"];
    let acc = analyze_batch_with(&passwords, |p| {
        if p == "boom" {
            panic!("analysis blew up");
        }
        Fingerprint::from("►")
    });
    assert_eq!(acc.get(&Fingerprint::from("►")).unwrap().count, 3);
}

#[test]
fn test_parallel_upserts_are_not_lost() {
    let passwords: Vec<String> = (0..2000)
        .map(|i| if i % 2 == 0 { "qwerty" } else { "1qaz" }.to_string())
        .collect();
    let acc = analyze_batch(&engine(), &passwords);
    assert_eq!(acc.total(), 2000);
    assert_eq!(acc.get(&Fingerprint::from("►")).unwrap().count, 1000);
}

#[test]
fn test_accumulator_merge_and_top() {
    let a = FrequencyAccumulator::new();
    a.record(Fingerprint::from("►"), "qwerty");
    a.record(Fingerprint::from("◘"), "aaaa");

    let b = FrequencyAccumulator::new();
    b.record_many(Fingerprint::from("►"), "asdfgh", 4);
    b.record(Fingerprint::from("▲"), "zaq1");

    a.merge(&b);
    let top = a.top(2);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].0.as_str(), "►");
    assert_eq!(top[0].1.count, 5);
    assert_eq!(top[0].1.example, "qwerty");
    assert_eq!(a.into_map().len(), 3);
}

#[test]
fn test_api_batch_map() {
    let map = api::analyze_batch(&engine(), &["qwerty", "qwerty"]);
    assert_eq!(map.len(), 1);
    assert_eq!(map[&Fingerprint::from("►")].count, 2);
}
