#![allow(missing_docs)]
use mtp_core::corpus::Corpus;
use mtp_core::report::{RecoveryReport, load_report, save_report};
use tempfile::tempdir;

#[test]
fn test_report_requires_fresh_recovery() {
    let mut corpus = Corpus::new();
    corpus.add(b"abc".to_vec());
    assert!(RecoveryReport::from_corpus(&corpus).is_none());
    corpus.recover();
    assert!(RecoveryReport::from_corpus(&corpus).is_some());
    corpus.add(b"def".to_vec());
    assert!(RecoveryReport::from_corpus(&corpus).is_none());
}

#[test]
fn test_report_describes_each_cryptogram() {
    let mut corpus = Corpus::new();
    corpus.add_all([b"abc".to_vec(), Vec::new()]);
    corpus.recover();
    let report = RecoveryReport::from_corpus(&corpus).unwrap();

    assert_eq!(report.key_length, 3);
    assert_eq!(report.key.len(), 6);
    assert_eq!(report.messages.len(), 2);
    assert_eq!(report.messages[0].index, 0);
    assert_eq!(report.messages[0].length, 3);
    assert_eq!(
        report.messages[1].ciphertext_hash,
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert!(report.messages[1].plaintext.is_empty());
}

#[test]
fn test_report_survives_disk() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let path = temp_dir.path().join("report.json");

    let mut corpus = Corpus::new();
    corpus.add_all([vec![0x35, 0x0a, 0x03, 0x44], vec![0x35, 0x0a]]);
    corpus.recover();
    let report = RecoveryReport::from_corpus(&corpus).unwrap();

    save_report(&path, &report).expect("Failed to save report");
    let loaded = load_report(&path).expect("Failed to load report");
    assert_eq!(loaded, report);
}

#[test]
fn test_load_rejects_garbage() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let path = temp_dir.path().join("broken.json");
    std::fs::write(&path, "not json").unwrap();
    assert!(load_report(&path).is_err());
    assert!(load_report(&temp_dir.path().join("missing.json")).is_err());
}
