#![allow(missing_docs)]
use assert_cmd::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_encrypt_reuses_one_keystream() {
    let temp_dir = tempdir().unwrap();
    let input_path = temp_dir.path().join("lines.txt");
    let output_path = temp_dir.path().join("cryptograms.hex");
    let key_path = temp_dir.path().join("key.hex");
    let lines = ["Attack at dawn.", "", "Retreat at dusk, then regroup."];
    fs::write(&input_path, lines.join("\n")).unwrap();

    Command::new(env!("CARGO_BIN_EXE_mtp-cli"))
        .arg("encrypt")
        .arg(&input_path)
        .arg("--output")
        .arg(&output_path)
        .arg("--key-output")
        .arg(&key_path)
        .assert()
        .success();

    let key = hex::decode(fs::read_to_string(&key_path).unwrap().trim()).unwrap();
    assert_eq!(key.len(), lines[2].len());

    let encoded = fs::read_to_string(&output_path).unwrap();
    let cryptograms: Vec<Vec<u8>> = encoded.lines().map(|l| hex::decode(l).unwrap()).collect();
    assert_eq!(cryptograms.len(), 2);
    for (cryptogram, plaintext) in cryptograms.iter().zip([lines[0], lines[2]]) {
        let decrypted: Vec<u8> = cryptogram.iter().zip(&key).map(|(c, k)| c ^ k).collect();
        assert_eq!(decrypted, plaintext.as_bytes());
    }
}

#[test]
fn test_encrypt_missing_input_fails() {
    let temp_dir = tempdir().unwrap();
    Command::new(env!("CARGO_BIN_EXE_mtp-cli"))
        .arg("encrypt")
        .arg(temp_dir.path().join("nope.txt"))
        .arg("--output")
        .arg(temp_dir.path().join("out.hex"))
        .assert()
        .failure();
}
