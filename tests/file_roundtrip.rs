use std::fs;

use huffpack::files::{default_compressed_path, default_recovered_path};
use huffpack::{compress_file, decompress_file, Error};

#[test]
fn test_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let original = dir.path().join("sample.txt");
    let text = "o algoritmo de huffman é um algoritmo de compressão usado para compactar dados, \
                baseando-se na frequência de cada caractere.";
    fs::write(&original, text).unwrap();

    let compressed = default_compressed_path(&original);
    let report = compress_file(&original, &compressed).unwrap();
    assert_eq!(report.chars, text.chars().count() as u64);
    assert_eq!(report.input_bytes, text.len() as u64);
    assert_eq!(report.output_bytes, fs::metadata(&compressed).unwrap().len());

    let recovered = default_recovered_path(&compressed).unwrap();
    assert_eq!(recovered, dir.path().join("sample_recovered.txt"));
    decompress_file(&compressed, &recovered).unwrap();

    assert_eq!(fs::read_to_string(&recovered).unwrap(), text);
    let mut names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    assert_eq!(names, vec!["sample.huff", "sample.txt", "sample_recovered.txt"]);
}

#[test]
fn test_tmp_input_survives_compression() {
    let dir = tempfile::tempdir().unwrap();
    let original = dir.path().join("notes.tmp");
    let text = "scratch notes kept in a .tmp file";
    fs::write(&original, text).unwrap();

    let compressed = default_compressed_path(&original);
    assert_eq!(compressed, dir.path().join("notes.huff"));
    compress_file(&original, &compressed).unwrap();

    assert_eq!(fs::read_to_string(&original).unwrap(), text);

    let recovered = default_recovered_path(&compressed).unwrap();
    decompress_file(&compressed, &recovered).unwrap();
    assert_eq!(fs::read_to_string(&recovered).unwrap(), text);
}

#[test]
fn test_output_over_input_replaces_it_with_the_container() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inplace.huff");
    let text = "compressed in place";
    fs::write(&path, text).unwrap();

    compress_file(&path, &path).unwrap();
    assert_ne!(fs::read(&path).unwrap(), text.as_bytes());

    let recovered = dir.path().join("inplace.txt");
    decompress_file(&path, &recovered).unwrap();
    assert_eq!(fs::read_to_string(&recovered).unwrap(), text);
}

#[test]
fn test_empty_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let original = dir.path().join("empty.txt");
    fs::write(&original, "").unwrap();

    let compressed = dir.path().join("empty.huff");
    compress_file(&original, &compressed).unwrap();
    assert_eq!(fs::metadata(&compressed).unwrap().len(), 0);

    let recovered = dir.path().join("empty_recovered.txt");
    decompress_file(&compressed, &recovered).unwrap();
    assert_eq!(fs::read_to_string(&recovered).unwrap(), "");
}

#[test]
fn test_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");
    let err = compress_file(&missing, &dir.path().join("nope.huff")).unwrap_err();
    assert!(matches!(err, Error::InputNotFound(path) if path == missing));

    let err = decompress_file(&dir.path().join("nope.huff"), &missing).unwrap_err();
    assert!(matches!(err, Error::InputNotFound(_)));
}

#[test]
fn test_corrupt_container_file() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("bad.huff");
    fs::write(&bad, [0u8, 0, 0, 50, b'{']).unwrap();

    let out = dir.path().join("bad_recovered.txt");
    let err = decompress_file(&bad, &out).unwrap_err();
    assert!(matches!(err, Error::CorruptContainer(_)));
    assert!(!out.exists());
}

#[test]
fn test_overflowing_header_counts_in_file() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("overflow.huff");
    let header = br#"{"frequencies":{"a":18446744073709551615,"b":1},"total_chars":0}"#;
    let mut data = (header.len() as u32).to_be_bytes().to_vec();
    data.extend_from_slice(header);
    data.push(0);
    fs::write(&bad, data).unwrap();

    let err = decompress_file(&bad, &dir.path().join("overflow.txt")).unwrap_err();
    assert!(matches!(err, Error::CorruptContainer(_)));
}

#[test]
fn test_huge_count_in_file_is_truncated() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("huge.huff");
    let header = br#"{"frequencies":{"a":4611686018427387904,"b":4611686018427387904},"total_chars":9223372036854775808}"#;
    let mut data = (header.len() as u32).to_be_bytes().to_vec();
    data.extend_from_slice(header);
    data.push(0);
    fs::write(&bad, data).unwrap();

    let out = dir.path().join("huge.txt");
    let err = decompress_file(&bad, &out).unwrap_err();
    assert!(matches!(err, Error::TruncatedPayload { .. }));
    assert!(!out.exists());
}

#[test]
fn test_non_utf8_input_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let original = dir.path().join("binary.txt");
    fs::write(&original, [0xFF, 0xFE, 0x00]).unwrap();

    let err = compress_file(&original, &dir.path().join("binary.huff")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
