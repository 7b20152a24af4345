use authindex::persist::save_records;
use authindex::{CollectedRecord, InvertedIndex};
use search::{index_from_export, run_query_loop, FOUND_HEADER, NOT_FOUND, PROMPT};
use std::io::Cursor;
use tempfile::tempdir;

fn tiny_index() -> InvertedIndex {
    let mut idx = InvertedIndex::new();
    idx.index_all(&[
        CollectedRecord::new("https://www.monografias.ufop.br/handle/35400000/0001", vec!["José Silva".into()]),
        CollectedRecord::new("https://www.monografias.ufop.br/handle/35400000/0002", vec!["Ana Souza".into()]),
    ]);
    idx
}

fn run(idx: &InvertedIndex, input: &str) -> String {
    let mut out = Vec::new();
    run_query_loop(idx, Cursor::new(input.as_bytes()), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn prints_matches_then_quits() {
    let out = run(&tiny_index(), "silva\r\nzzz\nSAIR\nsouza\n");
    let expected = format!(
        "{PROMPT}{FOUND_HEADER}\nhttps://www.monografias.ufop.br/handle/35400000/0001\n{PROMPT}{NOT_FOUND}\n{PROMPT}"
    );
    assert_eq!(out, expected);
}

#[test]
fn end_of_input_stops_the_loop() {
    let out = run(&tiny_index(), "souza");
    assert!(out.contains("handle/35400000/0002"));
    assert!(out.ends_with(&format!("{PROMPT}\n")));
}

#[test]
fn sair_must_be_the_whole_line() {
    let out = run(&tiny_index(), "sair agora\nsair\n");
    assert_eq!(out.matches(PROMPT).count(), 2);
    assert!(out.contains(NOT_FOUND));
}

#[test]
fn index_is_rebuilt_from_export() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dados.json");
    save_records(
        &path,
        &[CollectedRecord::new("https://www.monografias.ufop.br/handle/35400000/0009", vec!["Lúcia Reis".into()])],
    )
    .unwrap();
    let idx = index_from_export(&path).unwrap();
    assert_eq!(idx.search("lucia"), vec!["https://www.monografias.ufop.br/handle/35400000/0009"]);
}
