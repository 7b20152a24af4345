use authindex::{CollectedRecord, InvertedIndex};
use criterion::{criterion_group, criterion_main, Criterion};

const FIRST: &[&str] = &["José", "Maria", "Ana", "João", "Lúcia", "Pedro", "Fernanda", "Álvaro"];
const LAST: &[&str] = &["Silva", "Souza", "Conceição", "Lima", "Gomes", "Araújo", "Reis"];

fn sample_index() -> InvertedIndex {
    let mut records = Vec::new();
    for i in 0..2_000usize {
        let author = format!("{} {}", FIRST[i % FIRST.len()], LAST[(i / FIRST.len()) % LAST.len()]);
        let url = format!("https://www.monografias.ufop.br/handle/35400000/{:04}", i);
        records.push(CollectedRecord::new(url, vec![author]));
    }
    let mut idx = InvertedIndex::new();
    idx.index_all(&records);
    idx
}

fn bench_search(c: &mut Criterion) {
    let idx = sample_index();
    c.bench_function("search_fragment", |b| b.iter(|| idx.search("sil")));
    c.bench_function("search_two_tokens", |b| b.iter(|| idx.search("maria conceicao")));
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
