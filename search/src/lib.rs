use anyhow::Result;
use authindex::persist::load_records;
use authindex::InvertedIndex;
use std::io::{BufRead, Write};
use std::path::Path;

pub const PROMPT: &str = "Digite o termo de pesquisa (nome do autor ou parte do link) ou 'sair' para encerrar: ";
pub const FOUND_HEADER: &str = "URLs encontradas:";
pub const NOT_FOUND: &str = "Nenhuma URL encontrada.";
pub const QUIT_WORD: &str = "sair";

/// Rebuild the author index from a JSON export of collected records.
pub fn index_from_export<P: AsRef<Path>>(path: P) -> Result<InvertedIndex> {
    let records = load_records(path)?;
    let mut index = InvertedIndex::new();
    index.index_all(&records);
    Ok(index)
}

/// Prompt, read a term, print its ranked URLs; repeat until `sair` or end of input.
pub fn run_query_loop<R: BufRead, W: Write>(index: &InvertedIndex, mut input: R, mut output: W) -> Result<()> {
    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }
        let query = line.trim_end_matches(['\r', '\n']);
        if query.to_lowercase() == QUIT_WORD {
            break;
        }

        let results = index.search(query);
        tracing::debug!(query, hits = results.len(), "search");
        if results.is_empty() {
            writeln!(output, "{NOT_FOUND}")?;
        } else {
            writeln!(output, "{FOUND_HEADER}")?;
            for url in &results {
                writeln!(output, "{url}")?;
            }
        }
    }
    Ok(())
}
