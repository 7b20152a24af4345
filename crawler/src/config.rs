use anyhow::{anyhow, Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub const DEFAULT_DEPTH: usize = 3;
pub const DEFAULT_OUTPUT: &str = "dados_coletados.json";

/// Yearly listing pages of the monograph collection. The 2023 listing appears
/// twice; the visited set makes the second pass free.
pub const DEFAULT_SEEDS: &[&str] = &[
    "https://www.monografias.ufop.br/handle/35400000/73/simple-search?filterquery=2023&filtername=dateIssued&filtertype=equals",
    "https://www.monografias.ufop.br/handle/35400000/73/simple-search?filterquery=2023&filtername=dateIssued&filtertype=equals",
    "https://www.monografias.ufop.br/handle/35400000/73/simple-search?filterquery=2022&filtername=dateIssued&filtertype=equals",
    "https://www.monografias.ufop.br/handle/35400000/73/simple-search?filterquery=2021&filtername=dateIssued&filtertype=equals",
    "https://www.monografias.ufop.br/handle/35400000/73/simple-search?filterquery=2020&filtername=dateIssued&filtertype=equals",
    "https://www.monografias.ufop.br/handle/35400000/73/simple-search?filterquery=2019&filtername=dateIssued&filtertype=equals",
    "https://www.monografias.ufop.br/handle/35400000/73/simple-search?filterquery=2018&filtername=dateIssued&filtertype=equals",
    "https://www.monografias.ufop.br/handle/35400000/73/simple-search?filterquery=2017&filtername=dateIssued&filtertype=equals",
    "https://www.monografias.ufop.br/handle/35400000/73/simple-search?filterquery=2016&filtername=dateIssued&filtertype=equals",
    "https://www.monografias.ufop.br/handle/35400000/73/simple-search?filterquery=2015&filtername=dateIssued&filtertype=equals",
    "https://www.monografias.ufop.br/handle/35400000/73/simple-search?filterquery=2014&filtername=dateIssued&filtertype=equals",
];

pub fn default_seeds() -> Vec<String> {
    DEFAULT_SEEDS.iter().map(|s| s.to_string()).collect()
}

/// Read seed URLs, one per line. Blank lines and `#` comments are skipped;
/// order and duplicates are kept.
pub fn load_seeds<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("opening seeds file {}", path.display()))?;
    let mut seeds = Vec::new();
    for line in BufReader::new(f).lines() {
        let s = line?.trim().to_string();
        if s.is_empty() || s.starts_with('#') { continue; }
        seeds.push(s);
    }
    if seeds.is_empty() {
        return Err(anyhow!("no seeds in {}", path.display()));
    }
    Ok(seeds)
}
