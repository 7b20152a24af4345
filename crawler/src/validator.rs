use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ITEM_URL: Regex =
        Regex::new(r"^https://www\.monografias\.ufop\.br/handle/[0-9]{8}/[0-9]{4}$").expect("valid regex");
}

/// True when `url` is exactly a repository item page, e.g.
/// `https://www.monografias.ufop.br/handle/35400000/7345`.
pub fn is_valid(url: &str) -> bool {
    ITEM_URL.is_match(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_item_pages() {
        assert!(is_valid("https://www.monografias.ufop.br/handle/35400000/7345"));
        assert!(is_valid("https://www.monografias.ufop.br/handle/00000000/0000"));
    }

    #[test]
    fn rejects_everything_else() {
        for url in [
            "https://www.monografias.ufop.br/handle/35400000/7345/extra",
            "https://www.monografias.ufop.br/handle/35400000/7345/",
            "https://www.monografias.ufop.br/handle/35400000/7345?mode=full",
            "https://www.monografias.ufop.br/handle/35400000/7345#top",
            "https://www.monografias.ufop.br/handle/35400000/7345\n",
            "http://www.monografias.ufop.br/handle/35400000/7345",
            "https://monografias.ufop.br/handle/35400000/7345",
            "https://wwwxmonografias.ufop.br/handle/35400000/7345",
            "https://www.monografias.ufop.br/handle/3540000/7345",
            "https://www.monografias.ufop.br/handle/354000000/7345",
            "https://www.monografias.ufop.br/handle/35400000/734",
            "https://www.monografias.ufop.br/handle/35400000/73",
            "https://www.monografias.ufop.br/handle/35400000/73/simple-search",
            "https://www.monografias.ufop.br/bitstream/35400000/7345",
            "https://www.monografias.ufop.br/handle/３５４０００００/7345",
            " https://www.monografias.ufop.br/handle/35400000/7345",
            "",
        ] {
            assert!(!is_valid(url), "{url:?} should be rejected");
        }
    }
}
