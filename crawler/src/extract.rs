use lazy_static::lazy_static;
use scraper::{Html, Selector};
use url::Url;

lazy_static! {
    static ref SEL_A: Selector = Selector::parse("a[href]").expect("valid selector");
    static ref SEL_AUTHOR: Selector = Selector::parse("a.author").expect("valid selector");
}

/// Links and author names found on one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedPage {
    /// Absolute hrefs in document order; duplicates kept.
    pub links: Vec<String>,
    /// Text of every `a.author` element, untrimmed.
    pub authors: Vec<String>,
}

/// Parse `html` and resolve every anchor against `base`.
///
/// The parser is tolerant, so broken markup just yields fewer links.
pub fn extract(html: &str, base: &Url) -> ExtractedPage {
    let doc = Html::parse_document(html);

    let mut links = Vec::new();
    for a in doc.select(&SEL_A) {
        if let Some(href) = a.value().attr("href") {
            match base.join(href) {
                Ok(u) => links.push(u.to_string()),
                Err(e) => tracing::debug!(href, error = %e, "unresolvable href"),
            }
        }
    }

    let authors = doc.select(&SEL_AUTHOR).map(|n| n.text().collect::<String>()).collect();

    ExtractedPage { links, authors }
}
