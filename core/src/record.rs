use serde::{Deserialize, Serialize};

/// A validated repository link together with the author names shown on the
/// page that referenced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectedRecord {
    pub url: String,
    #[serde(rename = "autores")]
    pub authors: Vec<String>,
}

impl CollectedRecord {
    pub fn new(url: impl Into<String>, authors: Vec<String>) -> Self {
        Self { url: url.into(), authors }
    }
}
