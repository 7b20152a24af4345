pub mod config;
pub mod crawl;
pub mod extract;
pub mod fetcher;
pub mod validator;

pub use crawl::{CrawlStats, Crawler};
pub use extract::{extract, ExtractedPage};
pub use fetcher::{FetchError, FetchedPage, HttpFetcher, PageFetcher};
pub use validator::is_valid;
