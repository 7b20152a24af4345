pub mod index;
pub mod persist;
pub mod tokenizer;

mod record;

pub use index::{InvertedIndex, ScoredAuthor};
pub use record::CollectedRecord;
