pub mod analyzer;
pub mod gap;
pub mod keywords;
pub mod normalizer;
pub mod similarity;
pub mod tokenizer;
