pub mod error;
pub mod tokenizer;
pub mod tsv;
