pub mod analyzer;
pub mod dictionary;
pub mod tokenizer;
