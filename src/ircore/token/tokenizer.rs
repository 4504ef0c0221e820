use unicode_segmentation::UnicodeSegmentation;
use serde::{Serialize, Deserialize};
use jieba_rs::Jieba;
use once_cell::sync::Lazy;
use whatlang::Script;

static JIEBA: Lazy<Jieba> = Lazy::new(Jieba::new);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Language {
    English,
    Chinese,
}

/// Han script is segmented with jieba, everything else by unicode words.
pub fn detect_language(text: &str) -> Language {
    match whatlang::detect_script(text) {
        Some(Script::Mandarin) => Language::Chinese,
        _ => Language::English,
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Segmentator;

impl Segmentator {
    pub fn new() -> Self {
        Segmentator
    }

    pub fn parse_tokens<'a>(&self, text: &'a str) -> Vec<&'a str>{
        match detect_language(text) {
            Language::Chinese => JIEBA.cut(text, false)
                .into_iter()
                .filter(|word| word.chars().next().map_or(false, |c| c.is_alphanumeric()))
                .collect(),
            _ => text.unicode_words().collect(),
        }
    }

    pub fn normalize(&self, text: &str) -> String {
        match detect_language(text) {
            Language::Chinese => text.to_string(),
            _ => text.to_lowercase(),
        }
    }
}
