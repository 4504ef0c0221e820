use super::dictionary::Dictionary;
use super::tokenizer::Segmentator;
use crate::ircore::TermId;
use serde::{Serialize, Deserialize};

/// Query text split against the index vocabulary.
#[derive(Debug, Default, PartialEq)]
pub struct QueryTerms {
    pub known: Vec<TermId>,
    pub unknown: Vec<String>,
}

/// Text to term ids. Owns the vocabulary, so the same instance must be used
/// for indexing and for queries.
#[derive(Debug, Serialize, Deserialize)]
pub struct Analyzer {
    dict: Dictionary,
    seg: Segmentator,
}

impl Analyzer {
    pub fn new() -> Self {
        Analyzer{
            dict: Dictionary::new(),
            seg: Segmentator::new(),
        }
    }

    pub fn term_count(&self) -> usize {
        self.dict.get_term_count()
    }

    // new terms get fresh ids
    pub fn index_terms(&mut self, text: &str) -> Vec<TermId> {
        let normalized = self.seg.normalize(text);
        let tokens = self.seg.parse_tokens(&normalized);
        self.dict.generate_ids(&tokens)
    }

    pub fn query_terms(&self, text: &str) -> QueryTerms {
        let normalized = self.seg.normalize(text);
        let tokens = self.seg.parse_tokens(&normalized);
        let (known, unknown) = self.dict.get_ids(&tokens);
        QueryTerms{
            known: known,
            unknown: unknown,
        }
    }

    pub fn term_text(&self, tid: TermId) -> Option<&str> {
        self.dict.get_term_by_id(tid)
    }
}
