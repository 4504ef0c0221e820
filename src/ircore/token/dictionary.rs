use serde::{Serialize, Deserialize};
use std::collections::HashMap;
use crate::ircore::TermId;

#[derive(Debug, Serialize, Deserialize)]
pub struct Dictionary {
    term_ids: HashMap<String, TermId>,
    terms: HashMap<TermId, String>,
    next_id: TermId,
}

impl Dictionary {
    pub fn new() -> Self {
        Dictionary {
            term_ids: HashMap::new(),
            terms: HashMap::new(),
            next_id: 1,
        }
    }

    pub fn add(&mut self, word: &str) -> TermId {
        if let Some(&term_id) = self.term_ids.get(word) {
            return term_id;
        }
        let term_id = self.next_id;
        self.next_id += 1;
        self.term_ids.insert(word.to_owned(), term_id);
        self.terms.insert(term_id, word.to_owned());
        term_id
    }

    pub fn get(&self, word: &str) -> Option<TermId> {
        self.term_ids.get(word).copied()
    }

    pub fn get_term_by_id(&self, tid: TermId) -> Option<&str> {
        self.terms.get(&tid).map(|term| term.as_str())
    }

    pub fn generate_ids(&mut self, words: &[&str]) -> Vec<TermId> {
        words.iter().map(|word| self.add(word)).collect()
    }

    // (known ids, unknown words)
    pub fn get_ids(&self, words: &[&str]) -> (Vec<TermId>, Vec<String>) {
        let mut known = vec![];
        let mut unknown = vec![];
        for word in words {
            match self.get(word) {
                Some(tid) => known.push(tid),
                None => unknown.push(word.to_string()),
            }
        }
        (known, unknown)
    }

    pub fn get_term_count(&self) -> usize {
        self.term_ids.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary() {
        let mut dict = Dictionary::new();
        let ids = dict.generate_ids(&["do", "you", "quarrel", "sir", "you"]);
        assert_eq!(ids, vec![1, 2, 3, 4, 2]);
        assert_eq!(dict.get_term_count(), 4);
        assert_eq!(dict.get("quarrel"), Some(3));
        assert_eq!(dict.get_term_by_id(4), Some("sir"));
        assert_eq!(dict.get_term_by_id(100), None);
        let (known, unknown) = dict.get_ids(&["sir", "cool", "do"]);
        assert_eq!(known, vec![4, 1]);
        assert_eq!(unknown, vec!["cool".to_string()]);
    }
}
