use std::collections::{BTreeSet, HashMap, HashSet};
use serde::{Serialize, Deserialize};
use crate::ircore::{DocId, TermId};
use super::RankingIndex;

#[derive(Debug, Serialize, Deserialize)]
pub struct Posting {
    doc_id: DocId,
    term_frequency: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PostingsList {
    // term id -> postings, ordered by doc id
    postings_lists: HashMap<TermId, Vec<Posting>>,
    next_doc_id: DocId,
    // the number of times term(termid) appears in document(doc_id)
    term_frequency: HashMap<(TermId, DocId), u32>,
    // document length measured in tokens, doc_id - 1 is used as vector index
    document_length: Vec<u32>,
    // distinct terms per document, same indexing as document_length
    unique_terms: Vec<u32>,
    total_document_length: u64,
    document_count: usize,
}

impl PostingsList {
    pub fn new() -> Self {
        PostingsList{
            postings_lists: HashMap::new(),
            next_doc_id: 0,
            term_frequency: HashMap::new(),
            document_length: vec![],
            unique_terms: vec![],
            total_document_length: 0,
            document_count: 0,
        }
    }

    fn next_doc_id(&mut self) -> DocId {
        self.next_doc_id += 1;
        self.next_doc_id
    }

    pub fn add_document(&mut self, term_ids: &[TermId]) -> DocId {
        let doc_id = self.next_doc_id();
        let mut seen: HashSet<TermId> = HashSet::new();
        let document_length = term_ids.len() as u32;
        self.document_length.push(document_length);
        self.total_document_length += document_length as u64;
        self.document_count += 1;
        for &tid in term_ids {
            let postings = self.postings_lists.entry(tid).or_insert_with(Vec::new);
            let same_doc = postings.last().map_or(false, |post| post.doc_id == doc_id);
            if same_doc {
                if let Some(post) = postings.last_mut() {
                    post.term_frequency += 1;
                }
            }else{
                postings.push(Posting{
                    doc_id: doc_id,
                    term_frequency: 1,
                });
            }
            self.term_frequency.entry((tid, doc_id))
                .and_modify(|count| *count += 1)
                .or_insert(1);
            seen.insert(tid);
        }
        self.unique_terms.push(seen.len() as u32);
        doc_id
    }

    pub fn get_term_count(&self) -> usize {
        self.postings_lists.len()
    }

    fn slot(&self, doc: DocId) -> Option<usize> {
        if doc == 0 {
            return None;
        }
        Some(doc as usize - 1)
    }
}

impl RankingIndex for PostingsList {
    fn get_document_count(&self) -> usize {
        self.document_count
    }

    fn get_average_document_length(&self) -> f64 {
        if self.document_count == 0 {
            return 0.0;
        }
        self.total_document_length as f64 / self.document_count as f64
    }

    fn get_total_terms(&self) -> u64 {
        self.total_document_length
    }

    fn get_document_length(&self, doc: DocId) -> Option<u32> {
        self.slot(doc).and_then(|i| self.document_length.get(i).copied())
    }

    fn get_unique_terms(&self, doc: DocId) -> Option<u32> {
        self.slot(doc).and_then(|i| self.unique_terms.get(i).copied())
    }

    fn get_document_frequency(&self, term: TermId) -> u32 {
        self.postings_lists.get(&term).map_or(0, |postings| postings.len() as u32)
    }

    fn get_term_occurences_num(&self, term: TermId) -> u64 {
        self.postings_lists.get(&term).map_or(0, |postings| {
            postings.iter().fold(0u64, |sum, posting| sum + posting.term_frequency as u64)
        })
    }

    fn get_term_frequency(&self, term: TermId, doc: DocId) -> u32 {
        self.term_frequency.get(&(term, doc)).copied().unwrap_or(0)
    }

    fn docs_contain_any(&self, term_list: &[TermId]) -> Vec<DocId> {
        let mut doc_set = BTreeSet::new();
        for term in term_list {
            if let Some(postings) = self.postings_lists.get(term) {
                doc_set.extend(postings.iter().map(|post| post.doc_id));
            }
        }
        doc_set.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ircore::token::dictionary::Dictionary;

    #[test]
    fn test_index_from_terms(){
        let mut idx = PostingsList::new();
        let mut dict = Dictionary::new();
        let mut term_ids = dict.generate_ids(&["hello", "world", "hello", "世", "界", "你", "好", "你", "好"]);
        let mut doc_id = idx.add_document(&term_ids);
        assert_eq!(doc_id, 1);
        assert_eq!(idx.get_term_count(), dict.get_term_count());
        assert_eq!(idx.term_frequency.len(), 6);
        assert_eq!(idx.get_total_terms(), 9);
        assert_eq!(idx.get_average_document_length(), 9.0);
        assert_eq!(idx.get_document_count(), 1);
        assert_eq!(idx.get_unique_terms(1), Some(6));

        term_ids = dict.generate_ids(&["你", "好", "明", "天"]);
        doc_id = idx.add_document(&term_ids);
        assert_eq!(doc_id, 2);
        assert_eq!(dict.get_term_count(), 8);
        assert_eq!(idx.get_term_count(), dict.get_term_count());
        assert_eq!(idx.term_frequency.len(), 10);
        assert_eq!(idx.get_total_terms(), 13);
        assert_eq!(idx.get_average_document_length(), 6.5);
        assert_eq!(idx.get_document_count(), 2);
        assert_eq!(idx.get_document_length(2), Some(4));
        assert_eq!(idx.get_document_length(3), None);
        assert_eq!(idx.get_document_length(0), None);

        assert_eq!(idx.get_term_occurences_num(2), 1); //world
        assert_eq!(idx.get_term_occurences_num(1), 2); //hello
        assert_eq!(idx.get_term_occurences_num(6), 3); //好
        assert_eq!(idx.get_term_occurences_num(7), 1); //明
        assert_eq!(idx.get_document_frequency(6), 2);
        assert_eq!(idx.get_document_frequency(100), 0);
        assert_eq!(idx.get_term_frequency(5, 1), 2);
        assert_eq!(idx.get_term_frequency(5, 2), 1);
        assert_eq!(idx.get_term_frequency(7, 1), 0);
    }

    #[test]
    fn test_docs_contain_any() {
        let mut idx = PostingsList::new();
        let mut dict = Dictionary::new();
        let mut term_ids = dict.generate_ids(&["hello", "world", "hello", "世", "界", "你", "好", "你", "好"]);
        idx.add_document(&term_ids);
        term_ids = dict.generate_ids(&["你", "好", "明", "天"]);
        idx.add_document(&term_ids);
        assert_eq!(idx.docs_contain_any(&[7]), vec![2]);
        assert_eq!(idx.docs_contain_any(&[7, 5]), vec![1, 2]);
        assert!(idx.docs_contain_any(&[100]).is_empty());
        assert_eq!(idx.docs_contain_any(&[7, 100, 7]), vec![2]);
        assert!(idx.docs_contain_any(&[]).is_empty());
    }
}
