pub mod postings;

use std::collections::HashMap;
use std::path::Path;
use serde::{Serialize, Deserialize};
use crate::ircore::{DocId, TermId};
use crate::ircore::error::Result;
use crate::ircore::token::analyzer::Analyzer;
use crate::ircore::utils::serialize;
use postings::PostingsList;

/// Collection statistics read by the rankers.
pub trait RankingIndex {
    // total number of documents
    fn get_document_count(&self) -> usize;
    fn get_average_document_length(&self) -> f64;
    // number of tokens in the whole collection
    fn get_total_terms(&self) -> u64;
    fn get_document_length(&self, doc: DocId) -> Option<u32>;
    // number of distinct terms in a document
    fn get_unique_terms(&self, doc: DocId) -> Option<u32>;
    // the number of documents in the collection containing the term
    fn get_document_frequency(&self, term: TermId) -> u32;
    // number of term occurences in whole collection
    fn get_term_occurences_num(&self, term: TermId) -> u64;
    fn get_term_frequency(&self, term: TermId, doc: DocId) -> u32;
    // docs containing any of the terms, ascending doc id
    fn docs_contain_any(&self, term_list: &[TermId]) -> Vec<DocId>;
}

/// Everything the gateway needs from an index: statistics for scoring plus
/// query analysis and display lookups.
pub trait SearchIndex: RankingIndex {
    // query text -> term ids known to the index, repeated terms kept
    fn parse_query(&self, text: &str) -> Vec<TermId>;
    fn doc_name(&self, doc: DocId) -> Option<&str>;
    fn doc_path(&self, doc: DocId) -> Option<&str>;
    fn term_text(&self, term: TermId) -> Option<&str>;
}

#[derive(Debug, Serialize, Deserialize)]
struct DocMeta {
    name: String,
    path: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InvertedIndex {
    postings: PostingsList,
    analyzer: Analyzer,
    doc_meta: HashMap<DocId, DocMeta>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        InvertedIndex{
            postings: PostingsList::new(),
            analyzer: Analyzer::new(),
            doc_meta: HashMap::new(),
        }
    }

    pub fn doc_count(&self) -> usize {
        self.doc_meta.len()
    }

    pub fn term_count(&self) -> usize {
        self.analyzer.term_count()
    }

    pub fn add_document(&mut self, name: &str, path: &str, content: &str) -> DocId {
        let term_ids = self.analyzer.index_terms(content);
        let id = self.postings.add_document(&term_ids);
        self.doc_meta.insert(id, DocMeta{
            name: name.to_owned(),
            path: path.to_owned(),
        });
        if id % 1000 == 0 {
            log::debug!("{} documents indexed", id);
        }
        id
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let index: InvertedIndex = serialize::read_file(path)?;
        log::info!("index of {} documents loaded from {}", index.doc_count(), path.display());
        Ok(index)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        serialize::write_file(path, self)
    }
}

impl RankingIndex for InvertedIndex {
    fn get_document_count(&self) -> usize {
        self.postings.get_document_count()
    }
    fn get_average_document_length(&self) -> f64 {
        self.postings.get_average_document_length()
    }
    fn get_total_terms(&self) -> u64 {
        self.postings.get_total_terms()
    }
    fn get_document_length(&self, doc: DocId) -> Option<u32> {
        self.postings.get_document_length(doc)
    }
    fn get_unique_terms(&self, doc: DocId) -> Option<u32> {
        self.postings.get_unique_terms(doc)
    }
    fn get_document_frequency(&self, term: TermId) -> u32 {
        self.postings.get_document_frequency(term)
    }
    fn get_term_occurences_num(&self, term: TermId) -> u64 {
        self.postings.get_term_occurences_num(term)
    }
    fn get_term_frequency(&self, term: TermId, doc: DocId) -> u32 {
        self.postings.get_term_frequency(term, doc)
    }
    fn docs_contain_any(&self, term_list: &[TermId]) -> Vec<DocId> {
        self.postings.docs_contain_any(term_list)
    }
}

impl SearchIndex for InvertedIndex {
    fn parse_query(&self, text: &str) -> Vec<TermId> {
        let terms = self.analyzer.query_terms(text);
        if !terms.unknown.is_empty() {
            log::debug!("ignoring terms not in index: {:?}", terms.unknown);
        }
        terms.known
    }

    fn doc_name(&self, doc: DocId) -> Option<&str> {
        self.doc_meta.get(&doc).map(|meta| meta.name.as_str())
    }

    fn doc_path(&self, doc: DocId) -> Option<&str> {
        self.doc_meta.get(&doc).map(|meta| meta.path.as_str())
    }

    fn term_text(&self, term: TermId) -> Option<&str> {
        self.analyzer.term_text(term)
    }
}

// The five romeo & juliet lines used across the unit tests.
#[cfg(test)]
pub(crate) fn romeo_juliet() -> InvertedIndex {
    let mut index = InvertedIndex::new();
    index.add_document("1.txt", "romeo_juliet/a/1.txt", "Do you quarrel, sir?");
    index.add_document("2.txt", "romeo_juliet/a/2.txt", "Quarrel sir! no, sir!");
    index.add_document("3.txt", "romeo_juliet/b/3.txt",
        "If you do, sir, I am for you: I serve as good a man as you.");
    index.add_document("4.txt", "romeo_juliet/b/4.txt", "No better.");
    index.add_document("5.txt", "romeo_juliet/5.txt", "Well, sir.");
    index
}
