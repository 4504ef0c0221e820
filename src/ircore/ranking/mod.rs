pub mod bm25;
pub mod pivoted;
pub mod lm;
pub mod selector;

use std::cmp::Ordering;
use std::collections::BTreeMap;
use crate::ircore::{DocId, TermId};
use crate::ircore::error::IndexError;
use crate::ircore::index::RankingIndex;
use crate::ircore::utils::topk::BoundedTopK;

#[derive(Debug, Clone, PartialEq)]
pub struct DocScore {
    pub docid: DocId,
    pub score: f64,
}

// descending score; NaN sorts first instead of panicking
pub fn by_score_desc(a: &DocScore, b: &DocScore) -> Ordering {
    b.score.total_cmp(&a.score)
}

/// Statistics for one (query term, document) pair, filled in by
/// [`Ranker::score`] before each call to [`Ranker::score_one`].
#[derive(Debug, Clone, Default)]
pub struct ScoreData {
    // collection
    pub num_docs: f64,
    pub avg_dl: f64,
    pub total_terms: f64,
    // query
    pub query_length: f64,
    // document
    pub d_id: DocId,
    pub doc_size: f64,
    pub doc_unique_terms: f64,
    // term
    pub t_id: TermId,
    pub query_term_weight: f64,
    pub doc_count: f64,
    pub corpus_term_count: f64,
    pub doc_term_count: f64,
}

/// A scoring strategy.
///
/// Implementors supply the per-term contribution; `score` walks every
/// document that contains at least one query term and keeps the best
/// `limit` of them.
pub trait Ranker {
    fn name(&self) -> &'static str;

    // contribution of one query term found in one document
    fn score_one(&self, sd: &ScoreData) -> f64;

    // per-document constant added once before the term contributions
    fn initial_score(&self, _sd: &ScoreData) -> f64 {
        0.0
    }

    fn score(&self, index: &dyn RankingIndex, query: &[TermId], limit: usize)
        -> Result<Vec<DocScore>, IndexError> {
        let mut query_term_freq: BTreeMap<TermId, u32> = BTreeMap::new();
        for &tid in query {
            *query_term_freq.entry(tid).or_insert(0) += 1;
        }
        let mut topk = BoundedTopK::new(limit, by_score_desc);
        let docs = index.docs_contain_any(query);
        if docs.is_empty() {
            return Ok(topk.extract_ordered());
        }
        let avg_dl = index.get_average_document_length();
        if index.get_document_count() == 0 || avg_dl <= 0.0 {
            return Err(IndexError::EmptyCollection);
        }
        let mut sd = ScoreData {
            num_docs: index.get_document_count() as f64,
            avg_dl: avg_dl,
            total_terms: index.get_total_terms() as f64,
            query_length: query.len() as f64,
            ..ScoreData::default()
        };
        for docid in docs {
            sd.d_id = docid;
            sd.doc_size = index.get_document_length(docid)
                .ok_or(IndexError::UnknownDocument(docid))? as f64;
            sd.doc_unique_terms = index.get_unique_terms(docid)
                .ok_or(IndexError::UnknownDocument(docid))? as f64;
            let mut score = self.initial_score(&sd);
            for (&tid, &qt) in &query_term_freq {
                let ftd = index.get_term_frequency(tid, docid);
                if ftd == 0 {
                    continue;
                }
                sd.t_id = tid;
                sd.query_term_weight = qt as f64;
                sd.doc_count = index.get_document_frequency(tid) as f64;
                sd.corpus_term_count = index.get_term_occurences_num(tid) as f64;
                sd.doc_term_count = ftd as f64;
                score += self.score_one(&sd);
            }
            topk.insert(DocScore{docid: docid, score: score});
        }
        Ok(topk.extract_ordered())
    }
}
