use std::time::{Duration, Instant};
use serde::Serialize;
use crate::ircore::DocId;
use crate::ircore::error::{GatewayError, IndexError, Result};
use crate::ircore::index::SearchIndex;
use crate::ircore::ranking::selector::RankerSpec;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredResult {
    #[serde(skip)]
    pub doc_id: DocId,
    pub score: f64,
    pub name: String,
    pub path: String,
}

/// Ranked results of one scoring call and the time it took.
#[derive(Debug, Clone)]
pub struct ScoredRun {
    pub results: Vec<ScoredResult>,
    pub elapsed: Duration,
}

impl ScoredRun {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_nanos() as f64 / 1_000_000.0
    }
}

/// Runs the ranker described by `spec` over `index`, keeping the best
/// `limit` documents. Only this call is timed.
pub fn execute<I: SearchIndex>(spec: &RankerSpec, index: &I, query: &str, limit: usize)
    -> Result<ScoredRun> {
    let start = Instant::now();
    let scoring_error = |source: IndexError| GatewayError::Scoring {
        ranker: spec.name().to_string(),
        query: query.to_string(),
        source: source,
    };
    let ranker = spec.build();
    let term_ids = index.parse_query(query);
    let doc_scores = ranker.score(index, &term_ids, limit).map_err(scoring_error)?;
    let mut results = Vec::with_capacity(doc_scores.len());
    for ds in doc_scores {
        match (index.doc_name(ds.docid), index.doc_path(ds.docid)) {
            (Some(name), Some(path)) => results.push(ScoredResult{
                doc_id: ds.docid,
                score: ds.score,
                name: name.to_string(),
                path: path.to_string(),
            }),
            _ => return Err(scoring_error(IndexError::UnknownDocument(ds.docid))),
        }
    }
    Ok(ScoredRun{
        results: results,
        elapsed: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ircore::{DocId, TermId};
    use crate::ircore::index::{romeo_juliet, RankingIndex};

    #[test]
    fn test_execute_bm25() {
        let index = romeo_juliet();
        let spec = RankerSpec::Bm25{k1: 1.2, b: 0.75, k3: 100.0};
        let run = execute(&spec, &index, "Quarrel sir", 50).unwrap();
        let names: Vec<&str> = run.results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["2.txt", "1.txt", "5.txt", "3.txt"]);
        assert_eq!(run.results[0].path, "romeo_juliet/a/2.txt");
        assert!(run.results.windows(2).all(|w| w[0].score >= w[1].score));
        assert!(run.elapsed_ms() >= 0.0);
    }

    #[test]
    fn test_execute_limit() {
        let index = romeo_juliet();
        let run = execute(&RankerSpec::Default, &index, "sir", 3).unwrap();
        assert_eq!(run.results.len(), 3);
        let run = execute(&RankerSpec::Default, &index, "tybalt", 3).unwrap();
        assert!(run.results.is_empty());
    }

    // claims document 9 matches but knows nothing about it
    struct CorruptIndex;

    impl RankingIndex for CorruptIndex {
        fn get_document_count(&self) -> usize { 1 }
        fn get_average_document_length(&self) -> f64 { 3.0 }
        fn get_total_terms(&self) -> u64 { 3 }
        fn get_document_length(&self, _doc: DocId) -> Option<u32> { None }
        fn get_unique_terms(&self, _doc: DocId) -> Option<u32> { None }
        fn get_document_frequency(&self, _term: TermId) -> u32 { 1 }
        fn get_term_occurences_num(&self, _term: TermId) -> u64 { 1 }
        fn get_term_frequency(&self, _term: TermId, _doc: DocId) -> u32 { 1 }
        fn docs_contain_any(&self, _term_list: &[TermId]) -> Vec<DocId> { vec![9] }
    }

    impl SearchIndex for CorruptIndex {
        fn parse_query(&self, _text: &str) -> Vec<TermId> { vec![1] }
        fn doc_name(&self, _doc: DocId) -> Option<&str> { None }
        fn doc_path(&self, _doc: DocId) -> Option<&str> { None }
        fn term_text(&self, _term: TermId) -> Option<&str> { None }
    }

    #[test]
    fn test_index_failure_is_reported_with_context() {
        let spec = RankerSpec::DirichletPrior{mu: 2000.0};
        match execute(&spec, &CorruptIndex, "quarrel", 50) {
            Err(GatewayError::Scoring{ranker, query, source: IndexError::UnknownDocument(9)}) => {
                assert_eq!(ranker, "dirichlet-prior");
                assert_eq!(query, "quarrel");
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
