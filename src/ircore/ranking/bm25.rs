use super::{Ranker, ScoreData};

pub const DEFAULT_K1: f64 = 1.2;
pub const DEFAULT_B: f64 = 0.75;
pub const DEFAULT_K3: f64 = 500.0;

// The BM25 algorithm
// for all term t sum idf * tf_part * qtf_part
//   idf: ln(1 + (N - Nt + 0.5) / (Nt + 0.5))
//   tf_part: (k1 + 1) * ftd / (k1 * (1 - b + b * ld / lavg) + ftd)
//   qtf_part: (k3 + 1) * qt / (k3 + qt)
//   k1: weight saturation factor, default 1.2
//   b: level of normalization of document length, default 0.75
//   k3: query term saturation, default 500
#[derive(Debug, Clone, PartialEq)]
pub struct OkapiBm25 {
    pub k1: f64,
    pub b: f64,
    pub k3: f64,
}

impl OkapiBm25 {
    pub fn new(k1: f64, b: f64, k3: f64) -> Self {
        OkapiBm25{k1: k1, b: b, k3: k3}
    }
}

impl Default for OkapiBm25 {
    fn default() -> Self {
        OkapiBm25::new(DEFAULT_K1, DEFAULT_B, DEFAULT_K3)
    }
}

impl Ranker for OkapiBm25 {
    fn name(&self) -> &'static str {
        "bm25"
    }

    fn score_one(&self, sd: &ScoreData) -> f64 {
        let idf = (1.0 + (sd.num_docs - sd.doc_count + 0.5) / (sd.doc_count + 0.5)).ln();
        let tf_part = ((self.k1 + 1.0) * sd.doc_term_count)
            / (self.k1 * ((1.0 - self.b) + self.b * sd.doc_size / sd.avg_dl) + sd.doc_term_count);
        let qtf_part = ((self.k3 + 1.0) * sd.query_term_weight) / (self.k3 + sd.query_term_weight);
        idf * tf_part * qtf_part
    }
}
