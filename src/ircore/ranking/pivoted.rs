use super::{Ranker, ScoreData};

pub const DEFAULT_S: f64 = 0.2;

// Pivoted length normalization
// for all term t sum qt * (1 + ln(1 + ln(ftd))) / (1 - s + s * ld / lavg) * ln((N + 1) / (Nt + 0.5))
#[derive(Debug, Clone, PartialEq)]
pub struct PivotedLength {
    pub s: f64,
}

impl PivotedLength {
    pub fn new(s: f64) -> Self {
        PivotedLength{s: s}
    }
}

impl Default for PivotedLength {
    fn default() -> Self {
        PivotedLength::new(DEFAULT_S)
    }
}

impl Ranker for PivotedLength {
    fn name(&self) -> &'static str {
        "pivoted-length"
    }

    fn score_one(&self, sd: &ScoreData) -> f64 {
        let norm_tf = 1.0 + (1.0 + sd.doc_term_count.ln()).ln();
        let norm_dl = 1.0 - self.s + self.s * sd.doc_size / sd.avg_dl;
        let idf = ((sd.num_docs + 1.0) / (sd.doc_count + 0.5)).ln();
        sd.query_term_weight * norm_tf / norm_dl * idf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ircore::index::{romeo_juliet, SearchIndex};

    #[test]
    fn test_rank_pivoted_length() {
        let idx = romeo_juliet();
        let docs = PivotedLength::default().score(&idx, &idx.parse_query("quarrel sir"), 50).unwrap();
        let ids: Vec<u32> = docs.iter().map(|d| d.docid).collect();
        assert_eq!(ids, vec![2, 1, 5, 3]);
        // doc 5: ln(6 / 4.5) / (0.8 + 0.2 * 2 / 5.6)
        let epsilon = 0.005;
        assert!((docs[2].score - 0.33).abs() <= epsilon);
    }

    #[test]
    fn test_s_zero_ignores_length() {
        let idx = romeo_juliet();
        let docs = PivotedLength::new(0.0).score(&idx, &idx.parse_query("no"), 50).unwrap();
        assert_eq!(docs.len(), 2);
        assert!((docs[0].score - docs[1].score).abs() <= f64::EPSILON);
        // equal scores keep doc id order
        assert_eq!(docs[0].docid, 2);
    }
}
