use super::{Ranker, ScoreData};

pub const DEFAULT_MU: f64 = 2000.0;
pub const DEFAULT_LAMBDA: f64 = 0.7;
pub const DEFAULT_DELTA: f64 = 0.7;

// Smoothed query likelihood
//   score = n * ln(a_d) + sum over t of qt * ln(p_s(t|d) / (a_d * p_c(t)))
//   n: number of tokens in the query
//   p_c: collection probability of t, lt / total collection tokens
//   p_s: smoothed document probability of t
//   a_d: weight given to the collection model for document d
pub trait LanguageModel {
    fn smoothed_prob(&self, sd: &ScoreData) -> f64;
    fn doc_constant(&self, sd: &ScoreData) -> f64;
}

fn collection_prob(sd: &ScoreData) -> f64 {
    sd.corpus_term_count / sd.total_terms
}

fn lm_score_one<M: LanguageModel>(model: &M, sd: &ScoreData) -> f64 {
    let ps = model.smoothed_prob(sd);
    let doc_const = model.doc_constant(sd);
    sd.query_term_weight * (ps / (doc_const * collection_prob(sd))).ln()
}

fn lm_initial_score<M: LanguageModel>(model: &M, sd: &ScoreData) -> f64 {
    sd.query_length * model.doc_constant(sd).ln()
}

// Dirichlet prior: p_s = (ftd + mu * p_c) / (ld + mu), a_d = mu / (ld + mu)
#[derive(Debug, Clone, PartialEq)]
pub struct DirichletPrior {
    pub mu: f64,
}

impl DirichletPrior {
    pub fn new(mu: f64) -> Self {
        DirichletPrior{mu: mu}
    }
}

impl Default for DirichletPrior {
    fn default() -> Self {
        DirichletPrior::new(DEFAULT_MU)
    }
}

impl LanguageModel for DirichletPrior {
    fn smoothed_prob(&self, sd: &ScoreData) -> f64 {
        (sd.doc_term_count + self.mu * collection_prob(sd)) / (sd.doc_size + self.mu)
    }
    fn doc_constant(&self, sd: &ScoreData) -> f64 {
        self.mu / (sd.doc_size + self.mu)
    }
}

impl Ranker for DirichletPrior {
    fn name(&self) -> &'static str {
        "dirichlet-prior"
    }
    fn score_one(&self, sd: &ScoreData) -> f64 {
        lm_score_one(self, sd)
    }
    fn initial_score(&self, sd: &ScoreData) -> f64 {
        lm_initial_score(self, sd)
    }
}

// Jelinek-Mercer: p_s = (1 - lambda) * ftd / ld + lambda * p_c, a_d = lambda
#[derive(Debug, Clone, PartialEq)]
pub struct JelinekMercer {
    pub lambda: f64,
}

impl JelinekMercer {
    pub fn new(lambda: f64) -> Self {
        JelinekMercer{lambda: lambda}
    }
}

impl Default for JelinekMercer {
    fn default() -> Self {
        JelinekMercer::new(DEFAULT_LAMBDA)
    }
}

impl LanguageModel for JelinekMercer {
    fn smoothed_prob(&self, sd: &ScoreData) -> f64 {
        (1.0 - self.lambda) * sd.doc_term_count / sd.doc_size + self.lambda * collection_prob(sd)
    }
    fn doc_constant(&self, _sd: &ScoreData) -> f64 {
        self.lambda
    }
}

impl Ranker for JelinekMercer {
    fn name(&self) -> &'static str {
        "jelinek-mercer"
    }
    fn score_one(&self, sd: &ScoreData) -> f64 {
        lm_score_one(self, sd)
    }
    fn initial_score(&self, sd: &ScoreData) -> f64 {
        lm_initial_score(self, sd)
    }
}

// Absolute discount: p_s = max(ftd - delta, 0) / ld + a_d * p_c,
// a_d = delta * unique terms of d / ld
#[derive(Debug, Clone, PartialEq)]
pub struct AbsoluteDiscount {
    pub delta: f64,
}

impl AbsoluteDiscount {
    pub fn new(delta: f64) -> Self {
        AbsoluteDiscount{delta: delta}
    }
}

impl Default for AbsoluteDiscount {
    fn default() -> Self {
        AbsoluteDiscount::new(DEFAULT_DELTA)
    }
}

impl LanguageModel for AbsoluteDiscount {
    fn smoothed_prob(&self, sd: &ScoreData) -> f64 {
        let discounted = (sd.doc_term_count - self.delta).max(0.0);
        discounted / sd.doc_size + self.doc_constant(sd) * collection_prob(sd)
    }
    fn doc_constant(&self, sd: &ScoreData) -> f64 {
        self.delta * sd.doc_unique_terms / sd.doc_size
    }
}

impl Ranker for AbsoluteDiscount {
    fn name(&self) -> &'static str {
        "absolute-discount"
    }
    fn score_one(&self, sd: &ScoreData) -> f64 {
        lm_score_one(self, sd)
    }
    fn initial_score(&self, sd: &ScoreData) -> f64 {
        lm_initial_score(self, sd)
    }
}
