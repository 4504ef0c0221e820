use crate::ircore::request::{ParamError, Request};
use super::Ranker;
use super::bm25::OkapiBm25;
use super::pivoted::PivotedLength;
use super::lm::{AbsoluteDiscount, DirichletPrior, JelinekMercer};

/// A ranker chosen by name, with its parameters already converted.
#[derive(Debug, Clone, PartialEq)]
pub enum RankerSpec {
    PivotedLength { s: f64 },
    Bm25 { k1: f64, b: f64, k3: f64 },
    DirichletPrior { mu: f64 },
    JelinekMercer { lambda: f64 },
    AbsoluteDiscount { delta: f64 },
    // bm25 with its default parameters
    Default,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SelectError {
    #[error("unknown ranker \"{0}\"")]
    UnknownRanker(String),

    #[error("ranker {ranker} is missing parameter \"{param}\"")]
    MissingParameter { ranker: String, param: String },

    #[error("ranker {ranker} got non-numeric \"{param}\": \"{value}\"")]
    InvalidParameter { ranker: String, param: String, value: String },
}

/// Outcome of [`select_or_default`]. `fallback` carries the reason when the
/// requested ranker was replaced by [`RankerSpec::Default`].
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub spec: RankerSpec,
    pub fallback: Option<SelectError>,
}

impl Selection {
    pub fn is_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}

impl RankerSpec {
    pub fn name(&self) -> &'static str {
        match self {
            RankerSpec::PivotedLength{..} => "pivoted-length",
            RankerSpec::Bm25{..} => "bm25",
            RankerSpec::DirichletPrior{..} => "dirichlet-prior",
            RankerSpec::JelinekMercer{..} => "jelinek-mercer",
            RankerSpec::AbsoluteDiscount{..} => "absolute-discount",
            RankerSpec::Default => "default",
        }
    }

    pub fn build(&self) -> Box<dyn Ranker> {
        match *self {
            RankerSpec::PivotedLength{s} => Box::new(PivotedLength::new(s)),
            RankerSpec::Bm25{k1, b, k3} => Box::new(OkapiBm25::new(k1, b, k3)),
            RankerSpec::DirichletPrior{mu} => Box::new(DirichletPrior::new(mu)),
            RankerSpec::JelinekMercer{lambda} => Box::new(JelinekMercer::new(lambda)),
            RankerSpec::AbsoluteDiscount{delta} => Box::new(AbsoluteDiscount::new(delta)),
            RankerSpec::Default => Box::new(OkapiBm25::default()),
        }
    }
}

fn param(request: &Request, ranker: &str, field: &str) -> Result<f64, SelectError> {
    request.get_number(field).map_err(|e| match e {
        ParamError::Missing => SelectError::MissingParameter {
            ranker: ranker.to_string(),
            param: field.to_string(),
        },
        ParamError::Invalid(value) => SelectError::InvalidParameter {
            ranker: ranker.to_string(),
            param: field.to_string(),
            value: value,
        },
    })
}

/// Maps a ranker name (exact, case-sensitive) and the request's parameter
/// fields to a [`RankerSpec`]. Parameter values are not range checked.
pub fn select(name: &str, request: &Request) -> Result<RankerSpec, SelectError> {
    let spec = match name {
        "pivoted-length" => RankerSpec::PivotedLength {
            s: param(request, name, "s")?,
        },
        "bm25" => RankerSpec::Bm25 {
            k1: param(request, name, "k1")?,
            b: param(request, name, "b")?,
            k3: param(request, name, "k3")?,
        },
        "dirichlet-prior" => RankerSpec::DirichletPrior {
            mu: param(request, name, "mu")?,
        },
        "jelinek-mercer" => RankerSpec::JelinekMercer {
            lambda: param(request, name, "lambda")?,
        },
        "absolute-discount" => RankerSpec::AbsoluteDiscount {
            delta: param(request, name, "d")?,
        },
        _ => return Err(SelectError::UnknownRanker(name.to_string())),
    };
    Ok(spec)
}

pub fn select_or_default(name: &str, request: &Request) -> Selection {
    match select(name, request) {
        Ok(spec) => Selection{spec: spec, fallback: None},
        Err(e) => {
            log::warn!("couldn't create ranker ({}), defaulting to bm25", e);
            Selection{spec: RankerSpec::Default, fallback: Some(e)}
        }
    }
}
