use serde::Serialize;
use crate::ircore::error::{GatewayError, Result};
use crate::ircore::search::{ScoredResult, ScoredRun};
use crate::ircore::topics::TopicTermEntry;

/// The value handed back for one request.
///
/// Search responses always carry `elapsed_time` in milliseconds; topics
/// responses are not timed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Search {
        results: Vec<ScoredResult>,
        elapsed_time: f64,
    },
    Topics {
        results: Vec<TopicTermEntry>,
    },
    // unrecognized method
    Empty {
        results: Vec<ScoredResult>,
    },
}

impl Response {
    pub fn search(run: ScoredRun) -> Self {
        let elapsed_time = run.elapsed_ms();
        Response::Search {
            results: run.results,
            elapsed_time: elapsed_time,
        }
    }

    pub fn topics(entries: Vec<TopicTermEntry>) -> Self {
        Response::Topics{results: entries}
    }

    pub fn empty() -> Self {
        Response::Empty{results: vec![]}
    }

    pub fn len(&self) -> usize {
        match self {
            Response::Search{results, ..} | Response::Empty{results} => results.len(),
            Response::Topics{results} => results.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| GatewayError::Encode(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| GatewayError::Encode(e.to_string()))
    }
}
