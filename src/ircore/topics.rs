use std::cmp::Ordering;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use encoding_rs::UTF_8;
use encoding_rs_io::DecodeReaderBytesBuilder;
use serde::Serialize;
use crate::ircore::TermId;
use crate::ircore::error::{GatewayError, Result};
use crate::ircore::index::SearchIndex;
use crate::ircore::utils::topk::BoundedTopK;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicTermEntry {
    pub topic: String,
    pub term: String,
    pub id: TermId,
    pub score: f64,
}

fn by_weight_desc(a: &(TermId, f64), b: &(TermId, f64)) -> Ordering {
    b.1.total_cmp(&a.1)
}

/// Opens a topic model file. A BOM selects the encoding, otherwise the bytes
/// are read as UTF-8 with invalid sequences replaced.
pub fn open_topic_model(path: &Path) -> Result<impl Read> {
    let file = File::open(path).map_err(|e| GatewayError::io(path, e))?;
    Ok(DecodeReaderBytesBuilder::new()
        .encoding(Some(UTF_8))
        .build(file))
}

// "topic termId:weight termId:weight ..." -> (topic, best num_words pairs)
fn parse_topic_line(line: &str, num_words: usize) -> Option<(String, Vec<(TermId, f64)>)> {
    let mut tokens = line.split_whitespace();
    let topic = tokens.next()?;
    let mut topk = BoundedTopK::new(num_words, by_weight_desc);
    for token in tokens {
        let parsed = token.split_once(':').and_then(|(id, weight)| {
            let weight = weight.parse::<f64>().ok().filter(|w| w.is_finite())?;
            Some((id.parse::<TermId>().ok()?, weight))
        });
        match parsed {
            Some(pair) => {
                topk.insert(pair);
            }
            None => log::debug!("topic {}: skipping malformed token \"{}\"", topic, token),
        }
    }
    Some((topic.to_string(), topk.extract_ordered()))
}

/// Top `num_words` terms of every topic line in `source`, best first within
/// each topic, topics in file order. Blank lines are skipped.
pub fn extract_topics<R: Read, I: SearchIndex>(source: R, num_words: usize, index: &I)
    -> Result<Vec<TopicTermEntry>> {
    let mut entries = vec![];
    for (n, line) in BufReader::new(source).lines().enumerate() {
        let line = line.map_err(|e| GatewayError::TopicModel(format!("line {}: {}", n + 1, e)))?;
        if let Some((topic, terms)) = parse_topic_line(&line, num_words) {
            for (tid, weight) in terms {
                entries.push(TopicTermEntry{
                    topic: topic.clone(),
                    term: index.term_text(tid).unwrap_or_default().to_string(),
                    id: tid,
                    score: weight,
                });
            }
        }
    }
    Ok(entries)
}
