use std::sync::Arc;
use crate::ircore::cfg::Cfg;
use crate::ircore::error::{GatewayError, Result};
use crate::ircore::index::{InvertedIndex, SearchIndex};
use crate::ircore::ranking::selector;
use crate::ircore::request::{Method, ParamError, Request};
use crate::ircore::response::Response;
use crate::ircore::search;
use crate::ircore::topics;

/// Routes decoded requests to search or topic extraction.
///
/// The index is built once and shared; every call works on its own
/// request, ranker and result buffers.
pub struct Engine<I = InvertedIndex> {
    index: Arc<I>,
    cfg: Cfg,
}

impl Engine<InvertedIndex> {
    pub fn load_from(cfg: Cfg) -> Result<Self> {
        let index = InvertedIndex::load_from(cfg.get_index())?;
        Ok(Engine::new(Arc::new(index), cfg))
    }
}

impl<I: SearchIndex> Engine<I> {
    pub fn new(index: Arc<I>, cfg: Cfg) -> Self {
        Engine{
            index: index,
            cfg: cfg,
        }
    }

    pub fn get_index(&self) -> &I {
        &self.index
    }

    pub fn handle(&self, raw: &str) -> Result<Response> {
        let request = Request::decode(raw)?;
        self.dispatch(&request)
    }

    pub fn dispatch(&self, request: &Request) -> Result<Response> {
        match request.method() {
            Method::Search => self.search(request),
            Method::Topics => self.topics(request),
            Method::Unrecognized(method) => {
                log::warn!("unrecognized method {}, returning no results", method);
                Ok(Response::empty())
            }
        }
    }

    fn search(&self, request: &Request) -> Result<Response> {
        let ranker_method = request.get_ranker();
        let query_text = request.get_query();
        let preview: String = query_text.chars().take(40).collect();
        log::info!("Running query using {}: \"{}...\"", ranker_method, preview);

        let selection = selector::select_or_default(&ranker_method, request);
        let run = search::execute(&selection.spec, self.index.as_ref(), &query_text,
            self.cfg.get_max_results())?;
        log::info!("Done running query. ({:.3}ms)", run.elapsed_ms());
        Ok(Response::search(run))
    }

    // not timed
    fn topics(&self, request: &Request) -> Result<Response> {
        let num_words = match request.get_count("num_words") {
            Ok(n) => n,
            Err(e) => {
                let fallback = self.cfg.get_num_words();
                match e {
                    ParamError::Missing => log::warn!("num_words missing, using {}", fallback),
                    ParamError::Invalid(v) => log::warn!("num_words \"{}\" is not a count, using {}", v, fallback),
                }
                fallback
            }
        };
        let path = self.cfg.get_topics()
            .ok_or_else(|| GatewayError::TopicModel("no topic model configured".to_string()))?;
        let source = topics::open_topic_model(path)?;
        let entries = topics::extract_topics(source, num_words, self.index.as_ref())?;
        log::info!("{} topic terms from {}", entries.len(), path.display());
        Ok(Response::topics(entries))
    }
}
