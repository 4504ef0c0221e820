use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use serde::{Serialize, Deserialize};
use crate::ircore::error::{GatewayError, Result};

pub const DEFAULT_INDEX: &str = ".rir/rir.idx";
pub const DEFAULT_MAX_RESULTS: usize = 50;
pub const DEFAULT_NUM_WORDS: usize = 10;

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(default)]
pub struct Cfg {
    // precomputed index file
    index: PathBuf,
    // topic model file, one topic per line
    topics: Option<PathBuf>,
    // results kept per search
    max_results: usize,
    // terms kept per topic when the request does not say
    num_words: usize,
}

impl Default for Cfg {
    fn default() -> Self {
        Cfg {
            index: PathBuf::from(DEFAULT_INDEX),
            topics: None,
            max_results: DEFAULT_MAX_RESULTS,
            num_words: DEFAULT_NUM_WORDS,
        }
    }
}

impl Cfg {
    pub fn new() -> Self {
        Cfg::default()
    }

    pub fn from_str(cfg_str: &str) -> Result<Self> {
        serde_yaml::from_str(cfg_str).map_err(|e| GatewayError::Config(e.to_string()))
    }

    // a missing file means defaults
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(cfg_str) => serde_yaml::from_str(&cfg_str)
                .map_err(|e| GatewayError::Config(format!("{}: {}", path.display(), e))),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("{} not found, using default configuration", path.display());
                Ok(Cfg::new())
            }
            Err(e) => Err(GatewayError::io(path, e)),
        }
    }

    pub fn get_index(&self) -> &Path {
        &self.index
    }
    pub fn set_index(&mut self, index: PathBuf) {
        self.index = index;
    }

    pub fn get_topics(&self) -> Option<&Path> {
        self.topics.as_deref()
    }
    pub fn set_topics(&mut self, topics: PathBuf) {
        self.topics = Some(topics);
    }

    pub fn get_max_results(&self) -> usize {
        self.max_results
    }
    pub fn set_max_results(&mut self, max_results: usize) {
        self.max_results = max_results;
    }

    pub fn get_num_words(&self) -> usize {
        self.num_words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_syntax() {
        let cfg_str =
"index: data/news.idx
topics: data/news.phi
max_results: 20
";
        let cfg = Cfg::from_str(cfg_str).unwrap();
        assert_eq!(cfg.get_index(), Path::new("data/news.idx"));
        assert_eq!(cfg.get_topics(), Some(Path::new("data/news.phi")));
        assert_eq!(cfg.get_max_results(), 20);
        assert_eq!(cfg.get_num_words(), DEFAULT_NUM_WORDS);
    }

    #[test]
    fn test_defaults() {
        let cfg = Cfg::new();
        assert_eq!(cfg.get_index(), Path::new(".rir/rir.idx"));
        assert_eq!(cfg.get_topics(), None);
        assert_eq!(cfg.get_max_results(), 50);
        assert_eq!(Cfg::from_str("{}").unwrap(), cfg);
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(matches!(Cfg::from_str("max_results: many"), Err(GatewayError::Config(_))));
    }

    #[test]
    fn test_load() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Cfg::load(&dir.path().join(".rircfg")).unwrap();
        assert_eq!(cfg, Cfg::new());
        let cfg_path = dir.path().join("gateway.yml");
        fs::write(&cfg_path, "num_words: 3\n").unwrap();
        assert_eq!(Cfg::load(&cfg_path).unwrap().get_num_words(), 3);
        fs::write(&cfg_path, "num_words: [3\n").unwrap();
        assert!(Cfg::load(&cfg_path).is_err());
    }
}
