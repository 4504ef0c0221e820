pub mod cfg;
pub mod engine;
pub mod error;
pub mod index;
pub mod ranking;
pub mod request;
pub mod response;
pub mod search;
pub mod token;
pub mod topics;
pub mod utils;

pub type TermId = u32;
pub type DocId = u32;

pub const CFG_NAME: &str = ".rircfg";
