//! Resume matcher library: text extraction, skill and keyword matching,
//! ATS and TF-IDF scoring, and the HTTP service around them.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod output;
pub mod server;

pub use config::Config;
pub use error::{Result, ResumeMatcherError};
pub use processing::MatchEngine;
