#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod engine;
pub mod hosts;
pub mod models;
pub mod resolver;
pub mod rewrite;
pub mod scanner;
pub mod token;

pub use config::BusterConfig;
pub use engine::CacheBuster;
pub use models::{ProcessOutcome, Reference, ResolvedAsset, RewriteResult};
pub use rewrite::Strategy;
pub use token::TokenSource;
