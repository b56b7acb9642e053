pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::ServerConfig;
pub use self::core::{
    decoder::{decode, encode},
    engine::{DefaultEngine, PyramidEngine},
    pyramid::is_pyramid_word,
};
pub use domain::model::Verdict;
pub use utils::error::{PyramidError, Result};
