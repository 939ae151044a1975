//! Configuration loading and layering

pub mod env;
pub mod parser;

pub use env::EnvManager;
pub use parser::{load_config, ConfigParser};
