//! Password configuration and generation.

pub mod charset;
mod config;
mod entropy;
mod generate;

pub use charset::CharClass;
pub use config::{Config, MAX_LENGTH, MIN_LENGTH, Preset};
pub use entropy::{effective_entropy, entropy_strength};
pub use generate::{Password, generate, generate_with_rng};
