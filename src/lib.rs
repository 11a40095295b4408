pub mod app;
pub mod cli;
pub mod input;
pub mod stats;

pub use double_vector;
