pub mod args;
pub mod generate;

pub use args::{Args, OutputFormat};
