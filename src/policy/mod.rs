pub mod compile;
pub mod model;

pub use compile::{assemble, compile_file};
pub use model::{EgressNetworkPolicy, EgressRule, Polarity};
