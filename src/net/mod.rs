pub mod parser;
pub mod resolver;

pub use parser::{Destination, classify};
pub use resolver::{DnsResolver, HickoryResolver};
