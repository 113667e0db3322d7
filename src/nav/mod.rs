pub use resolver::*;
pub use tree::*;

mod resolver;
mod tree;
