/// Synthetic noise around constellation symbols
pub mod injector;
pub mod scope;

pub use injector::*;
pub use scope::*;
