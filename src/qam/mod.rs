/// Constellation construction
pub mod builder;
pub mod order;
pub mod point;

pub use builder::*;
pub use order::*;
pub use point::*;
