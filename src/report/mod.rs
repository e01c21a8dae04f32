/// Presentation and export of a finished run
pub mod export;
pub mod plot;
pub mod table;

pub use export::*;
pub use table::*;
