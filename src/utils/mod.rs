pub mod consts;
pub mod dump;
pub mod logging;
