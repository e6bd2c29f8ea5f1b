//! Set data: raw upstream shapes, adapted unit models and the loader that
//! turns one into the other.

pub mod adapter;
pub mod board;
pub mod loader;
pub mod set_file;
pub mod stats_format;
pub mod units;
pub mod validate;
