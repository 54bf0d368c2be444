pub mod error;
pub mod formats;
pub mod input;
pub mod options;
pub mod runtime;
