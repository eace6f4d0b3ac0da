pub mod cookie;
pub mod error;
pub mod options;
