pub mod cookie;
pub mod dom;
pub mod fade;
pub mod listener;
