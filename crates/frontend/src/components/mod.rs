pub mod pin;
pub mod tabs;

pub use pin::Pin;
pub use tabs::{TabItem, Tabs};
