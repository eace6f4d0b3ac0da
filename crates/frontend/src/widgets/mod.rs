pub mod pin;
pub mod tabs;

pub use pin::PinWidget;
pub use tabs::{TabRef, TabsWidget};
