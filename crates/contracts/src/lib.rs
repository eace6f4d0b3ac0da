//! Target-independent logic shared by the Pin and Tabs widgets.
//!
//! Nothing here touches the DOM: the frontend crate measures elements, feeds
//! the numbers in and applies what comes out.

pub mod shared;
pub mod widgets;

pub use shared::error::{WidgetError, WidgetResult};
