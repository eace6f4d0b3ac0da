//! Pin: keep an element in view while the window scrolls, bounded by its
//! parent container.

pub mod geometry;
pub mod options;
pub mod throttle;

pub use geometry::{compute_position, settle_position, should_pin, PinMetrics, PinPosition, Viewport};
pub use options::{Location, PinOptions};
pub use throttle::ScrollThrottle;
