//! Tabs: one visible content section at a time, selected through navigation
//! links, optionally remembered in a cookie.

pub mod options;
pub mod state;
pub mod target;

pub use options::{cookie_name, TabsOptions, COOKIE_PREFIX};
pub use state::{initial_index, tab_index, Activation, Selection, TabsState};
pub use target::section_target;
