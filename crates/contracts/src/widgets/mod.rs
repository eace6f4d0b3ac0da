pub mod pin;
pub mod tabs;
