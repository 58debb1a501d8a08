// Service exports
pub mod display;

pub use display::DisplayState;
