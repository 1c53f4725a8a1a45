mod app;
pub use app::*;

pub mod buttons;
pub mod input;
