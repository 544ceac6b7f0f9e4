//! Application coordination: screens, setup form, round clock

pub mod clock;
pub mod screen;
pub mod setup;

pub use screen::{Action, AppCoordinator, Screen};
pub use setup::{SetupForm, SetupRow};
