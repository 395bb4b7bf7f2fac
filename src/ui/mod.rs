#![cfg(feature = "gui")]

pub mod app;
pub mod assets;
pub mod theme;

pub use app::DriveApp;
