pub mod app;
pub mod audio;
pub mod catalog;
pub mod config;
pub mod data;
pub mod error;
pub mod install;
pub mod model;
pub mod timer;
pub mod ui;
pub mod view_models;

pub use ui::BrainCartApp;
