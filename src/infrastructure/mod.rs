pub mod generator;
pub mod templates;
pub mod ui;
