pub mod config;
pub mod logging;

pub mod assets;
pub mod catalog;
pub mod normalize;
pub mod portfolio;
