pub mod config;
pub use config::Config;

pub mod data;
pub use data::AppData;

pub mod logging;
