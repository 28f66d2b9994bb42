//! Client for the MangaDex REST API, plus the chapter grouping used to lay
//! out a manga's chapter list.

mod error;
pub use error::{ApiError, MangaDexError as Error};

mod client;
pub use client::{MangaDex, API_URL, UPLOADS_URL};

mod at_home;
pub use at_home::{AtHome, Quality};

pub mod chapters;
pub mod cover;
pub mod model;
pub mod query;

pub type Result<T, E = Error> = std::result::Result<T, E>;
