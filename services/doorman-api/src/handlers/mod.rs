//! REST API and page handlers

pub mod auth;
pub mod health;
pub mod pages;
pub mod profile;

pub use auth::*;
pub use health::*;
pub use pages::*;
pub use profile::*;
