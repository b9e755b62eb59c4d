//! User persistence for the doorman auth service.
//!
//! The [`UserStore`] trait is the storage contract the auth core programs
//! against; [`JsonUserStore`] is the shipped file-backed implementation.
//! Swapping in a transactional backend means implementing the trait,
//! nothing more.

pub mod error;
pub mod json;
pub mod models;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use json::JsonUserStore;
pub use models::UserRecord;
pub use store::UserStore;
