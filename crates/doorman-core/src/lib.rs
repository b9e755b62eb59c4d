//! Core authentication logic for the doorman service.
//!
//! This crate owns the pieces with real invariants: input validation
//! policy ([`validate`]), password hashing ([`password`]), signed access
//! tokens ([`token`]), and the orchestration that ties them to a user
//! store ([`service`]). HTTP plumbing lives in the `doorman-api` service;
//! persistence lives behind the `doorman-store` trait.

pub mod config;
pub mod error;
pub mod password;
pub mod service;
pub mod token;
pub mod validate;

pub use config::{AuthConfig, AuthConfigError};
pub use error::{AuthError, LoginError, SignupError};
pub use password::{CredentialHasher, HashError};
pub use service::{AuthService, Identity};
pub use token::{Claims, SigningError, TokenError, TokenService, TOKEN_TYPE_ACCESS};
pub use validate::{ValidationError, Validator};
