//! Business logic services.
//!
//! - [`auth`] - Password hashing, registration, and login
//! - [`token`] - Bearer token issuance and verification
//! - [`dashboard`] - In-process aggregation over the product collection
//! - [`seed`] - Demo catalog seeding

pub mod auth;
pub mod dashboard;
pub mod seed;
pub mod token;

pub use auth::{AuthError, AuthService};
pub use token::{TokenError, TokenService};
