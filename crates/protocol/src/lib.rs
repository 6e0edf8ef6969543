//! Wire types for the catalog admin API.
//!
//! This crate contains the serde-serializable types exchanged with the
//! admin backend over REST. These types represent the "protocol layer" -
//! the shapes of data as they appear on the wire.
//!
//! # Design Philosophy
//!
//! Types in this crate are:
//! * Pure data: No behavior beyond serialization/deserialization and
//!   closed-enum field access for localized text
//! * 1:1 with the backend: Field names match the API contract, including
//!   its mix of camelCase keys and snake_case localized keys
//! * Stable: Changes only when the wire contract changes
//!
//! Higher-level ergonomic APIs are built on top of these types in `shelf`.

pub mod admin;
pub mod auth;
pub mod catalog;
pub mod lang;
pub mod product;

pub use admin::*;
pub use auth::*;
pub use catalog::*;
pub use lang::*;
pub use product::*;
