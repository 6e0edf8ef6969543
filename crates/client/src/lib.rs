//! Typed async client for the shelf catalog admin API.
//!
//! The crate is organized around three cooperating pieces:
//!
//! * [`SessionManager`] - owns the bearer token and the identity derived
//!   from it, validates persisted sessions on startup, and is the only
//!   writer of token state (login, logout, forced invalidation).
//! * [`ApiClient`] - the REST surface. Attaches the current token to every
//!   authenticated request and classifies failures into [`ApiError`].
//! * [`SaveOrchestrator`] - sequences the multi-step product save
//!   (metadata upsert, concurrent media uploads, order persistence,
//!   refresh) while reconciling client-side temporary file identifiers
//!   with server-assigned ones.
//!
//! The [`CatalogApi`] trait sits between the orchestrator/session layer
//! and the HTTP transport so both can be exercised against an in-memory
//! backend in tests.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod save;
pub mod session;
pub mod store;
pub mod token;

pub use api::{ApiClient, CatalogApi, ImageUpload, routes};
pub use config::ClientConfig;
pub use error::{ApiError, Result};
pub use save::{
	CatalogSnapshot, FileCard, NewUpload, SaveError, SaveOrchestrator, SaveOutcome, SaveRequest,
	TempIdGen,
};
pub use session::{Session, SessionManager, SessionState};
pub use store::{SessionStore, SessionStoreFile};
pub use token::{TokenCell, decode_claims};

pub use shelf_protocol as protocol;
