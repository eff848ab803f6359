//! # auras-core
//!
//! Wire types shared by every AURAS crate.
//!
//! - Entity structs owned by the backend services (projects, tasks, sprints,
//!   report widgets) plus the client-local [`entities::ChatMessage`]
//! - Status enums with their snake_case wire names
//! - Request/response payloads for the auth, AI and reports endpoints
//! - [`ServiceKind`], naming the seven backends and their default addresses
//! - The cross-cutting [`errors::CoreError`]
//!
//! All field names are camelCase on the wire.

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod payloads;
pub mod service;

pub use errors::CoreError;
pub use service::ServiceKind;
