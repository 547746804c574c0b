//! Trivia Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits, pure services
//! - `application/` - Use cases, one per API operation
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Category listing and per-category question listing
//! - Paginated question listing (10 per page)
//! - Case-insensitive substring search over question text
//! - Question creation and deletion
//! - Random quiz question selection with seen-question exclusion
//!
//! ## Selection Model
//! - Quiz selection is memoryless: the caller resupplies the full list of
//!   already-seen question ids on every call, and the server keeps no
//!   session state
//! - Category id 0 is the wire sentinel for "all categories"

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{TriviaError, TriviaResult};
pub use infra::postgres::PgTriviaRepository;
pub use presentation::router::{trivia_router, trivia_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
