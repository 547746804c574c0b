//! Presentation Layer
//!
//! HTTP handlers, DTOs, and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::TriviaAppState;
pub use router::{trivia_router, trivia_router_generic};
