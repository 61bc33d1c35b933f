//! Domain logic for the QA release desk.
//!
//! Pure business rules with no I/O: status vocabularies, item kinds,
//! platform routing, carry-forward filtering, the completion gate, and
//! chat message formatting. The `db` and `api` crates build on these.

pub mod carry_forward;
pub mod completion;
pub mod error;
pub mod kind;
pub mod message;
pub mod platform;
pub mod status;
pub mod types;
