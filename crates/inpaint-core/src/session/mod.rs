//! Session state.
//!
//! A [`Session`] is an immutable snapshot of everything the user has chosen so
//! far. Each transition consumes the snapshot and returns the next one, and
//! [`SessionStore`] publishes the latest snapshot to observers.

mod state;
mod store;


pub use state::{GenerationTicket, Session, SessionError, Stage};
pub use store::SessionStore;
