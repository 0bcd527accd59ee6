use inpaint_types::{GeneratedImage, GenerationError};
use tokio::sync::watch;

use super::state::{GenerationTicket, Session, SessionError};

/// Owner of the current [`Session`] snapshot.
///
/// Every transition replaces the snapshot wholesale and notifies subscribers.
pub struct SessionStore {
    tx: watch::Sender<Session>,
}

impl SessionStore {
    pub fn new(initial: Session) -> Self {
        let (tx, _) = watch::channel(initial);
        Self { tx }
    }

    /// Receiver that observes every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.tx.subscribe()
    }

    /// Clone of the latest snapshot.
    pub fn snapshot(&self) -> Session {
        self.tx.borrow().clone()
    }

    /// Apply a transition and publish the result.
    pub fn update(&self, transition: impl FnOnce(Session) -> Session) {
        self.tx.send_modify(|session| {
            let current = session.clone();
            *session = transition(current);
        });
    }

    /// Start a generation, or publish the reason it cannot start.
    pub fn begin_generation(&self) -> Result<GenerationTicket, SessionError> {
        let mut outcome = Err(SessionError::NoImage);
        self.tx.send_modify(|session| match session.begin_generation() {
            Ok((next, ticket)) => {
                *session = next;
                outcome = Ok(ticket);
            }
            Err(e) => {
                *session = session.clone().with_error(e.to_string());
                outcome = Err(e);
            }
        });
        outcome
    }

    pub fn finish_generation(
        &self,
        ticket: &GenerationTicket,
        result: Result<GeneratedImage, GenerationError>,
    ) {
        self.update(|session| session.finish_generation(ticket, result));
    }
}
