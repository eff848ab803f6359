//! Turns session events into user-facing notices.

use auras_session::{Session, SessionEvent};
use tokio::sync::broadcast::Receiver;
use tokio::sync::broadcast::error::TryRecvError;

/// Collects session events raised while a command runs.
pub struct SessionNotices {
    events: Receiver<SessionEvent>,
}

impl SessionNotices {
    pub fn subscribe(session: &Session) -> Self {
        Self {
            events: session.subscribe(),
        }
    }

    /// Drain pending events and return the notices worth showing.
    pub fn drain(&mut self) -> Vec<String> {
        let mut notices = Vec::new();
        loop {
            match self.events.try_recv() {
                Ok(event) => notices.extend(notice_for(&event)),
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "session notices lagged");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
        notices
    }

    /// Print pending notices to stderr.
    pub fn report(&mut self) {
        for notice in self.drain() {
            eprintln!("{notice}");
        }
    }
}

fn notice_for(event: &SessionEvent) -> Option<String> {
    match event {
        SessionEvent::Invalidated { service, .. } => Some(format!(
            "auras: the {service} service rejected your session; run `auras auth login` to sign in again"
        )),
        SessionEvent::Established { .. } | SessionEvent::Cleared { .. } => None,
    }
}
