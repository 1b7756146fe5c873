use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

use tracing::debug;

use crate::client::TriviaBackend;
use crate::state::{LoadEvent, LoadRequest, Outcome, Ticket};

/// Run one ticket against the backend, blocking until it completes.
pub fn execute(backend: &dyn TriviaBackend, ticket: Ticket) -> LoadEvent {
    let result = match &ticket.request {
        LoadRequest::Page(page) => backend.questions(*page).map(Outcome::Listing),
        LoadRequest::Category(id) => backend.questions_by_category(*id).map(Outcome::Listing),
        LoadRequest::Search(term) => backend.search(term).map(Outcome::Listing),
        LoadRequest::Delete(id) => backend.delete_question(*id).map(|()| Outcome::Deleted),
    };
    let outcome = result.unwrap_or_else(Outcome::Failed);
    debug!(seq = ticket.seq, "request finished");
    LoadEvent { ticket, outcome }
}

/// Runs tickets on background threads and reports back over a channel.
#[derive(Clone)]
pub struct Loader {
    backend: Arc<dyn TriviaBackend>,
    tx: mpsc::Sender<LoadEvent>,
}

impl Loader {
    pub fn new(backend: Arc<dyn TriviaBackend>) -> (Self, mpsc::Receiver<LoadEvent>) {
        let (tx, rx) = mpsc::channel();
        (Self { backend, tx }, rx)
    }

    pub fn dispatch(&self, ticket: Ticket) {
        let backend = Arc::clone(&self.backend);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let event = execute(backend.as_ref(), ticket);
            let _ = tx.send(event);
        });
    }

    /// Dispatch if a ticket was issued.
    pub fn submit(&self, ticket: Option<Ticket>) {
        if let Some(ticket) = ticket {
            self.dispatch(ticket);
        }
    }
}
