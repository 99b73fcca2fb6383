//! The review console: a form, a gateway client, and the submit cycle
//! that connects them.

pub mod client;
pub mod render;
pub mod state;

pub use state::{FormState, Status, Submission, Theme};

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::warn;

use crate::events::{Event, EventBus};
use client::GatewayClient;

pub struct Console {
    form: FormState,
    client: Arc<dyn GatewayClient>,
    events: EventBus,
    reviews: usize,
}

impl Console {
    pub fn new(client: Arc<dyn GatewayClient>) -> Self {
        Self {
            form: FormState::new(),
            client,
            events: EventBus::default(),
            reviews: 0,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    /// Successful reviews this session.
    pub fn reviews(&self) -> usize {
        self.reviews
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.events.subscribe()
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.form.toggle_theme()
    }

    /// Run one submit cycle: validate, send a single request, then record
    /// feedback or the generic failure. Loading is cleared on both paths.
    pub async fn submit(&mut self) {
        let request = match self.form.begin_submit() {
            Submission::Ready(request) => request,
            Submission::Invalid | Submission::Busy => return,
        };

        self.events.emit(Event::SubmitStarted {
            language: request.language.clone(),
        });

        let outcome = self.client.request_review(&request).await;
        let success = outcome.is_ok();
        if let Err(e) = &outcome {
            warn!(error = ?e, "review request failed");
        } else {
            self.reviews += 1;
        }

        self.form.resolve(outcome);
        self.events.emit(Event::SubmitResolved { success });
    }
}
