use crate::relay::{ContactMessage, Relay};
use crate::state::State;
use anyhow::Result;
use log::*;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone)]
pub enum Event {
    SubmitContact(ContactMessage),
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    relay: &'a Relay,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, relay: &'a Relay) -> Self {
        Handler { state, relay }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event...");
        match event {
            Event::SubmitContact(message) => self.submit_contact(message).await?,
        }
        Ok(())
    }

    /// Post the message to the relay and record the outcome on the form.
    /// The state lock is not held while the request is in flight.
    ///
    async fn submit_contact(&mut self, message: ContactMessage) -> Result<()> {
        info!("Sending contact message...");
        let outcome = self.relay.submit(&message).await;
        let succeeded = outcome.is_ok();
        {
            let mut state = self.state.lock().await;
            state.finish_contact_submission(outcome, Instant::now());
        }
        if succeeded {
            info!("Contact message sent.");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FailureReason, StateSettings, SubmissionStatus};
    use crate::ui::Theme;
    use httpmock::MockServer;
    use serde_json::json;
    use std::sync::mpsc;
    use std::time::Duration;

    /// Fill the form as a visitor would and return the event it dispatches.
    async fn submit_ada(state: &Arc<Mutex<State>>, rx: &mpsc::Receiver<Event>) -> Event {
        let now = Instant::now();
        let mut state = state.lock().await;
        state.enter_form(now);
        for c in "Ada".chars() {
            state.add_form_char(c);
        }
        state.next_field();
        for c in "ada@example.com".chars() {
            state.add_form_char(c);
        }
        state.next_field();
        for c in "Hello".chars() {
            state.add_form_char(c);
        }
        state.submit_contact(now);
        assert_eq!(state.get_contact().status(), SubmissionStatus::Submitting);
        rx.try_recv().expect("submit should dispatch a network event")
    }

    fn new_state() -> (Arc<Mutex<State>>, mpsc::Receiver<Event>) {
        let (tx, rx) = mpsc::channel();
        let state = State::new(
            tx,
            StateSettings::default(),
            Theme::default(),
            Instant::now(),
        );
        (Arc::new(Mutex::new(state)), rx)
    }

    #[tokio::test]
    async fn successful_submission_clears_form() -> Result<()> {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/f/test").json_body(json!({
                    "name": "Ada",
                    "email": "ada@example.com",
                    "message": "Hello"
                }));
                then.status(200);
            })
            .await;

        let (state, rx) = new_state();
        let event = submit_ada(&state, &rx).await;
        let relay = Relay::new(&server.url("/f/test"));
        Handler::new(&state, &relay).handle(event).await?;
        mock.assert_hits_async(1).await;

        let mut state = state.lock().await;
        assert_eq!(state.get_contact().status(), SubmissionStatus::Succeeded);
        assert!(state.get_contact().name.is_empty());
        assert!(state.get_contact().email.is_empty());
        assert!(state.get_contact().message.is_empty());

        state.tick(Instant::now() + Duration::from_millis(3001));
        assert_eq!(state.get_contact().status(), SubmissionStatus::Idle);
        Ok(())
    }

    #[tokio::test]
    async fn rejected_submission_keeps_fields() -> Result<()> {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/f/test");
                then.status(500);
            })
            .await;

        let (state, rx) = new_state();
        let event = submit_ada(&state, &rx).await;
        let relay = Relay::new(&server.url("/f/test"));
        Handler::new(&state, &relay).handle(event).await?;
        mock.assert_hits_async(1).await;

        let state = state.lock().await;
        assert_eq!(
            state.get_contact().status(),
            SubmissionStatus::Failed(FailureReason::Network)
        );
        assert_eq!(state.get_contact().name, "Ada");
        assert_eq!(state.get_contact().email, "ada@example.com");
        assert_eq!(state.get_contact().message, "Hello");
        Ok(())
    }
}
