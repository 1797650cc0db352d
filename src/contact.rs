//! Contact form submission through a third-party mail relay.

use async_trait::async_trait;
use log::{info, warn};
use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_SERVICE_ID: &str = "service_oxr3ocp";
pub const DEFAULT_TEMPLATE_ID: &str = "template_z7n3rih";
pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const SUCCESS_MESSAGE: &str = "✅ Thank you! Your message has been sent.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{text}")]
pub struct RelayError {
    pub status: Option<u16>,
    pub text: String,
}

impl RelayError {
    pub fn new(status: Option<u16>, text: impl Into<String>) -> Self {
        Self {
            status,
            text: text.into(),
        }
    }
}

pub fn failure_message(error: &RelayError) -> String {
    format!("❌ Oops, something went wrong: {}", error.text)
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn is_blank(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|field| field.trim().is_empty())
    }
}

/// Request body of the EmailJS `email/send` endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct RelayRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a ContactForm,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayTarget {
    pub service_id: String,
    pub template_id: String,
}

impl Default for RelayTarget {
    fn default() -> Self {
        Self {
            service_id: DEFAULT_SERVICE_ID.to_string(),
            template_id: DEFAULT_TEMPLATE_ID.to_string(),
        }
    }
}

#[async_trait(?Send)]
pub trait MailRelay {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        form: &ContactForm,
    ) -> Result<(), RelayError>;
}

/// UI side effects of a submission.
pub trait FormView {
    fn set_loading(&self, loading: bool);
    fn acknowledge(&self, message: &str);
    fn reset_fields(&self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Failed,
}

pub struct ContactFormSubmitter<R> {
    relay: R,
    target: RelayTarget,
}

impl<R: MailRelay> ContactFormSubmitter<R> {
    pub fn new(relay: R, target: RelayTarget) -> Self {
        Self { relay, target }
    }

    pub async fn submit<V: FormView>(&self, form: &ContactForm, view: &V) -> SubmitOutcome {
        view.set_loading(true);
        info!("contact form sending via {}", self.target.service_id);

        let outcome = match self
            .relay
            .send(&self.target.service_id, &self.target.template_id, form)
            .await
        {
            Ok(()) => {
                view.acknowledge(SUCCESS_MESSAGE);
                view.reset_fields();
                SubmitOutcome::Sent
            }
            Err(error) => {
                warn!("contact form relay failed (status {:?}): {error}", error.status);
                view.acknowledge(&failure_message(&error));
                SubmitOutcome::Failed
            }
        };

        view.set_loading(false);
        outcome
    }
}
