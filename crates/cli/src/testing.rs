//! Scripted collaborators for exercising commands without a terminal or network.

#![allow(clippy::unwrap_used)]

use std::collections::VecDeque;
use std::sync::Mutex;

use hydrogen_link_admin::AdminShopifyError;
use hydrogen_link_core::{JobId, Storefront, StorefrontCreation, StorefrontId, UserError};

use crate::api::StorefrontApi;
use crate::prompt::{Choice, PromptError, Prompter};
use crate::report::Reporter;

/// Build a storefront with a deterministic ID.
#[must_use]
pub fn storefront(n: u32, title: &str) -> Storefront {
    Storefront {
        id: StorefrontId::new(format!("gid://shopify/HydrogenStorefront/{n}")),
        title: title.to_string(),
        production_url: Some(format!("https://{}.myshopify.dev", title.to_lowercase())),
    }
}

/// In-memory [`StorefrontApi`] that records every call.
#[derive(Debug, Default)]
pub struct FakeStorefrontApi {
    pub storefronts: Vec<Storefront>,
    pub creation: Mutex<Option<StorefrontCreation>>,
    pub job_error: Mutex<Option<AdminShopifyError>>,
    pub created_titles: Mutex<Vec<String>>,
    pub waited_jobs: Mutex<Vec<JobId>>,
    fetch_count: Mutex<usize>,
}

impl FakeStorefrontApi {
    #[must_use]
    pub fn with_storefronts(storefronts: Vec<Storefront>) -> Self {
        Self {
            storefronts,
            ..Self::default()
        }
    }

    /// Respond to the next creation request with `creation`.
    #[must_use]
    pub fn on_create(self, creation: StorefrontCreation) -> Self {
        *self.creation.lock().unwrap() = Some(creation);
        self
    }

    /// Fail the next job wait with `error`.
    #[must_use]
    pub fn failing_job(self, error: AdminShopifyError) -> Self {
        *self.job_error.lock().unwrap() = Some(error);
        self
    }

    #[must_use]
    pub fn created_titles(&self) -> Vec<String> {
        self.created_titles.lock().unwrap().clone()
    }

    #[must_use]
    pub fn waited_jobs(&self) -> Vec<JobId> {
        self.waited_jobs.lock().unwrap().clone()
    }

    /// Number of times the storefront list was fetched.
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        *self.fetch_count.lock().unwrap()
    }
}

impl StorefrontApi for FakeStorefrontApi {
    async fn fetch_storefronts(&self) -> Result<Vec<Storefront>, AdminShopifyError> {
        *self.fetch_count.lock().unwrap() += 1;
        Ok(self.storefronts.clone())
    }

    async fn create_storefront(
        &self,
        title: &str,
    ) -> Result<StorefrontCreation, AdminShopifyError> {
        self.created_titles.lock().unwrap().push(title.to_string());
        self.creation
            .lock()
            .unwrap()
            .take()
            .ok_or_else(|| AdminShopifyError::NotFound("no scripted creation".to_string()))
    }

    async fn wait_for_job(&self, job_id: &JobId) -> Result<(), AdminShopifyError> {
        self.waited_jobs.lock().unwrap().push(job_id.clone());
        self.job_error.lock().unwrap().take().map_or(Ok(()), Err)
    }
}

/// A prompt that was shown, as seen by [`ScriptedPrompter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptCall {
    Confirm { message: String, default: bool },
    Select { message: String, choices: Vec<Choice> },
    Text { message: String, default: String },
}

/// [`Prompter`] that answers from queued responses.
///
/// Running out of answers for a prompt kind fails like a non-interactive terminal.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    confirms: Mutex<VecDeque<bool>>,
    selections: Mutex<VecDeque<Option<String>>>,
    texts: Mutex<VecDeque<String>>,
    calls: Mutex<Vec<PromptCall>>,
}

impl ScriptedPrompter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn confirm_with(self, answer: bool) -> Self {
        self.confirms.lock().unwrap().push_back(answer);
        self
    }

    #[must_use]
    pub fn select_with(self, value: Option<&str>) -> Self {
        self.selections
            .lock()
            .unwrap()
            .push_back(value.map(String::from));
        self
    }

    /// Answer a text prompt with `answer`; an empty answer accepts the default.
    #[must_use]
    pub fn text_with(self, answer: &str) -> Self {
        self.texts.lock().unwrap().push_back(answer.to_string());
        self
    }

    #[must_use]
    pub fn calls(&self) -> Vec<PromptCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, message: &str, default: bool) -> Result<bool, PromptError> {
        self.calls.lock().unwrap().push(PromptCall::Confirm {
            message: message.to_string(),
            default,
        });
        self.confirms
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| PromptError::NotInteractive(message.to_string()))
    }

    fn select(&self, message: &str, choices: &[Choice]) -> Result<Option<String>, PromptError> {
        self.calls.lock().unwrap().push(PromptCall::Select {
            message: message.to_string(),
            choices: choices.to_vec(),
        });
        self.selections
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| PromptError::NotInteractive(message.to_string()))
    }

    fn text(&self, message: &str, default: &str) -> Result<String, PromptError> {
        self.calls.lock().unwrap().push(PromptCall::Text {
            message: message.to_string(),
            default: default.to_string(),
        });
        let answer = self
            .texts
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| PromptError::NotInteractive(message.to_string()))?;
        Ok(if answer.is_empty() {
            default.to_string()
        } else {
            answer
        })
    }
}

/// A message captured by [`RecordingReporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Info(String),
    Success {
        message: String,
        next_steps: Vec<String>,
    },
    Warn {
        headline: String,
        next_steps: Vec<String>,
    },
    UserErrors {
        headline: String,
        errors: Vec<UserError>,
    },
    Error {
        headline: String,
        detail: String,
    },
}

/// [`Reporter`] that keeps every message for assertions.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    reports: Mutex<Vec<Report>>,
}

impl RecordingReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn reports(&self) -> Vec<Report> {
        self.reports.lock().unwrap().clone()
    }

    fn push(&self, report: Report) {
        self.reports.lock().unwrap().push(report);
    }
}

impl Reporter for RecordingReporter {
    fn info(&self, message: &str) {
        self.push(Report::Info(message.to_string()));
    }

    fn success(&self, message: &str, next_steps: &[String]) {
        self.push(Report::Success {
            message: message.to_string(),
            next_steps: next_steps.to_vec(),
        });
    }

    fn warn(&self, headline: &str, next_steps: &[String]) {
        self.push(Report::Warn {
            headline: headline.to_string(),
            next_steps: next_steps.to_vec(),
        });
    }

    fn user_errors(&self, headline: &str, errors: &[UserError]) {
        self.push(Report::UserErrors {
            headline: headline.to_string(),
            errors: errors.to_vec(),
        });
    }

    fn error(&self, headline: &str, detail: &str) {
        self.push(Report::Error {
            headline: headline.to_string(),
            detail: detail.to_string(),
        });
    }
}
