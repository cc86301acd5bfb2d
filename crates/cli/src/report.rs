//! User-facing messages.
//!
//! Commands never write to the terminal directly; they describe what happened
//! through a [`Reporter`].

use hydrogen_link_core::UserError;

/// Receives the messages a command shows to the user.
pub trait Reporter {
    /// Neutral information.
    fn info(&self, message: &str);

    /// A completed action, with suggested follow-up commands.
    fn success(&self, message: &str, next_steps: &[String]);

    /// Something the user should look at; the command stopped without changes.
    fn warn(&self, headline: &str, next_steps: &[String]);

    /// Validation errors returned by a remote mutation.
    fn user_errors(&self, headline: &str, errors: &[UserError]);

    /// A failure the user can only retry.
    fn error(&self, headline: &str, detail: &str);
}

/// [`Reporter`] that emits through `tracing`, which the binary routes to the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn success(&self, message: &str, next_steps: &[String]) {
        tracing::info!("{message}");
        if !next_steps.is_empty() {
            tracing::info!("Next steps:");
            for step in next_steps {
                tracing::info!("  • {step}");
            }
        }
    }

    fn warn(&self, headline: &str, next_steps: &[String]) {
        tracing::warn!("{headline}");
        for step in next_steps {
            tracing::warn!("  • {step}");
        }
    }

    fn user_errors(&self, headline: &str, errors: &[UserError]) {
        tracing::error!("{headline}");
        for error in errors {
            match &error.code {
                Some(code) => tracing::error!(code = %code, "  • {error}"),
                None => tracing::error!("  • {error}"),
            }
        }
    }

    fn error(&self, headline: &str, detail: &str) {
        tracing::error!("{headline}");
        tracing::error!("  {detail}");
    }
}
