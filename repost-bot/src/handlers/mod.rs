//! Handlers in chain order: logging, submission gate, onboarding (`/start`), delivery.

mod delivery;
mod logging;
mod start;
mod submission;

pub use delivery::{choose_post, DeliveryHandler};
pub use logging::LoggingHandler;
pub use start::{format_user_summary, StartHandler, WELCOME_REPLIES};
pub use submission::{SubmissionHandler, FILL_COMMAND};
