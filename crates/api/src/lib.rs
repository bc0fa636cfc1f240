//! Easel API - the submit boundary.
//!
//! On submit, the full ordered element list is handed to a [`Submitter`].
//! What the submitter does with it (publish, store, forward) is its own
//! business; the bundled [`LogSubmitter`] writes the JSON to the log.
//!
//! # Example
//! ```ignore
//! use api::{LogSubmitter, Submission, Submitter};
//!
//! let submission = Submission::new(canvas.read(cx).elements());
//! LogSubmitter.submit(&submission)?;
//! ```

mod submission;
mod submitter;

pub use submission::Submission;
pub use submitter::{LogSubmitter, SubmitError, Submitter};
