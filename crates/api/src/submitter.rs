use crate::Submission;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("failed to serialize submission: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("submission rejected: {0}")]
    Rejected(String),
}

/// Receives the canvas contents when the user submits.
pub trait Submitter {
    fn submit(&self, submission: &Submission) -> Result<(), SubmitError>;
}

/// Writes each submission to the log as JSON.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSubmitter;

impl Submitter for LogSubmitter {
    fn submit(&self, submission: &Submission) -> Result<(), SubmitError> {
        let json = submission.to_json()?;
        log::info!("Submitted {} element(s):\n{}", submission.len(), json);
        Ok(())
    }
}

impl<F> Submitter for F
where
    F: Fn(&Submission) -> Result<(), SubmitError>,
{
    fn submit(&self, submission: &Submission) -> Result<(), SubmitError> {
        self(submission)
    }
}
