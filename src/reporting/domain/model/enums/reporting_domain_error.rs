use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportingDomainError {
    #[error("recipient fetch failed: {0}")]
    RecipientFetchFailed(String),

    #[error("a weekly report run is already in progress")]
    RunAlreadyInProgress,
}
