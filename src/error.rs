use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The search entered the stepper more often than the configured budget allows.
    #[error("step budget of {limit} exhausted before the search finished")]
    BudgetExhausted { limit: u64 },
}
