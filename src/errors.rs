use thiserror::Error;

#[derive(Error, Debug)]
pub enum CostingError {
    #[error("contract start and end dates are required")]
    MissingContractDates,

    #[error("invalid rate table: {0}")]
    InvalidRateTable(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CostingError>;
