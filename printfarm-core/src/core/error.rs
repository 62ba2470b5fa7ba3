//! Startup errors of the quote binary

use shared::error::AppError;
use thiserror::Error;

/// Failures of the `printfarm-quote` binary
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("usage: printfarm-quote <printTimeHours> <materialWeightOrLength> <quantity>")]
    Usage,

    #[error("invalid argument {name}: {value}")]
    InvalidArgument { name: &'static str, value: String },

    #[error(transparent)]
    App(#[from] AppError),

    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),
}
