use std::error::Error as StdError;

use linfit_core::DataError;

use crate::optimization::PredictionLengthError;

/// Errors that can occur during gradient descent.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid samples: {0}")]
    Data(#[from] DataError),

    #[error("model error: {0}")]
    Model(#[source] Box<dyn StdError + Send + Sync>),

    #[error(transparent)]
    PredictionLength(#[from] PredictionLengthError),
}

impl Error {
    pub(crate) fn model<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Model(Box::new(err))
    }
}
