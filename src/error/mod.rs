use thiserror::Error;

use crate::reference::CurveError;

#[derive(Error, Debug)]
pub enum NutrisolError {
    #[error("Reference curve error: {0}")]
    CurveError(#[from] CurveError),
}
