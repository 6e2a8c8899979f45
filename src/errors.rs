use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
	#[error("bad request: {0}")]
	BadRequest(String),
	#[error(transparent)]
	Http(#[from] reqwest::Error),
}

pub type AppResult<T> = Result<T, AppError>;
