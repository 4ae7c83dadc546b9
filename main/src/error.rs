use thiserror::Error;

use std::io;

#[derive(Debug, Error)]
pub enum Error {
	/// rejected by the duration guard. `total` is the summed length in seconds
	#[error("notes too long: {total:.2}s")]
	TooLong { total: f64 },

	#[error("syntax error: {0}")]
	Syntax(String),

	#[error("invalid config: {0}")]
	Config(String),

	#[error(transparent)]
	File(#[from] io::Error),

	#[error(transparent)]
	Json(#[from] serde_json::Error),
}

pub type OcarinaResult<T> = Result<T, Error>;

pub fn error<T>(err: Error) -> OcarinaResult<T> { Err(err) }
