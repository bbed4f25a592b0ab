use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
  #[error("unknown feature: {0}")]
  Unknown(String),
}

pub type Result<T> = std::result::Result<T, Error>;
