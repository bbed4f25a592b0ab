//! Error types for sstm
//! sstm 错误类型定义

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
  #[error("unknown sstable version: {0}")]
  Version(String),

  #[error("unknown sstable format: {0}")]
  Format(String),

  #[error("unknown sstable component: {0}")]
  Component(String),

  #[error("invalid sstable filename: {0}")]
  Filename(String),
}

pub type Result<T> = std::result::Result<T, Error>;
