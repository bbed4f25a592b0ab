//! On-disk dialect and container format
//! 磁盘编码方言与容器格式

use std::{fmt, str::FromStr};

use crate::Error;

/// SSTable encoding dialect
/// SSTable 编码方言
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Version {
  Ka = 0,
  La = 1,
  #[default]
  Mc = 2,
}

impl Version {
  pub const ALL: [Self; 3] = [Self::Ka, Self::La, Self::Mc];

  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Ka => "ka",
      Self::La => "la",
      Self::Mc => "mc",
    }
  }
}

/// SSTable container format
/// SSTable 容器格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
  #[default]
  Big,
}

impl Format {
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Big => "big",
    }
  }
}

impl fmt::Display for Version {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl fmt::Display for Format {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Version {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|v| v.as_str() == s)
      .ok_or_else(|| Error::Version(s.to_owned()))
  }
}

impl FromStr for Format {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "big" => Ok(Self::Big),
      _ => Err(Error::Format(s.to_owned())),
    }
  }
}
