//! SSTable component files
//! SSTable 组件文件

use std::{fmt, str::FromStr};

use crate::Error;

/// One file of an sstable
/// sstable 的一个文件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
  Data,
  Index,
  Summary,
  Filter,
  Statistics,
  CompressionInfo,
  Digest,
  Crc,
  Toc,
  Scylla,
}

impl Component {
  pub const ALL: [Self; 10] = [
    Self::Data,
    Self::Index,
    Self::Summary,
    Self::Filter,
    Self::Statistics,
    Self::CompressionInfo,
    Self::Digest,
    Self::Crc,
    Self::Toc,
    Self::Scylla,
  ];

  /// File name suffix
  /// 文件名后缀
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Data => "Data.db",
      Self::Index => "Index.db",
      Self::Summary => "Summary.db",
      Self::Filter => "Filter.db",
      Self::Statistics => "Statistics.db",
      Self::CompressionInfo => "CompressionInfo.db",
      Self::Digest => "Digest.crc32",
      Self::Crc => "CRC.db",
      Self::Toc => "TOC.txt",
      Self::Scylla => "Scylla.db",
    }
  }
}

impl fmt::Display for Component {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Component {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|c| c.as_str() == s)
      .ok_or_else(|| Error::Component(s.to_owned()))
  }
}
