//! Feature names
//! 特性名称

use std::{fmt, str::FromStr};

use crate::Error;

/// Cluster feature affecting sstable encoding
/// 影响 sstable 编码的集群特性
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
  McSstableFormat = 0,
  UnboundedRangeTombstones = 1,
  CorrectNonCompoundRangeTombstones = 2,
  /// Static-compact tables encoded correctly in the mc format
  /// mc 格式下正确编码 static compact 表
  CorrectStaticCompactInMc = 3,
}

impl Feature {
  pub const LEN: usize = 4;

  pub const ALL: [Self; Self::LEN] = [
    Self::McSstableFormat,
    Self::UnboundedRangeTombstones,
    Self::CorrectNonCompoundRangeTombstones,
    Self::CorrectStaticCompactInMc,
  ];

  /// Stable name exchanged between nodes
  /// 节点间交换的稳定名称
  pub const fn name(self) -> &'static str {
    match self {
      Self::McSstableFormat => "MC_SSTABLE_FORMAT",
      Self::UnboundedRangeTombstones => "UNBOUNDED_RANGE_TOMBSTONES",
      Self::CorrectNonCompoundRangeTombstones => "CORRECT_NON_COMPOUND_RANGE_TOMBSTONES",
      Self::CorrectStaticCompactInMc => "CORRECT_STATIC_COMPACT_IN_MC",
    }
  }

  #[inline]
  pub const fn idx(self) -> usize {
    self as usize
  }
}

impl fmt::Display for Feature {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for Feature {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|f| f.name() == s)
      .ok_or_else(|| Error::Unknown(s.to_owned()))
  }
}
