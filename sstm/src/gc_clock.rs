use std::fmt;

/// Garbage-collection clock time point, seconds since epoch
/// 垃圾回收时钟时间点，自纪元起的秒数
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct GcTime(pub u64);

impl GcTime {
  #[inline]
  pub const fn new(secs: u64) -> Self {
    Self(secs)
  }

  /// Current time (coarse, ~10ns)
  /// 当前时间（粗粒度，约 10ns）
  #[inline]
  pub fn now() -> Self {
    Self(coarsetime::Clock::now_since_epoch().as_secs())
  }

  #[inline]
  pub const fn secs(self) -> u64 {
    self.0
  }

  /// Whether a deletion time is already in the past
  /// 删除时间是否已过
  #[inline]
  pub const fn is_expired(self, deletion: GcTime) -> bool {
    deletion.0 <= self.0
  }
}

impl fmt::Display for GcTime {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}
