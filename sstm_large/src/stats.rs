use std::sync::atomic::{AtomicU64, Ordering};

/// Recorded large value counters
/// 已记录的大值计数
#[derive(Debug, Default)]
pub struct Stats {
  pub partitions: AtomicU64,
  pub partitions_many_rows: AtomicU64,
  pub rows: AtomicU64,
  pub cells: AtomicU64,
}

impl Stats {
  #[inline]
  pub(crate) fn inc(counter: &AtomicU64) {
    counter.fetch_add(1, Ordering::Relaxed);
  }

  #[inline]
  pub fn partitions(&self) -> u64 {
    self.partitions.load(Ordering::Relaxed)
  }

  #[inline]
  pub fn partitions_many_rows(&self) -> u64 {
    self.partitions_many_rows.load(Ordering::Relaxed)
  }

  #[inline]
  pub fn rows(&self) -> u64 {
    self.rows.load(Ordering::Relaxed)
  }

  #[inline]
  pub fn cells(&self) -> u64 {
    self.cells.load(Ordering::Relaxed)
  }
}
