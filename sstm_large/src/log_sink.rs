//! Large data sink writing to the log
//! 写日志的大数据接收端

use log::warn;

use crate::{LargeData, Stats, Threshold};

/// Logs every value above its threshold and counts it
/// 记录并统计所有超过阈值的值
#[derive(Debug, Default)]
pub struct LogLargeData {
  threshold: Threshold,
  stats: Stats,
}

impl LogLargeData {
  pub fn new(threshold: Threshold) -> Self {
    Self {
      threshold,
      stats: Stats::default(),
    }
  }

  #[inline]
  pub fn threshold(&self) -> &Threshold {
    &self.threshold
  }

  #[inline]
  pub fn stats(&self) -> &Stats {
    &self.stats
  }
}

/// Printable key, lossy for non utf8
/// 可打印的键，非 utf8 有损
fn key_str(key: &[u8]) -> std::borrow::Cow<'_, str> {
  String::from_utf8_lossy(key)
}

impl LargeData for LogLargeData {
  fn maybe_record_large_partition(&self, sst: &str, key: &[u8], size: u64, rows: u64) -> bool {
    let mut recorded = false;
    if size > self.threshold.partition {
      Stats::inc(&self.stats.partitions);
      warn!(
        "large partition {} ({size} bytes) in {sst}",
        key_str(key)
      );
      recorded = true;
    }
    if rows > self.threshold.rows_count {
      Stats::inc(&self.stats.partitions_many_rows);
      warn!("large partition {} ({rows} rows) in {sst}", key_str(key));
      recorded = true;
    }
    recorded
  }

  fn maybe_record_large_row(&self, sst: &str, key: &[u8], size: u64) -> bool {
    if size <= self.threshold.row {
      return false;
    }
    Stats::inc(&self.stats.rows);
    warn!("large row in partition {} ({size} bytes) in {sst}", key_str(key));
    true
  }

  fn maybe_record_large_cell(&self, sst: &str, key: &[u8], column: &str, size: u64) -> bool {
    if size <= self.threshold.cell {
      return false;
    }
    Stats::inc(&self.stats.cells);
    warn!(
      "large cell {column} in partition {} ({size} bytes) in {sst}",
      key_str(key)
    );
    true
  }
}
