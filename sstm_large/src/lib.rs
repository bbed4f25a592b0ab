#![cfg_attr(docsrs, feature(doc_cfg))]

//! Large partition / row / cell reporting
//! 大分区 / 行 / 单元格上报

mod log_sink;
mod stats;
mod threshold;

pub use log_sink::LogLargeData;
pub use stats::Stats;
pub use threshold::Threshold;

/// Sink for oversized values met while writing an sstable
/// 写 sstable 时遇到的超大值的接收端
///
/// Every hook returns true if the value crossed its threshold and was recorded.
/// 每个回调在值超过阈值并被记录时返回 true。
pub trait LargeData: Send + Sync {
  fn maybe_record_large_partition(&self, sst: &str, key: &[u8], size: u64, rows: u64) -> bool;

  fn maybe_record_large_row(&self, sst: &str, key: &[u8], size: u64) -> bool;

  fn maybe_record_large_cell(&self, sst: &str, key: &[u8], column: &str, size: u64) -> bool;
}

/// Sink that never records
/// 从不记录的接收端
#[derive(Debug, Default, Clone, Copy)]
pub struct NopLargeData;

impl LargeData for NopLargeData {
  #[inline]
  fn maybe_record_large_partition(&self, _: &str, _: &[u8], _: u64, _: u64) -> bool {
    false
  }

  #[inline]
  fn maybe_record_large_row(&self, _: &str, _: &[u8], _: u64) -> bool {
    false
  }

  #[inline]
  fn maybe_record_large_cell(&self, _: &str, _: &[u8], _: &str, _: u64) -> bool {
    false
  }
}
