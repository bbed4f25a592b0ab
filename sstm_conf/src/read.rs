//! Read-only view of node configuration
//! 节点配置只读视图

use crate::{Config, MB};

/// Read-only node configuration, shared by every writer session
/// 只读节点配置，所有写入会话共享
pub trait NodeConf: Send + Sync {
  fn column_index_size_in_kb(&self) -> u32;

  fn enable_sstable_key_validation(&self) -> bool;

  fn sstable_summary_ratio(&self) -> f64;

  fn compaction_large_partition_warning_threshold_mb(&self) -> u32;

  fn compaction_large_row_warning_threshold_mb(&self) -> u32;

  fn compaction_large_cell_warning_threshold_mb(&self) -> u32;

  fn compaction_rows_count_warning_threshold(&self) -> u64;

  /// Large partition threshold in bytes
  /// 大分区阈值（字节）
  #[inline]
  fn large_partition_threshold(&self) -> u64 {
    self.compaction_large_partition_warning_threshold_mb() as u64 * MB
  }

  /// Large row threshold in bytes
  /// 大行阈值（字节）
  #[inline]
  fn large_row_threshold(&self) -> u64 {
    self.compaction_large_row_warning_threshold_mb() as u64 * MB
  }

  /// Large cell threshold in bytes
  /// 大单元格阈值（字节）
  #[inline]
  fn large_cell_threshold(&self) -> u64 {
    self.compaction_large_cell_warning_threshold_mb() as u64 * MB
  }
}

impl NodeConf for Config {
  #[inline]
  fn column_index_size_in_kb(&self) -> u32 {
    self.column_index_size_in_kb
  }

  #[inline]
  fn enable_sstable_key_validation(&self) -> bool {
    self.enable_sstable_key_validation
  }

  #[inline]
  fn sstable_summary_ratio(&self) -> f64 {
    self.sstable_summary_ratio
  }

  #[inline]
  fn compaction_large_partition_warning_threshold_mb(&self) -> u32 {
    self.compaction_large_partition_warning_threshold_mb
  }

  #[inline]
  fn compaction_large_row_warning_threshold_mb(&self) -> u32 {
    self.compaction_large_row_warning_threshold_mb
  }

  #[inline]
  fn compaction_large_cell_warning_threshold_mb(&self) -> u32 {
    self.compaction_large_cell_warning_threshold_mb
  }

  #[inline]
  fn compaction_rows_count_warning_threshold(&self) -> u64 {
    self.compaction_rows_count_warning_threshold
  }
}
