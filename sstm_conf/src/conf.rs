//! Node configuration options
//! 节点配置选项

use log::warn;

/// Node configuration options
/// 节点配置选项
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Conf {
  /// Column index granularity in KB
  /// 列索引粒度（KB）
  ColumnIndexSizeKb(u32),

  /// Assert ascending key order while writing
  /// 写入时校验键升序
  KeyValidation(bool),

  /// Summary-to-data size ratio, 0 means default sampling
  /// 摘要与数据大小比例，0 表示默认采样
  SummaryRatio(f64),

  /// Large partition warning threshold in MB
  /// 大分区告警阈值（MB）
  LargePartitionWarnMb(u32),

  /// Large row warning threshold in MB
  /// 大行告警阈值（MB）
  LargeRowWarnMb(u32),

  /// Large cell warning threshold in MB
  /// 大单元格告警阈值（MB）
  LargeCellWarnMb(u32),

  /// Rows-per-partition warning threshold
  /// 分区行数告警阈值
  RowsCountWarn(u64),
}

/// Resolved node configuration
/// 解析后的节点配置
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
  pub column_index_size_in_kb: u32,
  pub enable_sstable_key_validation: bool,
  pub sstable_summary_ratio: f64,
  pub compaction_large_partition_warning_threshold_mb: u32,
  pub compaction_large_row_warning_threshold_mb: u32,
  pub compaction_large_cell_warning_threshold_mb: u32,
  pub compaction_rows_count_warning_threshold: u64,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      column_index_size_in_kb: default::COLUMN_INDEX_SIZE_KB,
      enable_sstable_key_validation: default::KEY_VALIDATION,
      sstable_summary_ratio: default::SUMMARY_RATIO,
      compaction_large_partition_warning_threshold_mb: default::LARGE_PARTITION_WARN_MB,
      compaction_large_row_warning_threshold_mb: default::LARGE_ROW_WARN_MB,
      compaction_large_cell_warning_threshold_mb: default::LARGE_CELL_WARN_MB,
      compaction_rows_count_warning_threshold: default::ROWS_COUNT_WARN,
    }
  }
}

impl From<&[Conf]> for Config {
  fn from(conf_li: &[Conf]) -> Self {
    let mut config = Self::default();
    for &conf in conf_li {
      match conf {
        Conf::ColumnIndexSizeKb(v) => {
          if v == 0 {
            warn!("ColumnIndexSizeKb 0 is not supported, keep {}", config.column_index_size_in_kb);
          } else {
            config.column_index_size_in_kb = v;
          }
        }
        Conf::KeyValidation(v) => config.enable_sstable_key_validation = v,
        Conf::SummaryRatio(v) => {
          if v.is_finite() && (0.0..=1.0).contains(&v) {
            config.sstable_summary_ratio = v;
          } else {
            warn!("SummaryRatio {v} out of range (0-1), keep {}", config.sstable_summary_ratio);
          }
        }
        Conf::LargePartitionWarnMb(v) => {
          config.compaction_large_partition_warning_threshold_mb = v
        }
        Conf::LargeRowWarnMb(v) => config.compaction_large_row_warning_threshold_mb = v,
        Conf::LargeCellWarnMb(v) => config.compaction_large_cell_warning_threshold_mb = v,
        Conf::RowsCountWarn(v) => config.compaction_rows_count_warning_threshold = v,
      }
    }
    config
  }
}

impl<const N: usize> From<[Conf; N]> for Config {
  #[inline]
  fn from(conf_li: [Conf; N]) -> Self {
    Self::from(&conf_li[..])
  }
}

/// Default values
/// 默认值
pub mod default {
  /// Column index granularity (64KB)
  /// 列索引粒度（64KB）
  pub const COLUMN_INDEX_SIZE_KB: u32 = 64;

  /// Key validation is on for debug builds only
  /// 仅调试构建默认开启键校验
  pub const KEY_VALIDATION: bool = cfg!(debug_assertions);

  /// One summary byte per 2000 data bytes
  /// 每 2000 数据字节一个摘要字节
  pub const SUMMARY_RATIO: f64 = 0.0005;

  pub const LARGE_PARTITION_WARN_MB: u32 = 1000;
  pub const LARGE_ROW_WARN_MB: u32 = 10;
  pub const LARGE_CELL_WARN_MB: u32 = 1;
  pub const ROWS_COUNT_WARN: u64 = 100_000;
}
