//! SSTable writer configuration
//! SSTable 写入配置

/// Summary byte cost when no summary ratio is configured
/// 未配置摘要比例时的摘要字节开销
pub const DEFAULT_SUMMARY_BYTE_COST: u64 = 2000;

/// Data bytes per summary byte for a summary-to-data ratio
/// 摘要数据比例对应的每摘要字节数据量
///
/// 0, negative or non-finite ratio falls back to [`DEFAULT_SUMMARY_BYTE_COST`].
/// 比例为 0、负数或非有限值时使用默认值。
#[inline]
pub fn summary_byte_cost(ratio: f64) -> u64 {
  if ratio > 0.0 && ratio.is_finite() {
    ((1.0 / ratio) as u64).max(1)
  } else {
    DEFAULT_SUMMARY_BYTE_COST
  }
}

/// Immutable parameters of one write session (flush or compaction)
/// 一次写入会话（刷盘或压缩）的不可变参数
///
/// Every field that changes on-disk layout is fixed when the value is built,
/// the writer never asks the feature gate again.
/// 所有影响磁盘布局的字段在构建时确定，写入器不会再次查询特性门控。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterConfig {
  promoted_index_block_size: u64,
  validate_keys: bool,
  summary_byte_cost: u64,
  correctly_serialize_non_compound_range_tombstones: bool,
  correctly_serialize_static_compact_in_mc: bool,
  max_sstable_size: u64,
  backup: bool,
  leave_unsealed: bool,
  sstable_level: Option<u8>,
}

impl WriterConfig {
  pub(crate) fn new(
    promoted_index_block_size: u64,
    validate_keys: bool,
    summary_byte_cost: u64,
    correctly_serialize_static_compact_in_mc: bool,
  ) -> Self {
    Self {
      promoted_index_block_size,
      validate_keys,
      summary_byte_cost,
      // Always true, the legacy encoding is never written
      // 恒为 true，不再写入旧编码
      // TODO: drop the field once no supported reader still decodes the legacy encoding
      correctly_serialize_non_compound_range_tombstones: true,
      correctly_serialize_static_compact_in_mc,
      max_sstable_size: u64::MAX,
      backup: false,
      leave_unsealed: false,
      sstable_level: None,
    }
  }

  /// Promoted index block size in bytes
  /// 提升索引块大小（字节）
  #[inline]
  pub fn promoted_index_block_size(&self) -> u64 {
    self.promoted_index_block_size
  }

  /// Fail loudly on out-of-order keys
  /// 键乱序时报错
  #[inline]
  pub fn validate_keys(&self) -> bool {
    self.validate_keys
  }

  #[inline]
  pub fn summary_byte_cost(&self) -> u64 {
    self.summary_byte_cost
  }

  #[inline]
  pub fn correctly_serialize_non_compound_range_tombstones(&self) -> bool {
    self.correctly_serialize_non_compound_range_tombstones
  }

  #[inline]
  pub fn correctly_serialize_static_compact_in_mc(&self) -> bool {
    self.correctly_serialize_static_compact_in_mc
  }

  #[inline]
  pub fn max_sstable_size(&self) -> u64 {
    self.max_sstable_size
  }

  #[inline]
  pub fn backup(&self) -> bool {
    self.backup
  }

  #[inline]
  pub fn leave_unsealed(&self) -> bool {
    self.leave_unsealed
  }

  #[inline]
  pub fn sstable_level(&self) -> Option<u8> {
    self.sstable_level
  }

  /// Split output once an sstable reaches this size
  /// sstable 达到该大小后切分输出
  #[inline]
  pub fn with_max_sstable_size(self, max_sstable_size: u64) -> Self {
    Self {
      max_sstable_size,
      ..self
    }
  }

  /// Hard-link sealed files into the backup directory
  /// 将封存的文件硬链接到备份目录
  #[inline]
  pub fn with_backup(self, backup: bool) -> Self {
    Self { backup, ..self }
  }

  /// Skip writing the TOC so the sstable stays unsealed
  /// 不写 TOC，使 sstable 保持未封存
  #[inline]
  pub fn with_leave_unsealed(self, leave_unsealed: bool) -> Self {
    Self {
      leave_unsealed,
      ..self
    }
  }

  #[inline]
  pub fn with_sstable_level(self, sstable_level: u8) -> Self {
    Self {
      sstable_level: Some(sstable_level),
      ..self
    }
  }
}
