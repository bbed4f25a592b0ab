use sstm_conf::NodeConf;

/// Large value thresholds, sizes in bytes
/// 大值阈值，大小单位为字节
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threshold {
  pub partition: u64,
  pub row: u64,
  pub cell: u64,
  pub rows_count: u64,
}

impl Threshold {
  pub fn from_conf(conf: &(impl NodeConf + ?Sized)) -> Self {
    Self {
      partition: conf.large_partition_threshold(),
      row: conf.large_row_threshold(),
      cell: conf.large_cell_threshold(),
      rows_count: conf.compaction_rows_count_warning_threshold(),
    }
  }
}

impl Default for Threshold {
  fn default() -> Self {
    Self::from_conf(&sstm_conf::Config::default())
  }
}
