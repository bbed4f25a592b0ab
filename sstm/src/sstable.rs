//! SSTable handle
//! SSTable 句柄

use std::{
  fmt, io,
  path::{Path, PathBuf},
  sync::Arc,
};

use sstm_large::LargeData;

use crate::{
  Component, Descriptor, DiskError, Format, GcTime, Generation, IoErrorHandler, IoErrorHandlerGen,
  Manager, SchemaPtr, Version, WriterConfig,
};

/// Shared sstable handle
/// 共享 sstable 句柄
pub type Shared<'m> = Arc<Sstable<'m>>;

/// One immutable on-disk table segment
/// 一个不可变的磁盘表段
pub struct Sstable<'m> {
  schema: SchemaPtr,
  desc: Descriptor,
  now: GcTime,
  read_error_handler: IoErrorHandler,
  write_error_handler: IoErrorHandler,
  buffer_size: usize,
  large_data: &'m dyn LargeData,
  manager: &'m Manager,
}

impl<'m> Sstable<'m> {
  pub(crate) fn new(
    schema: SchemaPtr,
    desc: Descriptor,
    now: GcTime,
    error_handler_gen: &IoErrorHandlerGen,
    buffer_size: usize,
    large_data: &'m dyn LargeData,
    manager: &'m Manager,
  ) -> Self {
    Self {
      schema,
      desc,
      now,
      read_error_handler: error_handler_gen(DiskError::Read),
      write_error_handler: error_handler_gen(DiskError::Write),
      buffer_size,
      large_data,
      manager,
    }
  }

  #[inline]
  pub fn schema(&self) -> &SchemaPtr {
    &self.schema
  }

  #[inline]
  pub fn desc(&self) -> &Descriptor {
    &self.desc
  }

  #[inline]
  pub fn dir(&self) -> &Path {
    &self.desc.dir
  }

  #[inline]
  pub fn generation(&self) -> Generation {
    self.desc.generation
  }

  #[inline]
  pub fn version(&self) -> Version {
    self.desc.version
  }

  #[inline]
  pub fn format(&self) -> Format {
    self.desc.format
  }

  /// GC clock time captured at creation, used for expiry
  /// 创建时捕获的 GC 时钟时间，用于过期计算
  #[inline]
  pub fn now(&self) -> GcTime {
    self.now
  }

  #[inline]
  pub fn buffer_size(&self) -> usize {
    self.buffer_size
  }

  #[inline]
  pub fn manager(&self) -> &'m Manager {
    self.manager
  }

  #[inline]
  pub fn large_data(&self) -> &'m dyn LargeData {
    self.large_data
  }

  /// Fresh writer configuration from the owning manager
  /// 从所属管理器获取新的写入配置
  #[inline]
  pub fn writer_config(&self) -> WriterConfig {
    self.manager.configure_writer()
  }

  pub fn filename(&self, component: Component) -> PathBuf {
    self
      .desc
      .filename(&self.schema.ks_name, &self.schema.cf_name, component)
  }

  #[inline]
  pub fn toc_filename(&self) -> PathBuf {
    self.filename(Component::Toc)
  }

  #[inline]
  pub fn on_read_error(&self, e: &io::Error) {
    (self.read_error_handler)(e)
  }

  #[inline]
  pub fn on_write_error(&self, e: &io::Error) {
    (self.write_error_handler)(e)
  }

  fn data_name(&self) -> String {
    self.filename(Component::Data).display().to_string()
  }

  pub fn maybe_record_large_partition(&self, key: &[u8], size: u64, rows: u64) -> bool {
    self
      .large_data
      .maybe_record_large_partition(&self.data_name(), key, size, rows)
  }

  pub fn maybe_record_large_row(&self, key: &[u8], size: u64) -> bool {
    self
      .large_data
      .maybe_record_large_row(&self.data_name(), key, size)
  }

  pub fn maybe_record_large_cell(&self, key: &[u8], column: &str, size: u64) -> bool {
    self
      .large_data
      .maybe_record_large_cell(&self.data_name(), key, column, size)
  }
}

impl fmt::Debug for Sstable<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Sstable")
      .field("schema", &self.schema)
      .field("desc", &self.desc)
      .field("now", &self.now)
      .field("buffer_size", &self.buffer_size)
      .finish_non_exhaustive()
  }
}
