//! SSTable manager
//! SSTable 管理器

use std::{fmt, path::PathBuf, sync::Arc};

use log::{debug, trace};
use sstm_conf::{KB, NodeConf};
use sstm_feature::FeatureQuery;
use sstm_large::LargeData;

use crate::{
  Descriptor, Format, GcTime, Generation, IoErrorHandlerGen, SchemaPtr, Shared, Sstable, Version,
  WriterConfig, summary_byte_cost,
};

/// Creates sstable handles and writer configuration for one node
/// 为节点创建 sstable 句柄与写入配置
///
/// Dependencies are fixed at construction and only read afterwards, so the
/// manager is shared by concurrent writers without locking. Handles borrow
/// the manager, it must outlive all of them.
/// 依赖在构造时固定且之后只读，并发写入者无需加锁即可共享。句柄借用管理器，管理器必须比所有句柄活得久。
pub struct Manager {
  large_data: Arc<dyn LargeData>,
  conf: Arc<dyn NodeConf>,
  feature: Arc<dyn FeatureQuery>,
}

impl Manager {
  pub fn new(
    large_data: Arc<dyn LargeData>,
    conf: Arc<dyn NodeConf>,
    feature: Arc<dyn FeatureQuery>,
  ) -> Self {
    Self {
      large_data,
      conf,
      feature,
    }
  }

  /// Create a new sstable handle, no I/O
  /// 创建新的 sstable 句柄，不做 I/O
  ///
  /// `now` must be the current gc clock time, generation uniqueness within
  /// `dir` is the caller's contract.
  /// `now` 必须是当前 gc 时钟时间，目录内 generation 唯一由调用方保证。
  pub fn make_sstable(
    &self,
    schema: SchemaPtr,
    dir: impl Into<PathBuf>,
    generation: Generation,
    version: Version,
    format: Format,
    now: GcTime,
    error_handler_gen: IoErrorHandlerGen,
    buffer_size: usize,
  ) -> Shared<'_> {
    let desc = Descriptor::new(dir, generation, version, format);
    debug!(
      "make sstable {}.{} {version}-{generation}-{format} in {}",
      schema.ks_name,
      schema.cf_name,
      desc.dir.display()
    );
    Arc::new(Sstable::new(
      schema,
      desc,
      now,
      &error_handler_gen,
      buffer_size,
      &*self.large_data,
      self,
    ))
  }

  /// Build writer configuration from node config and current feature state
  /// 根据节点配置与当前特性状态构建写入配置
  ///
  /// Never cached, a feature enabled by a finished rolling upgrade applies to
  /// the next write session.
  /// 不缓存，滚动升级完成后启用的特性在下一次写入会话生效。
  pub fn configure_writer(&self) -> WriterConfig {
    let conf = &*self.conf;
    let cfg = WriterConfig::new(
      conf.column_index_size_in_kb() as u64 * KB,
      conf.enable_sstable_key_validation(),
      summary_byte_cost(conf.sstable_summary_ratio()),
      self.feature.cluster_supports_correct_static_compact_in_mc(),
    );
    trace!("configure writer {cfg:?}");
    cfg
  }

  /// Reporter forwarded to every handle
  /// 转发给每个句柄的上报器
  #[inline]
  pub fn large_data(&self) -> &dyn LargeData {
    &*self.large_data
  }
}

impl fmt::Debug for Manager {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Manager").finish_non_exhaustive()
  }
}
