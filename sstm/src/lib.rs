#![cfg_attr(docsrs, feature(doc_cfg))]

//! sstm - sstable manager
//! sstable 管理器
//!
//! Mints sstable handles and turns node configuration plus cluster feature
//! state into the writer configuration used by flush and compaction.
//! 创建 sstable 句柄，并将节点配置与集群特性状态转换为刷盘和压缩使用的写入配置。

mod component;
mod desc;
pub mod error;
mod gc_clock;
mod io_err;
mod manager;
mod schema;
mod sstable;
mod version;
mod writer_conf;

pub use component::Component;
pub use desc::{Descriptor, Generation};
pub use error::{Error, Result};
pub use gc_clock::GcTime;
pub use io_err::{DiskError, IoErrorHandler, IoErrorHandlerGen, default_io_error_handler_gen};
pub use manager::Manager;
pub use schema::{Schema, SchemaPtr};
pub use sstable::{Shared, Sstable};
pub use version::{Format, Version};
pub use writer_conf::{DEFAULT_SUMMARY_BYTE_COST, WriterConfig, summary_byte_cost};

/// Default I/O buffer size (128KB)
/// 默认 I/O 缓冲区大小（128KB）
pub const DEFAULT_BUFFER_SIZE: usize = 128 * 1024;
