//! I/O error translation policy handed to every sstable
//! 交给每个 sstable 的 I/O 错误转换策略

use std::{fmt, io, sync::Arc};

use log::error;

/// Kind of disk access that failed
/// 失败的磁盘访问类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiskError {
  Read,
  Write,
}

impl fmt::Display for DiskError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Read => "read",
      Self::Write => "write",
    })
  }
}

pub type IoErrorHandler = Arc<dyn Fn(&io::Error) + Send + Sync>;

/// Builds one handler per disk access kind
/// 为每种磁盘访问类型构建一个处理器
pub type IoErrorHandlerGen = Arc<dyn Fn(DiskError) -> IoErrorHandler + Send + Sync>;

/// Handlers that only log
/// 仅记录日志的处理器
pub fn default_io_error_handler_gen() -> IoErrorHandlerGen {
  Arc::new(|kind: DiskError| -> IoErrorHandler {
    Arc::new(move |e: &io::Error| error!("sstable {kind} error: {e}"))
  })
}
