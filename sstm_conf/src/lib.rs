#![cfg_attr(docsrs, feature(doc_cfg))]

//! Node configuration for the sstable manager
//! sstable 管理器的节点配置

mod conf;
mod read;

pub use conf::{Conf, Config, default};
pub use read::NodeConf;

/// Kilobyte
/// 千字节
pub const KB: u64 = 1024;

/// Megabyte
/// 兆字节
pub const MB: u64 = 1024 * KB;
