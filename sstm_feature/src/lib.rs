#![cfg_attr(docsrs, feature(doc_cfg))]

//! Cluster feature gate
//! 集群特性门控
//!
//! Features are negotiated across the cluster during rolling upgrade.
//! Once every node supports a feature it is enabled and never disabled again.
//! 特性在滚动升级期间由集群协商。所有节点都支持后启用，之后不再关闭。

pub mod error;
mod feature;
mod gate;

pub use error::{Error, Result};
pub use feature::Feature;
pub use gate::Gate;

/// Synchronous feature query, answered from already-resolved state
/// 同步特性查询，基于已解析的状态应答
pub trait FeatureQuery: Send + Sync {
  fn is_enabled(&self, feature: Feature) -> bool;

  #[inline]
  fn cluster_supports_correct_static_compact_in_mc(&self) -> bool {
    self.is_enabled(Feature::CorrectStaticCompactInMc)
  }
}
