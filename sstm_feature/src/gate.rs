//! Feature registry
//! 特性注册表

use std::sync::atomic::{AtomicBool, Ordering};

use log::{info, warn};

use crate::{Feature, FeatureQuery};

/// Process-wide set of negotiated features, one flag per feature
/// 进程级已协商特性集合，每个特性一个标志
#[derive(Debug)]
pub struct Gate {
  enabled: [AtomicBool; Feature::LEN],
}

impl Default for Gate {
  fn default() -> Self {
    Self {
      enabled: std::array::from_fn(|_| AtomicBool::new(false)),
    }
  }
}

impl Gate {
  #[inline]
  pub fn new() -> Self {
    Self::default()
  }

  /// Enable feature, returns true if it was not enabled before
  /// 启用特性，此前未启用则返回 true
  pub fn enable(&self, feature: Feature) -> bool {
    let newly = !self.enabled[feature.idx()].swap(true, Ordering::AcqRel);
    if newly {
      info!("feature {feature} enabled");
    }
    newly
  }

  /// Enable every known name in a comma-separated feature list
  /// 启用逗号分隔特性列表中的所有已知名称
  ///
  /// Returns the number of newly enabled features.
  /// 返回新启用的特性数量。
  pub fn enable_set(&self, li: &str) -> usize {
    let mut n = 0;
    for name in li.split(',').map(str::trim).filter(|s| !s.is_empty()) {
      match name.parse::<Feature>() {
        Ok(feature) => n += self.enable(feature) as usize,
        Err(e) => warn!("{e}"),
      }
    }
    n
  }

  /// Enabled features
  /// 已启用特性
  pub fn enabled(&self) -> Vec<Feature> {
    Feature::ALL
      .into_iter()
      .filter(|&f| self.is_enabled(f))
      .collect()
  }
}

impl FeatureQuery for Gate {
  #[inline]
  fn is_enabled(&self, feature: Feature) -> bool {
    self.enabled[feature.idx()].load(Ordering::Acquire)
  }
}
