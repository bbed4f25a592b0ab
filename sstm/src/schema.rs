use std::sync::Arc;

/// Table schema identity
/// 表结构标识
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Schema {
  pub id: u64,
  pub ks_name: String,
  pub cf_name: String,
}

impl Schema {
  pub fn new(id: u64, ks_name: impl Into<String>, cf_name: impl Into<String>) -> Self {
    Self {
      id,
      ks_name: ks_name.into(),
      cf_name: cf_name.into(),
    }
  }
}

pub type SchemaPtr = Arc<Schema>;
