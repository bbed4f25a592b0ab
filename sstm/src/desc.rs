//! SSTable identity and file naming
//! SSTable 标识与文件命名
//!
//! | Version | File name                                 |
//! |---------|-------------------------------------------|
//! | ka      | `<ks>-<cf>-ka-<generation>-<component>`   |
//! | la, mc  | `<version>-<generation>-<format>-<component>` |

use std::{
  fmt,
  path::{Path, PathBuf},
};

use crate::{Component, Error, Format, Result, Version};

/// Per-directory sstable sequence number, never negative
/// 目录内 sstable 序号，非负
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(i64);

impl Generation {
  /// Panics on a negative value, uniqueness is the caller's job
  /// 负值会 panic，唯一性由调用方保证
  #[inline]
  pub const fn new(v: i64) -> Self {
    assert!(v >= 0, "sstable generation must not be negative");
    Self(v)
  }

  #[inline]
  pub const fn get(self) -> i64 {
    self.0
  }
}

impl fmt::Display for Generation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

/// Where an sstable lives and how it is encoded
/// sstable 的位置与编码方式
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Descriptor {
  pub dir: PathBuf,
  pub generation: Generation,
  pub version: Version,
  pub format: Format,
}

impl Descriptor {
  #[inline]
  pub fn new(dir: impl Into<PathBuf>, generation: Generation, version: Version, format: Format) -> Self {
    Self {
      dir: dir.into(),
      generation,
      version,
      format,
    }
  }

  /// Path of one component, ks and cf only matter for ka
  /// 组件路径，ks 和 cf 仅对 ka 有效
  pub fn filename(&self, ks: &str, cf: &str, component: Component) -> PathBuf {
    let Self {
      generation,
      version,
      format,
      ..
    } = self;
    let name = match version {
      Version::Ka => format!("{ks}-{cf}-{version}-{generation}-{component}"),
      Version::La | Version::Mc => format!("{version}-{generation}-{format}-{component}"),
    };
    self.dir.join(name)
  }

  /// Parse a component path back into descriptor and component
  /// 将组件路径解析回描述符与组件
  pub fn parse(path: &Path) -> Result<(Self, Component)> {
    let bad = || Error::Filename(path.display().to_string());
    let name = path.file_name().and_then(|s| s.to_str()).ok_or_else(bad)?;
    let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();

    let part_li: Vec<&str> = name.split('-').collect();
    let (version, generation, format, component) = match part_li[..] {
      [_ks, _cf, "ka", generation, component] => (Version::Ka, generation, Format::Big, component),
      [version, generation, format, component] => {
        let version: Version = version.parse()?;
        if version == Version::Ka {
          return Err(bad());
        }
        (version, generation, format.parse()?, component)
      }
      _ => return Err(bad()),
    };

    // Canonical digits only, so the name rebuilds byte for byte
    // 仅限规范数字，保证文件名可逐字节重建
    let canonical = !generation.is_empty()
      && generation.bytes().all(|b| b.is_ascii_digit())
      && (generation == "0" || !generation.starts_with('0'));
    if !canonical {
      return Err(bad());
    }
    let generation = Generation::new(generation.parse::<i64>().map_err(|_| bad())?);

    Ok((
      Self {
        dir,
        generation,
        version,
        format,
      },
      component.parse()?,
    ))
  }
}
