//! Descriptor and naming tests
//! 描述符与命名测试

use std::path::{Path, PathBuf};

use aok::{OK, Void};
use sstm::{Component, Descriptor, Error, Format, Generation, Version};

#[test]
fn test_version_format_names() -> Void {
  for v in Version::ALL {
    assert_eq!(v.to_string().parse::<Version>()?, v);
  }
  assert_eq!("big".parse::<Format>()?, Format::Big);
  assert_eq!("zz".parse::<Version>(), Err(Error::Version("zz".into())));
  assert_eq!("small".parse::<Format>(), Err(Error::Format("small".into())));
  assert_eq!(Version::default(), Version::Mc);
  assert!(Version::Ka < Version::La && Version::La < Version::Mc);
  OK
}

#[test]
fn test_component_names() -> Void {
  for c in Component::ALL {
    assert_eq!(c.as_str().parse::<Component>()?, c);
  }
  assert_eq!(Component::Crc.to_string(), "CRC.db");
  assert_eq!(Component::Digest.to_string(), "Digest.crc32");
  assert_eq!(
    "Junk.db".parse::<Component>(),
    Err(Error::Component("Junk.db".into()))
  );
  OK
}

#[test]
fn test_parse_every_layout() -> Void {
  for version in Version::ALL {
    for component in Component::ALL {
      let desc = Descriptor::new("/var/lib/data/ks/cf", Generation::new(123), version, Format::Big);
      let path = desc.filename("ks", "cf", component);
      let (parsed, parsed_component) = Descriptor::parse(&path)?;
      assert_eq!(parsed, desc, "{path:?}");
      assert_eq!(parsed_component, component);
    }
  }
  OK
}

#[test]
fn test_parse_relative() -> Void {
  let (desc, component) = Descriptor::parse(Path::new("mc-5-big-Statistics.db"))?;
  assert_eq!(desc.dir, PathBuf::new());
  assert_eq!(desc.generation.get(), 5);
  assert_eq!(component, Component::Statistics);
  OK
}

#[test]
fn test_parse_invalid() {
  let bad = |name: &str| Descriptor::parse(Path::new(name)).err();

  assert_eq!(bad("mc-1-big"), Some(Error::Filename("mc-1-big".into())));
  assert_eq!(bad("mc-x-big-Data.db"), Some(Error::Filename("mc-x-big-Data.db".into())));
  assert_eq!(bad("ka-1-big-Data.db"), Some(Error::Filename("ka-1-big-Data.db".into())));
  assert_eq!(bad("zz-1-big-Data.db"), Some(Error::Version("zz".into())));
  assert_eq!(bad("mc-1-tiny-Data.db"), Some(Error::Format("tiny".into())));
  assert_eq!(bad("mc-1-big-Junk.db"), Some(Error::Component("Junk.db".into())));
  assert_eq!(bad("ks-cf-ka-1-Junk.db"), Some(Error::Component("Junk.db".into())));
  assert!(bad("/").is_some());

  // Only the exact form filename() writes is accepted
  for name in [
    "mc-+5-big-Data.db",
    "mc--5-big-Data.db",
    "mc-05-big-Data.db",
    "mc--big-Data.db",
    "mc-99999999999999999999-big-Data.db",
    "ks-cf-ka-+5-Data.db",
  ] {
    assert_eq!(bad(name), Some(Error::Filename(name.into())), "{name}");
  }
}

#[test]
fn test_parse_rebuilds_same_path() -> Void {
  for name in ["/d/mc-0-big-Data.db", "/d/mc-5-big-Data.db", "/d/ks-cf-ka-10-TOC.txt"] {
    let path = Path::new(name);
    let (desc, component) = Descriptor::parse(path)?;
    assert_eq!(desc.filename("ks", "cf", component), path);
  }
  OK
}

#[test]
fn test_generation() {
  assert_eq!(Generation::new(0).get(), 0);
  assert_eq!(Generation::new(i64::MAX).to_string(), i64::MAX.to_string());
  assert!(Generation::new(1) < Generation::new(2));
}

#[test]
#[should_panic(expected = "sstable generation must not be negative")]
fn test_negative_generation() {
  let _ = Generation::new(-1);
}
