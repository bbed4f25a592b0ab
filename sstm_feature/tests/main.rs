#[static_init::constructor(0)]
extern "C" fn _log_init() {
  log_init::init();
}

use std::sync::Arc;

use aok::{OK, Void};
use sstm_feature::{Error, Feature, FeatureQuery, Gate};

#[test]
fn test_name_roundtrip() -> Void {
  for f in Feature::ALL {
    assert_eq!(f.name().parse::<Feature>()?, f);
    assert_eq!(f.to_string(), f.name());
  }
  OK
}

#[test]
fn test_unknown_name() {
  assert_eq!(
    "NO_SUCH_FEATURE".parse::<Feature>(),
    Err(Error::Unknown("NO_SUCH_FEATURE".into()))
  );
}

#[test]
fn test_default_disabled() {
  let gate = Gate::new();
  for f in Feature::ALL {
    assert!(!gate.is_enabled(f));
  }
  assert!(!gate.cluster_supports_correct_static_compact_in_mc());
  assert!(gate.enabled().is_empty());
}

#[test]
fn test_enable_once() {
  let gate = Gate::new();
  assert!(gate.enable(Feature::CorrectStaticCompactInMc));
  assert!(!gate.enable(Feature::CorrectStaticCompactInMc));
  assert!(gate.cluster_supports_correct_static_compact_in_mc());
  assert!(!gate.is_enabled(Feature::McSstableFormat));
  assert_eq!(gate.enabled(), vec![Feature::CorrectStaticCompactInMc]);
}

#[test]
fn test_enable_set() {
  let gate = Gate::new();
  let n = gate.enable_set("MC_SSTABLE_FORMAT, FUTURE_THING,,CORRECT_STATIC_COMPACT_IN_MC");
  assert_eq!(n, 2);
  assert!(gate.is_enabled(Feature::McSstableFormat));
  assert!(gate.is_enabled(Feature::CorrectStaticCompactInMc));
  assert!(!gate.is_enabled(Feature::UnboundedRangeTombstones));

  // Already enabled ones are not counted again
  assert_eq!(gate.enable_set("MC_SSTABLE_FORMAT"), 0);
  assert_eq!(gate.enable_set(""), 0);
}

#[test]
fn test_concurrent_enable() {
  let gate = Arc::new(Gate::new());
  let g = &gate;
  let newly: usize = std::thread::scope(|s| {
    let li: Vec<_> = (0..8)
      .map(|_| s.spawn(move || g.enable(Feature::UnboundedRangeTombstones) as usize))
      .collect();
    li.into_iter().map(|h| h.join().unwrap_or(0)).sum()
  });
  assert_eq!(newly, 1);
  assert!(gate.is_enabled(Feature::UnboundedRangeTombstones));
}
