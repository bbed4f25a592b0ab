#[static_init::constructor(0)]
extern "C" fn _log_init() {
  log_init::init();
}

use sstm_conf::{Conf, Config, MB};
use sstm_large::{LargeData, LogLargeData, NopLargeData, Threshold};

const SST: &str = "/data/ks/cf/mc-1-big-Data.db";

fn small() -> LogLargeData {
  let conf = Config::from([
    Conf::LargePartitionWarnMb(2),
    Conf::LargeRowWarnMb(1),
    Conf::LargeCellWarnMb(1),
    Conf::RowsCountWarn(10),
  ]);
  LogLargeData::new(Threshold::from_conf(&conf))
}

#[test]
fn test_threshold_from_conf() {
  let t = *small().threshold();
  assert_eq!(t.partition, 2 * MB);
  assert_eq!(t.row, MB);
  assert_eq!(t.cell, MB);
  assert_eq!(t.rows_count, 10);
  assert_eq!(Threshold::default().partition, 1000 * MB);
}

#[test]
fn test_partition() {
  let sink = small();
  assert!(!sink.maybe_record_large_partition(SST, b"pk", 2 * MB, 10));
  assert!(sink.maybe_record_large_partition(SST, b"pk", 2 * MB + 1, 1));
  assert!(sink.maybe_record_large_partition(SST, b"pk", 1, 11));
  assert_eq!(sink.stats().partitions(), 1);
  assert_eq!(sink.stats().partitions_many_rows(), 1);
}

#[test]
fn test_row_and_cell() {
  let sink = small();
  assert!(!sink.maybe_record_large_row(SST, b"pk", MB));
  assert!(sink.maybe_record_large_row(SST, b"pk", MB + 1));
  assert!(!sink.maybe_record_large_cell(SST, &[0xff, 0xfe], "v", 10));
  assert!(sink.maybe_record_large_cell(SST, &[0xff, 0xfe], "v", 3 * MB));
  assert_eq!(sink.stats().rows(), 1);
  assert_eq!(sink.stats().cells(), 1);
}

#[test]
fn test_nop() {
  let sink = NopLargeData;
  assert!(!sink.maybe_record_large_partition(SST, b"pk", u64::MAX, u64::MAX));
  assert!(!sink.maybe_record_large_row(SST, b"pk", u64::MAX));
  assert!(!sink.maybe_record_large_cell(SST, b"pk", "v", u64::MAX));
}
