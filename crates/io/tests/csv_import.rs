//! Integration test: CSV shot logs on disk.

use std::io::Write;
use std::path::Path;

use caddie_io::{IoError, read_shots_csv, write_json_file};
use caddie_shot::{Lie, ShotShape, ShotSource};

#[test]
fn file_not_found() {
    let err = read_shots_csv(Path::new("/tmp/caddie_test_no_such_log.csv")).unwrap_err();
    assert!(
        matches!(err, IoError::FileNotFound { .. }),
        "expected FileNotFound, got {err:?}",
    );
}

#[test]
fn reads_users_and_rounds_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "user,course_name,club_name,distance,shot_shape,lie").unwrap();
    writeln!(file, "alex,Pebble,Driver,255,Draw,Tee Box").unwrap();
    writeln!(file, "alex,Pebble,7 Iron,151,Straight,Fairway").unwrap();
    writeln!(file, "alex,Links,7 Iron,148,Fade,Rough").unwrap();
    writeln!(file, "sam,Links,PW,,Straight,Fairway").unwrap();
    writeln!(file, "sam,Links,PW,105,Straight,Sand").unwrap();
    file.flush().unwrap();

    let (log, summary) = read_shots_csv(file.path()).unwrap();
    assert_eq!(summary.total_records, 5);
    assert_eq!(summary.imported, 4);
    assert_eq!(summary.skipped, 1);
    assert_eq!(log.len(), 4);

    let alex = log.rounds("alex");
    assert_eq!(alex.len(), 2);
    assert_eq!(alex[0].shots()[0].lie(), Lie::TeeBox);
    assert_eq!(alex[1].shots()[0].shot_shape(), ShotShape::Fade);

    let sam = log.shots_for_user("sam").unwrap();
    assert_eq!(sam.len(), 1);
    assert_eq!(sam[0].lie(), Lie::Sand);
}

#[test]
fn json_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("summary.json");
    write_json_file(&path, &["Driver", "7 Iron"]).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let back: Vec<String> = serde_json::from_str(&text).unwrap();
    assert_eq!(back, ["Driver", "7 Iron"]);
}

#[test]
fn json_file_unwritable_dir() {
    let path = Path::new("/nonexistent-caddie-dir/out.json");
    let err = write_json_file(path, &1).unwrap_err();
    assert!(matches!(err, IoError::Write { .. }));
}
