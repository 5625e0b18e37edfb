use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

fn sample_inputs() -> (tempfile::NamedTempFile, tempfile::NamedTempFile) {
    let mut roster = tempfile::NamedTempFile::new().unwrap();
    writeln!(roster, "id,first_name,last_name,email,phone,date_joined,is_active").unwrap();
    writeln!(roster, "1,Tech,One,tech1@test.com,,2023-01-01T12:00:00Z,true").unwrap();

    let mut orders = tempfile::NamedTempFile::new().unwrap();
    writeln!(orders, "id,technician,hours,created_at").unwrap();
    writeln!(orders, "1,1,10,").unwrap();

    (roster, orders)
}

#[cfg(not(feature = "storage-rocksdb"))]
#[test]
fn test_rocksdb_fallback_warning() {
    let (roster, orders) = sample_inputs();

    let mut cmd = Command::new(cargo_bin!("fieldpay"));
    cmd.arg(roster.path())
        .arg(orders.path())
        .arg("--db-path")
        .arg("some_db");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("WARNING: Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage."));
}

#[cfg(feature = "storage-rocksdb")]
#[test]
fn test_rocksdb_no_fallback_warning() {
    let (roster, orders) = sample_inputs();

    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("test_db");

    let mut cmd = Command::new(cargo_bin!("fieldpay"));
    cmd.arg(roster.path())
        .arg(orders.path())
        .arg("--db-path")
        .arg(&db_path);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("WARNING").not());
}
