// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for the commands that modify a file: append and insert.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

#[path = "common.rs"]
mod common;

use common::*;
use similar_asserts::assert_eq;

const SAMPLE: &str = "1,2,3,4,5,6,7,8,9
9,8,7,6,5,4,3,2,1
a,b,c,d,e,f,g,h,i
i,h,g,f,e,d,c,b,a
";

// =============================================================================
// append
// =============================================================================

#[test]
fn append_adds_line_after_last() {
    let temp = temp_with_data(SAMPLE);
    csvseek(&temp)
        .args(["append", "data.csv", "abc", "123", "def", "456", "ghi", "789", "jkl", "012", "mno"])
        .assert()
        .success()
        .stdout("appended line 4\n");

    assert_eq!(
        read_data(&temp),
        format!("{SAMPLE}abc,123,def,456,ghi,789,jkl,012,mno\n")
    );
}

#[test]
fn append_terminates_unterminated_last_line() {
    let temp = temp_with_data("1,2,3\n4,5,6");
    csvseek(&temp)
        .args(["append", "data.csv", "7", "8", "9"])
        .assert()
        .success();

    assert_eq!(read_data(&temp).as_str(), "1,2,3\n4,5,6\n7,8,9\n");
}

#[test]
fn append_creates_file_with_configured_header() {
    let temp = TempDir::new().unwrap();
    csvseek(&temp)
        .args(["--columns", "id,name", "append", "data.csv", "1", "one"])
        .assert()
        .success()
        .stdout("appended line 0\n");

    assert_eq!(read_data(&temp).as_str(), "id,name\n1,one\n");
}

#[test]
fn append_to_new_file_without_header() {
    let temp = TempDir::new().unwrap();
    csvseek(&temp).args(["append", "data.csv", "a", "b"]).assert().success();
    csvseek(&temp).args(["append", "data.csv", "c", "d"]).assert().success().stdout("appended line 1\n");

    assert_eq!(read_data(&temp).as_str(), "a,b\nc,d\n");
}

#[test]
fn append_with_crlf_flag() {
    let temp = temp_with_data("a\r\n");
    csvseek(&temp)
        .args(["--crlf", "append", "data.csv", "b"])
        .assert()
        .success();

    assert_eq!(read_data(&temp).as_str(), "a\r\nb\r\n");
}

#[test]
fn append_wrong_arity_leaves_file_untouched() {
    let temp = temp_with_data("id,name\n1,one\n");
    csvseek(&temp)
        .args(["--header", "append", "data.csv", "2"])
        .assert()
        .failure()
        .code(1)
        .stderr("error: 1 values do not match the 2 header columns\n");

    assert_eq!(read_data(&temp).as_str(), "id,name\n1,one\n");
}

// =============================================================================
// insert
// =============================================================================

#[test]
fn insert_shifts_following_lines() {
    let temp = temp_with_data(SAMPLE);
    csvseek(&temp)
        .args(["insert", "data.csv", "1", "ABC", "DEF", "123", "456", "GHI", "JKL", "789", "MNO", "PQR"])
        .assert()
        .success()
        .stdout("inserted line 1\n");

    assert_eq!(
        read_data(&temp).as_str(),
        "1,2,3,4,5,6,7,8,9
ABC,DEF,123,456,GHI,JKL,789,MNO,PQR
9,8,7,6,5,4,3,2,1
a,b,c,d,e,f,g,h,i
i,h,g,f,e,d,c,b,a
"
    );
}

#[test]
fn insert_then_get_returns_shifted_line() {
    let temp = temp_with_data("A\nB\nC\n");
    csvseek(&temp).args(["insert", "data.csv", "1", "X"]).assert().success();

    csvseek(&temp).args(["get", "data.csv", "1"]).assert().success().stdout("X\n");
    csvseek(&temp).args(["get", "data.csv", "2"]).assert().success().stdout("B\n");
}

#[test]
fn insert_longer_line_with_header() {
    let temp = temp_with_data("k,v\na,1\nb,2\nc,3\n");
    csvseek(&temp)
        .args(["--header", "insert", "data.csv", "0", "a-much-longer-key", "12345"])
        .assert()
        .success();

    assert_eq!(read_data(&temp).as_str(), "k,v\na-much-longer-key,12345\na,1\nb,2\nc,3\n");
}

#[test]
fn insert_past_end_fails() {
    let temp = temp_with_data("A\nB\nC\n");
    csvseek(&temp)
        .args(["insert", "data.csv", "100", "X"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("error: line 100 is out of bounds"));

    assert_eq!(read_data(&temp).as_str(), "A\nB\nC\n");
}

#[test]
fn insert_into_missing_file_fails() {
    let temp = TempDir::new().unwrap();
    csvseek(&temp)
        .args(["insert", "data.csv", "0", "X"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: file not found"));
}
