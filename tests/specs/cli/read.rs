// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for the read-only commands: read, get, count, header.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

#[path = "common.rs"]
mod common;

use common::*;

const SAMPLE: &str = "1,2,3,4,5,6,7,8,9
9,8,7,6,5,4,3,2,1
a,b,c,d,e,f,g,h,i
i,h,g,f,e,d,c,b,a
";

const SAMPLE_HEADER: &str = "Abc,Def,Ghi,Jkl,Mno,Pqr,Stu,Vwx,Yz
1,2,3,4,5,6,7,8,9
9,8,7,6,5,4,3,2,1
a,b,c,d,e,f,g,h,i
i,h,g,f,e,d,c,b,a
";

// =============================================================================
// read
// =============================================================================

#[test]
fn read_prints_every_line() {
    let temp = temp_with_data(SAMPLE);
    let output = csvseek(&temp).args(["read", "data.csv"]).output().unwrap();

    assert!(output.status.success());
    similar_asserts::assert_eq!(String::from_utf8(output.stdout).unwrap().as_str(), SAMPLE);
}

#[yare::parameterized(
    from_second = { &["--from", "1"], "9,8,7,6,5,4,3,2,1\na,b,c,d,e,f,g,h,i\ni,h,g,f,e,d,c,b,a\n" },
    from_last = { &["--from", "3"], "i,h,g,f,e,d,c,b,a\n" },
    limit = { &["--limit", "1"], "1,2,3,4,5,6,7,8,9\n" },
    window = { &["--from", "2", "-n", "1"], "a,b,c,d,e,f,g,h,i\n" },
    past_end = { &["--from", "10"], "" },
)]
fn read_window(args: &[&str], expected: &str) {
    let temp = temp_with_data(SAMPLE);
    let output = csvseek(&temp)
        .args(["read", "data.csv"])
        .args(args)
        .output()
        .unwrap();

    assert!(output.status.success());
    similar_asserts::assert_eq!(String::from_utf8(output.stdout).unwrap().as_str(), expected);
}

#[test]
fn read_with_header_skips_header_line() {
    let temp = temp_with_data(SAMPLE_HEADER);
    csvseek(&temp)
        .args(["--header", "read", "data.csv", "--limit", "1"])
        .assert()
        .success()
        .stdout("1,2,3,4,5,6,7,8,9\n");
}

#[test]
fn read_json_output() {
    let temp = temp_with_data("a,b\nc,d\n");
    let output = csvseek(&temp)
        .args(["read", "data.csv", "-o", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    similar_asserts::assert_eq!(
        json,
        serde_json::json!([
            { "line": 0, "fields": ["a", "b"] },
            { "line": 1, "fields": ["c", "d"] },
        ])
    );
}

#[test]
fn read_missing_file_fails() {
    let temp = TempDir::new().unwrap();
    csvseek(&temp)
        .args(["read", "missing.csv"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("error: file not found"));
    assert!(!temp.path().join("missing.csv").exists());
}

// =============================================================================
// get
// =============================================================================

#[yare::parameterized(
    first = { "0", "1,2,3,4,5,6,7,8,9\n" },
    third = { "2", "a,b,c,d,e,f,g,h,i\n" },
    last = { "3", "i,h,g,f,e,d,c,b,a\n" },
)]
fn get_line(line: &str, expected: &str) {
    let temp = temp_with_data(SAMPLE_HEADER);
    csvseek(&temp)
        .args(["--header", "get", "data.csv", line])
        .assert()
        .success()
        .stdout(expected.to_string());
}

#[test]
fn get_past_end_fails_with_count() {
    let temp = temp_with_data(SAMPLE);
    csvseek(&temp)
        .args(["get", "data.csv", "4"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("line 4 not found"))
        .stderr(predicate::str::contains("the file has 4 lines"));
}

#[test]
fn get_with_custom_delimiter() {
    let temp = temp_with_data("a;b\nc;d\n");
    csvseek(&temp)
        .args(["get", "data.csv", "1", "--delimiter", ";"])
        .assert()
        .success()
        .stdout("c;d\n");
}

// =============================================================================
// count and header
// =============================================================================

#[yare::parameterized(
    plain = { SAMPLE, &[], "4\n" },
    header = { SAMPLE_HEADER, &["--header"], "4\n" },
    header_counted_as_data = { SAMPLE_HEADER, &[], "5\n" },
    unterminated = { "a\nb", &[], "2\n" },
)]
fn count_lines(content: &str, flags: &[&str], expected: &str) {
    let temp = temp_with_data(content);
    csvseek(&temp)
        .args(flags)
        .args(["count", "data.csv"])
        .assert()
        .success()
        .stdout(expected.to_string());
}

#[test]
fn header_prints_column_names() {
    let temp = temp_with_data("id,name\n1,one\n");
    csvseek(&temp)
        .args(["header", "data.csv"])
        .assert()
        .success()
        .stdout("id\nname\n");
}

#[test]
fn header_rejects_missing_columns() {
    let temp = temp_with_data("id,title\n1,one\n");
    csvseek(&temp)
        .args(["--columns", "id,name", "header", "data.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("header does not have the expected columns"));
}

#[yare::parameterized(
    count = { &["count", "data.csv"] },
    read = { &["read", "data.csv"] },
    get = { &["get", "data.csv", "0"] },
    header = { &["header", "data.csv"] },
)]
fn read_commands_leave_empty_file_unchanged(args: &[&str]) {
    let temp = temp_with_data("");
    csvseek(&temp)
        .args(["--columns", "id,name"])
        .args(args)
        .assert()
        .failure()
        .stderr(predicate::str::contains("header line missing"));

    similar_asserts::assert_eq!(read_data(&temp).as_str(), "");
}
