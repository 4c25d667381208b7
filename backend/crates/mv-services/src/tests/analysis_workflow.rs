use crate::analysis_workflow::{data_url, object_path};

use googletest::prelude::*;

#[test]
fn given_file_with_extension_when_path_built_then_user_and_millis_prefix() {
    let path = object_path("user-1", "chest.scan.png", 1_700_000_000_000);

    assert_that!(path, eq("user-1/1700000000000.png"));
}

#[test]
fn given_file_without_extension_when_path_built_then_whole_name_used() {
    let path = object_path("user-1", "scan", 42);

    assert_that!(path, eq("user-1/42.scan"));
}

#[test]
fn given_png_bytes_when_encoded_then_png_data_url() {
    let url = data_url("scan.PNG", b"abc");

    assert_that!(url, eq("data:image/png;base64,YWJj"));
}

#[test]
fn given_unknown_extension_when_encoded_then_octet_stream() {
    let url = data_url("scan.raw", b"abc");

    assert_that!(url, starts_with("data:application/octet-stream;base64,"));
}
