//! Configuration and file errors exit with 3 before touching the network.

use crate::prelude::*;

#[test]
fn missing_input_file_exits_3() {
    cli()
        .args(&["--host=127.0.0.1:9", "-in", "file:missing.fa"])
        .exits(3)
        .stderr_has("specified file does not exist")
        .stderr_has("missing.fa");
}

#[test]
fn missing_program_parameter_file_exits_3() {
    cli()
        .args(&["--host=127.0.0.1:9", "--program=expresso", "seq=file:nope.fa"])
        .exits(3)
        .stderr_has("nope.fa");
}

#[test]
fn output_path_that_is_a_file_exits_3() {
    cli()
        .file("taken", "x")
        .args(&["--host=127.0.0.1:9", "--out-path=taken", "-in", "x"])
        .exits(3)
        .stderr_has("not a directory");
}

#[test]
fn unknown_format_exits_3() {
    cli().args(&["--format=yaml", "--ping"]).exits(3).stderr_has("'yaml'");
}

#[test]
fn malformed_properties_file_exits_3() {
    cli().props("host = = 1\n").args(&["--ping"]).exits(3).stderr_has("properties file");
}

#[test]
fn host_comes_from_properties_file() {
    let server = CannedServer::start(&[(
        "/api/tcoffee/ping",
        200,
        "<response><status>OK</status></response>",
    )]);
    cli()
        .props(&format!("host = \"{}\"\n", server.host()))
        .args(&["--ping"])
        .passes()
        .stdout_has("OK");
    assert_eq!(server.seen().len(), 1);
}

#[test]
fn command_line_beats_properties_file() {
    let server = CannedServer::start(&[(
        "/api/other/ping",
        200,
        "<response><status>OK</status></response>",
    )]);
    cli()
        .props(&format!("host = \"{}\"\nbundle = \"tcoffee\"\n", server.host()))
        .args(&["--ping", "--bundle=other"])
        .passes()
        .stdout_has("OK");
}
