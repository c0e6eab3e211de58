//! `--ping` and `--list`.

use crate::prelude::*;

const SERVICES: &str = "<response>\
    <service><name>regular</name><group>T-Coffee</group><title>Regular</title></service>\
    <service><name>expresso</name><group>Structure</group><title>Expresso</title></service>\
    </response>";

#[test]
fn ping_prints_status_and_round_trip() {
    let server =
        CannedServer::start(&[("/api/tcoffee/ping", 200, "<response><status>OK</status></response>")]);
    cli().args(&[&server.host_arg(), "--ping"]).passes().stdout_has("OK (").stdout_has(" ms)");
    assert_eq!(server.seen()[0].method, "GET");
}

#[test]
fn ping_as_json() {
    let server =
        CannedServer::start(&[("/api/tcoffee/ping", 200, "<response><status>OK</status></response>")]);
    let outcome = cli().args(&[&server.host_arg(), "--ping", "--format=json"]).passes();
    let value: serde_json::Value = serde_json::from_str(&outcome.stdout).unwrap();
    assert_eq!(value["status"], "OK");
    assert!(value["elapsed_ms"].is_u64());
}

#[test]
fn quiet_ping_prints_nothing() {
    let server =
        CannedServer::start(&[("/api/tcoffee/ping", 200, "<response><status>OK</status></response>")]);
    let outcome = cli().args(&[&server.host_arg(), "--ping", "--quiet"]).passes();
    assert_eq!(outcome.stdout, "");
}

#[test]
fn ping_unreachable_host_exits_1() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    cli().args(&[&format!("--host={addr}"), "--ping"]).exits(1).stderr_has("Error:");
}

#[test]
fn server_error_record_is_reported() {
    let server = CannedServer::start(&[(
        "/api/tcoffee/ping",
        500,
        "<response><err><code>500</code><type>Internal</type><message>db down</message></err></response>",
    )]);
    cli()
        .args(&[&server.host_arg(), "--ping"])
        .exits(1)
        .stderr_has("db down [code: 500, type: Internal]");
}

#[test]
fn list_prints_services() {
    let server = CannedServer::start(&[("/api/tcoffee/services", 200, SERVICES)]);
    cli()
        .args(&[&server.host_arg(), "--list"])
        .passes()
        .stdout_has("regular   Regular   T-Coffee")
        .stdout_has("expresso  Expresso  Structure");
}

#[test]
fn list_as_json() {
    let server = CannedServer::start(&[("/api/tcoffee/services", 200, SERVICES)]);
    let outcome = cli().args(&[&server.host_arg(), "--list", "--format=json"]).passes();
    let value: serde_json::Value = serde_json::from_str(&outcome.stdout).unwrap();
    assert_eq!(value[1]["name"], "expresso");
}
