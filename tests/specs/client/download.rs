//! `--download=<request id>`: fetch what a job has produced so far.

use crate::prelude::*;

#[test]
fn downloads_finished_job_without_submitting() {
    let server = CannedServer::start(&[
        (
            "/api/tcoffee/result?rid=5",
            200,
            &result_xml("Done", &[("/data/5/a.aln", "result_file", "a.aln", "clustal_aln")]),
        ),
        ("/data/5/a.aln", 200, "CLUSTAL"),
    ]);
    let outcome = cli()
        .args(&[&server.host_arg(), "--download=5"])
        .passes()
        .stdout_has("Downloaded 1 file(s) of request 5 (status: Done)");

    assert_eq!(outcome.read("a.aln"), "CLUSTAL");
    assert!(server.seen().iter().all(|s| s.method == "GET"));
}

#[test]
fn still_running_job_warns_and_downloads() {
    let server = CannedServer::start(&[
        (
            "/api/tcoffee/result?rid=6",
            200,
            &result_xml("Running", &[("/data/6/partial.txt", "system_file", "partial.txt", "txt")]),
        ),
        ("/data/6/partial.txt", 200, "so far"),
    ]);
    let outcome = cli()
        .args(&[&server.host_arg(), "--download=6"])
        .passes()
        .stdout_has("has not finished yet");

    assert_eq!(outcome.read("partial.txt"), "so far");
}

#[test]
fn missing_item_aborts_with_http_error() {
    let server = CannedServer::start(&[(
        "/api/tcoffee/result?rid=8",
        200,
        &result_xml("Done", &[("/data/8/gone.aln", "result_file", "gone.aln", "clustal_aln")]),
    )]);
    cli().args(&[&server.host_arg(), "--download=8"]).exits(1).stderr_has("HTTP 404");
}
