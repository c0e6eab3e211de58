//! Submitting jobs: raw command mode, program mode, async, timeouts.

use crate::prelude::*;

fn finished_job(status: &str) -> CannedServer {
    CannedServer::start(&[
        ("/api/tcoffee/run", 200, &submit_xml("42")),
        (
            "/api/tcoffee/result?rid=42",
            200,
            &result_xml(
                status,
                &[
                    ("/data/42/seqs.fa", "input_file", "seqs.fa", "fasta"),
                    ("/data/42/out/seqs.aln", "result_file", "out/seqs.aln", "clustal_aln"),
                    ("/data/42/run.log", "system_file", "run.log", "log"),
                ],
            ),
        ),
        ("/data/42/seqs.fa", 200, ">a\nACGT\n"),
        ("/data/42/out/seqs.aln", 200, "CLUSTAL W\n"),
        ("/data/42/run.log", 200, "alignment written\n"),
    ])
}

#[test]
fn run_uploads_files_waits_and_downloads() {
    let server = finished_job("Done");
    let outcome = cli()
        .file("seqs.fa", ">a\nACGT\n")
        .args(&[&server.host_arg(), "--poll-sleep=0", "-in", "file:seqs.fa", "-mode=regular"])
        .passes()
        .stdout_has("Request accepted: 42")
        .stdout_has("alignment written")
        .stdout_has(&format!(
            "You can share this result using the following link http://{}/apps/tcoffee/42.html",
            server.host()
        ));

    assert_eq!(outcome.read("seqs.aln"), "CLUSTAL W\n");
    assert!(!outcome.dir().join("out").exists());

    let seen = server.seen();
    let submit = seen.iter().find(|s| s.path == "/api/tcoffee/run").unwrap();
    assert_eq!(submit.method, "POST");
    assert!(submit.body.contains("-in seqs.fa -mode=regular"));
    assert!(submit.body.contains("name=\"file:0\"; filename=\"seqs.fa\""));
    assert!(!seen.iter().any(|s| s.path == "/data/42/seqs.fa"), "inputs are skipped");
}

#[test]
fn nested_paths_and_output_dir() {
    let server = finished_job("Done");
    let outcome = cli()
        .args(&["x", &server.host_arg(), "--out-path=results", "--flat-path=false", "--include-inputs"])
        .passes();

    assert_eq!(outcome.read("results/out/seqs.aln"), "CLUSTAL W\n");
    assert_eq!(outcome.read("results/seqs.fa"), ">a\nACGT\n");
}

#[test]
fn failed_job_exits_1_and_points_at_log() {
    let server = finished_job("Failed");
    cli()
        .args(&[&server.host_arg(), "x"])
        .exits(1)
        .stdout_lacks("alignment written")
        .stdout_has("You can share this result")
        .stderr_has("terminated with status 'Failed'")
        .stderr_has("run.log");
}

#[test]
fn json_summary_lists_downloaded_files() {
    let server = finished_job("Done");
    let outcome = cli().args(&[&server.host_arg(), "--format=json", "x"]).passes();

    let value: serde_json::Value = serde_json::from_str(&outcome.stdout).unwrap();
    assert_eq!(value["request_id"], "42");
    assert_eq!(value["status"], "Done");
    assert_eq!(value["files"].as_array().unwrap().len(), 2);
    assert_eq!(value["log_file"], "run.log");
}

#[test]
fn quiet_run_prints_nothing() {
    let server = finished_job("Done");
    let outcome = cli().args(&["x", &server.host_arg(), "--quiet"]).passes();
    assert_eq!(outcome.stdout, "");
    assert_eq!(outcome.read("seqs.aln"), "CLUSTAL W\n");
}

#[test]
fn async_prints_request_id_without_polling() {
    let server = finished_job("Done");
    cli().args(&["x", &server.host_arg(), "--async"]).passes().stdout_has("42\n");
    assert!(server.seen().iter().all(|s| s.path == "/api/tcoffee/run"));
}

#[test]
fn still_running_at_timeout_exits_2_with_link() {
    let server = CannedServer::start(&[
        ("/api/tcoffee/run", 200, &submit_xml("7")),
        ("/api/tcoffee/result?rid=7", 200, &result_xml("Running", &[])),
    ]);
    cli()
        .args(&[&server.host_arg(), "--poll-timeout=0", "--poll-sleep=0", "x"])
        .exits(2)
        .stderr_has("did not complete")
        .stderr_has(&format!("http://{}/apps/tcoffee/7.html", server.host()));
}

#[test]
fn submission_error_exits_1() {
    let server = CannedServer::start(&[(
        "/api/tcoffee/run",
        400,
        "<response><err><code>400</code><type>Bad request</type><message>Unknown mode</message></err></response>",
    )]);
    cli().args(&[&server.host_arg(), "x"]).exits(1).stderr_has("Unknown mode");
}

#[test]
fn program_mode_inlines_file_values() {
    let server = CannedServer::start(&[
        ("/api/tcoffee/submit?name=expresso", 200, &submit_xml("9")),
        ("/api/tcoffee/result?rid=9", 200, &result_xml("Done", &[])),
    ]);
    cli()
        .file("seqs.fa", "\n>a\nACGT\n\n")
        .args(&[&server.host_arg(), "--program=expresso", "seq=file:seqs.fa", "mode=fast", "junk"])
        .passes();

    let seen = server.seen();
    let submit = seen.iter().find(|s| s.method == "POST").unwrap();
    assert_eq!(submit.path, "/api/tcoffee/submit?name=expresso");
    assert!(submit.body.contains("name=\"seq\"\r\n\r\n>a\nACGT\r\n"));
    assert!(submit.body.contains("name=\"mode\"\r\n\r\nfast\r\n"));
    assert!(submit.body.contains("name=\"junk\"\r\n\r\n\r\n"));
}
