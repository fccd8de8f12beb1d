//! End-to-end runs of the `kosei` binary.

use std::process::{Command, Output};

use pretty_assertions::assert_eq;

const REVIEW_JSON: &str = r#"{
    "title": {"improvement": "抽象的", "suggestion": "店名を入れる"},
    "lead": {"improvement": "", "suggestion": ""},
    "body": {"good": "具体的", "improvement": "長い", "suggestion": "段落を分ける"},
    "image": {"url": "https://example.com/cafe.jpg", "good": "明るい"}
}"#;

/// Run `kosei` in an empty directory so no user or project config leaks in.
fn kosei(args: &[&str]) -> Output {
    let home = tempfile::tempdir().expect("temp home");
    Command::new(env!("CARGO_BIN_EXE_kosei"))
        .args(["--progress", "off", "--color", "never"])
        .args(args)
        .current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env_remove("KOSEI_LOG")
        .env_remove("COLUMNS")
        .env_remove("KOSEI_SERVICE__ENDPOINT")
        .output()
        .expect("run kosei")
}

fn serve_once(status: u16, body: &'static str) -> (String, std::thread::JoinHandle<()>) {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind test server");
    let port = server
        .server_addr()
        .to_ip()
        .map(|addr| addr.port())
        .expect("ip listener");
    let handle = std::thread::spawn(move || {
        if let Ok(request) = server.recv() {
            let response = tiny_http::Response::from_string(body).with_status_code(status);
            let _ = request.respond(response);
        }
    });
    (format!("http://127.0.0.1:{port}/review"), handle)
}

const VALID: [&str; 6] = [
    "--title",
    "駅前の新しいカフェ",
    "--body",
    "今月オープンしたカフェを取材しました。",
    "--image-url",
    "https://example.com/cafe.jpg",
];

#[test]
fn check_accepts_a_valid_draft() {
    let mut args = vec!["check"];
    args.extend(VALID);
    let out = kosei(&args);

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("9 / 100"));
}

#[test]
fn check_fails_on_short_body() {
    let out = kosei(&["--format", "json", "check", "--title", "見出し", "--body", "短い"]);

    assert_eq!(out.status.code(), Some(1));
    let report: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("json report on stdout");
    assert_eq!(report["valid"], false);
    assert_eq!(report["fields"][2]["error"], "本文は10文字以上で入力してください");
}

#[test]
fn review_prints_feedback() {
    let (endpoint, server) = serve_once(200, REVIEW_JSON);
    let mut args = vec!["--endpoint", endpoint.as_str(), "review"];
    args.extend(VALID);
    let out = kosei(&args);
    server.join().expect("server thread");

    assert!(
        out.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("✓ 予稿が正常に送信されました！"));
    assert!(stdout.contains("改善点  3 件"));
    assert!(stdout.contains("[リード文]\n  検出内容: —\n  提案: —"));
    assert!(stdout.contains("画像分析結果"));
}

#[test]
fn review_reports_service_failure() {
    let (endpoint, server) = serve_once(500, "{}");
    let mut args = vec!["--endpoint", endpoint.as_str(), "review"];
    args.extend(VALID);
    let out = kosei(&args);
    server.join().expect("server thread");

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("送信中にエラーが発生しました。もう一度お試しください。"));
    assert!(out.stdout.is_empty());
}

#[test]
fn invalid_draft_is_never_sent() {
    let out = kosei(&[
        "--endpoint",
        "http://127.0.0.1:9/review",
        "review",
        "--title",
        "見出し",
        "--body",
        "短い",
    ]);

    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("本文は10文字以上で入力してください"));
}

#[test]
fn show_renders_saved_issue_list() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("feedback.json");
    std::fs::write(&path, r#"[{"body": {"improvement": "冗長", "suggestion": "削る"}}]"#)
        .expect("write feedback");

    let out = kosei(&["show", path.to_str().expect("utf-8 path")]);

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("改善点  1 件"));
    assert!(stdout.contains("[本文]\n  検出内容: 冗長\n  提案: 削る"));
}
