// crates/kyuji-cli/tests/cli_normalize.rs

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn kyuji() -> Command {
    Command::new(env!("CARGO_BIN_EXE_kyuji"))
}

fn run_ok(cmd: &mut Command) -> Output {
    let out = cmd.output().expect("spawn command");
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    out
}

fn run_with_stdin(cmd: &mut Command, input: &[u8]) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn command");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input)
        .expect("write stdin");
    let out = child.wait_with_output().expect("wait");
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stderr)
    );
    out
}

#[test]
fn stdin_to_stdout() {
    let out = run_with_stdin(kyuji().arg("normalize"), "これは舊漢字です。".as_bytes());
    assert_eq!(String::from_utf8(out.stdout).expect("utf8"), "これは旧漢字です。");

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("normalize ok:"), "{stderr}");
    assert!(stderr.contains("replaced=1"), "{stderr}");
}

#[test]
fn file_to_file_preserves_non_kanji_bytes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("poem.txt");
    let output = dir.path().join("poem.out.txt");

    let mut bytes = "春は來る\r\n讀書と學問の樂しみ\n".as_bytes().to_vec();
    bytes.push(0xFF);
    fs::write(&input, &bytes).expect("write input");

    run_ok(kyuji().args([
        "normalize",
        "--in",
        input.to_str().expect("path"),
        "--out",
        output.to_str().expect("path"),
        "--quiet",
    ]));

    let mut want = "春は来る\r\n読書と学問の楽しみ\n".as_bytes().to_vec();
    want.push(0xFF);
    assert_eq!(fs::read(&output).expect("read output"), want);
}

#[test]
fn ignore_flag_exempts_characters() {
    let out = run_with_stdin(
        kyuji().args(["normalize", "--ignore", "邉"]),
        "私は渡邉です。舊".as_bytes(),
    );
    assert_eq!(String::from_utf8(out.stdout).expect("utf8"), "私は渡邉です。旧");

    let out = run_with_stdin(kyuji().arg("normalize"), "私は渡邉です。".as_bytes());
    assert_eq!(String::from_utf8(out.stdout).expect("utf8"), "私は渡辺です。");
}

#[test]
fn same_input_and_output_is_refused() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("same.txt");
    fs::write(&path, "舊").expect("write");

    let out = kyuji()
        .args([
            "normalize",
            "--in",
            path.to_str().expect("path"),
            "--out",
            path.to_str().expect("path"),
        ])
        .output()
        .expect("spawn");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("invalid endpoint"));
    assert_eq!(fs::read_to_string(&path).expect("reread"), "舊");
}

#[test]
fn missing_input_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nope.txt");
    let out = kyuji()
        .args(["normalize", "--in", missing.to_str().expect("path")])
        .output()
        .expect("spawn");
    assert!(!out.status.success());
}

#[test]
fn check_reports_each_character() {
    let out = run_ok(kyuji().args(["check", "樂a邉"]));
    let stdout = String::from_utf8(out.stdout).expect("utf8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3, "{stdout}");

    assert!(lines[0].starts_with("U+6A02 樂 in_scope=true modern=false obsolete=true"));
    assert!(lines[0].contains("-> 楽 on=ガク,ラク kun=たの example=たの-しい,たの-しむ"));

    assert!(lines[1].starts_with("U+0061 a in_scope=false"));
    assert!(lines[1].contains("-> a on=- kun=- example=-"));

    assert!(lines[2].contains("obsolete=true"));
    assert!(lines[2].contains("-> 辺"));
}
