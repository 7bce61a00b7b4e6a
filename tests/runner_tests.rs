use std::io::Write;

use model_runner::runner::{run_script, LaunchError, ScriptConfig};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn script(dir: &TempDir, body: &str) -> ScriptConfig {
    let path = dir.path().join("script.sh");
    let mut f = std::fs::File::create(&path).unwrap();
    writeln!(f, "{body}").unwrap();
    ScriptConfig {
        interpreter: "sh".to_string(),
        script_path: path,
    }
}

#[tokio::test]
async fn captures_both_streams_and_exit_code() {
    let dir = TempDir::new().unwrap();
    let cfg = script(&dir, "echo out\necho err >&2\nexit 7");
    let out = run_script(&cfg).await.unwrap();
    assert_eq!(out.stdout, "out\n");
    assert_eq!(out.stderr, "err\n");
    assert_eq!(out.exit_code, Some(7));
}

#[tokio::test]
async fn zero_exit_with_empty_streams() {
    let dir = TempDir::new().unwrap();
    let cfg = script(&dir, "exit 0");
    let out = run_script(&cfg).await.unwrap();
    assert_eq!(out.stdout, "");
    assert_eq!(out.stderr, "");
    assert_eq!(out.exit_code, Some(0));
}

#[tokio::test]
async fn missing_script_reports_script_not_found() {
    let dir = TempDir::new().unwrap();
    let cfg = ScriptConfig {
        interpreter: "sh".to_string(),
        script_path: dir.path().join("missing.sh"),
    };
    let err = run_script(&cfg).await.unwrap_err();
    match err {
        LaunchError::ScriptNotFound(path) => assert!(path.ends_with("missing.sh")),
        other => panic!("expected ScriptNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_interpreter_reports_spawn_fault() {
    let dir = TempDir::new().unwrap();
    let cfg = ScriptConfig {
        interpreter: "model-runner-no-such-interpreter".to_string(),
        ..script(&dir, "echo hi")
    };
    let err = run_script(&cfg).await.unwrap_err();
    assert!(matches!(err, LaunchError::Spawn(_, _)));
    assert!(!err.to_string().is_empty());
}
