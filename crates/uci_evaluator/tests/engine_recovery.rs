//! Recovery after an engine read timeout.
//!
//! A stub engine (shell script) stalls past the time budget on its first
//! search and behaves on the second. The adapter must stop and drain the
//! aborted search so a retry never consumes its leftover output.

#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::time::Duration;

use arbiter_core::{ArbiterError, Evaluator, Position, SearchBudget};
use uci_evaluator::{UciConfig, UciEvaluator};

const STUB_ENGINE: &str = r#"#!/bin/sh
first=1
while IFS= read -r line; do
  case "$line" in
    uci) echo "id name stub"; echo "uciok" ;;
    isready) echo "readyok" ;;
    go*)
      if [ "$first" = 1 ]; then
        first=0
        sleep 2
        echo "info depth 10 multipv 1 score cp 99 pv a1a1"
        echo "bestmove a1a1"
      else
        echo "info depth 10 multipv 1 score cp 20 pv e2e4"
        echo "bestmove e2e4"
      fi
      ;;
    quit) exit 0 ;;
    *) ;;
  esac
done
"#;

fn write_stub(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("{}_{}.sh", name, std::process::id()));
    std::fs::write(&path, STUB_ENGINE).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}

#[test]
fn test_retry_after_timeout_sees_fresh_search() {
    let stub = write_stub("uci_stub_recovery");
    let config = UciConfig {
        binary: stub.display().to_string(),
        grace: Duration::from_millis(1200),
        ..UciConfig::default()
    };
    let mut evaluator = UciEvaluator::launch(config).unwrap();
    let pos = Position::startpos();
    // The stub stalls for 2s; 100ms + 1200ms grace times out first.
    let budget = SearchBudget::time(Duration::from_millis(100));

    let err = evaluator.evaluate(&pos, budget).unwrap_err();
    assert!(matches!(err, ArbiterError::EngineUnavailable(_)));

    // The retry must see the second search's answer, not the aborted one's.
    let candidates = evaluator.evaluate(&pos, budget).unwrap();
    assert_eq!(candidates[0].uci, "e2e4");

    std::fs::remove_file(&stub).ok();
}
