use super::*;

#[test]
fn test_parse_cp_info_line() {
    let info = parse_info_line(
        "info depth 18 seldepth 24 multipv 2 score cp -31 nodes 1520411 nps 812000 time 1871 pv e7e5 g1f3 b8c6",
    )
    .unwrap();
    assert_eq!(info.depth, 18);
    assert_eq!(info.multipv, 2);
    assert_eq!(info.eval, Eval::Cp(-31));
    assert_eq!(info.first_move, "e7e5");
}

#[test]
fn test_parse_mate_info_line() {
    let info =
        parse_info_line("info depth 12 multipv 1 score mate -3 nodes 4000 pv h7h6 d1h5 g7g6")
            .unwrap();
    assert_eq!(info.eval, Eval::Mate(-3));
    assert_eq!(info.first_move, "h7h6");
}

#[test]
fn test_multipv_defaults_to_one() {
    let info = parse_info_line("info depth 10 score cp 25 pv e2e4").unwrap();
    assert_eq!(info.multipv, 1);
}

#[test]
fn test_irrelevant_lines_are_skipped() {
    assert!(parse_info_line("info depth 18 currmove e2e4 currmovenumber 1").is_none());
    assert!(parse_info_line("info string NNUE evaluation using nn.nnue").is_none());
    assert!(parse_info_line("readyok").is_none());
    // A score without a pv is useless to the collector.
    assert!(parse_info_line("info depth 5 score cp 12 nodes 100").is_none());
}

#[test]
fn test_parse_bestmove_variants() {
    assert_eq!(
        parse_bestmove("bestmove e2e4 ponder e7e5"),
        Some(Some("e2e4".to_string()))
    );
    assert_eq!(parse_bestmove("bestmove (none)"), Some(None));
    assert_eq!(parse_bestmove("info depth 1"), None);
}

#[test]
fn test_collector_keeps_deepest_per_slot() {
    let mut collector = CandidateCollector::new();
    for line in [
        "info depth 8 multipv 1 score cp 20 pv e2e4",
        "info depth 8 multipv 2 score cp 5 pv d2d4",
        "info depth 10 multipv 2 score cp 12 pv g1f3",
        "info depth 10 multipv 1 score cp 30 pv e2e4",
        // Stale shallower repeat must not overwrite slot 1.
        "info depth 9 multipv 1 score cp 99 pv b1c3",
    ] {
        collector.push(parse_info_line(line).unwrap());
    }
    let lines = collector.into_lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].multipv, 1);
    assert_eq!(lines[0].depth, 10);
    assert_eq!(lines[0].eval, Eval::Cp(30));
    assert_eq!(lines[1].first_move, "g1f3");
}
