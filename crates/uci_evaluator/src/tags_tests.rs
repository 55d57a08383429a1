use super::*;

fn board(fen: &str) -> Board {
    Board::from_fen(fen, false).unwrap()
}

#[test]
fn test_quiet_developing_move() {
    let board = board(arbiter_core::STARTPOS_FEN);
    let tags = tags_for(&board, "g1f3");
    assert!(tags.quiet());
}

#[test]
fn test_plain_capture() {
    let mut pos = Position::startpos();
    pos.push("e2e4");
    pos.push("d7d5");
    let board = board_for(&pos).unwrap();
    let tags = tags_for(&board, "e4d5");
    assert!(tags.capture);
    assert!(!tags.check);
    assert!(!tags.promotion);
}

#[test]
fn test_en_passant_counts_as_capture() {
    let mut pos = Position::startpos();
    for mv in ["e2e4", "d7d5", "e4e5", "f7f5"] {
        pos.push(mv);
    }
    let board = board_for(&pos).unwrap();
    let tags = tags_for(&board, "e5f6");
    assert!(tags.capture);
}

#[test]
fn test_queen_sacrifice_with_check() {
    // 3...Nc6 4.Qxf7+?? Kxf7: a capture, a check, and a queen offered to
    // the king.
    let mut pos = Position::startpos();
    for mv in ["e2e4", "e7e5", "d1h5", "b8c6"] {
        pos.push(mv);
    }
    let board = board_for(&pos).unwrap();
    let tags = tags_for(&board, "h5f7");
    assert!(tags.capture);
    assert!(tags.check);
    assert!(tags.sacrifice);
}

#[test]
fn test_capture_without_recapture_is_not_a_sacrifice() {
    // Knight regains the pawn on a square nothing attacks: no recapture, so
    // no sacrifice even though the knight outvalues the pawn.
    let mut pos = Position::startpos();
    for mv in ["e2e4", "d7d5", "b1c3", "d5e4"] {
        pos.push(mv);
    }
    let board = board_for(&pos).unwrap();
    let tags = tags_for(&board, "c3e4");
    assert!(tags.capture);
    assert!(!tags.sacrifice);
}

#[test]
fn test_promotion_tag() {
    let board = board("8/P6k/8/8/8/8/8/K7 w - - 0 1");
    let tags = tags_for(&board, "a7a8q");
    assert!(tags.promotion);
    assert!(!tags.capture);
    assert!(!tags.check);
}

#[test]
fn test_castling_notation_is_normalized() {
    let board = board("r1bqk1nr/pppp1ppp/2n5/2b1p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4");
    // Engine-style "e1g1" must resolve to the library's king-takes-rook
    // encoding.
    let mv = find_move(&board, "e1g1").unwrap();
    assert_eq!(mv.to_string(), "e1h1");
    let tags = tags_for(&board, "e1g1");
    assert!(tags.quiet());
}

#[test]
fn test_unknown_move_gets_default_tags() {
    let board = board(arbiter_core::STARTPOS_FEN);
    assert!(find_move(&board, "e2e5").is_none());
    assert!(tags_for(&board, "e2e5").quiet());
}

#[test]
fn test_board_for_rejects_bad_history() {
    // Caller input errors, distinct from engine failures: retrying the
    // engine cannot fix them.
    let mut pos = Position::startpos();
    pos.push("e2e5");
    let err = board_for(&pos).unwrap_err();
    assert!(matches!(err, ArbiterError::InvalidPosition(_)));

    let bad_fen = Position::from_fen("not a fen");
    let err = board_for(&bad_fen).unwrap_err();
    assert!(matches!(err, ArbiterError::InvalidPosition(_)));
}
