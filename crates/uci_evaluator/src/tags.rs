//! Move-tag derivation with cozy-chess.
//!
//! The engine only reports moves and scores; whether a move is a capture,
//! check, promotion, or sacrifice is derived here by replaying it on a
//! board. cozy-chess encodes castling as king-takes-rook ("e1h1"), so
//! engine-style castling UCI ("e1g1") is normalized during lookup.

use cozy_chess::{Board, Color, Move, Piece, Square};

use arbiter_core::{ArbiterError, MoveTags, Position};

/// Material a piece is worth when judging sacrifices, in centipawns.
fn piece_value(piece: Piece) -> i32 {
    match piece {
        Piece::Pawn => 100,
        Piece::Knight => 320,
        Piece::Bishop => 330,
        Piece::Rook => 500,
        Piece::Queen => 900,
        Piece::King => 20_000,
    }
}

/// Offering at least this much net material with an immediate recapture
/// available counts as a sacrifice.
const SACRIFICE_THRESHOLD: i32 = 200;

/// Build the board a [`Position`] describes by replaying its move list.
pub fn board_for(position: &Position) -> Result<Board, ArbiterError> {
    let mut board = Board::from_fen(&position.fen, false).map_err(|e| {
        ArbiterError::InvalidPosition(format!("bad FEN '{}': {}", position.fen, e))
    })?;
    for uci in &position.moves {
        let mv = find_move(&board, uci).ok_or_else(|| {
            ArbiterError::InvalidPosition(format!("illegal move '{}' in history", uci))
        })?;
        board.play(mv);
    }
    Ok(board)
}

fn legal_moves(board: &Board) -> Vec<Move> {
    let mut v = Vec::new();
    board.generate_moves(|ml| {
        for m in ml {
            v.push(m);
        }
        false
    });
    v
}

fn piece_at(board: &Board, sq: Square) -> Option<(Color, Piece)> {
    let color = if board.colors(Color::White).has(sq) {
        Color::White
    } else if board.colors(Color::Black).has(sq) {
        Color::Black
    } else {
        return None;
    };
    board.piece_on(sq).map(|p| (color, p))
}

/// Look up a legal move by its engine UCI string. Falls back to the
/// king-takes-rook encoding for standard castling notation.
pub fn find_move(board: &Board, uci: &str) -> Option<Move> {
    let moves = legal_moves(board);
    if let Some(&mv) = moves.iter().find(|m| m.to_string() == uci) {
        return Some(mv);
    }
    let castled = match uci {
        "e1g1" => "e1h1",
        "e1c1" => "e1a1",
        "e8g8" => "e8h8",
        "e8c8" => "e8a8",
        _ => return None,
    };
    moves.iter().find(|m| m.to_string() == castled).copied()
}

/// Capture detection including en passant (a legal diagonal pawn move to an
/// empty square).
fn is_capture(board: &Board, mv: Move) -> bool {
    let stm = board.side_to_move();
    if let Some((color, _)) = piece_at(board, mv.to) {
        return color != stm;
    }
    if let Some((_, Piece::Pawn)) = piece_at(board, mv.from) {
        return mv.from.file() != mv.to.file();
    }
    false
}

/// True when the mover offers net material the opponent can take right back
/// on the destination square.
fn is_sacrifice(board: &Board, mv: Move) -> bool {
    let Some((_, moving)) = piece_at(board, mv.from) else {
        return false;
    };
    let captured_value = piece_at(board, mv.to).map_or(0, |(_, p)| piece_value(p));
    let offered = piece_value(moving) - captured_value;
    if offered < SACRIFICE_THRESHOLD {
        return false;
    }
    let mut next = board.clone();
    next.play(mv);
    legal_moves(&next).iter().any(|reply| reply.to == mv.to)
}

/// Derive the tags for one engine move in `board`'s position.
///
/// Unknown moves get default (quiet) tags rather than failing the turn; tag
/// quality degrades, arbitration still works.
pub fn tags_for(board: &Board, uci: &str) -> MoveTags {
    let Some(mv) = find_move(board, uci) else {
        return MoveTags::default();
    };

    let capture = is_capture(board, mv);
    let sacrifice = is_sacrifice(board, mv);
    let promotion = mv.promotion.is_some();

    let mut next = board.clone();
    next.play(mv);
    let check = !next.checkers().is_empty();

    MoveTags {
        capture,
        check,
        sacrifice,
        promotion,
    }
}

#[cfg(test)]
#[path = "tags_tests.rs"]
mod tags_tests;
