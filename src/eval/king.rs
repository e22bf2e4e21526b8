//! King safety (middlegame) and centralization (endgame) (spec.md §4.7).

use crate::attacks;
use crate::board::{Board, Color, Piece, ALL_PIECES};

/// Below this total non-king piece count the position is scored as an
/// endgame: king safety stops mattering and centralization takes over.
const ENDGAME_PIECE_THRESHOLD: u32 = 14;

const CASTLED_BONUS: i32 = 15;
const UNCASTLED_BACK_RANK_PENALTY: i32 = -10;
const OPEN_FILE_PENALTY: i32 = -20;
const SHIELD_DIRECT_BONUS: i32 = 10;
const SHIELD_OUTER_BONUS: i32 = 10;
const SHIELD_INNER_BONUS: i32 = 5;
const CENTRALIZATION_SCALE: f64 = 3.0;

/// White-minus-Black king term. Boards the evaluator is handed always carry
/// both kings in real play; isolated-component test positions sometimes
/// don't, so a missing king simply contributes 0 for that side rather than
/// panicking (unlike `Board::king_square`, which is the right choice for
/// collaborators that assume a legal, complete position).
pub fn evaluate_kings(board: &Board) -> i32 {
    let endgame = total_piece_count(board) < ENDGAME_PIECE_THRESHOLD;
    let mut score = 0;
    for &color in &[Color::White, Color::Black] {
        let sign = if color == Color::White { 1 } else { -1 };
        if board.pieces(Piece::King, color) == 0 {
            continue;
        }
        score += sign
            * if endgame {
                centralization(board, color)
            } else {
                safety(board, color)
            };
    }
    score
}

fn total_piece_count(board: &Board) -> u32 {
    let mut count = 0;
    for &color in &[Color::White, Color::Black] {
        for &piece in &ALL_PIECES {
            count += board.pieces(piece, color).count_ones();
        }
    }
    count
}

/// `int((7 - Δ) * 3)` where Δ = |file − 3.5| + |rank − 3.5|.
fn centralization(board: &Board, color: Color) -> i32 {
    let sq = board.king_square(color);
    let (file, rank) = (sq.file() as f64, sq.rank() as f64);

    let delta = (file - 3.5).abs() + (rank - 3.5).abs();

    ((7.0 - delta) * CENTRALIZATION_SCALE) as i32
}

fn safety(board: &Board, color: Color) -> i32 {
    let mut score = 0;
    let sq = board.king_square(color);
    let file = sq.file() as i32;
    let back_rank = match color {
        Color::White => 0,
        Color::Black => 7,
    };

    let castled_squares: [&str; 2] = match color {
        Color::White => ["g1", "c1"],
        Color::Black => ["g8", "c8"],
    };
    let is_castled = castled_squares.iter().any(|s| sq.to_string() == *s);

    let king_side_rights = match color {
        Color::White => crate::board::CASTLE_WK,
        Color::Black => crate::board::CASTLE_BK,
    };
    let queen_side_rights = match color {
        Color::White => crate::board::CASTLE_WQ,
        Color::Black => crate::board::CASTLE_BQ,
    };
    let can_still_castle =
        board.has_castling(king_side_rights) || board.has_castling(queen_side_rights);

    let own_pawns = board.pieces(Piece::Pawn, color);
    let enemy_pawns = board.pieces(Piece::Pawn, color.opposite());

    if is_castled {
        score += CASTLED_BONUS;

        // Kingside castling (g-file) pushes the "outer" shield file toward
        // h; queenside (c-file) pushes it toward b. The file on the other
        // side, toward the center, is the "inner" file.
        let outer_file = if file == 6 { file + 1 } else { file - 1 };
        let inner_file = if file == 6 { file - 1 } else { file + 1 };

        let shield_rank = match color {
            Color::White => sq.rank() as i32 + 1,
            Color::Black => sq.rank() as i32 - 1,
        };

        if (0..8).contains(&shield_rank) {
            if own_pawns & (1u64 << (shield_rank * 8 + file)) != 0 {
                score += SHIELD_DIRECT_BONUS;
            }
            if (0..8).contains(&outer_file)
                && own_pawns & (1u64 << (shield_rank * 8 + outer_file)) != 0
            {
                score += SHIELD_OUTER_BONUS;
            }
            if (0..8).contains(&inner_file)
                && own_pawns & (1u64 << (shield_rank * 8 + inner_file)) != 0
            {
                score += SHIELD_INNER_BONUS;
            }
        }
    } else if sq.rank() as i32 == back_rank && !can_still_castle {
        score += UNCASTLED_BACK_RANK_PENALTY;
    }

    for df in -1..=1 {
        let f = file + df;
        if !(0..8).contains(&f) {
            continue;
        }
        let fm = attacks::file_mask(f as u8);
        if (own_pawns | enemy_pawns) & fm == 0 {
            score += OPEN_FILE_PENALTY;
        }
    }

    score
}
