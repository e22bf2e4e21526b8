//! Knight mobility and outpost evaluation (spec.md §4.3).

use crate::attacks;
use crate::bitboard::BitboardExt;
use crate::board::{Board, Color, Piece};
use crate::square::Square;

const OUTPOST_BONUS: i32 = 30;
/// Flat multiplier applied to the per-square mobility table value (corner
/// = 2 squares, rim = 3 or 4, second ring = 6, central 4x4 = 8).
const MOBILITY_WEIGHT: i32 = 4;

/// White-minus-Black knight score: mobility weighted by reachable-square
/// count, plus an outpost bonus for knights on a pawn-defended square the
/// enemy can never challenge with a pawn.
pub fn evaluate_knights(board: &Board) -> i32 {
    evaluate_side(board, Color::White) - evaluate_side(board, Color::Black)
}

fn evaluate_side(board: &Board, color: Color) -> i32 {
    let mut score = 0;
    let mut knights = board.pieces(Piece::Knight, color);

    while knights != 0 {
        let idx = knights.pop_lsb();
        let sq = Square::from_index(idx);

        let table_value = attacks::knight_attacks(idx as usize).count_ones() as i32;
        score += MOBILITY_WEIGHT * table_value;

        if is_outpost(board, sq, color) {
            score += OUTPOST_BONUS;
        }
    }

    score
}

/// A knight is an outpost if it is defended by one of its own pawns and no
/// enemy pawn on an adjacent file can ever advance to attack it.
fn is_outpost(board: &Board, sq: Square, color: Color) -> bool {
    let file = sq.file() as i32;
    let rank = sq.rank() as i32;

    let own_pawns = board.pieces(Piece::Pawn, color);
    let support_rank = match color {
        Color::White => rank - 1,
        Color::Black => rank + 1,
    };
    if !(0..8).contains(&support_rank) {
        return false;
    }
    let mut support = 0u64;
    if file > 0 {
        support |= 1u64 << (support_rank * 8 + (file - 1));
    }
    if file < 7 {
        support |= 1u64 << (support_rank * 8 + (file + 1));
    }
    if own_pawns & support == 0 {
        return false;
    }

    let enemy_pawns = board.pieces(Piece::Pawn, color.opposite());
    let mut guard_files = attacks::file_mask(file as u8);
    if file > 0 {
        guard_files |= attacks::file_mask((file - 1) as u8);
    }
    if file < 7 {
        guard_files |= attacks::file_mask((file + 1) as u8);
    }
    let ahead_ranks: u64 = match color {
        Color::White => (rank + 1..8).map(|r| attacks::rank_mask(r as u8)).fold(0, |a, b| a | b),
        Color::Black => (0..rank).map(|r| attacks::rank_mask(r as u8)).fold(0, |a, b| a | b),
    };

    (enemy_pawns & guard_files & ahead_ranks) == 0
}
