//! Rook file control, rank penetration, mobility and connection (spec.md §4.5).

use crate::attacks;
use crate::bitboard::BitboardExt;
use crate::board::{Board, Color, Piece};
use crate::square::Square;

const OPEN_FILE_BONUS: i32 = 20;
const SEMI_OPEN_FILE_BONUS: i32 = 10;
const SEVENTH_RANK_BONUS: i32 = 25;
const BACK_RANK_MOBILITY_TABLE_VALUE: i32 = 12;
const INTERIOR_MOBILITY_TABLE_VALUE: i32 = 14;
const MOBILITY_MULTIPLIER: i32 = 2;
const CONNECTED_ROOKS_BONUS: i32 = 8;

/// White-minus-Black rook score.
pub fn evaluate_rooks(board: &Board) -> i32 {
    evaluate_side(board, Color::White) - evaluate_side(board, Color::Black)
}

fn evaluate_side(board: &Board, color: Color) -> i32 {
    let mut score = 0;
    let occ = board.occupied();
    let own_pawns = board.pieces(Piece::Pawn, color);
    let enemy_pawns = board.pieces(Piece::Pawn, color.opposite());

    let back_rank = match color {
        Color::White => 0,
        Color::Black => 7,
    };
    let penetration_rank = match color {
        Color::White => 6,
        Color::Black => 1,
    };

    let mut rooks = board.pieces(Piece::Rook, color);
    let rook_squares: Vec<Square> = {
        let mut v = Vec::new();
        let mut copy = rooks;
        while copy != 0 {
            v.push(Square::from_index(copy.pop_lsb()));
        }
        v
    };

    while rooks != 0 {
        let idx = rooks.pop_lsb();
        let sq = Square::from_index(idx);
        let file = sq.file();

        let file_mask = attacks::file_mask(file);
        let own_pawns_on_file = own_pawns & file_mask != 0;
        let enemy_pawns_on_file = enemy_pawns & file_mask != 0;
        if !own_pawns_on_file && !enemy_pawns_on_file {
            score += OPEN_FILE_BONUS;
        } else if !own_pawns_on_file {
            score += SEMI_OPEN_FILE_BONUS;
        }

        if sq.rank() == penetration_rank {
            score += SEVENTH_RANK_BONUS;
        }

        let table_value = if sq.rank() == back_rank {
            BACK_RANK_MOBILITY_TABLE_VALUE
        } else {
            INTERIOR_MOBILITY_TABLE_VALUE
        };
        score += table_value * MOBILITY_MULTIPLIER;
    }

    if rook_squares.len() == 2 {
        let a = rook_squares[0];
        let b = rook_squares[1];
        if (a.file() == b.file() || a.rank() == b.rank())
            && attacks::between(a, b) & occ == 0
        {
            score += CONNECTED_ROOKS_BONUS;
        }
    }

    score
}
