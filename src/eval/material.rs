//! Material values and piece-square tables (spec.md §4.1).
//!
//! Tables are defined from White's point of view on ranks 0..7 (index 0 =
//! rank 1); Black's bonus at a given (rank, file) is the negation of
//! White's bonus at the rank-mirrored square, per spec.md.

use crate::board::{Board, Color, Piece, ALL_PIECES};
use crate::bitboard::BitboardExt;
use crate::square::Square;

/// pawn, knight, bishop, rook, queen, king (material sum convention: king = 0).
pub const MATERIAL_VALUE: [i32; 6] = [100, 320, 330, 500, 900, 0];

#[rustfmt::skip]
const PAWN_PST: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10,-20,-20, 10, 10,  5,
     5, -5,-10,  0,  0,-10, -5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5,  5, 10, 25, 25, 10,  5,  5,
    10, 10, 20, 30, 30, 20, 10, 10,
    50, 50, 50, 50, 50, 50, 50, 50,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_PST: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP_PST: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK_PST: [i32; 64] = [
     0,  0,  0,  5,  5,  0,  0,  0,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     5, 10, 10, 10, 10, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_PST: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -10,  5,  5,  5,  5,  5,  0,-10,
      0,  0,  5,  5,  5,  5,  0, -5,
     -5,  0,  5,  5,  5,  5,  0, -5,
    -10,  0,  5,  5,  5,  5,  0,-10,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const KING_PST: [i32; 64] = [
     20, 30, 10,  0,  0, 10, 30, 20,
     20, 20,  0,  0,  0,  0, 20, 20,
    -10,-20,-20,-20,-20,-20,-20,-10,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
];

fn pst_table(piece: Piece) -> &'static [i32; 64] {
    match piece {
        Piece::Pawn => &PAWN_PST,
        Piece::Knight => &KNIGHT_PST,
        Piece::Bishop => &BISHOP_PST,
        Piece::Rook => &ROOK_PST,
        Piece::Queen => &QUEEN_PST,
        Piece::King => &KING_PST,
    }
}

/// Signed material value of `piece` for the material-sum convention (king = 0).
#[inline(always)]
pub fn material_value(piece: Piece) -> i32 {
    MATERIAL_VALUE[piece as usize]
}

/// Signed PST bonus for `piece` of `color` sitting on `sq`.
pub fn pst_value(piece: Piece, color: Color, sq: Square) -> i32 {
    let table = pst_table(piece);
    match color {
        Color::White => table[sq.index() as usize],
        Color::Black => {
            let mirrored = (7 - sq.rank()) * 8 + sq.file();
            -table[mirrored as usize]
        }
    }
}

/// spec.md §4.1: sum over all occupied squares of (signed piece value +
/// signed PST bonus), White minus Black. Pure function of board contents —
/// recomputed by scanning rather than consuming an incremental accumulator
/// (see DESIGN.md's Open Question resolution).
pub fn material_plus_pst(board: &Board) -> i32 {
    let mut score = 0;
    for &color in &[Color::White, Color::Black] {
        let sign = if color == Color::White { 1 } else { -1 };
        for &piece in &ALL_PIECES {
            let mut bb = board.pieces(piece, color);
            while bb != 0 {
                let sq = Square::from_index(bb.pop_lsb());
                score += sign * material_value(piece);
                #[cfg(feature = "psqt")]
                {
                    score += pst_value(piece, color, sq);
                }
                #[cfg(not(feature = "psqt"))]
                {
                    let _ = sq;
                }
            }
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn startpos_material_and_pst_is_zero() {
        let b = Board::from_str("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
        assert_eq!(material_plus_pst(&b), 0);
    }

    #[test]
    fn knight_on_d5_scores_material_plus_pst_twenty() {
        let b = Board::from_str("8/8/8/3N4/8/8/8/8 w - - 0 1").unwrap();
        assert_eq!(material_plus_pst(&b), 320 + 20);
    }

    #[test]
    fn color_mirror_negates_material_and_pst() {
        let white = Board::from_str("7k/8/8/8/8/8/P7/7K w - - 0 1").unwrap();
        let black = Board::from_str("7k/p7/8/8/8/8/8/7K b - - 0 1").unwrap();
        assert_eq!(material_plus_pst(&white), -material_plus_pst(&black));
    }
}
