use super::castle_bits::{CASTLE_BK, CASTLE_BQ, CASTLE_WK, CASTLE_WQ};
use super::{Board, Color, Piece};
use crate::square::Square;
use std::str::FromStr;

fn piece_char(piece: Piece, color: Color) -> char {
    let c = match piece {
        Piece::Pawn => 'p',
        Piece::Knight => 'n',
        Piece::Bishop => 'b',
        Piece::Rook => 'r',
        Piece::Queen => 'q',
        Piece::King => 'k',
    };
    if color == Color::White {
        c.to_ascii_uppercase()
    } else {
        c
    }
}

fn char_to_piece(c: char) -> Result<(Color, Piece), String> {
    let color = if c.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let piece = match c.to_ascii_lowercase() {
        'p' => Piece::Pawn,
        'n' => Piece::Knight,
        'b' => Piece::Bishop,
        'r' => Piece::Rook,
        'q' => Piece::Queen,
        'k' => Piece::King,
        other => return Err(format!("invalid piece char `{other}` in FEN")),
    };
    Ok((color, piece))
}

/// Parses `fen` into `board`, overwriting all fields. Accepts the standard
/// six-field FEN; the last two (halfmove clock, fullmove number) default to
/// 0 and 1 when missing, matching how hand-written test positions are often
/// trimmed.
pub fn set_fen(board: &mut Board, fen: &str) -> Result<(), String> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() < 4 {
        return Err(format!("FEN `{fen}` has fewer than 4 fields"));
    }

    *board = Board::new_empty();

    // 1. Piece placement, ranks 8 down to 1.
    let mut rank = 7i32;
    let mut file = 0i32;
    for c in fields[0].chars() {
        match c {
            '/' => {
                if file != 8 {
                    return Err(format!("rank in FEN `{fen}` does not have 8 files"));
                }
                rank -= 1;
                file = 0;
            }
            d if d.is_ascii_digit() => {
                file += d.to_digit(10).unwrap() as i32;
            }
            c => {
                if !(0..8).contains(&rank) || !(0..8).contains(&file) {
                    return Err(format!("piece placement overruns the board in `{fen}`"));
                }
                let (color, piece) = char_to_piece(c)?;
                let sq = Square::make(file as u8, rank as u8);
                let mut bb = board.bb(color, piece);
                bb |= 1u64 << sq.index();
                board.set_bb(color, piece, bb);
                file += 1;
            }
        }
    }

    // 2. Side to move.
    board.side_to_move = match fields[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => return Err(format!("invalid side-to-move field `{other}`")),
    };

    // 3. Castling rights.
    let mut rights = 0u8;
    if fields[2] != "-" {
        for c in fields[2].chars() {
            rights |= match c {
                'K' => CASTLE_WK,
                'Q' => CASTLE_WQ,
                'k' => CASTLE_BK,
                'q' => CASTLE_BQ,
                other => return Err(format!("invalid castling char `{other}`")),
            };
        }
    }
    board.castling_rights = rights;

    // 4. En passant target.
    board.en_passant = if fields[3] == "-" {
        None
    } else {
        Some(Square::from_str(fields[3])?)
    };

    // 5 & 6. Clocks, optional.
    board.halfmove_clock = fields.get(4).and_then(|s| s.parse().ok()).unwrap_or(0);
    board.fullmove_number = fields.get(5).and_then(|s| s.parse().ok()).unwrap_or(1);

    board.validate()?;
    board.refresh_pawn_hash();
    Ok(())
}

pub fn to_fen(board: &Board) -> String {
    let mut out = String::new();

    for rank in (0..8).rev() {
        let mut empty_run = 0;
        for file in 0..8 {
            let sq = Square::make(file, rank);
            match board.piece_at(sq) {
                None => empty_run += 1,
                Some((color, piece)) => {
                    if empty_run > 0 {
                        out.push_str(&empty_run.to_string());
                        empty_run = 0;
                    }
                    out.push(piece_char(piece, color));
                }
            }
        }
        if empty_run > 0 {
            out.push_str(&empty_run.to_string());
        }
        if rank > 0 {
            out.push('/');
        }
    }

    out.push(' ');
    out.push(if board.side_to_move == Color::White {
        'w'
    } else {
        'b'
    });

    out.push(' ');
    if board.castling_rights == 0 {
        out.push('-');
    } else {
        if board.has_castling(CASTLE_WK) {
            out.push('K');
        }
        if board.has_castling(CASTLE_WQ) {
            out.push('Q');
        }
        if board.has_castling(CASTLE_BK) {
            out.push('k');
        }
        if board.has_castling(CASTLE_BQ) {
            out.push('q');
        }
    }

    out.push(' ');
    match board.en_passant {
        Some(sq) => out.push_str(&sq.to_string()),
        None => out.push('-'),
    }

    out.push(' ');
    out.push_str(&board.halfmove_clock.to_string());
    out.push(' ');
    out.push_str(&board.fullmove_number.to_string());

    out
}
