pub mod attacks;
pub mod bitboard;
pub mod board;
pub mod eval;
#[cfg(feature = "cli")]
pub mod logger;
pub mod see;
pub mod square;
pub mod utils;

pub use board::{Board, Color, Piece};
pub use eval::{evaluate, pawn_hash_init, piece_value};
pub use see::see;
