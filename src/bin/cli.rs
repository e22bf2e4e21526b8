use citadel_eval::board::Board;
use citadel_eval::square::Square;
use citadel_eval::{eval, see};
use std::env;
use std::str::FromStr;

fn usage() -> ! {
    eprintln!("usage: citadel-eval eval <fen>");
    eprintln!("       citadel-eval see <fen> <from> <to>");
    std::process::exit(2);
}

fn main() {
    citadel_eval::logger::init_logging("logs/citadel-eval.log", "citadel_eval=info");
    eval::pawn_hash_init();

    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("eval") => {
            let Some(fen) = args.get(1) else { usage() };
            let board = Board::from_str(fen).unwrap_or_else(|e| {
                eprintln!("invalid FEN: {e}");
                std::process::exit(1);
            });
            println!("{}", eval::evaluate(&board));
        }
        Some("see") => {
            let (Some(fen), Some(from), Some(to)) = (args.get(1), args.get(2), args.get(3)) else {
                usage()
            };
            let board = Board::from_str(fen).unwrap_or_else(|e| {
                eprintln!("invalid FEN: {e}");
                std::process::exit(1);
            });
            let from = Square::from_str(from).unwrap_or_else(|e| {
                eprintln!("invalid square: {e}");
                std::process::exit(1);
            });
            let to = Square::from_str(to).unwrap_or_else(|e| {
                eprintln!("invalid square: {e}");
                std::process::exit(1);
            });
            println!("{}", see::see(&board, from, to));
        }
        _ => usage(),
    }
}
