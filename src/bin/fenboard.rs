//! Command line chessboard editor.
//!
//! ```text
//! $ fenboard --empty K@e1 k@e8 Q@d1 e8f8 --board
//! ```

use std::process::ExitCode;

use clap::Parser;
use fenboard::{
    editor::{Edit, Editor},
    fen::MalformedFen,
    Board, File, Rank, Square,
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about = "Arrange pieces on a chessboard and export the FEN")]
struct Opt {
    /// Position to start from, instead of the starting position
    #[arg(long, conflicts_with = "empty")]
    fen: Option<String>,
    /// Start from an empty board
    #[arg(long)]
    empty: bool,
    /// Print a diagram of the final board before the FEN
    #[arg(long)]
    board: bool,
    /// Draw chess symbols in the diagram
    #[arg(long, requires = "board")]
    unicode: bool,
    /// Edits applied in order: `Q@e4` places a piece, `e2e4` drags,
    /// `.@e2` removes, `e2..` drags a piece off the board
    edits: Vec<Edit>,
}

fn diagram(board: &Board, unicode: bool) -> String {
    let mut out = String::new();
    for rank in Rank::ALL.into_iter().rev() {
        out.push(rank.char());
        for file in File::ALL {
            out.push(' ');
            out.push(
                match board.piece_at(Square::from_coords(file, rank)) {
                    Some(piece) if unicode => piece.glyph(),
                    Some(piece) => piece.char(),
                    None => '.',
                },
            );
        }
        out.push('\n');
    }
    out.push(' ');
    for file in File::ALL {
        out.push(' ');
        out.push(file.char());
    }
    out
}

/// Builds the board described by the options and renders what gets
/// printed.
fn run(opt: Opt) -> Result<String, MalformedFen> {
    let mut editor = Editor::new(if opt.empty {
        Board::empty()
    } else {
        Board::new()
    });

    if let Some(fen) = opt.fen {
        editor.load(&fen)?;
    }

    for edit in opt.edits {
        if !editor.apply(edit) {
            warn!(%edit, "edit did not change the board");
        }
    }

    let mut out = String::new();
    if opt.board {
        out.push_str(&diagram(editor.board(), opt.unicode));
        out.push_str("\n\n");
    }
    out.push_str(&editor.export().to_string());
    Ok(out)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Opt::parse()) {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("fenboard: {err}");
            ExitCode::FAILURE
        }
    }
}
