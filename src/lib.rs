//! A library for arranging pieces on a chessboard and converting the
//! arrangement from and to Forsyth-Edwards Notation.
//!
//! # Examples
//!
//! Load a position, edit it and export it:
//!
//! ```
//! use fenboard::{editor::Editor, Board, Color, Square};
//!
//! let mut editor = Editor::new(Board::empty());
//! editor.load("4k3/8/8/8/8/8/8/4K3 w - - 0 1")?;
//!
//! editor.place(Square::D1, Color::White.queen());
//! editor.begin_drag(Square::E8);
//! editor.drop_onto(Square::F8);
//!
//! assert_eq!(editor.export().to_string(), "5k2/8/8/8/8/8/8/3QK3 w KQkq - 0 1");
//! # Ok::<_, fenboard::fen::MalformedFen>(())
//! ```
//!
//! Work with boards directly:
//!
//! ```
//! use fenboard::{fen, Board, Square};
//!
//! let board = fen::decode(fen::STARTING_FEN)?;
//! assert_eq!(board, Board::new());
//! assert_eq!(board.piece_at(Square::E4), None);
//! # Ok::<_, fenboard::fen::MalformedFen>(())
//! ```
//!
//! There are no chess rules here: any arrangement of up to 64 pieces is a
//! valid board.
//!
//! # Feature flags
//!
//! * `alloc`: Enables APIs which require the
//!   [`alloc`](https://doc.rust-lang.org/stable/alloc/index.html) crate
//!   (e.g. [`fen::encode()`]).
//! * `std`: Implies `alloc`. Enabled by default.
//!   For `no_std` environments, this must be disabled with `default-features = false`.
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html) for
//!   types with unique natural representations.
//! * `arbitrary`: Implements
//!   [`arbitrary::Arbitrary`](https://docs.rs/arbitrary/1/arbitrary/trait.Arbitrary.html)
//!   for vocabulary types, for fuzzing.
//! * `nohash-hasher`: Implements
//!   [`nohash_hasher::IsEnabled`](https://docs.rs/nohash-hasher/0.2/nohash_hasher/trait.IsEnabled.html)
//!   for sensible types.
//! * `cli`: Builds the `fenboard` command line tool.

#![no_std]
#![doc(html_root_url = "https://docs.rs/fenboard/0.1.0")]
#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod color;
mod role;
mod square;
mod types;

pub mod board;
pub mod editor;
pub mod fen;

pub use board::Board;
pub use color::Color;
pub use role::Role;
pub use square::{File, ParseSquareError, Rank, Square};
pub use types::{ParsePieceError, Piece};

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Board {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Board> {
        let mut board = Board::empty();
        for sq in Square::ALL {
            if let Some(piece) = u.arbitrary::<Option<Piece>>()? {
                board.set_piece_at(sq, piece);
            }
        }
        Ok(board)
    }
}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for File {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Rank {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Square {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Role {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Color {}
