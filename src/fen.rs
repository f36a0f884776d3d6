// This file is part of the fenboard library.
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! Parse and write Forsyth-Edwards-Notation.
//!
//! Only the piece placement is read from a FEN. The remaining fields (side
//! to move, castling rights, en passant square and move counters) are
//! ignored when parsing, and always written as `w KQkq - 0 1`.
//!
//! # Examples
//!
//! Parse a FEN:
//!
//! ```
//! use fenboard::{fen::Fen, Color, Square};
//!
//! let fen: Fen = "8/8/8/8/8/8/8/4K3 b - - 12 40".parse()?;
//! let board = fen.into_board();
//! assert_eq!(board.piece_at(Square::E1), Some(Color::White.king()));
//! # Ok::<_, fenboard::fen::MalformedFen>(())
//! ```
//!
//! Write a FEN:
//!
//! ```
//! use fenboard::{fen::Fen, Board};
//!
//! let fen = Fen::from(Board::new());
//! assert_eq!(
//!     fen.to_string(),
//!     "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
//! );
//! ```

#[cfg(feature = "alloc")]
use alloc::string::{String, ToString as _};
use core::{
    error::Error,
    fmt::{self, Display, Write as _},
    str::FromStr,
};

use crate::{
    board::Board,
    square::{File, Rank, Square},
    types::Piece,
};

/// FEN of the standard chess starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Fields written after the placement. Side to move, castling rights,
/// en passant square and move counters are not tracked.
const FIXED_FIELDS: &str = "w KQkq - 0 1";

/// Error when parsing a malformed FEN.
///
/// Rows are counted in FEN order, so row 0 is the eighth rank.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MalformedFen {
    /// There is no placement field at all.
    Empty,
    /// The placement does not consist of exactly 8 `/`-separated ranks.
    RankCount {
        #[allow(missing_docs)]
        ranks: usize,
    },
    /// A rank describes fewer than 8 squares.
    RankWidth {
        #[allow(missing_docs)]
        row: u32,
        #[allow(missing_docs)]
        width: u32,
    },
    /// A rank describes more than 8 squares.
    RankOverflow {
        #[allow(missing_docs)]
        row: u32,
    },
    /// A run of empty squares is `0` or `9`.
    InvalidDigit {
        #[allow(missing_docs)]
        row: u32,
        #[allow(missing_docs)]
        digit: char,
    },
    /// A byte is neither a digit nor one of the 12 piece letters.
    InvalidChar {
        #[allow(missing_docs)]
        row: u32,
        #[allow(missing_docs)]
        byte: u8,
    },
}

impl fmt::Display for MalformedFen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            MalformedFen::Empty => f.write_str("malformed fen: empty"),
            MalformedFen::RankCount { ranks } => {
                write!(f, "malformed fen: expected 8 ranks, got {ranks}")
            }
            MalformedFen::RankWidth { row, width } => write!(
                f,
                "malformed fen: rank in row {row} describes {width} squares, expected 8"
            ),
            MalformedFen::RankOverflow { row } => write!(
                f,
                "malformed fen: rank in row {row} describes more than 8 squares"
            ),
            MalformedFen::InvalidDigit { row, digit } => {
                write!(f, "malformed fen: invalid digit {digit} in row {row}")
            }
            MalformedFen::InvalidChar { row, byte } if byte.is_ascii() => write!(
                f,
                "malformed fen: invalid character {:?} in row {row}",
                char::from(byte)
            ),
            MalformedFen::InvalidChar { row, byte } => {
                write!(f, "malformed fen: invalid byte 0x{byte:02x} in row {row}")
            }
        }
    }
}

impl Error for MalformedFen {}

impl Board {
    /// Parses the placement field of a FEN, such as
    /// `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedFen`] unless the input consists of exactly 8
    /// ranks that each describe exactly 8 squares, using piece letters and
    /// the digits `1` to `8`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fenboard::{fen::MalformedFen, Board, Color, Square};
    ///
    /// let board = Board::from_ascii_board_fen(b"4k3/8/8/8/8/8/8/4K3")?;
    /// assert_eq!(board.piece_at(Square::E8), Some(Color::Black.king()));
    ///
    /// assert_eq!(
    ///     Board::from_ascii_board_fen(b"8/8/8/8"),
    ///     Err(MalformedFen::RankCount { ranks: 4 })
    /// );
    /// # Ok::<_, MalformedFen>(())
    /// ```
    pub fn from_ascii_board_fen(board_fen: &[u8]) -> Result<Board, MalformedFen> {
        if board_fen.is_empty() {
            return Err(MalformedFen::Empty);
        }

        let ranks = board_fen.split(|&ch| ch == b'/').count();
        if ranks != 8 {
            return Err(MalformedFen::RankCount { ranks });
        }

        let mut board = Board::empty();

        for (rank, rank_fen) in Rank::ALL
            .into_iter()
            .rev()
            .zip(board_fen.split(|&ch| ch == b'/'))
        {
            let row = rank.row();
            let mut column = 0;

            for &ch in rank_fen {
                match ch {
                    b'1'..=b'8' => {
                        column += u32::from(ch - b'0');
                        if column > 8 {
                            return Err(MalformedFen::RankOverflow { row });
                        }
                    }
                    b'0' | b'9' => {
                        return Err(MalformedFen::InvalidDigit {
                            row,
                            digit: char::from(ch),
                        })
                    }
                    _ => {
                        let piece = Piece::from_char(char::from(ch))
                            .ok_or(MalformedFen::InvalidChar { row, byte: ch })?;
                        if column >= 8 {
                            return Err(MalformedFen::RankOverflow { row });
                        }
                        board.set_piece_at(Square::from_coords(File::new(column), rank), piece);
                        column += 1;
                    }
                }
            }

            if column < 8 {
                return Err(MalformedFen::RankWidth { row, width: column });
            }
        }

        Ok(board)
    }

    /// Gets the placement field of the board's FEN, for display.
    ///
    /// # Examples
    ///
    /// ```
    /// use fenboard::{Board, Color, Square};
    ///
    /// let mut board = Board::empty();
    /// board.set_piece_at(Square::E8, Color::White.king());
    /// assert_eq!(board.board_fen().to_string(), "4K3/8/8/8/8/8/8/8");
    /// ```
    pub fn board_fen(&self) -> BoardFen<'_> {
        BoardFen { board: self }
    }
}

/// Displays the placement field of a FEN. See [`Board::board_fen()`].
#[derive(Debug)]
pub struct BoardFen<'b> {
    board: &'b Board,
}

impl Display for BoardFen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn flush(f: &mut fmt::Formatter<'_>, empty: &mut u8) -> fmt::Result {
            if *empty > 0 {
                f.write_char(char::from(b'0' + *empty))?;
                *empty = 0;
            }
            Ok(())
        }

        for rank in Rank::ALL.into_iter().rev() {
            let mut empty = 0;

            for file in File::ALL {
                match self.board.piece_at(Square::from_coords(file, rank)) {
                    Some(piece) => {
                        flush(f, &mut empty)?;
                        f.write_char(piece.char())?;
                    }
                    None => empty += 1,
                }
            }

            flush(f, &mut empty)?;

            if rank > Rank::First {
                f.write_char('/')?;
            }
        }

        Ok(())
    }
}

/// A parsed FEN.
///
/// Wraps the [`Board`] described by the placement field. Displays as a
/// complete FEN with fixed trailing fields.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Default)]
pub struct Fen(pub Board);

impl Fen {
    /// Parses a FEN. Only the first whitespace-separated field is
    /// considered.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedFen::Empty`] if the input is blank, or any error
    /// from [`Board::from_ascii_board_fen()`].
    pub fn from_ascii(fen: &[u8]) -> Result<Fen, MalformedFen> {
        let placement = fen
            .split(u8::is_ascii_whitespace)
            .find(|field| !field.is_empty())
            .ok_or(MalformedFen::Empty)?;
        Board::from_ascii_board_fen(placement).map(Fen)
    }

    /// Borrows the board described by the placement field.
    pub const fn as_board(&self) -> &Board {
        &self.0
    }

    /// Unwraps the board.
    pub fn into_board(self) -> Board {
        self.0
    }
}

impl From<Board> for Fen {
    fn from(board: Board) -> Fen {
        Fen(board)
    }
}

impl From<Fen> for Board {
    fn from(fen: Fen) -> Board {
        fen.0
    }
}

impl FromStr for Fen {
    type Err = MalformedFen;

    fn from_str(fen: &str) -> Result<Fen, MalformedFen> {
        Fen::from_ascii(fen.as_bytes())
    }
}

impl Display for Fen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0.board_fen(), FIXED_FIELDS)
    }
}

/// Parses a FEN into a fresh board.
///
/// # Errors
///
/// See [`Fen::from_ascii()`].
pub fn decode(fen: &str) -> Result<Board, MalformedFen> {
    fen.parse::<Fen>().map(Fen::into_board)
}

/// Writes the FEN of a board.
#[cfg(feature = "alloc")]
pub fn encode(board: &Board) -> String {
    Fen(board.clone()).to_string()
}

#[cfg(feature = "serde")]
impl serde::Serialize for Fen {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Fen {
    fn deserialize<D>(deserializer: D) -> Result<Fen, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct FenVisitor;

        impl serde::de::Visitor<'_> for FenVisitor {
            type Value = Fen;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("fen string")
            }

            fn visit_str<E>(self, value: &str) -> Result<Fen, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(FenVisitor)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString as _;

    use super::*;
    use crate::{color::Color, role::Role};

    #[test]
    fn test_starting_position() {
        let board = decode(STARTING_FEN).expect("valid fen");
        assert_eq!(board, Board::new());

        let back_rank = [
            Role::Rook,
            Role::Knight,
            Role::Bishop,
            Role::Queen,
            Role::King,
            Role::Bishop,
            Role::Knight,
            Role::Rook,
        ];

        for column in 0..8 {
            let at = |row| board.piece_at(Square::at(row, column).expect("on the board"));
            let role = back_rank[column as usize];
            assert_eq!(at(0), Some(role.of(Color::Black)));
            assert_eq!(at(1), Some(Color::Black.pawn()));
            for row in 2..6 {
                assert_eq!(at(row), None);
            }
            assert_eq!(at(6), Some(Color::White.pawn()));
            assert_eq!(at(7), Some(role.of(Color::White)));
        }

        assert_eq!(encode(&board), STARTING_FEN);
    }

    #[test]
    fn test_empty_board() {
        let board = decode("8/8/8/8/8/8/8/8").expect("valid fen");
        assert!(board.is_empty());
        assert_eq!(encode(&Board::empty()), "8/8/8/8/8/8/8/8 w KQkq - 0 1");
    }

    #[test]
    fn test_single_piece() {
        let mut board = Board::empty();
        board.set_piece_at(Square::at(0, 4).expect("on the board"), Color::White.king());
        assert_eq!(encode(&board), "4K3/8/8/8/8/8/8/8 w KQkq - 0 1");
    }

    #[test]
    fn test_trailing_fields_are_ignored() {
        let fen: Fen = "  4k3/8/8/8/8/8/8/4K3   b Kq e3 7 93 extra".parse().expect("valid fen");
        assert_eq!(fen.to_string(), "4k3/8/8/8/8/8/8/4K3 w KQkq - 0 1");

        let fen: Fen = "4k3/8/8/8/8/8/8/4K3\tw".parse().expect("valid fen");
        assert_eq!(fen.as_board().occupied_count(), 2);
    }

    #[test]
    fn test_malformed() {
        for (fen, err) in [
            ("", MalformedFen::Empty),
            (" \t ", MalformedFen::Empty),
            ("8/8/8/8/8/8/8", MalformedFen::RankCount { ranks: 7 }),
            ("8/8/8/8/8/8/8/8/8", MalformedFen::RankCount { ranks: 9 }),
            ("8/8/8/8/8/8/8/", MalformedFen::RankWidth { row: 7, width: 0 }),
            ("8/8/7/8/8/8/8/8", MalformedFen::RankWidth { row: 2, width: 7 }),
            ("8/8/8/8/ppp/8/8/8", MalformedFen::RankWidth { row: 4, width: 3 }),
            ("8/8/8/8/8/8/8/k8", MalformedFen::RankOverflow { row: 7 }),
            ("8/8/8/8/8/8/8/8k", MalformedFen::RankOverflow { row: 7 }),
            ("8/8/8/54/8/8/8/8", MalformedFen::RankOverflow { row: 3 }),
            ("08/8/8/8/8/8/8/8", MalformedFen::InvalidDigit { row: 0, digit: '0' }),
            ("9/8/8/8/8/8/8/8", MalformedFen::InvalidDigit { row: 0, digit: '9' }),
            ("8/8/8/8/8/8/8/4X3", MalformedFen::InvalidChar { row: 7, byte: b'X' }),
            (
                "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBN~",
                MalformedFen::InvalidChar { row: 7, byte: b'~' },
            ),
            ("8/8/8/8/8/8/8/4\u{e9}2", MalformedFen::InvalidChar { row: 7, byte: 0xc3 }),
        ] {
            assert_eq!(fen.parse::<Fen>(), Err(err), "{fen}");
        }
    }

    #[test]
    fn test_split_runs_of_empty_squares() {
        let fen: Fen = "8/44/1111p111/8/8/8/8/8".parse().expect("valid fen");
        assert_eq!(fen.to_string(), "8/8/4p3/8/8/8/8/8 w KQkq - 0 1");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            MalformedFen::RankCount { ranks: 3 }.to_string(),
            "malformed fen: expected 8 ranks, got 3"
        );
        assert_eq!(
            MalformedFen::InvalidChar { row: 2, byte: b'x' }.to_string(),
            "malformed fen: invalid character 'x' in row 2"
        );
        assert_eq!(
            MalformedFen::InvalidChar { row: 2, byte: 0xc3 }.to_string(),
            "malformed fen: invalid byte 0xc3 in row 2"
        );
    }

    #[test]
    fn test_encode_is_idempotent() {
        let board = decode("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
            .expect("valid fen");
        assert_eq!(encode(&board), encode(&board));
        assert_eq!(
            encode(&board),
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1"
        );
    }

    #[test]
    fn test_roundtrip_every_piece_on_every_square() {
        for sq in Square::ALL {
            for piece in Piece::ALL {
                let mut board = Board::empty();
                board.set_piece_at(sq, piece);
                assert_eq!(decode(&encode(&board)), Ok(board));
            }
        }
    }

    #[test]
    fn test_roundtrip_dense_boards() {
        // Deterministic fill patterns covering every run length.
        for seed in 0..200u32 {
            let mut state = seed.wrapping_mul(2_654_435_761).wrapping_add(1);
            let mut board = Board::empty();
            for sq in Square::ALL {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                if state % 3 != 0 {
                    board.set_piece_at(sq, Piece::ALL[(state % 12) as usize]);
                }
            }
            assert_eq!(decode(&encode(&board)), Ok(board));
        }
    }
}
