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

use core::{fmt, fmt::Write as _, iter::FusedIterator};

use crate::{
    color::Color,
    square::{File, Rank, Square},
    types::Piece,
};

/// Piece positions on an 8x8 board.
///
/// Each square holds at most one piece. Nothing else is enforced: a board
/// may have any number of kings, pawns on the back ranks, and so on.
///
/// # Examples
///
/// ```
/// use fenboard::{Board, Color, Square};
///
/// let mut board = Board::new();
/// assert_eq!(board.piece_at(Square::E1), Some(Color::White.king()));
///
/// board.set_piece_at(Square::E4, Color::White.queen());
/// assert_eq!(board.remove_piece_at(Square::E4), Some(Color::White.queen()));
/// assert_eq!(board.piece_at(Square::E4), None);
///
/// board.clear();
/// assert!(board.is_empty());
/// ```
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Board {
    by_square: [Option<Piece>; 64],
}

impl Board {
    /// The standard chess starting position.
    pub fn new() -> Board {
        let mut board = Board::empty();
        for (color, back_rank, pawn_rank) in [
            (Color::White, Rank::First, Rank::Second),
            (Color::Black, Rank::Eighth, Rank::Seventh),
        ] {
            for (file, piece) in File::ALL.into_iter().zip([
                color.rook(),
                color.knight(),
                color.bishop(),
                color.queen(),
                color.king(),
                color.bishop(),
                color.knight(),
                color.rook(),
            ]) {
                board.set_piece_at(Square::from_coords(file, back_rank), piece);
                board.set_piece_at(Square::from_coords(file, pawn_rank), color.pawn());
            }
        }
        board
    }

    pub const fn empty() -> Board {
        Board {
            by_square: [None; 64],
        }
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.by_square[usize::from(sq as u8)]
    }

    /// Puts a piece on a square, discarding whatever was there.
    #[inline]
    pub fn set_piece_at(&mut self, sq: Square, piece: Piece) {
        self.by_square[usize::from(sq as u8)] = Some(piece);
    }

    /// Empties a square, returning the piece that stood on it.
    #[inline]
    pub fn remove_piece_at(&mut self, sq: Square) -> Option<Piece> {
        self.by_square[usize::from(sq as u8)].take()
    }

    /// Empties every square.
    pub fn clear(&mut self) {
        self.by_square = [None; 64];
    }

    pub fn occupied_count(&self) -> usize {
        self.by_square.iter().filter(|piece| piece.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.by_square.iter().all(Option::is_none)
    }

    /// Iterates over occupied squares in FEN order, from `a8` to `h1`.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            board: self,
            cursor: 0,
        }
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL.into_iter().rev() {
            for file in File::ALL {
                f.write_char(
                    self.piece_at(Square::from_coords(file, rank))
                        .map_or('.', Piece::char),
                )?;
                f.write_char(if file < File::H { ' ' } else { '\n' })?;
            }
        }
        Ok(())
    }
}

impl FromIterator<(Square, Piece)> for Board {
    fn from_iter<T>(iter: T) -> Board
    where
        T: IntoIterator<Item = (Square, Piece)>,
    {
        let mut board = Board::empty();
        board.extend(iter);
        board
    }
}

impl Extend<(Square, Piece)> for Board {
    fn extend<T: IntoIterator<Item = (Square, Piece)>>(&mut self, iter: T) {
        for (sq, piece) in iter {
            self.set_piece_at(sq, piece);
        }
    }
}

impl<'a> IntoIterator for &'a Board {
    type Item = (Square, Piece);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Iterator over the occupied squares of a [`Board`], in FEN order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    board: &'a Board,
    cursor: u32,
}

impl Iterator for Iter<'_> {
    type Item = (Square, Piece);

    fn next(&mut self) -> Option<(Square, Piece)> {
        while self.cursor < 64 {
            let sq = Square::from_coords(
                File::new(self.cursor % 8),
                Rank::new(7 - self.cursor / 8),
            );
            self.cursor += 1;
            if let Some(piece) = self.board.piece_at(sq) {
                return Some((sq, piece));
            }
        }
        None
    }
}

impl FusedIterator for Iter<'_> {}

#[cfg(feature = "serde")]
impl serde::Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(&self.board_fen())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Board, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct BoardVisitor;

        impl serde::de::Visitor<'_> for BoardVisitor {
            type Value = Board;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("board fen")
            }

            fn visit_str<E>(self, value: &str) -> Result<Board, E>
            where
                E: serde::de::Error,
            {
                Board::from_ascii_board_fen(value.as_bytes()).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(BoardVisitor)
    }
}
