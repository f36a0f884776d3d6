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

use core::{error::Error, fmt, str::FromStr};

use crate::{color::Color, role::Role};

/// A piece with [`Color`] and [`Role`].
///
/// Written as a single letter, uppercase for white and lowercase for black.
///
/// # Examples
///
/// ```
/// use fenboard::{Color, Piece, Role};
///
/// let piece = Piece::from_char('q').expect("valid piece letter");
/// assert_eq!(piece, Role::Queen.of(Color::Black));
/// assert_eq!(piece.char(), 'q');
/// assert_eq!(piece.glyph(), '♛');
/// ```
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Piece {
    pub color: Color,
    pub role: Role,
}

impl Piece {
    pub fn char(self) -> char {
        self.color.fold_wb(self.role.upper_char(), self.role.char())
    }

    pub fn from_char(ch: char) -> Option<Piece> {
        Role::from_char(ch).map(|role| role.of(Color::from_white(32 & ch as u8 == 0)))
    }

    /// Gets the chess symbol from the Unicode Miscellaneous Symbols block,
    /// for presentation only.
    pub fn glyph(self) -> char {
        match (self.color, self.role) {
            (Color::White, Role::King) => '♔',
            (Color::White, Role::Queen) => '♕',
            (Color::White, Role::Rook) => '♖',
            (Color::White, Role::Bishop) => '♗',
            (Color::White, Role::Knight) => '♘',
            (Color::White, Role::Pawn) => '♙',
            (Color::Black, Role::King) => '♚',
            (Color::Black, Role::Queen) => '♛',
            (Color::Black, Role::Rook) => '♜',
            (Color::Black, Role::Bishop) => '♝',
            (Color::Black, Role::Knight) => '♞',
            (Color::Black, Role::Pawn) => '♟',
        }
    }

    /// All 12 pieces in picker order: black `r n b q k p`, then white
    /// `R N B Q K P`.
    pub const ALL: [Piece; 12] = [
        Color::Black.rook(),
        Color::Black.knight(),
        Color::Black.bishop(),
        Color::Black.queen(),
        Color::Black.king(),
        Color::Black.pawn(),
        Color::White.rook(),
        Color::White.knight(),
        Color::White.bishop(),
        Color::White.queen(),
        Color::White.king(),
        Color::White.pawn(),
    ];
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Write::write_char(f, self.char())
    }
}

/// Error when parsing an invalid piece letter.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParsePieceError;

impl fmt::Display for ParsePieceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid piece letter")
    }
}

impl Error for ParsePieceError {}

impl FromStr for Piece {
    type Err = ParsePieceError;

    fn from_str(s: &str) -> Result<Piece, ParsePieceError> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Piece::from_char(ch).ok_or(ParsePieceError),
            _ => Err(ParsePieceError),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Piece {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_char(self.char())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Piece {
    fn deserialize<D>(deserializer: D) -> Result<Piece, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct PieceVisitor;

        impl serde::de::Visitor<'_> for PieceVisitor {
            type Value = Piece;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("piece letter")
            }

            fn visit_char<E>(self, value: char) -> Result<Piece, E>
            where
                E: serde::de::Error,
            {
                Piece::from_char(value).ok_or_else(|| E::custom(ParsePieceError))
            }

            fn visit_str<E>(self, value: &str) -> Result<Piece, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_char(PieceVisitor)
    }
}
