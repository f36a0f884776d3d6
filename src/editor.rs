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

//! Interactive editing of a board.
//!
//! An [`Editor`] owns a [`Board`] and applies the gestures of a board
//! editing user interface to it: dragging pieces between squares or off
//! the board, placing pieces from a piece picker, loading a FEN and
//! exporting the arrangement back to FEN.
//!
//! Gestures are handled one at a time, each to completion.
//!
//! # Examples
//!
//! ```
//! use fenboard::{editor::Editor, Board, Color, Square};
//!
//! let mut editor = Editor::new(Board::new());
//!
//! // Drag the king's pawn two squares forward.
//! editor.begin_drag(Square::E2);
//! editor.drop_onto(Square::E4);
//!
//! // Right click an empty square and pick a black queen.
//! assert!(editor.open_picker(Square::D5));
//! editor.pick(Color::Black.queen());
//!
//! assert_eq!(
//!     editor.export().to_string(),
//!     "rnbqkbnr/pppppppp/8/3q4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 1"
//! );
//! ```

use core::{error::Error, fmt, str::FromStr};

use tracing::{debug, trace};

use crate::{
    board::Board,
    fen::{Fen, MalformedFen},
    square::Square,
    types::Piece,
};

/// A drag in progress.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Drag {
    from: Square,
    piece: Piece,
}

/// Gesture state machine on top of a [`Board`].
#[derive(Clone, Debug)]
pub struct Editor {
    board: Board,
    drag: Option<Drag>,
    picker: Option<Square>,
}

impl Editor {
    pub fn new(board: Board) -> Editor {
        Editor {
            board,
            drag: None,
            picker: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    /// Gets the origin square and piece of the drag in progress.
    pub fn dragging(&self) -> Option<(Square, Piece)> {
        self.drag.map(|Drag { from, piece }| (from, piece))
    }

    /// Gets the square the piece picker was opened on, if it is open.
    pub fn picker_target(&self) -> Option<Square> {
        self.picker
    }

    /// Picks up the piece on `from`. Returns `None` and leaves any
    /// previous drag in place if the square is empty.
    pub fn begin_drag(&mut self, from: Square) -> Option<Piece> {
        let piece = self.board.piece_at(from)?;
        trace!(%from, %piece, "begin drag");
        self.drag = Some(Drag { from, piece });
        Some(piece)
    }

    /// Drops the dragged piece onto `to`, replacing whatever stood there.
    /// The origin square is emptied. Returns the dropped piece, or `None`
    /// if no drag was in progress.
    pub fn drop_onto(&mut self, to: Square) -> Option<Piece> {
        let Drag { from, piece } = self.drag.take()?;
        self.board.remove_piece_at(from);
        let replaced = self.board.remove_piece_at(to);
        self.board.set_piece_at(to, piece);
        debug!(%from, %to, %piece, replaced = ?replaced, "dropped piece");
        Some(piece)
    }

    /// Ends the drag outside the board, which removes the dragged piece.
    pub fn drop_off_board(&mut self) -> Option<Piece> {
        let Drag { from, piece } = self.drag.take()?;
        self.board.remove_piece_at(from);
        debug!(%from, %piece, "dragged piece off the board");
        Some(piece)
    }

    /// Forgets the drag in progress without touching the board.
    pub fn cancel_drag(&mut self) {
        if let Some(Drag { from, .. }) = self.drag.take() {
            trace!(%from, "drag cancelled");
        }
    }

    /// Opens the piece picker on `sq`. The picker only opens on empty
    /// squares. Opening on an occupied square closes the picker and
    /// returns `false`.
    pub fn open_picker(&mut self, sq: Square) -> bool {
        if self.board.piece_at(sq).is_some() {
            self.close_picker();
            return false;
        }
        trace!(%sq, "picker opened");
        self.picker = Some(sq);
        true
    }

    pub fn close_picker(&mut self) {
        if let Some(sq) = self.picker.take() {
            trace!(%sq, "picker closed");
        }
    }

    /// Places `piece` on the square the picker was opened on, and closes
    /// the picker. Returns the square, or `None` if the picker was closed.
    pub fn pick(&mut self, piece: Piece) -> Option<Square> {
        let sq = self.picker.take()?;
        self.board.set_piece_at(sq, piece);
        debug!(%sq, %piece, "picked piece");
        Some(sq)
    }

    /// Places `piece` on `sq`, returning the piece it replaced.
    pub fn place(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        let replaced = self.board.remove_piece_at(sq);
        self.board.set_piece_at(sq, piece);
        debug!(%sq, %piece, "placed piece");
        replaced
    }

    /// Empties `sq`, returning the removed piece.
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        let removed = self.board.remove_piece_at(sq);
        if let Some(piece) = removed {
            debug!(%sq, %piece, "removed piece");
        }
        removed
    }

    /// Replaces the board with the position of a FEN. Any drag ends and
    /// the picker closes.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedFen`] if the FEN cannot be parsed. The board and
    /// gesture state are left as they were.
    pub fn load(&mut self, fen: &str) -> Result<(), MalformedFen> {
        let fen = fen.parse::<Fen>().inspect_err(|err| {
            debug!(%err, "rejected fen");
        })?;
        self.replace_board(fen.into_board());
        Ok(())
    }

    /// Replaces the board with the standard starting position.
    pub fn load_starting_position(&mut self) {
        self.replace_board(Board::new());
    }

    fn replace_board(&mut self, board: Board) {
        self.drag = None;
        self.picker = None;
        self.board = board;
        debug!(pieces = self.board.occupied_count(), "loaded position");
    }

    /// Gets the FEN of the current board.
    pub fn export(&self) -> Fen {
        let fen = Fen(self.board.clone());
        trace!(%fen, "exported");
        fen
    }

    /// Applies a single [`Edit`] as the equivalent sequence of gestures.
    /// Returns `false` if the edit did not change the board, because it
    /// drags from or removes an empty square.
    pub fn apply(&mut self, edit: Edit) -> bool {
        match edit {
            Edit::Place { piece, to } => {
                self.place(to, piece);
                true
            }
            Edit::Move { from, to } => {
                self.begin_drag(from).is_some() && self.drop_onto(to).is_some()
            }
            Edit::Remove { sq } => self.remove(sq).is_some(),
            Edit::Lift { from } => {
                self.begin_drag(from).is_some() && self.drop_off_board().is_some()
            }
        }
    }
}

impl Default for Editor {
    fn default() -> Editor {
        Editor::new(Board::empty())
    }
}

/// A single editing step in text form.
///
/// | Text   | Edit                                  |
/// | ------ | ------------------------------------- |
/// | `Q@e4` | place a white queen on `e4`           |
/// | `e2e4` | drag the piece on `e2` onto `e4`      |
/// | `.@e2` | remove the piece on `e2`              |
/// | `e2..` | drag the piece on `e2` off the board  |
///
/// # Examples
///
/// ```
/// use fenboard::{editor::Edit, Color, Square};
///
/// let edit: Edit = "n@f6".parse()?;
/// assert_eq!(edit, Edit::Place { piece: Color::Black.knight(), to: Square::F6 });
/// assert_eq!(edit.to_string(), "n@f6");
/// # Ok::<_, fenboard::editor::ParseEditError>(())
/// ```
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Edit {
    Place { piece: Piece, to: Square },
    Move { from: Square, to: Square },
    Remove { sq: Square },
    Lift { from: Square },
}

/// Error when parsing an invalid [`Edit`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseEditError;

impl fmt::Display for ParseEditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid edit")
    }
}

impl Error for ParseEditError {}

impl Edit {
    /// Parses an edit from text such as `Q@e4`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseEditError`] if the text is not one of the forms
    /// listed on [`Edit`].
    pub fn from_ascii(s: &[u8]) -> Result<Edit, ParseEditError> {
        let square = |s: &[u8]| Square::from_ascii(s).map_err(|_| ParseEditError);

        match *s {
            [b'.', b'@', ref sq @ ..] => Ok(Edit::Remove { sq: square(sq)? }),
            [piece, b'@', ref to @ ..] => Ok(Edit::Place {
                piece: Piece::from_char(char::from(piece)).ok_or(ParseEditError)?,
                to: square(to)?,
            }),
            [ref from @ .., b'.', b'.'] => Ok(Edit::Lift {
                from: square(from)?,
            }),
            [a, b, c, d] => Ok(Edit::Move {
                from: square(&[a, b][..])?,
                to: square(&[c, d][..])?,
            }),
            _ => Err(ParseEditError),
        }
    }
}

impl FromStr for Edit {
    type Err = ParseEditError;

    fn from_str(s: &str) -> Result<Edit, ParseEditError> {
        Edit::from_ascii(s.as_bytes())
    }
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Edit::Place { piece, to } => write!(f, "{piece}@{to}"),
            Edit::Move { from, to } => write!(f, "{from}{to}"),
            Edit::Remove { sq } => write!(f, ".@{sq}"),
            Edit::Lift { from } => write!(f, "{from}.."),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString as _;

    use super::*;
    use crate::{color::Color, fen::STARTING_FEN};

    #[test]
    fn test_drag_and_drop() {
        let mut editor = Editor::new(Board::new());
        assert_eq!(editor.begin_drag(Square::G1), Some(Color::White.knight()));
        assert_eq!(editor.dragging(), Some((Square::G1, Color::White.knight())));
        assert_eq!(editor.drop_onto(Square::F3), Some(Color::White.knight()));
        assert_eq!(editor.dragging(), None);
        assert_eq!(editor.board().piece_at(Square::G1), None);
        assert_eq!(editor.board().piece_at(Square::F3), Some(Color::White.knight()));
    }

    #[test]
    fn test_drop_replaces_target() {
        let mut editor = Editor::new(Board::new());
        editor.begin_drag(Square::D1);
        editor.drop_onto(Square::D8);
        assert_eq!(editor.board().piece_at(Square::D8), Some(Color::White.queen()));
        assert_eq!(editor.board().occupied_count(), 31);
    }

    #[test]
    fn test_drop_onto_origin() {
        let mut editor = Editor::new(Board::new());
        editor.begin_drag(Square::E2);
        editor.drop_onto(Square::E2);
        assert_eq!(editor.board(), &Board::new());
    }

    #[test]
    fn test_drop_without_drag() {
        let mut editor = Editor::new(Board::new());
        assert_eq!(editor.begin_drag(Square::E4), None);
        assert_eq!(editor.drop_onto(Square::E5), None);
        assert_eq!(editor.drop_off_board(), None);
        assert_eq!(editor.board(), &Board::new());
    }

    #[test]
    fn test_drop_off_board() {
        let mut editor = Editor::new(Board::new());
        editor.begin_drag(Square::A8);
        assert_eq!(editor.drop_off_board(), Some(Color::Black.rook()));
        assert_eq!(editor.board().piece_at(Square::A8), None);
        assert_eq!(editor.board().occupied_count(), 31);
    }

    #[test]
    fn test_cancel_drag() {
        let mut editor = Editor::new(Board::new());
        editor.begin_drag(Square::A8);
        editor.cancel_drag();
        assert_eq!(editor.drop_onto(Square::A4), None);
        assert_eq!(editor.board(), &Board::new());
    }

    #[test]
    fn test_picker() {
        let mut editor = Editor::default();
        assert_eq!(editor.pick(Color::White.king()), None);

        assert!(editor.open_picker(Square::E1));
        assert_eq!(editor.picker_target(), Some(Square::E1));
        assert_eq!(editor.pick(Color::White.king()), Some(Square::E1));
        assert_eq!(editor.picker_target(), None);
        assert_eq!(editor.board().piece_at(Square::E1), Some(Color::White.king()));

        // Occupied squares do not open the picker, and close an open one.
        assert!(editor.open_picker(Square::E2));
        assert!(!editor.open_picker(Square::E1));
        assert_eq!(editor.picker_target(), None);

        assert!(editor.open_picker(Square::E2));
        editor.close_picker();
        assert_eq!(editor.pick(Color::White.pawn()), None);
        assert_eq!(editor.board().occupied_count(), 1);
    }

    #[test]
    fn test_place_and_remove() {
        let mut editor = Editor::default();
        assert_eq!(editor.place(Square::C3, Color::Black.bishop()), None);
        assert_eq!(
            editor.place(Square::C3, Color::White.bishop()),
            Some(Color::Black.bishop())
        );
        assert_eq!(editor.remove(Square::C3), Some(Color::White.bishop()));
        assert_eq!(editor.remove(Square::C3), None);
        assert!(editor.board().is_empty());
    }

    #[test]
    fn test_load_and_export() {
        let mut editor = Editor::default();
        editor.load(STARTING_FEN).expect("valid fen");
        assert_eq!(editor.board(), &Board::new());
        assert_eq!(editor.export().to_string(), STARTING_FEN);

        editor.load("8/8/8/8/8/8/8/8").expect("valid fen");
        assert_eq!(editor.export().to_string(), "8/8/8/8/8/8/8/8 w KQkq - 0 1");

        editor.load_starting_position();
        assert_eq!(editor.export().to_string(), STARTING_FEN);
    }

    #[test]
    fn test_failed_load_preserves_state() {
        let mut editor = Editor::new(Board::new());
        editor.begin_drag(Square::B1);
        assert!(editor.open_picker(Square::C3));

        assert_eq!(
            editor.load("rnbqkbnr/pppppppp/8/8"),
            Err(MalformedFen::RankCount { ranks: 4 })
        );
        assert_eq!(
            editor.load("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBN"),
            Err(MalformedFen::RankWidth { row: 7, width: 7 })
        );

        assert_eq!(editor.board(), &Board::new());
        assert_eq!(editor.dragging(), Some((Square::B1, Color::White.knight())));
        assert_eq!(editor.picker_target(), Some(Square::C3));
    }

    #[test]
    fn test_load_resets_gestures() {
        let mut editor = Editor::new(Board::new());
        editor.begin_drag(Square::B1);
        assert!(editor.open_picker(Square::C3));
        editor.load("4k3/8/8/8/8/8/8/4K3").expect("valid fen");
        assert_eq!(editor.dragging(), None);
        assert_eq!(editor.picker_target(), None);
        assert_eq!(editor.drop_onto(Square::C3), None);
        assert_eq!(editor.board().occupied_count(), 2);
    }

    #[test]
    fn test_parse_edit() {
        assert_eq!(
            "Q@e4".parse::<Edit>(),
            Ok(Edit::Place {
                piece: Color::White.queen(),
                to: Square::E4
            })
        );
        assert_eq!(
            "e2e4".parse::<Edit>(),
            Ok(Edit::Move {
                from: Square::E2,
                to: Square::E4
            })
        );
        assert_eq!(".@e2".parse::<Edit>(), Ok(Edit::Remove { sq: Square::E2 }));
        assert_eq!("h8..".parse::<Edit>(), Ok(Edit::Lift { from: Square::H8 }));

        for invalid in ["", "Q@", "X@e4", "Q@e9", "e2e", "e2e4q", ".@", "..", "e9..", "@e4"] {
            assert_eq!(invalid.parse::<Edit>(), Err(ParseEditError), "{invalid}");
        }
    }

    #[test]
    fn test_edit_display_roundtrip() {
        for edit in ["K@a1", "p@h7", "b1c3", ".@d4", "g8.."] {
            assert_eq!(edit.parse::<Edit>().map(|e| e.to_string()).as_deref(), Ok(edit));
        }
    }

    #[test]
    fn test_apply() {
        let mut editor = Editor::new(Board::new());
        assert!(editor.apply("e2e4".parse::<Edit>().expect("valid edit")));
        assert!(editor.apply("e7..".parse().expect("valid edit")));
        assert!(editor.apply("q@e5".parse().expect("valid edit")));
        assert!(editor.apply(".@a1".parse().expect("valid edit")));
        assert!(!editor.apply(".@a1".parse().expect("valid edit")));
        assert!(!editor.apply("a3a4".parse().expect("valid edit")));
        assert_eq!(
            editor.export().to_string(),
            "rnbqkbnr/pppp1ppp/8/4q3/4P3/8/PPPP1PPP/1NBQKBNR w KQkq - 0 1"
        );
    }
}
