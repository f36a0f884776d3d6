#![no_main]

use fenboard::{
    editor::{Edit, Editor},
    fen, Board,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (Board, Vec<Edit>)| {
    let (board, edits) = input;
    let mut editor = Editor::new(board);
    for edit in edits {
        editor.apply(edit);
    }
    let fen = editor.export().to_string();
    assert_eq!(fen::decode(&fen).as_ref(), Ok(editor.board()));
});
