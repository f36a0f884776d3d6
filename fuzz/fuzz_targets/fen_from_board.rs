#![no_main]

use fenboard::{fen, Board};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|board: Board| {
    let fen = fen::encode(&board);
    let roundtripped =
        fen::decode(&fen).unwrap_or_else(|err| panic!("roundtrip via {fen}: {err}"));
    assert_eq!(board, roundtripped);
});
