use fenboard::{
    editor::{Edit, Editor},
    fen::{self, Fen},
    Board,
};
use iai::black_box;

fn bench_parse_starting_fen() -> Fen {
    black_box(fen::STARTING_FEN)
        .parse::<Fen>()
        .expect("valid fen")
}

fn bench_parse_kiwipete() -> Fen {
    black_box("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
        .parse::<Fen>()
        .expect("valid fen")
}

fn bench_write_fen() -> String {
    fen::encode(black_box(&Board::new()))
}

fn bench_roundtrip() -> Board {
    let fen = fen::encode(black_box(&Board::new()));
    fen::decode(&fen).expect("roundtrip")
}

fn bench_edit_session() -> String {
    let edits: Vec<Edit> = ["e2e4", "e7e5", "g1f3", "b8c6", "f1..", "Q@d5", ".@d5"]
        .into_iter()
        .map(|edit| edit.parse().expect("valid edit"))
        .collect();

    let mut editor = Editor::new(Board::new());
    for edit in black_box(edits) {
        editor.apply(edit);
    }
    editor.export().to_string()
}

iai::main!(
    bench_parse_starting_fen,
    bench_parse_kiwipete,
    bench_write_fen,
    bench_roundtrip,
    bench_edit_session,
);
