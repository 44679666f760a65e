use modal_motion::{Caret, Position};
use ropey::Rope;

fn main() {
    let text = Rope::from_str("fn main() {\n    println!(\"hello, world\");\n}\n");

    let mut caret = Caret::new(&text, Position::zero());
    loop {
        let next = caret.word_right();
        if next.position() == caret.position() {
            break;
        }
        caret = next;
        let pos = caret.position();
        println!("w -> line {} column {}", pos.line, pos.column);
    }
}
