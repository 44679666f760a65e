//! Properties every motion must keep, checked over fixed fixtures and seeded random documents.

use modal_motion::{Caret, Cursor, MotionError, MotionKind, Position, TextSource};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ALPHABET: &[u8] = b"abcxyz019 ._(-\t";

fn random_document(rng: &mut StdRng) -> Vec<String> {
    let line_count = rng.gen_range(1..8);
    (0..line_count)
        .map(|_| {
            let len = rng.gen_range(0..24);
            (0..len)
                .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
                .collect()
        })
        .collect()
}

fn random_valid_position(rng: &mut StdRng, lines: &[String], max_column: fn(usize) -> usize) -> Position {
    let line = rng.gen_range(0..lines.len());
    let column = rng.gen_range(0..=max_column(lines.line_len(line)));
    Position::new(line, column)
}

fn caret_max(len: usize) -> usize {
    len.saturating_sub(1)
}

fn cursor_max(len: usize) -> usize {
    len
}

#[test]
fn line_end_and_range_agree_for_every_column() {
    let lines: Vec<String> = ["", "a", "ab", "hello", "  indented"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let caret = Caret::at(&lines, 0, 0);
    let cursor = Cursor::at(&lines, 0, 0);

    for (line, text) in lines.iter().enumerate() {
        let len = text.chars().count();
        for column in 0..=len + 2 {
            let pos = Position::new(line, column);

            let max = caret_max(len);
            assert_eq!(caret.is_out_of_range(pos), column > max);
            match caret.is_line_end(pos) {
                Ok(at_end) => assert_eq!(at_end, column == max),
                Err(MotionError::OutOfRange { max_column, .. }) => {
                    assert!(column > max);
                    assert_eq!(max_column, max);
                }
                Err(other) => panic!("unexpected error: {other}"),
            }

            let max = cursor_max(len);
            assert_eq!(cursor.is_out_of_range(pos), column > max);
            assert_eq!(cursor.is_line_end(pos).ok(), (column <= max).then_some(column == max));
        }
    }
}

#[test]
fn left_right_round_trip_away_from_boundaries() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..500 {
        let lines = random_document(&mut rng);
        let start = random_valid_position(&mut rng, &lines, caret_max);
        let max = caret_max(lines.line_len(start.line));

        let caret = Caret::new(&lines, start);
        if start.column > 0 {
            assert_eq!(caret.left().right().position(), start);
        } else {
            assert_eq!(caret.left().position(), start);
        }
        if start.column < max {
            assert_eq!(caret.right().left().position(), start);
        } else {
            assert_eq!(caret.right().position(), start);
        }
    }
}

#[test]
fn motions_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(42);
    let kinds = [
        MotionKind::Left,
        MotionKind::Right,
        MotionKind::Up,
        MotionKind::Down,
        MotionKind::WordLeft,
        MotionKind::WordRight,
        MotionKind::LineBegin,
        MotionKind::LineEnd,
        MotionKind::FirstLineNonBlankChar,
        MotionKind::LastLineNonBlankChar,
        MotionKind::DocumentBegin,
    ];

    for _ in 0..200 {
        let lines = random_document(&mut rng);
        let mut caret = Caret::new(&lines, random_valid_position(&mut rng, &lines, caret_max));
        let mut cursor = Cursor::new(&lines, random_valid_position(&mut rng, &lines, cursor_max));

        for _ in 0..40 {
            let kind = kinds[rng.gen_range(0..kinds.len())];
            caret = caret.apply(kind);
            cursor = cursor.apply(kind);
            assert!(
                !caret.is_out_of_range(caret.position()),
                "{kind:?} left caret out of range at {:?} in {lines:?}",
                caret.position()
            );
            assert!(
                !cursor.is_out_of_range(cursor.position()),
                "{kind:?} left cursor out of range at {:?} in {lines:?}",
                cursor.position()
            );
            assert!(caret.position().line < lines.len());
        }
    }
}

#[test]
fn word_motions_make_progress_until_document_edges() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..300 {
        let lines = random_document(&mut rng);
        let start = random_valid_position(&mut rng, &lines, caret_max);
        let caret = Caret::new(&lines, start);
        let last = Position::new(lines.len() - 1, caret_max(lines.line_len(lines.len() - 1)));

        let forward = caret.word_right().position();
        if start == last {
            assert_eq!(forward, start);
        } else {
            assert!(forward > start, "w from {start:?} went to {forward:?} in {lines:?}");
        }

        let backward = caret.word_left().position();
        if start == Position::zero() {
            assert_eq!(backward, start);
        } else {
            assert!(backward < start, "b from {start:?} went to {backward:?} in {lines:?}");
        }
    }
}

#[test]
fn sticky_column_survives_short_line() {
    let lines = vec!["0123456789", "ab"];
    let caret = Caret::at(&lines, 0, 5).down();
    assert_eq!(caret.position(), Position::new(1, 1));
    assert_eq!(caret.up().position(), Position::new(0, 5));
}

#[test]
fn horizontal_move_after_vertical_replaces_sticky_column() {
    let lines = vec!["0123456789", "ab", "0123456789"];
    let caret = Caret::at(&lines, 0, 8).down().left().down();
    assert_eq!(caret.position(), Position::new(2, 0));
}

#[test]
fn non_blank_motions_on_fixture() {
    let lines = vec!["   x", "body", ""];
    let caret = Caret::at(&lines, 1, 2);
    assert_eq!(caret.first_line_non_blank_char().position(), Position::new(0, 3));
    assert_eq!(caret.last_line_non_blank_char().position(), Position::new(2, 0));
}

#[test]
fn flavors_differ_only_at_line_end() {
    let lines = vec!["abcde"];
    let caret = Caret::at(&lines, 0, 0).line_end();
    let cursor = Cursor::at(&lines, 0, 0).line_end();
    assert_eq!(caret.position(), Position::new(0, 4));
    assert_eq!(cursor.position(), Position::new(0, 5));
    assert!(caret.is_line_end(caret.position()).unwrap());
    assert!(cursor.is_line_end(cursor.position()).unwrap());

    let path = [MotionKind::LineBegin, MotionKind::Right, MotionKind::Right];
    assert_eq!(
        caret.apply_all(path).position(),
        cursor.apply_all(path).position()
    );
}

#[test]
fn document_end_with_no_lines() {
    let lines: Vec<&str> = Vec::new();
    assert_eq!(Caret::at(&lines, 0, 0).document_end().position(), Position::zero());
    assert_eq!(Cursor::at(&lines, 0, 0).document_end().position(), Position::zero());
}

#[test]
fn document_end_uses_full_line_length_for_both_flavors() {
    let lines = vec!["first", "last line"];
    assert_eq!(Caret::at(&lines, 0, 0).document_end().position(), Position::new(1, 9));
    assert_eq!(Cursor::at(&lines, 0, 0).document_end().position(), Position::new(1, 9));
}
