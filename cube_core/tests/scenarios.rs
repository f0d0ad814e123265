use cube_core::{
    Color::{Blue, Green, Orange, Red, White, Yellow},
    Face, MoveError, apply_move_token, apply_move_tokens, apply_moves, create_initial_cube_state,
    generate_scramble, net, parse_moves,
};
use pretty_assertions::assert_eq;

#[test_log::test]
fn solved_net() {
    let solved = create_initial_cube_state();

    for (face, grid) in net(solved.stickers()) {
        assert_eq!(grid, [face.color(); 9], "{face}");
    }
}

#[test_log::test]
fn u_turn_feeds_front_from_right() {
    let solved = create_initial_cube_state();
    let turned = apply_move_token(&solved, "U").unwrap();

    assert_eq!(turned.face_stickers(Face::U), [White; 9]);
    assert_eq!(turned.face_stickers(Face::D), [Yellow; 9]);
    assert_eq!(
        turned.face_stickers(Face::F),
        [Red, Red, Red, Green, Green, Green, Green, Green, Green]
    );
    assert_eq!(
        turned.face_stickers(Face::R),
        [Blue, Blue, Blue, Red, Red, Red, Red, Red, Red]
    );
    assert_eq!(
        turned.face_stickers(Face::B),
        [Orange, Orange, Orange, Blue, Blue, Blue, Blue, Blue, Blue]
    );
    assert_eq!(
        turned.face_stickers(Face::L),
        [Green, Green, Green, Orange, Orange, Orange, Orange, Orange, Orange]
    );
}

#[test_log::test]
fn r_turn_columns() {
    let solved = create_initial_cube_state();
    let turned = apply_move_token(&solved, "R").unwrap();

    // The right column of U comes from F
    assert_eq!(
        turned.face_stickers(Face::U),
        [White, White, Green, White, White, Green, White, White, Green]
    );
    assert_eq!(
        turned.face_stickers(Face::F),
        [Green, Green, Yellow, Green, Green, Yellow, Green, Green, Yellow]
    );
    // Seen from behind, the side of B next to R is its left column
    assert_eq!(
        turned.face_stickers(Face::B),
        [White, Blue, Blue, White, Blue, Blue, White, Blue, Blue]
    );
    // Seen from below with F at the top, R is on the left
    assert_eq!(
        turned.face_stickers(Face::D),
        [Blue, Yellow, Yellow, Blue, Yellow, Yellow, Blue, Yellow, Yellow]
    );
    assert_eq!(turned.face_stickers(Face::R), [Red; 9]);
    assert_eq!(turned.face_stickers(Face::L), [Orange; 9]);
}

#[test_log::test]
fn checkerboard() {
    let solved = create_initial_cube_state();
    let checkerboard = apply_moves(&solved, &parse_moves("R2 L2 U2 D2 F2 B2").unwrap());

    for (face, opposite) in [
        (Face::U, Face::D),
        (Face::D, Face::U),
        (Face::F, Face::B),
        (Face::B, Face::F),
        (Face::R, Face::L),
        (Face::L, Face::R),
    ] {
        let (own, other) = (face.color(), opposite.color());
        assert_eq!(
            checkerboard.face_stickers(face),
            [own, other, own, other, own, other, own, other, own],
            "{face}"
        );
    }
}

#[test_log::test]
fn reset_after_scramble() {
    let solved = create_initial_cube_state();
    let scrambled = apply_moves(&solved, &generate_scramble(25));

    // Resetting discards the scrambled state entirely
    let reset = create_initial_cube_state();
    assert_eq!(reset, solved);
    assert!(reset.is_solved());
    assert_eq!(scrambled.stickers().len(), reset.stickers().len());
}

#[test_log::test]
fn invalid_tokens_change_nothing() {
    let solved = create_initial_cube_state();
    let before = solved.clone();

    assert_eq!(
        apply_move_tokens(&solved, &["R", "U", "M"]),
        Err(MoveError::InvalidMoveToken("M".to_owned()))
    );
    assert_eq!(
        apply_move_token(&solved, "x"),
        Err(MoveError::InvalidMoveToken("x".to_owned()))
    );
    assert_eq!(solved, before);

    assert_eq!(
        apply_move_tokens(&solved, &["R", "R'"]),
        Ok(before)
    );
}

#[test_log::test]
fn sticker_ids_follow_their_stickers() {
    let solved = create_initial_cube_state();
    let turned = apply_move_token(&solved, "F").unwrap();

    // The top left sticker of U goes nowhere under F, the bottom left one goes to the top of R
    let untouched = turned.iter().find(|s| s.id().to_string() == "U-0-0").unwrap();
    assert_eq!(untouched.current_face(), Some(Face::U));

    let moved = turned.iter().find(|s| s.id().to_string() == "U-2-0").unwrap();
    assert_eq!(moved.current_face(), Some(Face::R));
    assert_eq!(moved.color(), White);
}
