use cube_core::{Color, Face, FaceGrid, StickerSet};
use owo_colors::OwoColorize;

/// The faces of each band of the net, top to bottom. `None` is a gap the width of a face.
const LAYOUT: [&[Option<Face>]; 3] = [
    &[None, Some(Face::U)],
    &[Some(Face::L), Some(Face::F), Some(Face::R), Some(Face::B)],
    &[None, Some(Face::D)],
];

fn cell(color: Color, colored: bool) -> String {
    if colored {
        let (r, g, b) = color.rgb();
        "  ".on_truecolor(r, g, b).to_string()
    } else {
        let initial = color.name().chars().next().unwrap_or('?');
        format!("{} ", initial.to_ascii_uppercase())
    }
}

/// Draw the cube unfolded, with U above F and D below it:
///
/// ```text
///       U
///     L F R B
///       D
/// ```
pub fn render_net(stickers: &StickerSet, colored: bool) -> String {
    let grids: [FaceGrid; 6] = Face::ALL.map(|face| stickers.face_stickers(face));

    let mut out = String::new();

    for band in LAYOUT {
        for row in 0..3 {
            let mut line = String::new();

            for slot in band {
                match slot {
                    Some(face) => {
                        for col in 0..3 {
                            line.push_str(&cell(grids[*face as usize][row * 3 + col], colored));
                        }
                    }
                    None => line.push_str(&" ".repeat(6)),
                }
            }

            out.push_str(line.trim_end());
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use cube_core::{apply_move_token, create_initial_cube_state};
    use pretty_assertions::assert_eq;

    use super::render_net;

    #[test]
    fn plain_solved_net() {
        let expected = "      W W W
      W W W
      W W W
O O O G G G R R R B B B
O O O G G G R R R B B B
O O O G G G R R R B B B
      Y Y Y
      Y Y Y
      Y Y Y
";
        assert_eq!(render_net(&create_initial_cube_state(), false), expected);
    }

    #[test]
    fn plain_net_after_u() {
        let turned = apply_move_token(&create_initial_cube_state(), "U").unwrap();
        let rendered = render_net(&turned, false);
        let lines = rendered.lines().collect::<Vec<_>>();

        assert_eq!(lines[3], "G G G R R R B B B O O O");
        assert_eq!(lines[4], "O O O G G G R R R B B B");
    }

    #[test]
    fn colored_net_has_a_line_per_row() {
        let rendered = render_net(&create_initial_cube_state(), true);
        assert_eq!(rendered.lines().count(), 9);
        assert!(rendered.contains("\u{1b}["));
    }
}
