use std::io::{self, BufRead, Write};

use cube_core::{
    Move, MoveError, StickerSet, apply_moves, create_initial_cube_state, format_moves,
    generate_scramble_with, move_groups, parse_moves,
};
use itertools::Itertools;
use log::info;

use crate::render::render_net;

/// One line of input to an interactive session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Moves(Vec<Move>),
    Scramble,
    Reset,
    Undo,
    Help,
    Quit,
    Nothing,
}

impl Input {
    /// Parse a line. Anything that isn't a command word is read as a move sequence.
    pub fn parse(line: &str) -> Result<Input, MoveError> {
        Ok(match line.trim() {
            "" => Input::Nothing,
            "scramble" => Input::Scramble,
            "reset" => Input::Reset,
            "undo" => Input::Undo,
            "help" | "?" => Input::Help,
            "quit" | "exit" | "q" => Input::Quit,
            moves => Input::Moves(parse_moves(moves)?),
        })
    }
}

/// Owns the current cube and replaces it as moves come in
pub struct Session {
    current: StickerSet,
    history: Vec<StickerSet>,
    scramble_length: usize,
    rng: fastrand::Rng,
}

impl Session {
    #[must_use]
    pub fn new(scramble_length: usize, rng: fastrand::Rng) -> Session {
        Session {
            current: create_initial_cube_state(),
            history: Vec::new(),
            scramble_length,
            rng,
        }
    }

    #[must_use]
    pub fn current(&self) -> &StickerSet {
        &self.current
    }

    fn replace(&mut self, next: StickerSet) {
        let previous = std::mem::replace(&mut self.current, next);
        self.history.push(previous);
    }

    pub fn apply(&mut self, moves: &[Move]) {
        let next = apply_moves(&self.current, moves);
        self.replace(next);
    }

    /// Scramble the current cube, returning the moves used
    pub fn scramble(&mut self) -> Vec<Move> {
        let scramble = generate_scramble_with(&mut self.rng, self.scramble_length);
        self.apply(&scramble);
        scramble
    }

    pub fn reset(&mut self) {
        self.replace(create_initial_cube_state());
    }

    /// Go back to the state before the last change. Returns `false` if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }
}

fn help() -> String {
    let groups = move_groups()
        .iter()
        .map(|(face, moves)| {
            let labels = moves.iter().map(|move_| move_.label()).join(" ");
            format!("  {} face: {labels}", face.name())
        })
        .join("\n");

    format!(
        "Type moves separated by spaces, e.g. R U R' U'\n\
         {groups}\n\
         Commands: scramble, reset, undo, help, quit\n"
    )
}

/// Run an interactive session, reading lines from `input` and drawing the cube to `output` after every change
pub fn run(
    session: &mut Session,
    input: impl BufRead,
    mut output: impl Write,
    colored: bool,
) -> io::Result<()> {
    write!(output, "{}", render_net(session.current(), colored))?;

    for line in input.lines() {
        let line = line?;

        let input = match Input::parse(&line) {
            Ok(input) => input,
            Err(e) => {
                writeln!(output, "{e}")?;
                continue;
            }
        };

        let was_solved = session.current().is_solved();
        let is_turn = matches!(input, Input::Moves(_));

        match input {
            Input::Nothing => continue,
            Input::Quit => break,
            Input::Help => {
                write!(output, "{}", help())?;
                continue;
            }
            Input::Moves(moves) => session.apply(&moves),
            Input::Scramble => {
                let scramble = session.scramble();
                info!("Scrambled with {}", format_moves(&scramble));
                writeln!(output, "Scramble: {}", format_moves(&scramble))?;
            }
            Input::Reset => session.reset(),
            Input::Undo => {
                if !session.undo() {
                    writeln!(output, "Nothing to undo")?;
                    continue;
                }
            }
        }

        write!(output, "{}", render_net(session.current(), colored))?;

        if is_turn && session.current().is_solved() && !was_solved {
            writeln!(output, "Solved!")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use cube_core::{MoveError, create_initial_cube_state, parse_moves};
    use pretty_assertions::assert_eq;

    use super::{Input, Session, run};

    fn session() -> Session {
        Session::new(25, fastrand::Rng::with_seed(1))
    }

    #[test]
    fn parses_commands_and_moves() {
        assert_eq!(Input::parse("  "), Ok(Input::Nothing));
        assert_eq!(Input::parse("reset"), Ok(Input::Reset));
        assert_eq!(Input::parse("q"), Ok(Input::Quit));
        assert_eq!(
            Input::parse("R U'"),
            Ok(Input::Moves(parse_moves("R U'").unwrap()))
        );
        assert_eq!(
            Input::parse("R W"),
            Err(MoveError::InvalidMoveToken("W".to_owned()))
        );
    }

    #[test]
    fn scramble_then_reset() {
        let mut session = session();
        let scramble = session.scramble();

        assert_eq!(scramble.len(), 25);
        assert!(!session.current().is_solved());

        session.reset();
        assert_eq!(session.current(), &create_initial_cube_state());

        assert!(session.undo());
        assert!(!session.current().is_solved());
        assert!(session.undo());
        assert!(session.current().is_solved());
        assert!(!session.undo());
    }

    #[test]
    fn interactive_solve() {
        let mut session = session();
        let mut output = Vec::new();

        run(
            &mut session,
            Cursor::new("R U\nbogus\nU' R'\nundo\nundo\nundo\nquit\nR\n"),
            &mut output,
            false,
        )
        .unwrap();

        let output = String::from_utf8(output).unwrap();

        assert_eq!(output.matches("Solved!").count(), 1);
        assert!(output.contains("Invalid move token `bogus`"));
        assert!(output.contains("Nothing to undo"));
        // The move after `quit` is never read
        assert!(session.current().is_solved());
    }
}
