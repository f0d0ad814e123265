use std::{io, path::PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use cube_core::{
    apply_move_tokens, apply_moves, create_initial_cube_state, format_moves,
    generate_scramble_with, move_groups,
};
use itertools::Itertools;
use log::{LevelFilter, debug};

use crate::{config::Config, render::render_net, session::Session};

mod config;
mod render;
mod session;

/// Turn a virtual 3x3x3 cube from the terminal
#[derive(Parser)]
#[command(name = "cube", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Read settings from this file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Draw stickers as letters instead of coloured blocks
    #[arg(long, global = true)]
    no_color: bool,

    /// Log more; repeat for more detail
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply moves to a solved cube and draw the result
    Show {
        /// Moves such as R U R' U'
        #[arg(allow_hyphen_values = true)]
        moves: Vec<String>,
    },
    /// Generate a scramble and draw the scrambled cube
    Scramble {
        /// Number of moves, overriding the config file
        #[arg(short, long)]
        length: Option<usize>,
        /// Seed for a repeatable scramble, overriding the config file
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// List every move, grouped by face
    Moves,
    /// Play interactively, reading moves and commands from standard input
    Play {
        /// Seed for repeatable scrambles, overriding the config file
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn rng(seed: Option<u64>) -> fastrand::Rng {
    match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .parse_default_env()
        .init();

    let config = Config::load(cli.config.as_deref())?;
    debug!("{config:?}");

    let colored = config.color && !cli.no_color;

    match cli.command {
        Commands::Show { moves } => {
            // Tokens may arrive as one quoted argument or many
            let tokens = moves
                .iter()
                .flat_map(|arg| arg.split_whitespace())
                .collect_vec();

            let cube = apply_move_tokens(&create_initial_cube_state(), &tokens)
                .wrap_err("Couldn't apply the moves")?;

            print!("{}", render_net(&cube, colored));
            if cube.is_solved() {
                println!("Solved");
            }
        }
        Commands::Scramble { length, seed } => {
            let length = length.unwrap_or(config.scramble_length);
            let scramble = generate_scramble_with(&mut rng(seed.or(config.seed)), length);

            println!("{}", format_moves(&scramble));
            print!(
                "{}",
                render_net(&apply_moves(&create_initial_cube_state(), &scramble), colored)
            );
        }
        Commands::Moves => {
            for (face, moves) in move_groups() {
                println!(
                    "{} face: {}",
                    face.name(),
                    moves.iter().map(|move_| move_.label()).join(" ")
                );
            }
        }
        Commands::Play { seed } => {
            let mut session = Session::new(config.scramble_length, rng(seed.or(config.seed)));

            session::run(&mut session, io::stdin().lock(), io::stdout().lock(), colored)
                .wrap_err("Interactive session failed")?;
        }
    }

    Ok(())
}
