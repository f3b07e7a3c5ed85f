use clap::{Parser, Subcommand};
use crossterm::{
    cursor::{MoveLeft, MoveRight, MoveUp},
    execute,
    style::{Attribute, Color as TermColor, SetBackgroundColor, Stylize},
};
use kociemba::{
    cubie::CubieCube,
    facelet::{Color, FaceCube, SOLVED_FACE_CUBE},
    moves::Move,
    scramble::{gen_scramble, parse_maneuver, scramble_to_str},
    solver::{self, SolveStatus},
};
use spinners::Spinner;
use std::{
    io::{self, stdout},
    time::Instant,
};
use thiserror::Error as ThisError;

/// CLI-level errors: either a library error (bad facelet/scramble input) or
/// a terminal I/O failure while drawing the colored preview.
#[derive(Debug, ThisError)]
enum Error {
    #[error(transparent)]
    Cube(#[from] kociemba::error::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "solves the cube using two-phase algorithm")]
    #[clap(group(
    clap::ArgGroup::new("state")
        .required(true)
        .args(&["scramble", "facelet"]),
    ))]
    Solve {
        #[arg(short, long, help = "maneuver, e.g. \"R U R' U'\" or \"(RU){3}F'\"")]
        scramble: Option<String>,

        #[arg(short, long)]
        facelet: Option<String>,

        #[arg(short, long, default_value_t = 23)]
        max: usize,

        #[arg(short, long)]
        best: bool,

        #[arg(short, long)]
        preview: bool,
    },

    #[command(about = "generates scramble")]
    Scramble {
        #[arg(short, long, default_value_t = 25)]
        length: usize,
        #[arg(short, long)]
        preview: bool,
    },
}

fn solve(
    scramble: &Option<String>,
    facelet: &Option<String>,
    max: usize,
    best: bool,
    preview: bool,
) -> Result<(), Error> {
    let facelet_string = if let Some(scramble) = scramble {
        let moves = parse_maneuver(scramble)?;
        let state = apply_moves(&moves);
        FaceCube::try_from(&state)?.to_string()
    } else if let Some(facelet) = facelet {
        facelet.clone()
    } else {
        return Ok(());
    };

    if preview {
        let fc = FaceCube::try_from(facelet_string.as_str())?;
        print_facelet(&fc)?;
    }

    solve_state(&facelet_string, max, best)
}

fn apply_moves(moves: &[Move]) -> CubieCube {
    moves
        .iter()
        .fold(CubieCube::identity(), |c, &m| c.apply_move(m))
}

fn solve_state(cubestring: &str, max: usize, best: bool) -> Result<(), Error> {
    let start = Instant::now();
    let mut spinner = Spinner::new(spinners::Spinners::Dots, "Solving".to_owned());
    let result = solver::solve(cubestring, &SOLVED_FACE_CUBE.to_string(), max, best);
    let elapsed = start.elapsed();

    spinner.stop_with_newline();

    match result.status {
        SolveStatus::Ok => {
            println!("Solution: {}", scramble_to_str(&result.moves));
            println!("Move count: {}", result.moves.len());
            println!("Solve time: {elapsed:?}");
        }
        other => println!("No solution found: {other}"),
    }

    Ok(())
}

fn color_to_termcolor(color: Color) -> TermColor {
    match color {
        Color::U => TermColor::DarkYellow,
        Color::R => TermColor::Magenta,
        Color::F => TermColor::Green,
        Color::D => TermColor::White,
        Color::L => TermColor::Red,
        Color::B => TermColor::Blue,
    }
}

fn print_face(face: &[Color], offset: u16) -> Result<(), io::Error> {
    for i in 0..3 {
        let layer = format!(
            "{}  {}  {}  {}",
            SetBackgroundColor(color_to_termcolor(face[3 * i])),
            SetBackgroundColor(color_to_termcolor(face[(3 * i) + 1])),
            SetBackgroundColor(color_to_termcolor(face[(3 * i) + 2])),
            SetBackgroundColor(TermColor::Reset)
        );

        println!("{layer}");

        if offset != 0 {
            execute!(stdout(), MoveRight(offset))?;
        }
    }

    Ok(())
}

fn print_facelet(facelet: &FaceCube) -> Result<(), io::Error> {
    let stdout = stdout();

    println!();
    execute!(&stdout, MoveRight(6))?;
    print_face(&facelet.f[0..9], 6)?; // U (white)
    execute!(&stdout, MoveLeft(6))?;
    print_face(&facelet.f[36..45], 0)?; // L (orange)
    execute!(&stdout, MoveRight(6), MoveUp(3))?;
    print_face(&facelet.f[18..27], 6)?; // F (green)
    execute!(&stdout, MoveLeft(12), MoveUp(3), MoveRight(12))?;
    print_face(&facelet.f[9..18], 12)?; // R (red)
    execute!(&stdout, MoveLeft(12), MoveUp(3), MoveRight(18))?;
    print_face(&facelet.f[45..54], 18)?; // B (blue)
    execute!(&stdout, MoveLeft(12))?;
    print_face(&facelet.f[27..36], 6)?; // D (yellow)
    execute!(&stdout, MoveLeft(12))?;
    println!();

    Ok(())
}

fn scramble(length: usize, preview: bool) -> Result<(), Error> {
    let moves = gen_scramble(length);
    let state = apply_moves(&moves);
    let fc = FaceCube::try_from(&state)?;
    println!("Scramble: {}", scramble_to_str(&moves));
    if preview {
        print_facelet(&fc)?;
    }
    Ok(())
}

fn main() {
    let program = Cli::parse();

    let result = match &program.command {
        Some(Commands::Solve {
            scramble,
            facelet,
            max,
            best,
            preview,
        }) => solve(scramble, facelet, *max, *best, *preview),
        Some(Commands::Scramble { length, preview }) => scramble(*length, *preview),
        _ => Ok(()),
    };

    if let Err(error) = result {
        let styled = "Error:".with(TermColor::Red).attribute(Attribute::Bold);
        println!("{styled} {error}");
    }
}
