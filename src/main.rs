//! Command-line client: read a board description, solve it, print the result.
//!
//! Usage: `npuzzle_engine [--racing] [FILE]` — reads the board from FILE, or
//! from stdin when no file is given.

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use npuzzle_engine::{Board, Solver};

fn main() -> ExitCode {
    let mut racing = false;
    let mut file: Option<String> = None;
    for arg in env::args().skip(1) {
        if arg == "--racing" {
            racing = true;
        } else {
            file = Some(arg);
        }
    }

    let input = match read_input(file.as_deref()) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let board: Board = match input.parse() {
        Ok(board) => board,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let solver = if racing {
        Solver::racing(board)
    } else {
        Solver::new(board)
    };

    match solver.solution() {
        Some(solution) => {
            println!("Minimum number of moves = {}", solver.moves());
            for step in solution {
                println!("{step}");
                println!();
            }
        }
        None => println!("No solution possible"),
    }
    ExitCode::SUCCESS
}

fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}
