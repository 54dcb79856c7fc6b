//! Mazeview — generate a maze, watch an algorithm solve it, compare all
//! five.
//!
//! Usage: `mazeview [generator] [algorithm|compare] [size] [delay_ms]`
//!
//! With a nonzero delay the maze is re-rendered after every processed
//! cell, paced by the host (this binary), not the engine.

use std::error::Error;
use std::thread;
use std::time::Duration;

use mazeview_lib::kind::{AlgorithmKind, GeneratorKind};
use mazeview_lib::render::render;
use mazeview_lib::session::{compare_all, generate, solve};
use warren_core::{Cell, MazeConfig};
use warren_solve::{SearchResult, Solver, discard};

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let generator: GeneratorKind = match args.first() {
        Some(s) => s.parse()?,
        None => GeneratorKind::Recursive,
    };
    let algorithm = match args.get(1).map(String::as_str) {
        None | Some("compare") => None,
        Some(s) => Some(s.parse::<AlgorithmKind>()?),
    };
    let size: i32 = match args.get(2) {
        Some(s) => s.parse()?,
        None => 25,
    };
    let delay_ms: u64 = match args.get(3) {
        Some(s) => s.parse()?,
        None => 0,
    };

    let mut rng = rand::rng();
    let cfg = MazeConfig::square(size);
    let mut maze = generate(generator, &cfg, &mut rng);
    let mut solver = Solver::new();

    match algorithm {
        Some(kind) => {
            let info = kind.info();
            println!("{} — {}", info.name, info.description);
            let result = if delay_ms > 0 {
                // Paced mode: sleep between progress callbacks.
                let delay = Duration::from_millis(delay_ms);
                let mut sink = |_: &Cell| thread::sleep(delay);
                solve(kind, &mut solver, &mut maze, &mut rng, &mut sink)?
            } else {
                solve(kind, &mut solver, &mut maze, &mut rng, &mut discard)?
            };
            print!("{}", render(&maze));
            print_result(kind, &result);
        }
        None => {
            let results = compare_all(&mut solver, &mut maze, &mut rng)?;
            print!("{}", render(&maze));
            for (kind, result) in &results {
                print_result(*kind, result);
            }
        }
    }
    Ok(())
}

fn print_result(kind: AlgorithmKind, result: &SearchResult) {
    let status = if result.success { "ok" } else { "no path" };
    println!(
        "{:>13}: {:<7} path length {:>4}  nodes explored {:>5}  {:.2?}",
        kind, status, result.path_length, result.nodes_explored, result.execution_time
    );
}
