//! Interactive command-line front end
//!
//! Presents four numbered commands - new maze, new path, solve maze,
//! exit - prompting line by line for parameters and reporting wall-clock
//! milliseconds per construction. Failed bitmap reads fall back to the
//! degenerate 1x1 object, matching the library's total-failure contract.

use anyhow::Result;
use clap::Parser;
use mazekit::{
    Lcg, Path, PathGenOptions, ProbabilityProfile, density_maze, random_path, read_maze_file,
    read_path_file, solve, tree_maze, write_maze_file, write_path_file,
};
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use std::time::Instant;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mazekit", version, about = "Generate and solve grid mazes")]
struct Cli {
    /// Log filter when RUST_LOG is unset, e.g. "debug" or "mazekit=trace"
    #[arg(long, default_value = "warn")]
    log: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log)),
        )
        .with_writer(io::stderr)
        .init();
    while command_prompt()? {}
    Ok(())
}

/// Read one line from stdin; `None` means the input was closed.
fn read_line() -> io::Result<Option<String>> {
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt_string(label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    read_line()
}

/// Prompt until the input parses; `None` on closed input.
fn prompt_number<T: FromStr>(label: &str) -> io::Result<Option<T>> {
    loop {
        let Some(text) = prompt_string(label)? else {
            return Ok(None);
        };
        match text.parse() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("Invalid number."),
        }
    }
}

fn command_prompt() -> io::Result<bool> {
    println!("Commands:");
    println!("1 New maze");
    println!("2 New path");
    println!("3 Solve maze");
    println!("4 Exit");
    let Some(command) = prompt_number::<u8>("Command: ")? else {
        return Ok(false);
    };
    match command {
        1 => new_maze()?,
        2 => new_path()?,
        3 => solve_maze()?,
        4 => return Ok(false),
        _ => println!("Unknown command."),
    }
    println!();
    Ok(true)
}

enum MazeKind {
    Tree(ProbabilityProfile),
    Density(u16),
}

fn new_maze() -> io::Result<()> {
    println!("\nCreate new maze\n");
    let Some(seed) = prompt_number::<i32>("Seed number (32-bit signed integer): ")? else {
        return Ok(());
    };
    let Some(path_file) = prompt_string("Path file (empty if none): ")? else {
        return Ok(());
    };
    let path = if path_file.is_empty() {
        let Some(height) = prompt_number::<u32>("Height: ")? else {
            return Ok(());
        };
        let Some(width) = prompt_number::<u32>("Width: ")? else {
            return Ok(());
        };
        match Path::new(height, width, 0, 0, Vec::new()) {
            Ok(path) => path,
            Err(err) => {
                println!("Invalid dimensions: {err}");
                return Ok(());
            }
        }
    } else {
        print!("Loading path ...");
        io::stdout().flush()?;
        let path = read_path_file(&path_file).unwrap_or_else(|err| {
            debug!("path load failed: {err}");
            Path::default()
        });
        println!();
        path
    };
    let Some(answer) = prompt_string("Create tree maze? (y = Yes, n = No) ")? else {
        return Ok(());
    };
    let kind = if answer == "y" {
        let Some(answer) = prompt_string(
            "Apply default probability set {163, 118, 123, 123, 94, 103}? (y = Yes, n = No) ",
        )?
        else {
            return Ok(());
        };
        let profile = if answer == "y" {
            ProbabilityProfile::default()
        } else {
            let mut values = [0u8; 6];
            for (n, value) in values.iter_mut().enumerate() {
                let label = format!("Probability value {} (0 - 255): ", n + 1);
                let Some(byte) = prompt_number::<u8>(&label)? else {
                    return Ok(());
                };
                *value = byte;
            }
            ProbabilityProfile::new(values)
        };
        MazeKind::Tree(profile)
    } else {
        let Some(density) = prompt_number::<u16>("Wall density (0 - 65535): ")? else {
            return Ok(());
        };
        MazeKind::Density(density)
    };
    print!("Creating maze ...");
    io::stdout().flush()?;
    let mut rng = Lcg::new(seed);
    let started = Instant::now();
    let built = match kind {
        MazeKind::Tree(profile) => tree_maze(&path, &profile, &mut rng),
        MazeKind::Density(density) => density_maze(&path, density, &mut rng),
    };
    let elapsed = started.elapsed();
    let maze = match built {
        Ok(maze) => maze,
        Err(err) => {
            println!("\nFailed: {err}");
            return Ok(());
        }
    };
    println!("\nFinished in {} milliseconds.", elapsed.as_millis());
    debug!(
        elapsed_ms = elapsed.as_millis() as u64,
        height = maze.height(),
        width = maze.width(),
        "maze built"
    );
    let Some(maze_file) = prompt_string("Maze file (empty if no saving): ")? else {
        return Ok(());
    };
    if !maze_file.is_empty() {
        print!("Saving ...");
        io::stdout().flush()?;
        match write_maze_file(&maze, &maze_file) {
            Ok(()) => println!(" Finished."),
            Err(err) => {
                println!(" Failed!");
                debug!("maze save failed: {err}");
            }
        }
    }
    Ok(())
}

fn new_path() -> io::Result<()> {
    println!("\nCreate new path");
    let Some(height) = prompt_number::<u32>("Height: ")? else {
        return Ok(());
    };
    let Some(width) = prompt_number::<u32>("Width: ")? else {
        return Ok(());
    };
    let Some(start_row) = prompt_number::<u32>("Start row: ")? else {
        return Ok(());
    };
    let Some(start_column) = prompt_number::<u32>("Start column: ")? else {
        return Ok(());
    };
    let Some(end_row) = prompt_number::<u32>("End row: ")? else {
        return Ok(());
    };
    let Some(end_column) = prompt_number::<u32>("End column: ")? else {
        return Ok(());
    };
    let Some(seed) = prompt_number::<i32>("Seed number (32-bit signed integer): ")? else {
        return Ok(());
    };
    let Some(count) = prompt_number::<u16>("Persistency chain length (0 to 65535): ")? else {
        return Ok(());
    };
    let Some(strength) = prompt_number::<u16>("Persistency strength (0 to 65535): ")? else {
        return Ok(());
    };
    print!("Creating path ...");
    io::stdout().flush()?;
    let options = PathGenOptions::new(height, width)
        .with_start(start_row, start_column)
        .with_target(end_row, end_column)
        .with_history(count, strength);
    let mut rng = Lcg::new(seed);
    let started = Instant::now();
    let built = random_path(&options, &mut rng);
    let elapsed = started.elapsed();
    let path = match built {
        Ok(path) => path,
        Err(err) => {
            println!("\nFailed: {err}");
            return Ok(());
        }
    };
    println!("\nFinished in {} milliseconds.", elapsed.as_millis());
    println!("Path length: {}", path.len());
    debug!(
        elapsed_ms = elapsed.as_millis() as u64,
        length = path.len(),
        "path built"
    );
    let Some(path_file) = prompt_string("Save as (empty if no saving): ")? else {
        return Ok(());
    };
    if !path_file.is_empty() {
        print!("Saving ...");
        io::stdout().flush()?;
        match write_path_file(&path, &path_file) {
            Ok(()) => println!(" Finished."),
            Err(err) => {
                println!(" Failed!");
                debug!("path save failed: {err}");
            }
        }
    }
    Ok(())
}

fn solve_maze() -> io::Result<()> {
    println!("\nSolve maze");
    let Some(maze_file) = prompt_string("Maze file name: ")? else {
        return Ok(());
    };
    let Some(start_row) = prompt_number::<u32>("Start row: ")? else {
        return Ok(());
    };
    let Some(start_column) = prompt_number::<u32>("Start column: ")? else {
        return Ok(());
    };
    let Some(end_row) = prompt_number::<u32>("End row: ")? else {
        return Ok(());
    };
    let Some(end_column) = prompt_number::<u32>("End column: ")? else {
        return Ok(());
    };
    let maze = read_maze_file(&maze_file).unwrap_or_else(|err| {
        debug!("maze load failed: {err}");
        Default::default()
    });
    if maze.height() == 1 && maze.width() == 1 {
        println!("Empty maze. Possible failure when reading file.\n");
        return Ok(());
    }
    print!("Solving ...");
    io::stdout().flush()?;
    let started = Instant::now();
    let path = solve(&maze, (start_row, start_column), (end_row, end_column));
    let elapsed = started.elapsed();
    println!("\nFinished in {} milliseconds.", elapsed.as_millis());
    println!("Path length: {}", path.len());
    let average = if start_column == end_column {
        0.0
    } else {
        path.integral() as f32 / (end_column as f32 - start_column as f32)
    };
    println!("Average path i-component: {average}");
    let Some(path_file) = prompt_string("Save as (empty if no saving): ")? else {
        return Ok(());
    };
    if !path_file.is_empty() {
        print!("Saving ...");
        io::stdout().flush()?;
        match write_path_file(&path, &path_file) {
            Ok(()) => println!(" Finished."),
            Err(err) => {
                println!(" Failed!");
                debug!("path save failed: {err}");
            }
        }
    }
    Ok(())
}
