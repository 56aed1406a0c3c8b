/*
 * Plumbing shared by every year's crate: input loading, the `solve!` and
 * `debugln!` macros, and the all-days runner. Solutions live in the per-year
 * crates; import helpers from here, e.g. `use aoc_core::helpers::parse;`.
 */

pub mod helpers;
pub mod runner;

use std::fs;
use std::path::Path;

pub const ANSI_BOLD: &str = "\x1b[1m";
pub const ANSI_ITALIC: &str = "\x1b[3m";
pub const ANSI_RESET: &str = "\x1b[0m";

/// A day's part with its answer rendered to a string, so runners and the
/// answer harness can treat all days uniformly.
pub type Solver = fn(&str) -> Option<String>;

/// Reads `<manifest_dir>/src/<folder>/<day, zero-padded>.txt`, or `None` if
/// the file is absent (real puzzle inputs are not committed).
pub fn try_read_file(manifest_dir: &str, folder: &str, day: u8) -> Option<String> {
    let path = Path::new(manifest_dir)
        .join("src")
        .join(folder)
        .join(format!("{day:02}.txt"));
    fs::read_to_string(path).ok()
}

pub fn read_file(manifest_dir: &str, folder: &str, day: u8) -> String {
    try_read_file(manifest_dir, folder, day)
        .unwrap_or_else(|| panic!("could not open {folder} file for day {day}"))
}

/// Runs one part and prints `Part N: <answer>` with the elapsed wall time,
/// or `Part N: unsolved` if the part returned `None`.
#[macro_export]
macro_rules! solve {
    ($part:expr, $solver:expr, $input:expr) => {{
        use std::fmt::Display;
        use std::time::Instant;

        fn run<T: Display>(part: u8, solver: impl FnOnce(&str) -> Option<T>, input: &str) {
            let timer = Instant::now();
            let answer = solver(input);
            let elapsed = timer.elapsed();
            match answer {
                Some(answer) => println!(
                    "{}Part {part}:{} {answer} {}(elapsed: {elapsed:.2?}){}",
                    $crate::ANSI_BOLD,
                    $crate::ANSI_RESET,
                    $crate::ANSI_ITALIC,
                    $crate::ANSI_RESET,
                ),
                None => println!("{}Part {part}:{} unsolved", $crate::ANSI_BOLD, $crate::ANSI_RESET),
            }
        }

        run($part, $solver, $input);
    }};
}

/// Like `println!`, but only in debug builds. Handy for tracing a solution
/// against the sample input without slowing down the real one.
#[macro_export]
macro_rules! debugln {
    ($($args:tt)*) => {
        #[cfg(debug_assertions)]
        println!($($args)*)
    };
}

/// `print!` counterpart of [`debugln!`].
#[macro_export]
macro_rules! debug {
    ($($args:tt)*) => {
        #[cfg(debug_assertions)]
        print!($($args)*)
    };
}
