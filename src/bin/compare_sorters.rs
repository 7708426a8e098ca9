//! Interactive comparison of the four sorting strategies on random or file based student data.
//!
//! Set `STUDENT_SORT_SEED` to reproduce a run and `RUST_LOG` to see per pass details.

use std::io::{self, BufRead, Write};

use log::{error, warn};
use rand::rngs::StdRng;

use student_sort::{input, patterns, report, Algorithm, Student, StudentScanner};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let seed = patterns::random_init_seed();
    println!("Sorting Algorithms Performance Analysis using Student Data\n");
    println!("Seed: {seed}");
    println!("keys: 1 (random student data) 2 (file input) 3 (exit)");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut rng = patterns::seeded_rng();

    let mut trial = 1;
    loop {
        let Some(choice) = prompt(&mut lines, &format!("Trial {trial}: ")) else {
            return;
        };

        // A non-numeric choice uses up the trial, an out of range number does not.
        let Ok(choice) = choice.trim().parse::<i64>() else {
            println!("Invalid choice. Please enter 1, 2, or 3.");
            trial += 1;
            continue;
        };

        let students = match choice {
            1 => random_students(&mut lines, &mut rng),
            2 => file_students(&mut lines),
            3 => {
                println!("Exiting program.");
                return;
            }
            _ => {
                println!("Invalid choice. Please enter 1, 2, or 3.");
                continue;
            }
        };

        let Some(students) = students else {
            continue;
        };

        match run_trial(&students) {
            Ok(scanners) => {
                println!();
                print!("{}", report::stats_table(&scanners));

                if let Some(median) = scanners.first().and_then(StudentScanner::median_student) {
                    println!("\nMedian Student Profile: {median}");
                }

                export(&mut lines, &scanners);
            }
            Err(err) => error!("trial {trial} failed: {err}"),
        }

        trial += 1;
    }
}

fn run_trial(students: &[Student]) -> Result<Vec<StudentScanner>, student_sort::Error> {
    Algorithm::ALL
        .iter()
        .map(|&algorithm| {
            let mut scanner = StudentScanner::new(students, algorithm)?;
            scanner.scan()?;
            Ok(scanner)
        })
        .collect()
}

fn random_students(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    rng: &mut StdRng,
) -> Option<Vec<Student>> {
    let input = prompt(lines, "Enter number of random students: ")?;

    match input.trim().parse::<usize>() {
        Ok(0) => {
            println!("Number of students must be at least 1.");
            None
        }
        Ok(count) => Some(patterns::random_with(rng, count)),
        Err(_) => {
            println!("Invalid number. Please enter an integer.");
            None
        }
    }
}

fn file_students(lines: &mut impl Iterator<Item = io::Result<String>>) -> Option<Vec<Student>> {
    let filename = prompt(lines, "File name: ")?;
    let filename = filename.trim();

    match input::read_students(filename) {
        Ok(students) => Some(students),
        Err(student_sort::InputError::Io(err)) => {
            warn!("failed to open '{filename}': {err}");
            println!("Error: File not found: {filename}");
            None
        }
        Err(err) => {
            println!("Error: Input file format is incorrect. {err}");
            None
        }
    }
}

fn export(lines: &mut impl Iterator<Item = io::Result<String>>, scanners: &[StudentScanner]) {
    let Some(answer) = prompt(lines, "Export results to CSV? (y/n): ") else {
        return;
    };
    if !answer.trim_start().starts_with(['y', 'Y']) {
        return;
    }

    let Some(filename) = prompt(lines, "Enter filename for export (e.g., results.csv): ") else {
        return;
    };
    let filename = filename.trim();

    match report::export_csv(filename, scanners) {
        Ok(()) => println!("Data exported successfully to {filename}"),
        Err(err) => {
            warn!("failed to export to '{filename}': {err}");
            println!("Error: Could not write to file: {filename}");
        }
    }
}

/// Prints `msg` and reads one line. `None` on EOF or a broken stdin.
fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>, msg: &str) -> Option<String> {
    print!("{msg}");
    if let Err(err) = io::stdout().flush() {
        warn!("failed to flush stdout: {err}");
    }

    match lines.next()? {
        Ok(line) => Some(line),
        Err(err) => {
            error!("failed to read stdin: {err}");
            None
        }
    }
}
