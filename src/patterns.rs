//! Provides a set of student datasets useful for testing, benchmarking and the interactive driver.
//!
//! All randomness derives from [`random_init_seed`], which can be pinned with the
//! `STUDENT_SORT_SEED` environment variable.

use std::env;
use std::sync::atomic::{AtomicBool, Ordering};

use rand::prelude::*;

use once_cell::sync::OnceCell;

use crate::order::SortOrder;
use crate::student::Student;

pub const SEED_ENV_VAR: &str = "STUDENT_SORT_SEED";

pub const MAX_CREDITS: u32 = 150;

// --- Public ---

pub fn random(size: usize) -> Vec<Student> {
    random_with(&mut seeded_rng(), size)
}

/// Like [`random`] but draws from `rng`, so successive calls produce different datasets.
pub fn random_with<R: Rng>(rng: &mut R, size: usize) -> Vec<Student> {
    // GPA with two decimals in [0.00, 4.00], credits in [0, 150].
    (0..size)
        .map(|_| {
            let gpa = (rng.gen::<f64>() * 400.0).round() / 100.0;
            let credits = rng.gen_range(0..=MAX_CREDITS);
            student(gpa, credits)
        })
        .collect()
}

pub fn random_uniform(
    size: usize,
    gpa_steps: u32,
    credits: std::ops::RangeInclusive<u32>,
) -> Vec<Student> {
    // Few distinct values, lots of duplicate keys. An empty credits range has nothing to draw
    // from and yields no students.
    if credits.is_empty() {
        return Vec::new();
    }

    let mut rng = seeded_rng();
    let gpa_steps = gpa_steps.max(1);

    (0..size)
        .map(|_| {
            let step = rng.gen_range(0..=gpa_steps);
            let gpa = 4.0 * f64::from(step) / f64::from(gpa_steps);
            student(gpa, rng.gen_range(credits.clone()))
        })
        .collect()
}

pub fn all_equal(size: usize) -> Vec<Student> {
    (0..size).map(|_| student(3.0, 10)).collect()
}

pub fn ascending(size: usize, order: SortOrder) -> Vec<Student> {
    let mut vals = random(size);
    vals.sort_by(order.comparator());

    vals
}

pub fn descending(size: usize, order: SortOrder) -> Vec<Student> {
    let mut vals = random(size);
    vals.sort_by(|a, b| order.compare(b, a));

    vals
}

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);

pub fn disable_fixed_seed() {
    USE_FIXED_SEED.store(false, Ordering::Release);
}

/// Seed shared by all patterns in this process. Taken from `STUDENT_SORT_SEED` when set to a
/// valid `u64`, otherwise drawn at random once.
pub fn random_init_seed() -> u64 {
    if USE_FIXED_SEED.load(Ordering::Acquire) {
        static SEED: OnceCell<u64> = OnceCell::new();
        *SEED.get_or_init(|| seed_from_env().unwrap_or_else(|| thread_rng().gen()))
    } else {
        thread_rng().gen()
    }
}

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

// --- Private ---

fn seed_from_env() -> Option<u64> {
    let val = env::var(SEED_ENV_VAR).ok()?;
    match val.trim().parse() {
        Ok(seed) => Some(seed),
        Err(_) => {
            log::warn!("ignoring {SEED_ENV_VAR}='{val}', expected an unsigned integer");
            None
        }
    }
}

fn student(gpa: f64, credits: u32) -> Student {
    // Both generators stay inside the valid ranges by construction.
    match Student::new(gpa.clamp(0.0, 4.0), i64::from(credits)) {
        Ok(student) => student,
        Err(err) => unreachable!("generated invalid student: {err}"),
    }
}
