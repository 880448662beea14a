//! Demo driver for the generator library
//!
//! Usage: lcg-random [COUNT] [UPPER_LIMIT] [SEED]
//!
//! Prints COUNT values in [1, UPPER_LIMIT]. When SEED is omitted the run
//! is seeded from the wall clock and the chosen seed is echoed so the run
//! can be reproduced.

use std::env;
use std::process::ExitCode;

use lcg_random_core_rs::{seed_from_time, LcgRng};

const DEFAULT_COUNT: u32 = 10;
const DEFAULT_UPPER_LIMIT: i32 = 100;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let count = match parse_arg(&args, 0, DEFAULT_COUNT) {
        Ok(count) => count,
        Err(message) => return usage_error(&message),
    };
    let upper_limit = match parse_arg(&args, 1, DEFAULT_UPPER_LIMIT) {
        Ok(limit) => limit,
        Err(message) => return usage_error(&message),
    };
    let seed = match parse_arg(&args, 2, seed_from_time()) {
        Ok(seed) => seed,
        Err(message) => return usage_error(&message),
    };

    println!("seed: {}", seed);

    let mut rng = LcgRng::new(seed);
    for _ in 0..count {
        match rng.next_in(upper_limit) {
            Ok(value) => println!("{}", value),
            Err(err) => {
                eprintln!("error: {}", err);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

fn parse_arg<T: std::str::FromStr>(args: &[String], index: usize, default: T) -> Result<T, String> {
    match args.get(index) {
        Some(raw) => raw
            .parse()
            .map_err(|_| format!("invalid argument '{}'", raw)),
        None => Ok(default),
    }
}

fn usage_error(message: &str) -> ExitCode {
    eprintln!("error: {}", message);
    eprintln!("usage: lcg-random [COUNT] [UPPER_LIMIT] [SEED]");
    ExitCode::FAILURE
}
