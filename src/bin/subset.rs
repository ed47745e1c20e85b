//! Print `k` tokens drawn uniformly at random, without replacement,
//! from the whitespace-delimited tokens on standard input.
//!
//! The tokens are enqueued into a `RandomizedQueue` and the output is
//! the first `k` items of a single randomized iterator, so it is a
//! uniformly random permutation of the input truncated to `k` lines.

use std::env;
use std::io::{self, BufRead, Write};
use std::process;

use random_queues::RandomizedQueue;

fn main() {
    let k = match env::args().nth(1).map(|raw| raw.parse::<usize>()) {
        Some(Ok(k)) if k > 0 => k,
        _ => {
            eprintln!("usage: subset <k>    (k must be a positive integer)");
            process::exit(2);
        }
    };

    if let Err(err) = run(k) {
        eprintln!("subset: {}", err);
        process::exit(1);
    }
}

fn run(k: usize) -> io::Result<()> {
    let mut queue = RandomizedQueue::new();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        for token in line?.split_whitespace() {
            queue.enqueue(token.to_string());
        }
    }

    if queue.len() < k {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("requested {} tokens but only {} were read", k, queue.len()),
        ));
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for token in queue.iter().take(k) {
        writeln!(out, "{}", token)?;
    }

    Ok(())
}
