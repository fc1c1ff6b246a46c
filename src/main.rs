#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::io::{BufWriter, Write};
use std::process::ExitCode;

use fannkuch_redux::fannkuch::for_each_permutation;
use fannkuch_redux::{Fannkuch, FannkuchConfig};

const USAGE: &str =
    "usage: fannkuch-redux <n> [--threads N] [--max-threads N] [--min-task-size N]\n\
     a negative <n> prints all permutations of size |n| in canonical order";

struct MainArgs {
    n: i64,
    config: FannkuchConfig,
}

fn parse_args() -> Result<MainArgs, String> {
    let args: Vec<String> = std::env::args().collect();
    let mut n: Option<i64> = None;
    let mut config = FannkuchConfig::default();
    let next_arg = |i: usize, flag: &str| -> Result<&str, String> {
        args.get(i)
            .map(String::as_str)
            .ok_or_else(|| format!("{flag} requires a value"))
    };
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--threads" => {
                i += 1;
                let count: usize = next_arg(i, "--threads")?
                    .parse()
                    .map_err(|_| "--threads requires a positive integer".to_string())?;
                config = config.thread_count(count);
            }
            "--max-threads" => {
                i += 1;
                let count: usize = next_arg(i, "--max-threads")?
                    .parse()
                    .map_err(|_| "--max-threads requires a positive integer".to_string())?;
                config = config.max_threads(count);
            }
            "--min-task-size" => {
                i += 1;
                let size: u64 = next_arg(i, "--min-task-size")?
                    .parse()
                    .map_err(|_| "--min-task-size requires a non-negative integer".to_string())?;
                config = config.min_task_size(size);
            }
            arg => {
                if n.is_some() {
                    return Err(format!("unexpected argument: {arg}"));
                }
                n = Some(
                    arg.parse()
                        .map_err(|_| format!("not an integer: {arg}"))?,
                );
            }
        }
        i += 1;
    }
    let n = n.ok_or_else(|| "missing permutation size".to_string())?;
    Ok(MainArgs { n, config })
}

/// Diagnostic mode: print every permutation of size `n` in canonical order
/// as a 1-based concatenated digit string, one per line.
fn print_permutations(n: usize) -> Result<(), String> {
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut line = String::new();
    for_each_permutation(n, |perm| {
        line.clear();
        for &digit in perm {
            line.push_str(&(digit as u32 + 1).to_string());
        }
        line.push('\n');
        out.write_all(line.as_bytes())
            .expect("failed to write to stdout");
    })
    .map_err(|err| err.to_string())?;
    out.flush().expect("failed to flush stdout");
    Ok(())
}

fn run(args: MainArgs) -> Result<(), String> {
    if args.n < 0 {
        return print_permutations(args.n.unsigned_abs() as usize);
    }

    let engine = Fannkuch::with_config(args.config);
    let outcome = engine
        .run(args.n as usize)
        .map_err(|err| err.to_string())?;
    println!("{}\nPfannkuchen({}) = {}", outcome.checksum, args.n, outcome.max_flips);
    Ok(())
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("fannkuch-redux: {message}\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("fannkuch-redux: {message}");
            ExitCode::FAILURE
        }
    }
}
