#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::env;
use std::time::Instant;

use fannkuch_redux::{Fannkuch, FannkuchConfig};

#[derive(Clone, Debug)]
struct BenchConfig {
    n: usize,
    max_threads: usize,
    warmup: u32,
    iters: u32,
    json: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            n: 10,
            max_threads: num_cpus::get_physical().max(1),
            warmup: 1,
            iters: 3,
            json: false,
        }
    }
}

fn parse_args() -> BenchConfig {
    let mut cfg = BenchConfig::default();
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--n" => {
                if let Some(v) = args.next() {
                    cfg.n = v.parse().expect("--n expects usize");
                }
            }
            "--max-threads" => {
                if let Some(v) = args.next() {
                    cfg.max_threads = v.parse().expect("--max-threads expects usize");
                }
            }
            "--warmup" => {
                if let Some(v) = args.next() {
                    cfg.warmup = v.parse().expect("--warmup expects u32");
                }
            }
            "--iters" => {
                if let Some(v) = args.next() {
                    cfg.iters = v.parse().expect("--iters expects u32");
                }
            }
            "--json" => cfg.json = true,
            other => panic!(
                "unknown argument: {other}\nusage: bench_scale [--n N] [--max-threads N] [--warmup N] [--iters N] [--json]"
            ),
        }
    }
    cfg
}

fn best_run_ms(engine: &Fannkuch, n: usize, warmup: u32, iters: u32) -> f64 {
    for _ in 0..warmup {
        engine.run(n).expect("benchmark run failed");
    }
    let mut best = f64::INFINITY;
    for _ in 0..iters.max(1) {
        let start = Instant::now();
        engine.run(n).expect("benchmark run failed");
        best = best.min(start.elapsed().as_secs_f64() * 1e3);
    }
    best
}

fn main() {
    let cfg = parse_args();

    let serial = Fannkuch::with_config(FannkuchConfig::default().thread_count(1));
    let baseline_ms = best_run_ms(&serial, cfg.n, cfg.warmup, cfg.iters);

    let mut threads = 1;
    while threads <= cfg.max_threads {
        let engine = Fannkuch::with_config(
            FannkuchConfig::default()
                .thread_count(threads)
                .min_task_size(1),
        );
        let best_ms = best_run_ms(&engine, cfg.n, cfg.warmup, cfg.iters);
        let speedup = baseline_ms / best_ms;
        if cfg.json {
            println!(
                "{{\"n\":{},\"threads\":{},\"best_ms\":{:.3},\"speedup\":{:.3}}}",
                cfg.n, threads, best_ms, speedup
            );
        } else {
            println!(
                "n={} threads={:>3} best={:>9.3} ms speedup={:>6.2}x",
                cfg.n, threads, best_ms, speedup
            );
        }
        threads *= 2;
    }
}
