//! Benchmark driver: generates the matrix, repeats each strategy's full
//! cycle k times, and prints the timing report.
//!
//! The repetition is intentional. One iteration of the distributed cycle
//! is distribution + local reduction + global reduction; repeating it k
//! times amortises measurement noise and keeps the distribution cost
//! inside the measured window, matching what the other strategies time.

use std::hint::black_box;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};

use rowmax_compute::{ChannelWorld, ComputeError, ThreadedScanner, WorkerGroup};
use rowmax_core::reduce::{find_max_row, local_max_row};
use rowmax_core::{Matrix, MaxRow, PartitionPlan};

/// Run the single-threaded baseline.
pub fn run_sequential(n: usize, m: usize, k: usize, seed: u64) -> Result<()> {
    let matrix = Matrix::filled(n, m, seed);

    // One untimed pass for the reported answer.
    let result = find_max_row(&matrix);

    let start = Instant::now();
    for _ in 0..k {
        black_box(find_max_row(black_box(&matrix)));
    }
    let total = start.elapsed();

    print_report("Sequential scan", n, m, None, result, k, total);
    Ok(())
}

/// Run the shared-memory (Rayon) strategy.
pub fn run_threaded(n: usize, m: usize, k: usize, threads: usize, seed: u64) -> Result<()> {
    let matrix = Matrix::filled(n, m, seed);
    let scanner = ThreadedScanner::new(threads)?;

    let result = scanner.find_max_row(&matrix);

    let start = Instant::now();
    for _ in 0..k {
        black_box(scanner.find_max_row(black_box(&matrix)));
    }
    let total = start.elapsed();

    print_report(
        "Shared-memory scan",
        n,
        m,
        Some(("Threads", scanner.threads())),
        result,
        k,
        total,
    );
    Ok(())
}

/// Run the message-passing strategy on in-process workers.
///
/// Only rank 0 owns the matrix; each iteration scatters fresh row blocks
/// to every rank and all-reduces the local results, so the timed window
/// covers distribution as well as computation.
pub fn run_distributed(n: usize, m: usize, k: usize, workers: usize, seed: u64) -> Result<()> {
    let workers = if workers == 0 {
        thread::available_parallelism().map(|c| c.get()).unwrap_or(1)
    } else {
        workers
    };

    let matrix = Matrix::filled(n, m, seed);
    let plan = PartitionPlan::new(n, m, workers);
    log::debug!(
        "distributed run: {workers} workers, rank 0 block {} rows",
        plan.rows(0)
    );

    // One untimed cycle for the reported answer, as the other variants
    // do. The all-reduce postcondition: every rank holds the identical
    // pair.
    let results = distributed_cycles(&matrix, &plan, workers, 1)?;
    let global = results[0];
    debug_assert!(results.iter().all(|r| *r == global));

    let start = Instant::now();
    distributed_cycles(&matrix, &plan, workers, k)?;
    let total = start.elapsed();

    let result = (!global.is_sentinel()).then_some(global);
    print_report(
        "Message-passing scan",
        n,
        m,
        Some(("Workers", workers)),
        result,
        k,
        total,
    );
    Ok(())
}

/// Run `k` full cycles on a fresh worker group and return every rank's
/// final global result.
fn distributed_cycles(
    matrix: &Matrix,
    plan: &PartitionPlan,
    workers: usize,
    k: usize,
) -> Result<Vec<MaxRow>> {
    let groups = ChannelWorld::create(workers);
    thread::scope(|scope| -> Result<Vec<MaxRow>> {
        let handles: Vec<_> = groups
            .into_iter()
            .map(|mut group| {
                let source = group.is_coordinator().then_some(matrix);
                scope.spawn(move || worker_loop(&mut group, source, plan, k))
            })
            .collect();

        let mut results = Vec::with_capacity(workers);
        for handle in handles {
            let result = handle
                .join()
                .map_err(|_| anyhow!("worker thread panicked"))??;
            results.push(result);
        }
        Ok(results)
    })
}

/// One worker's program: k iterations of scatter → local reduce → global
/// reduce. Identical on every rank; only the rank distinguishes them.
fn worker_loop<G: WorkerGroup>(
    group: &mut G,
    source: Option<&Matrix>,
    plan: &PartitionPlan,
    k: usize,
) -> Result<MaxRow, ComputeError> {
    let rank = group.rank();
    let mut block = Vec::new();
    let mut global = MaxRow::SENTINEL;
    for _ in 0..k {
        group.scatter_rows(source, plan, &mut block)?;
        let local = local_max_row(&block, plan.rows(rank), plan.ncols(), plan.start_row(rank));
        global = group.allreduce_max_row(local)?;
    }
    Ok(global)
}

fn print_report(
    title: &str,
    n: usize,
    m: usize,
    parallelism: Option<(&str, usize)>,
    result: Option<MaxRow>,
    k: usize,
    total: Duration,
) {
    let avg = total.as_secs_f64() / k.max(1) as f64;

    println!("=== {title} ===");
    println!("Matrix size: {n} x {m}");
    if let Some((label, count)) = parallelism {
        println!("{label}: {count}");
    }
    match result {
        Some(best) => println!("Max-sum row: {} (sum = {:.2})", best.row, best.sum),
        None => println!("Matrix has no rows; result undefined"),
    }
    println!("Iterations (k): {k}");
    println!("Total time: {:.6} s", total.as_secs_f64());
    println!("Average time: {:.9} s", avg);
    println!("{}", result_line(result, avg));
}

/// Machine-parseable summary line consumed by the benchmark scripts.
fn result_line(result: Option<MaxRow>, avg_seconds: f64) -> String {
    let (row, sum) = result.map_or((0, 0.0), |r| (r.row, r.sum));
    format!("RESULT:{row}:{sum:.2}:{avg_seconds:.9}")
}
