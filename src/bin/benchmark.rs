//! Serial vs rayon generation timing on random soups

use std::time::Instant;
use life::Board;
use rand::{SeedableRng, rngs::StdRng};

fn soup(size: usize) -> Board {
    let mut board = Board::new(size).expect("benchmark sizes are positive");
    board.randomize(0.3, &mut StdRng::seed_from_u64(size as u64));
    board
}

fn benchmark(size: usize, iterations: u32, evolve: fn(&Board) -> Board) -> f64 {
    let mut board = soup(size);

    let start = Instant::now();
    for _ in 0..iterations {
        board = evolve(&board);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Step Benchmark ===\n");

    let sizes = [64, 128, 256, 512, 1024];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(size, iterations, Board::evolve);
        let parallel_ms = benchmark(size, iterations, Board::evolve_parallel);

        println!(
            "{:>10} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }
}
