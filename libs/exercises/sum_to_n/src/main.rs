use clap::Parser;
use sum_to_n::{MAX_N, MAX_RECURSION_DEPTH, sum_to_n_a, sum_to_n_b, sum_to_n_c};

/// Print T(n) computed iteratively, recursively and in closed form.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Upper bound of the sum (at most 6074000999, the u64 limit)
    #[arg(value_parser = clap::value_parser!(u64).range(..=MAX_N))]
    n: u64,

    /// Skip the recursive variant (always skipped above 10000)
    #[arg(long)]
    skip_recursive: bool,
}

impl Args {
    fn run_recursive(&self) -> bool {
        !self.skip_recursive && self.n <= MAX_RECURSION_DEPTH
    }
}

fn main() {
    let args = Args::parse();

    println!("sum_to_n_a({}) = {}", args.n, sum_to_n_a(args.n));
    if args.run_recursive() {
        println!("sum_to_n_b({}) = {}", args.n, sum_to_n_b(args.n));
    } else if !args.skip_recursive {
        eprintln!(
            "sum_to_n_b({}) skipped: recursion depth above {}",
            args.n, MAX_RECURSION_DEPTH
        );
    }
    println!("sum_to_n_c({}) = {}", args.n, sum_to_n_c(args.n));
}
