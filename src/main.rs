use std::io;
use std::process;

use clap::Parser;

use gauss_cdf::{emit, generate, CdfError, Params};

#[derive(Parser)]
#[command(about = "Print a discrete Gaussian CDF table as a source literal")]
struct Args {
    /// Standard deviation of the discrete Gaussian
    sigma: f64,
    /// Print every k entries of the CDF
    skip: usize,
}

fn run(args: Args) -> Result<(), CdfError> {
    let params = Params::new(args.sigma, args.skip)?;
    let table = generate(&params);

    let stdout = io::stdout();
    emit::write_table(&mut stdout.lock(), &params, &table)?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("{err}");
        process::exit(1);
    }
}
