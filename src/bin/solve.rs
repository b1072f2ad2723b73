use std::env;
use std::process;

use broadcast_sssp::diagnostics::{self, Severity};
use broadcast_sssp::{solve, QueryConfig};

fn main() {
    // Optional first argument: path to a JSON query configuration
    let args: Vec<String> = env::args().collect();
    let config = match args.get(1) {
        Some(path) => QueryConfig::from_path(path),
        None => Ok(QueryConfig::default()),
    };

    let outcome = config.and_then(|config| {
        if let Err(err) = diagnostics::init_logger(config.debug) {
            eprintln!("Cannot install logger: {}", err);
        }
        solve(&config)
    });

    match outcome {
        Ok(solution) => print!("{}", solution.report),
        Err(err) => {
            eprint!("{}", diagnostics::render(Severity::Fatal, &err));
            process::exit(1);
        }
    }
}
