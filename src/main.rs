// src/main.rs

use umaskd::{cli, logging, run};

fn main() {
    if let Err(err) = run_main() {
        eprintln!("umaskd error: {err:?}");
        std::process::exit(1);
    }
}

fn run_main() -> umaskd::errors::Result<()> {
    let args = cli::parse();

    if args.version {
        println!("umaskd {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    logging::init_logging(args.log_level, args.verbose)?;
    run(args)
}
