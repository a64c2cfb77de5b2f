//! Text maze demo: generate, solve, optionally find an alternative route.
//!
//! Run: cargo run --bin maze -- --rows 15 --cols 30 --loops --terrain --algo astar --alt

use clap::Parser;
use maze_demos::Session;
use maze_demos::cli::Args;

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new(args.config(), args.seed)?;
    println!("{}", session.summary());

    let found = session.solve(args.algo);
    println!("{}", session.render());
    println!("{}", session.report());
    if args.trace {
        print_trace(&session);
    }

    if args.alt && found {
        session.solve_alternative(args.algo)?;
        println!();
        println!("Alternative route:");
        println!("{}", session.render());
        println!("{}", session.report());
    }
    Ok(())
}

fn print_trace(session: &Session) {
    let cells: Vec<String> = session.solver().trace().iter().map(|p| p.to_string()).collect();
    println!("Trace: {}", cells.join(" "));
}
