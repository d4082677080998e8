use clap::Parser;
use leet::{interpreter::evaluator::operation::OPERATIONS, ops::Console, run_script};

/// leet runs tiny numeric and printing operations from a one-line call
/// script, such as `leet "double(4); countdown()"`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Lists the names of all available operations and exits.
    #[arg(short, long)]
    list: bool,

    /// Calls to run, separated by newlines or `;`.
    #[arg(required_unless_present = "list")]
    script: Option<String>,
}

fn main() {
    let args = Args::parse();

    if args.list {
        for name in OPERATIONS {
            println!("{name}");
        }
        return;
    }

    let script = args.script.unwrap_or_default();
    let mut console = Console::stdout();

    if let Err(e) = run_script(&script, &mut console) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
