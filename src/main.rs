use std::fs;

use clap::Parser;

/// monkey is a tree-walking interpreter for the Monkey programming
/// language. Run it with no arguments for an interactive session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells monkey to treat CONTENTS as a script path instead of source.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode automatically prints out the value of the last statement
    /// of a monkey script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Inline source or a script path; omit to start the REPL.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        monkey::repl::start();
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not \
                       exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    if let Err(e) = monkey::run_program(&script, args.pipe_mode) {
        eprintln!("{e}");
    }
}
