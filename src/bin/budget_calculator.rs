use std::{env, process};

use budget_calculator::{
    cli::{init_workbook, CliMode, Shell},
    config::ConfigManager,
    init,
    utils::build_info,
};

fn main() {
    init();

    let args: Vec<String> = env::args().skip(1).collect();
    let manager = ConfigManager::new();
    let mode = CliMode::detect();

    match args.first().map(String::as_str) {
        None => run_session(&manager, mode),
        Some("init") => {
            let force = args.iter().skip(1).any(|arg| arg == "--force");
            match init_workbook(&manager, mode, force) {
                Ok(path) => println!("Created workbook at {}", path.display()),
                Err(err) => {
                    eprintln!("Error: {err}");
                    process::exit(1);
                }
            }
        }
        Some("version") | Some("--version") | Some("-V") => println!("{}", build_info::current()),
        Some("help") | Some("--help") | Some("-h") => print_usage(),
        Some(_) => {
            print_usage();
            process::exit(1);
        }
    }
}

fn run_session(manager: &ConfigManager, mode: CliMode) {
    let mut shell = match Shell::start(manager, mode) {
        Ok(shell) => shell,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };

    if let Err(err) = shell.run() {
        tracing::error!(error = %err, "session aborted");
        println!("An unexpected error occurred: {err}");
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!(
        "Usage: budget_calculator [command]\n\
         Commands:\n  \
         (none)          start the interactive budget calculator\n  \
         init [--force]  create an empty workbook\n  \
         version         show build information\n\
         Environment:\n  \
         BUDGET_CALCULATOR_HOME    application directory (default ~/.budget_calculator)\n  \
         BUDGET_CALCULATOR_SCRIPT  read plain lines from stdin without delays"
    );
}
