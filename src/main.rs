use clap::Parser;
use nosh::cli::commands::{Cli, Commands};
use nosh::cli::handlers;

fn main() {
    let cli = Cli::parse();
    let diary_dir = cli.diary_dir.clone();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            if let Err(e) = nosh::tui::run(diary_dir.as_deref()) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Init(args)) => {
            // Init is handled before diary discovery
            if let Err(e) = handlers::cmd_init(args) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
