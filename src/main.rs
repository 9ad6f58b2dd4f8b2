use clap::Parser;

use calling_form_check::cli::{Cli, Commands};
use calling_form_check::commands::{run_check, run_list};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::List(args) => run_list(args, &cli),
    };

    std::process::exit(exit_code);
}
