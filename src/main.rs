//! dx-scaffold's entry point: parses arguments, sets up logging and hands
//! over to the top-level run handler.

use dx_scaffold::{
    cli::{get_args, run},
    diagnostics::Diagnostics,
    logger::init_logger,
    prompt::DialoguerPrompter,
};

fn main() {
    let args = get_args();
    init_logger(args.verbose);

    let log_file = args.log_file.clone().unwrap_or_else(Diagnostics::default_log_file);
    let diagnostics = Diagnostics::new(log_file);
    let prompter = DialoguerPrompter::new();

    std::process::exit(run(args, &prompter, &diagnostics));
}
