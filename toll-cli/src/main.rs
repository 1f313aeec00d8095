use {
    log::*,
    std::process::exit,
    toll_cli::cli::{app, parse_command, process_command},
};

fn main() {
    let matches = app().get_matches();
    let command = match parse_command(&matches) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {err}");
            exit(1);
        }
    };
    init_logging(command.verbose);

    match process_command(&command) {
        Ok(output) => println!("{}", output.trim_end()),
        Err(err) => {
            error!("toll calculation failed: {err:?}");
            eprintln!("error: {err}");
            exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .try_init();
}
