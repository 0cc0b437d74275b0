use std::io;

fn main() {
    let level = solitaire_cli::config::load()
        .map(|config| config.log_level)
        .unwrap_or_else(|_| "warn".to_string());
    solitaire_cli::logging::init(&level);

    let mut out = io::stdout();
    let mut err = io::stderr();
    let code = solitaire_cli::run(std::env::args(), &mut out, &mut err);
    std::process::exit(code);
}
