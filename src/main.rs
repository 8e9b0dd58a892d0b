use std::process::exit;

fn main() {
    if let Err(e) = demogrid::app::run_cli() {
        demogrid::logging::error(&e);
        exit(1);
    }
}
