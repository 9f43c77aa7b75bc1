mod app;
mod cli;
mod logging;
mod terminal;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{e:#}"); // pretty anyhow chain
        std::process::exit(1);
    }
}
