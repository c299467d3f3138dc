//! `harps` command-line client.
//!
//! A thin shell over [`harps::api::HarpsApi`]: parse arguments, build the
//! store from `$HARPS_HOME`, dispatch, print. Editor plugins call it the way
//! they would any other key-value CLI and feed the printed search string to
//! their search command.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
