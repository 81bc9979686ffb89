use std::io::{self, BufRead};

use kette::Success;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(err) = main_err() {
        eprintln!("error: {err}");
    }
}

fn main_err() -> io::Result<()> {
    let parser = kette::display_error(kette_words::words());

    for line in io::stdin().lock().lines() {
        let line = line?;
        if let Success(words, _) = parser.parse(&line) {
            println!("{}", words.join(" | "));
        }
    }

    Ok(())
}
