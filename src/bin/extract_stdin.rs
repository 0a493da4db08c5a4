//! Simple CLI that reads HTML from stdin and outputs JSON to stdout.
//!
//! Usage: `extract_stdin [BASE_URL] < page.html`

use rs_jparser::{extract_bytes_with_options, Options};
use std::io::{self, Read};

fn main() {
    let mut html = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut html) {
        eprintln!("Failed to read from stdin: {err}");
        std::process::exit(1);
    }

    let options = Options {
        url: std::env::args().nth(1),
        ..Options::default()
    };

    let json = extract_bytes_with_options(&html, &options).and_then(|result| result.to_json());
    match json {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
