//! Interactive card price viewer.
//!
//! Loads a card price dataset once, prints the top 10 by market price, then
//! keeps prompting for a metric (low, mid, high, market) and re-renders the
//! table from the cached dataset. No re-fetch ever happens after startup.
//!
//! Usage: `card-prices [SOURCE]` where SOURCE is a file path or an http(s)
//! URL. Defaults to `cards_data.json` in the working directory.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use card_prices::{config, CardTable, Metric, TextTable};

fn main() -> ExitCode {
    let mut builder = CardTable::builder();
    if let Some(source) = std::env::args().nth(1) {
        if source.starts_with("http://") || source.starts_with("https://") {
            builder = builder.url(source);
        } else {
            builder = builder.file(source);
        }
    }

    let mut table_out = TextTable::new();
    let Some(table) = builder.initialize(Metric::Market, &mut table_out) else {
        println!("{}", config::LOAD_FAILURE_MESSAGE);
        return ExitCode::FAILURE;
    };

    println!("Welcome to the card price viewer!");
    println!("\nTop cards by market price:\n");
    print!("{}", table_out.as_text());

    let stdin = io::stdin();
    loop {
        println!("\nAvailable price metrics: low, mid, high, market");
        print!("Enter a metric to sort by (or type 'quit' to exit): ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let choice = line.trim().to_ascii_lowercase();
        if choice == "quit" || choice == "exit" {
            println!("Goodbye!");
            break;
        }
        match choice.parse::<Metric>() {
            Ok(metric) => {
                table.render(metric, &mut table_out);
                println!("\nTop cards by {metric} price:\n");
                print!("{}", table_out.as_text());
            }
            Err(_) => {
                println!("Invalid choice. Please choose one of the available metrics.");
            }
        }
    }

    ExitCode::SUCCESS
}
