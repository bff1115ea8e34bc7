use std::io::{self, BufRead, Write};

use colored::Colorize;

use kb_chat::Dispatcher;

pub fn run(name: &str, seed: Option<u64>) -> Result<(), String> {
    let dispatcher = Dispatcher::new();
    let mut rng = super::make_rng(seed);

    println!("  {} Knobelbote chat session", "Starting".bold());
    println!("  Rolling as {name}. Commands: !roll, !d20, !commands");
    println!("  Type 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            break;
        }

        match dispatcher.handle(name, input, &mut rng) {
            Some(reply) => println!("{reply}\n"),
            None => println!("{}\n", "no such command (try !commands)".yellow()),
        }
    }

    Ok(())
}
