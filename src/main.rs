// src/main.rs
//
// Console shell for the dog shelter.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dogshelter::application::{dispatch, parse, CommandOutput, ErrorResponse};
use dogshelter::{AppState, ShelterConfig};

fn main() -> anyhow::Result<()> {
    // 1. CONFIGURATION + LOGGING
    let config = ShelterConfig::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // 2. STATE
    let mut state = AppState::from_config(&config).context("failed to open the shelter")?;

    println!("Dog shelter. Type 'help' for commands.");

    // 3. READ-DISPATCH-PRINT
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let output = parse(&line)
            .map_err(ErrorResponse::validation)
            .and_then(|command| dispatch(&mut state, command));

        match output {
            Ok(CommandOutput::Quit) => break,
            Ok(output) => println!("{}", output),
            Err(error) => println!("{}", error),
        }
    }

    // 4. SHUTDOWN
    if state.has_store() {
        state.persist().context("failed to save the shelter")?;
    }
    println!("{}", CommandOutput::Quit);
    Ok(())
}
