//! Tunepilot - Entry Point
//!
//! CLI host for the command interpreter: give it a prompt as an argument for
//! one-shot use, or run it bare for an interactive session. The Spotify
//! client is built from the environment and must carry a valid token.

use clap::Parser;
use std::io::{self, Write};
use tokio::runtime::Runtime;
use tunepilot::client::SpotifyClient;
use tunepilot::command::interpret;
use tunepilot::core::error::Result;

/// Natural language playback commander for Spotify
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Prompt to interpret (e.g. "play album ok computer and volume up");
    /// omit for an interactive session
    prompt: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("tunepilot=debug")
        .init();

    let args = Args::parse();

    // Async runtime for the remote calls; the interpreter itself is sequential
    let rt = Runtime::new()?;
    let client = SpotifyClient::from_env()?;
    let mut rng = rand::thread_rng();

    if let Some(prompt) = args.prompt {
        let response = rt.block_on(interpret(&prompt, &client, &mut rng));
        println!("{}", response);
        return Ok(());
    }

    println!("=== TUNEPILOT ===");
    println!("Chain commands with \"and\": play album in rainbows and volume up");
    println!("Type quit or q to exit.");
    println!();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "q" {
            break;
        }

        let response = rt.block_on(interpret(input, &client, &mut rng));
        println!("{}", response);
    }

    println!("Goodbye!");
    Ok(())
}
