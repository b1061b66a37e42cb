//! Interactive terminal chat client against a running relay.
//! Run with: cargo run --bin clipscout-chat

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clipscout::chat::{ChatSession, HttpRelay, Message, SubmitOutcome};

/// Environment variable pointing at the relay server.
const RELAY_URL_VAR: &str = "CLIPSCOUT_URL";

fn main() -> ExitCode {
    let base_url = std::env::var(RELAY_URL_VAR)
        .unwrap_or_else(|_| "http://127.0.0.1:3000".to_string());

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create runtime: {e}");
            return ExitCode::from(1);
        }
    };

    let session = ChatSession::new(HttpRelay::new(base_url));

    if let Err(e) = rt.block_on(run_loop(&session)) {
        eprintln!("I/O error: {e}");
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

/// Read queries line by line and print each assistant response.
async fn run_loop(session: &ChatSession<HttpRelay>) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("Type your question (Ctrl-D to quit).");
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }

        if session.submit(&line).await == SubmitOutcome::Ignored {
            continue;
        }

        if let Some(message) = session.messages().last() {
            print_message(message);
        }
    }
}

/// Render an assistant message to the terminal.
fn print_message(message: &Message) {
    if let Message::Assistant { text, videos, .. } = message {
        println!("{text}");
        for (i, video) in videos.iter().enumerate() {
            println!("  {}. {} ({})", i + 1, video.title, video.watch_url());
        }
    }
}
