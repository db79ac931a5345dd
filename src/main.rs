// Algoscope: step-through algorithm animator with trace playback

mod graph;
mod input;
mod playback;
mod runner;
mod trace;
mod ui;

use std::fs;
use std::io;
use std::path::Path;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use input::InputFormat;
use playback::Playback;
use ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        let program_name = args.first().map(|s| s.as_str()).unwrap_or("algoscope");
        eprintln!("Error: Missing arguments");
        eprintln!();
        eprintln!("Usage: {} <algorithm> <input-file> [target]", program_name);
        eprintln!();
        eprintln!("Algorithms: {}", runner::ALGORITHMS.join(", "));
        eprintln!();
        eprintln!("Examples:");
        eprintln!(
            "  {} bubble numbers.txt         # Animate bubble sort",
            program_name
        );
        eprintln!(
            "  {} binary numbers.json 7      # Binary search for 7",
            program_name
        );
        eprintln!(
            "  {} bfs graph.txt              # Breadth-first traversal",
            program_name
        );
        std::process::exit(1);
    }

    let algorithm = &args[1];
    let input_file = &args[2];
    let target = args.get(3).map(|s| s.as_str());

    if !Path::new(input_file).exists() {
        eprintln!("Error: File '{}' not found", input_file);
        eprintln!(
            "Usage: {} <algorithm> <input-file> [target]",
            args.first().map(|s| s.as_str()).unwrap_or("algoscope")
        );
        std::process::exit(1);
    }

    // Read and run
    let text = fs::read_to_string(input_file)?;
    let format = InputFormat::from_path(input_file);

    let trace = match runner::run(algorithm, &text, format, target) {
        Ok(trace) => trace,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    eprintln!("Recorded {} step(s).", trace.len());

    let playback = Playback::new(trace);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(playback, algorithm.clone());
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
