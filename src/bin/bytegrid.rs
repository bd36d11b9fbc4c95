//! Bytegrid Player
//!
//! Plays a binary command stream onto a character screen, rendering the
//! screen to stdout after every frame. Diagnostics go to stderr.

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use bytegrid::app::{self, Config};
use bytegrid::demo::demo_stream;
use bytegrid::renderer::{NullRenderer, Renderer, TextRenderer};
use bytegrid::Terminal;

/// Where the command stream comes from
enum Input {
    Demo,
    Stdin,
    File(PathBuf),
}

/// Command-line arguments
struct Args {
    input: Input,
    config: Option<PathBuf>,
    json: bool,
    quiet: bool,
    no_clear: bool,
    help: bool,
}

fn parse_args() -> Args {
    let mut args = Args {
        input: Input::Demo,
        config: None,
        json: false,
        quiet: false,
        no_clear: false,
        help: false,
    };
    let argv: Vec<String> = std::env::args().skip(1).collect();

    let mut i = 0;
    while i < argv.len() {
        match argv[i].as_str() {
            "-h" | "--help" => {
                args.help = true;
            },
            "-f" | "--file" => {
                i += 1;
                if i < argv.len() {
                    args.input = input_from(&argv[i]);
                }
            },
            "-c" | "--config" => {
                i += 1;
                if i < argv.len() {
                    args.config = Some(PathBuf::from(&argv[i]));
                }
            },
            "--demo" => {
                args.input = Input::Demo;
            },
            "-j" | "--json" => {
                args.json = true;
            },
            "-q" | "--quiet" => {
                args.quiet = true;
            },
            "--no-clear" => {
                args.no_clear = true;
            },
            other => {
                // Treat as input file if no flag
                if !other.starts_with('-') || other == "-" {
                    args.input = input_from(other);
                }
            },
        }
        i += 1;
    }

    args
}

fn input_from(arg: &str) -> Input {
    if arg == "-" {
        Input::Stdin
    } else {
        Input::File(PathBuf::from(arg))
    }
}

fn read_input(input: &Input) -> io::Result<Vec<u8>> {
    match input {
        Input::Demo => Ok(demo_stream()),
        Input::File(path) => std::fs::read(path),
        Input::Stdin => {
            let mut data = Vec::new();
            io::stdin().read_to_end(&mut data)?;
            Ok(data)
        },
    }
}

fn main() -> ExitCode {
    let args = parse_args();

    if args.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    let mut ignored = None;
    let mut config = match &args.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            },
        },
        None => Config::load_or_default().unwrap_or_else(|e| {
            ignored = Some(e);
            Config::default()
        }),
    };
    if args.no_clear {
        config.clear_between_frames = false;
    }

    app::init_logging(&config.log_filter);
    if let (Some(e), Some(path)) = (ignored, Config::default_path()) {
        tracing::warn!("Ignoring {}: {}", path.display(), e);
    }

    let data = match read_input(&args.input) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error reading input: {}", e);
            return ExitCode::FAILURE;
        },
    };
    tracing::debug!("Read {} bytes", data.len());

    let mut terminal = Terminal::new();
    let live = !args.quiet && !args.json && config.render_every_frame;
    let summary = if live {
        terminal.process(&data, &mut TextRenderer::stdout(config.render_options()))
    } else {
        terminal.process(&data, &mut NullRenderer)
    };

    let snapshot = terminal.screen().snapshot();
    if args.json {
        match snapshot.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing snapshot: {}", e);
                return ExitCode::FAILURE;
            },
        }
    } else if !args.quiet && !live {
        if let Err(e) = TextRenderer::stdout(config.render_options()).render(&snapshot) {
            eprintln!("Error rendering screen: {}", e);
            return ExitCode::FAILURE;
        }
    }

    tracing::info!(
        frames = summary.frames,
        applied = summary.applied,
        rejected = summary.rejected,
        unknown = summary.unknown,
        "Stopped: {:?}",
        summary.stop
    );

    ExitCode::SUCCESS
}

fn print_help() {
    println!("Bytegrid Player");
    println!();
    println!("Usage: bytegrid [OPTIONS] [INPUT_FILE]");
    println!();
    println!("Options:");
    println!("  -f, --file <PATH>    Read the command stream from a file ('-' for stdin)");
    println!("      --demo           Play the built-in sample stream (default)");
    println!("  -c, --config <PATH>  Load configuration from a JSON file");
    println!("  -j, --json           Print the final screen as a JSON snapshot");
    println!("  -q, --quiet          Do not render frames");
    println!("      --no-clear       Do not clear the display between frames");
    println!("  -h, --help           Show this help message");
    println!();
    println!("Log verbosity follows RUST_LOG (e.g. RUST_LOG=debug).");
    println!();
    println!("Examples:");
    println!("  bytegrid");
    println!("  bytegrid --no-clear commands.bin");
    println!("  bytegrid --json - < commands.bin > snapshot.json");
}
