//! Floorset CLI
//!
//! Usage:
//!   floorset [OPTIONS] [SCRIPT]
//!
//! Reads layout commands from a script file (or stdin) and applies them
//! against the layout editor, mirroring moves and saves to the backend
//! unless --offline is given. Run with no input on a terminal for a
//! command reference.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use floorset::api::ApiClient;
use floorset::{parse_line, AppConfig, Planner};

#[derive(Parser)]
#[command(name = "floorset")]
#[command(about = "Store-layout planning for visual merchandising teams")]
struct Cli {
    /// Command script (reads from stdin if not provided)
    script: Option<PathBuf>,

    /// Configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Do not talk to the backend; all local editing still works
    #[arg(long)]
    offline: bool,

    /// Write the final canvas as SVG to this file before exiting
    #[arg(long, value_name = "FILE")]
    svg: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // If no script and stdin is a terminal (interactive), show intro help
    if cli.script.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load configuration
    let config = match &cli.config {
        Some(path) => match AppConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => AppConfig::default(),
    };

    // Read input
    let source = match &cli.script {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let client = if cli.offline {
        None
    } else {
        match ApiClient::new(config.api.base_url.clone(), config.api.timeout()) {
            Ok(client) => Some(client),
            Err(e) => {
                warn!("backend client unavailable, continuing offline: {}", e);
                None
            }
        }
    };

    let mut planner = Planner::new(&config, client);
    if let Some(user) = &planner.session().current_user {
        println!("Signed in as {} ({})", user.name, user.email);
    }

    let script_name = cli
        .script
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<stdin>".to_string());

    let mut failures = 0usize;
    for (line_no, line) in source.lines().enumerate() {
        match parse_line(line) {
            Ok(None) => {}
            Ok(Some(command)) => match planner.execute(&command) {
                Ok(outcome) => println!("{}", outcome),
                Err(e) => {
                    eprintln!("{}:{}: {}", script_name, line_no + 1, e);
                    failures += 1;
                }
            },
            Err(e) => {
                eprintln!("{}", e.format(line, &format!("{}:{}", script_name, line_no + 1)));
                failures += 1;
            }
        }
    }

    if let Some(path) = &cli.svg {
        let svg = floorset::render_svg(planner.editor(), &floorset::SvgConfig::default());
        if let Err(e) = fs::write(path, svg) {
            eprintln!("Error writing SVG '{}': {}", path.display(), e);
            std::process::exit(1);
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }
}

fn print_intro() {
    println!(
        r#"Floorset - store-layout planning for visual merchandising teams

USAGE:
    floorset [OPTIONS] [SCRIPT]
    echo '<commands>' | floorset

OPTIONS:
    -c, --config <FILE>   Configuration file (TOML)
    --offline             Skip all backend calls
    --svg <FILE>          Write the final canvas as SVG
    -h, --help            Print help

COMMANDS (one per line):
    add <type>                        Place a fixture (see 'types')
    select <id> | select none         Change the selection
    move <id> <x> <y>                 Move (snaps to the grid)
    enlarge | shrink                  Scale the selection by 0.25
    rotate                            Quarter turn clockwise
    rename "<name>"                   Rename the selection
    delete                            Remove the selection
    deftype <key> "<label>" <w> <h>   Register a fixture type
    droptype <key> confirm            Remove a type and its objects
    types | list                      Show catalog / placed objects
    save "<name>"                     Persist the layout to the backend
    layouts                           List saved layouts
    load <index>                      Replace canvas from a saved layout
    render "<file>"                   Export the canvas as SVG
    stock | dashboard | team          Backend reports
    tasks [member]                    List tasks (caches them for below)
    insight <code> "<period>"         Generate a product insight
    newtask "<action>" "<why>" <pri>  Create a task (low|medium|high)
    assign <n> <member>               Assign a cached task
    status <n> <state>                pending|in_progress|completed
    plan <n>                          Action plan for a cached task
    login <id> "<email>" "<name>" <r> Sign in (associate|manager|visual_merchandiser)
    logout                            Sign out

QUICK START:
    echo 'add rack
    move rack-1 412 287
    render "floor.svg"' | floorset --offline"#
    );
}
