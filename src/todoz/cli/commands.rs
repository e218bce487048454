//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Decides exit codes
//! - Handles argument parsing
//! - Installs the tracing subscriber
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: shell arguments become a [`Cli`] via clap
//! 2. **Context Setup**: data directory, config, and the file-backed dispatcher
//! 3. **Dispatch**: every line goes through [`Dispatcher::run_line`]
//! 4. **Output**: [`TerminalPresenter`] renders each outcome as soon as it arrives
//!
//! Business rules stay in the library; nothing here inspects todos beyond rendering them.

use super::render::Renderer;
use super::setup::Cli;
use clap::Parser;
use console::Term;
use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;
use todoz::api::{Dispatcher, Outcome, Presenter};
use todoz::error::Result;
use todoz::init::{data_dir, initialize};
use todoz::store::fs::FileStore;
use tracing::{debug, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable read for the log filter.
const LOG_ENV: &str = "TODOZ_LOG";
const PROMPT: &str = "todoz> ";

struct AppContext {
    dispatcher: Dispatcher<FileStore>,
    renderer: Renderer,
}

/// Writes successful outcomes to stdout and failures to stderr, counting the failures.
struct TerminalPresenter<'a> {
    renderer: &'a Renderer,
    failures: usize,
}

impl<'a> TerminalPresenter<'a> {
    fn new(renderer: &'a Renderer) -> Self {
        Self {
            renderer,
            failures: 0,
        }
    }
}

impl Presenter for TerminalPresenter<'_> {
    fn present(&mut self, outcome: &Outcome) {
        let text = self.renderer.render_outcome(outcome);
        if outcome.success() {
            print!("{}", text);
            let _ = io::stdout().flush();
        } else {
            self.failures += 1;
            eprint!("{}", text);
        }
    }
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command_line() {
        Some(line) => Ok(handle_once(&mut ctx, &line)),
        None => handle_session(&mut ctx),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // Ignore the error when a subscriber is already installed.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(io::stderr))
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = data_dir()?;
    let ctx = initialize(&data_dir, cli.file.clone());

    let use_color =
        ctx.config.color && !cli.no_color && Term::stdout().features().colors_supported();
    debug!(use_color, path = %ctx.data_path.display(), "context ready");

    Ok(AppContext {
        dispatcher: ctx.dispatcher,
        renderer: Renderer::new(use_color)?,
    })
}

fn handle_once(ctx: &mut AppContext, line: &str) -> ExitCode {
    let mut presenter = TerminalPresenter::new(&ctx.renderer);
    ctx.dispatcher.run_line(line, &mut presenter);

    if presenter.failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn handle_session(ctx: &mut AppContext) -> Result<ExitCode> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut presenter = TerminalPresenter::new(&ctx.renderer);

    if interactive {
        println!("todoz {}. Type 'help' for commands.", env!("CARGO_PKG_VERSION"));
    }

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("{}", PROMPT);
            io::stdout().flush()?;
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) if e.kind() == io::ErrorKind::InvalidData => {
                warn!(error = %e, "skipping input line that is not valid UTF-8");
                continue;
            }
            Some(Err(e)) => return Err(e.into()),
            None => break,
        };
        if !ctx.dispatcher.run_line(&line, &mut presenter) {
            break;
        }
    }

    Ok(ExitCode::SUCCESS)
}
