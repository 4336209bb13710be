//! # Session Loop
//!
//! - `run()`: parses flags, sets up logging and config, runs the session on
//!   stdin/stdout (called by `main.rs`)
//! - `init_context()`: builds the `AppContext` with session, theme and the
//!   result-set subscription
//! - `run_session()`: reads lines and dispatches them by screen; generic over
//!   reader and writer so tests can drive it in memory
//! - `handle_*()`: per-screen handlers that call the API and print
//!
//! Per-line problems (unknown command, bad id) are printed to the error
//! writer and the session carries on. Only I/O failures end it early.

use super::logging;
use super::render::{render_edit_screen, render_error, render_messages, render_note_list};
use super::setup::{parse_line, text_arg, Cli, EditCommand, EditLine, ListCommand, ListLine};
use super::styles::{use_color, Theme};
use anyhow::Result;
use clap::Parser;
use notesapp::api::{parse_id, NotesApi};
use notesapp::commands::CmdResult;
use notesapp::config::NotesConfig;
use notesapp::observe::Subscription;
use notesapp::screen::{Screen, Session};
use notesapp::store::memory::InMemoryStore;
use std::borrow::Cow;
use std::cell::Cell;
use std::io::{self, BufRead, IsTerminal, Write};
use std::rc::Rc;
use tracing::{debug, info, warn};

struct AppContext {
    session: Session<InMemoryStore>,
    theme: Theme,
    /// Set by the result-set subscription, cleared when the list is drawn.
    list_dirty: Rc<Cell<bool>>,
    _results_subscription: Subscription,
    prompt: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let stdin = io::stdin();
    let prompt = stdin.is_terminal();
    let mut ctx = init_context(&cli, prompt)?;

    let stdout = io::stdout();
    let stderr = io::stderr();
    run_session(&mut ctx, stdin.lock(), &mut stdout.lock(), &mut stderr.lock())
}

fn init_context(cli: &Cli, prompt: bool) -> Result<AppContext> {
    let mut config = NotesConfig::load(cli.config.as_deref())?;
    if cli.no_seed {
        config.seed_examples = false;
    }
    info!(seed = config.seed_examples, "starting session");

    let api = NotesApi::with_config(InMemoryStore::new(), &config);
    Ok(build_context(api, Theme::new(use_color(cli.no_color)), prompt))
}

fn build_context(api: NotesApi<InMemoryStore>, theme: Theme, prompt: bool) -> AppContext {
    let list_dirty = Rc::new(Cell::new(false));
    let flag = Rc::clone(&list_dirty);
    let subscription = api.subscribe(move |_| flag.set(true));

    AppContext {
        session: Session::new(api),
        theme,
        list_dirty,
        _results_subscription: subscription,
        prompt,
    }
}

fn run_session<R: BufRead, W: Write, E: Write>(
    ctx: &mut AppContext,
    mut input: R,
    out: &mut W,
    err: &mut E,
) -> Result<()> {
    draw_list(ctx, out)?;

    let mut buf = Vec::new();
    loop {
        if ctx.prompt {
            let prompt = if ctx.session.screen().is_list() {
                "notes> "
            } else {
                "edit> "
            };
            write!(out, "{}", prompt)?;
            out.flush()?;
        }

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = decode_line(&buf);
        let line = line.trim_end_matches(&['\n', '\r'][..]);
        let before = ctx.session.screen();

        let flow = if line.trim().is_empty() {
            redraw(ctx, out)?;
            Flow::Continue
        } else if before.is_list() {
            handle_list_line(ctx, line, out, err)?
        } else {
            handle_edit_line(ctx, line, out, err)?
        };

        if flow == Flow::Quit {
            break;
        }

        let after = ctx.session.screen();
        let back_to_list = !before.is_list() && after.is_list();
        if after.is_list() && (ctx.list_dirty.get() || back_to_list) {
            draw_list(ctx, out)?;
        }
    }

    debug!("session ended");
    Ok(())
}

/// Invalid UTF-8 is replaced rather than ending the session.
fn decode_line(bytes: &[u8]) -> Cow<'_, str> {
    let line = String::from_utf8_lossy(bytes);
    if let Cow::Owned(_) = line {
        warn!("input line is not valid UTF-8, invalid bytes replaced");
    }
    line
}

fn handle_list_line<W: Write, E: Write>(
    ctx: &mut AppContext,
    line: &str,
    out: &mut W,
    err: &mut E,
) -> Result<Flow> {
    let command = match parse_line::<ListLine>(line) {
        Ok(parsed) => parsed.command,
        Err(e) => {
            print_clap_error(&e, out, err)?;
            return Ok(Flow::Continue);
        }
    };

    match command {
        ListCommand::List => {
            ctx.session.api_mut().search_notes("");
        }
        ListCommand::Search { query } => {
            ctx.session.api_mut().search_notes(text_arg(line, &query));
        }
        ListCommand::New => {
            ctx.session.start_new();
            draw_edit(ctx, out)?;
        }
        ListCommand::Edit { id } => match parse_id(&id) {
            Ok(id) => {
                let result = ctx.session.start_edit(id);
                print_result(ctx, &result, out)?;
                draw_edit(ctx, out)?;
            }
            Err(e) => write!(err, "{}", render_error(&e.to_string(), &ctx.theme))?,
        },
        ListCommand::Delete { id } => match parse_id(&id) {
            Ok(id) => {
                let result = ctx.session.api_mut().delete_note(id);
                print_result(ctx, &result, out)?;
            }
            Err(e) => write!(err, "{}", render_error(&e.to_string(), &ctx.theme))?,
        },
        ListCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn handle_edit_line<W: Write, E: Write>(
    ctx: &mut AppContext,
    line: &str,
    out: &mut W,
    err: &mut E,
) -> Result<Flow> {
    let command = match parse_line::<EditLine>(line) {
        Ok(parsed) => parsed.command,
        Err(e) => {
            print_clap_error(&e, out, err)?;
            return Ok(Flow::Continue);
        }
    };

    match command {
        EditCommand::Title { text } => ctx.session.set_title(text_arg(line, &text)),
        EditCommand::Content { text } => ctx.session.set_content(text_arg(line, &text)),
        EditCommand::Append { text } => ctx.session.append_content(text_arg(line, &text)),
        EditCommand::Show => draw_edit(ctx, out)?,
        EditCommand::Save => {
            let result = ctx.session.save();
            print_result(ctx, &result, out)?;
        }
        EditCommand::Delete => {
            let result = ctx.session.delete();
            print_result(ctx, &result, out)?;
        }
        EditCommand::Cancel => ctx.session.cancel(),
        EditCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn print_clap_error<W: Write, E: Write>(e: &clap::Error, out: &mut W, err: &mut E) -> Result<()> {
    // `help` arrives as an "error" that belongs on stdout
    if e.use_stderr() {
        write!(err, "{}", e)?;
    } else {
        write!(out, "{}", e)?;
    }
    Ok(())
}

fn print_result<W: Write>(ctx: &AppContext, result: &CmdResult, out: &mut W) -> Result<()> {
    write!(out, "{}", render_messages(&result.messages, &ctx.theme))?;
    Ok(())
}

fn draw_list<W: Write>(ctx: &AppContext, out: &mut W) -> Result<()> {
    let api = ctx.session.api();
    write!(
        out,
        "{}",
        render_note_list(&api.results(), api.query(), &ctx.theme)
    )?;
    ctx.list_dirty.set(false);
    Ok(())
}

fn draw_edit<W: Write>(ctx: &AppContext, out: &mut W) -> Result<()> {
    write!(
        out,
        "{}",
        render_edit_screen(ctx.session.screen(), ctx.session.draft(), &ctx.theme)
    )?;
    Ok(())
}

fn redraw<W: Write>(ctx: &AppContext, out: &mut W) -> Result<()> {
    match ctx.session.screen() {
        Screen::List => draw_list(ctx, out),
        Screen::Edit { .. } => draw_edit(ctx, out),
    }
}
