use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::{info, warn};

use fz_app::App;
use fz_core::ContainerId;
use fz_infra::TokioReminderScheduler;

use super::{run_command, Command};

const PROMPT: &str = "freezr> ";

/// One line of shell input, parsed without the binary name.
#[derive(Parser, Debug)]
#[command(name = "freezr", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, PartialEq)]
enum ShellInput {
    Empty,
    Exit,
    Command(Command),
    /// Parse failure or `help`; the text is clap's rendered message.
    Message(String),
}

/// Split on whitespace, keeping quoted runs together.
fn split_words(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for ch in line.chars() {
        match (quote, ch) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(ch);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err("unterminated quote".to_string());
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

fn parse_line(line: &str) -> ShellInput {
    let words = match split_words(line) {
        Ok(words) => words,
        Err(msg) => return ShellInput::Message(msg),
    };
    match words.first().map(String::as_str) {
        None => ShellInput::Empty,
        Some("exit" | "quit") => ShellInput::Exit,
        Some(_) => match ShellLine::try_parse_from(words) {
            Ok(parsed) => ShellInput::Command(parsed.command),
            Err(err) => ShellInput::Message(err.render().to_string()),
        },
    }
}

/// Read commands from `input` until `exit` or EOF.
///
/// Returns the number of commands that ran. A failing command is reported
/// and the session continues.
pub async fn read_eval_loop<R>(app: &App, input: R, out: &mut dyn Write) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let mut ran = 0;

    write!(out, "{PROMPT}")?;
    out.flush()?;
    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            ShellInput::Empty => {}
            ShellInput::Exit => break,
            ShellInput::Message(msg) => writeln!(out, "{}", msg.trim_end())?,
            ShellInput::Command(Command::Shell) => writeln!(out, "Already in a shell")?,
            ShellInput::Command(command) => {
                ran += 1;
                if let Err(err) = run_command(app, command, out).await {
                    warn!(error = %err, "Shell command failed");
                    writeln!(out, "error: {err:#}")?;
                }
            }
        }
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(ran)
}

/// Interactive session: re-arm stored reminders, deliver them as they
/// fire, and serve commands from stdin.
pub async fn run_shell(
    app: &App,
    fired_rx: mpsc::UnboundedReceiver<ContainerId>,
    scheduler: Arc<TokioReminderScheduler>,
) -> Result<()> {
    let rescheduled = app.reschedule_reminders().execute().await?;
    info!(rescheduled, "Shell session started");

    let delivery = tokio::spawn(app.reminder_delivery_loop(fired_rx).run());

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let result = read_eval_loop(app, stdin, &mut std::io::stdout()).await;

    scheduler.cancel_all().await;
    delivery.abort();
    info!("Shell session ended");

    result.map(|_| ())
}
