//! # truetalk-cli
//!
//! Terminal client for the TrueTalk chat room.
//!
//! SYSTEM CONTEXT
//! ==============
//! Drives the same `ChatSession` as the browser client, with `reqwest` for
//! the message service and stdout for notices. One-shot subcommands cover
//! listing, posting, Quick Meet and calls; `chat` runs an interactive loop
//! over stdin.
//!
//! ERROR HANDLING
//! ==============
//! One-shot commands exit non-zero on service failures and missing names.
//! The interactive loop reports problems inline and keeps running.

mod api;
mod input;
mod terminal;

use std::io::IsTerminal;

use clap::{Parser, Subcommand, ValueEnum};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;
use truetalk::config::{DEFAULT_API_BASE_URL, DEFAULT_MEET_BASE_URL};
use truetalk::{CallKind, ChatConfig, ChatError, ChatSession, ClockStyle, DisplayMessage, SubmitOutcome};

use crate::api::ReqwestMessageApi;
use crate::input::{ChatInput, HELP, parse_input};
use crate::terminal::{TerminalClipboard, TerminalEnvironment, TerminalNotifier, render_line};


type TerminalSession = ChatSession<ReqwestMessageApi, TerminalNotifier, TerminalClipboard, TerminalEnvironment>;

const NAME_HINT: &str = "set your name with /name <NAME> before posting";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("display name required; pass --name or set TRUETALK_NAME")]
    MissingName,
    #[error("message text is empty")]
    EmptyMessage,
    #[error(transparent)]
    Chat(#[from] ChatError),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("io failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "truetalk-cli", about = "TrueTalk chat room terminal client")]
struct Cli {
    #[arg(long, env = "TRUETALK_API_URL", default_value = DEFAULT_API_BASE_URL)]
    api_url: String,

    #[arg(long, env = "TRUETALK_MEET_URL", default_value = DEFAULT_MEET_BASE_URL)]
    meet_url: String,

    /// `12h` or `24h`.
    #[arg(long, env = "TRUETALK_CLOCK", default_value = "12h", value_parser = parse_clock)]
    clock: ClockStyle,

    #[arg(long, env = "TRUETALK_NAME")]
    name: Option<String>,

    /// Disable author colors.
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the conversation.
    List,
    /// Post one message as `--name`.
    Send {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Start a Quick Meet and print its link.
    Meet,
    /// Start a simulated call.
    Call {
        #[arg(value_enum)]
        kind: CallArg,
    },
    /// Interactive chat over stdin.
    Chat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CallArg {
    Voice,
    Video,
}

impl From<CallArg> for CallKind {
    fn from(value: CallArg) -> Self {
        match value {
            CallArg::Voice => Self::Voice,
            CallArg::Video => Self::Video,
        }
    }
}

fn parse_clock(raw: &str) -> Result<ClockStyle, String> {
    ClockStyle::parse(raw).ok_or_else(|| format!("expected `12h` or `24h`, got `{raw}`"))
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    // Read before the runtime starts any threads.
    let env = TerminalEnvironment::detect();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run(cli, env))
}

async fn run(cli: Cli, env: TerminalEnvironment) -> Result<(), CliError> {
    let colored = !cli.no_color && std::io::stdout().is_terminal();
    let config = ChatConfig::default()
        .with_api_base_url(cli.api_url)
        .with_meet_base_url(cli.meet_url)
        .with_clock(cli.clock);
    let api = ReqwestMessageApi::new(config.api_base_url.clone())?;
    let session: TerminalSession = ChatSession::new(config, api, TerminalNotifier, TerminalClipboard, env);
    if let Some(name) = cli.name {
        session.set_name(name);
    }

    match cli.command {
        Command::List => run_list(&session, colored).await,
        Command::Send { text } => run_send(&session, &text.join(" "), colored).await,
        Command::Meet => run_meet(&session).await,
        Command::Call { kind } => run_call(&session, kind.into()),
        Command::Chat => run_chat(&session, colored).await,
    }
}

async fn run_list(session: &TerminalSession, colored: bool) -> Result<(), CliError> {
    session.load().await?;
    print_conversation(session, colored);
    Ok(())
}

async fn run_send(session: &TerminalSession, text: &str, colored: bool) -> Result<(), CliError> {
    require_name(session)?;
    session.set_message(text);
    match session.submit().await {
        SubmitOutcome::Sent(message) => {
            println!("{}", line_for(session, &message, colored));
            Ok(())
        }
        SubmitOutcome::Skipped => Err(CliError::EmptyMessage),
        SubmitOutcome::Failed(e) => Err(e.into()),
    }
}

async fn run_meet(session: &TerminalSession) -> Result<(), CliError> {
    require_name(session)?;
    session
        .start_quick_meet()
        .await
        .map(|_| ())
        .ok_or(CliError::MissingName)
}

fn run_call(session: &TerminalSession, kind: CallKind) -> Result<(), CliError> {
    require_name(session)?;
    if session.start_call(kind) { Ok(()) } else { Err(CliError::MissingName) }
}

async fn run_chat(session: &TerminalSession, colored: bool) -> Result<(), CliError> {
    if session.load().await.is_ok() {
        print_conversation(session, colored);
    } else {
        println!("could not reach the message service; /reload to retry");
    }
    if session.snapshot().name.trim().is_empty() {
        println!("{NAME_HINT}");
    }
    println!("type /help for commands");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_input(&line) {
            ChatInput::Empty => {}
            ChatInput::Say(text) => {
                session.set_message(text);
                match session.submit().await {
                    SubmitOutcome::Sent(message) => println!("{}", line_for(session, &message, colored)),
                    SubmitOutcome::Skipped => println!("{NAME_HINT}"),
                    // The session already printed the failure notice.
                    SubmitOutcome::Failed(_) => {}
                }
            }
            ChatInput::Name(name) => {
                session.set_name(name);
                match session.snapshot().name.trim() {
                    "" => println!("name cleared"),
                    name => println!("posting as {name}"),
                }
            }
            ChatInput::Meet => {
                session.start_quick_meet().await;
            }
            ChatInput::Copy => {
                if !session.copy_quick_meet().await {
                    println!("no Quick Meet yet; start one with /meet");
                }
            }
            ChatInput::Call(kind) => {
                session.start_call(kind);
            }
            ChatInput::Reload => match session.load().await {
                Ok(_) => print_conversation(session, colored),
                Err(e) => println!("reload failed: {e}"),
            },
            ChatInput::Reset => {
                session.reset();
                println!("conversation cleared (local only)");
            }
            ChatInput::Help => println!("{HELP}"),
            ChatInput::Quit => break,
            ChatInput::Unknown(verb) => println!("unknown command /{verb}; try /help"),
        }
    }
    Ok(())
}

fn require_name(session: &TerminalSession) -> Result<(), CliError> {
    if session.snapshot().name.trim().is_empty() {
        return Err(CliError::MissingName);
    }
    Ok(())
}

fn print_conversation(session: &TerminalSession, colored: bool) {
    let snapshot = session.snapshot();
    for message in &snapshot.messages {
        let color = colored.then(|| snapshot.colors.get(&message.author)).flatten();
        println!("{}", render_line(message, color));
    }
    println!("-- {}", snapshot.summary);
}

fn line_for(session: &TerminalSession, message: &DisplayMessage, colored: bool) -> String {
    let color = colored
        .then(|| session.snapshot().colors.get(&message.author))
        .flatten();
    render_line(message, color)
}
