//! Line parser for the interactive `chat` command.

use truetalk::CallKind;

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

pub const HELP: &str = "\
commands:
  /name <NAME>  set your display name
  /meet         start a Quick Meet
  /copy         show the Quick Meet link again
  /voice        start a voice call
  /video        start a video call
  /reload       fetch the conversation from the service
  /reset        clear the local conversation
  /help         show this list
  /quit         leave
anything else is sent as a message";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatInput {
    /// Plain text to post.
    Say(String),
    Name(String),
    Meet,
    Copy,
    Call(CallKind),
    Reload,
    Reset,
    Help,
    Quit,
    /// Blank line.
    Empty,
    /// A slash command we don't know.
    Unknown(String),
}

/// Classify one stdin line. Text without a leading `/` is a message and is
/// passed through untrimmed; the session trims it on submit.
pub fn parse_input(line: &str) -> ChatInput {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return ChatInput::Empty;
    }
    let Some(command) = line.trim_start().strip_prefix('/') else {
        return ChatInput::Say(line.to_owned());
    };

    let (verb, rest) = command.split_once(char::is_whitespace).unwrap_or((command, ""));
    match verb.to_ascii_lowercase().as_str() {
        "name" => ChatInput::Name(rest.trim().to_owned()),
        "meet" => ChatInput::Meet,
        "copy" => ChatInput::Copy,
        "voice" => ChatInput::Call(CallKind::Voice),
        "video" => ChatInput::Call(CallKind::Video),
        "reload" => ChatInput::Reload,
        "reset" => ChatInput::Reset,
        "help" | "?" => ChatInput::Help,
        "quit" | "exit" => ChatInput::Quit,
        _ => ChatInput::Unknown(verb.to_owned()),
    }
}
