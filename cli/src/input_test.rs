use super::*;

#[test]
fn plain_text_is_a_message() {
    assert_eq!(parse_input("hello team\n"), ChatInput::Say("hello team".to_owned()));
    assert_eq!(parse_input("  spaced  "), ChatInput::Say("  spaced  ".to_owned()));
}

#[test]
fn blank_lines_are_empty() {
    assert_eq!(parse_input(""), ChatInput::Empty);
    assert_eq!(parse_input("   \r\n"), ChatInput::Empty);
}

#[test]
fn name_takes_the_rest_of_the_line() {
    assert_eq!(parse_input("/name Ann Lee"), ChatInput::Name("Ann Lee".to_owned()));
    assert_eq!(parse_input("/name"), ChatInput::Name(String::new()));
}

#[test]
fn verbs_are_case_insensitive() {
    assert_eq!(parse_input("/MEET"), ChatInput::Meet);
    assert_eq!(parse_input("/Voice"), ChatInput::Call(CallKind::Voice));
    assert_eq!(parse_input("/video"), ChatInput::Call(CallKind::Video));
}

#[test]
fn remaining_commands_parse() {
    assert_eq!(parse_input("/copy"), ChatInput::Copy);
    assert_eq!(parse_input("/reload"), ChatInput::Reload);
    assert_eq!(parse_input("/reset"), ChatInput::Reset);
    assert_eq!(parse_input("/help"), ChatInput::Help);
    assert_eq!(parse_input("/quit"), ChatInput::Quit);
    assert_eq!(parse_input("/exit"), ChatInput::Quit);
}

#[test]
fn unknown_command_keeps_its_verb() {
    assert_eq!(parse_input("/dance now"), ChatInput::Unknown("dance".to_owned()));
}
