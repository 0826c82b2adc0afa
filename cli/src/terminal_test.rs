use super::*;

fn message(author: &str, text: &str) -> DisplayMessage {
    DisplayMessage {
        id: 1,
        author: author.to_owned(),
        text: text.to_owned(),
        time: "10:00 AM".to_owned(),
    }
}

// =============================================================
// Colors
// =============================================================

#[test]
fn parse_hex_rgb_reads_long_form() {
    assert_eq!(parse_hex_rgb("#f97316"), Some((0xf9, 0x73, 0x16)));
    assert_eq!(parse_hex_rgb(" #3B82F6 "), Some((0x3b, 0x82, 0xf6)));
}

#[test]
fn parse_hex_rgb_rejects_invalid_inputs() {
    assert_eq!(parse_hex_rgb("f97316"), None);
    assert_eq!(parse_hex_rgb("#fff"), None);
    assert_eq!(parse_hex_rgb("#zzzzzz"), None);
    assert_eq!(parse_hex_rgb("#ééé"), None);
}

#[test]
fn paint_wraps_text_in_truecolor_escape() {
    assert_eq!(paint("Ann", "#22c55e"), "\x1b[38;2;34;197;94mAnn\x1b[0m");
    assert_eq!(paint("Ann", "green"), "Ann");
}

// =============================================================
// Lines
// =============================================================

#[test]
fn render_line_without_color_is_plain() {
    assert_eq!(render_line(&message("Ann", "hi"), None), "[10:00 AM] Ann: hi");
}

#[test]
fn render_line_paints_only_the_author() {
    let line = render_line(&message("Ann", "hi"), Some("#f97316"));
    assert_eq!(line, "[10:00 AM] \x1b[38;2;249;115;22mAnn\x1b[0m: hi");
}

// =============================================================
// Platform seams
// =============================================================

#[tokio::test]
async fn clipboard_is_never_available() {
    assert!(!TerminalClipboard.is_available());
    assert_eq!(TerminalClipboard.write_text("x").await, Err(ClipboardError::Unavailable));
}

#[test]
fn environment_reports_fixed_offset_and_sane_values() {
    let offset = UtcOffset::from_hms(2, 0, 0).unwrap();
    let env = TerminalEnvironment::new(offset);
    assert_eq!(env.local_offset(OffsetDateTime::UNIX_EPOCH), offset);
    assert!(env.now_millis() > 1_600_000_000_000);
    let fraction = env.random_fraction();
    assert!((0.0..1.0).contains(&fraction));
}
