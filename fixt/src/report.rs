//! Stable text formats for failure reports and recovered panics.
//!
//! Flushed logs must let a reader tell assertion failures (`✘` prefix) and
//! recovered panics (`X PANIC:` prefix) apart from plain diagnostic prints,
//! which carry no prefix.

use std::any::Any;
use std::panic::Location;

/// Maximum number of backtrace frames kept in a recovered-panic report.
pub(crate) const MAX_STACK_FRAMES: usize = 24;

/// Render an assertion/condition failure with its call site.
pub(crate) fn failure_report(location: &Location<'_>, message: &str) -> String {
    let mut out = format!("✘ {}:{}\n", location.file(), location.line());
    for line in message.lines() {
        out.push_str("    ");
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Extract a readable message from a panic payload.
pub(crate) fn panic_note(payload: &(dyn Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Bound a rendered backtrace to `max_frames` frames.
///
/// Excess frames are truncated with a marker, never an error. Frame headers
/// in the std backtrace format are lines whose first token is `<digits>:`;
/// their `at file:line` continuation lines travel with them.
pub(crate) fn truncate_backtrace(rendered: &str, max_frames: usize) -> String {
    let mut kept: Vec<&str> = Vec::new();
    let mut frames = 0;
    for line in rendered.lines() {
        if is_frame_header(line) {
            frames += 1;
            if frames > max_frames {
                kept.push("      ... (stack truncated)");
                break;
            }
        }
        kept.push(line);
    }
    kept.join("\n")
}

fn is_frame_header(line: &str) -> bool {
    match line.trim_start().split_once(':') {
        Some((index, _)) => !index.is_empty() && index.chars().all(|c| c.is_ascii_digit()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_report_carries_call_site_and_indents_message() {
        let report = failure_report(Location::caller(), "expected 5, got 4");
        assert!(report.starts_with("✘ "));
        assert!(report.contains("report.rs"));
        assert!(report.ends_with("    expected 5, got 4\n"));
    }

    #[test]
    fn failure_report_indents_every_message_line() {
        let report = failure_report(Location::caller(), "first\nsecond");
        assert!(report.contains("    first\n"));
        assert!(report.contains("    second\n"));
    }

    #[test]
    fn panic_note_reads_str_and_string_payloads() {
        let boxed_str: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_note(boxed_str.as_ref()), "boom");

        let boxed_string: Box<dyn Any + Send> = Box::new("kaboom".to_string());
        assert_eq!(panic_note(boxed_string.as_ref()), "kaboom");

        let opaque: Box<dyn Any + Send> = Box::new(42u32);
        assert_eq!(panic_note(opaque.as_ref()), "non-string panic payload");
    }

    #[test]
    fn short_backtrace_is_untouched() {
        let rendered = "   0: alpha\n             at src/a.rs:1:1\n   1: beta";
        assert_eq!(truncate_backtrace(rendered, 24), rendered);
    }

    #[test]
    fn deep_backtrace_is_truncated_with_marker() {
        let mut rendered = String::new();
        for index in 0..30 {
            rendered.push_str(&format!("  {index}: frame_{index}\n"));
            rendered.push_str(&format!("             at src/f.rs:{index}:1\n"));
        }
        let truncated = truncate_backtrace(&rendered, 24);
        assert!(truncated.contains("23: frame_23"));
        assert!(!truncated.contains("24: frame_24"));
        assert!(truncated.ends_with("... (stack truncated)"));
    }

    #[test]
    fn continuation_lines_are_not_counted_as_frames() {
        let rendered = "   0: alpha\n             at src/a.rs:1:1";
        let truncated = truncate_backtrace(rendered, 1);
        assert!(truncated.contains("at src/a.rs:1:1"));
        assert!(!truncated.contains("stack truncated"));
    }
}
