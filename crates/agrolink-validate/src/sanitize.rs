//! Input sanitization for user-supplied form values.
//!
//! Strips active-content vectors from free text before it is stored in form
//! state or interpolated into an outbound message. This is deliberately
//! destructive: suspicious fragments are removed, not escaped.

use once_cell::sync::Lazy;
use regex::Regex;

static SCRIPT_BLOCKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script\b.*?</script>").expect("script-block pattern"));

static JS_PROTOCOL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)javascript:").expect("javascript-protocol pattern"));

static EVENT_HANDLERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bon\w+\s*=").expect("event-handler pattern"));

/// Sanitize a user-supplied string.
///
/// Removes, in order: `<script>...</script>` blocks (non-greedy,
/// case-insensitive), `javascript:` protocol prefixes, inline event-handler
/// attributes (`onclick=`, `onerror=`, ...), any remaining `<`/`>`
/// characters, and finally trims surrounding whitespace.
///
/// Total and deterministic. The result is a fixpoint: sanitizing an already
/// sanitized string returns it unchanged.
pub fn sanitize(input: &str) -> String {
    let mut current = sanitize_pass(input);
    // A removal can splice a new token together (`java<x>script:` becomes
    // `javascript:` once the brackets go), so re-run until stable. Each pass
    // only deletes characters, so this terminates.
    loop {
        let next = sanitize_pass(&current);
        if next == current {
            return next;
        }
        current = next;
    }
}

fn sanitize_pass(input: &str) -> String {
    let stripped = SCRIPT_BLOCKS.replace_all(input, "");
    let stripped = JS_PROTOCOL.replace_all(&stripped, "");
    let stripped = EVENT_HANDLERS.replace_all(&stripped, "");
    let stripped: String = stripped.chars().filter(|c| !matches!(c, '<' | '>')).collect();
    stripped.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn removes_script_blocks() {
        let input = "hello <script>alert('xss')</script>world";
        assert_eq!(sanitize(input), "hello world");
    }

    #[test]
    fn removes_script_blocks_case_insensitive() {
        let input = "<SCRIPT type=\"text/javascript\">evil()</ScRiPt>ok";
        assert_eq!(sanitize(input), "ok");
    }

    #[test]
    fn removes_javascript_protocol() {
        assert_eq!(sanitize("JavaScript:alert(1)"), "alert(1)");
    }

    #[test]
    fn removes_event_handlers() {
        assert_eq!(sanitize("a onclick = doEvil() b"), "a  doEvil() b");
        assert_eq!(sanitize("onerror=boom"), "boom");
    }

    #[test]
    fn strips_angle_brackets() {
        assert_eq!(sanitize("<b>bold</b>"), "bbold/b");
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(sanitize("  plain text  "), "plain text");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("   "), "");
    }

    #[test]
    fn spliced_tokens_do_not_survive() {
        // Bracket removal would otherwise reassemble the protocol prefix.
        let out = sanitize("java<x>script:alert(1)");
        assert!(!out.to_lowercase().contains("javascript:"), "got: {out}");
    }

    proptest! {
        #[test]
        fn idempotent(s in ".*") {
            let once = sanitize(&s);
            prop_assert_eq!(sanitize(&once), once);
        }

        #[test]
        fn never_contains_script_open(s in ".*") {
            prop_assert!(!sanitize(&s).to_lowercase().contains("<script"));
        }

        #[test]
        fn output_has_no_angle_brackets(s in ".*") {
            let out = sanitize(&s);
            prop_assert!(!out.contains('<') && !out.contains('>'));
        }
    }
}
