//! Completion signature scanning
//!
//! The language server reports a completion's full signature in the right
//! label, e.g. `foo(x: number): string`. The scanner finds the parameter
//! list and the return type after the symbol name so the UI can show them
//! apart. Parentheses are matched by depth, so callback parameters such as
//! `(cb: (a: number) => void)` stay in one piece.

use tracing::trace;

use crate::types::{ReturnTypePlacement, Suggestion};

/// Marker the server prefixes to property signatures
pub const PROPERTY_PREFIX: &str = "(property) ";

/// Byte offsets found by a single scan of a signature tail
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Scan {
    params_start: Option<usize>,
    params_end: Option<usize>,
    return_start: Option<usize>,
}

impl Scan {
    fn run(tail: &str) -> Self {
        let mut scan = Scan::default();
        let mut depth: i32 = 0;

        for (i, c) in tail.char_indices() {
            match c {
                '(' => {
                    if depth == 0 && scan.params_start.is_none() {
                        scan.params_start = Some(i);
                    }
                    depth += 1;
                }
                ')' => {
                    depth -= 1;
                    if depth == 0 && scan.params_end.is_none() {
                        scan.params_end = Some(i);
                    }
                }
                ':' => {
                    if depth == 0 && scan.return_start.is_none() {
                        scan.return_start = Some(i);
                    }
                }
                _ => {}
            }
        }

        scan
    }

    /// `(...)` span; runs to the end when the list is never closed
    fn params<'a>(&self, tail: &'a str) -> Option<&'a str> {
        let start = self.params_start?;
        let span = match self.params_end {
            Some(end) => &tail[start..=end],
            None => &tail[start..],
        };
        Some(span.trim())
    }

    fn return_type<'a>(&self, tail: &'a str) -> Option<&'a str> {
        self.return_start.map(|start| tail[start + 1..].trim())
    }
}

/// Parameter list and return type split out of a signature tail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureParts<'a> {
    /// Parenthesized parameter list, parentheses included
    pub params: Option<&'a str>,
    /// Text after the first top-level colon
    pub return_type: Option<&'a str>,
}

/// Split the text that follows a symbol name into parameters and return type
///
/// # Examples
///
/// ```
/// use ide_typescript::split_signature;
///
/// let parts = split_signature("(x: number): string");
/// assert_eq!(parts.params, Some("(x: number)"));
/// assert_eq!(parts.return_type, Some("string"));
/// ```
pub fn split_signature(tail: &str) -> SignatureParts<'_> {
    let scan = Scan::run(tail);
    SignatureParts {
        params: scan.params(tail),
        return_type: scan.return_type(tail),
    }
}

/// Rewrite a suggestion's labels from the signature in its right label
///
/// Nothing changes when the display text or right label is missing, or
/// when the display text does not occur in the right label. Under
/// [`ReturnTypePlacement::Right`] a signature without a parameter list is
/// also left untouched.
pub fn apply_signature(suggestion: &mut Suggestion, placement: ReturnTypePlacement) {
    let (Some(right_label), Some(display_text)) = (
        suggestion.right_label.as_deref(),
        suggestion.display_text.as_deref(),
    ) else {
        return;
    };

    let Some(name_index) = right_label.find(display_text) else {
        return;
    };

    let tail = right_label[name_index + display_text.len()..].trim();
    let scan = Scan::run(tail);
    trace!(display_text, tail, ?scan, "Scanned completion signature");

    match placement {
        ReturnTypePlacement::Left => {
            let params = scan.params(tail).map(str::to_string);
            let return_type = scan.return_type(tail).map(str::to_string);

            if let Some(params) = params {
                suggestion.right_label = Some(params);
            }
            if let Some(return_type) = return_type {
                suggestion.left_label = Some(return_type);
            }
            // The property icon already says this
            let stripped = suggestion
                .right_label
                .as_deref()
                .and_then(|label| label.strip_prefix(PROPERTY_PREFIX))
                .map(str::to_string);
            if let Some(stripped) = stripped {
                suggestion.right_label = Some(stripped);
            }
        }
        ReturnTypePlacement::Right => {
            let Some(start) = scan.params_start else {
                return;
            };
            let signature = tail[start..].trim().to_string();
            suggestion.right_label = Some(signature);
            suggestion.left_label = Some(String::new());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestion(display: &str, right: &str) -> Suggestion {
        Suggestion::new(display)
            .with_display_text(display)
            .with_right_label(right)
    }

    #[test]
    fn test_left_placement_splits_params_and_return_type() {
        let mut s = suggestion("foo", "foo(x: number): string");
        apply_signature(&mut s, ReturnTypePlacement::Left);

        assert_eq!(s.right_label.as_deref(), Some("(x: number)"));
        assert_eq!(s.left_label.as_deref(), Some("string"));
    }

    #[test]
    fn test_right_placement_keeps_signature_together() {
        let mut s = suggestion("foo", "foo(x: number): string");
        apply_signature(&mut s, ReturnTypePlacement::Right);

        assert_eq!(s.right_label.as_deref(), Some("(x: number): string"));
        assert_eq!(s.left_label.as_deref(), Some(""));
    }

    #[test]
    fn test_missing_right_label_is_untouched() {
        let mut s = Suggestion::new("foo")
            .with_display_text("foo")
            .with_left_label("keep");
        let before = s.clone();

        apply_signature(&mut s, ReturnTypePlacement::Left);
        assert_eq!(s, before);
        apply_signature(&mut s, ReturnTypePlacement::Right);
        assert_eq!(s, before);
    }

    #[test]
    fn test_missing_display_text_is_untouched() {
        let mut s = Suggestion::new("foo").with_right_label("foo(): void");
        let before = s.clone();

        apply_signature(&mut s, ReturnTypePlacement::Left);
        assert_eq!(s, before);
    }

    #[test]
    fn test_display_text_not_in_label_is_untouched() {
        let mut s = suggestion("bar", "foo(x: number): string");
        let before = s.clone();

        apply_signature(&mut s, ReturnTypePlacement::Left);
        assert_eq!(s, before);
    }

    #[test]
    fn test_nested_parens_matched_by_depth() {
        let mut s = suggestion("foo", "foo(cb: (a: number) => void): void");
        apply_signature(&mut s, ReturnTypePlacement::Left);

        assert_eq!(s.right_label.as_deref(), Some("(cb: (a: number) => void)"));
        assert_eq!(s.left_label.as_deref(), Some("void"));
    }

    #[test]
    fn test_property_prefix_stripped_in_left_placement() {
        let mut s = suggestion("length", "(property) length: number");
        apply_signature(&mut s, ReturnTypePlacement::Left);

        // No parameter list, so the right label keeps the full text minus the marker
        assert_eq!(s.right_label.as_deref(), Some("length: number"));
        assert_eq!(s.left_label.as_deref(), Some("number"));
    }

    #[test]
    fn test_property_prefix_kept_in_right_placement() {
        let mut s = suggestion("length", "(property) length: number");
        let before = s.clone();
        apply_signature(&mut s, ReturnTypePlacement::Right);

        // No parameter list after the name: nothing to rewrite
        assert_eq!(s, before);
        assert!(s.right_label.unwrap().starts_with(PROPERTY_PREFIX));
    }

    #[test]
    fn test_method_without_return_type() {
        let mut s = suggestion("log", "log(message?: any, ...optionalParams: any[])");
        s.left_label = Some("old".to_string());
        apply_signature(&mut s, ReturnTypePlacement::Left);

        assert_eq!(
            s.right_label.as_deref(),
            Some("(message?: any, ...optionalParams: any[])")
        );
        assert_eq!(s.left_label.as_deref(), Some("old"));
    }

    #[test]
    fn test_unclosed_params_run_to_end() {
        let mut s = suggestion("foo", "foo(x: number");
        apply_signature(&mut s, ReturnTypePlacement::Left);

        assert_eq!(s.right_label.as_deref(), Some("(x: number"));
        assert_eq!(s.left_label, None);
    }

    #[test]
    fn test_generic_method_signature() {
        let mut s = suggestion(
            "map",
            "(method) Array<number>.map<U>(callbackfn: (value: number) => U): U[]",
        );
        apply_signature(&mut s, ReturnTypePlacement::Left);

        assert_eq!(
            s.right_label.as_deref(),
            Some("(callbackfn: (value: number) => U)")
        );
        assert_eq!(s.left_label.as_deref(), Some("U[]"));
    }

    #[test]
    fn test_split_signature_without_params() {
        let parts = split_signature(": string");
        assert_eq!(parts.params, None);
        assert_eq!(parts.return_type, Some("string"));
    }

    #[test]
    fn test_split_signature_ignores_colons_inside_params() {
        let parts = split_signature("(a: { b: string }): void");
        assert_eq!(parts.params, Some("(a: { b: string })"));
        assert_eq!(parts.return_type, Some("void"));
    }

    #[test]
    fn test_scan_tolerates_unbalanced_close() {
        let scan = Scan::run(")(x): y");
        assert_eq!(scan.params_start, None);
        assert_eq!(scan.params_end, None);
        assert_eq!(scan.return_start, None);
    }
}
