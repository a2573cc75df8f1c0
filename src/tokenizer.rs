//! Splits the descriptor region of one candidate into descriptor tokens.

use crate::scanner::{is_space, CharClass, Cursor};
use tracing::trace;

/// Tokenizer state while walking one candidate's descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    InDescriptor,
    /// Inside `(...)`. Only one level is tracked: a nested `(` is an ordinary character and the
    /// first `)` closes the group.
    InParens,
    AfterDescriptor,
}

/// Collects the descriptor tokens following a URL, leaving the cursor after the candidate.
///
/// The candidate ends at an unparenthesized comma (which is consumed) or at end of input.
/// Tokens borrow from the input: parenthesized content, commas and whitespace included, is
/// kept verbatim as part of the surrounding token.
pub(crate) fn tokenize<'a>(cursor: &mut Cursor<'a>) -> Vec<&'a str> {
    cursor.collect(CharClass::LeadingSpaces);

    let mut state = State::InDescriptor;
    let mut tokens = Vec::new();
    // Start offset of the token being accumulated, if it is non-empty.
    let mut current: Option<usize> = None;

    loop {
        let Some(c) = cursor.peek() else {
            if let Some(start) = current.take() {
                tokens.push(cursor.slice_from(start));
            }
            break;
        };

        match state {
            State::InDescriptor => {
                if is_space(c) {
                    if let Some(start) = current.take() {
                        tokens.push(cursor.slice_from(start));
                        state = State::AfterDescriptor;
                    }
                } else if c == ',' {
                    if let Some(start) = current.take() {
                        tokens.push(cursor.slice_from(start));
                    }
                    cursor.bump();
                    break;
                } else {
                    current.get_or_insert(cursor.position());
                    if c == '(' {
                        state = State::InParens;
                    }
                }
                cursor.bump();
            }
            State::InParens => {
                if c == ')' {
                    state = State::InDescriptor;
                }
                cursor.bump();
            }
            State::AfterDescriptor => {
                if is_space(c) {
                    cursor.bump();
                } else {
                    // Reprocess `c` as the start of the next token.
                    state = State::InDescriptor;
                }
            }
        }
    }

    trace!(?tokens, end = cursor.position(), "tokenized descriptors");
    tokens
}
