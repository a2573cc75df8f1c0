//! Classification of the descriptor tokens that follow a candidate URL.

use crate::scanner::CharClass;

/// The descriptor values accepted for one candidate.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub(crate) struct Descriptors {
    pub(crate) width: Option<u64>,
    pub(crate) height: Option<u64>,
    pub(crate) density: Option<f64>,
}

/// Why a candidate was dropped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum Rejection {
    #[error("descriptor `{0}` conflicts with an earlier descriptor")]
    Conflict(String),
    #[error("width descriptor `{0}` is not a positive integer")]
    InvalidWidth(String),
    #[error("height descriptor `{0}` is not a positive integer")]
    InvalidHeight(String),
    #[error("density descriptor `{0}` is not a non-negative number")]
    InvalidDensity(String),
    #[error("unrecognized descriptor `{0}`")]
    Unrecognized(String),
}

/// Parses a width or height body. Zero and values that overflow `i64` are invalid.
fn positive_integer(body: &str) -> Option<u64> {
    body.parse::<i64>()
        .ok()
        .filter(|&n| n > 0)
        .and_then(|n| u64::try_from(n).ok())
}

/// Parses a density body. Overflow to infinity and negative values are invalid.
fn density(body: &str) -> Option<f64> {
    body.parse::<f64>()
        .ok()
        .filter(|d| d.is_finite() && *d >= 0.0)
}

/// Turns a candidate's descriptor tokens into typed values.
///
/// Every token is visited even after a problem is found, so a later token can never make an
/// already broken candidate valid. The first problem is the one reported. An empty token list
/// always succeeds.
pub(crate) fn classify(tokens: &[&str]) -> Result<Descriptors, Rejection> {
    let mut found = Descriptors::default();
    let mut rejection = None;

    for &token in tokens {
        let Some((split, suffix)) = token.char_indices().next_back() else {
            rejection.get_or_insert_with(|| Rejection::Unrecognized(String::new()));
            continue;
        };
        let body = &token[..split];

        let mut reject = |r: Rejection| {
            rejection.get_or_insert(r);
        };

        if suffix == 'w' && CharClass::NonNegativeInteger.is_match(body) {
            if found.width.is_some() || found.density.is_some() {
                reject(Rejection::Conflict(token.to_owned()));
            }
            match positive_integer(body) {
                Some(w) => found.width = Some(w),
                None => reject(Rejection::InvalidWidth(token.to_owned())),
            }
        } else if suffix == 'x' && CharClass::FloatingPoint.is_match(body) {
            if found.width.is_some() || found.height.is_some() || found.density.is_some() {
                reject(Rejection::Conflict(token.to_owned()));
            }
            match density(body) {
                Some(d) => found.density = Some(d),
                None => reject(Rejection::InvalidDensity(token.to_owned())),
            }
        } else if suffix == 'h' && CharClass::NonNegativeInteger.is_match(body) {
            if found.height.is_some() || found.density.is_some() {
                reject(Rejection::Conflict(token.to_owned()));
            }
            match positive_integer(body) {
                Some(h) => found.height = Some(h),
                None => reject(Rejection::InvalidHeight(token.to_owned())),
            }
        } else {
            reject(Rejection::Unrecognized(token.to_owned()));
        }
    }

    match rejection {
        Some(r) => Err(r),
        None => Ok(found),
    }
}

#[cfg(test)]
mod tests {
    use super::{classify, Descriptors, Rejection};
    use pretty_assertions::assert_eq;

    #[test]
    fn no_tokens_is_a_bare_candidate() {
        assert_eq!(classify(&[]), Ok(Descriptors::default()));
    }

    #[test]
    fn classifies_each_kind() {
        assert_eq!(
            classify(&["320w"]),
            Ok(Descriptors {
                width: Some(320),
                ..Descriptors::default()
            })
        );
        assert_eq!(
            classify(&["200h"]),
            Ok(Descriptors {
                height: Some(200),
                ..Descriptors::default()
            })
        );
        assert_eq!(
            classify(&["1.5x"]),
            Ok(Descriptors {
                density: Some(1.5),
                ..Descriptors::default()
            })
        );
    }

    #[test]
    fn density_accepts_scientific_notation() {
        assert_eq!(classify(&["2e0x"]).map(|d| d.density), Ok(Some(2.0)));
        assert_eq!(classify(&[".5x"]).map(|d| d.density), Ok(Some(0.5)));
        assert_eq!(classify(&["0x"]).map(|d| d.density), Ok(Some(0.0)));
    }

    #[test]
    fn width_and_height_may_coexist() {
        let both = Descriptors {
            width: Some(320),
            height: Some(200),
            density: None,
        };
        assert_eq!(classify(&["320w", "200h"]), Ok(both));
        assert_eq!(classify(&["200h", "320w"]), Ok(both));
    }

    #[test]
    fn conflicting_kinds_are_rejected() {
        assert_eq!(
            classify(&["1x", "2x"]),
            Err(Rejection::Conflict("2x".to_owned()))
        );
        assert_eq!(
            classify(&["1x", "200w"]),
            Err(Rejection::Conflict("200w".to_owned()))
        );
        assert_eq!(
            classify(&["200w", "1x"]),
            Err(Rejection::Conflict("1x".to_owned()))
        );
        assert_eq!(
            classify(&["124h", "234h"]),
            Err(Rejection::Conflict("234h".to_owned()))
        );
        assert_eq!(
            classify(&["124h", "2x"]),
            Err(Rejection::Conflict("2x".to_owned()))
        );
    }

    #[test]
    fn invalid_numbers_are_rejected() {
        assert_eq!(
            classify(&["0w"]),
            Err(Rejection::InvalidWidth("0w".to_owned()))
        );
        assert_eq!(
            classify(&["0h"]),
            Err(Rejection::InvalidHeight("0h".to_owned()))
        );
        assert_eq!(
            classify(&["-1.3x"]),
            Err(Rejection::InvalidDensity("-1.3x".to_owned()))
        );
        assert_eq!(
            classify(&["1e400x"]),
            Err(Rejection::InvalidDensity("1e400x".to_owned()))
        );
        assert_eq!(
            classify(&["99999999999999999999w"]),
            Err(Rejection::InvalidWidth("99999999999999999999w".to_owned()))
        );
    }

    #[test]
    fn unrecognized_syntax_is_rejected() {
        for token in ["-100w", "-100h", "f55w", "2xx", "x", "100", "1.5w", "(1x)"] {
            assert_eq!(
                classify(&[token]),
                Err(Rejection::Unrecognized(token.to_owned())),
                "{token}"
            );
        }
    }

    #[test]
    fn a_later_valid_token_does_not_undo_a_rejection() {
        assert_eq!(
            classify(&["bogus", "2x"]),
            Err(Rejection::Unrecognized("bogus".to_owned()))
        );
    }

    #[test]
    fn rejection_messages_name_the_token() {
        assert_eq!(
            Rejection::Conflict("2x".to_owned()).to_string(),
            "descriptor `2x` conflicts with an earlier descriptor"
        );
    }
}
