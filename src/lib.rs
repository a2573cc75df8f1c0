//! A parser for the HTML `srcset` attribute, following the WHATWG
//! ["parse a srcset attribute"](https://html.spec.whatwg.org/multipage/images.html#parse-a-srcset-attribute)
//! algorithm.
//!
//! Parsing never fails. Candidates with malformed or conflicting descriptors are dropped and the
//! rest of the attribute is still parsed.

mod descriptor;
mod scanner;
mod tokenizer;

use descriptor::{classify, Descriptors};
use scanner::{strip_trailing_commas, CharClass, Cursor};
use tracing::{debug, trace};

/// A single candidate in a `srcset`: a URL plus optional "width", "height" or "density".
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageCandidate {
    pub url: String,
    pub width: Option<u64>,
    pub height: Option<u64>,
    pub density: Option<f64>,
}

impl ImageCandidate {
    /// A candidate with no descriptors.
    pub fn new(url: impl Into<String>) -> Self {
        ImageCandidate {
            url: url.into(),
            width: None,
            height: None,
            density: None,
        }
    }

    /// Whether any of width, height or density is set.
    pub fn has_descriptor(&self) -> bool {
        self.width.is_some() || self.height.is_some() || self.density.is_some()
    }

    fn with_descriptors(url: &str, descriptors: Descriptors) -> Self {
        ImageCandidate {
            url: url.to_owned(),
            width: descriptors.width,
            height: descriptors.height,
            density: descriptors.density,
        }
    }
}

/// The candidates of a `srcset`, in the order they appear in the attribute.
pub type SourceSet = Vec<ImageCandidate>;

/// Parses an `srcset` string and returns its valid `ImageCandidate`s.
///
/// # Examples
/// ```
/// let srcset = "image1.png 1x, image2.png 2x, image3.png 100w, broken.png 0w";
/// let candidates = srcset_parse::parse(srcset);
/// assert_eq!(candidates.len(), 3);
/// assert_eq!(candidates[0].density, Some(1.0));
/// assert_eq!(candidates[1].density, Some(2.0));
/// assert_eq!(candidates[2].width, Some(100));
/// ```
pub fn parse(srcset: &str) -> SourceSet {
    parse_with_limit(srcset, usize::MAX)
}

/// Like [`parse`], but stops once `max_candidates` valid candidates have been collected.
///
/// Useful for tooling that has to keep memory bounded on pathological attributes.
pub fn parse_with_limit(srcset: &str, max_candidates: usize) -> SourceSet {
    let mut cursor = Cursor::new(srcset);
    let mut candidates = SourceSet::new();

    while candidates.len() < max_candidates {
        cursor.collect(CharClass::LeadingCommasOrSpaces);
        if cursor.is_eof() {
            break;
        }

        let url = cursor.collect(CharClass::LeadingNotSpaces);
        // A URL glued to its separating comma has no descriptors.
        let (url, tokens) = if url.ends_with(',') {
            (strip_trailing_commas(url), Vec::new())
        } else {
            (url, tokenizer::tokenize(&mut cursor))
        };

        match classify(&tokens) {
            Ok(descriptors) => {
                trace!(url, ?descriptors, "accepted candidate");
                candidates.push(ImageCandidate::with_descriptors(url, descriptors));
            }
            Err(reason) => debug!(url, %reason, "dropped candidate"),
        }
    }

    candidates
}
