//! Bracketed rendering of a container's live elements.
//!
//! The containers never interpret their bytes, so rendering needs a
//! caller-supplied formatter. [`Listing`] pairs the container's traversal
//! with that formatter and implements [`Display`](fmt::Display) as
//! `[e0, e1, ...]`.

use std::fmt;

/// A `Display` adapter over a sequence of raw elements.
///
/// `format_element` is called once per element, in the iterator's order.
/// Obtain one from a container's `listing()` method, which supplies the
/// container's own traversal order.
#[derive(Clone)]
pub struct Listing<I, F> {
    elements: I,
    format_element: F,
}

impl<I, F> Listing<I, F> {
    /// Pair an element iterator with a per-element formatter.
    pub fn new(elements: I, format_element: F) -> Self {
        Self {
            elements,
            format_element,
        }
    }
}

impl<'a, I, F> fmt::Display for Listing<I, F>
where
    I: Iterator<Item = &'a [u8]> + Clone,
    F: Fn(&[u8], &mut fmt::Formatter<'_>) -> fmt::Result,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.elements.clone().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            (self.format_element)(element, f)?;
        }
        f.write_str("]")
    }
}
