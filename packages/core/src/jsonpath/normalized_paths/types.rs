//! Core types for normalized accessor lists
//!
//! An accessor list is the flat token sequence a `$`-rooted path folds into
//! once brackets and quotes are stripped. It is rebuilt on every call.

use std::fmt;

/// Ordered field/index tokens produced from a path string
///
/// An empty list selects the root node. Tokens are kept as strings: whether a
/// token names an object key or an array index is decided by the node it is
/// applied to, not by the syntax it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AccessorList {
    pub(crate) tokens: Vec<String>,
}

impl AccessorList {
    /// Build an accessor list from already normalized tokens
    #[must_use]
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of traversal steps
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.tokens.len()
    }

    /// Check if this list selects the root (`$`)
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.tokens.iter()
    }

    /// Dotted rendering of the first `steps` tokens, e.g. `$.store.book.1`
    #[must_use]
    pub fn prefix(&self, steps: usize) -> String {
        render(&self.tokens[..steps.min(self.tokens.len())])
    }
}

fn render(tokens: &[String]) -> String {
    let mut out = String::with_capacity(1 + tokens.iter().map(|t| t.len() + 1).sum::<usize>());
    out.push('$');
    for token in tokens {
        out.push('.');
        out.push_str(token);
    }
    out
}

impl fmt::Display for AccessorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(&self.tokens))
    }
}

impl<'a> IntoIterator for &'a AccessorList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
