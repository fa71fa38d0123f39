//! Thread palette assembly.
//!
//! Colors are indexed in the order they are first seen while walking the
//! shapes in drawing order.

use std::collections::HashMap;

/// Ordered, duplicate-free list of thread colors
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThreadPalette {
    colors: Vec<String>,
    indices: HashMap<String, usize>,
}

impl ThreadPalette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of a color already in the palette
    pub fn index_of(&self, color: &str) -> Option<usize> {
        self.indices.get(color).copied()
    }

    /// Index of `color`, appending it first if it has not been seen yet
    pub fn intern(&mut self, color: &str) -> usize {
        if let Some(index) = self.index_of(color) {
            return index;
        }
        let index = self.colors.len();
        self.colors.push(color.to_string());
        self.indices.insert(color.to_string(), index);
        index
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn into_colors(self) -> Vec<String> {
        self.colors
    }
}

/// Resolve shape fills (in drawing order) to palette indices.
///
/// Unfilled shapes (`None` or blank) map to `None` and do not consume an index.
pub fn build_palette<'a, I>(fills: I) -> (Vec<String>, Vec<Option<usize>>)
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut palette = ThreadPalette::new();
    let indices: Vec<Option<usize>> = fills
        .into_iter()
        .map(|fill| {
            fill.map(str::trim)
                .filter(|f| !f.is_empty())
                .map(|f| palette.intern(f))
        })
        .collect();
    (palette.into_colors(), indices)
}
