//! Color assignment for plotted measures.
//!
//! Measures without an explicit color take the next entry of [`PALETTE`],
//! wrapping around after the last one. The cursor is an ordinary value owned
//! by one generation run, so two runs always hand out the same sequence.

/// Color of the score itself and of its aggregate (mean) functions.
pub const BLACK: &str = "#000000";

pub const PALETTE: [&str; 27] = [
    "#c74440", "#2d70b3", "#388c46", "#6042a6", "#fa7e19", "#e6194b", "#3cb44b", "#ffe119",
    "#4363d8", "#f58231", "#911eb4", "#46f0f0", "#f032e6", "#bcf60c", "#fabebe", "#008080",
    "#e6beff", "#9a6324", "#fffac8", "#800000", "#aaffc3", "#808000", "#ffd8b1", "#000075",
    "#808080", "#ffffff", "#000000",
];

/// Cycling cursor over [`PALETTE`].
#[derive(Debug, Clone, Default)]
pub struct ColorCycle {
    cursor: usize,
}

impl ColorCycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the color under the cursor and advance.
    pub fn next_color(&mut self) -> &'static str {
        let color = PALETTE[self.cursor % PALETTE.len()];
        self.cursor = (self.cursor + 1) % PALETTE.len();
        color
    }

    /// Use `explicit` when given and non-empty, otherwise draw from the
    /// palette.
    pub fn resolve(&mut self, explicit: Option<&str>) -> String {
        match explicit {
            Some(color) if !color.is_empty() => color.to_string(),
            _ => self.next_color().to_string(),
        }
    }

    /// Index of the color the next call will return.
    pub fn position(&self) -> usize {
        self.cursor
    }
}

impl Iterator for ColorCycle {
    type Item = &'static str;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_color())
    }
}
