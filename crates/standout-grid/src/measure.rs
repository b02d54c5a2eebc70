//! Width ranges for renderable content.
//!
//! A [`Measurement`] is the answer to "how narrow and how wide can this
//! content be rendered?". The minimum is the narrowest width that avoids
//! breaking an unbreakable token; the maximum is the width the content
//! takes when nothing wraps.

use crate::renderable::{RenderOptions, Renderable};

/// A `(minimum, maximum)` range of display widths, in terminal cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Measurement {
    pub minimum: usize,
    pub maximum: usize,
}

impl Measurement {
    /// Create a measurement, swapping the bounds if they are reversed.
    pub fn new(minimum: usize, maximum: usize) -> Self {
        Self { minimum, maximum }.normalize()
    }

    /// A measurement where minimum and maximum are the same width.
    pub fn exact(width: usize) -> Self {
        Self {
            minimum: width,
            maximum: width,
        }
    }

    /// Measure any renderable at the width carried by `options`.
    ///
    /// The result is normalized and never exceeds `options.max_width`.
    /// Content measured into zero cells, or content with nothing to show,
    /// measures `(0, 0)`.
    pub fn get(renderable: &dyn Renderable, options: &RenderOptions) -> Self {
        let max_width = options.max_width;
        if max_width == 0 {
            return Self::default();
        }
        let measured = renderable
            .measure(options)
            .normalize()
            .with_maximum(max_width);
        if measured.maximum == 0 {
            return Self::default();
        }
        measured
    }

    /// Difference between the maximum and minimum.
    pub fn span(&self) -> usize {
        self.maximum - self.minimum
    }

    /// Ensure `minimum <= maximum`.
    pub fn normalize(self) -> Self {
        if self.minimum > self.maximum {
            Self {
                minimum: self.maximum,
                maximum: self.minimum,
            }
        } else {
            self
        }
    }

    /// Pairwise maximum of both bounds.
    pub fn union(self, other: Self) -> Self {
        Self {
            minimum: self.minimum.max(other.minimum),
            maximum: self.maximum.max(other.maximum),
        }
    }

    /// Add a fixed number of cells to both bounds.
    pub fn widen(self, cells: usize) -> Self {
        Self {
            minimum: self.minimum + cells,
            maximum: self.maximum + cells,
        }
    }

    /// Cap both bounds at `width`.
    pub fn with_maximum(self, width: usize) -> Self {
        Self {
            minimum: self.minimum.min(width),
            maximum: self.maximum.min(width),
        }
    }

    /// Raise both bounds to at least `width`.
    pub fn with_minimum(self, width: usize) -> Self {
        Self {
            minimum: self.minimum.max(width),
            maximum: self.maximum.max(width),
        }
    }

    /// Apply optional lower and upper bounds, lower first.
    pub fn clamp(self, min_width: Option<usize>, max_width: Option<usize>) -> Self {
        let mut measurement = self;
        if let Some(min_width) = min_width {
            measurement = measurement.with_minimum(min_width);
        }
        if let Some(max_width) = max_width {
            measurement = measurement.with_maximum(max_width);
        }
        measurement
    }
}

impl std::ops::Add for Measurement {
    type Output = Measurement;

    fn add(self, other: Self) -> Self {
        Self {
            minimum: self.minimum + other.minimum,
            maximum: self.maximum + other.maximum,
        }
    }
}

impl std::iter::Sum for Measurement {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Measurement::default(), |acc, m| acc + m)
    }
}

impl From<(usize, usize)> for Measurement {
    fn from((minimum, maximum): (usize, usize)) -> Self {
        Self::new(minimum, maximum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::Text;

    #[test]
    fn new_normalizes_reversed_bounds() {
        assert_eq!(Measurement::new(10, 4), Measurement::new(4, 10));
        assert_eq!(Measurement::new(10, 4).minimum, 4);
    }

    #[test]
    fn union_takes_pairwise_maximum() {
        let a = Measurement::new(3, 10);
        let b = Measurement::new(5, 8);
        assert_eq!(a.union(b), Measurement::new(5, 10));
    }

    #[test]
    fn with_maximum_pulls_minimum_down() {
        assert_eq!(Measurement::new(8, 20).with_maximum(6), Measurement::new(6, 6));
        assert_eq!(Measurement::new(2, 20).with_maximum(6), Measurement::new(2, 6));
    }

    #[test]
    fn with_minimum_pushes_maximum_up() {
        assert_eq!(Measurement::new(3, 5).with_minimum(30), Measurement::exact(30));
        assert_eq!(Measurement::new(3, 50).with_minimum(30), Measurement::new(30, 50));
    }

    #[test]
    fn clamp_applies_both_bounds() {
        let m = Measurement::new(2, 40).clamp(Some(5), Some(12));
        assert_eq!(m, Measurement::new(5, 12));
        assert_eq!(Measurement::new(2, 40).clamp(None, None), Measurement::new(2, 40));
    }

    #[test]
    fn sum_adds_bounds() {
        let total: Measurement = [Measurement::new(1, 2), Measurement::new(3, 4)]
            .into_iter()
            .sum();
        assert_eq!(total, Measurement::new(4, 6));
        assert_eq!(total.span(), 2);
    }

    #[test]
    fn get_text_uses_longest_word_and_line() {
        let text = Text::new("banana pancakes");
        let m = Measurement::get(&text, &RenderOptions::new(60));
        assert_eq!(m, Measurement::new(8, 15));
    }

    #[test]
    fn get_clamps_to_available_width() {
        let text = Text::new("Averlongwordgoeshere");
        let m = Measurement::get(&text, &RenderOptions::new(10));
        assert_eq!(m, Measurement::exact(10));
    }

    #[test]
    fn get_zero_width_is_empty() {
        let text = Text::new("foo");
        assert_eq!(
            Measurement::get(&text, &RenderOptions::new(0)),
            Measurement::default()
        );
        assert_eq!(
            Measurement::get(&Text::new(""), &RenderOptions::new(20)),
            Measurement::default()
        );
    }
}
