// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Interval Primitives
//!
//! A small, generic half-open interval used throughout the workspace for
//! occupied time windows within a day.
//!
//! The half-open convention `[start, end)` is load-bearing: a checkout at
//! 11:00 and a check-in at 11:00 must *not* count as overlapping, and
//! half-open intersection gives exactly that boundary behavior.

use std::cmp::Ordering;

/// A half-open interval `[start, end)`.
///
/// The start is inclusive and the end is exclusive, so the interval
/// contains every `x` with `start <= x < end`. An interval with
/// `start == end` is empty and intersects nothing, including itself.
///
/// # Examples
///
/// ```
/// use room_grid_core::primitives::Interval;
///
/// let window = Interval::new(540, 690); // 09:00..11:30 in minutes
/// assert_eq!(window.start(), 540);
/// assert_eq!(window.end(), 690);
/// assert!(window.contains(540));
/// assert!(!window.contains(690));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    start_inclusive: T,
    end_exclusive: T,
}

impl<T> Interval<T> {
    /// Creates a new half-open interval `[start, end)`.
    ///
    /// The bounds are ordered on construction: if `b < a` they are
    /// swapped, so `start() <= end()` always holds afterwards. Every
    /// other method relies on that invariant.
    ///
    /// # Panics
    ///
    /// Panics if the bounds are not comparable (e.g. NaN).
    ///
    /// # Examples
    ///
    /// ```
    /// use room_grid_core::primitives::Interval;
    ///
    /// let forward = Interval::new(3, 8);
    /// let reversed = Interval::new(8, 3);
    /// assert_eq!(forward, reversed);
    /// ```
    #[inline]
    pub fn new(a: T, b: T) -> Self
    where
        T: PartialOrd + Copy,
    {
        let ord = a
            .partial_cmp(&b)
            .expect("Interval::new: non-comparable bounds");
        let (start, end) = match ord {
            Ordering::Greater => (b, a),
            _ => (a, b),
        };
        Self {
            start_inclusive: start,
            end_exclusive: end,
        }
    }

    /// Returns the inclusive start bound.
    #[inline]
    pub fn start(&self) -> T
    where
        T: Copy,
    {
        self.start_inclusive
    }

    /// Returns the exclusive end bound.
    #[inline]
    pub fn end(&self) -> T
    where
        T: Copy,
    {
        self.end_exclusive
    }

    /// Returns `true` if the interval has zero extent.
    ///
    /// # Examples
    ///
    /// ```
    /// use room_grid_core::primitives::Interval;
    ///
    /// assert!(Interval::new(7, 7).is_empty());
    /// assert!(!Interval::new(7, 9).is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool
    where
        T: PartialEq,
    {
        self.start_inclusive == self.end_exclusive
    }

    /// Returns `true` if `x` lies inside the interval.
    ///
    /// The start bound is inside, the end bound is not.
    #[inline]
    pub fn contains(&self, x: T) -> bool
    where
        T: PartialOrd,
    {
        x >= self.start_inclusive && x < self.end_exclusive
    }

    /// Returns `true` if the two half-open intervals share any point.
    ///
    /// Touching at a single boundary is *not* an intersection: `[a, b)`
    /// and `[b, c)` are disjoint. Empty intervals intersect nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use room_grid_core::primitives::Interval;
    ///
    /// let morning = Interval::new(540, 630);
    /// let late_morning = Interval::new(630, 720);
    /// assert!(!morning.intersects(&late_morning)); // back-to-back
    ///
    /// let overlapping = Interval::new(600, 660);
    /// assert!(morning.intersects(&overlapping));
    /// ```
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool
    where
        T: PartialOrd,
    {
        self.start_inclusive < other.end_exclusive && other.start_inclusive < self.end_exclusive
    }

    /// Returns `true` if this interval ends at or before `other` starts.
    ///
    /// Holds for both a gap and an exact boundary touch.
    #[inline]
    pub fn precedes(&self, other: &Self) -> bool
    where
        T: PartialOrd + Copy,
    {
        self.end() <= other.start()
    }
}
