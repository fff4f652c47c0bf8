//! Per-call configuration.

/// Default insertion sort threshold shift.
///
/// Tuned for Linux and macOS on x86; macOS runs faster as a pure Quicksort.
pub const DEFAULT_INSERTION_THRESHOLD_SHIFT: u32 = if cfg!(target_os = "macos") { 0 } else { 2 };

/// Tuning knobs for a single sort call.
///
/// A `Config` is a plain value handed to every entry point, so two calls with
/// different settings never influence each other.
///
/// # Examples
///
/// ```
/// use pdqsort::{Config, pdqsort_with, Swap};
///
/// let mut data = [5, 3, 9, 1];
/// pdqsort_with(&mut data, |a: &i32, b: &i32| a.cmp(b), Swap, &Config::pure_quicksort());
/// assert_eq!(data, [1, 3, 5, 9]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    insertion_threshold_shift: u32,
}

impl Config {
    /// Configuration with the platform's default threshold shift.
    pub const fn new() -> Self {
        Self {
            insertion_threshold_shift: DEFAULT_INSERTION_THRESHOLD_SHIFT,
        }
    }

    /// Disables the insertion sort fallback entirely.
    pub const fn pure_quicksort() -> Self {
        Self {
            insertion_threshold_shift: 0,
        }
    }

    /// Sub-ranges of at most `1 << shift` elements are insertion sorted.
    /// A shift of zero disables the fallback.
    pub const fn with_insertion_threshold_shift(mut self, shift: u32) -> Self {
        self.insertion_threshold_shift = shift;
        self
    }

    /// Returns the configured insertion sort threshold shift.
    pub const fn insertion_threshold_shift(&self) -> u32 {
        self.insertion_threshold_shift
    }

    /// Largest sub-range length, in elements, handed to insertion sort.
    ///
    /// Returns `None` when the fallback is disabled. Shifts at or past the word
    /// width saturate, meaning every sub-range is insertion sorted.
    pub const fn insertion_threshold(&self) -> Option<usize> {
        if self.insertion_threshold_shift == 0 {
            return None;
        }
        match 1usize.checked_shl(self.insertion_threshold_shift) {
            Some(threshold) => Some(threshold),
            None => Some(usize::MAX),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
