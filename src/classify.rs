// classify.rs - Bucket a value into a labeled range
//
// Ranges are closed on both ends and checked in order, so where two
// ranges share an endpoint the earlier one owns it. A value no range
// covers gets the empty label.

/// One `label: [min, max]` rule of a range table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(label: &'static str, min: f64, max: f64) -> Self {
        Self { label, min, max }
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Label of the first range containing `value`, or `""` if none does.
pub fn classify(value: f64, ranges: &[Range]) -> &'static str {
    ranges
        .iter()
        .find(|r| r.contains(value))
        .map_or("", |r| r.label)
}
