//! Inclusive date-range filter.

use super::date::Date;
use super::error::FilterError;

/// Accepts dates within an inclusive from/to range; either bound may be
/// absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Filter {
    from: Option<Date>,
    to: Option<Date>,
}

impl Filter {
    /// Builds a filter from optional bounds. An inverted range
    /// (`from > to`) is rejected.
    pub fn from_to(from: Option<Date>, to: Option<Date>) -> Result<Filter, FilterError> {
        if let (Some(from), Some(to)) = (from, to)
            && from > to
        {
            return Err(FilterError { from, to });
        }
        Ok(Filter { from, to })
    }

    /// True if `date` lies within the range; bounds are inclusive.
    pub fn contains(&self, date: Date) -> bool {
        self.from.is_none_or(|from| from <= date) && self.to.is_none_or(|to| date <= to)
    }
}
