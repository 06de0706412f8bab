//! Aisle zones.

use ab_core::ZoneId;

/// One aisle column plus the seat columns it serves.
///
/// Zones partition the grid: no column belongs to two zones, so zones can be
/// advanced in any relative order (or in parallel) without interacting.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Zone {
    pub id:         ZoneId,
    /// Physical column of the aisle; row 0 of it is the zone's entry cell.
    pub aisle:      usize,
    /// Lowest physical column of the zone (inclusive).
    pub min_column: usize,
    /// Highest physical column of the zone (inclusive).
    pub max_column: usize,
    order:          Vec<usize>,
}

impl Zone {
    pub fn new(id: ZoneId, aisle: usize, min_column: usize, max_column: usize) -> Self {
        let order = column_order(min_column, max_column, aisle);
        Self {
            id,
            aisle,
            min_column,
            max_column,
            order,
        }
    }

    /// Column visitation order for one sweep of this zone.
    ///
    /// Lowest remaining seat column, then highest remaining, alternating until
    /// exhausted, aisle last.  Seats farthest from the aisle on both sides are
    /// visited before the ones next to it, so a passenger always vacates a
    /// cell before anyone behind can step into it in the same round.
    #[inline]
    pub fn column_order(&self) -> &[usize] {
        &self.order
    }

    #[inline]
    pub fn contains(&self, column: usize) -> bool {
        (self.min_column..=self.max_column).contains(&column)
    }

    #[inline]
    pub fn columns(&self) -> std::ops::RangeInclusive<usize> {
        self.min_column..=self.max_column
    }
}

/// Build the alternating outside-in order for `[min, max]`, aisle excluded,
/// then append the aisle.
pub fn column_order(min: usize, max: usize, aisle: usize) -> Vec<usize> {
    let mut columns: std::collections::VecDeque<usize> =
        (min..=max).filter(|&c| c != aisle).collect();
    let mut order = Vec::with_capacity(columns.len() + 1);
    while let Some(low) = columns.pop_front() {
        order.push(low);
        if let Some(high) = columns.pop_back() {
            order.push(high);
        }
    }
    order.push(aisle);
    order
}
