use crate::model::{Day, Item, Trip};

/// Day selection plus the detail overlay. Both are owned here and nowhere
/// else; everything the list and overlay show is derived from these two
/// fields and the (immutable) trip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItineraryState {
    selected_day: usize,
    open_item: Option<Item>,
}

impl ItineraryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_day(&self) -> usize {
        self.selected_day
    }

    pub fn open_item(&self) -> Option<&Item> {
        self.open_item.as_ref()
    }

    pub fn is_detail_open(&self) -> bool {
        self.open_item.is_some()
    }

    /// Select a day by index. The index always comes from rendering the
    /// dataset, so an out-of-range value is a bug; it is ignored in release
    /// builds.
    pub fn select_day(&mut self, trip: &Trip, index: usize) {
        debug_assert!(
            index < trip.day_count(),
            "day index {} out of range ({} days)",
            index,
            trip.day_count()
        );
        if index < trip.day_count() {
            self.selected_day = index;
        }
    }

    /// Move to the previous day, staying on the first
    pub fn select_prev_day(&mut self, trip: &Trip) {
        if self.selected_day > 0 {
            let target = self.selected_day - 1;
            self.select_day(trip, target);
        }
    }

    /// Move to the next day, staying on the last
    pub fn select_next_day(&mut self, trip: &Trip) {
        if self.selected_day + 1 < trip.day_count() {
            let target = self.selected_day + 1;
            self.select_day(trip, target);
        }
    }

    pub fn open_detail(&mut self, item: &Item) {
        self.open_item = Some(item.clone());
    }

    /// Close the overlay. Closing an already closed overlay is a no-op.
    pub fn close_detail(&mut self) {
        self.open_item = None;
    }

    /// The selected day, if the trip has any days
    pub fn current_day<'a>(&self, trip: &'a Trip) -> Option<&'a Day> {
        trip.day(self.selected_day)
    }

    /// Items of the selected day in stored order
    pub fn current_items<'a>(&self, trip: &'a Trip) -> &'a [Item] {
        day_items(trip, self.selected_day)
    }

    /// Item following the open one in the selected day. Re-derived on every
    /// call.
    pub fn next_item<'a>(&self, trip: &'a Trip) -> Option<&'a Item> {
        let open = self.open_item.as_ref()?;
        let day = self.current_day(trip)?;
        next_item(day, &open.id)
    }
}

/// Items for a day, empty when the index is out of range
pub fn day_items(trip: &Trip, index: usize) -> &[Item] {
    trip.day(index).map(|d| d.items.as_slice()).unwrap_or(&[])
}

/// The item after `item_id` in the day's order, or `None` when the item is
/// last or not in this day
pub fn next_item<'a>(day: &'a Day, item_id: &str) -> Option<&'a Item> {
    let idx = day.position_of(item_id)?;
    day.items.get(idx + 1)
}
