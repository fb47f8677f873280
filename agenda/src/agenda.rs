use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use crate::{today, Festival, Month, NaiveDate, Style};

/// Returned by the month based queries when the agenda has no entry for the month.
pub const NOT_FOUND: i32 = -1;

/// Festivals grouped by the month they start in.
///
/// A month is only present while it holds at least one festival, and each
/// month keeps its festivals sorted by name. Festivals with equal names stay
/// in the order they were added.
#[derive(Debug, Default)]
pub struct Agenda {
    months: BTreeMap<Month, Vec<Arc<Festival>>>,
}

impl Agenda {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, festival: impl Into<Arc<Festival>>) {
        let festival = festival.into();
        let festivals = self.months.entry(festival.month()).or_default();
        let index = insertion_index(festivals, &festival);
        festivals.insert(index, festival);
    }

    #[must_use]
    pub fn count_in_month(&self, month: Month) -> i32 {
        self.months.get(&month).map_or(NOT_FOUND, |festivals| {
            i32::try_from(festivals.len()).unwrap_or(i32::MAX)
        })
    }

    /// Every style found in the agenda together with the festivals carrying
    /// it, ordered by month and then by name.
    #[must_use]
    pub fn group_by_style(&self) -> BTreeMap<Style, Vec<Arc<Festival>>> {
        let mut styles = BTreeMap::<Style, Vec<Arc<Festival>>>::new();
        for festival in self.months.values().flatten() {
            for style in festival.styles() {
                styles.entry(*style).or_default().push(festival.clone());
            }
        }
        styles
    }

    /// Cancels the festivals of `month` taking place in one of `venues` that
    /// are in progress today. See [`Agenda::cancel_by_venue_on`].
    pub fn cancel_by_venue(&mut self, venues: &HashSet<String>, month: Month) -> i32 {
        self.cancel_by_venue_on(venues, month, today())
    }

    /// Removes the festivals of `month` whose venue is in `venues` and which are
    /// in progress on `today`. Concluded and upcoming festivals are kept.
    ///
    /// Returns the ordinal of `month` (January = 1) or [`NOT_FOUND`] if the
    /// agenda has no festivals in `month`.
    pub fn cancel_by_venue_on(
        &mut self,
        venues: &HashSet<String>,
        month: Month,
        today: NaiveDate,
    ) -> i32 {
        let Some(festivals) = self.months.get_mut(&month) else {
            return NOT_FOUND;
        };
        festivals.retain(|f| !(venues.contains(f.venue()) && f.is_in_progress(today)));
        if festivals.is_empty() {
            self.months.remove(&month);
        }
        i32::try_from(month.ordinal()).unwrap_or(NOT_FOUND)
    }

    pub fn months(&self) -> impl Iterator<Item = (Month, &[Arc<Festival>])> {
        self.months
            .iter()
            .map(|(month, festivals)| (*month, festivals.as_slice()))
    }

    #[must_use]
    pub fn festivals(&self, month: Month) -> &[Arc<Festival>] {
        self.months
            .get(&month)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.months.values().map(Vec::len).sum()
    }
}

impl FromIterator<Festival> for Agenda {
    fn from_iter<T: IntoIterator<Item = Festival>>(iter: T) -> Self {
        let mut agenda = Agenda::new();
        iter.into_iter().for_each(|f| agenda.add(f));
        agenda
    }
}

/// Position after every festival whose name is not greater than the new one.
fn insertion_index(festivals: &[Arc<Festival>], festival: &Festival) -> usize {
    festivals
        .iter()
        .filter(|f| f.name() <= festival.name())
        .count()
}
