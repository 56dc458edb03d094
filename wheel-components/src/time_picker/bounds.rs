//! Derives per-column index bounds from the selection and min/max times.
//!
//! The hour column is indexed by its 12-hour value and the period column is
//! `0` for AM and `1` for PM. Minute limits are looked up in the minute data
//! source and only apply while the boundary hour is selected.

use super::time::TimeOfDay;
use crate::item::PickerItem;

/// Period index for AM.
pub const AM: usize = 0;
/// Period index for PM.
pub const PM: usize = 1;

/// Inclusive index limits for one column. `None` means unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnBounds {
    /// Smallest selectable index.
    pub min: Option<usize>,
    /// Largest selectable index.
    pub max: Option<usize>,
}

/// Bounds for the three time picker columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeBounds {
    /// Hour column bounds.
    pub hour: ColumnBounds,
    /// Minute column bounds.
    pub minute: ColumnBounds,
    /// Period column bounds.
    pub period: ColumnBounds,
}

/// Selected index of each column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TimeSelection {
    /// Hour index.
    pub hour: usize,
    /// Minute index.
    pub minute: usize,
    /// Period index, [`AM`] or [`PM`].
    pub period: usize,
}

/// Computes the bounds of every column.
///
/// The lower side comes from `min` and the upper side from `max`; each is
/// derived independently and an absent limit leaves its side unconstrained.
///
/// ```
/// use wheel_components::item::numeric_items;
/// use wheel_components::time_picker::{PM, TimeSelection, derive_bounds};
///
/// let minutes = numeric_items(0..60);
/// let min = "13:30".parse().ok();
/// let bounds = derive_bounds(TimeSelection::default(), min, None, &minutes);
///
/// assert_eq!(bounds.period.min, Some(PM));
/// assert_eq!(bounds.hour.min, Some(1));
/// ```
pub fn derive_bounds(
    selection: TimeSelection,
    min: Option<TimeOfDay>,
    max: Option<TimeOfDay>,
    minutes: &[PickerItem],
) -> TimeBounds {
    let mut bounds = TimeBounds::default();
    if let Some(min) = min {
        apply_min(&mut bounds, selection, min, minutes);
    }
    if let Some(max) = max {
        apply_max(&mut bounds, selection, max, minutes);
    }
    tracing::trace!(?selection, ?min, ?max, ?bounds, "derived time bounds");
    bounds
}

/// A bound before the last minute of 11 AM, such as 11:45, keeps AM
/// selectable; only 11:59 or later forces PM.
fn apply_min(
    bounds: &mut TimeBounds,
    selection: TimeSelection,
    min: TimeOfDay,
    minutes: &[PickerItem],
) {
    let hour = i64::from(min.hour());
    let minute = i64::from(min.minute());
    let past_last = minute >= last_minute_value(minutes);

    let boundary_hour = match hour {
        11 if past_last => {
            bounds.period.min = Some(PM);
            None
        }
        11 => (selection.period == AM).then_some(11),
        // The next hour would be midnight, so the last minute of 11 PM stays.
        23 if past_last => {
            bounds.period.min = Some(PM);
            bounds.hour.min = Some(11);
            if selection.hour == 11 {
                bounds.minute.min = first_minute_at_or_after(minutes, minute)
                    .or_else(|| minutes.len().checked_sub(1));
            }
            None
        }
        12.. => {
            bounds.period.min = Some(PM);
            if past_last {
                bounds.hour.min = Some(hour_index(hour - 11));
                None
            } else {
                Some(hour - 12)
            }
        }
        _ if selection.period != AM => None,
        _ if past_last => {
            bounds.hour.min = Some(hour_index(hour + 1));
            None
        }
        _ => Some(hour),
    };

    if let Some(boundary_hour) = boundary_hour {
        let boundary_hour = hour_index(boundary_hour);
        bounds.hour.min = Some(boundary_hour);
        if selection.hour == boundary_hour {
            bounds.minute.min = first_minute_at_or_after(minutes, minute);
        }
    }
}

fn apply_max(
    bounds: &mut TimeBounds,
    selection: TimeSelection,
    max: TimeOfDay,
    minutes: &[PickerItem],
) {
    let hour = i64::from(max.hour());
    let minute = i64::from(max.minute());
    let at_first = minute <= first_minute_value(minutes);

    let boundary_hour = match hour {
        12 => {
            bounds.period.max = Some(AM);
            (minute != 0 && selection.period == PM).then_some(0)
        }
        13.. if selection.period != PM => None,
        13.. if at_first => {
            bounds.hour.max = Some(hour_index(hour - 13));
            None
        }
        13.. => Some(hour - 12),
        0 if at_first => {
            bounds.period.max = Some(AM);
            bounds.hour.max = Some(0);
            bounds.minute.max = Some(0);
            None
        }
        _ if at_first => {
            bounds.period.max = Some(AM);
            bounds.hour.max = Some(hour_index(hour - 1));
            None
        }
        _ => {
            bounds.period.max = Some(AM);
            Some(hour)
        }
    };

    if let Some(boundary_hour) = boundary_hour {
        let boundary_hour = hour_index(boundary_hour);
        bounds.hour.max = Some(boundary_hour);
        if selection.hour == boundary_hour {
            bounds.minute.max = last_minute_at_or_before(minutes, minute);
        }
    }
}

fn hour_index(hour: i64) -> usize {
    usize::try_from(hour).unwrap_or(0)
}

fn last_minute_value(minutes: &[PickerItem]) -> i64 {
    boundary_minute_value(minutes.last())
}

fn first_minute_value(minutes: &[PickerItem]) -> i64 {
    boundary_minute_value(minutes.first())
}

fn boundary_minute_value(item: Option<&PickerItem>) -> i64 {
    match item.map(PickerItem::as_number) {
        Some(Some(value)) => value,
        Some(None) => {
            tracing::warn!(?item, "non-numeric minute bound value, using 0");
            0
        }
        None => 0,
    }
}

fn first_minute_at_or_after(minutes: &[PickerItem], minute: i64) -> Option<usize> {
    minutes
        .iter()
        .position(|item| item.as_number().is_some_and(|value| value >= minute))
}

fn last_minute_at_or_before(minutes: &[PickerItem], minute: i64) -> Option<usize> {
    minutes
        .iter()
        .rposition(|item| item.as_number().is_some_and(|value| value <= minute))
}
