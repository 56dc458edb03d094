//! Three-column wheel time picker bounded by optional min/max times.
//!
//! ## Usage
//!
//! Use to let users choose a time of day on a 12-hour wheel, for example an
//! alarm or a pickup slot that must fall inside opening hours.
mod bounds;
mod time;

use chrono::Timelike;
use derive_setters::Setters;
use smallvec::SmallVec;
use wheel_ui::{CallbackWith, Color, Dp};

pub use self::{
    bounds::{AM, ColumnBounds, PM, TimeBounds, TimeSelection, derive_bounds},
    time::{TimeOfDay, TimeParseError},
};
use crate::{
    item::{PickerItem, label_items, numeric_items},
    scroll_picker::{
        ScrollEvent, ScrollPickerArgs, ScrollPickerController, ScrollPickerLayout, ScrollRequest,
        ValueChange,
    },
};

const DEFAULT_ITEM_HEIGHT: Dp = Dp(60.0);
// Each pass moves at most one column; bounds depend on the selection they constrain.
const MAX_PROPAGATION_PASSES: usize = 8;
// Period first: hour and minute bounds are derived for a settled period.
const PROPAGATION_ORDER: [TimeColumn; 3] =
    [TimeColumn::Period, TimeColumn::Hour, TimeColumn::Minute];

/// Default hour column, `0..=11`.
pub fn default_hour_data() -> Vec<PickerItem> {
    numeric_items(0..12)
}

/// Default minute column, `0..=59`.
pub fn default_minute_data() -> Vec<PickerItem> {
    numeric_items(0..60)
}

/// Default period column, `["AM", "PM"]`.
pub fn default_period_data() -> Vec<PickerItem> {
    label_items(["AM", "PM"])
}

/// Identifies one of the three columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeColumn {
    /// The hour column.
    Hour,
    /// The minute column.
    Minute,
    /// The AM/PM column.
    Period,
}

impl TimeColumn {
    /// All columns in display order.
    pub const ALL: [TimeColumn; 3] = [TimeColumn::Hour, TimeColumn::Minute, TimeColumn::Period];
}

/// A committed change in one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeChange {
    /// The column that changed.
    pub column: TimeColumn,
    /// The newly selected item.
    pub item: PickerItem,
    /// The newly selected index.
    pub index: usize,
}

/// Changes produced by one call; a single event moves at most three columns.
pub type TimeChanges = SmallVec<[TimeChange; 3]>;

/// Arguments for [`TimePickerController`].
#[derive(Clone, PartialEq, Setters)]
pub struct TimePickerArgs {
    /// Replaces the hour column items.
    #[setters(strip_option, into)]
    pub custom_hour_data: Option<Vec<PickerItem>>,
    /// Replaces the minute column items.
    #[setters(strip_option, into)]
    pub custom_minutes_data: Option<Vec<PickerItem>>,
    /// Replaces the period column items.
    #[setters(strip_option, into)]
    pub custom_period_data: Option<Vec<PickerItem>>,
    /// Initial time. Defaults to midnight.
    #[setters(strip_option)]
    pub time: Option<TimeOfDay>,
    /// Earliest selectable time of day.
    #[setters(skip)]
    pub min_date: Option<TimeOfDay>,
    /// Latest selectable time of day.
    #[setters(skip)]
    pub max_date: Option<TimeOfDay>,
    /// Suppresses gesture handling on all three columns.
    pub disabled: bool,
    /// Height of one row.
    pub item_height: Dp,
    /// Height of each column viewport. Defaults to five rows.
    #[setters(strip_option)]
    pub wrapper_height: Option<Dp>,
    /// Viewport background.
    pub wrapper_background: Color,
    /// Color of the highlight band borders.
    pub highlight_color: Color,
    /// Width of the highlight band borders.
    pub highlight_border_width: Dp,
    /// Label formatter for the hour column.
    #[setters(skip)]
    pub render_text_hour: Option<CallbackWith<PickerItem, String>>,
    /// Label formatter for the minute column.
    #[setters(skip)]
    pub render_text_minute: Option<CallbackWith<PickerItem, String>>,
    /// Label formatter for the period column.
    #[setters(skip)]
    pub render_text_period: Option<CallbackWith<PickerItem, String>>,
    /// Called when the hour column commits a new index.
    #[setters(skip)]
    pub on_change_hour: Option<CallbackWith<ValueChange>>,
    /// Called when the minute column commits a new index.
    #[setters(skip)]
    pub on_change_minute: Option<CallbackWith<ValueChange>>,
    /// Called when the period column commits a new index.
    #[setters(skip)]
    pub on_change_period: Option<CallbackWith<ValueChange>>,
}

impl Default for TimePickerArgs {
    fn default() -> Self {
        Self {
            custom_hour_data: None,
            custom_minutes_data: None,
            custom_period_data: None,
            time: None,
            min_date: None,
            max_date: None,
            disabled: false,
            item_height: DEFAULT_ITEM_HEIGHT,
            wrapper_height: None,
            wrapper_background: Color::WHITE,
            highlight_color: Color::from_rgb_u8(0xd8, 0xd8, 0xd8),
            highlight_border_width: Dp(1.0),
            render_text_hour: None,
            render_text_minute: None,
            render_text_period: None,
            on_change_hour: None,
            on_change_minute: None,
            on_change_period: None,
        }
    }
}

impl TimePickerArgs {
    /// Sets the earliest selectable time from any chrono time value.
    ///
    /// Only the hour and minute are used.
    pub fn min_date(mut self, min_date: impl Timelike) -> Self {
        self.min_date = Some(TimeOfDay::from_timelike(&min_date));
        self
    }

    /// Sets the latest selectable time from any chrono time value.
    pub fn max_date(mut self, max_date: impl Timelike) -> Self {
        self.max_date = Some(TimeOfDay::from_timelike(&max_date));
        self
    }

    /// Sets the hour label formatter.
    pub fn render_text_hour<F>(mut self, f: F) -> Self
    where
        F: Fn(PickerItem) -> String + Send + Sync + 'static,
    {
        self.render_text_hour = Some(CallbackWith::new(f));
        self
    }

    /// Sets the minute label formatter.
    pub fn render_text_minute<F>(mut self, f: F) -> Self
    where
        F: Fn(PickerItem) -> String + Send + Sync + 'static,
    {
        self.render_text_minute = Some(CallbackWith::new(f));
        self
    }

    /// Sets the period label formatter.
    pub fn render_text_period<F>(mut self, f: F) -> Self
    where
        F: Fn(PickerItem) -> String + Send + Sync + 'static,
    {
        self.render_text_period = Some(CallbackWith::new(f));
        self
    }

    /// Sets the hour change handler.
    pub fn on_change_hour<F>(mut self, f: F) -> Self
    where
        F: Fn(ValueChange) + Send + Sync + 'static,
    {
        self.on_change_hour = Some(CallbackWith::new(f));
        self
    }

    /// Sets the minute change handler.
    pub fn on_change_minute<F>(mut self, f: F) -> Self
    where
        F: Fn(ValueChange) + Send + Sync + 'static,
    {
        self.on_change_minute = Some(CallbackWith::new(f));
        self
    }

    /// Sets the period change handler.
    pub fn on_change_period<F>(mut self, f: F) -> Self
    where
        F: Fn(ValueChange) + Send + Sync + 'static,
    {
        self.on_change_period = Some(CallbackWith::new(f));
        self
    }

    fn column_args(
        &self,
        data_source: Vec<PickerItem>,
        selected_index: usize,
        render_text: CallbackWith<PickerItem, String>,
    ) -> ScrollPickerArgs {
        ScrollPickerArgs {
            data_source,
            selected_index,
            min_index: None,
            max_index: None,
            item_height: self.item_height,
            wrapper_height: self.wrapper_height,
            wrapper_background: self.wrapper_background,
            highlight_color: self.highlight_color,
            highlight_border_width: self.highlight_border_width,
            user_scroll_enabled: !self.disabled,
            render_text: Some(render_text),
            render_item: None,
            on_value_change: None,
        }
    }
}

/// Initial column indices for `time` given the minute column items.
///
/// The minute index is the position of the minute value, or of the last
/// smaller value when the column has no exact match.
///
/// ```
/// use wheel_components::time_picker::{TimeOfDay, default_minute_data, initial_selection};
///
/// let time: TimeOfDay = "14:05".parse().unwrap();
/// let selection = initial_selection(time, &default_minute_data());
/// assert_eq!((selection.hour, selection.minute, selection.period), (2, 5, 1));
/// ```
pub fn initial_selection(time: TimeOfDay, minutes: &[PickerItem]) -> TimeSelection {
    let minute = i64::from(time.minute());
    let minute_index = minutes
        .iter()
        .position(|item| item.as_number() == Some(minute))
        .or_else(|| {
            minutes
                .iter()
                .rposition(|item| item.as_number().is_some_and(|value| value < minute))
        })
        .unwrap_or(0);
    TimeSelection {
        hour: time.hour12() as usize,
        minute: minute_index,
        period: if time.is_pm() { PM } else { AM },
    }
}

/// Drives the hour, minute and period columns of a wheel time picker.
///
/// Every state-affecting call recomputes [`TimeBounds`] with
/// [`derive_bounds`] and pushes them into the columns; a column pushed out
/// of range re-snaps itself and the resulting change feeds the next
/// recomputation.
///
/// ## Examples
///
/// ```
/// use wheel_components::time_picker::{TimeColumn, TimePickerArgs, TimePickerController, PM};
///
/// let args = TimePickerArgs::default()
///     .time("09:30".parse().unwrap())
///     .min_date(chrono::NaiveTime::from_hms_opt(13, 30, 0).unwrap());
/// let picker = TimePickerController::new(args);
///
/// // The minimum lies in the afternoon, so the period is pushed to PM.
/// assert_eq!(picker.selection().period, PM);
/// assert_eq!(picker.column(TimeColumn::Period).selected_item().map(|i| i.to_string()),
///     Some("PM".to_owned()));
/// ```
pub struct TimePickerController {
    hour: ScrollPickerController,
    minute: ScrollPickerController,
    period: ScrollPickerController,
    selection: TimeSelection,
    bounds: TimeBounds,
    min_time: Option<TimeOfDay>,
    max_time: Option<TimeOfDay>,
    on_change_hour: Option<CallbackWith<ValueChange>>,
    on_change_minute: Option<CallbackWith<ValueChange>>,
    on_change_period: Option<CallbackWith<ValueChange>>,
}

impl TimePickerController {
    /// Creates the three columns and settles their initial bounds.
    ///
    /// Corrections made while settling do not reach the change handlers.
    pub fn new(args: TimePickerArgs) -> Self {
        let hour_data = args.custom_hour_data.clone().unwrap_or_else(default_hour_data);
        let minute_data = args
            .custom_minutes_data
            .clone()
            .unwrap_or_else(default_minute_data);
        let period_data = args
            .custom_period_data
            .clone()
            .unwrap_or_else(default_period_data);

        let selection = initial_selection(args.time.unwrap_or_default(), &minute_data);
        let two_digits = CallbackWith::new(|item: PickerItem| item.two_digit_label());
        let raw = CallbackWith::new(|item: PickerItem| item.to_string());

        let hour = ScrollPickerController::new(args.column_args(
            hour_data,
            selection.hour,
            args.render_text_hour.clone().unwrap_or_else(|| two_digits.clone()),
        ));
        let minute = ScrollPickerController::new(args.column_args(
            minute_data,
            selection.minute,
            args.render_text_minute.clone().unwrap_or(two_digits),
        ));
        let period = ScrollPickerController::new(args.column_args(
            period_data,
            selection.period,
            args.render_text_period.clone().unwrap_or(raw),
        ));

        let mut controller = Self {
            hour,
            minute,
            period,
            selection,
            bounds: TimeBounds::default(),
            min_time: args.min_date,
            max_time: args.max_date,
            on_change_hour: args.on_change_hour,
            on_change_minute: args.on_change_minute,
            on_change_period: args.on_change_period,
        };
        controller.sync_selection_from_columns();
        controller.propagate(&mut TimeChanges::new(), false);
        tracing::debug!(
            selection = ?controller.selection,
            bounds = ?controller.bounds,
            "time picker created"
        );
        controller
    }

    /// Returns the selected index of each column.
    pub fn selection(&self) -> TimeSelection {
        self.selection
    }

    /// Returns the bounds currently applied to the columns.
    pub fn bounds(&self) -> TimeBounds {
        self.bounds
    }

    /// Returns the earliest selectable time.
    pub fn min_date(&self) -> Option<TimeOfDay> {
        self.min_time
    }

    /// Returns the latest selectable time.
    pub fn max_date(&self) -> Option<TimeOfDay> {
        self.max_time
    }

    /// Returns the controller of one column.
    pub fn column(&self, column: TimeColumn) -> &ScrollPickerController {
        match column {
            TimeColumn::Hour => &self.hour,
            TimeColumn::Minute => &self.minute,
            TimeColumn::Period => &self.period,
        }
    }

    fn column_mut(&mut self, column: TimeColumn) -> &mut ScrollPickerController {
        match column {
            TimeColumn::Hour => &mut self.hour,
            TimeColumn::Minute => &mut self.minute,
            TimeColumn::Period => &mut self.period,
        }
    }

    /// Computes the layout of one column.
    pub fn layout(&self, column: TimeColumn) -> ScrollPickerLayout {
        self.column(column).layout()
    }

    /// Forwards a host scroll notification to one column.
    pub fn handle_event(
        &mut self,
        column: TimeColumn,
        event: ScrollEvent,
        now_nanos: u64,
    ) -> TimeChanges {
        let change = self.column_mut(column).handle_event(event, now_nanos);
        self.settle(change.map(|change| (column, change)))
    }

    /// Advances the timers of all columns.
    pub fn tick(&mut self, now_nanos: u64) -> TimeChanges {
        let mut changes = TimeChanges::new();
        for column in TimeColumn::ALL {
            let change = self.column_mut(column).tick(now_nanos);
            changes.extend(self.settle(change.map(|change| (column, change))));
        }
        changes
    }

    /// Scrolls one column to `index` without a gesture.
    pub fn scroll_to_target_index(&mut self, column: TimeColumn, index: usize) -> TimeChanges {
        let change = self.column_mut(column).scroll_to_target_index(index);
        self.settle(change.map(|change| (column, change)))
    }

    /// Replaces the earliest selectable time.
    pub fn set_min_date(&mut self, min_date: Option<impl Timelike>) -> TimeChanges {
        self.min_time = min_date.map(|time| TimeOfDay::from_timelike(&time));
        self.settle(None)
    }

    /// Replaces the latest selectable time.
    pub fn set_max_date(&mut self, max_date: Option<impl Timelike>) -> TimeChanges {
        self.max_time = max_date.map(|time| TimeOfDay::from_timelike(&time));
        self.settle(None)
    }

    /// Replaces the minute column items.
    pub fn set_minutes_data(&mut self, minutes: Vec<PickerItem>) -> TimeChanges {
        let change = self.minute.set_data_source(minutes);
        self.settle(change.map(|change| (TimeColumn::Minute, change)))
    }

    /// Enables or disables gestures on all columns.
    pub fn set_disabled(&mut self, disabled: bool) {
        for column in TimeColumn::ALL {
            self.column_mut(column).set_user_scroll_enabled(!disabled);
        }
    }

    /// Drains the scroll requests of all columns.
    pub fn take_scroll_requests(&mut self) -> SmallVec<[(TimeColumn, ScrollRequest); 3]> {
        TimeColumn::ALL
            .into_iter()
            .filter_map(|column| {
                self.column_mut(column)
                    .take_scroll_request()
                    .map(|request| (column, request))
            })
            .collect()
    }

    /// Composes the selected time on the 24-hour clock.
    ///
    /// Returns `None` when a column is empty or holds a non-numeric value.
    pub fn time_of_day(&self) -> Option<TimeOfDay> {
        let hour = self.hour.selected_item()?.as_number()?;
        let minute = self.minute.selected_item()?.as_number()?;
        let hour = u32::try_from(hour.rem_euclid(12)).ok()? + 12 * self.selection.period as u32;
        TimeOfDay::new(hour, u32::try_from(minute).ok()?).ok()
    }

    /// Stops all columns.
    pub fn unmount(&mut self) {
        for column in TimeColumn::ALL {
            self.column_mut(column).unmount();
        }
    }

    fn settle(&mut self, change: Option<(TimeColumn, ValueChange)>) -> TimeChanges {
        let mut changes = TimeChanges::new();
        if let Some((column, change)) = change {
            changes.push(self.record(column, change, true));
        }
        self.propagate(&mut changes, true);
        changes
    }

    fn propagate(&mut self, changes: &mut TimeChanges, notify: bool) {
        'passes: for _ in 0..MAX_PROPAGATION_PASSES {
            let minutes = &self.minute.args().data_source;
            let bounds = derive_bounds(self.selection, self.min_time, self.max_time, minutes);
            if bounds != self.bounds {
                tracing::debug!(?bounds, "time picker bounds changed");
            }
            self.bounds = bounds;

            for column in PROPAGATION_ORDER {
                let column_bounds = match column {
                    TimeColumn::Hour => bounds.hour,
                    TimeColumn::Minute => bounds.minute,
                    TimeColumn::Period => bounds.period,
                };
                let change = self
                    .column_mut(column)
                    .set_index_bounds(column_bounds.min, column_bounds.max);
                if let Some(change) = change {
                    changes.push(self.record(column, change, notify));
                    // The move invalidates the bounds of the remaining columns.
                    continue 'passes;
                }
            }
            return;
        }
        tracing::warn!(
            selection = ?self.selection,
            "time picker bounds did not settle"
        );
    }

    fn record(&mut self, column: TimeColumn, change: ValueChange, notify: bool) -> TimeChange {
        let callback = match column {
            TimeColumn::Hour => {
                self.selection.hour = change.index;
                &self.on_change_hour
            }
            TimeColumn::Minute => {
                self.selection.minute = change.index;
                &self.on_change_minute
            }
            TimeColumn::Period => {
                self.selection.period = change.index;
                &self.on_change_period
            }
        };
        if notify && let Some(callback) = callback {
            callback.call(change.clone());
        }
        TimeChange {
            column,
            item: change.item,
            index: change.index,
        }
    }

    fn sync_selection_from_columns(&mut self) {
        self.selection = TimeSelection {
            hour: self.hour.selected_index().unwrap_or(0),
            minute: self.minute.selected_index().unwrap_or(0),
            period: self.period.selected_index().unwrap_or(0),
        };
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use chrono::NaiveTime;

    use super::*;

    const MS: u64 = 1_000_000;

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
    }

    fn time(s: &str) -> TimeOfDay {
        s.parse().unwrap_or_default()
    }

    fn drag_to(
        picker: &mut TimePickerController,
        column: TimeColumn,
        offset: f32,
        now: u64,
    ) -> TimeChanges {
        picker.handle_event(column, ScrollEvent::DragBegin, now);
        picker.handle_event(column, ScrollEvent::DragEnd { offset }, now);
        picker.tick(now + 50 * MS)
    }

    #[test]
    fn test_initial_selection_from_time() {
        let picker = TimePickerController::new(TimePickerArgs::default().time(time("14:05")));
        assert_eq!(
            picker.selection(),
            TimeSelection {
                hour: 2,
                minute: 5,
                period: PM
            }
        );
        assert_eq!(picker.time_of_day(), Some(time("14:05")));
    }

    #[test]
    fn test_initial_minute_snaps_to_data() {
        let args = TimePickerArgs::default()
            .time(time("10:20"))
            .custom_minutes_data(numeric_items((0..60).step_by(15)));
        let picker = TimePickerController::new(args);
        assert_eq!(picker.selection().minute, 1);
    }

    #[test]
    fn test_default_labels() {
        let picker = TimePickerController::new(TimePickerArgs::default().time(time("19:23")));
        let hour = picker.layout(TimeColumn::Hour);
        assert_eq!(hour.rows[7].label, "07");
        assert_eq!(hour.selected_row().map(|row| row.label.as_str()), Some("07"));
        let minute = picker.layout(TimeColumn::Minute);
        assert_eq!(minute.selected_row().map(|row| row.label.as_str()), Some("23"));
        let period = picker.layout(TimeColumn::Period);
        assert_eq!(period.rows[0].label, "AM");
        assert_eq!(period.selected_row().map(|row| row.label.as_str()), Some("PM"));
    }

    #[test]
    fn test_custom_labels_override_defaults() {
        let args = TimePickerArgs::default()
            .render_text_hour(|item: PickerItem| format!("{item}h"))
            .render_text_period(|item: PickerItem| item.to_string().to_lowercase());
        let picker = TimePickerController::new(args);
        assert_eq!(picker.layout(TimeColumn::Hour).rows[3].label, "3h");
        assert_eq!(picker.layout(TimeColumn::Minute).rows[3].label, "03");
        assert_eq!(picker.layout(TimeColumn::Period).rows[1].label, "pm");
    }

    #[test]
    fn test_layout_uses_time_picker_defaults() {
        let picker = TimePickerController::new(TimePickerArgs::default());
        let layout = picker.layout(TimeColumn::Minute);
        assert_eq!(layout.item_height, wheel_ui::Px::new(60));
        assert_eq!(layout.wrapper_height, wheel_ui::Px::new(300));
        assert_eq!(layout.background, Color::WHITE);
    }

    #[test]
    fn test_min_date_in_afternoon_moves_selection() {
        let args = TimePickerArgs::default()
            .time(time("09:00"))
            .min_date(at(13, 30));
        let picker = TimePickerController::new(args);
        assert_eq!(picker.bounds().period.min, Some(PM));
        assert_eq!(picker.bounds().hour.min, Some(1));
        assert_eq!(picker.selection().period, PM);
        assert_eq!(picker.selection().hour, 9);
    }

    #[test]
    fn test_min_date_boundary_hour_limits_minutes() {
        let args = TimePickerArgs::default()
            .time(time("13:10"))
            .min_date(at(13, 30));
        let picker = TimePickerController::new(args);
        assert_eq!(picker.bounds().minute.min, Some(30));
        assert_eq!(picker.time_of_day(), Some(time("13:30")));
    }

    #[test]
    fn test_max_noon_forces_am() {
        let args = TimePickerArgs::default()
            .time(time("15:00"))
            .max_date(at(12, 0));
        let picker = TimePickerController::new(args);
        assert_eq!(picker.bounds().period.max, Some(AM));
        assert_eq!(picker.bounds().hour.max, None);
        assert_eq!(picker.bounds().minute.max, None);
        assert_eq!(picker.time_of_day(), Some(time("03:00")));
    }

    #[test]
    fn test_max_after_noon_moves_period_before_hour() {
        for max in [at(12, 0), at(12, 30)] {
            let args = TimePickerArgs::default().time(time("15:00")).max_date(max);
            let picker = TimePickerController::new(args);
            assert_eq!(picker.time_of_day(), Some(time("03:00")), "max {max}");
        }

        let mut picker = TimePickerController::new(TimePickerArgs::default().time(time("15:00")));
        let changes = picker.set_max_date(Some(at(12, 30)));
        assert_eq!(
            changes
                .iter()
                .map(|c| (c.column, c.index))
                .collect::<Vec<_>>(),
            vec![(TimeColumn::Period, AM)]
        );
        assert_eq!(picker.time_of_day(), Some(time("03:00")));
    }

    #[test]
    fn test_min_at_last_minute_of_day() {
        let args = TimePickerArgs::default()
            .time(time("22:00"))
            .min_date(at(23, 59));
        let picker = TimePickerController::new(args);
        assert_eq!(picker.bounds().hour.min, Some(11));
        assert_eq!(picker.time_of_day(), Some(time("23:59")));
    }

    #[test]
    fn test_min_eleven_at_last_minute_forces_pm() {
        let args = TimePickerArgs::default()
            .time(time("08:00"))
            .min_date(at(11, 59));
        let picker = TimePickerController::new(args);
        assert_eq!(picker.bounds().period.min, Some(PM));
        assert_eq!(picker.selection().period, PM);
    }

    #[test]
    fn test_hour_change_reaches_callback_and_bounds() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let hours = Arc::clone(&seen);
        let minutes = Arc::clone(&seen);
        let args = TimePickerArgs::default()
            .time(time("09:50"))
            .min_date(at(10, 15))
            .on_change_hour(move |change| {
                if let Ok(mut seen) = hours.lock() {
                    seen.push(("hour", change.index));
                }
            })
            .on_change_minute(move |change| {
                if let Ok(mut seen) = minutes.lock() {
                    seen.push(("minute", change.index));
                }
            });
        let mut picker = TimePickerController::new(args);
        // Settling at creation stays silent.
        assert_eq!(picker.selection().hour, 10);
        assert_eq!(picker.selection().minute, 50);
        assert!(seen.lock().map(|seen| seen.is_empty()).unwrap_or(false));

        // Leaving the boundary hour lifts the minute limit.
        let changes = drag_to(&mut picker, TimeColumn::Hour, 11.0 * 60.0, 0);
        assert_eq!(changes.len(), 1);
        assert_eq!(picker.bounds().minute.min, None);

        let changes = drag_to(&mut picker, TimeColumn::Minute, 5.0 * 60.0, 100 * MS);
        assert_eq!(changes.iter().map(|c| c.index).collect::<Vec<_>>(), vec![5]);

        let changes = drag_to(&mut picker, TimeColumn::Hour, 10.0 * 60.0, 200 * MS);
        assert_eq!(
            changes
                .iter()
                .map(|c| (c.column, c.index))
                .collect::<Vec<_>>(),
            vec![(TimeColumn::Hour, 10), (TimeColumn::Minute, 15)]
        );
        assert_eq!(picker.time_of_day(), Some(time("10:15")));
        assert_eq!(
            seen.lock().map(|seen| seen.clone()).unwrap_or_default(),
            vec![("hour", 11), ("minute", 5), ("hour", 10), ("minute", 15)]
        );
    }

    #[test]
    fn test_changing_min_date_resnaps() {
        let mut picker = TimePickerController::new(TimePickerArgs::default().time(time("08:00")));
        let changes = picker.set_min_date(Some(at(9, 0)));
        assert_eq!(
            changes
                .iter()
                .map(|c| (c.column, c.index))
                .collect::<Vec<_>>(),
            vec![(TimeColumn::Hour, 9)]
        );
        assert_eq!(picker.min_date(), Some(time("09:00")));

        let changes = picker.set_min_date(None::<NaiveTime>);
        assert!(changes.is_empty());
        assert_eq!(picker.bounds(), TimeBounds::default());
    }

    #[test]
    fn test_changing_max_date_resnaps_period() {
        let mut picker = TimePickerController::new(TimePickerArgs::default().time(time("20:10")));
        let changes = picker.set_max_date(Some(at(11, 30)));
        assert_eq!(changes.first().map(|c| (c.column, c.index)), Some((TimeColumn::Period, AM)));
        assert_eq!(picker.time_of_day(), Some(time("08:10")));
        assert_eq!(picker.max_date(), Some(time("11:30")));
    }

    #[test]
    fn test_minutes_data_change_recomputes_bounds() {
        let args = TimePickerArgs::default()
            .time(time("09:40"))
            .min_date(at(9, 50));
        let mut picker = TimePickerController::new(args);
        assert_eq!(picker.bounds().hour.min, Some(9));
        assert_eq!(picker.time_of_day(), Some(time("09:50")));

        // With quarter-hour minutes 09:50 is past the last value.
        picker.set_minutes_data(numeric_items((0..60).step_by(15)));
        assert_eq!(picker.bounds().hour.min, Some(10));
        assert_eq!(picker.selection().hour, 10);
    }

    #[test]
    fn test_scroll_to_target_index_is_clamped() {
        let args = TimePickerArgs::default().max_date(at(18, 0));
        let mut picker = TimePickerController::new(args);
        picker.scroll_to_target_index(TimeColumn::Period, PM);
        let changes = picker.scroll_to_target_index(TimeColumn::Hour, 9);
        assert_eq!(changes.last().map(|c| c.index), Some(5));
        assert!(picker.scroll_to_target_index(TimeColumn::Hour, 9).is_empty());
    }

    #[test]
    fn test_disabled_ignores_gestures() {
        let mut picker =
            TimePickerController::new(TimePickerArgs::default().disabled(true));
        assert!(drag_to(&mut picker, TimeColumn::Hour, 180.0, 0).is_empty());
        picker.set_disabled(false);
        assert_eq!(drag_to(&mut picker, TimeColumn::Hour, 180.0, 100 * MS).len(), 1);
    }

    #[test]
    fn test_mount_scroll_requests() {
        let mut picker = TimePickerController::new(TimePickerArgs::default().time(time("14:05")));
        picker.tick(0);
        let requests = picker.take_scroll_requests();
        assert_eq!(
            requests
                .iter()
                .map(|(column, request)| (*column, request.offset))
                .collect::<Vec<_>>(),
            vec![
                (TimeColumn::Hour, 120.0),
                (TimeColumn::Minute, 300.0),
                (TimeColumn::Period, 60.0)
            ]
        );
        assert!(picker.take_scroll_requests().is_empty());
    }

    #[test]
    fn test_unmount_stops_columns() {
        let mut picker = TimePickerController::new(TimePickerArgs::default());
        picker.handle_event(TimeColumn::Minute, ScrollEvent::DragBegin, 0);
        picker.handle_event(TimeColumn::Minute, ScrollEvent::DragEnd { offset: 600.0 }, 0);
        picker.unmount();
        assert!(picker.tick(100 * MS).is_empty());
        assert!(TimeColumn::ALL
            .into_iter()
            .all(|column| !picker.column(column).is_mounted()));
    }
}
