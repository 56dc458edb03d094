//! Scroll-wheel selector for a single column of discrete items.
//!
//! ## Usage
//!
//! Drive it from a host scroll view: forward drag/momentum notifications,
//! call `tick` once per frame, and apply the scroll requests it issues.
pub(crate) mod layout;

use std::time::Duration;

use derive_setters::Setters;
use wheel_ui::{CallbackWith, Color, Dp, Timer};

pub use self::layout::{HighlightBand, PickerRow, ScrollPickerLayout};
use crate::item::PickerItem;

/// Delay between a drag end and its settle check, leaving room for a
/// momentum phase to take over.
pub const SETTLE_DELAY: Duration = Duration::from_millis(50);

const DEFAULT_ITEM_HEIGHT: Dp = Dp(30.0);
const DEFAULT_VISIBLE_ROWS: f64 = 5.0;

/// Scroll notifications reported by the host scroll view.
///
/// Offsets are the content offset along the vertical axis in physical
/// pixels, `0.0` meaning the first row sits under the highlight band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollEvent {
    /// The user put a finger down and started dragging.
    DragBegin,
    /// The user lifted the finger.
    DragEnd {
        /// Content offset at release.
        offset: f32,
    },
    /// Native inertial scrolling started.
    MomentumBegin,
    /// Inertial scrolling (or an animated programmatic scroll) came to rest.
    MomentumEnd {
        /// Content offset at rest.
        offset: f32,
    },
    /// The content offset changed.
    Scrolled {
        /// Current content offset.
        offset: f32,
    },
}

/// A scroll the host should perform on its scroll view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    /// Target content offset in physical pixels.
    pub offset: f32,
    /// Whether the host should animate toward the target.
    pub animated: bool,
}

/// A committed selection change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueChange {
    /// The item at the new index.
    pub item: PickerItem,
    /// The new selected index.
    pub index: usize,
}

/// Input handed to a `render_item` label override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemLabelInput {
    /// The item being rendered.
    pub item: PickerItem,
    /// Its index in the data source.
    pub index: usize,
    /// Whether it is the selected row.
    pub is_selected: bool,
}

/// Arguments for [`ScrollPickerController`].
#[derive(Clone, PartialEq, Setters)]
pub struct ScrollPickerArgs {
    /// Items in display order.
    #[setters(into)]
    pub data_source: Vec<PickerItem>,
    /// Requested selected index; clamped into the allowed range.
    pub selected_index: usize,
    /// Smallest selectable index, inclusive.
    #[setters(strip_option)]
    pub min_index: Option<usize>,
    /// Largest selectable index, inclusive.
    #[setters(strip_option)]
    pub max_index: Option<usize>,
    /// Height of one row.
    pub item_height: Dp,
    /// Height of the viewport. Defaults to five rows.
    #[setters(strip_option)]
    pub wrapper_height: Option<Dp>,
    /// Viewport background.
    pub wrapper_background: Color,
    /// Color of the highlight band borders.
    pub highlight_color: Color,
    /// Width of the highlight band borders.
    pub highlight_border_width: Dp,
    /// Whether drag and momentum notifications are handled.
    pub user_scroll_enabled: bool,
    /// Optional label formatter for each item.
    #[setters(skip)]
    pub render_text: Option<CallbackWith<PickerItem, String>>,
    /// Optional row label override that also sees the index and selection.
    ///
    /// Takes precedence over `render_text`.
    #[setters(skip)]
    pub render_item: Option<CallbackWith<ItemLabelInput, String>>,
    /// Called once per committed index change.
    #[setters(skip)]
    pub on_value_change: Option<CallbackWith<ValueChange>>,
}

impl Default for ScrollPickerArgs {
    fn default() -> Self {
        Self {
            data_source: Vec::new(),
            selected_index: 0,
            min_index: None,
            max_index: None,
            item_height: DEFAULT_ITEM_HEIGHT,
            wrapper_height: None,
            wrapper_background: Color::from_rgb_u8(0xfa, 0xfa, 0xfa),
            highlight_color: Color::from_rgb_u8(0x33, 0x33, 0x33),
            highlight_border_width: Dp::from_pixels_f32(1.0),
            user_scroll_enabled: true,
            render_text: None,
            render_item: None,
            on_value_change: None,
        }
    }
}

impl ScrollPickerArgs {
    /// Creates args for the given data source.
    pub fn new(data_source: impl Into<Vec<PickerItem>>) -> Self {
        Self::default().data_source(data_source)
    }

    /// Sets the label formatter.
    pub fn render_text<F>(mut self, f: F) -> Self
    where
        F: Fn(PickerItem) -> String + Send + Sync + 'static,
    {
        self.render_text = Some(CallbackWith::new(f));
        self
    }

    /// Sets the row label override.
    pub fn render_item<F>(mut self, f: F) -> Self
    where
        F: Fn(ItemLabelInput) -> String + Send + Sync + 'static,
    {
        self.render_item = Some(CallbackWith::new(f));
        self
    }

    /// Sets the value-change handler.
    pub fn on_value_change<F>(mut self, f: F) -> Self
    where
        F: Fn(ValueChange) + Send + Sync + 'static,
    {
        self.on_value_change = Some(CallbackWith::new(f));
        self
    }

    fn resolved_wrapper_height(&self) -> Dp {
        match self.wrapper_height {
            Some(height) if height.0 > 0.0 => height,
            _ => self.item_height.scale(DEFAULT_VISIBLE_ROWS),
        }
    }
}

/// Selection state and gesture handling for one picker column.
///
/// The controller never moves the viewport itself: it issues
/// [`ScrollRequest`]s through [`take_scroll_request`](Self::take_scroll_request)
/// and learns the resulting offset from later [`ScrollEvent`]s.
///
/// ## Examples
///
/// ```
/// use wheel_components::item::numeric_items;
/// use wheel_components::scroll_picker::{ScrollEvent, ScrollPickerArgs, ScrollPickerController};
/// use wheel_ui::Dp;
///
/// let args = ScrollPickerArgs::new(numeric_items(0..10))
///     .item_height(Dp(30.0))
///     .max_index(6);
/// let mut picker = ScrollPickerController::new(args);
///
/// picker.handle_event(ScrollEvent::DragBegin, 0);
/// picker.handle_event(ScrollEvent::DragEnd { offset: 250.0 }, 0);
/// // No momentum followed within the settle delay.
/// let change = picker.tick(60_000_000);
///
/// assert_eq!(change.map(|c| c.index), Some(6));
/// assert_eq!(picker.take_scroll_request().map(|r| r.offset), Some(180.0));
/// ```
#[derive(Clone)]
pub struct ScrollPickerController {
    args: ScrollPickerArgs,
    selected_index: usize,
    offset: f32,
    is_scroll_to: bool,
    drag_started: bool,
    momentum_started: bool,
    settle_timer: Timer<f32>,
    mount_timer: Timer<()>,
    pending_scroll: Option<ScrollRequest>,
    mounted: bool,
}

impl ScrollPickerController {
    /// Creates a controller and schedules the initial scroll for the next
    /// tick.
    pub fn new(args: ScrollPickerArgs) -> Self {
        if args.data_source.is_empty() {
            tracing::warn!("scroll picker created with an empty data source");
        }
        let mut controller = Self {
            selected_index: 0,
            offset: 0.0,
            is_scroll_to: false,
            drag_started: false,
            momentum_started: false,
            settle_timer: Timer::new(),
            mount_timer: Timer::new(),
            pending_scroll: None,
            mounted: true,
            args,
        };
        controller.selected_index = controller
            .clamp_index(controller.args.selected_index)
            .unwrap_or(0);
        controller.mount_timer.arm(0, Duration::ZERO, ());
        controller
    }

    /// Returns the args the controller currently runs with.
    pub fn args(&self) -> &ScrollPickerArgs {
        &self.args
    }

    /// Returns the committed index, or `None` for an empty data source.
    pub fn selected_index(&self) -> Option<usize> {
        (!self.args.data_source.is_empty()).then_some(self.selected_index)
    }

    /// Returns the committed item.
    pub fn selected_item(&self) -> Option<&PickerItem> {
        self.selected_index()
            .and_then(|index| self.args.data_source.get(index))
    }

    /// Returns the last known content offset.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Returns whether the controller still handles events.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Returns whether a drag-end settle check is pending.
    pub fn has_pending_settle(&self) -> bool {
        self.settle_timer.is_armed()
    }

    /// Returns the inclusive range of selectable indices.
    ///
    /// Bounds outside the data source are pulled into it; when the lower
    /// bound exceeds the upper one the lower bound wins.
    pub fn index_range(&self) -> Option<(usize, usize)> {
        let last = self.args.data_source.len().checked_sub(1)?;
        let lo = self.args.min_index.unwrap_or(0).min(last);
        let hi = self.args.max_index.unwrap_or(last).min(last).max(lo);
        Some((lo, hi))
    }

    /// Clamps an index into [`index_range`](Self::index_range).
    pub fn clamp_index(&self, index: usize) -> Option<usize> {
        self.index_range().map(|(lo, hi)| index.clamp(lo, hi))
    }

    /// Content offset that puts `index` under the highlight band.
    pub fn offset_for_index(&self, index: usize) -> f32 {
        index as f32 * self.item_height_px()
    }

    fn item_height_px(&self) -> f32 {
        let height = self.args.item_height.to_pixels_f32();
        if height.is_finite() && height > 0.0 {
            height
        } else {
            DEFAULT_ITEM_HEIGHT.to_pixels_f32()
        }
    }

    /// Takes the scroll the host should perform next.
    pub fn take_scroll_request(&mut self) -> Option<ScrollRequest> {
        self.pending_scroll.take()
    }

    /// Handles a notification from the host scroll view.
    ///
    /// Returns the committed change when the event settles the column on a
    /// new index.
    pub fn handle_event(&mut self, event: ScrollEvent, now_nanos: u64) -> Option<ValueChange> {
        if !self.mounted {
            return None;
        }
        if let ScrollEvent::Scrolled { offset } = event {
            self.offset = offset;
            return None;
        }
        if !self.args.user_scroll_enabled {
            tracing::trace!(?event, "scroll picker disabled, ignoring gesture");
            return None;
        }

        tracing::trace!(?event, "scroll picker event");
        match event {
            ScrollEvent::DragBegin => {
                self.drag_started = true;
                self.is_scroll_to = false;
                self.settle_timer.cancel();
                None
            }
            ScrollEvent::DragEnd { offset } => {
                self.drag_started = false;
                self.offset = offset;
                self.settle_timer.arm(now_nanos, SETTLE_DELAY, offset);
                None
            }
            ScrollEvent::MomentumBegin => {
                self.momentum_started = true;
                self.settle_timer.cancel();
                None
            }
            ScrollEvent::MomentumEnd { offset } => {
                self.momentum_started = false;
                self.offset = offset;
                if self.is_scroll_to || self.drag_started {
                    return None;
                }
                self.scroll_fix(offset)
            }
            ScrollEvent::Scrolled { .. } => None,
        }
    }

    /// Advances timers to `now_nanos`.
    ///
    /// Fires the initial positioning scroll on the first call and any due
    /// drag-end settle check.
    pub fn tick(&mut self, now_nanos: u64) -> Option<ValueChange> {
        if !self.mounted {
            return None;
        }
        if self.mount_timer.poll(now_nanos).is_some() && !self.args.data_source.is_empty() {
            let offset = self.offset_for_index(self.selected_index);
            self.request_scroll(offset, false);
        }
        let offset = self.settle_timer.poll(now_nanos)?;
        if self.momentum_started {
            return None;
        }
        self.scroll_fix(offset)
    }

    /// Selects `index` (clamped) and scrolls the viewport to it without a
    /// gesture.
    ///
    /// The change handler runs only when the committed index changes.
    pub fn scroll_to_target_index(&mut self, index: usize) -> Option<ValueChange> {
        if !self.mounted {
            return None;
        }
        let target = self.clamp_index(index)?;
        self.settle_timer.cancel();
        self.scroll_into_place(target, true);
        self.commit(target)
    }

    /// Replaces the selectable range and re-snaps the selection into it.
    pub fn set_index_bounds(
        &mut self,
        min_index: Option<usize>,
        max_index: Option<usize>,
    ) -> Option<ValueChange> {
        if self.args.min_index == min_index && self.args.max_index == max_index {
            return None;
        }
        self.args.min_index = min_index;
        self.args.max_index = max_index;
        self.reconcile(self.selected_index)
    }

    /// Replaces the data source and re-snaps the selection into it.
    pub fn set_data_source(&mut self, data_source: Vec<PickerItem>) -> Option<ValueChange> {
        if self.args.data_source == data_source {
            return None;
        }
        if data_source.is_empty() {
            tracing::warn!("scroll picker data source replaced with an empty one");
        }
        self.args.data_source = data_source;
        self.reconcile(self.selected_index)
    }

    /// Requests a new selected index the way a prop change would.
    pub fn set_selected_index(&mut self, index: usize) -> Option<ValueChange> {
        self.args.selected_index = index;
        self.reconcile(index)
    }

    /// Changes the row height, keeping the selection under the band.
    pub fn set_item_height(&mut self, item_height: Dp) -> Option<ValueChange> {
        if self.args.item_height == item_height {
            return None;
        }
        self.args.item_height = item_height;
        self.reconcile(self.selected_index)
    }

    /// Enables or disables gesture handling.
    pub fn set_user_scroll_enabled(&mut self, enabled: bool) {
        self.args.user_scroll_enabled = enabled;
        if !enabled {
            self.settle_timer.cancel();
        }
    }

    /// Replaces all args.
    ///
    /// When the data source, bounds, row height or requested index changed,
    /// the requested index is clamped and scrolled to.
    pub fn update_args(&mut self, args: ScrollPickerArgs) -> Option<ValueChange> {
        let needs_reconcile = self.args.data_source != args.data_source
            || self.args.min_index != args.min_index
            || self.args.max_index != args.max_index
            || self.args.item_height != args.item_height
            || self.args.selected_index != args.selected_index;
        let requested = args.selected_index;
        let enabled = args.user_scroll_enabled;
        self.args = args;
        self.set_user_scroll_enabled(enabled);
        if needs_reconcile {
            self.reconcile(requested)
        } else {
            None
        }
    }

    /// Stops all pending work; later events and ticks are ignored.
    pub fn unmount(&mut self) {
        self.settle_timer.cancel();
        self.mount_timer.cancel();
        self.pending_scroll = None;
        self.mounted = false;
    }

    /// Computes the viewport layout for the current state.
    pub fn layout(&self) -> ScrollPickerLayout {
        ScrollPickerLayout::compute(&self.args, self.selected_index())
    }

    fn reconcile(&mut self, requested: usize) -> Option<ValueChange> {
        if !self.mounted {
            return None;
        }
        let Some(target) = self.clamp_index(requested) else {
            self.selected_index = 0;
            return None;
        };
        self.scroll_into_place(target, true);
        self.commit(target)
    }

    fn scroll_fix(&mut self, offset: f32) -> Option<ValueChange> {
        let item_height = self.item_height_px();
        let raw = (offset / item_height).round();
        let raw = if raw.is_finite() && raw > 0.0 {
            raw as usize
        } else {
            0
        };
        let Some(index) = self.clamp_index(raw) else {
            tracing::debug!("settle on an empty scroll picker");
            return None;
        };

        tracing::debug!(offset, raw, index, "scroll picker settled");
        self.scroll_into_place(index, true);
        self.commit(index)
    }

    fn scroll_into_place(&mut self, index: usize, animated: bool) {
        let target = self.offset_for_index(index);
        if (target - self.offset).abs() >= f32::EPSILON {
            self.request_scroll(target, animated);
        }
    }

    fn request_scroll(&mut self, offset: f32, animated: bool) {
        // Hosts may report the end of this scroll as a momentum end.
        self.is_scroll_to = true;
        self.offset = offset;
        self.pending_scroll = Some(ScrollRequest { offset, animated });
    }

    fn commit(&mut self, index: usize) -> Option<ValueChange> {
        if index == self.selected_index {
            return None;
        }
        let item = self.args.data_source.get(index)?.clone();
        self.selected_index = index;
        let change = ValueChange { item, index };
        tracing::debug!(index, item = %change.item, "scroll picker committed");
        if let Some(on_value_change) = &self.args.on_value_change {
            on_value_change.call(change.clone());
        }
        Some(change)
    }
}
