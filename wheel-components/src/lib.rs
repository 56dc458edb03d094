//! Wheel picker components.
//!
//! # Usage
//!
//! Components are headless controllers. The host scroll view forwards its
//! drag and momentum notifications, calls `tick` every frame, performs the
//! scroll requests the controller issues, and draws the computed layout.
//!
//! # Example
//!
//! ```
//! use wheel_components::{
//!     scroll_picker::ScrollEvent,
//!     time_picker::{TimeColumn, TimePickerArgs, TimePickerController},
//! };
//!
//! let mut picker = TimePickerController::new(
//!     TimePickerArgs::default()
//!         .time("08:15".parse().unwrap())
//!         .on_change_minute(|change| println!("minute -> {}", change.item)),
//! );
//!
//! // First frame: position every column on its initial row.
//! picker.tick(0);
//! for (column, request) in picker.take_scroll_requests() {
//!     println!("scroll {column:?} to {}", request.offset);
//! }
//!
//! // The user flicks the minute column; the native momentum comes to rest.
//! picker.handle_event(TimeColumn::Minute, ScrollEvent::DragBegin, 1_000_000);
//! picker.handle_event(TimeColumn::Minute, ScrollEvent::DragEnd { offset: 1_200.0 }, 20_000_000);
//! picker.handle_event(TimeColumn::Minute, ScrollEvent::MomentumBegin, 30_000_000);
//! picker.handle_event(
//!     TimeColumn::Minute,
//!     ScrollEvent::MomentumEnd { offset: 1_790.0 },
//!     400_000_000,
//! );
//!
//! assert_eq!(picker.time_of_day().map(|t| t.to_string()), Some("08:30".to_owned()));
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod item;
pub mod scroll_picker;
pub mod time_picker;
