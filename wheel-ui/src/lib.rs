//! Shared primitives for wheel picker components.
//!
//! `wheel-ui` holds what the components in `wheel-components` build on:
//!
//! - [`Dp`] and [`Px`] units with a global density scale factor
//! - [`Color`] for highlight and background styling
//! - [`CallbackWith`] handles that keep `*Args` structs comparable
//! - [`Timer`], an owned single-shot timer polled from frame ticks
//! - [`logging::init_tracing`] for hosts that want a ready subscriber
//!
//! Components are headless: they turn scroll notifications and frame ticks
//! into selection state, scroll requests and a computed layout. The host scroll
//! view draws the result.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod color;
pub mod dp;
pub mod logging;
pub mod prop;
pub mod px;
pub mod timer;

pub use crate::{
    color::Color,
    dp::{Dp, SCALE_FACTOR, set_scale_factor},
    prop::CallbackWith,
    px::Px,
    timer::Timer,
};
