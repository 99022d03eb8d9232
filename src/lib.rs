//! Lesson calendar for the driving-school admin panel.
//!
//! [`calendar`] is the pure month-grid engine. [`feed`] and [`config`] are the
//! host-side adapters the desktop binary uses to feed it.

pub mod calendar;
pub mod config;
pub mod feed;
