//! Greedy activity selection: pick the largest set of non-overlapping
//! intervals from parallel start/end lists and draw them on a timeline.
//!
//! The selector lives in [`schedule`]; [`form`] and [`parser`] turn user input
//! into schedules, [`chart`] and [`display`] render results, [`web`]
//! serves the form page and JSON API, and [`cli`] is the command line.

pub mod chart;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod form;
pub mod page;
pub mod parser;
pub mod schedule;
pub mod web;

pub use error::{InputError, LoadError};
pub use schedule::{select, select_schedule, Interval, Schedule, Selection};
