pub mod types;
pub mod greedy;
pub mod random;

pub use types::{Interval, Schedule, SelectedInterval, Selection};
pub use greedy::{select, select_schedule};
pub use random::random_schedule;
