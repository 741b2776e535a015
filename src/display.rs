use crate::chart::Axis;
use crate::schedule::{Interval, Schedule, Selection};

const BAR_COLUMNS: usize = 60;

/// Formats the selection the way the success report lists it:
/// `[(1, 2), (3, 4)]`
pub fn format_selection(selection: &Selection) -> String {
    let items: Vec<String> = selection
        .pairs()
        .iter()
        .map(|(s, e)| format!("({}, {})", s, e))
        .collect();
    format!("[{}]", items.join(", "))
}

/// "Selected 4 activities:"
pub fn format_summary(selection: &Selection) -> String {
    format!("Selected {} activities:", selection.len())
}

/// One text line per interval with a bar scaled to the chart axis, e.g.
/// `A1  [   1,    2)  selected      |  ##   ...|`
pub fn timeline_lines(schedule: &Schedule, selection: &Selection) -> Vec<String> {
    let axis = Axis::for_schedule(schedule);
    let mask = selection.mask(schedule.len());
    let scale = |v: i64| -> usize {
        let clamped = v.clamp(axis.min, axis.min + axis.span() as i64);
        (((clamped - axis.min) as f64 / axis.span()) * BAR_COLUMNS as f64).round() as usize
    };

    schedule
        .intervals
        .iter()
        .enumerate()
        .map(|(index, interval)| {
            let from = scale(interval.start.min(interval.end));
            let to = scale(interval.start.max(interval.end));
            let mut bar = vec![' '; BAR_COLUMNS];
            let mark = if mask[index] { '#' } else { '-' };
            for cell in bar.iter_mut().take(to.min(BAR_COLUMNS)).skip(from) {
                *cell = mark;
            }
            let bar: String = bar.into_iter().collect();
            format!(
                "{:<4} [{:>4}, {:>4})  {:<12} |{}|",
                Interval::label(index),
                interval.start,
                interval.end,
                if mask[index] { "selected" } else { "not selected" },
                bar
            )
        })
        .collect()
}

/// Prints the success report followed by the text timeline
pub fn print_selection(schedule: &Schedule, selection: &Selection) {
    println!("\n=== Activity Selection ===");
    println!("{}", format_summary(selection));
    println!("{}", format_selection(selection));

    if schedule.is_empty() {
        return;
    }

    let axis = Axis::for_schedule(schedule);
    println!("\nTimeline ({} to {}):", axis.min, axis.max);
    for line in timeline_lines(schedule, selection) {
        println!("  {}", line);
    }
}
