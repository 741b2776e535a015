use std::fmt::{self, Write};

use crate::config::PageConfig;
use crate::schedule::{Interval, Schedule, Selection};

pub const SELECTED_COLOR: &str = "green";
pub const REJECTED_COLOR: &str = "red";

const WIDTH: f64 = 800.0;
const ROW_HEIGHT: f64 = 36.0;
const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_TOP: f64 = 48.0;
const MARGIN_BOTTOM: f64 = 56.0;
const MIN_PLOT_HEIGHT: f64 = 120.0;

/// Horizontal axis of the timeline: always starts at 0 and ends two units
/// after the latest end time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Axis {
    pub min: i64,
    pub max: i64,
}

impl Axis {
    pub fn for_schedule(schedule: &Schedule) -> Self {
        let max_end = schedule.max_end().unwrap_or(0);
        Self {
            min: 0,
            max: max_end.saturating_add(2),
        }
    }

    /// Width of the axis, never less than one unit so scaling stays finite
    /// when every end time is negative.
    pub fn span(&self) -> f64 {
        ((self.max as f64) - (self.min as f64)).max(1.0)
    }

    /// Tick positions at a 1/2/5 x 10^k step, at most about ten of them
    pub fn ticks(&self) -> Vec<i64> {
        let span = self.span();
        let mut step = 1.0f64;
        'outer: loop {
            for factor in [1.0, 2.0, 5.0] {
                if span / (step * factor) <= 10.0 {
                    step *= factor;
                    break 'outer;
                }
            }
            step *= 10.0;
        }
        let step = step as i64;
        let upper = self.min as f64 + span;
        let mut ticks = Vec::new();
        let mut t = self.min;
        while (t as f64) <= upper {
            ticks.push(t);
            match t.checked_add(step) {
                Some(next) => t = next,
                None => break,
            }
        }
        ticks
    }
}

struct Frame {
    axis: Axis,
    plot_width: f64,
    plot_height: f64,
}

impl Frame {
    fn x(&self, value: i64) -> f64 {
        MARGIN_LEFT + (value as f64 - self.axis.min as f64) / self.axis.span() * self.plot_width
    }

    /// Row 0 sits at the bottom of the plot
    fn row_center(&self, index: usize, rows: usize) -> f64 {
        MARGIN_TOP + self.plot_height - (index as f64 + 0.5) * self.plot_height / rows.max(1) as f64
    }

    fn row_height(&self, rows: usize) -> f64 {
        self.plot_height / rows.max(1) as f64
    }
}

/// Draws one bar per interval of `schedule`, green when the interval's
/// position is in `selection` and red otherwise, and returns the SVG markup.
pub fn render_timeline(page: &PageConfig, schedule: &Schedule, selection: &Selection) -> Result<String, fmt::Error> {
    let mut svg = String::new();
    write_timeline(&mut svg, page, schedule, selection)?;
    Ok(svg)
}

/// Streams the timeline SVG into `svg`
pub fn write_timeline<W: Write>(
    svg: &mut W,
    page: &PageConfig,
    schedule: &Schedule,
    selection: &Selection,
) -> fmt::Result {
    let rows = schedule.len();
    let plot_height = (rows as f64 * ROW_HEIGHT).max(MIN_PLOT_HEIGHT);
    let frame = Frame {
        axis: Axis::for_schedule(schedule),
        plot_width: WIDTH - MARGIN_LEFT - MARGIN_RIGHT,
        plot_height,
    };
    let height = MARGIN_TOP + plot_height + MARGIN_BOTTOM;
    let mask = selection.mask(rows);
    let plot_bottom = MARGIN_TOP + frame.plot_height;
    let plot_right = MARGIN_LEFT + frame.plot_width;

    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="timeline" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif" font-size="12">"#,
        w = WIDTH,
        h = height
    )?;
    writeln!(
        svg,
        r#"<defs><clipPath id="plot-area"><rect x="{}" y="{}" width="{}" height="{}"/></clipPath></defs>"#,
        MARGIN_LEFT, MARGIN_TOP, frame.plot_width, frame.plot_height
    )?;
    writeln!(
        svg,
        r#"<text x="{}" y="24" text-anchor="middle" font-size="16" font-weight="bold">{}</text>"#,
        WIDTH / 2.0,
        page.chart_title
    )?;

    // grid and ticks
    for tick in frame.axis.ticks() {
        let x = frame.x(tick);
        writeln!(
            svg,
            r##"<line class="grid" x1="{x:.1}" y1="{top}" x2="{x:.1}" y2="{bottom}" stroke="#999" stroke-dasharray="4 3" stroke-opacity="0.6"/>"##,
            top = MARGIN_TOP,
            bottom = plot_bottom
        )?;
        writeln!(
            svg,
            r#"<text x="{x:.1}" y="{}" text-anchor="middle">{tick}</text>"#,
            plot_bottom + 16.0
        )?;
    }

    // bars
    writeln!(svg, r#"<g clip-path="url(#plot-area)">"#)?;
    for (index, interval) in schedule.intervals.iter().enumerate() {
        let selected = mask.get(index).copied().unwrap_or(false);
        write_bar(svg, &frame, index, rows, interval, selected)?;
    }
    writeln!(svg, "</g>")?;

    // row labels
    for index in 0..rows {
        writeln!(
            svg,
            r#"<text x="{}" y="{:.1}" text-anchor="end" dominant-baseline="middle">{}</text>"#,
            MARGIN_LEFT - 8.0,
            frame.row_center(index, rows),
            Interval::label(index)
        )?;
    }

    // frame, axis label, legend
    writeln!(
        svg,
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="black"/>"#,
        MARGIN_LEFT, MARGIN_TOP, frame.plot_width, frame.plot_height
    )?;
    writeln!(
        svg,
        r#"<text x="{}" y="{}" text-anchor="middle">{}</text>"#,
        MARGIN_LEFT + frame.plot_width / 2.0,
        plot_bottom + 40.0,
        page.axis_label
    )?;
    write_legend(svg, plot_right)?;

    write!(svg, "</svg>")
}

fn write_bar<W: Write>(
    svg: &mut W,
    frame: &Frame,
    index: usize,
    rows: usize,
    interval: &Interval,
    selected: bool,
) -> fmt::Result {
    // Inverted intervals are drawn between their two endpoints
    let left = interval.start.min(interval.end);
    let right = interval.start.max(interval.end);
    let x = frame.x(left);
    let width = frame.x(right) - x;
    let bar_height = frame.row_height(rows) * 0.8;
    let center = frame.row_center(index, rows);
    let color = if selected { SELECTED_COLOR } else { REJECTED_COLOR };
    let label = Interval::label(index);

    writeln!(
        svg,
        r#"<rect class="bar {state}" data-label="{label}" x="{x:.1}" y="{y:.1}" width="{width:.1}" height="{bar_height:.1}" fill="{color}"><title>{label}: {start} to {end}</title></rect>"#,
        state = if selected { "selected" } else { "rejected" },
        y = center - bar_height / 2.0,
        start = interval.start,
        end = interval.end,
    )?;
    writeln!(
        svg,
        r#"<text x="{:.1}" y="{center:.1}" text-anchor="middle" dominant-baseline="middle" fill="white" font-weight="bold">{label}</text>"#,
        x + width / 2.0
    )
}

fn write_legend<W: Write>(svg: &mut W, plot_right: f64) -> fmt::Result {
    let x = plot_right - 130.0;
    let y = MARGIN_TOP + 8.0;
    writeln!(
        svg,
        r##"<g class="legend"><rect x="{x}" y="{y}" width="122" height="44" fill="white" fill-opacity="0.85" stroke="#ccc"/>"##
    )?;
    for (i, (color, label)) in [(SELECTED_COLOR, "Selected"), (REJECTED_COLOR, "Not Selected")]
        .iter()
        .enumerate()
    {
        let row_y = y + 8.0 + i as f64 * 18.0;
        writeln!(
            svg,
            r#"<rect x="{}" y="{row_y}" width="14" height="12" fill="{color}"/><text x="{}" y="{}">{label}</text>"#,
            x + 8.0,
            x + 28.0,
            row_y + 10.0
        )?;
    }
    writeln!(svg, "</g>")
}
