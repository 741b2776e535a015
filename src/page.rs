use std::fmt;

use crate::chart::render_timeline;
use crate::config::PageConfig;
use crate::display::{format_selection, format_summary};
use crate::error::InputError;
use crate::form::Outcome;

const TEMPLATE: &str = include_str!("../templates/index.html");

/// What the result area of the page shows
pub enum ResultView<'a> {
    Empty,
    Error(&'a InputError),
    Success(&'a Outcome),
}

/// Renders the form page, echoing the given field values back into the inputs
pub fn render_page(
    page: &PageConfig,
    start_value: &str,
    end_value: &str,
    result: ResultView<'_>,
) -> Result<String, fmt::Error> {
    let result_html = match result {
        ResultView::Empty => String::new(),
        ResultView::Error(err) => format!(
            r#"<div class="alert error">{}</div>"#,
            escape_html(&err.to_string())
        ),
        ResultView::Success(outcome) => format!(
            "<div class=\"alert success\">{}</div>\n<pre class=\"selection\">{}</pre>\n<figure class=\"chart\">{}</figure>",
            escape_html(&format_summary(&outcome.selection)),
            escape_html(&format_selection(&outcome.selection)),
            render_timeline(page, &outcome.schedule, &outcome.selection)?
        ),
    };

    // user-provided values go last so their text is never re-scanned for placeholders
    Ok(TEMPLATE
        .replace("{{page_title}}", page.page_title)
        .replace("{{heading}}", page.heading)
        .replace("{{description}}", page.description)
        .replace("{{start_label}}", page.start_label)
        .replace("{{end_label}}", page.end_label)
        .replace("{{submit_label}}", &escape_html(page.submit_label))
        .replace("{{result}}", &result_html)
        .replace("{{start_value}}", &escape_html(start_value))
        .replace("{{end_value}}", &escape_html(end_value)))
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PAGE;
    use crate::form::{handle_submission, FormSubmissionRequest};

    #[test]
    fn initial_page_has_defaults_and_no_result() {
        let html = render_page(&PAGE, PAGE.default_starts, PAGE.default_ends, ResultView::Empty).unwrap();
        assert!(html.contains("<title>Activity Selection (Greedy)</title>"));
        assert!(html.contains(r#"value="1,3,0,5,8,5""#));
        assert!(html.contains(r#"value="2,4,6,7,9,9""#));
        assert!(!html.contains("alert"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn error_banner() {
        let err = InputError::LengthMismatch { starts: 2, ends: 1 };
        let html = render_page(&PAGE, "1,2", "1", ResultView::Error(&err)).unwrap();
        assert!(html.contains("Start and End time lists must be the same length."));
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn success_shows_report_and_chart() {
        let outcome = handle_submission(&FormSubmissionRequest {
            start_input: "1,3,0,5,8,5".to_string(),
            end_input: "2,4,6,7,9,9".to_string(),
        })
        .unwrap();
        let html = render_page(&PAGE, "1,3,0,5,8,5", "2,4,6,7,9,9", ResultView::Success(&outcome)).unwrap();
        assert!(html.contains("Selected 4 activities:"));
        assert!(html.contains("[(1, 2), (3, 4), (5, 7), (8, 9)]"));
        assert!(html.contains("<svg"));
    }

    #[test]
    fn echoed_values_are_escaped() {
        let err = InputError::Parse {
            field: crate::error::Field::Start,
            token: "\"><script>".to_string(),
        };
        let html = render_page(&PAGE, "\"><script>{{result}}", "1", ResultView::Error(&err)).unwrap();
        assert!(html.contains("&quot;&gt;&lt;script&gt;{{result}}"));
        assert!(!html.contains("\"><script>"));
    }

    #[test]
    fn escape_html_basics() {
        assert_eq!(escape_html("a<b & 'c'"), "a&lt;b &amp; &#39;c&#39;");
    }
}
