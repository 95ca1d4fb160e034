//! Server-rendered HTML for the analysis page.

use classify::{AnalysisError, AnalysisReport, GroupVerdict};
use html_escape::{encode_double_quoted_attribute, encode_text};
use verdict::{legend, Color};

const TITLE: &str = "Fake News Detector";

pub fn form_page(text: &str) -> String {
    page(&form(text))
}

pub fn warning_page(text: &str, message: &str) -> String {
    page(&format!(
        "{}<div class=\"warning\">{}</div>",
        form(text),
        encode_text(message)
    ))
}

pub fn error_page(text: &str, err: &AnalysisError) -> String {
    let message = match err {
        AnalysisError::Status { status, body } => format!("API Error: {} - {}", status, body),
        AnalysisError::Unreachable(e) => format!("Error contacting analysis service: {}", e),
        other => format!("Error: {}", other),
    };
    page(&format!(
        "{}<div class=\"error\">{}</div>",
        form(text),
        encode_text(&message)
    ))
}

pub fn report_page(text: &str, report: &AnalysisReport) -> String {
    let mut body = form(text);
    body.push_str("<h2>Analysis Results:</h2>\n");
    for group in &report.groups {
        body.push_str(&group_block(group, report.group_size));
    }
    body.push_str(&legend_block());
    page(&body)
}

/// CSS color for a verdict; yellow text is unreadable on white, so it renders orange
pub fn css_color(color: Color) -> &'static str {
    match color {
        Color::Green => "green",
        Color::Red => "red",
        Color::Yellow => "orange",
        Color::Gray => "gray",
    }
}

fn group_block(group: &GroupVerdict, group_size: usize) -> String {
    let unit = if group_size == 1 { "Sentence" } else { "Group" };
    let verdict = &group.verdict;
    format!(
        concat!(
            "<div class=\"result\">\n",
            "<p><strong>{unit} {number}:</strong> {text}</p>\n",
            "<p><span style=\"color:{color};font-weight:bold\">{label}</span> ",
            "<span style=\"color:gray\">({confidence})</span></p>\n",
            "<div class=\"bar\" title=\"{position:.1}\">",
            "<div class=\"marker\" style=\"left:{position:.1}%;background:{color}\"></div></div>\n",
            "<div class=\"bar-scale\"><span>Fake</span><span>Uncertain</span><span>Real</span></div>\n",
            "</div>\n<hr>\n",
        ),
        unit = unit,
        number = group.index + 1,
        text = encode_text(&group.text),
        color = css_color(verdict.color),
        label = verdict.display_label,
        confidence = verdict.confidence_text(),
        position = verdict.bar_position,
    )
}

fn legend_block() -> String {
    let mut html = String::from("<div class=\"legend\"><h3>Legend</h3>\n<ul>\n");
    for entry in legend() {
        let swatches: String = entry
            .colors
            .iter()
            .map(|&c| format!("<span class=\"swatch\" style=\"background:{}\"></span>", css_color(c)))
            .collect();
        html.push_str(&format!(
            "<li>{} <strong>{}</strong>: {}</li>\n",
            swatches,
            entry.display_label,
            encode_text(entry.meaning)
        ));
    }
    html.push_str("</ul></div>\n");
    html
}

fn form(text: &str) -> String {
    format!(
        concat!(
            "<h1>{title}</h1>\n",
            "<p>Enter a news snippet below. Sentences are grouped and analyzed together.</p>\n",
            "<form method=\"post\" action=\"/analyze\">\n",
            "<label for=\"text\">News Snippet</label>\n",
            "<textarea id=\"text\" name=\"text\" rows=\"10\" placeholder=\"{placeholder}\">{text}</textarea>\n",
            "<button type=\"submit\">Analyze</button>\n",
            "</form>\n",
        ),
        title = TITLE,
        placeholder = encode_double_quoted_attribute("Paste a news snippet..."),
        text = encode_text(text),
    )
}

fn page(body: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n",
            "<title>{title}</title>\n<style>{style}</style>\n</head>\n<body>\n{body}</body>\n</html>\n",
        ),
        title = TITLE,
        style = STYLE,
        body = body,
    )
}

const STYLE: &str = "\
body{font-family:sans-serif;max-width:48rem;margin:2rem auto;padding:0 1rem}\
textarea{width:100%}\
.warning{background:#fff4ce;padding:.75rem;border-radius:4px}\
.error{background:#fde7e9;padding:.75rem;border-radius:4px}\
.bar{position:relative;height:10px;border-radius:5px;\
background:linear-gradient(to right,red,gray,green)}\
.marker{position:absolute;top:-3px;width:6px;height:16px;margin-left:-3px;border:1px solid #333}\
.bar-scale{display:flex;justify-content:space-between;font-size:.75rem;color:gray}\
.swatch{display:inline-block;width:.8rem;height:.8rem;margin-right:2px;border-radius:2px}";

#[cfg(test)]
mod tests {
    use super::*;
    use verdict::{DisplayVerdict, Label};

    fn report() -> AnalysisReport {
        AnalysisReport {
            sentence_count: 4,
            group_size: 3,
            groups: vec![
                GroupVerdict {
                    index: 0,
                    text: "Aliens <b>landed</b>. Cows fly. Sky green.".into(),
                    sentence_count: 3,
                    verdict: DisplayVerdict::new(Label::Fake, 96.0),
                },
                GroupVerdict {
                    index: 1,
                    text: "Water is wet.".into(),
                    sentence_count: 1,
                    verdict: DisplayVerdict::new(Label::Real, 60.0),
                },
            ],
        }
    }

    #[test]
    fn test_report_page_renders_each_group() {
        let html = report_page("input", &report());

        assert!(html.contains("<strong>Group 1:</strong>"));
        assert!(html.contains("<strong>Group 2:</strong>"));
        assert!(html.contains("color:red;font-weight:bold\">Likely Fake</span>"));
        assert!(html.contains("color:orange;font-weight:bold\">Needs Verification</span>"));
        assert!(html.contains("(Confidence: 96.0%)"));
        assert!(html.contains("left:48.0%"));
        assert!(html.contains("left:80.0%"));
        assert!(html.contains("<h3>Legend</h3>"));
    }

    #[test]
    fn test_legend_lists_each_display_label() {
        let html = report_page("", &report());

        assert!(html.contains("<strong>Likely True</strong>"));
        assert!(html.contains("<strong>Likely Fake</strong>"));
        assert!(html.contains("<strong>Needs Verification</strong>"));
        assert!(!html.contains("Low Confidence"));
    }

    #[test]
    fn test_out_of_range_confidence_shown_as_reported() {
        let mut report = report();
        report.groups[0].verdict = DisplayVerdict::new(Label::Real, 130.0);

        let html = report_page("", &report);
        assert!(html.contains("(Confidence: 130.0% (out of range, mapped as 100.0%))"));
        assert!(html.contains("left:100.0%"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let html = report_page("<script>alert(1)</script>", &report());

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Aliens &lt;b&gt;landed&lt;/b&gt;."));
    }

    #[test]
    fn test_single_sentence_groups_say_sentence() {
        let mut report = report();
        report.group_size = 1;
        let html = report_page("", &report);
        assert!(html.contains("<strong>Sentence 1:</strong>"));
    }

    #[test]
    fn test_error_page_shows_status_and_body() {
        let err = AnalysisError::Status {
            status: 502,
            body: "upstream down".into(),
        };
        let html = error_page("text", &err);
        assert!(html.contains("API Error: 502 - upstream down"));
    }

    #[test]
    fn test_warning_page() {
        let html = warning_page("", "Please enter some text to analyze.");
        assert!(html.contains("class=\"warning\">Please enter some text to analyze.</div>"));
    }
}
