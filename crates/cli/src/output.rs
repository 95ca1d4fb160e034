use classify::{AnalysisReport, GroupVerdict};
use colored::Colorize;
use verdict::{legend, Color};

const BAR_WIDTH: usize = 20;

pub struct Printer {
    color: bool,
}

impl Printer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn report(&self, report: &AnalysisReport, show_legend: bool) -> String {
        let mut out = String::from("Analysis Results:\n\n");
        for group in &report.groups {
            out.push_str(&self.group(group, report.group_size));
        }
        if show_legend {
            out.push_str(&self.legend());
        }
        out
    }

    fn group(&self, group: &GroupVerdict, group_size: usize) -> String {
        let unit = if group_size == 1 { "Sentence" } else { "Group" };
        let verdict = &group.verdict;
        format!(
            "{} {}\n{} ({})\n{}\n---\n",
            self.bold(&format!("{} {}:", unit, group.index + 1)),
            group.text,
            self.paint(verdict.display_label.as_str(), verdict.color),
            verdict.confidence_text(),
            bar(verdict.bar_position),
        )
    }

    fn legend(&self) -> String {
        let mut out = String::from("\nLegend:\n");
        for entry in legend() {
            let colors: Vec<String> = entry
                .colors
                .iter()
                .map(|&c| self.paint(c.as_str(), c))
                .collect();
            out.push_str(&format!(
                "  {} [{}]: {}\n",
                self.bold(entry.display_label.as_str()),
                colors.join("/"),
                entry.meaning
            ));
        }
        out
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if !self.color {
            return text.to_string();
        }
        let styled = match color {
            Color::Green => text.green(),
            Color::Red => text.red(),
            Color::Yellow => text.yellow(),
            Color::Gray => text.bright_black(),
        };
        styled.bold().to_string()
    }

    fn bold(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}

/// `FAKE [----------|----------] REAL` with the marker at `position` (0..=100)
pub fn bar(position: f64) -> String {
    let slot = ((position.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    let track: String = (0..=BAR_WIDTH)
        .map(|i| if i == slot { '|' } else { '-' })
        .collect();
    format!("FAKE [{}] REAL", track)
}
