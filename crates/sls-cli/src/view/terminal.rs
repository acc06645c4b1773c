//! [`ReportView`] that writes to the terminal.
//!
//! Table format prints each element as it is reported. JSON and raw formats
//! collect everything into one document printed by [`TerminalView::finish`],
//! so a page's output stays machine readable.

use serde::Serialize;
use serde_json::{Value, json};
use sls_report::Histogram;

use super::ReportView;
use crate::cli::OutputFormat;
use crate::output::{self, table};
use crate::pages::PageOutcome;
use crate::ui::{Tone, paint};

pub struct TerminalView {
    format: OutputFormat,
    quiet: bool,
    color: bool,
    events: Vec<Value>,
}

impl TerminalView {
    #[must_use]
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self {
            format,
            quiet,
            color: output::table_options().color,
            events: Vec::new(),
        }
    }

    const fn streaming(&self) -> bool {
        matches!(self.format, OutputFormat::Table)
    }

    fn push(&mut self, kind: &str, body: Value) {
        let mut event = json!({ "kind": kind });
        if let (Value::Object(event), Value::Object(body)) = (&mut event, body) {
            event.extend(body);
        }
        self.events.push(event);
    }

    fn message(&mut self, kind: &str, tone: Option<Tone>, text: &str) {
        if self.streaming() {
            let line = tone.map_or_else(|| text.to_string(), |tone| paint(text, tone, self.color));
            if tone == Some(Tone::Bad) {
                eprintln!("{line}");
            } else {
                println!("{line}");
            }
        } else {
            self.push(kind, json!({ "text": text }));
        }
    }

    fn print_section(&self, title: &str, body: &str) {
        println!("\n{title}\n{body}");
    }

    /// Flush collected output for JSON and raw formats.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be serialized.
    pub fn finish<P: Serialize + ?Sized>(
        self,
        outcome: PageOutcome,
        preview: Option<&P>,
    ) -> anyhow::Result<()> {
        if self.streaming() {
            if let Some(preview) = preview {
                println!();
                output::output(preview, self.format)?;
            }
            return Ok(());
        }
        let mut document = json!({
            "outcome": outcome,
            "events": self.events,
        });
        if let (Some(preview), Value::Object(map)) = (preview, &mut document) {
            map.insert("preview".to_string(), serde_json::to_value(preview)?);
        }
        output::output(&document, self.format)
    }
}

impl ReportView for TerminalView {
    fn header(&mut self, title: &str) {
        if !self.streaming() {
            self.push("header", json!({ "title": title }));
        } else if !self.quiet {
            println!("{title}\n{}", "=".repeat(title.chars().count()));
        }
    }

    fn success(&mut self, message: &str) {
        self.message("success", Some(Tone::Good), message);
    }

    fn info(&mut self, message: &str) {
        self.message("info", None, message);
    }

    fn warning(&mut self, message: &str) {
        self.message("warning", Some(Tone::Caution), message);
    }

    fn error(&mut self, message: &str) {
        self.message("error", Some(Tone::Bad), message);
    }

    fn table<T: Serialize + ?Sized>(&mut self, title: &str, rows: &T) {
        if !self.streaming() {
            match serde_json::to_value(rows) {
                Ok(rows) => self.push("table", json!({ "title": title, "rows": rows })),
                Err(error) => self.error(&format!("Error: {error}")),
            }
            return;
        }
        match output::render(rows, self.format) {
            Ok(body) => self.print_section(title, &body),
            Err(error) => self.error(&format!("Error: {error}")),
        }
    }

    fn metrics(&mut self, title: &str, lines: &[(&'static str, String)]) {
        if !self.streaming() {
            let values: serde_json::Map<String, Value> = lines
                .iter()
                .map(|(label, value)| ((*label).to_string(), Value::String(value.clone())))
                .collect();
            self.push("metrics", json!({ "title": title, "values": values }));
            return;
        }
        let width = lines
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0);
        let body = lines
            .iter()
            .map(|(label, value)| format!("{label:<width$}  {value}"))
            .collect::<Vec<_>>()
            .join("\n");
        self.print_section(title, &body);
    }

    fn histogram(&mut self, histogram: &Histogram) {
        if !self.streaming() {
            self.push("histogram", json!({ "histogram": histogram }));
            return;
        }
        let bars: Vec<(String, usize)> = histogram
            .bins
            .iter()
            .map(|bin| (bin.label.clone(), bin.count))
            .collect();
        let mut body = table::render_bars(&bars);
        if histogram.out_of_range > 0 {
            body.push_str(&format!("\n(out of range: {})", histogram.out_of_range));
        }
        self.print_section(histogram.title, &body);
    }

    fn bar(&mut self, title: &str, bars: &[(&'static str, usize)]) {
        if !self.streaming() {
            let bars: serde_json::Map<String, Value> = bars
                .iter()
                .map(|(label, count)| ((*label).to_string(), Value::from(*count)))
                .collect();
            self.push("bar", json!({ "title": title, "bars": bars }));
            return;
        }
        let bars: Vec<(String, usize)> = bars
            .iter()
            .map(|(label, count)| ((*label).to_string(), *count))
            .collect();
        self.print_section(title, &table::render_bars(&bars));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn json_mode_collects_events_in_order() {
        let mut view = TerminalView::new(OutputFormat::Json, false);
        view.header("Dashboard");
        view.warning("careful");
        view.table("Rows", &vec![json!({"a": 1})]);
        view.bar("Actions & Networking", &[("Action Step", 2)]);

        let kinds: Vec<&str> = view
            .events
            .iter()
            .filter_map(|e| e["kind"].as_str())
            .collect();
        assert_eq!(kinds, vec!["header", "warning", "table", "bar"]);
        assert_eq!(view.events[1]["text"], "careful");
        assert_eq!(view.events[2]["rows"][0]["a"], 1);
        assert_eq!(view.events[3]["bars"]["Action Step"], 2);
    }

    #[test]
    fn metrics_keep_labels() {
        let mut view = TerminalView::new(OutputFormat::Raw, false);
        view.metrics("Session KPIs", &[("Average NPS", String::from("7.00 / 10"))]);
        assert_eq!(view.events[0]["values"]["Average NPS"], "7.00 / 10");
    }

    #[test]
    fn unserializable_rows_report_an_error_event() {
        let mut rows = std::collections::BTreeMap::new();
        rows.insert((1, 2), "pair keys cannot become JSON object keys");

        let mut view = TerminalView::new(OutputFormat::Json, false);
        view.table("Rows", &rows);

        assert_eq!(view.events.len(), 1);
        assert_eq!(view.events[0]["kind"], "error");
        assert!(
            view.events[0]["text"]
                .as_str()
                .is_some_and(|text| text.starts_with("Error: key must be a string"))
        );
    }
}
