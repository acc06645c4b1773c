use crate::ui::{Tone, paint};

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN: usize = 4;
const BAR_WIDTH: usize = 40;

/// Render an aligned table for string rows.
#[must_use]
pub fn render_rows(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
                .max(MIN_COLUMN)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| format_cell(&truncate_text(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.chars().count());

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let truncated = truncate_text(value, *width);
                let numeric = looks_numeric(&truncated);
                let padded = format_cell(&truncated, *width, numeric);
                match tone_of(&truncated) {
                    Some(tone) if options.color => paint(&padded, tone, true),
                    _ => padded,
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    });

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line);
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

/// Horizontal bar chart: label, count, and a bar scaled to the largest count.
#[must_use]
pub fn render_bars(bars: &[(String, usize)]) -> String {
    let label_width = bars
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    let count_width = bars
        .iter()
        .map(|(_, count)| count.to_string().len())
        .max()
        .unwrap_or(1);
    let peak = bars.iter().map(|(_, count)| *count).max().unwrap_or(0);

    bars.iter()
        .map(|(label, count)| {
            format!(
                "{}  {}  {}",
                format_cell(label, label_width, false),
                format_cell(&count.to_string(), count_width, true),
                "#".repeat(bar_length(*count, peak)),
            )
            .trim_end()
            .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn bar_length(count: usize, peak: usize) -> usize {
    if peak == 0 || count == 0 {
        return 0;
    }
    (count * BAR_WIDTH).div_ceil(peak).min(BAR_WIDTH)
}

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].chars().count().max(MIN_COLUMN))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = widest else {
            break;
        };

        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | '%'))
}

fn format_cell(value: &str, width: usize, numeric: bool) -> String {
    let pad = width.saturating_sub(value.chars().count());
    if numeric {
        format!("{}{}", " ".repeat(pad), value)
    } else {
        format!("{}{}", value, " ".repeat(pad))
    }
}

fn tone_of(value: &str) -> Option<Tone> {
    match value.trim() {
        "true" => Some(Tone::Good),
        "false" => Some(Tone::Bad),
        _ => None,
    }
}
