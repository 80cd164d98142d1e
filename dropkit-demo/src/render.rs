//! Plain-text rendering of a dropdown view.
//!
//! Each line is a list of spans; a span that carries a target reports that
//! element id when clicked.

use dropkit::widgets::dropdown::{DropdownView, FooterView, ListRow, PanelBody, PanelView};
use unicode_width::UnicodeWidthStr;

const MIN_WIDTH: usize = 24;

/// A run of text, optionally clickable.
#[derive(Debug, Clone)]
pub struct Span {
    pub text: String,
    pub target: Option<String>,
}

impl Span {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            target: None,
        }
    }

    fn target(text: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            target: Some(target.into()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    fn single(span: Span) -> Self {
        Self { spans: vec![span] }
    }

    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Element id under display column `col`.
    pub fn target_at(&self, col: usize) -> Option<&str> {
        let mut start = 0;
        for span in &self.spans {
            let end = start + span.text.width();
            if col >= start && col < end {
                return span.target.as_deref();
            }
            start = end;
        }
        None
    }
}

/// Pad `text` with spaces to `width` display columns.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

/// Lay the view out as lines of text.
pub fn render(view: &DropdownView) -> Vec<Line> {
    let width = view
        .panel
        .as_ref()
        .and_then(|p| p.width)
        .map_or(MIN_WIDTH, usize::from)
        .max(MIN_WIDTH);

    let trigger = &view.trigger;
    let arrow = if trigger.open { "^" } else { "v" };
    let mut spans = vec![Span::target(
        format!("[ {} {} ]", pad(&trigger.label, width - 6), arrow),
        trigger.id.clone(),
    )];
    if let Some(clear_id) = &trigger.clear_id {
        spans.push(Span::plain(" "));
        spans.push(Span::target("(x)", clear_id.clone()));
    }
    let mut lines = vec![Line { spans }];

    if let Some(panel) = &view.panel {
        lines.extend(render_panel(panel, width));
    }
    lines
}

fn render_panel(panel: &PanelView, width: usize) -> Vec<Line> {
    let mut lines = Vec::new();

    if let Some(search) = &panel.search {
        let text = if search.text.is_empty() {
            search.placeholder.clone()
        } else {
            search.text.clone()
        };
        lines.push(Line::single(Span::target(
            format!("  / {}", pad(&text, width - 4)),
            search.id.clone(),
        )));
    }

    match &panel.body {
        PanelBody::Loading => lines.push(Line::single(Span::plain("  Loading..."))),
        PanelBody::Error(message) => {
            lines.push(Line::single(Span::plain(format!("  ! {}", message))))
        }
        PanelBody::Empty(message) => {
            lines.push(Line::single(Span::plain(format!("  {}", message))))
        }
        PanelBody::Rows(rows) => {
            let visible = panel.max_height.map_or(rows.len(), usize::from).max(1);
            let start = scroll_start(rows, visible);
            let end = (start + visible).min(rows.len());
            if start > 0 {
                lines.push(Line::single(Span::plain(format!("  ... {} above", start))));
            }
            for row in &rows[start..end] {
                lines.push(render_row(row, width));
            }
            if rows.len() > end {
                lines.push(Line::single(Span::plain(format!(
                    "  ... {} more",
                    rows.len() - end
                ))));
            }
        }
    }

    if let Some(footer) = &panel.footer {
        lines.extend(render_footer(footer));
    }
    lines
}

/// First row of a `visible`-row window that keeps the focused option in view.
fn scroll_start(rows: &[ListRow], visible: usize) -> usize {
    let focused = rows
        .iter()
        .position(|row| matches!(row, ListRow::Option(option) if option.focused));
    match focused {
        Some(row) if row >= visible => row + 1 - visible,
        _ => 0,
    }
}

fn render_row(row: &ListRow, width: usize) -> Line {
    match row {
        ListRow::GroupHeader { id, label } => {
            Line::single(Span::target(format!("  -- {} --", label), id.clone()))
        }
        ListRow::Option(option) => {
            let cursor = if option.focused { ">" } else { " " };
            let mark = match (option.selected, option.disabled) {
                (_, true) => "-",
                (true, false) => "*",
                (false, false) => " ",
            };
            let mut label = option.label.clone();
            if let Some(description) = &option.description {
                label = format!("{} - {}", label, description);
            }
            Line::single(Span::target(
                format!("{} {} {}", cursor, mark, pad(&label, width - 4)),
                option.id.clone(),
            ))
        }
    }
}

fn render_footer(footer: &FooterView) -> Vec<Line> {
    let count = match footer.max_selections {
        Some(max) => format!("  {}/{} selected", footer.selected_count, max),
        None => format!("  {} selected", footer.selected_count),
    };

    let mut spans = vec![Span::plain("  ")];
    for action in &footer.actions {
        let text = if action.enabled {
            format!("[{}]", action.label)
        } else {
            format!("({})", action.label)
        };
        spans.push(Span::target(text, action.id.clone()));
        spans.push(Span::plain(" "));
    }

    vec![Line::single(Span::plain(count)), Line { spans }]
}
