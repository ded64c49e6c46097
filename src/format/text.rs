use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::{
    domain::{idea::Idea, tags::join_tags},
    format::time::{format_display_date, format_display_time},
};

/// One listing row: position, short id, date, status and title, cut to `max_width`.
pub(crate) fn format_idea_line(position: usize, idea: &Idea, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    let prefix = format!(
        "{:>3}  {}  {}  {}  ",
        position,
        idea.id.short(),
        format_display_date(&idea.date_created),
        pad_to_width(idea.status.label(), STATUS_COLUMN_WIDTH),
    );
    let prefix_width = UnicodeWidthStr::width(prefix.as_str());
    if max_width <= prefix_width {
        return fit_to_width(prefix.trim_end(), max_width);
    }

    // Titles may carry line breaks and tabs; the listing keeps one row per idea.
    let title = idea.title.split_whitespace().collect::<Vec<_>>().join(" ");
    format!("{}{}", prefix, fit_to_width(&title, max_width - prefix_width))
}

pub(crate) fn format_idea_detail(idea: &Idea) -> String {
    let mut lines = vec![
        idea.title.clone(),
        format!("Status: {}", idea.status.label()),
    ];
    if !idea.description.is_empty() {
        lines.push(String::new());
        lines.push("Description:".to_string());
        lines.push(idea.description.clone());
    }
    if !idea.tags.is_empty() {
        lines.push(String::new());
        lines.push(format!("Tags: {}", join_tags(&idea.tags)));
    }
    lines.push(String::new());
    lines.push(format!("Created: {}", format_display_time(&idea.date_created)));
    lines.push(format!("Id: {}", idea.id));
    lines.join("\n")
}

const STATUS_COLUMN_WIDTH: usize = 13;

fn pad_to_width(value: &str, width: usize) -> String {
    let padding = width.saturating_sub(UnicodeWidthStr::width(value));
    format!("{}{}", value, " ".repeat(padding))
}

const ELLIPSIS: &str = "...";

fn fit_to_width(value: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(value) <= max_width {
        return value.to_string();
    }
    if max_width <= ELLIPSIS.len() {
        return ".".repeat(max_width);
    }

    let budget = max_width - ELLIPSIS.len();
    let mut used = 0;
    let kept: String = value
        .chars()
        .take_while(|ch| {
            used += ch.width().unwrap_or(1);
            used <= budget
        })
        .collect();
    format!("{kept}{ELLIPSIS}")
}
