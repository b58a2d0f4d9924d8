//! Box drawing into a text buffer.

pub const BOX_WIDTH: usize = 74;

/// Box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(out: &mut String, title: &str) {
    if title.is_empty() {
        out.push_str(&format!("┌{}┐\n", "─".repeat(BOX_WIDTH - 2)));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = BOX_WIDTH - 2 - title_part.chars().count();
        out.push_str(&format!("┌{}{}┐\n", title_part, "─".repeat(remaining)));
    }
}

/// Box content line: │ content                                        │
pub fn box_line(out: &mut String, content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let padding = inner_width.saturating_sub(content.chars().count());
    out.push_str(&format!("│ {}{} │\n", content, " ".repeat(padding)));
}

/// Centered box content line: │          content          │
pub fn box_line_center(out: &mut String, content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let total_padding = inner_width.saturating_sub(content.chars().count());
    let left_pad = total_padding / 2;
    let right_pad = total_padding - left_pad;
    out.push_str(&format!(
        "│ {}{}{} │\n",
        " ".repeat(left_pad),
        content,
        " ".repeat(right_pad)
    ));
}

/// Box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom(out: &mut String) {
    out.push_str(&format!("└{}┘\n", "─".repeat(BOX_WIDTH - 2)));
}

/// Help option with flag and description, wrapping the description if needed.
pub fn box_opt(out: &mut String, flag: &str, desc: &str) {
    let inner_width = BOX_WIDTH - 4;
    let flag_col = 24;
    let desc_col = inner_width - flag_col;

    let flag_padded = format!("{:<width$}", flag, width = flag_col);

    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();
    for word in desc.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= desc_col {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }

    let first = lines.first().map(String::as_str).unwrap_or("");
    out.push_str(&format!(
        "│ {}{}{} │\n",
        flag_padded,
        first,
        " ".repeat(desc_col.saturating_sub(first.len()))
    ));

    let indent = " ".repeat(flag_col);
    for line in lines.iter().skip(1) {
        let padding = desc_col.saturating_sub(line.len());
        out.push_str(&format!("│ {}{}{} │\n", indent, line, " ".repeat(padding)));
    }
}
