use unicode_width::UnicodeWidthStr;

/// Prints a titled two-column report with right-padded labels.
pub fn print_report(title: &str, rows: Vec<(String, String)>) {
    if rows.is_empty() {
        return;
    }

    let label_width = rows
        .iter()
        .map(|(label, _)| UnicodeWidthStr::width(label.as_str()))
        .max()
        .unwrap_or(0);

    let rule_width = rows
        .iter()
        .map(|(label, value)| {
            UnicodeWidthStr::width(label.as_str()) + UnicodeWidthStr::width(value.as_str()) + 3
        })
        .max()
        .unwrap_or(0)
        .max(UnicodeWidthStr::width(title));

    println!();
    println!("{title}");
    println!("{}", "─".repeat(rule_width));
    for (label, value) in rows {
        let padding = " ".repeat(label_width.saturating_sub(UnicodeWidthStr::width(label.as_str())));
        println!("{label}{padding} : {value}");
    }
    println!();
}
