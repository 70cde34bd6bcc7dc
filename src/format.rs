use std::collections::HashMap;

use crate::alert::{Alert, AlertBatch};

/// Discord rejects messages over 2000-odd characters; everything past this
/// many characters is cut and replaced with a single ellipsis.
pub const MAX_MESSAGE_CHARS: usize = 2044;

/// Render a whole batch as one Discord markdown message: a summary line with
/// firing/resolved counts, then one block per alert in input order.
pub fn format_message(batch: &AlertBatch) -> String {
    let blocks: Vec<String> = batch.alerts.iter().map(format_alert_block).collect();
    let message = format!("{}\n\n{}", summary_line(&batch.alerts), blocks.join("\n\n"));
    truncate_message(message)
}

fn format_alert_block(alert: &Alert) -> String {
    let glyph = if alert.status == "firing" { "🔴" } else { "🟢" };

    let title_text = match alert.labels.get("alertname") {
        Some(name) if !name.is_empty() => name.as_str(),
        _ => "No title",
    };
    let title = match alert.generator_url.as_deref() {
        Some(url) if !url.is_empty() => format!("[{}]({})", title_text, url),
        _ => title_text.to_string(),
    };
    let silence = match alert.silence_url.as_deref() {
        Some(url) if !url.is_empty() => format!(" · [(silence)]({})", url),
        _ => String::new(),
    };
    let instance = match alert.labels.get("instance") {
        Some(instance) if !instance.is_empty() => format!(" · {}", instance),
        _ => String::new(),
    };

    let summary = match alert.annotations.get("summary") {
        Some(summary) if !summary.is_empty() => summary.as_str(),
        _ => "No summary provided",
    };
    let description = alert
        .annotations
        .get("description")
        .map(String::as_str)
        .unwrap_or("");
    let text = format!("{}\n{}", summary, description);

    format!(
        "### {} {}{}{}\n{}",
        glyph,
        title,
        silence,
        instance,
        text.trim()
    )
}

fn summary_line(alerts: &[Alert]) -> String {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for alert in alerts {
        *counts.entry(alert.status.as_str()).or_insert(0) += 1;
    }

    // Resolved before firing, statuses we do not recognize are not rendered.
    let mut fragments = Vec::new();
    if let Some(resolved) = counts.get("resolved") {
        fragments.push(format!("✅ {} resolved", resolved));
    }
    if let Some(firing) = counts.get("firing") {
        fragments.push(format!("🔥 {} firing", firing));
    }

    format!("## New Alerts! {}", fragments.join(", "))
}

fn truncate_message(message: String) -> String {
    match message.char_indices().nth(MAX_MESSAGE_CHARS) {
        Some((cut, _)) => {
            let mut truncated = message[..cut].to_string();
            truncated.push('…');
            truncated
        }
        None => message,
    }
}
