use std::fmt::Write as _;

use chrono::{DateTime, NaiveDateTime};
use dashboard_core::{AppViewModel, Article, Keyword, KeywordId, Status, TrendPoint};

const TREND_BAR_WIDTH: u64 = 30;
const RULE: &str = "────────────────────────────────────────────────────────────";

/// Renders the whole dashboard as plain text.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "News Dashboard  [{}]", status_text(&view.status));
    let _ = writeln!(out, "{RULE}");

    render_keywords(&mut out, view);
    render_trend(&mut out, view);
    render_articles(&mut out, view);

    out
}

fn status_text(status: &Status) -> String {
    match status {
        Status::Error { message } => format!("error: {message}"),
        other => other.label(),
    }
}

fn render_keywords(out: &mut String, view: &AppViewModel) {
    let _ = writeln!(out, "Keywords");
    if view.keywords.is_empty() {
        let _ = writeln!(out, "  No keywords yet.");
    }
    for keyword in &view.keywords {
        let _ = writeln!(out, "{}", format_keyword_row(keyword, view.selected));
    }
    let _ = writeln!(out);
}

fn format_keyword_row(keyword: &Keyword, selected: Option<KeywordId>) -> String {
    let marker = if selected == Some(keyword.id) { '>' } else { ' ' };
    format!(
        "{marker} [#{id}] {term}  ({created})",
        id = keyword.id,
        term = keyword.term,
        created = format_timestamp(&keyword.created_at)
    )
}

fn render_trend(out: &mut String, view: &AppViewModel) {
    let subject = match &view.selected_keyword {
        Some(keyword) => keyword.term.clone(),
        None => "No keyword selected".to_string(),
    };
    let _ = writeln!(out, "Trend: {subject}{}", detail_mismatch_note(view));

    if view.trend.is_empty() {
        let _ = writeln!(out, "  No trend data");
    } else {
        let max = view.trend.iter().map(|point| point.count).max().unwrap_or(0);
        for point in &view.trend {
            let _ = writeln!(out, "{}", format_trend_row(point, max));
        }
        let total: u64 = view.trend.iter().map(|point| point.count).sum();
        let _ = writeln!(out, "  total: {}", format_with_commas(total));
    }
    let _ = writeln!(out);
}

fn format_trend_row(point: &TrendPoint, max: u64) -> String {
    let width = if max == 0 {
        0
    } else {
        point.count.saturating_mul(TREND_BAR_WIDTH).div_ceil(max)
    };
    format!(
        "  {date} {count:>6} {bar}",
        date = point.date,
        count = format_with_commas(point.count),
        bar = "#".repeat(width as usize)
    )
}

fn render_articles(out: &mut String, view: &AppViewModel) {
    match &view.selected_keyword {
        Some(keyword) => {
            let _ = writeln!(out, "Articles for \"{}\"", keyword.term);
        }
        None => {
            let _ = writeln!(out, "Articles");
        }
    }

    if view.articles.is_empty() {
        let _ = writeln!(out, "  No articles");
        return;
    }
    for article in &view.articles {
        let _ = write!(out, "{}", format_article(article));
    }
}

fn format_article(article: &Article) -> String {
    let mut meta = vec![format!("#{}", article.id)];
    if let Some(press) = article.press.as_deref().filter(|p| !p.is_empty()) {
        meta.push(press.to_string());
    }
    if let Some(published) = article.published_at.as_deref() {
        meta.push(format_timestamp(published));
    }
    meta.push(format!("keyword_id: {}", article.keyword_id));

    let mut text = format!("  {}\n    {}\n", article.title, meta.join(" · "));
    if let Some(snippet) = article.snippet.as_deref().filter(|s| !s.is_empty()) {
        let _ = writeln!(text, "    {snippet}");
    }
    let _ = writeln!(text, "    {}", article.url);
    text
}

/// Shown when the detail belongs to a different keyword than the selection,
/// e.g. after crawling an unselected keyword.
fn detail_mismatch_note(view: &AppViewModel) -> String {
    match view.detail_keyword {
        Some(shown) if view.selected != Some(shown) => format!("  (showing #{shown})"),
        _ => String::new(),
    }
}

/// Server timestamps are ISO-8601, with or without offset. Anything else is
/// shown as received.
fn format_timestamp(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format("%Y-%m-%d %H:%M").to_string();
    }
    raw.to_string()
}

fn format_with_commas(value: u64) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}
