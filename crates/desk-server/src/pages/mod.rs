//! Server-rendered HTML.
//!
//! Pages are plain strings assembled with `format!`. Anything that came from
//! a user or the database goes through [`escape_html`] first.

pub mod detail;
pub mod form;
pub mod home;
pub mod list;

use chrono::{DateTime, Utc};
use desk_core::enums::IncidentStatus;

use crate::board::Notice;

/// Badge colour for statuses the board does not recognise.
pub const FALLBACK_STATUS_COLOR: &str = "#9ca3af";

const STYLE: &str = "
body { font-family: system-ui, sans-serif; margin: 0; background: #f9fafb; color: #111827; }
header { background: #111827; padding: 1rem 2rem; }
header a { color: #f9fafb; text-decoration: none; margin-right: 1.5rem; }
main { max-width: 960px; margin: 2rem auto; padding: 0 1rem; }
table { width: 100%; border-collapse: collapse; background: #fff; }
th, td { padding: .5rem .75rem; border-bottom: 1px solid #e5e7eb; text-align: left; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 1rem; }
.card { background: #fff; border: 1px solid #e5e7eb; border-radius: 8px; padding: 1rem; }
.badge { color: #fff; border-radius: 9999px; padding: .1rem .6rem; font-size: .8rem; }
.toast { padding: .75rem 1rem; border-radius: 6px; margin-bottom: 1rem; background: #dcfce7; }
.toast.error { background: #fee2e2; }
.filters { display: flex; gap: .5rem; margin-bottom: 1rem; flex-wrap: wrap; }
label { display: block; margin-top: .75rem; }
";

/// Wrap `body` in the shared page chrome.
#[must_use]
pub fn layout(title: &str, notice: Option<Notice>, body: &str) -> String {
    let toast = notice.map(render_notice).unwrap_or_default();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} · Desk</title>
<style>{STYLE}</style>
</head>
<body>
<header><a href="/">Desk</a><a href="/board">Board</a><a href="/board/new">New incident</a></header>
<main>
{toast}{body}
</main>
</body>
</html>"#,
        title = escape_html(title),
    )
}

fn render_notice(notice: Notice) -> String {
    let class = if notice.is_error() { "toast error" } else { "toast" };
    format!(
        r#"<div class="{class}" role="status" data-notice="{key}">{message}</div>
"#,
        key = notice.key(),
        message = notice.message(),
    )
}

/// Escape text for use in element content and quoted attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Long date, e.g. `October 18, 2026`.
#[must_use]
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%B %-d, %Y").to_string()
}

/// Badge colour for raw status text, grey when it is not a known status.
#[must_use]
pub fn status_color(status: &str) -> &'static str {
    status
        .parse::<IncidentStatus>()
        .map_or(FALLBACK_STATUS_COLOR, IncidentStatus::color)
}

#[must_use]
pub fn status_badge(status: IncidentStatus) -> String {
    format!(
        r#"<span class="badge" style="background:{}">{}</span>"#,
        status.color(),
        status.label()
    )
}
