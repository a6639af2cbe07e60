//! The incident board.

use std::fmt::Write;

use desk_core::entities::Incident;
use desk_core::enums::{IncidentStatus, Severity};

use super::{escape_html, format_date, layout, status_badge};
use crate::board::{BoardFilter, BoardQuery, Notice, ViewMode};

/// What the board handler hands to the renderer.
pub struct BoardPage<'a> {
    pub query: &'a BoardQuery,
    pub filter: &'a BoardFilter,
    pub view: ViewMode,
    pub notice: Option<Notice>,
    /// `Err` carries the message shown instead of the list.
    pub incidents: Result<&'a [Incident], &'a str>,
}

#[must_use]
pub fn render(page: &BoardPage<'_>) -> String {
    let mut body = String::from("<h1>Incident board</h1>\n");
    body.push_str(&filters(page));

    match page.incidents {
        Err(message) => {
            let _ = write!(body, r#"<div class="toast error">{}</div>"#, escape_html(message));
        }
        Ok([]) => body.push_str("<p>No incidents match these filters.</p>"),
        Ok(incidents) => match page.view {
            ViewMode::Table => body.push_str(&table(incidents)),
            ViewMode::Grid => body.push_str(&grid(incidents)),
        },
    }

    layout("Board", page.notice, &body)
}

fn filters(page: &BoardPage<'_>) -> String {
    let search = page.query.q.as_deref().unwrap_or_default();
    let date = page
        .filter
        .date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    let mut options = String::from(r#"<option value="All">All</option>"#);
    for severity in Severity::ALL {
        let selected = if page.filter.severity == Some(severity) {
            " selected"
        } else {
            ""
        };
        let _ = write!(options, r#"<option value="{severity}"{selected}>{severity}</option>"#);
    }

    format!(
        r#"<form class="filters" method="get" action="/board">
<input type="search" name="q" placeholder="Search title or description" value="{search}">
<select name="severity">{options}</select>
<input type="date" name="date" value="{date}">
<input type="hidden" name="view" value="{view}">
<button type="submit">Filter</button>
<a href="/board">Clear filters</a>
<a href="/board{table_link}">Table</a> <a href="/board{grid_link}">Grid</a>
</form>
"#,
        search = escape_html(search),
        view = page.view.as_str(),
        table_link = escape_html(&page.query.with_view(ViewMode::Table)),
        grid_link = escape_html(&page.query.with_view(ViewMode::Grid)),
    )
}

fn table(incidents: &[Incident]) -> String {
    let mut rows = String::new();
    for incident in incidents {
        let _ = write!(
            rows,
            r#"<tr data-id="{id}"><td><a href="/board/{id}">{title}</a></td><td>{severity}</td><td>{badge}</td><td>{created}</td><td>{actions}</td></tr>
"#,
            id = incident.id,
            title = escape_html(&incident.title),
            severity = incident.severity,
            badge = status_badge(incident.status),
            created = format_date(&incident.created_at),
            actions = row_actions(incident),
        );
    }
    format!(
        "<table>\n<thead><tr><th>Title</th><th>Severity</th><th>Status</th><th>Created</th><th>Actions</th></tr></thead>\n<tbody>\n{rows}</tbody>\n</table>"
    )
}

/// Inline status change and delete for one table row. Both post back to the
/// board (`from=board`) rather than the detail page.
fn row_actions(incident: &Incident) -> String {
    let mut options = String::new();
    for status in IncidentStatus::ALL {
        let selected = if status == incident.status { " selected" } else { "" };
        let _ = write!(
            options,
            r#"<option value="{}"{selected}>{}</option>"#,
            status.as_str(),
            status.label()
        );
    }
    format!(
        r#"<form method="post" action="/board/{id}/status" style="display:inline"><input type="hidden" name="from" value="board"><select name="status">{options}</select><button type="submit">Update</button></form> <form method="post" action="/board/{id}/delete" style="display:inline" onsubmit="return confirm('Delete this incident? This cannot be undone.');"><button type="submit">Delete</button></form>"#,
        id = incident.id,
    )
}

fn grid(incidents: &[Incident]) -> String {
    let mut cards = String::new();
    for incident in incidents {
        let _ = write!(
            cards,
            r#"<div class="card" data-id="{id}"><h3><a href="/board/{id}">{title}</a></h3><p>{description}</p><p>{badge} {severity} · {created}</p></div>
"#,
            id = incident.id,
            title = escape_html(&incident.title),
            description = escape_html(&incident.description),
            badge = status_badge(incident.status),
            severity = incident.severity,
            created = format_date(&incident.created_at),
        );
    }
    format!("<div class=\"grid\">\n{cards}</div>")
}
