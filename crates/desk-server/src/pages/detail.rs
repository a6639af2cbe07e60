//! Single-incident view with status change and delete forms.

use std::fmt::Write;

use desk_core::entities::Incident;
use desk_core::enums::IncidentStatus;

use super::{escape_html, format_date, layout, status_badge};
use crate::board::Notice;

#[must_use]
pub fn render(incident: &Incident, notice: Option<Notice>) -> String {
    let mut status_options = String::new();
    for status in IncidentStatus::ALL {
        let selected = if status == incident.status { " selected" } else { "" };
        let _ = write!(
            status_options,
            r#"<option value="{}"{selected}>{}</option>"#,
            status.as_str(),
            status.label()
        );
    }

    let body = format!(
        r#"<h1>{title}</h1>
<p>{badge} Severity: {severity}</p>
<p>{description}</p>
<p>Created {created} · Updated {updated}</p>
<form method="post" action="/board/{id}/status">
<label>Status <select name="status">{status_options}</select></label>
<button type="submit">Update status</button>
</form>
<form method="post" action="/board/{id}/delete" onsubmit="return confirm('Delete this incident? This cannot be undone.');">
<button type="submit">Delete</button>
</form>
<p><a href="/board">Back to board</a></p>"#,
        id = incident.id,
        title = escape_html(&incident.title),
        badge = status_badge(incident.status),
        severity = incident.severity,
        description = escape_html(&incident.description),
        created = format_date(&incident.created_at),
        updated = format_date(&incident.updated_at),
    );

    layout(&incident.title, notice, &body)
}

#[must_use]
pub fn not_found(id: &str) -> String {
    layout(
        "Not found",
        None,
        &format!(
            r#"<h1>Incident not found</h1>
<p>There is no incident <code>{}</code>.</p>
<p><a href="/board">Back to board</a></p>"#,
            escape_html(id)
        ),
    )
}
