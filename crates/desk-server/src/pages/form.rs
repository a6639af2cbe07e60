//! New-incident form.

use std::fmt::Write;

use desk_core::enums::{IncidentStatus, Severity};

use super::{escape_html, layout};

/// Values echoed back into the form after a failed submission.
#[derive(Debug, Clone, Default)]
pub struct FormValues {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub status: IncidentStatus,
}

#[must_use]
pub fn render(values: &FormValues, error: Option<&str>) -> String {
    let error = error
        .map(|e| format!(r#"<div class="toast error" role="alert">{}</div>"#, escape_html(e)))
        .unwrap_or_default();

    let mut severity_options = String::new();
    for severity in Severity::ALL {
        let selected = if severity == values.severity { " selected" } else { "" };
        let _ = write!(
            severity_options,
            r#"<option value="{severity}"{selected}>{severity}</option>"#
        );
    }

    let mut status_options = String::new();
    for status in IncidentStatus::ALL {
        let selected = if status == values.status { " selected" } else { "" };
        let _ = write!(
            status_options,
            r#"<option value="{}"{selected}>{}</option>"#,
            status.as_str(),
            status.label()
        );
    }

    let body = format!(
        r#"<h1>New incident</h1>
{error}<form method="post" action="/board/new">
<label>Title <input type="text" name="title" value="{title}" required></label>
<label>Description <textarea name="description" rows="5" required>{description}</textarea></label>
<label>Severity <select name="severity">{severity_options}</select></label>
<label>Status <select name="status">{status_options}</select></label>
<p><button type="submit">Create incident</button> <a href="/board">Cancel</a></p>
</form>"#,
        title = escape_html(&values.title),
        description = escape_html(&values.description),
    );

    layout("New incident", None, &body)
}
