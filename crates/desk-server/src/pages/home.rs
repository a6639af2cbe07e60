use super::layout;

#[must_use]
pub fn render() -> String {
    layout(
        "Incidents",
        None,
        r#"<h1>Incident desk</h1>
<p>Report problems and follow them until they are closed.</p>
<p><a href="/board/new">New incident</a> · <a href="/board">View board</a></p>"#,
    )
}
