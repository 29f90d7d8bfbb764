//! Markdown rendering for a single entry section.

use crate::domain::EntryId;
use minijinja::{Environment, context};
use thiserror::Error;

/// Template for one entry section of the canonical document.
///
/// The source cell becomes a Markdown link when a source is given; the
/// fenced code region disappears entirely (including its separating blank
/// line) when there is no code.
pub const ENTRY_TEMPLATE: &str = "\
## {{ id }}

| title | description | source | keywords |
| ----- | ----------- | ------ | -------- |
| {{ title }} | {{ description }} | {% if source %}[{{ source }}]({{ source }}){% endif %} | {{ keywords }} |
{% if code %}
```{{ language }}
{{ code }}```
{% endif %}";

/// Field values for one rendered entry.
#[derive(Debug, Clone, Default)]
pub struct EntryFields {
    pub title: String,
    pub description: String,
    pub source: String,
    pub keywords: Vec<String>,
    pub language: Option<String>,
    pub code: Option<String>,
}

/// Error raised when the entry template fails to render.
#[derive(Debug, Error)]
#[error("failed to render entry template: {0}")]
pub struct RenderError(#[from] minijinja::Error);

/// Renders the Markdown section for one entry.
///
/// The section starts at the `## {id}` heading line and ends with a single
/// trailing newline; the caller decides where it lands in the document.
/// Code is normalized to end with a newline so the closing fence sits on
/// its own line.
///
/// # Errors
///
/// Returns [`RenderError`] when template expansion fails.
///
/// # Examples
///
/// ```
/// use zinc::document::{EntryFields, render_entry};
/// use zinc::domain::EntryId;
///
/// let fields = EntryFields {
///     title: "Say hello".to_string(),
///     keywords: vec!["say".to_string(), "hello".to_string()],
///     ..Default::default()
/// };
/// let section = render_entry(EntryId::from_millis(1000), &fields).unwrap();
/// assert!(section.starts_with("## 1000\n"));
/// ```
pub fn render_entry(id: EntryId, fields: &EntryFields) -> Result<String, RenderError> {
    let code = match fields.code.as_deref() {
        None | Some("") => String::new(),
        Some(code) if code.ends_with('\n') => code.to_string(),
        Some(code) => format!("{code}\n"),
    };

    let mut env = Environment::new();
    env.add_template("entry", ENTRY_TEMPLATE)?;
    let template = env.get_template("entry")?;

    let id = id.to_string();
    let keywords = fields.keywords.join(",");
    let rendered = template.render(context! {
        id => id,
        title => fields.title.as_str(),
        description => fields.description.as_str(),
        source => fields.source.as_str(),
        keywords => keywords,
        language => fields.language.as_deref().unwrap_or(""),
        code => code,
    })?;

    Ok(rendered)
}
