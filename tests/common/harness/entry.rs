//! Builder for test entries with sensible defaults.

#![allow(dead_code)]

/// Builder for one entry section of the canonical document.
///
/// Renders the section by hand rather than through the crate's template so
/// the tests exercise parsing of independently written Markdown.
#[derive(Debug, Clone)]
pub struct TestEntry {
    id: String,
    title: String,
    description: String,
    source: String,
    keywords: Vec<String>,
    language: String,
    code: Option<String>,
}

impl TestEntry {
    /// Creates a new test entry with the given title and a fixed id.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: "1000".to_string(),
            title: title.into(),
            description: "a test entry".to_string(),
            source: String::new(),
            keywords: Vec::new(),
            language: String::new(),
            code: None,
        }
    }

    /// Sets an explicit heading id for the section.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the description cell.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the source cell, rendered as a Markdown link.
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Adds one keyword.
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.push(keyword.into());
        self
    }

    /// Attaches a fenced code block.
    pub fn code(mut self, language: impl Into<String>, code: impl Into<String>) -> Self {
        self.language = language.into();
        self.code = Some(code.into());
        self
    }

    /// Returns the heading id.
    pub fn entry_id(&self) -> &str {
        &self.id
    }

    /// Returns the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Renders the entry as one `##` document section.
    pub fn to_markdown(&self) -> String {
        let source_cell = if self.source.is_empty() {
            String::new()
        } else {
            format!("[{}]({})", self.source, self.source)
        };

        let mut text = format!(
            "## {}\n\n\
             | title | description | source | keywords |\n\
             | ----- | ----------- | ------ | -------- |\n\
             | {} | {} | {} | {} |\n",
            self.id,
            self.title,
            self.description,
            source_cell,
            self.keywords.join(","),
        );

        if let Some(code) = &self.code {
            text.push('\n');
            text.push_str(&format!("```{}\n", self.language));
            text.push_str(code);
            if !code.ends_with('\n') {
                text.push('\n');
            }
            text.push_str("```\n");
        }

        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_builder_fluent() {
        let entry = TestEntry::new("hello shell")
            .id("2000")
            .description("says hello")
            .source("https://example.com")
            .keyword("say")
            .keyword("hello")
            .code("sh", "echo hello\n");

        assert_eq!(entry.entry_id(), "2000");
        assert_eq!(entry.title(), "hello shell");

        let markdown = entry.to_markdown();
        assert!(markdown.starts_with("## 2000\n"));
        assert!(markdown.contains("| hello shell | says hello |"));
        assert!(markdown.contains("[https://example.com](https://example.com)"));
        assert!(markdown.contains("| say,hello |"));
        assert!(markdown.contains("```sh\necho hello\n```\n"));
    }

    #[test]
    fn entry_without_code_has_no_fence() {
        let markdown = TestEntry::new("plain").keyword("k").to_markdown();
        assert!(!markdown.contains("```"));
        assert!(markdown.ends_with("| plain | a test entry |  | k |\n"));
    }

    #[test]
    fn entry_markdown_parses_back() {
        let markdown = TestEntry::new("round trip")
            .id("3000")
            .keyword("loop")
            .code("py", "x = 1\n")
            .to_markdown();

        let tree = zinc::parser::parse_document(&markdown).unwrap();
        let entry = tree
            .as_branch()
            .and_then(|children| children.get("3000"))
            .and_then(|node| node.as_entry())
            .expect("section should parse to an entry");

        assert_eq!(entry.title(), "round trip");
        assert_eq!(entry.keywords(), ["loop"]);
        assert_eq!(entry.segment().unwrap().body_text(), "x = 1\n");
    }
}
