//! Fence-aware splitting of the canonical document into entry sections.

use regex::Regex;

/// One `## <key>` section: the heading line plus everything up to the next
/// section heading or the end of the document.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    key: String,
    text: String,
}

impl Section {
    /// The heading key with surrounding whitespace trimmed.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The section's verbatim text, starting at its heading line.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A document split into its preamble and `## ` sections.
///
/// The split is lossless: [`to_markdown`](Self::to_markdown) concatenates
/// the preamble and section texts back into the original document byte for
/// byte. A boundary is a line starting `## ` outside any fenced code block,
/// so code that happens to contain heading-shaped lines never splits a
/// section.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentSections {
    preamble: String,
    sections: Vec<Section>,
}

impl DocumentSections {
    /// Splits `text` into preamble and sections.
    pub fn parse(text: &str) -> Self {
        // Lazy `.+?` keeps trailing whitespace out of the captured key.
        let heading = Regex::new(r"^##[ \t]+(.+?)\s*$").unwrap();

        let mut preamble = String::new();
        let mut sections: Vec<Section> = Vec::new();
        let mut fence: Option<&'static str> = None;

        for line in text.split_inclusive('\n') {
            let stripped = line.trim_end_matches(['\n', '\r']);

            let mut opens = None;
            match fence {
                // A closing fence must repeat the delimiter that opened it;
                // the other delimiter stays ordinary text inside the block.
                Some(delimiter) => {
                    if stripped.starts_with(delimiter) {
                        fence = None;
                    }
                }
                None => {
                    if stripped.starts_with("```") {
                        fence = Some("```");
                    } else if stripped.starts_with("~~~") {
                        fence = Some("~~~");
                    } else if let Some(captures) = heading.captures(stripped) {
                        opens = Some(captures[1].to_string());
                    }
                }
            }

            match opens {
                Some(key) => sections.push(Section {
                    key,
                    text: line.to_string(),
                }),
                None => match sections.last_mut() {
                    Some(section) => section.text.push_str(line),
                    None => preamble.push_str(line),
                },
            }
        }

        Self { preamble, sections }
    }

    /// Everything before the first section heading.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Sections in document order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Section keys in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.key.as_str())
    }

    /// True when a section with exactly this key exists.
    pub fn contains(&self, key: &str) -> bool {
        self.sections.iter().any(|s| s.key == key)
    }

    /// Removes the first section whose key is exactly `key`, returning it.
    pub fn remove(&mut self, key: &str) -> Option<Section> {
        let position = self.sections.iter().position(|s| s.key == key)?;
        Some(self.sections.remove(position))
    }

    /// Reassembles the document text.
    pub fn to_markdown(&self) -> String {
        let mut out = String::with_capacity(
            self.preamble.len() + self.sections.iter().map(|s| s.text.len()).sum::<usize>(),
        );
        out.push_str(&self.preamble);
        for section in &self.sections {
            out.push_str(&section.text);
        }
        out
    }
}
