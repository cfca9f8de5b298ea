//! Free-form changelog text parser plugin.
//!
//! Recovers releases from "Keep a Changelog"-style text and its loose
//! variants. Each trimmed line is matched against, in order:
//!
//! 1. a version header (`## [1.2.0] - 2024-03-01`, `# v2.1`, ...)
//! 2. a category header (`### Added`, `## Bug Fixes`, ...)
//! 3. a list item (`- `, `* ` or `• `)
//!
//! Anything else is ignored.

use std::sync::LazyLock;

use changecraft_model::{ChangeCategory, ChangeEntry, Release, ReleaseSet, today};
use changecraft_plugin::{ChangelogParser, Plugin};
use regex::Regex;
use tracing::debug;

static VERSION_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#{1,2}\s*\[?[vV]?(?P<version>\d+\.\d+(?:\.\d+)?)\]?(?P<rest>.*)$")
        .expect("invalid regex")
});

static CATEGORY_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^#{1,3}\s*(?P<name>added|new|features?|fixed|fixes|bug\s*fix(?:es)?|changed|updated|modified|removed|deleted|security|deprecated)\b",
    )
    .expect("invalid regex")
});

static LIST_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*•]\s+(?P<text>.+)$").expect("invalid regex"));

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}[-/]\d{2}[-/]\d{2}").expect("invalid regex"));

/// How a keyword is matched against a lowercased description.
#[derive(Debug, Clone, Copy)]
enum Keyword {
    Prefix(&'static str),
    Contains(&'static str),
}

impl Keyword {
    fn matches(self, description: &str) -> bool {
        match self {
            Self::Prefix(prefix) => description.starts_with(prefix),
            Self::Contains(needle) => description.contains(needle),
        }
    }
}

/// Keyword sniffing rules, first match wins. A match overrides the
/// category of the enclosing section.
const KEYWORD_RULES: &[(ChangeCategory, &[Keyword])] = &[
    (
        ChangeCategory::Fixed,
        &[Keyword::Prefix("fix"), Keyword::Prefix("bug")],
    ),
    (
        ChangeCategory::Added,
        &[Keyword::Prefix("add"), Keyword::Prefix("new ")],
    ),
    (
        ChangeCategory::Removed,
        &[Keyword::Prefix("remove"), Keyword::Prefix("delete")],
    ),
    (
        ChangeCategory::Security,
        &[
            Keyword::Prefix("security"),
            Keyword::Contains("vulnerability"),
            Keyword::Contains("cve"),
        ],
    ),
    (ChangeCategory::Deprecated, &[Keyword::Prefix("deprecat")]),
    (
        ChangeCategory::Changed,
        &[
            Keyword::Prefix("update"),
            Keyword::Prefix("change"),
            Keyword::Prefix("improve"),
        ],
    ),
];

/// Infers a category from the wording of a description.
fn classify_description(description: &str) -> Option<ChangeCategory> {
    let lowered = description.to_lowercase();
    KEYWORD_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| k.matches(&lowered)))
        .map(|(category, _)| *category)
}

/// Maps a category header synonym to its category.
fn category_for_header(name: &str) -> Option<ChangeCategory> {
    let name = name.to_lowercase();
    if name.starts_with("add") || name.starts_with("new") || name.starts_with("feature") {
        Some(ChangeCategory::Added)
    } else if name.starts_with("fix") || name.starts_with("bug") {
        Some(ChangeCategory::Fixed)
    } else if name.starts_with("change") || name.starts_with("update") || name.starts_with("modif")
    {
        Some(ChangeCategory::Changed)
    } else if name.starts_with("remove") || name.starts_with("delete") {
        Some(ChangeCategory::Removed)
    } else if name == "security" {
        Some(ChangeCategory::Security)
    } else if name == "deprecated" {
        Some(ChangeCategory::Deprecated)
    } else {
        None
    }
}

/// Extracts the first date-like substring, normalizing `/` to `-`.
fn extract_date(rest: &str) -> Option<String> {
    DATE_RE.find(rest).map(|m| m.as_str().replace('/', "-"))
}

/// Cursor threaded through the lines of one parse.
struct ParseState<'a> {
    fallback_date: &'a str,
    current: Option<Release>,
    active: ChangeCategory,
    releases: ReleaseSet,
}

impl<'a> ParseState<'a> {
    fn new(fallback_date: &'a str) -> Self {
        Self {
            fallback_date,
            current: None,
            active: ChangeCategory::Added,
            releases: Vec::new(),
        }
    }

    fn feed(mut self, line: &str) -> Self {
        if let Some(captures) = VERSION_HEADER_RE.captures(line) {
            let version = &captures["version"];
            let date = extract_date(&captures["rest"])
                .unwrap_or_else(|| self.fallback_date.to_string());
            self.close_release();
            debug!(version, %date, "opened release");
            self.current = Some(Release::new(version, date));
            self.active = ChangeCategory::Added;
        } else if let Some(captures) = CATEGORY_HEADER_RE.captures(line) {
            if let Some(category) = category_for_header(&captures["name"]) {
                self.active = category;
            }
        } else if let Some(captures) = LIST_ITEM_RE.captures(line) {
            let description = captures["text"].trim();
            match self.current.as_mut() {
                Some(release) if !description.is_empty() => {
                    let category = classify_description(description).unwrap_or(self.active);
                    release.changes.push(ChangeEntry::new(category, description));
                }
                Some(_) => {}
                None => debug!(line, "skipping list item outside of a release"),
            }
        }
        self
    }

    fn close_release(&mut self) {
        match self.current.take() {
            Some(release) if !release.is_empty() => self.releases.push(release),
            Some(release) => debug!(version = %release.version, "discarding empty release"),
            None => {}
        }
    }

    fn finish(mut self) -> ReleaseSet {
        self.close_release();
        self.releases
    }
}

/// Heuristic free-form text parser.
#[derive(Debug, Clone, Default)]
pub struct TextParser {
    fallback_date: Option<String>,
}

impl TextParser {
    /// Creates a parser that dates undated releases with today's date.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `date` for version headers that carry no date.
    #[must_use]
    pub fn with_fallback_date(mut self, date: impl Into<String>) -> Self {
        self.fallback_date = Some(date.into());
        self
    }
}

impl Plugin for TextParser {
    fn name(&self) -> &'static str {
        "text"
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn description(&self) -> &'static str {
        "Recovers releases from free-form changelog text"
    }
}

impl ChangelogParser for TextParser {
    fn parse(&self, text: &str) -> ReleaseSet {
        let fallback_date = self.fallback_date.clone().unwrap_or_else(today);

        let releases = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .fold(ParseState::new(&fallback_date), ParseState::feed)
            .finish();

        debug!(releases = releases.len(), "parsed changelog text");
        releases
    }
}
