use serde::{Deserialize, Serialize};

/// The section a translation belongs to.
///
/// Sections partition a language's keys, e.g. per page or per product area.
/// They are identified either by number or by name; the default is `0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged, from = "SectionRepr")]
pub enum Section {
    Id(u32),
    Name(String),
}

/// Wire form of [`Section`]; names are normalized through `From<String>`.
#[derive(Deserialize)]
#[serde(untagged)]
enum SectionRepr {
    Id(u32),
    Name(String),
}

impl From<SectionRepr> for Section {
    fn from(repr: SectionRepr) -> Self {
        match repr {
            SectionRepr::Id(id) => Section::Id(id),
            SectionRepr::Name(name) => Section::from(name),
        }
    }
}

impl Default for Section {
    fn default() -> Self {
        Section::Id(0)
    }
}

impl From<u32> for Section {
    fn from(id: u32) -> Self {
        Section::Id(id)
    }
}

impl From<&str> for Section {
    fn from(s: &str) -> Self {
        Section::from(s.to_string())
    }
}

impl From<String> for Section {
    /// An empty name means the default section.
    fn from(s: String) -> Self {
        if s.is_empty() {
            Section::default()
        } else {
            Section::Name(s)
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Section::Id(id) => write!(f, "{id}"),
            Section::Name(name) => write!(f, "{name}"),
        }
    }
}
