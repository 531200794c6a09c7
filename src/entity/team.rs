use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lowercases and joins alphanumeric runs with `-`, so "Team  Alpha!"
/// and "team alpha" produce the same slug.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// A team within one sports activity.
///
/// `id` is an opaque identifier assigned at creation and stable across
/// renames; events in the game log reference it. `slug` is derived from
/// the display name and is the case-insensitive uniqueness key within an
/// activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

impl Team {
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            slug: slugify(name),
        }
    }

    /// Changes the display name. The id stays stable so player
    /// assignments and logged events keep resolving.
    pub fn rename(&mut self, name: &str) {
        self.name = name.to_string();
        self.slug = slugify(name);
    }
}
