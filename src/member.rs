use std::io::Read;

use anyhow::{Context, Result};
use cap_std::fs::Dir;
use serde::{Deserialize, Serialize};

pub const MEMBERS_FILE: &str = "members.json";

/// A single team member record as stored in the data file.
///
/// All fields default to the empty string so that a lookup miss can be
/// rendered as a blank record instead of an error page.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Member {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub image: String,
}

impl Member {
    /// Reads the full member collection from the data file.
    ///
    /// The file is opened, read and closed on every call, so edits to it
    /// are visible to the next request without any invalidation step.
    pub fn read_all(dir: &Dir) -> Result<Vec<Self>> {
        let mut buf = Vec::new();
        dir.open(MEMBERS_FILE)?.read_to_end(&mut buf)?;

        let members = serde_json::from_slice(&buf).context("Failed to deserialize members")?;

        Ok(members)
    }

    /// Selects the record whose `url` field equals `slug`.
    ///
    /// Forward scan, so the first of any duplicate slugs wins. A miss
    /// yields the default record with every field empty.
    pub fn by_slug(members: Vec<Self>, slug: &str) -> Self {
        members
            .into_iter()
            .find(|member| member.url == slug)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn members() -> Vec<Member> {
        serde_json::from_str(
            r#"[
                {"url": "ada", "name": "Ada", "title": "Founder"},
                {"url": "grace", "name": "Grace", "title": "Engineer", "bio": "Compilers."},
                {"url": "ada", "name": "Shadowed"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn missing_fields_deserialize_as_empty() {
        let members = members();

        assert_eq!(members.len(), 3);
        assert_eq!(members[0].bio, "");
        assert_eq!(members[1].bio, "Compilers.");
    }

    #[test]
    fn first_matching_slug_wins() {
        let member = Member::by_slug(members(), "ada");

        assert_eq!(member.name, "Ada");
        assert_eq!(member.title, "Founder");
    }

    #[test]
    fn unknown_slug_yields_empty_record() {
        let member = Member::by_slug(members(), "linus");

        assert_eq!(member, Member::default());
    }
}
