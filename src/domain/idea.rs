use anyhow::{Result, anyhow};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct IdeaId(Uuid);

impl IdeaId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub(crate) fn parse(value: &str) -> Result<Self> {
        Ok(Self(Uuid::parse_str(value.trim())?))
    }

    /// First block of the UUID, enough to tell ideas apart in a listing.
    pub(crate) fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl fmt::Display for IdeaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Production stage of an idea.
///
/// The serialized names are what ends up in the database, so they must not change.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub(crate) enum Status {
    #[default]
    #[serde(rename = "Idea")]
    Idea,
    #[serde(rename = "Recording")]
    Recording,
    #[serde(rename = "Editing")]
    Editing,
    #[serde(rename = "Published")]
    Published,
}

impl Status {
    pub(crate) const ALL: [Status; 4] = [
        Status::Idea,
        Status::Recording,
        Status::Editing,
        Status::Published,
    ];

    pub(crate) fn raw_identifier(self) -> &'static str {
        match self {
            Status::Idea => "Idea",
            Status::Recording => "Recording",
            Status::Editing => "Editing",
            Status::Published => "Published",
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Status::Idea => "🧠 Idea",
            Status::Recording => "🎥 Recording",
            Status::Editing => "✂️ Editing",
            Status::Published => "✅ Published",
        }
    }

    pub(crate) fn next(self) -> Option<Status> {
        match self {
            Status::Idea => Some(Status::Recording),
            Status::Recording => Some(Status::Editing),
            Status::Editing => Some(Status::Published),
            Status::Published => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw_identifier())
    }
}

impl FromStr for Status {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        let needle = value.trim();
        Status::ALL
            .into_iter()
            .find(|status| status.raw_identifier().eq_ignore_ascii_case(needle))
            .ok_or_else(|| {
                anyhow!(
                    "unknown status '{value}', expected one of: idea, recording, editing, published"
                )
            })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Idea {
    pub(crate) id: IdeaId,
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) tags: Vec<String>,
    pub(crate) status: Status,
    pub(crate) date_created: DateTime<Utc>,
}

impl Idea {
    pub(crate) fn new(title: impl Into<String>) -> Self {
        Self {
            id: IdeaId::new(),
            title: title.into(),
            description: String::new(),
            tags: Vec::new(),
            status: Status::default(),
            date_created: Utc::now(),
        }
    }

    pub(crate) fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub(crate) fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub(crate) fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub(crate) fn with_id(mut self, id: IdeaId) -> Self {
        self.id = id;
        self
    }

    pub(crate) fn with_date_created(mut self, date_created: DateTime<Utc>) -> Self {
        self.date_created = date_created;
        self
    }
}

/// Placeholder content shown on a fresh install.
pub(crate) fn default_seed() -> Vec<Idea> {
    vec![
        Idea::new("Mi primer Short").with_tags(["short", "funny"]),
        Idea::new("Top 5 errores en LoL")
            .with_description("Errores comunes que comete la mayoría")
            .with_tags(["league", "educativo"])
            .with_status(Status::Editing),
        Idea::new("Troleando a mi primo").with_status(Status::Published),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_idea_uses_defaults() {
        let before = Utc::now();
        let idea = Idea::new("Draft");
        assert_eq!(idea.title, "Draft");
        assert!(idea.description.is_empty());
        assert!(idea.tags.is_empty());
        assert_eq!(idea.status, Status::Idea);
        assert!(idea.date_created >= before);
    }

    #[test]
    fn new_ideas_get_distinct_ids() {
        assert_ne!(Idea::new("a").id, Idea::new("a").id);
    }

    #[test]
    fn equality_covers_every_field() {
        let idea = Idea::new("Same");
        let retitled = idea.clone().with_description("changed");
        assert_ne!(idea, retitled);
        assert_eq!(idea, idea.clone());
    }

    #[test]
    fn statuses_follow_pipeline_order() {
        let mut shuffled = vec![
            Status::Published,
            Status::Idea,
            Status::Editing,
            Status::Recording,
        ];
        shuffled.sort();
        assert_eq!(shuffled, Status::ALL.to_vec());
        assert_eq!(Status::Editing.next(), Some(Status::Published));
        assert_eq!(Status::Published.next(), None);
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("recording".parse::<Status>().unwrap(), Status::Recording);
        assert_eq!(" PUBLISHED ".parse::<Status>().unwrap(), Status::Published);
        assert!("draft".parse::<Status>().is_err());
    }

    #[test]
    fn status_serializes_as_raw_identifier() {
        let encoded = serde_json::to_string(&Status::ALL).unwrap();
        assert_eq!(encoded, r#"["Idea","Recording","Editing","Published"]"#);
        for status in Status::ALL {
            assert_eq!(
                serde_json::to_string(&status).unwrap(),
                format!("\"{}\"", status.raw_identifier())
            );
        }
    }

    #[test]
    fn idea_serializes_with_stable_field_names() {
        let idea = Idea::new("Fields").with_tags(["a"]);
        let value = serde_json::to_value(&idea).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(
            keys,
            ["dateCreated", "description", "id", "status", "tags", "title"]
        );
        assert_eq!(object["id"], idea.id.to_string());
    }

    #[test]
    fn id_parse_round_trips_display() {
        let id = IdeaId::new();
        assert_eq!(IdeaId::parse(&id.to_string()).unwrap(), id);
        assert!(IdeaId::parse("not-a-uuid").is_err());
        assert_eq!(id.short().len(), 8);
    }

    #[test]
    fn default_seed_has_three_placeholders() {
        let seed = default_seed();
        assert_eq!(seed.len(), 3);
        assert_eq!(seed[0].tags, vec!["short", "funny"]);
        assert_eq!(seed[1].status, Status::Editing);
        assert_eq!(seed[2].status, Status::Published);
    }
}
