use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Home-link label used when the catalog does not carry a site title.
pub const DEFAULT_SITE_TITLE: &str = "Portfolio";

/// The whole portfolio document. Loaded once at startup and never mutated
/// for the rest of the session.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Catalog {
    #[serde(rename = "siteTitle", default, skip_serializing_if = "Option::is_none")]
    pub site_title: Option<String>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Category {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Project {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// May contain markup; rendered unescaped (trusted catalog content).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_media",
        skip_serializing_if = "Option::is_none"
    )]
    pub media: Option<Media>,
}

/// Embedded media for a project, tagged by `type` in the catalog JSON.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Media {
    Youtube {
        id: String,
    },
    Vimeo {
        id: String,
    },
    Image {
        src: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alt: Option<String>,
    },
}

impl Catalog {
    pub fn find_category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Label for the home-link control: `siteTitle` or the fixed fallback.
    pub fn home_label(&self) -> &str {
        self.site_title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_SITE_TITLE)
    }
}

impl Category {
    pub fn find_project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

impl Media {
    /// Reads the raw JSON form. An unknown `type`, or a missing/empty
    /// required `id`/`src`, collapses to `None` so one bad media block
    /// never sinks the whole catalog.
    pub fn from_value(value: &Value) -> Option<Media> {
        match value.get("type").and_then(|v| v.as_str())? {
            "youtube" => Some(Media::Youtube {
                id: non_empty_str(value.get("id"))?,
            }),
            "vimeo" => Some(Media::Vimeo {
                id: non_empty_str(value.get("id"))?,
            }),
            "image" => Some(Media::Image {
                src: non_empty_str(value.get("src"))?,
                alt: value
                    .get("alt")
                    .and_then(|v| v.as_str())
                    .map(str::to_string),
            }),
            _ => None,
        }
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn lenient_media<'de, D>(deserializer: D) -> Result<Option<Media>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Media::from_value))
}
