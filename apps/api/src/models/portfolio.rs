use serde::{Deserialize, Serialize};

/// Static portfolio document: profile, projects and skill categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioData {
    pub profile: Profile,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub short_bio: String,
    #[serde(default)]
    pub long_bio: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

/// A headline figure shown on the profile, e.g. `{"value": "8+", "label": "Years Experience"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    #[serde(default)]
    pub skills: Vec<SkillItem>,
}

/// Skills are stored either as bare names or as `{name, hidden}` objects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillItem {
    Name(String),
    Detailed {
        name: String,
        #[serde(default)]
        hidden: bool,
    },
}

impl SkillItem {
    pub fn name(&self) -> &str {
        match self {
            SkillItem::Name(name) => name,
            SkillItem::Detailed { name, .. } => name,
        }
    }
}
