#[cfg(test)]
#[path = "project_test.rs"]
mod tests;

use serde::Deserialize;
use serde::Serialize;

use super::split_csv;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub live_url: String,
    #[serde(default)]
    pub github_links: Vec<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

impl Project {
    /// The full payload for a PUT, seeded from the stored entity so an
    /// update only has to overlay the fields that changed.
    pub fn to_payload(&self) -> ProjectPayload {
        return ProjectPayload {
            title: self.title.to_string(),
            description: self.description.to_string(),
            technologies: self.technologies.clone(),
            live_url: self.live_url.to_string(),
            github_links: self.github_links.clone(),
            image_urls: self.image_urls.clone(),
            features: self.features.clone(),
        };
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPayload {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub live_url: String,
    pub github_links: Vec<String>,
    pub image_urls: Vec<String>,
    pub features: Vec<String>,
}

impl ProjectPayload {
    pub fn from_form(
        title: &str,
        description: &str,
        technologies: &str,
        live_url: &str,
        repo_urls: &str,
        image_urls: &str,
        features: &str,
    ) -> ProjectPayload {
        return ProjectPayload {
            title: title.to_string(),
            description: description.to_string(),
            technologies: split_csv(technologies),
            live_url: live_url.to_string(),
            github_links: split_csv(repo_urls),
            image_urls: split_csv(image_urls),
            features: split_csv(features),
        };
    }
}
