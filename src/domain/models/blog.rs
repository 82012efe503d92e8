#[cfg(test)]
#[path = "blog_test.rs"]
mod tests;

use serde::Deserialize;
use serde::Serialize;

use super::split_csv;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image_url: String,
}

impl BlogPost {
    pub fn to_payload(&self) -> BlogPayload {
        return BlogPayload {
            title: self.title.to_string(),
            content: self.content.to_string(),
            author: self.author.to_string(),
            category: self.category.to_string(),
            tags: self.tags.clone(),
            image_url: self.image_url.to_string(),
        };
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPayload {
    pub title: String,
    pub content: String,
    pub author: String,
    pub category: String,
    pub tags: Vec<String>,
    pub image_url: String,
}

impl BlogPayload {
    pub fn from_form(
        title: &str,
        content: &str,
        author: &str,
        category: &str,
        tags: &str,
        image_url: &str,
    ) -> BlogPayload {
        return BlogPayload {
            title: title.to_string(),
            content: content.to_string(),
            author: author.to_string(),
            category: category.to_string(),
            tags: split_csv(tags),
            image_url: image_url.to_string(),
        };
    }
}
