use anyhow::Result;

use super::Project;
use super::ProjectPayload;
use crate::domain::models::split_csv;

#[test]
fn it_builds_a_payload_from_comma_separated_form_fields() {
    let payload = ProjectPayload::from_form(
        "Portfolio",
        "A personal site",
        "a, b",
        "https://example.com",
        "https://github.com/me/site",
        "",
        "dark mode, responsive",
    );

    assert_eq!(
        payload.technologies,
        vec!["a".to_string(), "b".to_string()]
    );
    assert_eq!(
        payload.github_links,
        vec!["https://github.com/me/site".to_string()]
    );
    assert!(payload.image_urls.is_empty());
    assert_eq!(
        payload.features,
        vec!["dark mode".to_string(), "responsive".to_string()]
    );
}

#[test]
fn it_serializes_payloads_with_backend_field_names() -> Result<()> {
    let payload = ProjectPayload::from_form("Portfolio", "A personal site", "rust", "", "", "", "");
    let json = serde_json::to_value(&payload)?;

    assert!(json.get("liveUrl").is_some());
    assert!(json.get("githubLinks").is_some());
    assert!(json.get("imageUrls").is_some());
    assert!(json.get("live_url").is_none());

    return Ok(());
}

#[test]
fn it_deserializes_backend_entities() -> Result<()> {
    let project: Project = serde_json::from_str(
        r#"{"_id":"p1","title":"Portfolio","description":"A personal site","technologies":["rust"],"liveUrl":"https://example.com","githubLinks":[],"imageUrls":[],"features":[]}"#,
    )?;

    assert_eq!(project.id, "p1");
    assert_eq!(project.technologies, vec!["rust".to_string()]);

    return Ok(());
}

#[test]
fn it_tolerates_missing_optional_lists() -> Result<()> {
    let project: Project =
        serde_json::from_str(r#"{"_id":"p2","title":"Bare","description":"No extras"}"#)?;

    assert!(project.technologies.is_empty());
    assert!(project.live_url.is_empty());

    return Ok(());
}

#[test]
fn it_overlays_an_update_on_the_stored_entity() -> Result<()> {
    let project: Project = serde_json::from_str(
        r#"{"_id":"p1","title":"Portfolio","description":"A personal site","technologies":["a","b"]}"#,
    )?;

    let mut payload = project.to_payload();
    payload.technologies = split_csv("c");

    assert_eq!(payload.title, "Portfolio");
    assert_eq!(payload.technologies, vec!["c".to_string()]);

    return Ok(());
}
