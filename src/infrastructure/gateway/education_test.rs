use anyhow::bail;
use anyhow::Result;
use mockito::Matcher;
use serde_json::json;
use tempfile::tempdir;
use tempfile::TempDir;

use super::PortfolioApi;
use crate::domain::models::ApiError;
use crate::domain::models::EducationPayload;
use crate::domain::models::Gateway;
use crate::domain::services::SessionStore;

fn session_in(dir: &TempDir) -> SessionStore {
    return SessionStore::new(dir.path().join("session.json"));
}

#[tokio::test]
async fn it_lists_education_entries() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/education")
        .with_status(200)
        .with_body(
            json!({"data": [
                {"_id": "e1", "degree": "BSc", "institution": "Example University", "fieldOfStudy": "CS", "startDate": "2018-09"},
            ]})
            .to_string(),
        )
        .create();

    let dir = tempdir()?;
    let api = PortfolioApi::new(server.url(), session_in(&dir));

    let res = api.list_education().await?;
    mock.assert();

    assert_eq!(res.len(), 1);
    assert_eq!(res[0].degree, "BSc");
    assert!(res[0].end_date.is_none());

    return Ok(());
}

#[tokio::test]
async fn it_creates_an_entry_without_empty_optional_fields() -> Result<()> {
    // Exact body match: the optional fields must not appear at all.
    let expected = json!({
        "degree": "BSc",
        "institution": "Example University",
        "fieldOfStudy": "Computer Science",
        "startDate": "2018-09",
        "instituePicture": "",
    });

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/education")
        .match_body(Matcher::Json(expected))
        .with_status(201)
        .with_body(
            json!({"data": {"_id": "e1", "degree": "BSc", "institution": "Example University", "fieldOfStudy": "Computer Science", "startDate": "2018-09"}})
                .to_string(),
        )
        .create();

    let dir = tempdir()?;
    let api = PortfolioApi::new(server.url(), session_in(&dir));

    let payload = EducationPayload::from_form(
        "BSc",
        "Example University",
        "Computer Science",
        "2018-09",
        "",
        "",
        "",
        "",
    );
    let created = api.create_education(payload).await?;
    mock.assert();

    assert_eq!(created.id, "e1");
    return Ok(());
}

#[tokio::test]
async fn it_updates_an_entry() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("PUT", "/education/e1")
        .match_body(Matcher::PartialJson(json!({"endDate": "2022-06"})))
        .with_status(200)
        .with_body(
            json!({"data": {"_id": "e1", "degree": "BSc", "institution": "Example University", "fieldOfStudy": "CS", "startDate": "2018-09", "endDate": "2022-06"}})
                .to_string(),
        )
        .create();

    let dir = tempdir()?;
    let api = PortfolioApi::new(server.url(), session_in(&dir));

    let payload = EducationPayload::from_form(
        "BSc",
        "Example University",
        "CS",
        "2018-09",
        "2022-06",
        "",
        "",
        "",
    );
    let updated = api.update_education("e1", payload).await?;
    mock.assert();

    assert_eq!(updated.end_date, Some("2022-06".to_string()));
    return Ok(());
}

#[tokio::test]
async fn it_surfaces_not_found_for_a_missing_entry() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/education/missing")
        .with_status(404)
        .with_body(r#"{"error":"Education entry not found"}"#)
        .create();

    let dir = tempdir()?;
    let api = PortfolioApi::new(server.url(), session_in(&dir));

    let res = api.get_education("missing").await;
    mock.assert();

    match res {
        Err(ApiError::NotFound(message)) => assert_eq!(message, "Education entry not found"),
        _ => bail!("Expected a not-found error"),
    }

    return Ok(());
}

#[tokio::test]
async fn it_deletes_an_entry() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("DELETE", "/education/e1")
        .with_status(200)
        .with_body(r#"{"data": null}"#)
        .create();

    let dir = tempdir()?;
    let api = PortfolioApi::new(server.url(), session_in(&dir));

    api.delete_education("e1").await?;
    mock.assert();

    return Ok(());
}
