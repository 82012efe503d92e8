use anyhow::Result;

use super::EducationEntry;
use super::EducationPayload;

#[test]
fn it_omits_empty_optional_fields_from_the_payload() -> Result<()> {
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

    let json = serde_json::to_value(&payload)?;
    assert!(json.get("endDate").is_none());
    assert!(json.get("honors").is_none());
    assert!(json.get("certifications").is_none());
    assert_eq!(json["fieldOfStudy"], "Computer Science");
    assert_eq!(json["instituePicture"], "");

    return Ok(());
}

#[test]
fn it_keeps_populated_optional_fields() -> Result<()> {
    let payload = EducationPayload::from_form(
        "MSc",
        "Example University",
        "Distributed Systems",
        "2021-09",
        "2023-06",
        "cum laude",
        "AWS SAA, CKA",
        "https://example.com/campus.png",
    );

    let json = serde_json::to_value(&payload)?;
    assert_eq!(json["endDate"], "2023-06");
    assert_eq!(json["honors"], "cum laude");
    assert_eq!(json["certifications"][1], "CKA");

    return Ok(());
}

#[test]
fn it_deserializes_entities_with_the_misspelled_picture_field() -> Result<()> {
    let entry: EducationEntry = serde_json::from_str(
        r#"{"_id":"e1","degree":"BSc","institution":"Example University","fieldOfStudy":"CS","startDate":"2018-09","instituePicture":"https://example.com/campus.png"}"#,
    )?;

    assert_eq!(entry.institue_picture, "https://example.com/campus.png");
    assert!(entry.end_date.is_none());
    assert!(entry.certifications.is_empty());

    return Ok(());
}

#[test]
fn it_round_trips_an_entity_through_a_payload() -> Result<()> {
    let entry: EducationEntry = serde_json::from_str(
        r#"{"_id":"e1","degree":"BSc","institution":"Example University","fieldOfStudy":"CS","startDate":"2018-09","endDate":"2022-06","certifications":["AWS SAA"]}"#,
    )?;

    let payload = entry.to_payload();
    assert_eq!(payload.end_date, Some("2022-06".to_string()));
    assert_eq!(payload.certifications, Some(vec!["AWS SAA".to_string()]));

    return Ok(());
}
