#[cfg(test)]
#[path = "education_test.rs"]
mod tests;

use serde::Deserialize;
use serde::Serialize;

use super::split_csv;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    #[serde(rename = "_id")]
    pub id: String,
    pub degree: String,
    pub institution: String,
    pub field_of_study: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub honors: Option<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
    // The backend schema spells this field "instituePicture".
    #[serde(default)]
    pub institue_picture: String,
}

impl EducationEntry {
    pub fn to_payload(&self) -> EducationPayload {
        let certifications = if self.certifications.is_empty() {
            None
        } else {
            Some(self.certifications.clone())
        };

        return EducationPayload {
            degree: self.degree.to_string(),
            institution: self.institution.to_string(),
            field_of_study: self.field_of_study.to_string(),
            start_date: self.start_date.to_string(),
            end_date: self.end_date.clone(),
            honors: self.honors.clone(),
            certifications,
            institue_picture: self.institue_picture.to_string(),
        };
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationPayload {
    pub degree: String,
    pub institution: String,
    pub field_of_study: String,
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub honors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<String>>,
    pub institue_picture: String,
}

impl EducationPayload {
    #[allow(clippy::too_many_arguments)]
    pub fn from_form(
        degree: &str,
        institution: &str,
        field_of_study: &str,
        start_date: &str,
        end_date: &str,
        honors: &str,
        certifications: &str,
        institute_picture: &str,
    ) -> EducationPayload {
        let certs = split_csv(certifications);

        return EducationPayload {
            degree: degree.to_string(),
            institution: institution.to_string(),
            field_of_study: field_of_study.to_string(),
            start_date: start_date.to_string(),
            end_date: optional(end_date),
            honors: optional(honors),
            certifications: if certs.is_empty() { None } else { Some(certs) },
            institue_picture: institute_picture.to_string(),
        };
    }
}

fn optional(input: &str) -> Option<String> {
    if input.trim().is_empty() {
        return None;
    }
    return Some(input.to_string());
}
