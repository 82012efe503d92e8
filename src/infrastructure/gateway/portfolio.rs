#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_tests;
#[cfg(test)]
#[path = "blogs_test.rs"]
mod blogs_tests;
#[cfg(test)]
#[path = "education_test.rs"]
mod education_tests;
#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_tests;

use async_trait::async_trait;
use reqwest::Method;
use reqwest::RequestBuilder;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ApiError;
use crate::domain::models::BlogPayload;
use crate::domain::models::BlogPost;
use crate::domain::models::Credentials;
use crate::domain::models::EducationEntry;
use crate::domain::models::EducationPayload;
use crate::domain::models::Gateway;
use crate::domain::models::LoginSuccess;
use crate::domain::models::Project;
use crate::domain::models::ProjectPayload;
use crate::domain::services::SessionStore;

/// Read and mutation responses arrive wrapped as `{ "data": ... }`.
#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

fn backend_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    return parsed.message.or(parsed.error);
}

fn classify(status: StatusCode, body: &str) -> ApiError {
    let message = backend_message(body).unwrap_or_else(|| {
        return status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string();
    });

    tracing::error!(
        status = status.as_u16(),
        message = message,
        "backend rejected the request"
    );

    return match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Auth(message),
        StatusCode::NOT_FOUND => ApiError::NotFound(message),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ApiError::Validation(message),
        _ => ApiError::Backend {
            status: status.as_u16(),
            message,
        },
    };
}

pub struct PortfolioApi {
    url: String,
    session: SessionStore,
}

impl Default for PortfolioApi {
    fn default() -> PortfolioApi {
        return PortfolioApi::new(Config::get(ConfigKey::ApiURL), SessionStore::default());
    }
}

impl PortfolioApi {
    pub fn new(url: String, session: SessionStore) -> PortfolioApi {
        return PortfolioApi { url, session };
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut req =
            reqwest::Client::new().request(method, format!("{url}{path}", url = self.url));

        // The bearer token rides along whenever the session store holds
        // one. Without a token the request goes out unauthenticated and
        // the backend decides whether that is acceptable.
        if let Some(token) = self.session.token() {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        return req;
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ApiError> {
        let res = req.send().await.map_err(|err| {
            tracing::error!(error = ?err, "request failed to reach the backend");
            return ApiError::Network(err.to_string());
        })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|err| return ApiError::Network(err.to_string()))?;

        if !status.is_success() {
            return Err(classify(status, &body));
        }

        return serde_json::from_str::<T>(&body).map_err(|err| {
            tracing::error!(error = ?err, body = body, "backend response did not match the expected shape");
            return ApiError::Malformed(err.to_string());
        });
    }

    async fn fetch_data<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ApiError> {
        let envelope = self.send::<Envelope<T>>(req).await?;
        return Ok(envelope.data);
    }

    async fn send_unit(&self, req: RequestBuilder) -> Result<(), ApiError> {
        let res = req.send().await.map_err(|err| {
            tracing::error!(error = ?err, "request failed to reach the backend");
            return ApiError::Network(err.to_string());
        })?;

        let status = res.status();
        if !status.is_success() {
            let body = res
                .text()
                .await
                .map_err(|err| return ApiError::Network(err.to_string()))?;
            return Err(classify(status, &body));
        }

        return Ok(());
    }
}

#[async_trait]
impl Gateway for PortfolioApi {
    #[allow(clippy::implicit_return)]
    async fn login(&self, credentials: Credentials) -> Result<LoginSuccess, ApiError> {
        return self
            .send::<LoginSuccess>(self.request(Method::POST, "/auth/login").json(&credentials))
            .await;
    }

    #[allow(clippy::implicit_return)]
    async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        return self.fetch_data(self.request(Method::GET, "/projects")).await;
    }

    #[allow(clippy::implicit_return)]
    async fn get_project(&self, id: &str) -> Result<Project, ApiError> {
        return self
            .fetch_data(self.request(Method::GET, &format!("/projects/{id}")))
            .await;
    }

    #[allow(clippy::implicit_return)]
    async fn create_project(&self, payload: ProjectPayload) -> Result<Project, ApiError> {
        return self
            .fetch_data(self.request(Method::POST, "/projects").json(&payload))
            .await;
    }

    #[allow(clippy::implicit_return)]
    async fn update_project(
        &self,
        id: &str,
        payload: ProjectPayload,
    ) -> Result<Project, ApiError> {
        return self
            .fetch_data(
                self.request(Method::PUT, &format!("/projects/{id}"))
                    .json(&payload),
            )
            .await;
    }

    #[allow(clippy::implicit_return)]
    async fn delete_project(&self, id: &str) -> Result<(), ApiError> {
        return self
            .send_unit(self.request(Method::DELETE, &format!("/projects/{id}")))
            .await;
    }

    #[allow(clippy::implicit_return)]
    async fn list_blogs(&self) -> Result<Vec<BlogPost>, ApiError> {
        return self.fetch_data(self.request(Method::GET, "/blogs")).await;
    }

    #[allow(clippy::implicit_return)]
    async fn get_blog(&self, id: &str) -> Result<BlogPost, ApiError> {
        return self
            .fetch_data(self.request(Method::GET, &format!("/blogs/{id}")))
            .await;
    }

    #[allow(clippy::implicit_return)]
    async fn create_blog(&self, payload: BlogPayload) -> Result<BlogPost, ApiError> {
        return self
            .fetch_data(self.request(Method::POST, "/blogs").json(&payload))
            .await;
    }

    #[allow(clippy::implicit_return)]
    async fn update_blog(&self, id: &str, payload: BlogPayload) -> Result<BlogPost, ApiError> {
        return self
            .fetch_data(
                self.request(Method::PUT, &format!("/blogs/{id}"))
                    .json(&payload),
            )
            .await;
    }

    #[allow(clippy::implicit_return)]
    async fn delete_blog(&self, id: &str) -> Result<(), ApiError> {
        return self
            .send_unit(self.request(Method::DELETE, &format!("/blogs/{id}")))
            .await;
    }

    #[allow(clippy::implicit_return)]
    async fn list_education(&self) -> Result<Vec<EducationEntry>, ApiError> {
        return self
            .fetch_data(self.request(Method::GET, "/education"))
            .await;
    }

    #[allow(clippy::implicit_return)]
    async fn get_education(&self, id: &str) -> Result<EducationEntry, ApiError> {
        return self
            .fetch_data(self.request(Method::GET, &format!("/education/{id}")))
            .await;
    }

    #[allow(clippy::implicit_return)]
    async fn create_education(
        &self,
        payload: EducationPayload,
    ) -> Result<EducationEntry, ApiError> {
        return self
            .fetch_data(self.request(Method::POST, "/education").json(&payload))
            .await;
    }

    #[allow(clippy::implicit_return)]
    async fn update_education(
        &self,
        id: &str,
        payload: EducationPayload,
    ) -> Result<EducationEntry, ApiError> {
        return self
            .fetch_data(
                self.request(Method::PUT, &format!("/education/{id}"))
                    .json(&payload),
            )
            .await;
    }

    #[allow(clippy::implicit_return)]
    async fn delete_education(&self, id: &str) -> Result<(), ApiError> {
        return self
            .send_unit(self.request(Method::DELETE, &format!("/education/{id}")))
            .await;
    }
}
