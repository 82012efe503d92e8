use async_trait::async_trait;

use super::ApiError;
use super::BlogPayload;
use super::BlogPost;
use super::Credentials;
use super::EducationEntry;
use super::EducationPayload;
use super::LoginSuccess;
use super::Project;
use super::ProjectPayload;

pub type GatewayBox = Box<dyn Gateway + Send + Sync>;

/// The request layer in front of the portfolio backend. One operation
/// per (resource, verb) pair plus login. Operations are independent
/// and uncoordinated; callers refetch collections after mutations.
#[async_trait]
pub trait Gateway {
    /// Exchanges credentials for a bearer token and the user it belongs
    /// to. A rejection surfaces as [`ApiError::Auth`] with the backend's
    /// message.
    async fn login(&self, credentials: Credentials) -> Result<LoginSuccess, ApiError>;

    async fn list_projects(&self) -> Result<Vec<Project>, ApiError>;
    async fn get_project(&self, id: &str) -> Result<Project, ApiError>;
    async fn create_project(&self, payload: ProjectPayload) -> Result<Project, ApiError>;
    async fn update_project(&self, id: &str, payload: ProjectPayload)
        -> Result<Project, ApiError>;
    async fn delete_project(&self, id: &str) -> Result<(), ApiError>;

    async fn list_blogs(&self) -> Result<Vec<BlogPost>, ApiError>;
    async fn get_blog(&self, id: &str) -> Result<BlogPost, ApiError>;
    async fn create_blog(&self, payload: BlogPayload) -> Result<BlogPost, ApiError>;
    async fn update_blog(&self, id: &str, payload: BlogPayload) -> Result<BlogPost, ApiError>;
    async fn delete_blog(&self, id: &str) -> Result<(), ApiError>;

    async fn list_education(&self) -> Result<Vec<EducationEntry>, ApiError>;
    async fn get_education(&self, id: &str) -> Result<EducationEntry, ApiError>;
    async fn create_education(&self, payload: EducationPayload)
        -> Result<EducationEntry, ApiError>;
    async fn update_education(
        &self,
        id: &str,
        payload: EducationPayload,
    ) -> Result<EducationEntry, ApiError>;
    async fn delete_education(&self, id: &str) -> Result<(), ApiError>;
}
