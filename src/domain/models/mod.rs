mod auth;
mod blog;
mod education;
mod error;
mod form;
mod gateway;
mod project;

pub use auth::*;
pub use blog::*;
pub use education::*;
pub use error::*;
pub use form::*;
pub use gateway::*;
pub use project::*;
