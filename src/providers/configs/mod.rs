pub mod base;
pub mod github;

pub use base::ProviderConfig;
pub use github::GithubModelsConfig;
