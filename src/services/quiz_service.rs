use crate::config::Config;
use crate::dto::submission_dto::QuizSubmission;
use crate::error::{Error, Result};
use crate::models::quiz::Quiz;
use reqwest::{Client, Response};
use std::future::Future;
use std::time::Duration;
use url::Url;
use validator::Validate;

/// The four remote operations the quiz service exposes. `QuizService` is the
/// HTTP implementation; callers hold the trait so tests can substitute a
/// double.
#[cfg_attr(test, mockall::automock)]
pub trait QuizApi: Send + Sync {
    fn list_quizzes(&self) -> impl Future<Output = Result<Vec<Quiz>>> + Send;

    fn get_quiz(&self, id: i64) -> impl Future<Output = Result<Quiz>> + Send;

    fn create_quiz(
        &self,
        submission: QuizSubmission,
    ) -> impl Future<Output = Result<Quiz>> + Send;

    fn delete_quiz(&self, id: i64) -> impl Future<Output = Result<()>> + Send;
}

/// Plain request/response client for the quiz API. No retries, no pagination;
/// a non-success status becomes one opaque [`Error::Transport`] message.
#[derive(Clone)]
pub struct QuizService {
    client: Client,
    base_url: String,
}

impl QuizService {
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let base_url = base_url.as_ref();
        let parsed = Url::parse(base_url)
            .map_err(|e| Error::Config(format!("Invalid quiz API URL '{}': {}", base_url, e)))?;
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(&Config::from_env()?.quiz_api_url)
    }
}

impl QuizApi for QuizService {
    async fn list_quizzes(&self) -> Result<Vec<Quiz>> {
        let url = format!("{}/quizzes", self.base_url);
        tracing::debug!(%url, "listing quizzes");
        let response = self.client.get(&url).send().await?;
        Ok(check(response).await?.json::<Vec<Quiz>>().await?)
    }

    async fn get_quiz(&self, id: i64) -> Result<Quiz> {
        let url = format!("{}/quizzes/{}", self.base_url, id);
        tracing::debug!(%url, "fetching quiz");
        let response = self.client.get(&url).send().await?;
        Ok(check(response).await?.json::<Quiz>().await?)
    }

    async fn create_quiz(&self, submission: QuizSubmission) -> Result<Quiz> {
        submission
            .validate()
            .map_err(|e| Error::Precondition(format!("invalid submission payload: {}", e)))?;

        let url = format!("{}/quizzes", self.base_url);
        tracing::info!(%url, title = %submission.title, "creating quiz");
        let response = self.client.post(&url).json(&submission).send().await?;
        Ok(check(response).await?.json::<Quiz>().await?)
    }

    async fn delete_quiz(&self, id: i64) -> Result<()> {
        let url = format!("{}/quizzes/{}", self.base_url, id);
        tracing::info!(%url, "deleting quiz");
        let response = self.client.delete(&url).send().await?;
        check(response).await?;
        Ok(())
    }
}

async fn check(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    tracing::warn!(%status, "quiz service request failed");
    let body = response.text().await.unwrap_or_default();
    let message = if body.trim().is_empty() {
        format!("quiz service returned {}", status)
    } else {
        format!("quiz service returned {}: {}", status, body.trim())
    };
    Err(Error::Transport(message))
}
