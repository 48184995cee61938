use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Serialize;
use shared::{
    domain::{CarCatalogEntry, Credentials, Dealer, RegistrationProfile, ReviewSubmission},
    protocol::{
        CarCatalogResponse, DealersResponse, ErrorBody, ADD_REVIEW_PATH, GET_CARS_PATH,
        GET_DEALERS_PATH, LOGIN_PATH, REGISTER_PATH,
    },
};
use tracing::{debug, info, warn};

pub mod error;

pub use error::RequestError;

/// Remote operations the dealership views depend on.
#[async_trait]
pub trait DealershipApi: Send + Sync {
    async fn list_dealers(&self) -> Result<Vec<Dealer>, RequestError>;
    async fn list_car_catalog(&self) -> Result<Vec<CarCatalogEntry>, RequestError>;
    async fn login(&self, credentials: &Credentials) -> Result<(), RequestError>;
    async fn register(&self, profile: &RegistrationProfile) -> Result<(), RequestError>;
    async fn submit_review(&self, submission: &ReviewSubmission) -> Result<(), RequestError>;
}

pub struct HttpDealershipClient {
    http: Client,
    base_url: String,
}

impl HttpDealershipClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn post_json<T>(&self, path: &str, body: &T) -> Result<Response, RequestError>
    where
        T: Serialize + ?Sized + Sync,
    {
        let response = self
            .http
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await
            .map_err(RequestError::transport)?;
        settle(path, response).await
    }

    async fn get(&self, path: &str) -> Result<Response, RequestError> {
        let response = self
            .http
            .get(self.endpoint(path))
            .send()
            .await
            .map_err(RequestError::transport)?;
        settle(path, response).await
    }
}

/// Splits a completed response into success or a rejection, pulling the
/// optional `error` text out of a rejected body.
async fn settle(path: &str, response: Response) -> Result<Response, RequestError> {
    let status = response.status();
    if status.is_success() {
        debug!(path, status = status.as_u16(), "dealership api request succeeded");
        return Ok(response);
    }

    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.message(),
        Err(err) => {
            debug!(path, error = %err, "rejected response carried no error body");
            None
        }
    };
    warn!(
        path,
        status = status.as_u16(),
        has_message = message.is_some(),
        "dealership api rejected request"
    );
    Err(RequestError::rejected(status.as_u16(), message))
}

#[async_trait]
impl DealershipApi for HttpDealershipClient {
    async fn list_dealers(&self) -> Result<Vec<Dealer>, RequestError> {
        let body: DealersResponse = self
            .get(GET_DEALERS_PATH)
            .await?
            .json()
            .await
            .map_err(RequestError::transport)?;
        info!(count = body.dealers.len(), "fetched dealers");
        Ok(body.dealers)
    }

    async fn list_car_catalog(&self) -> Result<Vec<CarCatalogEntry>, RequestError> {
        let body: CarCatalogResponse = self
            .get(GET_CARS_PATH)
            .await?
            .json()
            .await
            .map_err(RequestError::transport)?;
        info!(count = body.car_models.len(), "fetched car catalog");
        Ok(body.car_models)
    }

    async fn login(&self, credentials: &Credentials) -> Result<(), RequestError> {
        self.post_json(LOGIN_PATH, credentials).await?;
        Ok(())
    }

    async fn register(&self, profile: &RegistrationProfile) -> Result<(), RequestError> {
        self.post_json(REGISTER_PATH, profile).await?;
        Ok(())
    }

    async fn submit_review(&self, submission: &ReviewSubmission) -> Result<(), RequestError> {
        self.post_json(ADD_REVIEW_PATH, submission).await?;
        info!(dealership = submission.dealership.0, "review accepted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
