use crate::error::PortfolioError;

use reqwest::Response as HttpResponse;
use serde::{de::DeserializeOwned, Serialize};

impl crate::PortfolioClient {
    // Internal helper to consume a response and decode its JSON body.
    pub(crate) async fn _send_and_process_response<R: DeserializeOwned + Send + 'static>(
        &self,
        response: HttpResponse,
        endpoint_context: &str,
    ) -> Result<R, PortfolioError> {
        let status = response.status();
        let response_url = response.url().to_string(); // For logging

        // Get the body as text first so failures can be logged with context.
        let response_text = response.text().await.map_err(PortfolioError::ReqwestError)?;

        if status.is_success() {
            serde_json::from_str::<R>(&response_text).map_err(|e| {
                log::error!(
                    "JSON deserialization failed for successful response from '{}'. Status: {}. Error: {}. Body: {}",
                    response_url,
                    status,
                    e,
                    &response_text
                );
                PortfolioError::JsonDeserializationFailed(format!(
                    "Failed to deserialize successful response from '{}': {}. Body: {}",
                    response_url, e, &response_text
                ))
            })
        } else {
            log::warn!(
                "Request to '{}' failed with status {}. Body: {}",
                endpoint_context,
                status,
                &response_text
            );
            Err(PortfolioError::from_response(status.as_u16(), &response_text))
        }
    }

    // Internal helper to consume a response whose body is not part of the
    // contract. Redirect statuses count as completion: the backend answers
    // form posts with a redirect back to the page.
    pub(crate) async fn _send_and_ignore_body(
        &self,
        response: HttpResponse,
        endpoint_context: &str,
    ) -> Result<(), PortfolioError> {
        let status = response.status();

        if status.is_success() || status.is_redirection() {
            // Drain the body without decoding it.
            let _ = response.bytes().await.map_err(PortfolioError::ReqwestError)?;
            log::debug!(
                "Request to '{}' completed with status {} (body ignored)",
                endpoint_context,
                status
            );
            Ok(())
        } else {
            let response_text = response.text().await.map_err(PortfolioError::ReqwestError)?;
            log::warn!(
                "Request to '{}' failed with status {}. Body: {}",
                endpoint_context,
                status,
                &response_text
            );
            Err(PortfolioError::from_response(status.as_u16(), &response_text))
        }
    }

    // Public HTTP method wrappers
    pub async fn get<R: DeserializeOwned + Send + 'static>(
        &self,
        endpoint: &str,
    ) -> Result<R, PortfolioError> {
        self._get_with_params(endpoint, &[]).await
    }

    pub async fn get_with_params<R: DeserializeOwned + Send + 'static>(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<R, PortfolioError> {
        self._get_with_params(endpoint, params).await
    }

    pub async fn post_form<T: Serialize + Send + Sync + ?Sized>(
        &self,
        endpoint: &str,
        form: &T,
    ) -> Result<(), PortfolioError> {
        self._post_form(endpoint, form).await
    }

    pub async fn post_empty(&self, endpoint: &str) -> Result<(), PortfolioError> {
        self._post_empty(endpoint).await
    }
}
