pub mod response;

use crate::config::ApiConfig;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT},
    Client,
};
use itertools::Itertools;
use serde::de::DeserializeOwned;
use std::ops::Deref;
use thiserror::Error;

use self::response::{AsyncFrom, Response};

const GITHUB_JSON: &str = "application/vnd.github+json";
const API_VERSION_HEADER: &str = "x-github-api-version";

#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Builds a client that sends the GitHub headers on every request.
    pub fn new(api: &ApiConfig) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON));
        headers.insert(
            API_VERSION_HEADER,
            HeaderValue::from_str(&api.version).map_err(|_| Error::InvalidHeader {
                name: API_VERSION_HEADER,
            })?,
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&api.user_agent).map_err(|_| Error::InvalidHeader {
                name: "user-agent",
            })?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|cause| Error::BuildClientError { cause })?;

        Ok(HttpClient { client })
    }
}

impl Deref for HttpClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

pub trait ResponseHandler {
    async fn handle<T>(self) -> Result<T, Error>
    where
        T: DeserializeOwned;
}

impl ResponseHandler for Result<reqwest::Response, reqwest::Error> {
    async fn handle<T>(self) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let response = self.map_err(|cause| Error::SendRequestError { cause })?;

        Response::<T>::async_from(response).await.collect()
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{}", .message.as_deref().unwrap_or("request failed"))]
    ResponseError { status: u16, message: Option<String> },
    #[error("Failed to send request")]
    SendRequestError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to read response text")]
    ReadResponseTextError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to parse response")]
    ParseResponseError {
        #[source]
        cause: serde_json::Error,
    },
    #[error("Invalid value for header {name}")]
    InvalidHeader { name: &'static str },
    #[error("Failed to build http client")]
    BuildClientError {
        #[source]
        cause: reqwest::Error,
    },
}

impl Error {
    /// The `message` field of the server's error body, when it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Error::ResponseError { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// This error and its sources, joined with `: `.
    pub fn chain(&self) -> String {
        std::iter::successors(Some(self as &dyn std::error::Error), |err| err.source()).join(": ")
    }
}
