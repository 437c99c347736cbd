use crate::http::Error;

use serde::{de::DeserializeOwned, Deserialize};

/// Body GitHub sends alongside a non-2xx status.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Debug)]
pub struct ErrorResponse {
    pub status: u16,
    pub message: Option<String>,
}

#[derive(Debug)]
pub struct Inner<T> {
    pub payload: T,
    pub status: u16,
}

#[derive(Debug)]
pub enum Response<T> {
    Success(Inner<T>),
    Error(ErrorResponse),
    Unreadable(Error),
}

impl<T> Response<T> {
    pub fn collect(self) -> Result<T, Error> {
        match self {
            Response::Success(response) => {
                log::trace!("request succeeded with status {}", response.status);
                Ok(response.payload)
            }
            Response::Error(response) => Err(Error::ResponseError {
                status: response.status,
                message: response.message,
            }),
            Response::Unreadable(err) => Err(err),
        }
    }
}

pub trait AsyncFrom<T>: Sized {
    async fn async_from(value: T) -> Self;
}

impl<T> AsyncFrom<reqwest::Response> for Response<T>
where
    T: DeserializeOwned,
{
    async fn async_from(value: reqwest::Response) -> Self {
        let status = value.status().as_u16();

        let text = match value.text().await {
            Ok(text) => text,
            Err(cause) => return Response::Unreadable(Error::ReadResponseTextError { cause }),
        };

        if !(200..300).contains(&status) {
            let body = serde_json::from_str::<ErrorBody>(&text).unwrap_or_default();
            log::debug!("request failed with status {}: {}", status, text);
            return Response::Error(ErrorResponse {
                status,
                message: body.message,
            });
        }

        match serde_json::from_str::<T>(&text) {
            Ok(payload) => Response::Success(Inner { payload, status }),
            Err(cause) => Response::Unreadable(Error::ParseResponseError { cause }),
        }
    }
}
