use super::{
    kind::EntityKind,
    request::LookupRequest,
    result::{LookupResult, RepoResult, UserResult},
};
use crate::{
    config::ApiConfig,
    http::{Error, HttpClient, ResponseHandler},
};

#[derive(Clone, Debug)]
pub struct LookupClient {
    http: HttpClient,
}

impl LookupClient {
    pub fn new(api: &ApiConfig) -> Result<Self, Error> {
        Ok(LookupClient {
            http: HttpClient::new(api)?,
        })
    }

    /// Issues one GET for the request and decodes the body with the schema
    /// of the requested kind.
    pub async fn fetch(&self, request: &LookupRequest) -> Result<LookupResult, Error> {
        log::info!("fetching {} #{}: {}", request.kind, request.seq, request.url);

        let response = self.http.get(request.url.clone()).send().await;

        let result: LookupResult = match request.kind {
            EntityKind::User => response.handle::<UserResult>().await?.into(),
            EntityKind::Repo => response.handle::<RepoResult>().await?.into(),
        };

        log::debug!("fetched #{}: {:?}", request.seq, result);

        Ok(result)
    }
}
