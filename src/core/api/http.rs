//! HTTP implementation of [`DataSource`] over `reqwest`.
//!
//! URLs follow the backend's REST layout:
//!
//! - list: `GET {base}{prefix}/{endpoint}?page=&page_size=&search=`
//! - get / update / delete: `GET | PATCH | DELETE {base}{prefix}/{endpoint}{id}/`
//! - create: `POST {base}{prefix}/{endpoint}`

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use tracing::{debug, instrument, warn};

use super::envelope::Envelope;
use super::error::TransportError;
use super::source::{DataSource, ListQuery};
use crate::core::config::Config;
use crate::domains::resources::{Resource, ResourceDescriptor, ResourceId};

/// Longest error body kept in [`TransportError::Status`].
const MAX_ERROR_BODY: usize = 512;

/// A resource collection served by the REST backend.
pub struct HttpDataSource<T> {
    client: Client,
    collection_url: Url,
    searchable: bool,
    access_token: Option<String>,
    _record: PhantomData<fn() -> T>,
}

impl<T: Resource> HttpDataSource<T> {
    /// Create a data source with its own client, honoring the configured timeout.
    pub fn new(config: &Config, descriptor: &ResourceDescriptor) -> Result<Self, TransportError> {
        let client = Client::builder().timeout(config.api.timeout()).build()?;
        Self::with_client(client, config, descriptor)
    }

    /// Create a data source sharing an existing client.
    pub fn with_client(
        client: Client,
        config: &Config,
        descriptor: &ResourceDescriptor,
    ) -> Result<Self, TransportError> {
        let collection_url = collection_url(
            &config.api.base_url,
            &config.app.api_prefix,
            descriptor.endpoint,
        )?;

        debug!(
            "HTTP data source for '{}' at {}",
            descriptor.name, collection_url
        );

        Ok(Self {
            client,
            collection_url,
            searchable: descriptor.searchable,
            access_token: config.credentials.access_token.clone(),
            _record: PhantomData,
        })
    }

    /// URL of the collection itself.
    pub fn collection_url(&self) -> &Url {
        &self.collection_url
    }

    /// URL of one list request. The search term is dropped for collections
    /// the backend cannot search.
    pub fn list_url(&self, query: &ListQuery) -> Result<Url, TransportError> {
        let query = if self.searchable {
            query.clone()
        } else {
            query.clone().without_search()
        };

        let mut url = self.collection_url.clone();
        url.set_query(Some(&query.to_query_string()?));
        Ok(url)
    }

    /// URL of a single record.
    pub fn record_url(&self, id: ResourceId) -> Result<Url, TransportError> {
        self.collection_url
            .join(&format!("{id}/"))
            .map_err(|e| TransportError::invalid_url(e.to_string()))
    }

    /// Create a record.
    #[instrument(skip_all, fields(url = %self.collection_url))]
    pub async fn create<B>(&self, body: &B) -> Result<Envelope<T>, TransportError>
    where
        B: Serialize + Sync + ?Sized,
    {
        self.send(self.create_request(body)).await
    }

    /// Partially update a record.
    #[instrument(skip(self, body))]
    pub async fn update<B>(&self, id: ResourceId, body: &B) -> Result<Envelope<T>, TransportError>
    where
        B: Serialize + Sync + ?Sized,
    {
        self.send(self.update_request(id, body)?).await
    }

    /// `POST` of a new record to the collection.
    pub fn create_request<B>(&self, body: &B) -> RequestBuilder
    where
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, self.collection_url.clone()).json(body)
    }

    /// `PATCH` of the given fields of one record.
    pub fn update_request<B>(
        &self,
        id: ResourceId,
        body: &B,
    ) -> Result<RequestBuilder, TransportError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.record_url(id)?;
        Ok(self.request(Method::PATCH, url).json(body))
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let request = self.client.request(method, url);
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send<R: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<Envelope<R>, TransportError> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        classify_response(status, &body)
    }
}

#[async_trait]
impl<T: Resource> DataSource for HttpDataSource<T> {
    type Item = T;

    #[instrument(skip(self))]
    async fn list(&self, query: &ListQuery) -> Result<Envelope<Vec<T>>, TransportError> {
        let url = self.list_url(query)?;
        debug!("GET {}", url);
        self.send(self.request(Method::GET, url)).await
    }

    #[instrument(skip(self))]
    async fn get(&self, id: ResourceId) -> Result<Envelope<T>, TransportError> {
        let url = self.record_url(id)?;
        debug!("GET {}", url);
        self.send(self.request(Method::GET, url)).await
    }

    #[instrument(skip(self))]
    async fn remove(&self, id: ResourceId) -> Result<Envelope<()>, TransportError> {
        let url = self.record_url(id)?;
        debug!("DELETE {}", url);
        self.send(self.request(Method::DELETE, url)).await
    }
}

/// Build `{base}/{prefix}/{endpoint}/` with exactly one slash between parts.
fn collection_url(base_url: &str, api_prefix: &str, endpoint: &str) -> Result<Url, TransportError> {
    let base = base_url.trim_end_matches('/');
    let prefix = api_prefix.trim_matches('/');
    let endpoint = endpoint.trim_matches('/');

    let raw = if prefix.is_empty() {
        format!("{base}/{endpoint}/")
    } else {
        format!("{base}/{prefix}/{endpoint}/")
    };

    Url::parse(&raw).map_err(|e| TransportError::invalid_url(format!("{raw}: {e}")))
}

/// Decide whether a raw HTTP response is an envelope or a transport failure.
///
/// The backend answers rejected writes with `400` and an `ok: false`
/// envelope, so a non-success status whose body is a failure envelope is
/// returned as that envelope. Anything else outside 2xx is a
/// [`TransportError::Status`].
pub fn classify_response<R: DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<Envelope<R>, TransportError> {
    if (200..300).contains(&status) {
        if body.trim().is_empty() {
            return Ok(Envelope {
                ok: true,
                data: None,
                message: None,
                pagination: None,
                errors: None,
            });
        }
        return serde_json::from_str(body).map_err(TransportError::from);
    }

    match serde_json::from_str::<Envelope<R>>(body) {
        Ok(envelope) if !envelope.ok => {
            debug!(status, "Server rejected the request with an envelope");
            Ok(envelope)
        }
        _ => {
            warn!(status, "Request failed without an envelope");
            Err(TransportError::Status {
                status,
                body: body.chars().take(MAX_ERROR_BODY).collect(),
            })
        }
    }
}
