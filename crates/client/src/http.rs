//! reqwest-backed implementation of [`CatalogApi`].

use async_trait::async_trait;
use catalog_core::paging::PageResult;
use catalog_core::product::{Product, ProductInput};
use catalog_core::types::DbId;
use reqwest::{RequestBuilder, Response, StatusCode};

use crate::api::{CatalogApi, Credentials, LoginInfo, ProductQuery};
use crate::error::{ClientError, ClientResult};
use crate::session::{Identity, Session};

/// HTTP client for the catalog backend.
///
/// Holds the shared [`Session`] so a 401 on any call tears the session
/// down for every consumer of the same cell.
#[derive(Debug, Clone)]
pub struct HttpCatalogApi {
    base_url: String,
    client: reqwest::Client,
    session: Session,
}

impl HttpCatalogApi {
    /// `base_url` is the server root, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>, session: Session) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Attach the bearer token from the session, if present. Requests
    /// without a token are still sent; the server's 401 then clears the
    /// (already empty) session uniformly.
    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Turn a response into `T`, mapping errors per the taxonomy:
    /// 401 clears the session and yields `Unauthenticated`; other
    /// rejections surface the server's `error` detail when present,
    /// else `fallback`.
    async fn expect_json<T: serde::de::DeserializeOwned>(
        &self,
        response: Response,
        fallback: &str,
    ) -> ClientResult<T> {
        let response = self.check(response, fallback).await?;
        Ok(response.json::<T>().await?)
    }

    async fn check(&self, response: Response, fallback: &str) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!("Received 401, clearing session");
            self.session.clear();
            return Err(ClientError::Unauthenticated);
        }

        let detail = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| body["error"].as_str().map(str::to_string))
            .unwrap_or_else(|| fallback.to_string());

        Err(ClientError::Api {
            status: status.as_u16(),
            detail,
        })
    }

    fn query_params(query: &ProductQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", query.page.to_string()),
            ("size", query.size.to_string()),
        ];
        if let Some(term) = query.term.as_deref().filter(|t| !t.trim().is_empty()) {
            params.push(("q", term.to_string()));
        }
        if let Some(status) = query.status {
            params.push(("status", status.to_string()));
        }
        if let Some(sort) = query.sort.as_deref().filter(|s| !s.is_empty()) {
            params.push(("sort", sort.to_string()));
        }
        params
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    async fn login(&self, credentials: &Credentials) -> ClientResult<LoginInfo> {
        let response = self
            .client
            .post(self.url("/api/auth/login"))
            .json(credentials)
            .send()
            .await?;

        // A 401 here means bad credentials, not a stale session; do not
        // route it through `check` which would treat it as a teardown.
        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(ClientError::Api {
                status: 401,
                detail: "Invalid username or password".to_string(),
            });
        }

        let info: LoginInfo = self.expect_json(response, "Login failed").await?;
        self.session.set(Identity {
            token: info.token.clone(),
            username: info.username.clone(),
            role: info.role.clone(),
        });
        Ok(info)
    }

    async fn list_paged(&self, query: &ProductQuery) -> ClientResult<PageResult<Product>> {
        let request = self
            .client
            .get(self.url("/api/products/paged"))
            .query(&Self::query_params(query));
        let response = self.authorized(request).send().await?;
        self.expect_json(response, "Failed to load products").await
    }

    async fn get_product(&self, id: DbId) -> ClientResult<Product> {
        let request = self.client.get(self.url(&format!("/api/products/{id}")));
        let response = self.authorized(request).send().await?;
        self.expect_json(response, "Failed to load product").await
    }

    async fn create_product(&self, input: &ProductInput) -> ClientResult<Product> {
        let request = self.client.post(self.url("/api/products")).json(input);
        let response = self.authorized(request).send().await?;
        self.expect_json(response, "Failed to create product").await
    }

    async fn update_product(&self, id: DbId, input: &ProductInput) -> ClientResult<Product> {
        let request = self
            .client
            .put(self.url(&format!("/api/products/{id}")))
            .json(input);
        let response = self.authorized(request).send().await?;
        self.expect_json(response, "Failed to update product").await
    }

    async fn delete_product(&self, id: DbId) -> ClientResult<()> {
        let request = self.client.delete(self.url(&format!("/api/products/{id}")));
        let response = self.authorized(request).send().await?;
        self.check(response, "Failed to delete product").await?;
        Ok(())
    }
}
