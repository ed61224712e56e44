use http::header;
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use url::Url;

use crate::error::{ApiError, Error, Result};

static USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

/// The name of the header carrying the application id. Every request needs it,
/// so it is installed as a default header on the underlying client.
pub(crate) static APP_ID_HEADER: &str = "app-id";

/// Client is a wrapper around `reqwest::Client` which provides automatically
/// prepending the base url and attaching the `app-id` header.
#[derive(Debug, Clone)]
pub(crate) struct Client {
    base_url: Url,
    inner: reqwest::Client,
}

#[derive(Clone)]
pub(crate) enum Body {
    Empty,
    Json(serde_json::Value),
}

impl Client {
    /// Creates a new client.
    pub(crate) fn new<U, A>(base_url: U, app_id: A) -> Result<Self>
    where
        U: AsRef<str>,
        A: Into<String>,
    {
        let mut base_url = Url::parse(base_url.as_ref()).map_err(Error::InvalidUrl)?;
        // The API lives under a path prefix (/data/v1). `Url::join` drops the
        // last path segment unless the base ends with a slash.
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let app_id = app_id.into();
        let mut default_headers = header::HeaderMap::new();
        let app_id_header_value =
            header::HeaderValue::from_str(&app_id).map_err(|_e| Error::InvalidAppId)?;
        default_headers.insert(APP_ID_HEADER, app_id_header_value);

        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(default_headers)
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(Error::HttpClientSetup)?;

        Ok(Self {
            base_url,
            inner: http_client,
        })
    }

    async fn execute<P>(&self, method: http::Method, path: P, body: Body) -> Result<Response>
    where
        P: AsRef<str>,
    {
        let url = self
            .base_url
            .join(path.as_ref().trim_start_matches('/'))
            .map_err(Error::InvalidUrl)?;

        let mut req = self.inner.request(method.clone(), url);
        match body {
            Body::Empty => {}
            Body::Json(value) => req = req.json(&value),
        }

        let res = self
            .inner
            .execute(req.build().map_err(Error::Http)?)
            .await
            .map(|res| Response::new(res, method, path.as_ref().to_string()))
            .map_err(Error::Http)?;

        Ok(res)
    }

    pub(crate) async fn get<S>(&self, path: S) -> Result<Response>
    where
        S: AsRef<str>,
    {
        self.execute(http::Method::GET, path.as_ref(), Body::Empty)
            .await
    }

    pub(crate) async fn post<S, P>(&self, path: S, payload: P) -> Result<Response>
    where
        S: AsRef<str>,
        P: Serialize,
    {
        self.execute(
            http::Method::POST,
            path,
            Body::Json(serde_json::to_value(payload).map_err(Error::Serialize)?),
        )
        .await
    }

    pub(crate) async fn put<S, P>(&self, path: S, payload: P) -> Result<Response>
    where
        S: AsRef<str>,
        P: Serialize,
    {
        self.execute(
            http::Method::PUT,
            path,
            Body::Json(serde_json::to_value(payload).map_err(Error::Serialize)?),
        )
        .await
    }

    pub(crate) async fn delete<S>(&self, path: S) -> Result<()>
    where
        S: AsRef<str>,
    {
        self.execute(http::Method::DELETE, path, Body::Empty)
            .await?
            .check_error()
            .await?;
        Ok(())
    }
}

#[derive(Debug)]
pub(crate) struct Response {
    inner: reqwest::Response,
    method: http::Method,
    path: String,
}

impl Response {
    pub(crate) fn new(inner: reqwest::Response, method: http::Method, path: String) -> Self {
        Self {
            inner,
            method,
            path,
        }
    }

    pub(crate) async fn json<T: DeserializeOwned>(self) -> Result<T> {
        self.check_error()
            .await?
            .inner
            .json::<T>()
            .await
            .map_err(Error::Deserialize)
    }

    pub(crate) async fn check_error(self) -> Result<Response> {
        let status = self.inner.status();
        if !status.is_success() {
            // Try to decode the error
            let e = match self.inner.json::<ApiError>().await {
                Ok(mut e) => {
                    e.status = status.as_u16();
                    e.method = self.method;
                    e.path = self.path;
                    Error::Api(e)
                }
                Err(_e) => {
                    // Decoding failed, we still want an ApiError
                    Error::Api(ApiError::new(status.as_u16(), self.method, self.path, None))
                }
            };
            return Err(e);
        }

        Ok(self)
    }
}

impl From<Response> for reqwest::Response {
    fn from(res: Response) -> Self {
        res.inner
    }
}

#[cfg(test)]
mod test {
    use httpmock::prelude::*;
    use serde_json::json;

    use crate::{Client, Error};

    #[tokio::test]
    async fn test_app_id_header_sent() -> Result<(), Box<dyn std::error::Error>> {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/user/61f0287b9a72f34d1e2a5f9b")
                .header("app-id", "627a6b9eaf56419de59a26b9");
            then.status(200).json_body(json!({
                "id": "61f0287b9a72f34d1e2a5f9b",
                "firstName": "Sara",
                "lastName": "Andersen",
                "picture": "https://randomuser.me/api/portraits/women/58.jpg",
                "gender": "female",
                "email": "sara.andersen@example.com",
                "dateOfBirth": "1996-04-30T19:26:49.610Z",
                "phone": 92694011
            }));
        });

        let client = Client::builder()
            .no_env()
            .with_url(server.base_url())
            .with_app_id("627a6b9eaf56419de59a26b9")
            .build()?;

        let user = client.users.get("61f0287b9a72f34d1e2a5f9b").await?;
        assert_eq!(user.first_name, "Sara");
        mock.assert_hits_async(1).await;
        Ok(())
    }

    #[tokio::test]
    async fn test_error_decoded_from_body() -> Result<(), Box<dyn std::error::Error>> {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/user/nope");
            then.status(404).json_body(json!({ "error": "RESOURCE_NOT_FOUND" }));
        });

        let client = Client::builder()
            .no_env()
            .with_url(server.base_url())
            .with_app_id("627a6b9eaf56419de59a26b9")
            .build()?;

        match client.users.get("nope").await {
            Err(Error::Api(e)) => {
                assert_eq!(e.status, 404);
                assert_eq!(e.error.as_deref(), Some("RESOURCE_NOT_FOUND"));
                assert_eq!(e.path, "/user/nope");
            }
            res => panic!("Expected API error, got {:?}", res),
        }

        mock.assert_hits_async(1).await;
        Ok(())
    }

    #[tokio::test]
    async fn test_error_with_undecodable_body() -> Result<(), Box<dyn std::error::Error>> {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/user/nope");
            then.status(500).body("internal error");
        });

        let client = Client::builder()
            .no_env()
            .with_url(server.base_url())
            .with_app_id("627a6b9eaf56419de59a26b9")
            .build()?;

        match client.users.get("nope").await {
            Err(Error::Api(e)) => {
                assert_eq!(e.status, 500);
                assert_eq!(e.error, None);
            }
            res => panic!("Expected API error, got {:?}", res),
        }

        mock.assert_hits_async(1).await;
        Ok(())
    }
}
