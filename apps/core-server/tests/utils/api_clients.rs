use std::sync::OnceLock;

use serde::de::DeserializeOwned;
use serde_json::Value;

use self::courses::CoursesApi;
use self::other::OtherApi;

pub mod other;

pub fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(|| reqwest::ClientBuilder::new().build().unwrap())
}

#[derive(Clone)]
pub struct HttpClient {
    base_url: String,
}

impl HttpClient {
    pub async fn get(&self, url: &str) -> Response {
        self.get_with_headers(url, &[]).await
    }

    pub async fn get_with_headers(&self, url: &str, headers: &[(&str, &str)]) -> Response {
        let url = format!("{}{url}", self.base_url);

        let mut request = http_client().get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        Response {
            resp: request.send().await.unwrap(),
        }
    }

    pub async fn post(&self, url: &str, body: impl Into<Option<Value>>) -> Response {
        let url = format!("{}{url}", self.base_url);

        let resp = http_client()
            .post(url)
            .json(&body.into())
            .send()
            .await
            .unwrap();

        Response { resp }
    }
}

pub struct Response {
    resp: reqwest::Response,
}

impl Response {
    pub fn status(&self) -> u16 {
        self.resp.status().into()
    }

    pub fn header(&self, name: &str) -> Option<String> {
        self.resp
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(ToOwned::to_owned)
    }

    pub async fn json<T: DeserializeOwned>(self) -> T {
        let full = self.resp.bytes().await.unwrap();
        serde_json::from_slice(&full).unwrap()
    }

    pub async fn json_value(self) -> Value {
        self.json().await
    }
}

pub struct Client {
    pub courses: CoursesApi,
    pub other: OtherApi,
}

impl Client {
    pub fn new(base_url: String) -> Self {
        let client = HttpClient { base_url };

        Self {
            courses: CoursesApi::new(client.clone()),
            other: OtherApi::new(client),
        }
    }
}
