//! HTTP 传输层
//!
//! `Transport` 是对浏览器 `fetch` 的最小抽象：发出一个请求，拿回状态码和文本响应体。
//! URL 拼接、错误映射等逻辑都在 `crate::api` 中，这里不做任何解释。

use gloo_net::http::Request;
use kudos_shared::protocol::HttpMethod;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

use crate::error::{ApiError, ApiResult};

/// 通用 HTTP 请求结构
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(url: impl Into<String>, method: HttpMethod) -> Self {
        Self {
            url: url.into(),
            method,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    /// 按名称（不区分大小写）查找请求头
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

/// 通用 HTTP 响应结构
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    /// 检查响应是否成功 (2xx)
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 网络传输特性
///
/// (?Send) 是因为浏览器环境下的 future 不是 Send 的
#[async_trait::async_trait(?Send)]
pub trait Transport {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse>;
}

// =========================================================
// 实现层: 浏览器 fetch
// =========================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait::async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse> {
        let mut builder = match req.method {
            HttpMethod::Get => Request::get(&req.url),
            HttpMethod::Post => Request::post(&req.url),
        };

        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let status_text = response.status_text();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(HttpResponse {
            status,
            status_text,
            body,
        })
    }
}

// =========================================================
// 测试工具: MockTransport
// =========================================================

#[cfg(test)]
enum MockReply {
    Response(HttpResponse),
    NetworkFailure(String),
}

#[cfg(test)]
pub struct MockTransport {
    replies: RefCell<HashMap<String, MockReply>>,
    /// 记录发出的请求
    pub requests: RefCell<Vec<HttpRequest>>,
}

#[cfg(test)]
impl MockTransport {
    pub fn new() -> Self {
        Self {
            replies: RefCell::new(HashMap::new()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn mock_json(&self, url: &str, status: u16, body: serde_json::Value) {
        self.mock_text(url, status, status_text_for(status), &body.to_string());
    }

    pub fn mock_text(&self, url: &str, status: u16, status_text: &str, body: &str) {
        self.replies.borrow_mut().insert(
            url.to_string(),
            MockReply::Response(HttpResponse {
                status,
                status_text: status_text.to_string(),
                body: body.to_string(),
            }),
        );
    }

    pub fn mock_network_failure(&self, url: &str, message: &str) {
        self.replies
            .borrow_mut()
            .insert(url.to_string(), MockReply::NetworkFailure(message.to_string()));
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.borrow().last().cloned()
    }
}

#[cfg(test)]
fn status_text_for(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        400 => "Bad Request",
        401 => "Unauthorized",
        409 => "Conflict",
        500 => "Internal Server Error",
        _ => "",
    }
}

#[cfg(test)]
#[async_trait::async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse> {
        self.requests.borrow_mut().push(req.clone());

        match self.replies.borrow().get(&req.url) {
            Some(MockReply::Response(response)) => Ok(response.clone()),
            Some(MockReply::NetworkFailure(message)) => Err(ApiError::Network(message.clone())),
            None => Ok(HttpResponse {
                status: 404,
                status_text: "Not Found".to_string(),
                body: "Not Found".to_string(),
            }),
        }
    }
}
