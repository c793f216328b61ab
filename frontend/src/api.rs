use std::rc::Rc;

use kudos_shared::protocol::{ApiRequest, HttpMethod};
use kudos_shared::{BEARER_PREFIX, HEADER_AUTHORIZATION};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::error::{ApiError, ApiResult, UNKNOWN_SERVER_ERROR};
use crate::web::{FetchTransport, HttpRequest, HttpResponse, Transport};

/// 读取当前访问令牌的回调（没有会话时返回 None）
pub type TokenSource = Rc<dyn Fn() -> Option<String>>;

/// JSON over HTTP 客户端
///
/// 每次调用恰好发出一次网络请求：不重试、不超时、不缓存。
#[async_trait::async_trait(?Send)]
pub trait HttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T>;

    async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned;

    /// 按请求类型声明的方法和路径发送
    async fn call<R: ApiRequest>(&self, request: &R) -> ApiResult<R::Response> {
        match R::METHOD {
            HttpMethod::Get => self.get(R::PATH).await,
            HttpMethod::Post => self.post(R::PATH, request).await,
        }
    }
}

pub struct FetchHttpClient<T: Transport = FetchTransport> {
    transport: T,
    base_url: String,
    token_source: Option<TokenSource>,
}

impl FetchHttpClient<FetchTransport> {
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(FetchTransport, base_url)
    }
}

impl<T: Transport> FetchHttpClient<T> {
    pub fn with_transport(transport: T, base_url: &str) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
            token_source: None,
        }
    }

    /// 为后续请求附加 `Authorization: Bearer <token>`
    pub fn with_token_source(mut self, source: TokenSource) -> Self {
        self.token_source = Some(source);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// 拼接完整 URL；base 为空时返回相对路径
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, path: &str, method: HttpMethod) -> HttpRequest {
        let req = HttpRequest::new(self.url(path), method).with_header("Accept", "application/json");

        match self.token_source.as_ref().and_then(|source| source()) {
            Some(token) => req.with_header(HEADER_AUTHORIZATION, &format!("{BEARER_PREFIX}{token}")),
            None => req,
        }
    }

    async fn execute<R: DeserializeOwned>(&self, req: HttpRequest) -> ApiResult<R> {
        let method = req.method.as_str();
        let url = req.url.clone();
        tracing::debug!(method, %url, "sending request");

        let response = self.transport.send(req).await.inspect_err(|e| {
            tracing::warn!(method, %url, error = %e, "request failed before a response");
        })?;

        if !response.ok() {
            let err = error_from_response(&response);
            tracing::warn!(method, %url, status = response.status, error = %err, "request rejected");
            return Err(err);
        }

        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait::async_trait(?Send)]
impl<T: Transport> HttpClient for FetchHttpClient<T> {
    async fn get<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        self.execute(self.request(path, HttpMethod::Get)).await
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> ApiResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        let req = self
            .request(path, HttpMethod::Post)
            .with_header("Content-Type", "application/json")
            .with_body(body);
        self.execute(req).await
    }
}

/// 把非 2xx 响应映射为错误
///
/// - JSON 且带 `message`：使用该消息（数组按 `,` 拼接，如校验错误列表）
/// - JSON 但没有 `message`：通用未知错误
/// - 不是 JSON：`Server error: <status> <statusText>`
fn error_from_response(response: &HttpResponse) -> ApiError {
    match serde_json::from_str::<Value>(&response.body) {
        Ok(body) => {
            let message = body
                .get("message")
                .and_then(message_text)
                .unwrap_or_else(|| UNKNOWN_SERVER_ERROR.to_string());
            ApiError::Server {
                status: response.status,
                message,
            }
        }
        Err(_) => ApiError::Unstructured {
            status: response.status,
            status_text: response.status_text.clone(),
        },
    }
}

/// `message` 字段的文本；null、false、0、空串视为没有消息
fn message_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| match item {
                    Value::Null => String::new(),
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(","),
        ),
        other => Some(other.to_string()),
    }
}
