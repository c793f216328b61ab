//! 错误类型模块
//!
//! 网络层以下的所有失败都归一为 `ApiError`，逐层用 `?` 向上传播，
//! 只有 hooks 层把它转换为用户可见的消息字符串。

use thiserror::Error;

/// 后端返回合法 JSON 但没有 `message` 字段时使用的消息
pub const UNKNOWN_SERVER_ERROR: &str = "An unknown error occurred.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// 网络层失败（连接中断、CORS 等），保留底层消息
    #[error("{0}")]
    Network(String),
    /// 非 2xx 响应，响应体是 JSON
    #[error("{message}")]
    Server { status: u16, message: String },
    /// 非 2xx 响应，响应体不是 JSON
    #[error("Server error: {status} {status_text}")]
    Unstructured { status: u16, status_text: String },
    /// 请求体序列化失败
    #[error("Failed to encode request: {0}")]
    Encode(String),
    /// 2xx 响应体与预期结构不符
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP 状态码（仅对后端返回的错误有意义）
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } | ApiError::Unstructured { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_displays_backend_message_verbatim() {
        let err = ApiError::Server {
            status: 401,
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid credentials");
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn unstructured_error_synthesizes_status_line() {
        let err = ApiError::Unstructured {
            status: 502,
            status_text: "Bad Gateway".to_string(),
        };
        assert_eq!(err.to_string(), "Server error: 502 Bad Gateway");
    }

    #[test]
    fn network_error_keeps_underlying_message() {
        let err = ApiError::Network("Failed to fetch".to_string());
        assert_eq!(err.to_string(), "Failed to fetch");
        assert_eq!(err.status(), None);
    }
}
