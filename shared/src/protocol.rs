use crate::{LoginCredentials, LoginResult, RegisterUserPayload, User};
use serde::{Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The URL path, relative to the API base URL.
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
}

// =========================================================
// Request Definitions
// =========================================================

/// Register a new user
impl ApiRequest for RegisterUserPayload {
    type Response = User;
    const PATH: &'static str = "/users/register";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// Exchange credentials for a user and a bearer token
impl ApiRequest for LoginCredentials {
    type Response = LoginResult;
    const PATH: &'static str = "/users/login";
    const METHOD: HttpMethod = HttpMethod::Post;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_endpoints_are_posts_under_users() {
        assert_eq!(RegisterUserPayload::PATH, "/users/register");
        assert_eq!(RegisterUserPayload::METHOD, HttpMethod::Post);
        assert_eq!(LoginCredentials::PATH, "/users/login");
        assert_eq!(LoginCredentials::METHOD, HttpMethod::Post);
    }

    #[test]
    fn method_names_are_uppercase() {
        assert_eq!(HttpMethod::Get.as_str(), "GET");
        assert_eq!(HttpMethod::Post.as_str(), "POST");
    }
}
