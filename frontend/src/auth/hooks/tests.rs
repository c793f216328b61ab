use super::*;
use crate::api::FetchHttpClient;
use crate::auth::repository::HttpUserRepository;
use crate::auth::service::AuthServiceAdapter;
use crate::auth::service::tests::{MockAuthService, login_result_for};
use crate::web::MockTransport;
use serde_json::json;
use std::cell::RefCell;

// =========================================================
// 辅助工具
// =========================================================

/// 记录每一次发布的状态
struct RecordingSink<T> {
    states: RefCell<Vec<RequestState<T>>>,
}

impl<T: Clone> RecordingSink<T> {
    fn new() -> Rc<Self> {
        Rc::new(Self {
            states: RefCell::new(Vec::new()),
        })
    }

    fn history(&self) -> Vec<RequestState<T>> {
        self.states.borrow().clone()
    }

    fn last(&self) -> RequestState<T> {
        self.states.borrow().last().cloned().unwrap_or_default()
    }
}

impl<T> StateSink<T> for RecordingSink<T> {
    fn publish(&self, state: RequestState<T>) {
        self.states.borrow_mut().push(state);
    }
}

fn credentials() -> LoginCredentials {
    LoginCredentials::new("test@example.com", "password123")
}

fn john() -> RegisterUserPayload {
    RegisterUserPayload::new("John Doe", "john@example.com", "ValidPassword123!")
}

fn invalid_credentials() -> ApiError {
    ApiError::Server {
        status: 401,
        message: "Invalid credentials".to_string(),
    }
}

// =========================================================
// RequestState
// =========================================================

#[test]
fn test_request_state_accessors_are_exclusive() {
    let idle: RequestState<u8> = RequestState::default();
    assert_eq!(idle, RequestState::Idle);
    assert!(!idle.is_loading());

    let loading: RequestState<u8> = RequestState::Loading;
    assert!(loading.is_loading());
    assert_eq!(loading.error(), None);
    assert_eq!(loading.data(), None);

    let done = RequestState::Succeeded(7u8);
    assert!(done.is_success());
    assert_eq!(done.data(), Some(&7));
    assert_eq!(done.error(), None);

    let failed: RequestState<u8> = RequestState::Failed("boom".to_string());
    assert_eq!(failed.error(), Some("boom"));
    assert_eq!(failed.data(), None);
    assert!(!failed.is_success());
}

#[test]
fn test_failure_message_uses_fallback_for_empty_message() {
    let err = ApiError::Network(String::new());
    assert_eq!(failure_message(&err, LOGIN_FALLBACK_ERROR), LOGIN_FALLBACK_ERROR);

    let err = ApiError::Network("Failed to fetch".to_string());
    assert_eq!(failure_message(&err, LOGIN_FALLBACK_ERROR), "Failed to fetch");
}

// =========================================================
// LoginFlow
// =========================================================

#[tokio::test]
async fn test_login_success_records_data() {
    let service = Rc::new(MockAuthService::new());
    let sink = RecordingSink::<LoginResult>::new();
    let flow = LoginFlow::new(LoginUseCase::new(service.clone()), sink.clone());

    let result = flow.login(credentials()).await.unwrap();

    assert_eq!(result, login_result_for("test@example.com"));
    assert_eq!(*service.login_calls.borrow(), vec![credentials()]);
    assert_eq!(
        sink.history(),
        vec![RequestState::Loading, RequestState::Succeeded(result)]
    );
}

#[tokio::test]
async fn test_login_failure_records_error_and_returns_it() {
    let service = Rc::new(MockAuthService::new());
    service.fail_login(invalid_credentials());
    let sink = RecordingSink::<LoginResult>::new();
    let flow = LoginFlow::new(LoginUseCase::new(service.clone()), sink.clone());

    let err = flow.login(credentials()).await.unwrap_err();

    assert_eq!(err, invalid_credentials());
    let last = sink.last();
    assert!(!last.is_loading());
    assert_eq!(last.error(), Some("Invalid credentials"));
    assert_eq!(last.data(), None);
}

#[tokio::test]
async fn test_loading_is_visible_only_while_request_in_flight() {
    let service = Rc::new(MockAuthService::new());
    let sink = RecordingSink::<LoginResult>::new();
    let observed = Rc::new(RefCell::new(Vec::new()));
    {
        let sink = sink.clone();
        let observed = observed.clone();
        service.on_call(move || observed.borrow_mut().push(sink.last().is_loading()));
    }
    let flow = LoginFlow::new(LoginUseCase::new(service.clone()), sink.clone());

    assert!(!sink.last().is_loading());
    flow.login(credentials()).await.unwrap();

    assert_eq!(*observed.borrow(), vec![true]);
    assert!(!sink.last().is_loading());
}

#[tokio::test]
async fn test_retrigger_after_failure_clears_error() {
    let service = Rc::new(MockAuthService::new());
    service.fail_login(invalid_credentials());
    let sink = RecordingSink::<LoginResult>::new();
    let flow = LoginFlow::new(LoginUseCase::new(service.clone()), sink.clone());

    let _ = flow.login(credentials()).await;
    assert!(sink.last().error().is_some());

    let service_ok = Rc::new(MockAuthService::new());
    let flow = LoginFlow::new(LoginUseCase::new(service_ok), sink.clone());
    flow.login(credentials()).await.unwrap();

    let history = sink.history();
    assert_eq!(history.len(), 4);
    assert_eq!(history[2], RequestState::Loading);
    assert!(history[3].is_success());
    assert_eq!(history[3].error(), None);
}

// =========================================================
// RegistrationFlow
// =========================================================

#[tokio::test]
async fn test_registration_success_marks_success() {
    let service = Rc::new(MockAuthService::new());
    let sink = RecordingSink::<User>::new();
    let flow = RegistrationFlow::new(RegisterUserUseCase::new(service.clone()), sink.clone());

    flow.submit(john()).await;

    let last = sink.last();
    assert!(last.is_success());
    assert!(!last.is_loading());
    assert_eq!(last.error(), None);
    let user = last.data().unwrap();
    assert!(!user.id.is_empty());
    assert_eq!(user.name.as_deref(), Some("John Doe"));
    assert_eq!(user.email, "john@example.com");
}

#[tokio::test]
async fn test_registration_failure_is_recorded_not_raised() {
    let service = Rc::new(MockAuthService::new());
    service.fail_register(ApiError::Server {
        status: 409,
        message: "Email already registered".to_string(),
    });
    let sink = RecordingSink::<User>::new();
    let flow = RegistrationFlow::new(RegisterUserUseCase::new(service.clone()), sink.clone());

    flow.submit(john()).await;

    let last = sink.last();
    assert!(!last.is_loading());
    assert!(!last.is_success());
    assert_eq!(last.error(), Some("Email already registered"));
    assert_eq!(
        sink.history().first(),
        Some(&RequestState::Loading)
    );
}

#[tokio::test]
async fn test_registration_passes_exact_field_values() {
    let service = Rc::new(MockAuthService::new());
    let flow = RegistrationFlow::new(RegisterUserUseCase::new(service.clone()), RecordingSink::<User>::new());

    flow.submit(john()).await;

    let calls = service.register_calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].name, "John Doe");
    assert_eq!(calls[0].email, "john@example.com");
    assert_eq!(calls[0].password, "ValidPassword123!");
}

#[tokio::test]
async fn test_rapid_double_submit_fires_twice() {
    let service = Rc::new(MockAuthService::new());
    let sink = RecordingSink::<User>::new();
    let flow = RegistrationFlow::new(RegisterUserUseCase::new(service.clone()), sink.clone());

    futures::join!(flow.submit(john()), flow.submit(john()));

    assert_eq!(service.register_calls.borrow().len(), 2);
    assert!(sink.last().is_success());
}

// =========================================================
// 端到端：hook → 用例 → 适配器 → 仓储 → HTTP 客户端
// =========================================================

fn wired_login_use_case(transport: MockTransport) -> LoginUseCase {
    let http = FetchHttpClient::with_transport(transport, "http://localhost:3001");
    let service = AuthServiceAdapter::new(HttpUserRepository::new(http));
    LoginUseCase::new(Rc::new(service))
}

#[tokio::test]
async fn test_login_against_401_shows_backend_message() {
    let transport = MockTransport::new();
    transport.mock_json(
        "http://localhost:3001/users/login",
        401,
        json!({ "message": "Invalid credentials" }),
    );
    let sink = RecordingSink::<LoginResult>::new();
    let flow = LoginFlow::new(wired_login_use_case(transport), sink.clone());

    let outcome = flow
        .login(LoginCredentials::new("test@example.com", "wrongpassword"))
        .await;

    assert!(outcome.is_err());
    assert_eq!(sink.last().error(), Some("Invalid credentials"));
}

#[tokio::test]
async fn test_login_against_200_returns_token() {
    let transport = MockTransport::new();
    transport.mock_json(
        "http://localhost:3001/users/login",
        200,
        json!({
            "user": { "id": "123", "email": "test@example.com", "name": "Test User" },
            "token": "jwt.token.here"
        }),
    );
    let sink = RecordingSink::<LoginResult>::new();
    let flow = LoginFlow::new(wired_login_use_case(transport), sink.clone());

    let result = flow.login(credentials()).await.unwrap();

    assert_eq!(result.token, "jwt.token.here");
    assert_eq!(sink.last().data().map(|r| r.user.id.as_str()), Some("123"));
}

#[tokio::test]
async fn test_signal_sink_holds_final_state() {
    let service = Rc::new(MockAuthService::new());
    let state = RwSignal::new(RequestState::<LoginResult>::Idle);
    let flow = LoginFlow::new(LoginUseCase::new(service), state);

    flow.login(credentials()).await.unwrap();

    let final_state = state.get_untracked();
    assert!(final_state.is_success());
    assert!(!final_state.is_loading());
}
