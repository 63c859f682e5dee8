//! Client against the development backend over real HTTP

use chatgate::views::{render, AuthenticatedScreen, Screen, View};
use chatgate::{
    build_router, AppState, Backend, ChatApp, ClientConfig, ClientError, Credentials, GateState,
    HttpBackend, MessageList, Route, ServerConfig,
};

async fn spawn_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = build_router(AppState::new(ServerConfig::default()));

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}

fn client(url: &str) -> ChatApp<HttpBackend> {
    let backend = HttpBackend::new(&ClientConfig::new(url)).unwrap();
    ChatApp::with_messages(backend, url, MessageList::default())
}

#[tokio::test]
async fn test_login_reaches_authenticated_views() {
    let url = spawn_backend().await;
    let app = client(&url);

    app.login("Kuba").await.unwrap();
    assert_eq!(app.gate_state().await, GateState::Authenticated);

    let screen = app.screen().await;
    assert!(matches!(
        screen,
        Screen::Authenticated(AuthenticatedScreen {
            route: Route::Dashboard,
            ..
        })
    ));
    assert!(render(&screen).iter().any(|line| line.contains("Dashboard")));
}

#[tokio::test]
async fn test_unknown_user_stays_on_login() {
    let url = spawn_backend().await;
    let app = client(&url);

    let err = app.login("Nobody").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(app.gate_state().await, GateState::Unauthenticated);

    let screen = app.screen().await;
    assert!(screen.is_login());
    assert!(screen.login_error().is_some());
}

#[tokio::test]
async fn test_posted_message_is_appended_and_listed() {
    let url = spawn_backend().await;
    let app = client(&url);

    app.login("Kuba").await.unwrap();
    app.navigate("/messages").await;
    app.set_draft("siema").await;
    app.submit_message().await.unwrap();

    match app.screen().await {
        Screen::Authenticated(AuthenticatedScreen {
            view: View::Messages { rows, draft, .. },
            ..
        }) => {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].author, "Kuba");
            assert_eq!(rows[0].content, "siema");
            assert!(draft.is_empty());
        }
        other => panic!("expected messages view, got {:?}", other),
    }

    // A second client sees it after a refresh
    let other = client(&url);
    other.login("Michal").await.unwrap();
    assert_eq!(other.refresh_messages().await.unwrap(), 1);
}

#[tokio::test]
async fn test_messages_rejected_without_valid_token() {
    let url = spawn_backend().await;
    let backend = HttpBackend::new(&ClientConfig::new(url.as_str())).unwrap();

    let token = backend.login(&Credentials::new("Kuba")).await.unwrap();
    assert!(backend.fetch_messages(&token).await.unwrap().is_empty());

    let forged = chatgate::Token::new("forged").unwrap();
    let err = backend.fetch_messages(&forged).await.unwrap_err();
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    // Bind then drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let app = client(&format!("http://{}", addr));
    let err = app.login("Kuba").await.unwrap_err();

    assert!(err.is_transport());
    assert!(!matches!(err, ClientError::Rejected { .. }));
    assert_eq!(app.gate_state().await, GateState::Unauthenticated);
}
