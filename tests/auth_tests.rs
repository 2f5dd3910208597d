//
//  antarctica-cli
//  tests/auth_tests.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use antarctica_cli::api::{AntarcticaClient, ApiError};
use antarctica_cli::auth::Session;
use mockito::{Matcher, Server};

#[tokio::test]
async fn test_login_installs_session() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/login")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("login".into(), "penguin".into()),
            Matcher::UrlEncoded("password".into(), "fish".into()),
        ]))
        .with_body(r#"{"ok":true,"user":{"id":7,"login":"penguin","name":"Penguin","token":"abc"}}"#)
        .create_async()
        .await;

    let client = AntarcticaClient::new(&server.url()).unwrap();
    let user = client.authorize("penguin", "fish").await.unwrap();

    assert_eq!(user.id, 7);
    assert_eq!(user.display_name, "Penguin");
    assert_eq!(client.session().await, Some(Session::new(7, "abc")));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_login_followed_by_section_call_uses_token() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/login")
        .with_body(r#"{"ok":true,"user":{"id":7,"login":"penguin","name":"Penguin","token":"abc"}}"#)
        .create_async()
        .await;
    let list = server
        .mock("GET", "/api/user/7/repos/abc")
        .with_body(r#"{"ok":true,"repos":[]}"#)
        .create_async()
        .await;

    let client = AntarcticaClient::new(&server.url()).unwrap();
    client.authorize("penguin", "fish").await.unwrap();
    assert!(client.repositories().list_all().await.unwrap().is_empty());

    list.assert_async().await;
}

#[tokio::test]
async fn test_user_without_token_is_missing_fields() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/login")
        .with_body(r#"{"ok":true,"user":{"id":7,"login":"penguin","name":"Penguin"}}"#)
        .create_async()
        .await;

    let client = AntarcticaClient::new(&server.url()).unwrap();
    let result = client.authorize("penguin", "fish").await;

    assert!(matches!(result, Err(ApiError::MissingFields)));
    assert_eq!(client.session().await, None);
}

#[tokio::test]
async fn test_incomplete_user_is_missing_fields_whatever_ok_says() {
    for body in [
        r#"{"ok":false,"user":{"id":7,"login":"penguin","name":"Penguin"}}"#,
        r#"{"user":{"id":7,"login":"penguin","name":"Penguin"}}"#,
        r#"{"ok":true,"user":{"login":"penguin","name":"Penguin","token":"abc"}}"#,
    ] {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/login")
            .with_body(body)
            .create_async()
            .await;

        let client = AntarcticaClient::new(&server.url()).unwrap();
        let result = client.authorize("penguin", "fish").await;

        assert!(matches!(result, Err(ApiError::MissingFields)), "{body}: {result:?}");
        assert_eq!(client.session().await, None);
    }
}

#[tokio::test]
async fn test_rejected_credentials_are_wrong_login() {
    for body in [
        r#"{"ok":false,"error":{"code":5,"text":"wrong password"}}"#,
        r#"{"ok":false,"error":{"code":-3,"text":"locked"}}"#,
    ] {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/login")
            .with_body(body)
            .create_async()
            .await;

        let client = AntarcticaClient::new(&server.url()).unwrap();
        let result = client.authorize("penguin", "nope").await;
        assert!(matches!(result, Err(ApiError::WrongLogin)), "{body}");
    }
}

#[tokio::test]
async fn test_failed_login_keeps_previous_session() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/login")
        .with_body(r#"{"ok":false,"error":{"code":5,"text":"wrong password"}}"#)
        .create_async()
        .await;

    let client = AntarcticaClient::new(&server.url())
        .unwrap()
        .with_session(Session::new(3, "old"));
    assert!(client.authorize("penguin", "nope").await.is_err());

    assert_eq!(client.session().await, Some(Session::new(3, "old")));
}

#[tokio::test]
async fn test_unreachable_server_is_no_response() {
    // nothing listens on the discard port
    let client = AntarcticaClient::new("http://127.0.0.1:9").unwrap();
    let result = client.authorize("penguin", "fish").await;

    assert!(matches!(result, Err(ApiError::NoResponse)));
}
