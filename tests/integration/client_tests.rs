use crate::common::{endpoint, mock_client, ok_body};
use mockito::Matcher;
use playfab_client::prelude::*;

#[tokio::test]
async fn test_login_then_get_account_info() {
    let mut server = mockito::Server::new_async().await;
    let login_mock = server
        .mock("POST", endpoint("/Client/LoginWithCustomID"))
        .match_header("X-Authorization", Matcher::Missing)
        .match_body(Matcher::PartialJson(
            json!({"CustomId": "player-1", "TitleId": "ABCD"}),
        ))
        .with_status(200)
        .with_body(ok_body(json!({
            "PlayFabId": "MASTER1",
            "SessionTicket": "TICKET",
            "NewlyCreated": false,
            "EntityToken": {"EntityToken": "PLAYER_TOKEN"}
        })))
        .create_async()
        .await;
    let info_mock = server
        .mock("POST", endpoint("/Client/GetAccountInfo"))
        .match_header("X-Authorization", "TICKET")
        .match_header("X-EntityToken", Matcher::Missing)
        .with_status(200)
        .with_body(ok_body(json!({
            "AccountInfo": {"PlayFabId": "MASTER1", "Username": "player"}
        })))
        .create_async()
        .await;

    let client = mock_client(&server, Config::empty().with_title_id("ABCD"));
    client
        .login_with_custom_id(LoginWithCustomIdRequest::new("player-1"))
        .await
        .unwrap();
    assert!(client.is_client_logged_in().await);
    assert!(client.is_entity_logged_in().await);

    let info = client
        .get_account_info(GetAccountInfoRequest::new())
        .await
        .unwrap();
    assert_eq!(
        info.account_info.and_then(|a| a.username).as_deref(),
        Some("player")
    );

    login_mock.assert_async().await;
    info_mock.assert_async().await;
}

#[tokio::test]
async fn test_client_title_data_with_player_context() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", endpoint("/Client/GetTitleData"))
        .match_header("X-Authorization", "PLAYER_TICKET")
        .match_body(Matcher::Json(json!({"Keys": ["motd"]})))
        .with_status(200)
        .with_body(ok_body(json!({"Data": {"motd": "welcome"}})))
        .create_async()
        .await;

    let client = mock_client(&server, Config::empty().with_title_id("ABCD"));
    let player = AuthenticationContext::new()
        .with_session_ticket("PLAYER_TICKET")
        .into_shared();

    let result = client
        .get_client_title_data(
            GetTitleDataRequest::new()
                .with_keys(["motd"])
                .with_authentication_context(player),
        )
        .await
        .unwrap();

    assert_eq!(result.data["motd"], "welcome");
    assert!(!client.is_client_logged_in().await);
    mock.assert_async().await;
}

/// Logs in against a real title; set PLAYFAB_TITLE_ID to run
#[tokio::test]
#[ignore]
async fn test_login_with_custom_id_live() {
    setup_logger();
    let client = PlayFabClient::new(Config::new()).expect("client");
    let result = client
        .login_with_custom_id(LoginWithCustomIdRequest::new("playfab-client-test").with_create_account(true))
        .await;

    match result {
        Ok(login) => {
            info!("Logged in as {:?}", login.playfab_id);
            assert!(client.is_client_logged_in().await);
        }
        Err(e) => panic!("Login failed: {e}"),
    }
}
