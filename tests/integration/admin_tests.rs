use crate::common::{endpoint, error_body, mock_client, ok_body};
use mockito::Matcher;
use playfab_client::prelude::*;

fn admin_config() -> Config {
    Config::empty()
        .with_title_id("ABCD")
        .with_developer_secret_key("SECRET")
}

#[tokio::test]
async fn test_add_news_sends_secret_key() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", endpoint("/Admin/AddNews"))
        .match_query(Matcher::UrlEncoded("sdk".into(), SDK_VERSION.into()))
        .match_header("X-SecretKey", "SECRET")
        .match_header("X-PlayFabSDK", SDK_VERSION)
        .match_header("X-EntityToken", Matcher::Missing)
        .match_header("X-Authorization", Matcher::Missing)
        .match_body(Matcher::Json(json!({"Title": "Patch 1.2", "Body": "New maps"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ok_body(json!({"NewsId": "N1"})))
        .create_async()
        .await;

    let client = mock_client(&server, admin_config());
    let result = client
        .add_news(AddNewsRequest::new("Patch 1.2", "New maps"))
        .await
        .unwrap();

    assert_eq!(result.news_id.as_deref(), Some("N1"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_service_error_is_mapped() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", endpoint("/Admin/GetUserAccountInfo"))
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(error_body(
            400,
            "BadRequest",
            "AccountNotFound",
            1001,
            "User not found",
        ))
        .create_async()
        .await;

    let client = mock_client(&server, admin_config());
    let err = client
        .get_user_account_info(GetUserAccountInfoRequest::new("UNKNOWN"))
        .await
        .unwrap_err();

    match err {
        AppError::Api(e) => {
            assert_eq!(e.code, 400);
            assert_eq!(e.error, "AccountNotFound");
            assert_eq!(e.error_code, 1001);
            assert_eq!(e.error_message, "User not found");
        }
        other => panic!("Unexpected error: {other:?}"),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_non_json_failure_is_unexpected_status() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", endpoint("/Admin/BanUsers"))
        .with_status(502)
        .with_body("Bad Gateway")
        .create_async()
        .await;

    let client = mock_client(&server, admin_config());
    let err = client
        .ban_users(BanUsersRequest::new(vec![BanRequest::new("P1")]))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Unexpected(status) if status.as_u16() == 502));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_set_title_data_with_extra_header() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", endpoint("/Admin/SetTitleData"))
        .match_header("X-Trace-Id", "trace-1")
        .match_body(Matcher::Json(json!({"Key": "motd", "Value": "hello"})))
        .with_status(200)
        .with_body(ok_body(json!({})))
        .create_async()
        .await;

    let client = mock_client(&server, admin_config().with_header("X-Trace-Id", "trace-1"));
    client
        .set_title_data(SetTitleDataRequest::new("motd").with_value("hello"))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_add_user_virtual_currency() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", endpoint("/Admin/AddUserVirtualCurrency"))
        .match_body(Matcher::Json(
            json!({"PlayFabId": "P1", "VirtualCurrency": "GC", "Amount": 50}),
        ))
        .with_status(200)
        .with_body(ok_body(json!({
            "Balance": 150,
            "BalanceChange": 50,
            "PlayFabId": "P1",
            "VirtualCurrency": "GC"
        })))
        .create_async()
        .await;

    let client = mock_client(&server, admin_config());
    let result = client
        .add_user_virtual_currency(AddUserVirtualCurrencyRequest::new("P1", "GC", 50))
        .await
        .unwrap();

    assert_eq!(result.balance, 150);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_master_player_account() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", endpoint("/Admin/DeleteMasterPlayerAccount"))
        .match_body(Matcher::Json(json!({"PlayFabId": "P1", "MetaData": "gdpr"})))
        .with_status(200)
        .with_body(ok_body(json!({"JobReceiptId": "J1", "TitleIds": ["ABCD"]})))
        .create_async()
        .await;

    let client = mock_client(&server, admin_config());
    let result = client
        .delete_master_player_account(
            DeleteMasterPlayerAccountRequest::new("P1").with_meta_data("gdpr"),
        )
        .await
        .unwrap();

    assert_eq!(result.job_receipt_id.as_deref(), Some("J1"));
    assert_eq!(result.title_ids, vec!["ABCD"]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_throttled_client_still_sends_requests() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", endpoint("/Admin/UpdateUserTitleDisplayName"))
        .with_status(200)
        .with_body(ok_body(json!({"DisplayName": "Hero"})))
        .expect(2)
        .create_async()
        .await;

    let config = admin_config().with_rate_limiter(RateLimiterConfig {
        max_requests: 100,
        period_seconds: 1,
        burst_size: 10,
    });
    let client = mock_client(&server, config);
    for _ in 0..2 {
        let result = client
            .update_user_title_display_name(UpdateUserTitleDisplayNameRequest::new("P1", "Hero"))
            .await
            .unwrap();
        assert_eq!(result.display_name.as_deref(), Some("Hero"));
    }

    mock.assert_async().await;
}
