use playfab_client::prelude::*;

#[test]
fn test_validate_entity_token_response() {
    let response: ValidateEntityTokenResponse = serde_json::from_value(json!({
        "Entity": {"Id": "TPA1", "Type": "title_player_account"},
        "IdentityProvider": "CustomId",
        "Lineage": {"MasterPlayerAccountId": "MASTER1", "TitleId": "ABCD"}
    }))
    .unwrap();

    assert_eq!(response.identity_provider.as_deref(), Some("CustomId"));
    let lineage = response.lineage.unwrap();
    assert_eq!(lineage.master_player_account_id.as_deref(), Some("MASTER1"));
    assert_eq!(lineage.title_id.as_deref(), Some("ABCD"));
}

#[test]
fn test_ban_users_result() {
    let result: BanUsersResult = serde_json::from_value(json!({
        "BanData": [{
            "Active": true,
            "BanId": "B1",
            "Created": "2026-10-19T10:00:00Z",
            "Expires": "2026-10-20T10:00:00Z",
            "PlayFabId": "P1",
            "IPAddress": "10.0.0.1",
            "Reason": "cheating"
        }]
    }))
    .unwrap();

    assert_eq!(result.ban_data.len(), 1);
    let ban = &result.ban_data[0];
    assert!(ban.active);
    assert_eq!(ban.ip_address.as_deref(), Some("10.0.0.1"));
    assert!(ban.expires.unwrap() > ban.created.unwrap());
}

#[test]
fn test_user_account_info_lookup() {
    let result: LookupUserAccountInfoResult = serde_json::from_value(json!({
        "UserInfo": {
            "PlayFabId": "P1",
            "Username": "player",
            "TitleInfo": {"DisplayName": "Player One", "isBanned": false}
        }
    }))
    .unwrap();

    let info = result.user_info.unwrap();
    assert_eq!(info.playfab_id.as_deref(), Some("P1"));
    let title_info = info.title_info.unwrap();
    assert_eq!(title_info.display_name.as_deref(), Some("Player One"));
    assert_eq!(title_info.is_banned, Some(false));
}

#[test]
fn test_virtual_currency_result() {
    let result: ModifyUserVirtualCurrencyResult = serde_json::from_value(json!({
        "Balance": 150,
        "BalanceChange": 50,
        "PlayFabId": "P1",
        "VirtualCurrency": "GC"
    }))
    .unwrap();
    assert_eq!(result.balance, 150);
    assert_eq!(result.balance_change, 50);
}

#[test]
fn test_unknown_fields_are_ignored() {
    let result: GetLanguageListResponse = serde_json::from_value(json!({
        "LanguageList": ["en-US", "fr-FR"],
        "SomethingNew": 1
    }))
    .unwrap();
    assert_eq!(result.language_list, vec!["en-US", "fr-FR"]);
}

#[test]
fn test_list_functions_result() {
    let result: ListFunctionsResult = serde_json::from_value(json!({
        "Functions": [{
            "FunctionName": "grant",
            "FunctionAddress": "https://functions.example.com/api/grant",
            "TriggerType": "HTTP"
        }]
    }))
    .unwrap();
    assert_eq!(result.functions[0].trigger_type.as_deref(), Some("HTTP"));
}

#[test]
fn test_playfab_error_display() {
    let error = PlayFabError {
        code: 401,
        status: "Unauthorized".to_string(),
        error: "NotAuthenticated".to_string(),
        error_code: 1074,
        error_message: "This API method does not allow anonymous callers.".to_string(),
        error_details: None,
    };
    assert_eq!(
        AppError::Api(error).to_string(),
        "playfab error: NotAuthenticated (1074): This API method does not allow anonymous callers."
    );
}
