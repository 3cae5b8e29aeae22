use playfab_client::prelude::*;

fn config_with_key() -> Config {
    Config::empty()
        .with_title_id("ABCD")
        .with_developer_secret_key("SECRET")
}

#[test]
fn test_auth_type_header_names() {
    assert_eq!(AuthType::None.header_name(), None);
    assert_eq!(AuthType::LoginSession.header_name(), Some("X-Authorization"));
    assert_eq!(AuthType::DevSecretKey.header_name(), Some("X-SecretKey"));
    assert_eq!(AuthType::EntityToken.header_name(), Some("X-EntityToken"));
}

#[test]
fn test_auth_type_display() {
    assert_eq!(AuthType::EntityToken.to_string(), "EntityToken");
    assert_eq!(AuthType::default(), AuthType::None);
}

#[test]
fn test_collect_from_context_and_config() {
    let context = AuthenticationContext::new()
        .with_session_ticket("TICKET")
        .with_entity_token("TOKEN");
    let sources = CredentialSources::collect(&context, &config_with_key());
    assert!(sources.session_ticket);
    assert!(sources.secret_key);
    assert!(sources.entity_token);
    assert_eq!(AuthType::select(sources), AuthType::EntityToken);
}

#[test]
fn test_secret_key_beats_session_ticket() {
    let context = AuthenticationContext::new().with_session_ticket("TICKET");
    let sources = CredentialSources::collect(&context, &config_with_key());
    assert_eq!(AuthType::select(sources), AuthType::DevSecretKey);
}

#[test]
fn test_resolve_credential_none_has_no_header() {
    let context = AuthenticationContext::new().with_entity_token("TOKEN");
    let credential = resolve_credential(AuthType::None, &context, &config_with_key()).unwrap();
    assert!(credential.is_none());
}

#[test]
fn test_resolve_credential_entity_token() {
    let context = AuthenticationContext::new().with_entity_token("TOKEN");
    let credential = resolve_credential(AuthType::EntityToken, &context, &Config::empty())
        .unwrap()
        .unwrap();
    assert_eq!(credential.header, HEADER_ENTITY_TOKEN);
    assert_eq!(credential.value, "TOKEN");
}

#[test]
fn test_resolve_credential_missing_values() {
    let context = AuthenticationContext::new();
    let config = Config::empty();

    match resolve_credential(AuthType::LoginSession, &context, &config) {
        Err(AppError::NotLoggedIn(msg)) => {
            assert_eq!(msg, "Must be logged in to call this method")
        }
        other => panic!("Unexpected result: {other:?}"),
    }
    assert!(matches!(
        resolve_credential(AuthType::DevSecretKey, &context, &config),
        Err(AppError::DeveloperKeyNotSet)
    ));
    assert!(matches!(
        resolve_credential(AuthType::EntityToken, &context, &config),
        Err(AppError::NotLoggedIn(_))
    ));
}

#[test]
fn test_empty_token_counts_as_missing() {
    let context = AuthenticationContext::new().with_entity_token("");
    assert!(!context.is_entity_logged_in());
    assert!(matches!(
        resolve_credential(AuthType::EntityToken, &context, &Config::empty()),
        Err(AppError::NotLoggedIn(_))
    ));
}

#[test]
fn test_apply_login_stores_all_credentials() {
    let login: LoginResult = serde_json::from_value(json!({
        "PlayFabId": "MASTER1",
        "SessionTicket": "TICKET",
        "NewlyCreated": true,
        "EntityToken": {
            "Entity": {"Id": "TPA1", "Type": "title_player_account"},
            "EntityToken": "TOKEN"
        }
    }))
    .unwrap();

    let mut context = AuthenticationContext::new();
    context.apply_login(&login);

    assert_eq!(context.session_ticket(), Some("TICKET"));
    assert_eq!(context.entity_token(), Some("TOKEN"));
    assert_eq!(context.playfab_id.as_deref(), Some("MASTER1"));
    assert_eq!(
        context.entity,
        Some(EntityKey::new("TPA1", "title_player_account"))
    );
}

#[test]
fn test_apply_entity_token_keeps_session_ticket() {
    let mut context = AuthenticationContext::new().with_session_ticket("TICKET");
    context.apply_entity_token(&EntityTokenResponse {
        entity: None,
        entity_token: Some("TOKEN".to_string()),
        token_expiration: None,
    });
    assert!(context.is_client_logged_in());
    assert!(context.is_entity_logged_in());
}

#[test]
fn test_forget_all_credentials() {
    let mut context = AuthenticationContext::new()
        .with_session_ticket("TICKET")
        .with_entity_token("TOKEN")
        .with_entity(EntityKey::new("ID", "title"));
    context.forget_all_credentials();
    assert_eq!(context, AuthenticationContext::default());
}

#[test]
fn test_shared_context_is_shared() {
    let shared = AuthenticationContext::new().into_shared();
    let other = shared.clone();
    tokio_test::block_on(async {
        other.write().await.entity_token = Some("TOKEN".to_string());
        assert!(shared.read().await.is_entity_logged_in());
    });
}
