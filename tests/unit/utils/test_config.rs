use playfab_client::utils::config::{get_env_non_empty, get_env_or_default, get_env_or_none};
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("PLAYFAB_TEST_DEFAULT_EXISTING", "42");
    }
    let result: i32 = get_env_or_default("PLAYFAB_TEST_DEFAULT_EXISTING", 0);
    assert_eq!(result, 42);
    unsafe {
        env::remove_var("PLAYFAB_TEST_DEFAULT_EXISTING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    let result: u64 = get_env_or_default("PLAYFAB_TEST_DEFAULT_MISSING", 30);
    assert_eq!(result, 30);
}

#[test]
fn test_get_env_or_default_with_invalid_value() {
    unsafe {
        env::set_var("PLAYFAB_TEST_DEFAULT_INVALID", "not_a_number");
    }
    let result: u32 = get_env_or_default("PLAYFAB_TEST_DEFAULT_INVALID", 7);
    assert_eq!(result, 7);
    unsafe {
        env::remove_var("PLAYFAB_TEST_DEFAULT_INVALID");
    }
}

#[test]
fn test_get_env_or_none() {
    unsafe {
        env::set_var("PLAYFAB_TEST_NONE_EXISTING", "60");
    }
    let present: Option<u32> = get_env_or_none("PLAYFAB_TEST_NONE_EXISTING");
    let missing: Option<u32> = get_env_or_none("PLAYFAB_TEST_NONE_MISSING");
    assert_eq!(present, Some(60));
    assert_eq!(missing, None);
    unsafe {
        env::remove_var("PLAYFAB_TEST_NONE_EXISTING");
    }
}

#[test]
fn test_get_env_non_empty_treats_blank_as_absent() {
    unsafe {
        env::set_var("PLAYFAB_TEST_NON_EMPTY_BLANK", "   ");
        env::set_var("PLAYFAB_TEST_NON_EMPTY_SET", " ABCD ");
    }
    assert_eq!(get_env_non_empty("PLAYFAB_TEST_NON_EMPTY_BLANK"), None);
    assert_eq!(
        get_env_non_empty("PLAYFAB_TEST_NON_EMPTY_SET").as_deref(),
        Some("ABCD")
    );
    assert_eq!(get_env_non_empty("PLAYFAB_TEST_NON_EMPTY_MISSING"), None);
    unsafe {
        env::remove_var("PLAYFAB_TEST_NON_EMPTY_BLANK");
        env::remove_var("PLAYFAB_TEST_NON_EMPTY_SET");
    }
}
