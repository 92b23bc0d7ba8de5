//! Tests for the Redis-backed code store

use std::sync::Arc;
use std::time::Duration;

use ma_core::services::verification::{CodeStoreConfig, IssueOutcome, VerificationCodeStore};

use ma_core::services::verification::ExpiringKeyValueStore;

use crate::cache::code_store::ttl_from_reply;
use crate::cache::{RedisClient, RedisCodeStore};
use crate::config::CacheConfig;

#[test]
fn test_ttl_reply_mapping() {
    assert_eq!(ttl_from_reply(-2), None);
    assert_eq!(ttl_from_reply(-1), None);
    assert_eq!(ttl_from_reply(0), Some(Duration::ZERO));
    assert_eq!(ttl_from_reply(1500), Some(Duration::from_millis(1500)));
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_issue_and_check_against_redis() {
    let url = std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string());
    let client = RedisClient::new(CacheConfig::new(url)).await.unwrap();
    let config = CodeStoreConfig {
        key_prefix: "medauth:test:code:".to_string(),
        ..CodeStoreConfig::default()
    };
    client.delete("medauth:test:code:redis@clinic.org").await.unwrap();

    let codes = VerificationCodeStore::new(Arc::new(RedisCodeStore::new(client)), config);

    let code = match codes.issue("redis@clinic.org").await.unwrap() {
        IssueOutcome::Issued(code) => code,
        other => panic!("expected a new code, got {:?}", other),
    };
    assert!(matches!(
        codes.issue("redis@clinic.org").await.unwrap(),
        IssueOutcome::Cooldown { .. }
    ));
    assert!(codes.check("redis@clinic.org", code.as_str()).await.unwrap());
    assert!(codes.check("redis@clinic.org", code.as_str()).await.is_err());
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_key_without_expiry_is_replaced_on_issue() {
    let url = std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string());
    let client = RedisClient::new(CacheConfig::new(url)).await.unwrap();
    let key = "medauth:test:code:persistent@clinic.org";
    client.delete(key).await.unwrap();
    client.set_with_expiry(key, "00000000", 60).await.unwrap();
    redis_persist(&client, key).await;

    let store = RedisCodeStore::new(client.clone());
    assert_eq!(store.ttl(key).await.unwrap(), None);
    assert_eq!(client.get(key).await.unwrap(), None);

    let config = CodeStoreConfig {
        key_prefix: "medauth:test:code:".to_string(),
        ..CodeStoreConfig::default()
    };
    let codes = VerificationCodeStore::new(Arc::new(store), config);
    assert!(matches!(
        codes.issue("persistent@clinic.org").await.unwrap(),
        IssueOutcome::Issued(_)
    ));
    let remaining = client.ttl_millis(key).await.unwrap();
    assert!(remaining > 0);
}

async fn redis_persist(client: &RedisClient, key: &str) {
    let url = std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string());
    let mut conn = redis::Client::open(url).unwrap().get_multiplexed_async_connection().await.unwrap();
    let _: i64 = redis::cmd("PERSIST").arg(key).query_async(&mut conn).await.unwrap();
    assert_eq!(client.ttl_millis(key).await.unwrap(), -1);
}
