//! Live tests against the real Mailgun API.
//!
//! All tests are `#[ignore]` because they require network access and a real
//! account. Configure through `.env` or the environment:
//! - `MAILGUN_API_KEY`
//! - `MAILGUN_DOMAIN` (optional)
//! - `MAILGUN_SANDBOX` (optional)
//! - `MAILGUN_TEST_RECIPIENT` (required by the send test)
//!
//! Run with:
//! ```bash
//! cargo test --test live_integration -- --ignored --nocapture
//! ```

use std::env;

use mailgun_sdk::client::MailgunClientBuilder;
use mailgun_sdk::prelude::*;

async fn live_client() -> MailgunClient {
    dotenvy::dotenv().ok();
    MailgunClientBuilder::from_env()
        .expect("MAILGUN_API_KEY must be set")
        .build()
        .await
        .expect("client should build against the live API")
}

#[tokio::test]
#[ignore]
async fn test_live_domains() {
    let client = live_client().await;
    let domains = client.all_domains(true).await.unwrap();
    println!("Resolved domain: {}", client.domain());
    println!("Account domains: {:?}", domains.iter().map(|d| &d.name).collect::<Vec<_>>());
    assert!(domains.iter().any(|d| d.name == client.domain()));
}

#[tokio::test]
#[ignore]
async fn test_live_bad_key() {
    dotenvy::dotenv().ok();
    let err = MailgunClient::new("key-definitely-invalid", None, false)
        .await
        .unwrap_err();
    assert!(err.is_credentials());
}

#[tokio::test]
#[ignore]
async fn test_live_send() {
    let client = live_client().await;
    let Ok(recipient) = env::var("MAILGUN_TEST_RECIPIENT") else {
        println!("MAILGUN_TEST_RECIPIENT not set, skipping");
        return;
    };

    let sender = format!("sdk-test@{}", client.domain());
    let message = Message::new(sender, recipient, "mailgun-sdk live test", "Sent by the live test suite.");
    let ack = client.send_mail(&message).await.unwrap();
    println!("Ack: {}", ack);
    assert!(ack.get("id").is_some());
}
