//! Email sign-ups for the premium photo feature. Kept in memory only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subscriber {
    pub id: u64,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subscription {
    Created(Subscriber),
    AlreadySubscribed(Subscriber),
}

#[derive(Debug, Default)]
pub struct SubscriberRegistry {
    subscribers: RwLock<Vec<Subscriber>>,
}

/// Body of `POST /api/subscribe`.
#[derive(Debug, Deserialize, Validate)]
pub struct SubscribeRequest {
    #[validate(email)]
    pub email: String,
}

/// Trims and lower-cases an address. Does not check that it is an email.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

impl SubscribeRequest {
    /// The normalized address, or `None` if it is not a valid email.
    pub fn into_valid_email(mut self) -> Option<String> {
        self.email = normalize_email(&self.email);
        self.validate().ok()?;
        Some(self.email)
    }
}

impl SubscriberRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an already normalized address. Re-subscribing returns the
    /// existing record.
    pub async fn subscribe(&self, email: String) -> Subscription {
        let mut subscribers = self.subscribers.write().await;
        if let Some(existing) = subscribers.iter().find(|s| s.email == email) {
            return Subscription::AlreadySubscribed(existing.clone());
        }
        let subscriber = Subscriber {
            id: subscribers.len() as u64 + 1,
            email,
            created_at: Utc::now(),
        };
        subscribers.push(subscriber.clone());
        Subscription::Created(subscriber)
    }

    /// Newest first.
    pub async fn list(&self) -> Vec<Subscriber> {
        let subscribers = self.subscribers.read().await;
        subscribers.iter().rev().cloned().collect()
    }
}
