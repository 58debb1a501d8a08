use crate::models::{BmiResult, Notice, Outcome};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Presentation-side state for the calculator screen
///
/// Holds only the latest outcome (no history) and a notice board whose
/// entries expire on their own after the configured duration.
#[derive(Clone)]
pub struct DisplayState {
    latest: Arc<RwLock<Option<Outcome>>>,
    notices: moka::future::Cache<Uuid, Notice>,
    notice_ttl: Duration,
}

impl DisplayState {
    /// Create display state whose notices live for `notice_duration_secs`
    ///
    /// At most `notice_capacity` notices are kept; beyond that the cache
    /// evicts entries before their time-to-live elapses.
    pub fn new(notice_duration_secs: u64, notice_capacity: u64) -> Self {
        Self::with_notice_ttl(Duration::from_secs(notice_duration_secs), notice_capacity)
    }

    pub fn with_notice_ttl(notice_ttl: Duration, notice_capacity: u64) -> Self {
        let notices = moka::future::CacheBuilder::new(notice_capacity)
            .time_to_live(notice_ttl)
            .build();

        Self {
            latest: Arc::new(RwLock::new(None)),
            notices,
            notice_ttl,
        }
    }

    /// The most recent outcome, if any request has been made
    pub async fn latest(&self) -> Option<Outcome> {
        self.latest.read().await.clone()
    }

    /// Replace the latest outcome with a successful result
    pub async fn record_result(&self, result: BmiResult) {
        *self.latest.write().await = Some(Outcome::Computed(result));
    }

    /// Replace the latest outcome with a rejection and post its notice
    pub async fn record_failure(&self, message: &str) -> Notice {
        let notice = Notice::new(message, self.notice_ttl.as_secs());
        *self.latest.write().await = Some(Outcome::Rejected(notice.clone()));
        self.post_notice(notice.clone()).await;
        notice
    }

    /// Show a notice until its time-to-live elapses
    ///
    /// Nothing tracks the notice after this returns; expiry removes it.
    pub async fn post_notice(&self, notice: Notice) {
        tracing::debug!("Posting notice {} for {:?}", notice.id, self.notice_ttl);
        self.notices.insert(notice.id, notice).await;
    }

    /// Look up a notice that has not yet expired
    pub async fn notice(&self, id: &Uuid) -> Option<Notice> {
        self.notices.get(id).await
    }

    /// Notices still visible, oldest first
    pub fn active_notices(&self) -> Vec<Notice> {
        let mut notices: Vec<Notice> = self.notices.iter().map(|(_, notice)| notice).collect();
        notices.sort_by_key(|notice| notice.created_at);
        notices
    }

    pub fn notice_ttl(&self) -> Duration {
        self.notice_ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BmiCategory;

    fn sample_result() -> BmiResult {
        BmiResult {
            bmi: 22.49,
            category: BmiCategory::Normal,
        }
    }

    #[tokio::test]
    async fn test_latest_starts_empty() {
        let state = DisplayState::new(4, 1024);
        assert!(state.latest().await.is_none());
        assert!(state.active_notices().is_empty());
    }

    #[tokio::test]
    async fn test_latest_is_replaced() {
        let state = DisplayState::new(4, 1024);

        state.record_result(sample_result()).await;
        assert_eq!(state.latest().await, Some(Outcome::Computed(sample_result())));

        let notice = state.record_failure("Please enter height and weight!!").await;
        assert_eq!(state.latest().await, Some(Outcome::Rejected(notice.clone())));
        assert_eq!(notice.expires_in_secs, 4);

        state.record_result(sample_result()).await;
        assert_eq!(state.latest().await, Some(Outcome::Computed(sample_result())));
    }

    #[tokio::test]
    async fn test_failure_posts_notice() {
        let state = DisplayState::new(4, 1024);
        let notice = state.record_failure("키와 몸무게를 입력하세요!!").await;

        let stored = state.notice(&notice.id).await.expect("notice should be visible");
        assert_eq!(stored.message, "키와 몸무게를 입력하세요!!");
        assert_eq!(state.active_notices().len(), 1);
    }

    #[tokio::test]
    async fn test_notice_expires() {
        let state = DisplayState::with_notice_ttl(Duration::from_millis(100), 1024);
        let notice = state.record_failure("gone soon").await;
        assert!(state.notice(&notice.id).await.is_some());

        tokio::time::sleep(Duration::from_millis(300)).await;

        assert!(state.notice(&notice.id).await.is_none());
        assert!(state.active_notices().is_empty());
    }

    #[tokio::test]
    async fn test_notices_within_capacity_survive() {
        let state = DisplayState::new(60, 512);

        for i in 0..200 {
            state.record_failure(&format!("notice {}", i)).await;
        }
        state.notices.run_pending_tasks().await;

        assert_eq!(state.active_notices().len(), 200);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let state = DisplayState::new(4, 1024);
        let other = state.clone();

        other.record_result(sample_result()).await;
        assert!(state.latest().await.is_some());
    }
}
