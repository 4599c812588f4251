//! Tests for the media model

use super::*;
use crate::error::{Error, Result};
use crate::fetch::MediaFetcher;
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Serves a fixed record for one code and fails for everything else
struct StubFetcher {
    code: &'static str,
    fresh: Media,
    calls: AtomicUsize,
}

impl StubFetcher {
    fn new(code: &'static str, fresh: Media) -> Self {
        Self {
            code,
            fresh,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MediaFetcher for StubFetcher {
    async fn fetch_media_by_code(&self, code: &str) -> Result<Media> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if code == self.code {
            Ok(self.fresh.clone())
        } else {
            Err(Error::not_found(code))
        }
    }
}

fn stale(code: &str) -> Media {
    Media {
        code: code.to_string(),
        id: "42".to_string(),
        media_type: TYPE_IMAGE.to_string(),
        likes_count: 1,
        ..Media::default()
    }
}

fn fresh(code: &str) -> Media {
    Media {
        code: code.to_string(),
        id: "42".to_string(),
        media_type: TYPE_VIDEO.to_string(),
        media_url: "http://v/1.mp4".to_string(),
        caption: "updated".to_string(),
        likes_count: 100,
        comments_count: 4,
        date: 1_500_000_000,
        owner: Account {
            id: "9".to_string(),
            username: "u".to_string(),
            ..Account::default()
        },
        ..Media::default()
    }
}

#[test]
fn test_update_replaces_whole_record() {
    let fetcher = StubFetcher::new("ABC", fresh("ABC"));
    let mut media = stale("ABC");

    tokio_test::block_on(media.update(&fetcher));

    assert_eq!(media, fresh("ABC"));
    assert_eq!(fetcher.calls(), 1);
}

#[test]
fn test_update_failure_leaves_record_untouched() {
    let fetcher = StubFetcher::new("ABC", fresh("ABC"));
    let mut media = stale("XYZ");

    tokio_test::block_on(media.update(&fetcher));

    assert_eq!(media, stale("XYZ"));
    assert_eq!(fetcher.calls(), 1);
}

#[test]
fn test_update_without_code_does_not_fetch() {
    let fetcher = StubFetcher::new("", fresh("ABC"));
    let mut media = Media::default();

    tokio_test::block_on(media.update(&fetcher));

    assert_eq!(media, Media::default());
    assert_eq!(fetcher.calls(), 0);
}

#[tokio::test]
async fn test_update_through_trait_object() {
    let fetcher: Box<dyn MediaFetcher> = Box::new(StubFetcher::new("ABC", fresh("ABC")));
    let mut media = stale("ABC");

    media.update(fetcher.as_ref()).await;

    assert_eq!(media.caption, "updated");
}

#[test]
fn test_type_helpers() {
    let mut media = Media::default();
    assert!(!media.is_image());
    assert!(!media.is_video());

    media.media_type = TYPE_VIDEO.to_string();
    assert!(media.is_video());

    media.media_type = TYPE_IMAGE.to_string();
    assert!(media.is_image());
}

#[test]
fn test_taken_at() {
    let media = Media {
        date: 1_500_000_000,
        ..Media::default()
    };
    assert_eq!(
        media.taken_at(),
        Some(Utc.with_ymd_and_hms(2017, 7, 14, 2, 40, 0).unwrap())
    );

    assert_eq!(Media::default().taken_at(), None);

    let far = Media {
        date: u64::MAX,
        ..Media::default()
    };
    assert_eq!(far.taken_at(), None);
}

#[test]
fn test_permalink() {
    assert_eq!(
        stale("BaW0x1").permalink().as_deref(),
        Some("https://www.instagram.com/p/BaW0x1/")
    );
    assert_eq!(Media::default().permalink(), None);
}

#[test]
fn test_account_is_empty() {
    assert!(Account::default().is_empty());
    assert!(!Account {
        private: true,
        ..Account::default()
    }
    .is_empty());
}

#[test]
fn test_media_serializes_type_field() {
    let value = serde_json::to_value(fresh("ABC")).unwrap();
    assert_eq!(value["type"], "video");
    assert_eq!(value["owner"]["username"], "u");

    let back: Media = serde_json::from_value(value).unwrap();
    assert_eq!(back, fresh("ABC"));
}
