use chrono::{DateTime, Duration, Utc};

use crate::post::Post;

/// Whether a post is eligible for any listing at the given build instant.
///
/// A draft is never visible, no matter its date. Everything else is visible
/// once its publication instant is within `now + margin` (inclusive); the
/// margin absorbs clock skew so a post scheduled minutes ahead does not
/// force an extra build.
pub fn is_visible(post: &Post, now: DateTime<Utc>, margin: Duration) -> bool {
    if post.draft {
        return false;
    }
    post.published_at <= now + margin
}

/// A non-draft post that is not yet visible. Not an error; it surfaces on a
/// later build once real time passes its threshold.
pub fn is_scheduled(post: &Post, now: DateTime<Utc>, margin: Duration) -> bool {
    !post.draft && post.published_at > now + margin
}
