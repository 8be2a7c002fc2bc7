//! Opaque id generation.
//!
//! Ids have the shape `<unix-millis>-<sequence>-<random>`. The sequence is a
//! process-wide counter, so two ids minted in the same millisecond still
//! differ; the random suffix keeps ids distinct across process restarts that
//! reuse a timestamp.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

const RANDOM_SUFFIX_CHARS: usize = 8;

/// Returns a fresh opaque id.
pub fn next_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis());
    let sequence = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let random = Uuid::new_v4().simple().to_string();

    format!("{millis}-{sequence}-{}", &random[..RANDOM_SUFFIX_CHARS])
}
