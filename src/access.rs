// Access-code issuance for new academy accounts.

use chrono::{Datelike, Utc};
use rand::Rng;

const CODE_CHARS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Produces `LOV-<year>-<XXX>` with three random base36 characters.
/// Codes are not checked against already-issued ones; collisions are
/// possible and accepted.
pub fn generate_access_code() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..3)
        .map(|_| CODE_CHARS[rng.gen_range(0..CODE_CHARS.len())] as char)
        .collect();
    format!("LOV-{}-{}", Utc::now().year(), suffix)
}
