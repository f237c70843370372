//! NaN diagnostic payloads.
//!
//! Every NaN the library itself produces carries a payload in
//! its trailing significand: an FNV-1a hash of the call site
//! that created it, truncated to the payload width of the
//! format. The payload-to-site mapping is kept in a process-wide
//! registry so debug formatting can resolve a payload back to
//! the code that raised it.
//!
//! The registry grows monotonically until process exit, bounded
//! by the number of distinct NaN creation sites. Payloads are
//! truncated hashes, so distinct sites may collide; the first
//! writer wins.

use std::{
    collections::HashMap,
    panic::Location,
    sync::{Mutex, OnceLock, PoisonError},
};

/// The source location that produced a NaN.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Site {
    /// The file the NaN was created in.
    pub file: &'static str,
    /// The line the NaN was created at.
    pub line: u32,
}

static REGISTRY: OnceLock<Mutex<HashMap<u64, Site>>> = OnceLock::new();

fn registry() -> &'static Mutex<HashMap<u64, Site>> {
    REGISTRY.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Hashes the caller's location, truncates it to `mask`, and
/// registers the site under the truncated payload.
#[track_caller]
pub(crate) fn record(mask: u64) -> u64 {
    let loc = Location::caller();
    let payload = fnv1a(loc.file().as_bytes(), loc.line()) & mask;
    let mut map = registry()
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    map.entry(payload).or_insert(Site {
        file: loc.file(),
        line: loc.line(),
    });
    payload
}

/// Resolves a NaN payload back to the site that produced it.
///
/// Returns `None` for payloads this process never produced,
/// e.g. NaNs decoded from the wire.
pub fn lookup(payload: u64) -> Option<Site> {
    let map = registry()
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    map.get(&payload).copied()
}

/// 64-bit FNV-1a over `file` followed by the line number.
const fn fnv1a(file: &[u8], line: u32) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut h = OFFSET;
    let mut i = 0;
    while i < file.len() {
        h ^= file[i] as u64;
        h = h.wrapping_mul(PRIME);
        i += 1;
    }
    let line = line.to_le_bytes();
    let mut i = 0;
    while i < line.len() {
        h ^= line[i] as u64;
        h = h.wrapping_mul(PRIME);
        i += 1;
    }
    h
}
