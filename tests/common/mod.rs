//! Shared helpers for pairforge integration tests
//!
//! Every test gets its own temporary storage root so saves, listings and
//! label files never leak between tests.

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use pairforge::{FsStore, OpenStore, Record};
use tempfile::TempDir;

/// A store rooted in a fresh temporary directory.
pub struct TestStore {
    pub dir: TempDir,
    pub store: FsStore,
}

impl TestStore {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = FsStore::open_at(dir.path()).expect("open store");
        Self { dir, store }
    }

    /// Open a second handle on the same root.
    pub fn reopen(&self) -> FsStore {
        FsStore::open_at(self.dir.path()).expect("reopen store")
    }
}

/// 2024-06-`day` at hh:mm:ss.
pub fn timestamp(day: u32, h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, day)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

/// A short session transcript with a name, phone, email and date in it.
pub const SESSION_TRANSCRIPT: &str = "\
How have you been sleeping since we last spoke?
Not well. I keep waking up at 3am and thinking about work.

Did you talk to Mary Jones about the schedule?
Yes, she said to email her at mary.j@clinic.org before 6/14/2024.
Can you call the front desk at (555) 010-2233?
I will call them tomorrow.
This last line has no response.
";

pub fn sample_records(tag: &str) -> Vec<Record> {
    vec![
        Record::new("How is work?", "Stressful lately.", tag),
        Record::new("What helps you relax?", "Long walks, mostly.", tag),
        Record::new("Any trouble sleeping?", "Some nights, yes.", tag),
    ]
}
