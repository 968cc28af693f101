#![allow(dead_code)]

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Mutex;

use tempfile::TempDir;

static ENV_LOCK: Mutex<()> = Mutex::new(());

pub const HEADER: &str =
    "OBJECTID,ACCIDENT_DATE,ACCIDENT_TIME,ACCIDENT_TYPE,LIGHT_CONDITION,ALCOHOL_RELATED,TOTAL_PERSONS";

/// Two accidents on consecutive days, one by day and one after dark.
pub const TWO_ACCIDENTS: &str = "\
OBJECTID,ACCIDENT_DATE,ACCIDENT_TIME,ACCIDENT_TYPE,LIGHT_CONDITION,ALCOHOL_RELATED,TOTAL_PERSONS
1,2014-05-01,08.00.00,COLLISION,DAY,NO,2
2,2014-05-02,20.00.00,COLLISION,DARK,YES,3
";

/// A small mixed sample spanning several days, hours and categories.
pub const SAMPLE: &str = "\
OBJECTID,ACCIDENT_DATE,ACCIDENT_TIME,ACCIDENT_TYPE,LIGHT_CONDITION,ALCOHOL_RELATED,TOTAL_PERSONS,SPEED_ZONE
10,2014-05-01,08.00.00,COLLISION,DAY,NO,2,60 km/hr
11,2014-05-01,08.30.00,STRUCK PEDESTRIAN,DAY,NO,1,50 km/hr
12,2014-05-02,20.00.00,COLLISION,DARK,YES,3,100 km/hr
13,2014-05-03,20.15.00,NO COLLISION,DARK,NO,4,80 km/hr
14,2014-05-04,06.45.00,COLLISION,DUSK/DAWN,YES,2,60 km/hr
15,2014-05-05,23.59.59,STRUCK PEDESTRIAN,DARK,NO,1,40 km/hr
";

/// A file written into its own temporary directory.
pub struct FixtureFile {
    _dir: TempDir,
    pub path: PathBuf,
}

impl FixtureFile {
    pub fn new(name: &str, content: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write fixture");
        Self { _dir: dir, path }
    }
}

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}
