/// Page looked up when no page argument is given.
pub const DEFAULT_PAGE: i64 = 2;

/// Asset location inside the Android project layout, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "app/src/main/assets/data/hafs_smart_v8.json";

pub const DATA_PATH_ENV: &str = "HAFS_PAGES_DATA";

/// Juz reported for an empty page or a record without `jozz`.
pub const FALLBACK_JUZ: i64 = 1;
