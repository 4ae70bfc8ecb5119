//! Storage key derivation.
//!
//! Key format: `{year}/{month}/{basename}.jpg`, where `month` is zero-padded and
//! `basename` is the file name with its final extension removed.

use chrono::Datelike;
use imgdrop_core::constants::OUTPUT_EXTENSION;
use std::fmt;

/// Path under which a normalized image is stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey(String);

impl StorageKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strip the final `.ext` from a file name. A name without a dot is kept whole.
fn strip_extension(filename: &str) -> &str {
    match filename.rsplit_once('.') {
        Some((base, _)) => base,
        None => filename,
    }
}

/// Derive the storage key for `filename` uploaded on `date`.
///
/// Pure function of its inputs: the same (date, filename) always yields the same key.
/// The caller passes the already lower-cased, directory-free file name.
pub fn derive_storage_key<D: Datelike>(date: &D, filename: &str) -> StorageKey {
    StorageKey(format!(
        "{}/{:02}/{}.{}",
        date.year(),
        date.month(),
        strip_extension(filename),
        OUTPUT_EXTENSION
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn test_key_is_date_partitioned() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let key = derive_storage_key(&date, "holiday.jpeg");
        assert_eq!(key.as_str(), "2024/03/holiday.jpg");
    }

    #[test]
    fn test_png_source_gets_jpg_key() {
        let date = NaiveDate::from_ymd_opt(2024, 11, 1).unwrap();
        let key = derive_storage_key(&date, "logo.png");
        assert_eq!(key.as_str(), "2024/11/logo.jpg");
    }

    #[test]
    fn test_only_final_extension_is_stripped() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        let key = derive_storage_key(&date, "archive.tar.png");
        assert_eq!(key.as_str(), "2025/01/archive.tar.jpg");
    }

    #[test]
    fn test_name_without_dot_kept_whole() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 9).unwrap();
        assert_eq!(derive_storage_key(&date, "jpg").as_str(), "2025/06/jpg.jpg");
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 23, 59, 59).unwrap();
        let first = derive_storage_key(&now, "photo.jpg");
        let second = derive_storage_key(&now, "photo.jpg");
        assert_eq!(first, second);
        assert_eq!(first.to_string(), "2026/10/photo.jpg");
    }
}
