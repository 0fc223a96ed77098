use crate::domain::constants::FALLBACK_JUZ;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// One entry of the hafs_smart dataset.
///
/// Only `id`, `sura_no`, `aya_no` and `page` are required; the remaining
/// fields are carried by the full asset and default when absent.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Ayah {
    pub id: i64,
    pub sura_no: i64,
    pub aya_no: i64,
    pub page: i64,
    #[serde(default)]
    pub jozz: Option<i64>,
    #[serde(default)]
    pub sura_name_en: String,
    #[serde(default)]
    pub sura_name_ar: String,
    #[serde(default)]
    pub line_start: i64,
    #[serde(default)]
    pub line_end: i64,
    #[serde(default)]
    pub aya_text: String,
    #[serde(default)]
    pub aya_text_emlaey: String,
}

impl Ayah {
    /// Juz of this ayah, or juz 1 when the dataset omits `jozz`.
    pub fn juz(&self) -> i64 {
        self.jozz.unwrap_or(FALLBACK_JUZ)
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct SurahInfo {
    pub number: i64,
    pub name_en: String,
    pub name_ar: String,
    pub start_page: i64,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct JuzInfo {
    pub number: i64,
    pub start_page: i64,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct PageInfo {
    pub page: i64,
    pub ayah_count: usize,
    pub surah_name_ar: String,
    pub juz: i64,
}
