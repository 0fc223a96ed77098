use crate::domain::constants::FALLBACK_JUZ;
use crate::domain::models::{Ayah, JuzInfo, PageInfo, SurahInfo};
use std::collections::HashSet;

/// Ayahs printed on `page`, in dataset order.
pub fn page_ayahs(ayahs: &[Ayah], page: i64) -> impl Iterator<Item = &Ayah> + '_ {
    ayahs.iter().filter(move |a| a.page == page)
}

pub fn format_ayah_line(a: &Ayah) -> String {
    format!(
        "ID {} Sura {} Aya {} Page {}",
        a.id, a.sura_no, a.aya_no, a.page
    )
}

pub fn page_lines(ayahs: &[Ayah], page: i64) -> impl Iterator<Item = String> + '_ {
    page_ayahs(ayahs, page).map(format_ayah_line)
}

pub fn surahs(ayahs: &[Ayah]) -> Vec<SurahInfo> {
    let mut seen = HashSet::new();
    ayahs
        .iter()
        .filter(|a| seen.insert(a.sura_no))
        .map(|a| SurahInfo {
            number: a.sura_no,
            name_en: a.sura_name_en.clone(),
            name_ar: a.sura_name_ar.clone(),
            start_page: a.page,
        })
        .collect()
}

pub fn juzs(ayahs: &[Ayah]) -> Vec<JuzInfo> {
    let mut seen = HashSet::new();
    ayahs
        .iter()
        .filter(|a| seen.insert(a.juz()))
        .map(|a| JuzInfo {
            number: a.juz(),
            start_page: a.page,
        })
        .collect()
}

/// Summary of one page. An empty page reports no surah and juz 1.
pub fn page_info(ayahs: &[Ayah], page: i64) -> PageInfo {
    let mut on_page = page_ayahs(ayahs, page);
    let first = on_page.next();
    PageInfo {
        page,
        ayah_count: first.map_or(0, |_| 1 + on_page.count()),
        surah_name_ar: first.map(|a| a.sura_name_ar.clone()).unwrap_or_default(),
        juz: first.map_or(FALLBACK_JUZ, Ayah::juz),
    }
}
