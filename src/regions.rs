/// 國家顯示名稱 → trends24 路徑片段
///
/// 空字串代表全球頁（直接打 base URL）
pub const COUNTRY_CODES: &[(&str, &str)] = &[
    ("Worldwide", ""),
    ("United States", "united-states"),
    ("United Kingdom", "united-kingdom"),
    ("India", "india"),
    ("Canada", "canada"),
    ("Australia", "australia"),
    ("Japan", "japan"),
    ("Germany", "germany"),
    ("France", "france"),
    ("Brazil", "brazil"),
    ("Spain", "spain"),
    ("Italy", "italy"),
    ("Netherlands", "netherlands"),
    ("South Korea", "south-korea"),
    ("Mexico", "mexico"),
    ("Argentina", "argentina"),
    ("Russia", "russia"),
    ("Turkey", "turkey"),
    ("Indonesia", "indonesia"),
    ("Saudi Arabia", "saudi-arabia"),
    ("Singapore", "singapore"),
    ("Thailand", "thailand"),
    ("Malaysia", "malaysia"),
    ("South Africa", "south-africa"),
    ("New Zealand", "new-zealand"),
    ("Ireland", "ireland"),
    ("Sweden", "sweden"),
    ("Norway", "norway"),
    ("Denmark", "denmark"),
    ("Finland", "finland"),
];

/// 查詢國家（忽略大小寫），回傳正規的顯示名稱與路徑片段
pub fn lookup(country: &str) -> Option<(&'static str, &'static str)> {
    let country = country.trim();
    COUNTRY_CODES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(country))
        .copied()
}

/// 查詢國家對應的路徑片段（忽略大小寫）
pub fn slug_for(country: &str) -> Option<&'static str> {
    lookup(country).map(|(_, slug)| slug)
}

/// 所有可選的國家顯示名稱
pub fn country_names() -> impl Iterator<Item = &'static str> {
    COUNTRY_CODES.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_lookup() {
        assert_eq!(slug_for("India"), Some("india"));
        assert_eq!(slug_for("United States"), Some("united-states"));
        assert_eq!(slug_for("Worldwide"), Some(""));
    }

    #[test]
    fn test_slug_lookup_case_insensitive() {
        assert_eq!(slug_for("india"), Some("india"));
        assert_eq!(slug_for("  SOUTH KOREA "), Some("south-korea"));
    }

    #[test]
    fn test_unknown_country() {
        assert_eq!(slug_for("Atlantis"), None);
        assert_eq!(slug_for(""), None);
    }

    #[test]
    fn test_country_names_complete() {
        let names: Vec<_> = country_names().collect();
        assert_eq!(names.len(), 30);
        assert_eq!(names[0], "Worldwide");
    }
}
