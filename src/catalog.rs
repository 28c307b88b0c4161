//! Regions and video categories offered by the filter pickers.

pub const DEFAULT_REGION: &str = "TN";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub code: &'static str,
    pub name: &'static str,
}

/// A YouTube video category. `id` is `None` for the "All" entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: Option<&'static str>,
    pub name: &'static str,
}

#[rustfmt::skip]
pub const REGIONS: &[Region] = &[
    Region { code: "TN", name: "Tunisia" },
    Region { code: "US", name: "United States" },
    Region { code: "GB", name: "United Kingdom" },
    Region { code: "FR", name: "France" },
    Region { code: "DE", name: "Germany" },
    Region { code: "CA", name: "Canada" },
    Region { code: "JP", name: "Japan" },
    Region { code: "IN", name: "India" },
    Region { code: "BR", name: "Brazil" },
];

#[rustfmt::skip]
pub const CATEGORIES: &[Category] = &[
    Category { id: None, name: "All" },
    Category { id: Some("1"), name: "Film & Animation" },
    Category { id: Some("2"), name: "Autos & Vehicles" },
    Category { id: Some("10"), name: "Music" },
    Category { id: Some("15"), name: "Pets & Animals" },
    Category { id: Some("17"), name: "Sports" },
    Category { id: Some("18"), name: "Short Movies" },
    Category { id: Some("19"), name: "Travel & Events" },
    Category { id: Some("20"), name: "Gaming" },
    Category { id: Some("21"), name: "Videoblogging" },
    Category { id: Some("22"), name: "People & Blogs" },
    Category { id: Some("23"), name: "Comedy" },
    Category { id: Some("24"), name: "Entertainment" },
    Category { id: Some("25"), name: "News & Politics" },
    Category { id: Some("26"), name: "Howto & Style" },
    Category { id: Some("27"), name: "Education" },
    Category { id: Some("28"), name: "Science & Technology" },
    Category { id: Some("29"), name: "Nonprofits & Activism" },
];

pub fn region_index(code: &str) -> Option<usize> {
    REGIONS
        .iter()
        .position(|r| r.code.eq_ignore_ascii_case(code))
}

pub fn category_index(id: Option<&str>) -> Option<usize> {
    CATEGORIES.iter().position(|c| c.id == id)
}

/// Display name for a region code. Codes outside the catalog are shown as-is.
pub fn region_label(code: &str) -> String {
    region_index(code)
        .map(|i| REGIONS[i].name.to_string())
        .unwrap_or_else(|| code.to_uppercase())
}

/// Display name for a category id. Unknown ids are shown as `#<id>`.
pub fn category_label(id: Option<&str>) -> String {
    match category_index(id) {
        Some(i) => CATEGORIES[i].name.to_string(),
        None => format!("#{}", id.unwrap_or_default()),
    }
}
