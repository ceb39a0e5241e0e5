use serde::{Deserialize, Serialize};

/// Descriptions longer than this are collapsed behind "Show more".
pub const DESCRIPTION_CHAR_LIMIT: usize = 150;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: i64,
    pub name: String,
    pub description: String,

    pub place_name: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,

    pub lat: f64,
    pub lng: f64,

    // Media
    pub image_url: String,
    #[serde(default)]
    pub detail_images: Vec<String>,
    #[serde(default)]
    pub floor_plan_images: Vec<String>,
    pub video_url: Option<String>,
    pub brochure_url: Option<String>,

    pub price_range: Option<PriceRange>,
    pub landmark: Option<String>,
    #[serde(default)]
    pub schools: Vec<String>,
    #[serde(default)]
    pub hospitals: Vec<String>,

    // Missing means visible; only an explicit `false` hides a listing.
    #[serde(default)]
    pub show: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl Listing {
    pub fn is_visible(&self) -> bool {
        self.show != Some(false)
    }

    pub fn has_long_description(&self) -> bool {
        self.description.chars().count() > DESCRIPTION_CHAR_LIMIT
    }

    /// Collapsed form of the description: the first `limit` characters
    /// followed by an ellipsis, or the whole text when it already fits.
    pub fn description_preview(&self, limit: usize) -> String {
        match self.description.char_indices().nth(limit) {
            Some((cut, _)) => format!("{}...", &self.description[..cut]),
            None => self.description.clone(),
        }
    }

    pub fn map_embed_url(&self) -> String {
        format!(
            "https://maps.google.com/maps?q={},{}&t=&z=15&ie=UTF8&iwloc=A&output=embed",
            self.lat, self.lng
        )
    }
}

impl PriceRange {
    pub fn display(&self) -> String {
        if self.min == self.max {
            format!("${}", group_thousands(self.min))
        } else {
            format!(
                "${} – ${}",
                group_thousands(self.min),
                group_thousands(self.max)
            )
        }
    }
}

/// 1234567 -> "1,234,567"
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
