use serde::Deserialize;

pub const UNKNOWN_PLACE: &str = "Unknown Place";
pub const NO_PIN: &str = "No Pin";

/// One entry of the `/search` response array.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReverseHit {
    pub address: Option<Address>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Address {
    pub postcode: Option<String>,
    pub village: Option<String>,
    pub town: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

impl Address {
    /// Most specific administrative name available.
    pub fn place(&self) -> &str {
        [&self.village, &self.town, &self.city, &self.state]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_PLACE)
    }

    pub fn pin(&self) -> &str {
        self.postcode
            .as_deref()
            .filter(|code| !code.is_empty())
            .unwrap_or(NO_PIN)
    }

    pub fn label(&self) -> String {
        format!("{}, {}", self.place(), self.pin())
    }
}

#[test]
fn address_prefers_village_test() {
    let address = Address {
        village: Some("Lonavala".into()),
        city: Some("Pune".into()),
        postcode: Some("410401".into()),
        ..Default::default()
    };
    assert_eq!(address.label(), "Lonavala, 410401");
}

#[test]
fn address_fallback_test() {
    let address = Address::default();
    assert_eq!(address.label(), "Unknown Place, No Pin");
}
