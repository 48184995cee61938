use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(DealerId);

impl std::fmt::Display for DealerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A dealership as listed by the directory. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dealer {
    pub id: DealerId,
    pub full_name: String,
    pub address: String,
    pub city: String,
    /// Two-letter state code, compared verbatim by the state filter.
    pub st: String,
    pub zip: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long: Option<f64>,
}

impl Dealer {
    pub fn details_path(&self) -> String {
        format!("/dealer/{}", self.id)
    }

    pub fn reviews_path(&self) -> String {
        format!("/dealer/{}/reviews", self.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateFilterOption {
    pub code: &'static str,
    pub name: &'static str,
}

/// Fixed filter choices offered by the dealer list. The empty code means "no filter".
pub static STATE_OPTIONS: [StateFilterOption; 6] = [
    StateFilterOption {
        code: "",
        name: "All States",
    },
    StateFilterOption {
        code: "CA",
        name: "California",
    },
    StateFilterOption {
        code: "TX",
        name: "Texas",
    },
    StateFilterOption {
        code: "NY",
        name: "New York",
    },
    StateFilterOption {
        code: "FL",
        name: "Florida",
    },
    StateFilterOption {
        code: "KS",
        name: "Kansas",
    },
];

pub fn state_option(code: &str) -> Option<&'static StateFilterOption> {
    STATE_OPTIONS.iter().find(|option| option.code == code)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarCatalogEntry {
    #[serde(rename = "CarMake")]
    pub car_make: String,
    #[serde(rename = "CarModel")]
    pub car_model: String,
    #[serde(rename = "CarYear", default, skip_serializing_if = "Option::is_none")]
    pub car_year: Option<i32>,
    #[serde(rename = "CarType", default, skip_serializing_if = "Option::is_none")]
    pub car_type: Option<String>,
}

impl CarCatalogEntry {
    pub fn new(car_make: impl Into<String>, car_model: impl Into<String>) -> Self {
        Self {
            car_make: car_make.into(),
            car_model: car_model.into(),
            car_year: None,
            car_type: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub user_name: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationProfile {
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// In-progress review. The purchase sub-fields are kept as entered even
/// while `purchase` is false.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewDraft {
    pub name: String,
    pub review: String,
    pub purchase: bool,
    pub purchase_date: String,
    pub car_make: String,
    pub car_model: String,
    pub car_year: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSubmission {
    #[serde(flatten)]
    pub draft: ReviewDraft,
    pub dealership: DealerId,
}
