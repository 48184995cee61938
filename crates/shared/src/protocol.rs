use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{CarCatalogEntry, Dealer};

pub const GET_DEALERS_PATH: &str = "/djangoapp/get_dealers/";
pub const GET_CARS_PATH: &str = "/djangoapp/get_cars/";
pub const LOGIN_PATH: &str = "/djangoapp/login/";
pub const REGISTER_PATH: &str = "/djangoapp/register/";
pub const ADD_REVIEW_PATH: &str = "/djangoapp/add_review/";

/// Host location requested after a successful login or registration.
pub const HOME_LOCATION: &str = "/";

/// Reads an absent or `null` collection as empty.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DealersResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub dealers: Vec<Dealer>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CarCatalogResponse {
    #[serde(rename = "CarModels", default, deserialize_with = "null_as_empty")]
    pub car_models: Vec<CarCatalogEntry>,
}

/// Body shape of a rejected request; every field is optional on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn message(self) -> Option<String> {
        self.error.filter(|message| !message.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_collection_keys_decode_as_empty() {
        let dealers: DealersResponse =
            serde_json::from_str(r#"{"status":200}"#).expect("decode");
        assert!(dealers.dealers.is_empty());

        let cars: CarCatalogResponse = serde_json::from_str("{}").expect("decode");
        assert!(cars.car_models.is_empty());
    }

    #[test]
    fn null_collections_decode_as_empty() {
        let dealers: DealersResponse =
            serde_json::from_str(r#"{"status":200,"dealers":null}"#).expect("decode");
        assert!(dealers.dealers.is_empty());

        let cars: CarCatalogResponse =
            serde_json::from_str(r#"{"CarModels":null}"#).expect("decode");
        assert!(cars.car_models.is_empty());
    }

    #[test]
    fn dealer_decodes_with_extra_and_missing_optional_fields() {
        let raw = r#"{"status":200,"dealers":[{"id":2,"city":"Los Angeles","state":"California",
            "st":"CA","address":"456 Sunset Blvd","zip":"90028","lat":34.05,"long":-118.24,
            "short_name":"LA Auto","full_name":"Los Angeles Auto Center"},
            {"id":3,"city":"Austin","st":"TX","address":"1 Main","zip":"73301",
            "full_name":"Austin Cars","rating":5}]}"#;
        let body: DealersResponse = serde_json::from_str(raw).expect("decode");
        assert_eq!(body.dealers.len(), 2);
        assert_eq!(body.dealers[0].short_name.as_deref(), Some("LA Auto"));
        assert_eq!(body.dealers[1].state, None);
        assert_eq!(body.dealers[1].details_path(), "/dealer/3");
        assert_eq!(body.dealers[1].reviews_path(), "/dealer/3/reviews");
    }

    #[test]
    fn error_body_ignores_empty_messages() {
        let empty: ErrorBody = serde_json::from_str(r#"{"error":""}"#).expect("decode");
        assert_eq!(empty.message(), None);

        let set: ErrorBody =
            serde_json::from_str(r#"{"error":"Already Registered"}"#).expect("decode");
        assert_eq!(set.message().as_deref(), Some("Already Registered"));
    }
}
