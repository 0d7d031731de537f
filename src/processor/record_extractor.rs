use crate::models::earthquake::{EarthquakeLookup, EarthquakeRecord};
use crate::models::feature::{Feature, FeatureCollection};
use tracing::{debug, error};

/// Extracts the first earthquake of a GeoJSON feature collection.
///
/// Blank input, malformed JSON, an empty or missing `features` array and
/// mistyped properties all yield [`EarthquakeLookup::NotAvailable`].
pub fn extract_feature(body: &str) -> EarthquakeLookup {
    if body.trim().is_empty() {
        return EarthquakeLookup::NotAvailable;
    }

    // 1. Parse the collection
    let collection: FeatureCollection = match serde_json::from_str(body) {
        Ok(c) => c,
        Err(e) => {
            error!("Problem parsing the earthquake JSON results: {}", e);
            return EarthquakeLookup::NotAvailable;
        }
    };

    // 2. Only the first feature is considered
    let first = match collection.features.into_iter().next() {
        Some(f) => f,
        None => {
            debug!("Feature collection is empty");
            return EarthquakeLookup::NotAvailable;
        }
    };

    let feature: Feature = match serde_json::from_value(first) {
        Ok(f) => f,
        Err(e) => {
            error!("Problem parsing the first earthquake feature: {}", e);
            return EarthquakeLookup::NotAvailable;
        }
    };

    let properties = feature.properties;
    debug!(
        "Event title: {}, Time: {}, Alert: {}",
        properties.title, properties.time, properties.tsunami
    );

    EarthquakeLookup::Found(EarthquakeRecord::new(
        properties.title,
        properties.time,
        properties.tsunami,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_not_available() {
        for body in ["", " ", "\n\t  \r\n"] {
            assert_eq!(extract_feature(body), EarthquakeLookup::NotAvailable);
        }
    }

    #[test]
    fn first_feature_is_extracted_verbatim() {
        let body = r#"{"features":[{"properties":{"title":"M 7.1 - offshore","time":1393290141440,"tsunami":1}}]}"#;
        assert_eq!(
            extract_feature(body),
            EarthquakeLookup::Found(EarthquakeRecord::new("M 7.1 - offshore", 1393290141440, 1))
        );
    }

    #[test]
    fn only_the_first_of_several_features_is_used() {
        let body = r#"{
            "features": [
                {"properties": {"title": "M 7.3 - first", "time": 9007199254740993, "tsunami": 0}},
                {"properties": {"title": "broken", "time": "later"}}
            ]
        }"#;
        let lookup = extract_feature(body);
        let record = lookup.record().unwrap();
        assert_eq!(record.title, "M 7.3 - first");
        assert_eq!(record.time_millis, 9007199254740993);
        assert_eq!(record.tsunami_alert, 0);
    }

    #[test]
    fn empty_features_is_not_available() {
        assert_eq!(extract_feature(r#"{"features":[]}"#), EarthquakeLookup::NotAvailable);
    }

    #[test]
    fn missing_features_is_not_available() {
        assert_eq!(
            extract_feature(r#"{"type":"FeatureCollection"}"#),
            EarthquakeLookup::NotAvailable
        );
    }

    #[test]
    fn invalid_json_is_not_available() {
        assert_eq!(extract_feature("{\"features\": [}"), EarthquakeLookup::NotAvailable);
        assert_eq!(extract_feature("<html>Bad Request</html>"), EarthquakeLookup::NotAvailable);
    }

    #[test]
    fn missing_or_mistyped_properties_are_not_available() {
        let missing_properties = r#"{"features":[{"geometry":null}]}"#;
        let missing_title = r#"{"features":[{"properties":{"time":1,"tsunami":0}}]}"#;
        let mistyped_tsunami = r#"{"features":[{"properties":{"title":"t","time":1,"tsunami":"yes"}}]}"#;
        let fractional_time = r#"{"features":[{"properties":{"title":"t","time":1.5,"tsunami":0}}]}"#;

        for body in [missing_properties, missing_title, mistyped_tsunami, fractional_time] {
            assert_eq!(extract_feature(body), EarthquakeLookup::NotAvailable, "{body}");
        }
    }
}
