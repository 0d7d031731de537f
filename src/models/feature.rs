use serde::Deserialize;
use serde_json::Value;

/// GeoJSON feature collection as returned by the USGS event query.
///
/// Features are kept raw so that only the first one has to match [`Feature`].
#[derive(Debug, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Value>,
}

#[derive(Debug, Deserialize)]
pub struct Feature {
    pub properties: FeatureProperties,
}

#[derive(Debug, Deserialize)]
pub struct FeatureProperties {
    pub title: String,
    pub time: i64,
    pub tsunami: i32,
}
