use crate::streams::DataHeader;

// Domains are listed in lexicographic order, so generator indices line up
// with the codes a CategoryEncoder assigns after training.
pub const WEATHER: [&str; 5] = ["Clear", "Cloudy", "Foggy", "Rainy", "Snowy"];
pub const ROAD_TYPE: [&str; 3] = ["City", "Highway", "Rural"];
pub const TRAFFIC: [&str; 3] = ["High", "Low", "Medium"];
pub const CLASS: [&str; 2] = ["Accident", "NoAccident"];

#[inline]
pub fn idx(domain: &[&str], label: &str) -> usize {
    domain
        .iter()
        .position(|&s| s == label)
        .expect("label not in domain")
}

/// Builds the fixed header for the synthetic accident stream:
/// `Weather`, `Road_Type`, `Traffic` features and an `Outcome` class column
/// with labels "Accident" / "NoAccident".
pub fn build_header() -> DataHeader {
    DataHeader::new(
        "synthetic_accidents",
        vec!["Weather".into(), "Road_Type".into(), "Traffic".into()],
        "Outcome",
    )
}
