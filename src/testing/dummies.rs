use crate::streams::{DataHeader, RawRow, VecRowStream};

/// Header of the canonical eight-row accident table.
pub fn tiny_accident_header() -> DataHeader {
    DataHeader::new(
        "accidents",
        vec!["Weather".into(), "Road_Type".into(), "Traffic".into()],
        "Outcome",
    )
}

/// The canonical eight-row accident table used across tests: clear-weather
/// observations are accident-free, everything else is not.
pub fn tiny_accident_rows() -> Vec<RawRow> {
    let rows = [
        (["Clear", "Highway", "High"], "NoAccident"),
        (["Rainy", "City", "Medium"], "Accident"),
        (["Foggy", "Highway", "Low"], "Accident"),
        (["Clear", "City", "High"], "NoAccident"),
        (["Rainy", "Rural", "Low"], "Accident"),
        (["Foggy", "Rural", "Low"], "Accident"),
        (["Clear", "Highway", "High"], "NoAccident"),
        (["Rainy", "City", "Medium"], "Accident"),
    ];
    rows.iter()
        .map(|(features, class)| RawRow {
            features: features.iter().map(|s| s.to_string()).collect(),
            class_label: class.to_string(),
        })
        .collect()
}

/// In-memory stream over [`tiny_accident_rows`].
pub fn tiny_vec_stream() -> VecRowStream {
    VecRowStream::new(tiny_accident_header(), tiny_accident_rows())
}
