use super::domain::{CLASS, ROAD_TYPE, TRAFFIC, WEATHER, idx};

/// Evaluates the hazard concept for a `(weather, road, traffic)` triple of
/// domain indices. Returns the class index into [`CLASS`]: 0 for
/// "Accident", 1 for "NoAccident".
///
/// This function is pure (no RNG) and shared by the generator and tests.
/// An accident occurs when:
/// - weather is `Snowy`, or
/// - weather is `Foggy` or `Rainy` and traffic is `High`, or
/// - the road is `Rural` and weather is anything but `Clear`.
#[inline]
pub fn hazard_class_idx(vals: &[usize; 3]) -> usize {
    let (w, r, t) = (vals[0], vals[1], vals[2]);

    let w_clear = idx(&WEATHER, "Clear");
    let w_foggy = idx(&WEATHER, "Foggy");
    let w_rainy = idx(&WEATHER, "Rainy");
    let w_snowy = idx(&WEATHER, "Snowy");
    let r_rural = idx(&ROAD_TYPE, "Rural");
    let t_high = idx(&TRAFFIC, "High");

    let accident = w == w_snowy
        || ((w == w_foggy || w == w_rainy) && t == t_high)
        || (r == r_rural && w != w_clear);

    if accident {
        idx(&CLASS, "Accident")
    } else {
        idx(&CLASS, "NoAccident")
    }
}
