//! Stable per-club colours.

use std::collections::BTreeMap;

/// Qualitative palette, cycled when there are more clubs than entries.
pub const PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Assigns a palette colour to each distinct club, in name order.
///
/// The same set of clubs always receives the same colours regardless of
/// the order they are passed in.
pub fn club_color_map<'a>(clubs: impl IntoIterator<Item = &'a str>) -> BTreeMap<String, String> {
    let mut names: Vec<&str> = clubs.into_iter().collect();
    names.sort_unstable();
    names.dedup();
    names
        .into_iter()
        .enumerate()
        .map(|(i, name)| (name.to_string(), PALETTE[i % PALETTE.len()].to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_independent() {
        let a = club_color_map(["Driver", "7 Iron", "Driver", "PW"]);
        let b = club_color_map(["PW", "Driver", "7 Iron"]);
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);
        assert_eq!(a["7 Iron"], PALETTE[0]);
    }

    #[test]
    fn palette_cycles() {
        let names: Vec<String> = (0..12).map(|i| format!("club{i:02}")).collect();
        let map = club_color_map(names.iter().map(String::as_str));
        assert_eq!(map.len(), 12);
        assert_eq!(map["club10"], PALETTE[0]);
        assert_eq!(map["club11"], PALETTE[1]);
    }

    #[test]
    fn empty() {
        assert!(club_color_map(std::iter::empty()).is_empty());
    }
}
