//! The club set every new golfer starts with.

/// Default bag, longest club first.
pub const DEFAULT_BAG: [&str; 13] = [
    "Driver",
    "3 Wood",
    "5 Wood",
    "4 Iron",
    "5 Iron",
    "6 Iron",
    "7 Iron",
    "8 Iron",
    "9 Iron",
    "Pitching Wedge",
    "52 Degree",
    "56 Degree",
    "60 Degree",
];

/// Orders club names by their position in [`DEFAULT_BAG`], with clubs
/// outside the default bag after it in name order.
pub fn bag_order<'a>(clubs: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    let mut clubs: Vec<&str> = clubs.into_iter().collect();
    clubs.sort_by_key(|c| {
        let pos = DEFAULT_BAG.iter().position(|b| b == c);
        (pos.unwrap_or(DEFAULT_BAG.len()), *c)
    });
    clubs.dedup();
    clubs
}
