//! Records the catalog starts with.

use super::domain::Cat;

/// `(name, category)` pairs loaded at startup, in catalog order.
/// "parsian" is kept as-is and does not match "persian".
pub const SEED: [(&str, &str); 10] = [
    ("arthur", "calico"),
    ("byron", "calico"),
    ("conan", "calico"),
    ("dexter", "calico"),
    ("edgar", "calico"),
    ("felix", "calico"),
    ("garfield", "persian"),
    ("hercules", "persian"),
    ("ignacio", "parsian"),
    ("joker", "persian"),
];

pub fn seed_cats() -> Vec<Cat> {
    SEED.iter().map(|(name, category)| Cat::new(*name, *category)).collect()
}
