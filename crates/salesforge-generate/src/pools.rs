use rand::Rng;

/// First names drawn for generated salesmen.
pub const FIRST_NAMES: &[&str] = &[
    "Victor",
    "Angie",
    "David",
    "Valery",
    "Brayan",
    "Diego",
    "Alexander",
    "Xiomara",
    "Carolina",
];

/// Last names drawn for generated salesmen.
pub const LAST_NAMES: &[&str] = &[
    "Rodriguez",
    "Rojas",
    "Gomez",
    "Diaz",
    "Forbes",
    "Bernal",
    "Martinez",
    "Garces",
    "Newball",
    "Vasquez",
];

/// Product names drawn for the catalog.
pub const PRODUCT_NAMES: &[&str] = &[
    "Cocacola",
    "Speedmax",
    "Gatorade",
    "Pepsi",
    "Colombiana",
    "Ponymalta",
    "Redbull",
    "Electrolit",
    "Colapola",
];

/// Uniform pick from a pool.
pub fn pick<R: Rng>(rng: &mut R, pool: &'static [&'static str]) -> &'static str {
    pool[rng.random_range(0..pool.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pools_are_non_empty() {
        assert!(!FIRST_NAMES.is_empty());
        assert!(!LAST_NAMES.is_empty());
        assert!(!PRODUCT_NAMES.is_empty());
    }
}
