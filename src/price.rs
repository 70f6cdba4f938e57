use crate::model::PriceLevel;

pub const NO_PRICE: &str = "-";

pub fn best_level_price(levels: Option<&[PriceLevel]>) -> Option<f64> {
    levels?
        .first()?
        .price
        .filter(|price| price.is_finite())
}

pub fn best_price(levels: Option<&[PriceLevel]>) -> String {
    best_level_price(levels)
        .map(format_price)
        .unwrap_or_else(|| NO_PRICE.to_string())
}

// renders the stored binary value: 1.005 is held as 1.00499.. and prints "1.00"
pub fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}

pub fn capture_price(price: f64) -> f64 {
    format_price(price).parse().unwrap_or(0.0)
}
