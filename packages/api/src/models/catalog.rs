//! # Delivery catalog entities
//!
//! Read-only records from the catalog API: restaurants and their menu items.
//! Prices are shown with [`format_brl`] and an order line is priced with a
//! [`Quantity`] that never drops below one.

use serde::{Deserialize, Serialize};

use super::de::{number_or_string, string_or_number};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Restaurant {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "number_or_string")]
    pub rating: f64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
}

/// A menu item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Food {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "number_or_string")]
    pub price: f64,
    /// Preparation/delivery time as free text, e.g. "30-40 min".
    #[serde(default)]
    pub time: String,
    /// Delivery fee.
    #[serde(default, deserialize_with = "number_or_string")]
    pub delivery: f64,
    #[serde(default, deserialize_with = "number_or_string")]
    pub rating: f64,
    #[serde(default)]
    pub image: String,
    #[serde(rename = "restaurantId", default, deserialize_with = "string_or_number")]
    pub restaurant_id: String,
    #[serde(default)]
    pub description: String,
}

impl Food {
    pub fn total_for(&self, quantity: Quantity) -> f64 {
        self.price * f64::from(quantity.get())
    }
}

/// Format an amount the way the pages show money: `R$ 12.50`.
pub fn format_brl(amount: f64) -> String {
    format!("R$ {amount:.2}")
}

/// Number of units in an order line. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity(u32);

impl Default for Quantity {
    fn default() -> Self {
        Self(1)
    }
}

impl Quantity {
    pub fn new(n: u32) -> Self {
        Self(n.max(1))
    }

    /// Parse free-form input. Anything that is not a positive integer is one.
    pub fn parse(input: &str) -> Self {
        Self::new(input.trim().parse().unwrap_or(1))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn increment(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    pub fn decrement(self) -> Self {
        Self::new(self.0.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_food_decodes_loose_numbers() {
        let food: Food = serde_json::from_value(json!({
            "id": "1",
            "name": "X-Burguer",
            "price": "24,90",
            "time": "30-40 min",
            "delivery": 5,
            "rating": 4.7,
            "restaurantId": 2
        }))
        .unwrap();

        assert_eq!(food.price, 24.9);
        assert_eq!(food.delivery, 5.0);
        assert_eq!(food.restaurant_id, "2");
        assert_eq!(format_brl(food.delivery), "R$ 5.00");
    }

    #[test]
    fn test_quantity_never_drops_below_one() {
        let q = Quantity::default();
        assert_eq!(q.decrement().get(), 1);
        assert_eq!(q.increment().increment().decrement().get(), 2);
        assert_eq!(Quantity::new(0).get(), 1);
        assert_eq!(Quantity::parse("-3").get(), 1);
        assert_eq!(Quantity::parse("abc").get(), 1);
        assert_eq!(Quantity::parse(" 4 ").get(), 4);
    }

    #[test]
    fn test_order_total() {
        let food: Food = serde_json::from_value(json!({
            "id": "1",
            "price": 12.5,
            "restaurantId": "1"
        }))
        .unwrap();
        let total = food.total_for(Quantity::new(3));
        assert_eq!(format_brl(total), "R$ 37.50");
    }
}
