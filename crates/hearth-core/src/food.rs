//! Food Supply Tracker
//!
//! Two-week-per-person targets, adjusted for dietary needs. Targets are fixed
//! when the list is built; only the current quantities change afterwards.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoodCategory {
    Water,
    Protein,
    Grains,
    Vegetables,
    Fruit,
    Snacks,
}

impl FoodCategory {
    /// Display order of the tracker sections
    pub const ALL: [FoodCategory; 6] = [
        FoodCategory::Water,
        FoodCategory::Protein,
        FoodCategory::Grains,
        FoodCategory::Vegetables,
        FoodCategory::Fruit,
        FoodCategory::Snacks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodCategory::Water => "Water",
            FoodCategory::Protein => "Protein",
            FoodCategory::Grains => "Grains",
            FoodCategory::Vegetables => "Vegetables",
            FoodCategory::Fruit => "Fruit",
            FoodCategory::Snacks => "Snacks",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    pub current: u32,
    pub target: u32,
    pub unit: String,
    pub category: FoodCategory,
}

impl FoodItem {
    fn new(name: &str, target: u32, unit: &str, category: FoodCategory) -> Self {
        Self {
            name: name.to_string(),
            current: 0,
            target,
            unit: unit.to_string(),
            category,
        }
    }

    /// Progress bar value; the stored quantity may exceed the target
    pub fn progress_percent(&self) -> f64 {
        if self.target == 0 {
            return 0.0;
        }
        (self.current as f64 / self.target as f64 * 100.0).min(100.0)
    }
}

/// Recommended supplies for a household, in display order
pub fn recommended_supplies(household_size: u32, dietary: &[String]) -> Vec<FoodItem> {
    let n = household_size;
    let has = |tag: &str| dietary.iter().any(|d| d == tag);

    let mut items = vec![
        FoodItem::new("Water", n.saturating_mul(14), "gallons", FoodCategory::Water),
        FoodItem::new("Canned proteins", n.saturating_mul(6), "cans", FoodCategory::Protein),
        FoodItem::new("Rice/Pasta", n.saturating_mul(2), "lbs", FoodCategory::Grains),
        FoodItem::new("Canned vegetables", n.saturating_mul(8), "cans", FoodCategory::Vegetables),
        FoodItem::new("Peanut butter", n, "jars", FoodCategory::Protein),
        FoodItem::new("Crackers", n.saturating_mul(2), "boxes", FoodCategory::Grains),
        FoodItem::new("Canned fruit", n.saturating_mul(4), "cans", FoodCategory::Fruit),
    ];

    if has("Vegan") || has("Vegetarian") {
        items.push(FoodItem::new("Plant-based protein", n.saturating_mul(4), "cans", FoodCategory::Protein));
        items.push(FoodItem::new("Nuts/Seeds", n.saturating_mul(2), "bags", FoodCategory::Protein));
    }

    if has("Gluten-free") {
        if let Some(rice) = items.iter_mut().find(|item| item.name == "Rice/Pasta") {
            *rice = FoodItem::new("Rice/GF grains", n.saturating_mul(3), "lbs", FoodCategory::Grains);
        }
    }

    if has("Diabetic") {
        items.push(FoodItem::new("Sugar-free snacks", n.saturating_mul(3), "boxes", FoodCategory::Snacks));
    }

    items
}

/// Storage tips shown under the tracker
pub fn tips(dietary: &[String]) -> Vec<&'static str> {
    let mut tips = vec![
        "Store 1 gallon of water per person per day",
        "Choose foods that don't require cooking",
        "Check expiration dates every 6 months",
    ];
    if dietary.iter().any(|d| d == "Vegetarian") {
        tips.push("Don't forget plant-based protein sources");
    }
    if dietary.iter().any(|d| d == "Gluten-free") {
        tips.push("Verify all packaged foods are certified gluten-free");
    }
    tips
}

/// The tracker view's working list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodSupply {
    items: Vec<FoodItem>,
}

impl FoodSupply {
    pub fn new(household_size: u32, dietary: &[String]) -> Self {
        Self {
            items: recommended_supplies(household_size, dietary),
        }
    }

    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    /// Set the current quantity, clamped at zero
    pub fn update_quantity(&mut self, index: usize, value: i64) {
        if let Some(item) = self.items.get_mut(index) {
            item.current = u32::try_from(value.max(0)).unwrap_or(u32::MAX);
        }
    }

    pub fn increment(&mut self, index: usize) {
        if let Some(current) = self.items.get(index).map(|item| item.current) {
            self.update_quantity(index, i64::from(current) + 1);
        }
    }

    pub fn decrement(&mut self, index: usize) {
        if let Some(current) = self.items.get(index).map(|item| item.current) {
            self.update_quantity(index, i64::from(current) - 1);
        }
    }

    /// (index, item) pairs for one section
    pub fn by_category(&self, category: FoodCategory) -> Vec<(usize, FoodItem)> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.category == category)
            .map(|(index, item)| (index, item.clone()))
            .collect()
    }

    pub fn overall_progress(&self) -> u32 {
        let target: u64 = self.items.iter().map(|item| u64::from(item.target)).sum();
        if target == 0 {
            return 0;
        }
        let current: u64 = self.items.iter().map(|item| u64::from(item.current)).sum();
        (current as f64 / target as f64 * 100.0).round() as u32
    }
}
