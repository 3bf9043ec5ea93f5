//! Keyword categorizer for transaction descriptions.
//!
//! Categories are checked in declaration order and the first one with a
//! keyword contained in the description wins, so "Amazon Target Run" is
//! Shopping, not Target.

use crate::finance::Category;

/// Ordered keyword table. `Other` is the fallback and has no keywords.
pub const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::FoodAndBeverage,
        &[
            "ElPolloLoco",
            "El Pollo Loco",
            "BB.Q",
            "Hawaiian BBQ",
            "Meet Fresh",
            "Donut",
            "Boba",
            "Tea",
            "Cafe",
            "McDonalds",
            "Robeks",
        ],
    ),
    (
        Category::Shopping,
        &["Amazon", "Miniso", "Pop Mart", "Top Canvas", "Bunker"],
    ),
    (Category::Target, &["Target"]),
    (Category::Transportation, &["Chevron", "Gas", "ATM"]),
    (Category::UtilitiesAndBills, &["Internet", "Payment", "Recurring"]),
    (
        Category::Entertainment,
        &["Venmo", "Paypal", "Universal", "Three Broomsticks", "Butterbeer"],
    ),
    (Category::SavingsAndTransfers, &["Deposit", "Dividend", "Transfer"]),
    (Category::Other, &[]),
];

/// Categorize a free-text description.
pub fn categorize(description: &str) -> Category {
    let desc = description.to_lowercase();

    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| desc.contains(&k.to_lowercase())))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Other)
}
