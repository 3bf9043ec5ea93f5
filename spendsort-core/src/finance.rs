//! Finance record types shared by the statement and CSV pipelines

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Budgeting categories, in the order the categorizer checks them
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    #[serde(rename = "Food & Beverage")]
    FoodAndBeverage,
    #[serde(rename = "Shopping")]
    Shopping,
    #[serde(rename = "Target")]
    Target,
    #[serde(rename = "Transportation")]
    Transportation,
    #[serde(rename = "Utilities & Bills")]
    UtilitiesAndBills,
    #[serde(rename = "Entertainment")]
    Entertainment,
    #[serde(rename = "Savings & Transfers")]
    SavingsAndTransfers,
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    /// Every category in declaration order
    pub const ALL: [Category; 8] = [
        Category::FoodAndBeverage,
        Category::Shopping,
        Category::Target,
        Category::Transportation,
        Category::UtilitiesAndBills,
        Category::Entertainment,
        Category::SavingsAndTransfers,
        Category::Other,
    ];

    /// Label written to output files
    pub fn label(&self) -> &'static str {
        match self {
            Category::FoodAndBeverage => "Food & Beverage",
            Category::Shopping => "Shopping",
            Category::Target => "Target",
            Category::Transportation => "Transportation",
            Category::UtilitiesAndBills => "Utilities & Bills",
            Category::Entertainment => "Entertainment",
            Category::SavingsAndTransfers => "Savings & Transfers",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow::anyhow!("unknown category: {s}"))
    }
}

/// One categorized transaction.
///
/// Date and amount keep the statement's raw text; use [`Transaction::date_naive`]
/// and [`Transaction::amount_value`] when a typed view is needed.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Transaction {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Category")]
    category: Category,
}

impl Transaction {
    pub fn new(
        date: impl Into<String>,
        description: impl Into<String>,
        amount: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
            amount: amount.into(),
            category,
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Amount as a number, if the raw text parses
    pub fn amount_value(&self) -> Option<f64> {
        self.amount.trim().parse().ok()
    }

    /// Date as MM/DD/YY, if the raw text is a real calendar date
    pub fn date_naive(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%m/%d/%y").ok()
    }
}
