use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One row of the restock feed supplied by the host page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryRecord {
    pub restock_schedule: NaiveDate,
    pub company_name: String,
    #[serde(default, deserialize_with = "optional_date")]
    pub last_received_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "non_empty")]
    pub contact_person: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "optional_quantity")]
    pub default_quantity: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductLine {
    pub name: String,
    pub quantity: Option<u64>,
}

/// Everything known about one supplier on one scheduled date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupplierEntry {
    pub company_name: String,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub last_received: Option<NaiveDate>,
    pub products: Vec<ProductLine>,
}

impl SupplierEntry {
    pub fn is_received_on(&self, date: NaiveDate) -> bool {
        self.last_received == Some(date)
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct CalendarQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<String>,
}

// Blank strings are treated the same as a missing field.
fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

// Only compared against the scheduled date, so anything that is not a plain
// date simply never matches.
fn optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(raw)) => raw.trim().parse::<NaiveDate>().ok(),
        _ => None,
    })
}

// Numbers and numeric strings are kept; every other shape counts as absent.
fn optional_quantity<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|qty| *qty >= 1.0).map(|qty| qty as u64)),
        Some(Value::String(raw)) => raw.trim().parse::<u64>().ok(),
        _ => None,
    })
}
