use crate::calendar::date_key;
use crate::index::DeliveryIndex;
use crate::models::SupplierEntry;
use chrono::NaiveDate;
use serde::Serialize;

pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_PRODUCTS_MESSAGE: &str = "No specific products assigned for this delivery.";
pub const ALL_RECEIVED_MESSAGE: &str = "All deliveries received for this date.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeliveryStatus {
    Received,
    Pending,
}

impl DeliveryStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Received => "Received",
            Self::Pending => "Pending",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Received => "status-received",
            Self::Pending => "status-pending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductItem {
    pub name: String,
    pub quantity: u64,
}

impl ProductItem {
    pub fn label(&self) -> String {
        format!("{} (Expected Qty: {})", self.name, self.quantity)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SupplierSection {
    pub company_name: String,
    pub contact_person: String,
    pub phone: String,
    pub status: DeliveryStatus,
    pub products: Vec<ProductItem>,
}

impl SupplierSection {
    fn from_entry(entry: &SupplierEntry, date: NaiveDate) -> Self {
        let status = if entry.is_received_on(date) {
            DeliveryStatus::Received
        } else {
            DeliveryStatus::Pending
        };

        Self {
            company_name: entry.company_name.clone(),
            contact_person: or_not_available(entry.contact_person.as_deref()),
            phone: or_not_available(entry.phone.as_deref()),
            status,
            products: entry
                .products
                .iter()
                .map(|line| ProductItem {
                    name: line.name.clone(),
                    quantity: line.quantity.filter(|qty| *qty > 0).unwrap_or(1),
                })
                .collect(),
        }
    }
}

/// Contents of the detail panel for one clicked day.
#[derive(Debug, Clone, Serialize)]
pub struct DayDetail {
    pub date: String,
    /// e.g. "March 15, 2024".
    pub title: String,
    pub suppliers: Vec<SupplierSection>,
    /// Set when the date has no scheduled suppliers at all.
    pub message: Option<&'static str>,
}

impl DayDetail {
    pub fn resolve(index: &DeliveryIndex, date: NaiveDate) -> Self {
        let suppliers: Vec<SupplierSection> = index
            .get(date)
            .unwrap_or_default()
            .iter()
            .map(|entry| SupplierSection::from_entry(entry, date))
            .collect();
        let message = suppliers.is_empty().then_some(ALL_RECEIVED_MESSAGE);

        Self {
            date: date_key(date),
            title: long_date(date),
            suppliers,
            message,
        }
    }
}

pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

fn or_not_available(value: Option<&str>) -> String {
    value.unwrap_or(NOT_AVAILABLE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DeliveryRecord;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn acme_widget(received: Option<NaiveDate>) -> DeliveryRecord {
        DeliveryRecord {
            restock_schedule: date(2024, 3, 15),
            company_name: "Acme".to_string(),
            last_received_date: received,
            contact_person: None,
            phone: None,
            product_name: Some("Widget".to_string()),
            default_quantity: Some(10),
        }
    }

    #[test]
    fn received_delivery_shows_product_line() {
        let index = DeliveryIndex::build(&[acme_widget(Some(date(2024, 3, 15)))]);
        let detail = DayDetail::resolve(&index, date(2024, 3, 15));

        assert_eq!(detail.title, "March 15, 2024");
        assert_eq!(detail.date, "2024-03-15");
        assert_eq!(detail.message, None);
        assert_eq!(detail.suppliers.len(), 1);
        let acme = &detail.suppliers[0];
        assert_eq!(acme.company_name, "Acme");
        assert_eq!(acme.status, DeliveryStatus::Received);
        assert_eq!(acme.status.label(), "Received");
        assert_eq!(acme.products.len(), 1);
        assert_eq!(acme.products[0].label(), "Widget (Expected Qty: 10)");
    }

    #[test]
    fn missing_received_date_is_pending() {
        let index = DeliveryIndex::build(&[acme_widget(None)]);
        let detail = DayDetail::resolve(&index, date(2024, 3, 15));
        assert_eq!(detail.suppliers[0].status, DeliveryStatus::Pending);
        assert_eq!(detail.suppliers[0].status.label(), "Pending");
    }

    #[test]
    fn received_on_other_day_is_pending() {
        let index = DeliveryIndex::build(&[acme_widget(Some(date(2024, 3, 14)))]);
        let detail = DayDetail::resolve(&index, date(2024, 3, 15));
        assert_eq!(detail.suppliers[0].status, DeliveryStatus::Pending);
    }

    #[test]
    fn contact_fields_fall_back_to_placeholder() {
        let mut record = acme_widget(None);
        record.phone = Some("555-0100".to_string());
        let index = DeliveryIndex::build(&[record]);
        let section = &DayDetail::resolve(&index, date(2024, 3, 15)).suppliers[0];
        assert_eq!(section.contact_person, "N/A");
        assert_eq!(section.phone, "555-0100");
    }

    #[test]
    fn zero_or_missing_quantity_defaults_to_one() {
        let mut zero = acme_widget(None);
        zero.default_quantity = Some(0);
        let mut missing = acme_widget(None);
        missing.product_name = Some("Gadget".to_string());
        missing.default_quantity = None;
        let index = DeliveryIndex::build(&[zero, missing]);

        let products = &DayDetail::resolve(&index, date(2024, 3, 15)).suppliers[0].products;
        assert_eq!(products[0].quantity, 1);
        assert_eq!(products[1].label(), "Gadget (Expected Qty: 1)");
    }

    #[test]
    fn supplier_without_products_has_empty_list() {
        let mut record = acme_widget(None);
        record.product_name = None;
        let index = DeliveryIndex::build(&[record]);
        let detail = DayDetail::resolve(&index, date(2024, 3, 15));
        assert_eq!(detail.suppliers.len(), 1);
        assert!(detail.suppliers[0].products.is_empty());
    }

    #[test]
    fn two_suppliers_listed_in_encounter_order() {
        let day = date(2024, 3, 20);
        let mut first = acme_widget(None);
        first.restock_schedule = day;
        first.company_name = "Northwind".to_string();
        let mut second = acme_widget(None);
        second.restock_schedule = day;

        let index = DeliveryIndex::build(&[first, second]);
        let names: Vec<_> = DayDetail::resolve(&index, day)
            .suppliers
            .into_iter()
            .map(|s| s.company_name)
            .collect();
        assert_eq!(names, ["Northwind", "Acme"]);
    }

    #[test]
    fn unknown_date_reports_all_received() {
        let index = DeliveryIndex::build(&[acme_widget(None)]);
        let detail = DayDetail::resolve(&index, date(2024, 3, 16));
        assert!(detail.suppliers.is_empty());
        assert_eq!(detail.message, Some(ALL_RECEIVED_MESSAGE));
    }

    #[test]
    fn long_date_drops_day_padding() {
        assert_eq!(long_date(date(2024, 1, 5)), "January 5, 2024");
    }
}
