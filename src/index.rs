use crate::models::{DeliveryRecord, ProductLine, SupplierEntry};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Delivery records grouped by scheduled date, then by supplier.
///
/// Built once from the raw feed and never modified afterwards. Suppliers for a
/// date keep the order in which they first appear in the feed.
#[derive(Debug, Clone, Default)]
pub struct DeliveryIndex {
    days: BTreeMap<NaiveDate, Vec<SupplierEntry>>,
    record_count: usize,
}

impl DeliveryIndex {
    pub fn build(records: &[DeliveryRecord]) -> Self {
        let mut days: BTreeMap<NaiveDate, Vec<SupplierEntry>> = BTreeMap::new();

        for record in records {
            let suppliers = days.entry(record.restock_schedule).or_default();
            let position = suppliers
                .iter()
                .position(|entry| entry.company_name == record.company_name);

            // The first record seen for a (date, supplier) pair fixes the
            // contact details and received date; later ones only add products.
            let entry = match position {
                Some(i) => &mut suppliers[i],
                None => {
                    suppliers.push(SupplierEntry {
                        company_name: record.company_name.clone(),
                        contact_person: record.contact_person.clone(),
                        phone: record.phone.clone(),
                        last_received: record.last_received_date,
                        products: Vec::new(),
                    });
                    let last = suppliers.len() - 1;
                    &mut suppliers[last]
                }
            };

            if let Some(name) = &record.product_name {
                entry.products.push(ProductLine {
                    name: name.clone(),
                    quantity: record.default_quantity,
                });
            }
        }

        Self {
            days,
            record_count: records.len(),
        }
    }

    pub fn get(&self, date: NaiveDate) -> Option<&[SupplierEntry]> {
        self.days.get(&date).map(Vec::as_slice)
    }

    /// True when every supplier scheduled on `date` was last received on that
    /// exact date. Dates without deliveries are never "received".
    pub fn is_fully_received(&self, date: NaiveDate) -> bool {
        match self.days.get(&date) {
            Some(suppliers) => suppliers.iter().all(|entry| entry.is_received_on(date)),
            None => false,
        }
    }

    /// Number of distinct scheduled dates.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn record_count(&self) -> usize {
        self.record_count
    }
}
