//! Repair records and the newest-first list that holds them

use chrono::NaiveDate;

use crate::form::FormState;

/// Where a repair job stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepairStatus {
    Pending,
    InProgress,
    Completed,
}

impl RepairStatus {
    /// Human-readable badge text
    pub fn label(&self) -> &'static str {
        match self {
            RepairStatus::Pending => "Pending",
            RepairStatus::InProgress => "In Progress",
            RepairStatus::Completed => "Completed",
        }
    }

    /// Short name used in CSS classes (`status-progress`, ...)
    pub fn slug(&self) -> &'static str {
        match self {
            RepairStatus::Pending => "pending",
            RepairStatus::InProgress => "progress",
            RepairStatus::Completed => "completed",
        }
    }
}

/// One tracked repair job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairRecord {
    pub id: u32,
    pub device: String,
    pub customer: String,
    pub issue: String,
    pub status: RepairStatus,
    /// Quoted price in whole dollars. `0` means not quoted yet.
    pub price: u32,
    pub date: NaiveDate,
}

impl RepairRecord {
    /// `"$199"` when quoted, `"TBD"` otherwise
    pub fn price_label(&self) -> String {
        if self.price > 0 {
            format!("${}", self.price)
        } else {
            "TBD".to_string()
        }
    }

    /// ISO `YYYY-MM-DD`
    pub fn date_label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Ordered repair records, newest first.
///
/// Records are only ever prepended. Nothing is edited or removed.
#[derive(Debug, Clone, Default)]
pub struct RepairList {
    records: Vec<RepairRecord>,
}

impl RepairList {
    /// An empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// The three jobs every page view starts with
    pub fn seeded() -> Self {
        let records = vec![
            seed(1, "iPhone 13 Pro", "John Smith", "Cracked screen replacement", RepairStatus::Completed, 199, (2025, 12, 8)),
            seed(2, "Samsung Galaxy S21", "Sarah Johnson", "Battery replacement", RepairStatus::InProgress, 89, (2025, 12, 9)),
            seed(3, "MacBook Pro 2019", "Mike Wilson", "Keyboard repair", RepairStatus::Pending, 249, (2025, 12, 10)),
        ];
        Self { records }
    }

    /// Turn the form into a pending, unpriced record and put it at the front.
    ///
    /// Presence of the fields is the browser's job; empty values go through.
    pub fn submit_booking(&mut self, form: &FormState, today: NaiveDate) -> &RepairRecord {
        let record = RepairRecord {
            id: self.records.len() as u32 + 1,
            device: form.device.clone(),
            customer: form.name.clone(),
            issue: form.issue.clone(),
            status: RepairStatus::Pending,
            price: 0,
            date: today,
        };
        self.records.insert(0, record);
        &self.records[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &RepairRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[RepairRecord] {
        &self.records
    }

    pub fn first(&self) -> Option<&RepairRecord> {
        self.records.first()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn seed(
    id: u32,
    device: &str,
    customer: &str,
    issue: &str,
    status: RepairStatus,
    price: u32,
    (y, m, d): (i32, u32, u32),
) -> RepairRecord {
    RepairRecord {
        id,
        device: device.to_string(),
        customer: customer.to_string(),
        issue: issue.to_string(),
        status,
        price,
        // Seed dates are compile-time constants and always valid.
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
    }
}
