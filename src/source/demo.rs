//! In-memory demo backend.
//!
//! Serves canned fixture data through the same [`DataSource`] contract as
//! the live backend, so every view works without a network. The dataset
//! is injected explicitly and has an `init`/`reset` lifecycle; there is
//! no process-wide store.

use std::cell::RefCell;

use chrono::{DateTime, Duration, Utc};
use rand::prelude::*;
use serde_json::Value;

use super::{DataSource, EntityKind, ListOptions, Page};
use crate::config;
use crate::error::{NasiyaError, Result};
use crate::models::{
    Admin, Application, Branch, Customer, Merchant, Operator, Payment, Product, WorkStatus,
};

// ---------------------------------------------------------------------------
// DemoDataset
// ---------------------------------------------------------------------------

/// The fixture collections served by a [`DemoSource`].
#[derive(Debug, Clone, Default)]
pub struct DemoDataset {
    pub applications: Vec<Application>,
    pub branches: Vec<Branch>,
    pub customers: Vec<Customer>,
    pub merchants: Vec<Merchant>,
    pub operators: Vec<Operator>,
    pub admins: Vec<Admin>,
    pub payments: Vec<Payment>,
}

const FIRST_NAMES: &[&str] = &[
    "Aziz", "Bekzod", "Dilshod", "Gulnora", "Jasur", "Kamola", "Laylo", "Madina", "Nodir",
    "Otabek", "Rustam", "Sevara", "Shahzod", "Umida", "Zafar",
];

const LAST_NAMES: &[&str] = &[
    "Abdullayev", "Karimov", "Mirzayev", "Rahimov", "Saidov", "To'rayev", "Usmonov", "Yusupov",
];

const MERCHANT_NAMES: &[&str] = &["Texnomart", "Mediapark", "Idea", "Elmakon"];

/// Raw statuses the generator draws from, weighted roughly like real
/// traffic (mostly approved/pending, a tail of rejections and limits).
const STATUS_POOL: &[(&str, u32)] = &[
    ("CONFIRMED", 30),
    ("ACTIVE", 15),
    ("FINISHED", 10),
    ("CREATED", 12),
    ("WAITING_SCORING", 8),
    ("ADDED_PRODUCT", 5),
    ("WAITING_BANK_CONFIRM", 5),
    ("REJECTED", 6),
    ("CANCELED_BY_SCORING", 4),
    ("CANCELED_BY_CLIENT", 3),
    ("LIMIT", 2),
];

impl DemoDataset {
    /// Generate a linked dataset anchored at the current instant.
    pub fn generate(seed: u64) -> Self {
        Self::generate_at(seed, Utc::now())
    }

    /// Generate a linked dataset anchored at `now`.
    ///
    /// Deterministic for a given `(seed, now)` pair: branches and
    /// customers across the known regions, a year of applications with a
    /// cluster on the anchor day (so the daily charts are never empty),
    /// and payment histories for approved applications.
    pub fn generate_at(seed: u64, now: DateTime<Utc>) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut data = DemoDataset::default();

        for (i, name) in MERCHANT_NAMES.iter().enumerate() {
            data.merchants.push(Merchant {
                id: i as i64 + 1,
                name: name.to_string(),
                phone: Some(phone(&mut rng)),
                address: None,
                work_status: WorkStatus::Working,
            });
        }

        let regions = config::known_regions();
        for i in 0..10i64 {
            let merchant = &data.merchants[rng.gen_range(0..data.merchants.len())];
            let region = regions[rng.gen_range(0..regions.len())];
            data.branches.push(Branch {
                id: i + 1,
                name: format!("{} {}", merchant.name, i + 1),
                region: Some(region.to_string()),
                address: Some(format!("{} ko'chasi, {}-uy", region, rng.gen_range(1..120))),
                director_name: Some(full_name(&mut rng)),
                director_phone: Some(phone(&mut rng)),
                merchant_id: Some(merchant.id),
                work_status: if rng.gen_bool(0.9) {
                    WorkStatus::Working
                } else {
                    WorkStatus::Blocked
                },
            });
        }

        for i in 0..40i64 {
            let region = regions[rng.gen_range(0..regions.len())];
            data.customers.push(Customer {
                id: i + 1,
                full_name: Some(full_name(&mut rng)),
                phone: Some(phone(&mut rng)),
                passport: Some(passport(&mut rng)),
                region: Some(region.to_string()),
                total_applications: 0,
                active_applications: 0,
                completed_applications: 0,
                rejected_applications: 0,
                debt: 0.0,
                zayavkalar: Vec::new(),
            });
        }

        for i in 0..15i64 {
            let branch = &data.branches[rng.gen_range(0..data.branches.len())];
            data.operators.push(Operator {
                id: i + 1,
                fullname: Some(full_name(&mut rng)),
                phone: Some(phone(&mut rng)),
                merchant_id: branch.merchant_id,
                fillial_id: Some(branch.id),
                work_status: WorkStatus::Working,
            });
        }
        data.admins.push(Admin {
            id: 1,
            fullname: Some("Super Admin".to_string()),
            phone: Some(phone(&mut rng)),
            work_status: WorkStatus::Working,
        });

        let mut payment_id = 1i64;
        for i in 0..120i64 {
            let customer = &data.customers[rng.gen_range(0..data.customers.len())];
            let branch = &data.branches[rng.gen_range(0..data.branches.len())];
            let status = pick_status(&mut rng);
            // One application in eight lands on the anchor day.
            let created_at = if i % 8 == 0 {
                now - Duration::minutes(rng.gen_range(0..18 * 60))
            } else {
                now - Duration::minutes(rng.gen_range(0..365 * 24 * 60))
            };
            let amount = rng.gen_range(5..200) as f64 * 100_000.0;
            let months = *[3u32, 6, 9, 12].choose(&mut rng).unwrap();

            let app = Application {
                id: i + 1,
                status: Some(status.to_string()),
                amount,
                payment_amount: (amount / months as f64 / 1000.0).round() * 1000.0,
                created_at: Some(created_at),
                fillial_id: Some(branch.id),
                merchant_id: branch.merchant_id,
                customer_id: Some(customer.id),
                expired_month: Some(months.to_string()),
                products: vec![Product {
                    name: "Maishiy texnika".to_string(),
                    price: amount,
                }],
                full_name: customer.full_name.clone(),
                phone: customer.phone.clone(),
                passport: customer.passport.clone(),
            };

            // Payment history for approved applications only.
            if matches!(status, "CONFIRMED" | "ACTIVE" | "FINISHED") {
                let paid_months = rng.gen_range(0..=months);
                for m in 0..paid_months {
                    data.payments.push(Payment {
                        id: payment_id,
                        zayavka_id: app.id,
                        amount: app.payment_amount,
                        paid_at: app
                            .created_at
                            .and_then(|c| c.checked_add_months(chrono::Months::new(m + 1))),
                        manual: rng.gen_bool(0.1),
                    });
                    payment_id += 1;
                }
            }

            data.applications.push(app);
        }

        // Attach application history to customers so counter recomputation
        // has something to work with.
        for customer in &mut data.customers {
            customer.zayavkalar = data
                .applications
                .iter()
                .filter(|a| a.customer_id == Some(customer.id))
                .cloned()
                .collect();
            customer.total_applications = customer.zayavkalar.len();
        }

        data
    }
}

fn full_name(rng: &mut StdRng) -> String {
    format!(
        "{} {}",
        FIRST_NAMES.choose(rng).unwrap(),
        LAST_NAMES.choose(rng).unwrap()
    )
}

fn phone(rng: &mut StdRng) -> String {
    format!("+99890{:07}", rng.gen_range(0..10_000_000))
}

fn passport(rng: &mut StdRng) -> String {
    format!("A{}{:07}", (b'A' + rng.gen_range(0..5)) as char, rng.gen_range(0..10_000_000))
}

fn pick_status(rng: &mut StdRng) -> &'static str {
    let total: u32 = STATUS_POOL.iter().map(|(_, w)| w).sum();
    let mut roll = rng.gen_range(0..total);
    for (status, weight) in STATUS_POOL {
        if roll < *weight {
            return status;
        }
        roll -= weight;
    }
    STATUS_POOL[0].0
}

// ---------------------------------------------------------------------------
// DemoSource
// ---------------------------------------------------------------------------

/// Data source serving an injected in-memory dataset.
pub struct DemoSource {
    data: RefCell<DemoDataset>,
}

impl DemoSource {
    /// Create an empty source; populate it later with [`DemoSource::init`].
    pub fn new() -> Self {
        Self {
            data: RefCell::new(DemoDataset::default()),
        }
    }

    /// Create a source pre-populated with a handcrafted dataset.
    pub fn with_dataset(data: DemoDataset) -> Self {
        Self {
            data: RefCell::new(data),
        }
    }

    /// Create a source with a generated dataset.
    pub fn seeded(seed: u64) -> Self {
        Self::with_dataset(DemoDataset::generate(seed))
    }

    /// Replace the served dataset.
    pub fn init(&self, data: DemoDataset) {
        *self.data.borrow_mut() = data;
    }

    /// Drop all fixture data.
    pub fn reset(&self) {
        *self.data.borrow_mut() = DemoDataset::default();
        log::debug!("demo source reset");
    }

    fn collection(&self, kind: EntityKind) -> Result<Vec<Value>> {
        let data = self.data.borrow();
        match kind {
            EntityKind::Application => to_values(&data.applications),
            EntityKind::Branch => to_values(&data.branches),
            EntityKind::Customer => to_values(&data.customers),
            EntityKind::Merchant => to_values(&data.merchants),
            EntityKind::Operator => to_values(&data.operators),
            EntityKind::Admin => to_values(&data.admins),
            EntityKind::Payment => to_values(&data.payments),
        }
    }
}

impl Default for DemoSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DataSource for DemoSource {
    /// Lists the full collection; of the advisory options only `page` and
    /// `page_size` are honored (by slicing), matching what the contract
    /// guarantees for "give me everything" requests.
    fn list(&self, kind: EntityKind, opts: &ListOptions) -> Result<Page<Value>> {
        let items = self.collection(kind)?;
        let total = items.len();

        let page = opts.page.unwrap_or(1).max(1);
        let page_size = opts.page_size.unwrap_or(total.max(1));
        let start = (page - 1).saturating_mul(page_size).min(total);
        let end = start.saturating_add(page_size).min(total);

        Ok(Page {
            items: items[start..end].to_vec(),
            total,
            page,
            page_size,
        })
    }

    fn get(&self, kind: EntityKind, id: i64) -> Result<Value> {
        let items = self.collection(kind)?;
        items
            .into_iter()
            .find(|v| v.get("id").and_then(|i| i.as_i64()) == Some(id))
            .ok_or_else(|| NasiyaError::NotFound(format!("{} id {}", kind, id)))
    }
}

fn to_values<T: serde::Serialize>(records: &[T]) -> Result<Vec<Value>> {
    records
        .iter()
        .map(|r| serde_json::to_value(r).map_err(NasiyaError::from))
        .collect()
}
