//! Integration tests for the query interfaces over a demo source.

mod common;

use common::{now, sample_source};
use nasiya_sdk::filter::FilterCriteria;
use nasiya_sdk::source::{DataSource, EntityKind, ListOptions, Page};
use nasiya_sdk::status::Category;
use nasiya_sdk::{NasiyaError, NasiyaSdk};

fn sdk() -> NasiyaSdk {
    NasiyaSdk::builder()
        .data_source(Box::new(sample_source()))
        .build()
        .unwrap()
}

// ---------------------------------------------------------------------------
// Applications
// ---------------------------------------------------------------------------

#[test]
fn list_all_returns_the_whole_collection() {
    let apps = sdk().applications().list_all().unwrap();
    assert_eq!(apps.len(), 5);
}

#[test]
fn get_returns_the_record_or_not_found() {
    let sdk = sdk();
    let app = sdk.applications().get(1).unwrap();
    assert_eq!(app.full_name.as_deref(), Some("Aziz Karimov"));
    assert_eq!(app.term_months(), Some(3));

    let err = sdk.applications().get(999).unwrap_err();
    assert!(matches!(err, NasiyaError::NotFound(_)));
}

#[test]
fn page_applies_criteria_before_slicing() {
    let page = sdk()
        .applications()
        .page(&FilterCriteria::new().status(Category::Approved), 1, 10)
        .unwrap();
    // Applications 1 and 5 are CONFIRMED.
    assert_eq!(page.total, 2);
    assert_eq!(page.total_pages, 1);
}

#[test]
fn by_region_resolves_through_branches() {
    let apps = sdk().applications().by_region("Toshkent").unwrap();
    let ids: Vec<i64> = apps.iter().map(|a| a.id).collect();
    // Branch 1 is in Toshkent; applications 1 and 3 belong to it.
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn by_branch_and_by_category() {
    let sdk = sdk();
    assert_eq!(sdk.applications().by_branch(2).unwrap().len(), 2);
    assert_eq!(
        sdk.applications()
            .by_category(Category::Rejected)
            .unwrap()
            .len(),
        1
    );
}

// ---------------------------------------------------------------------------
// Branches
// ---------------------------------------------------------------------------

#[test]
fn regions_are_distinct_and_sorted() {
    let regions = sdk().branches().regions().unwrap();
    assert_eq!(regions, vec!["Samarqand".to_string(), "Toshkent".to_string()]);
}

#[test]
fn branch_search_matches_name() {
    let page = sdk()
        .branches()
        .page(&FilterCriteria::new().search("texnomart"), 1, 10)
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, 1);
}

// ---------------------------------------------------------------------------
// Customers
// ---------------------------------------------------------------------------

#[test]
fn customer_counters_recompute_from_nested_history() {
    let customers = sdk().customers().list_with_counters().unwrap();
    assert_eq!(customers.len(), 1);
    let (_, counters) = &customers[0];
    // CONFIRMED + FINISHED + REJECTED + CREATED
    assert_eq!(counters.total, 4);
    assert_eq!(counters.active, 1);
    assert_eq!(counters.completed, 1);
    assert_eq!(counters.rejected, 1);
}

#[test]
fn backend_counters_survive_when_no_history_is_attached() {
    use nasiya_sdk::models::Customer;
    let customer = Customer {
        id: 2,
        active_applications: 7,
        total_applications: 9,
        ..Customer::default()
    };
    let counters = customer.counters();
    assert_eq!(counters.active, 7);
    assert_eq!(counters.total, 9);
}

// ---------------------------------------------------------------------------
// Payments and debts
// ---------------------------------------------------------------------------

#[test]
fn payments_for_application() {
    let payments = sdk().payments().for_application(1).unwrap();
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0].amount, 400_000.0);
}

#[test]
fn debt_ledger_for_application() {
    let debt = sdk().debts().for_application(1, now()).unwrap();
    // 1 200 000 over 3 months, 400 000 paid: first installment settled.
    assert_eq!(debt.total_debt, 800_000.0);
    assert_eq!(debt.current_month, Some(2));
}

#[test]
fn debts_cover_only_approved_applications() {
    let debts = sdk().debts().list_all(now()).unwrap();
    // Applications 1 and 5 classify as Approved.
    assert_eq!(debts.len(), 2);
}

// ---------------------------------------------------------------------------
// Dashboard degradation
// ---------------------------------------------------------------------------

struct FailingSource;

impl DataSource for FailingSource {
    fn list(&self, _: EntityKind, _: &ListOptions) -> nasiya_sdk::Result<Page<serde_json::Value>> {
        Err(NasiyaError::InvalidArgument("backend down".to_string()))
    }

    fn get(&self, _: EntityKind, _: i64) -> nasiya_sdk::Result<serde_json::Value> {
        Err(NasiyaError::InvalidArgument("backend down".to_string()))
    }
}

#[test]
fn dashboard_degrades_to_zero_series_on_source_failure() {
    let sdk = NasiyaSdk::builder()
        .data_source(Box::new(FailingSource))
        .build()
        .unwrap();

    let sales = sdk.dashboard().daily_sales(now());
    assert_eq!(sales.total, 0.0);
    assert_eq!(sales.series.len(), 7);

    let breakdown = sdk.dashboard().status_breakdown();
    assert_eq!(breakdown.total(), 0);
}

#[test]
fn dashboard_charts_from_sample_data() {
    let sdk = sdk();
    let sales = sdk.dashboard().daily_sales(now());
    // Only application 1 (CONFIRMED, today 10:00) counts.
    assert_eq!(sales.total, 1_200_000.0);
    assert_eq!(sales.series[2].value, 1200.0);

    let breakdown = sdk.dashboard().status_breakdown();
    assert_eq!(breakdown.total(), 5);
    assert_eq!(breakdown.approved, 2);
    assert_eq!(breakdown.limit, 1);
}

// ---------------------------------------------------------------------------
// Undecodable records
// ---------------------------------------------------------------------------

#[test]
fn malformed_rows_are_skipped_not_fatal() {
    struct MalformedSource;

    impl DataSource for MalformedSource {
        fn list(
            &self,
            _: EntityKind,
            _: &ListOptions,
        ) -> nasiya_sdk::Result<Page<serde_json::Value>> {
            Ok(Page {
                items: vec![
                    serde_json::json!({"id": 1, "status": "CONFIRMED"}),
                    serde_json::json!("not an object"),
                ],
                total: 2,
                page: 1,
                page_size: 2,
            })
        }

        fn get(&self, _: EntityKind, _: i64) -> nasiya_sdk::Result<serde_json::Value> {
            Err(NasiyaError::NotFound("nothing".to_string()))
        }
    }

    let sdk = NasiyaSdk::builder()
        .data_source(Box::new(MalformedSource))
        .build()
        .unwrap();
    let apps = sdk.applications().list_all().unwrap();
    assert_eq!(apps.len(), 1);
    assert_eq!(apps[0].id, 1);
}
