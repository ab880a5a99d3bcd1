use std::collections::HashMap;
use std::time::Duration;

use crate::source::EntityKind;

/// Default backend base URL. Override via [`NasiyaSdkBuilder::base_url`](crate::NasiyaSdkBuilder::base_url).
pub const DEFAULT_BASE_URL: &str = "http://localhost:3030/api";

/// Page size used to fetch an entire collection in one request.
///
/// The backend paginates server-side; the SDK defeats that by asking for
/// the maximal page and filtering in memory.
pub const FETCH_ALL_PAGE_SIZE: usize = 10_000;

/// Default table page size for client-side pagination.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default HTTP request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default debounce window before a refetch fires.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Bounds within which a caller-supplied debounce window is clamped.
pub const MIN_DEBOUNCE: Duration = Duration::from_millis(150);
pub const MAX_DEBOUNCE: Duration = Duration::from_millis(500);

/// REST endpoint path for each entity kind, relative to the base URL.
pub fn endpoints() -> HashMap<EntityKind, &'static str> {
    HashMap::from([
        (EntityKind::Application, "zayavka"),
        (EntityKind::Branch, "fillial"),
        (EntityKind::Customer, "customer"),
        (EntityKind::Merchant, "merchant"),
        (EntityKind::Operator, "operator"),
        (EntityKind::Admin, "admin"),
        (EntityKind::Payment, "payment"),
    ])
}

/// Regions the backend is known to use for branches and customers.
///
/// The field is free-form on the wire; this list only seeds demo data and
/// region pickers, it is never used to validate.
pub fn known_regions() -> &'static [&'static str] {
    &[
        "Toshkent",
        "Toshkent viloyati",
        "Andijon",
        "Buxoro",
        "Farg'ona",
        "Jizzax",
        "Namangan",
        "Navoiy",
        "Qashqadaryo",
        "Qoraqalpog'iston",
        "Samarqand",
        "Sirdaryo",
        "Surxondaryo",
        "Xorazm",
    ]
}
