//! Dashboard queries: fetch + aggregate with graceful degradation.
//!
//! A data-source failure on the dashboard must never surface as an
//! error: each chart degrades to its empty/zero shape and the failure is
//! logged. The pure aggregation itself lives in [`crate::dashboard`].

use chrono::{DateTime, TimeZone};

use super::fetch_all;
use crate::dashboard::{
    self, DailySales, MonthlyRevenue, RevenueWindow, StatusBreakdown, WeeklyActivity,
};
use crate::models::Application;
use crate::source::{DataSource, EntityKind};

/// Query interface for the dashboard cards.
pub struct DashboardQuery<'a> {
    source: &'a dyn DataSource,
}

impl<'a> DashboardQuery<'a> {
    pub fn new(source: &'a dyn DataSource) -> Self {
        Self { source }
    }

    pub fn daily_sales<Tz: TimeZone>(&self, now: DateTime<Tz>) -> DailySales {
        dashboard::daily_sales(&self.applications_or_empty(), now)
    }

    pub fn weekly_activity<Tz: TimeZone>(&self, now: DateTime<Tz>) -> WeeklyActivity {
        dashboard::weekly_activity(&self.applications_or_empty(), now)
    }

    pub fn monthly_revenue<Tz: TimeZone>(
        &self,
        window: RevenueWindow,
        now: DateTime<Tz>,
    ) -> MonthlyRevenue {
        dashboard::monthly_revenue(&self.applications_or_empty(), window, now)
    }

    pub fn status_breakdown(&self) -> StatusBreakdown {
        dashboard::status_breakdown(&self.applications_or_empty())
    }

    fn applications_or_empty(&self) -> Vec<Application> {
        match fetch_all(self.source, EntityKind::Application) {
            Ok(apps) => apps,
            Err(e) => {
                log::warn!("dashboard fetch failed, rendering empty series: {}", e);
                Vec::new()
            }
        }
    }
}
