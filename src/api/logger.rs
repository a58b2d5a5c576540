use chrono::NaiveDate;

use super::client::{ApiClient, ApiError};
use crate::models::{DetailRecord, Invoice, ReportKind, RoomReport};

const QUERY_INVOICE: &str = "/syslogger/query_invoice";
const QUERY_RDR: &str = "/syslogger/query_rdr";
const QUERY_REPORT: &str = "/syslogger/query_report";

impl ApiClient {
    /// Bill for the room's current or last stay
    pub async fn query_invoice(&self, room_id: &str) -> Result<Invoice, ApiError> {
        required(self.get(QUERY_INVOICE, &[("room_id", room_id.to_string())]).await)
    }

    /// Detail records of the room's stay
    pub async fn query_rdr(&self, room_id: &str) -> Result<Vec<DetailRecord>, ApiError> {
        self.get(QUERY_RDR, &[("room_id", room_id.to_string())])
            .await
            .map(Option::unwrap_or_default)
    }

    /// Usage report for the period of `kind` containing `date`
    pub async fn query_report(
        &self,
        room_id: &str,
        kind: ReportKind,
        date: NaiveDate,
    ) -> Result<RoomReport, ApiError> {
        required(self.get(QUERY_REPORT, &report_query(room_id, kind, date)).await)
    }
}

/// Query parameters for the query_report endpoint
pub fn report_query(room_id: &str, kind: ReportKind, date: NaiveDate) -> Vec<(&'static str, String)> {
    vec![
        ("qtype", kind.as_query().to_string()),
        ("room_id", room_id.to_string()),
        ("date", date.format("%Y-%m-%d").to_string()),
    ]
}

fn required<T>(result: Result<Option<T>, ApiError>) -> Result<T, ApiError> {
    result?.ok_or_else(|| ApiError::Deserialization("response has no result".to_string()))
}
