use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

const BACKEND_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Bill for one room stay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub room_id: String,
    #[serde(deserialize_with = "backend_time")]
    pub check_in_time: Option<NaiveDateTime>,
    #[serde(deserialize_with = "backend_time")]
    pub check_out_time: Option<NaiveDateTime>,
    pub fee: f64,
}

/// One line of the detail record: a stretch of service at a single fan speed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailRecord {
    pub room_id: String,
    #[serde(deserialize_with = "backend_time")]
    pub start_time: Option<NaiveDateTime>,
    #[serde(deserialize_with = "backend_time")]
    pub end_time: Option<NaiveDateTime>,
    pub speed: i32,
    pub fee_rate: f64,
    pub fee: f64,
}

/// Usage statistics of a room over a report period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomReport {
    pub room_id: String,
    pub on_off_times: u32,
    pub service_time: f64,
    pub fee: f64,
    pub dispatch_time: u32,
    pub rdr_number: u32,
    pub change_temp_times: u32,
    pub change_speed_times: u32,
}

/// Length of the period a report covers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportKind {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl ReportKind {
    pub const ALL: [ReportKind; 3] = [ReportKind::Daily, ReportKind::Weekly, ReportKind::Monthly];

    /// Value of the `qtype` query parameter
    pub fn as_query(&self) -> &'static str {
        match self {
            Self::Daily => "day",
            Self::Weekly => "week",
            Self::Monthly => "month",
        }
    }

    pub fn from_query(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_query() == value)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }
}

/// Times come back as `YYYY-MM-DD HH:MM:SS`; a room still checked in has none
fn backend_time<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => NaiveDateTime::parse_from_str(text, BACKEND_TIME_FORMAT)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoice_reads_backend_times() {
        let invoice: Invoice = serde_json::from_str(
            r#"{"room_id": "309c", "check_in_time": "2026-10-01 08:30:00",
                "check_out_time": null, "fee": 12.5}"#,
        )
        .unwrap();

        assert_eq!(invoice.room_id, "309c");
        assert_eq!(
            invoice.check_in_time.map(|t| t.to_string()),
            Some("2026-10-01 08:30:00".to_string())
        );
        assert_eq!(invoice.check_out_time, None);
        assert_eq!(invoice.fee, 12.5);
    }

    #[test]
    fn malformed_time_is_an_error() {
        let result: Result<DetailRecord, _> = serde_json::from_str(
            r#"{"room_id": "f3", "start_time": "yesterday", "end_time": null,
                "speed": 1, "fee_rate": 1.0, "fee": 0.0}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn report_kind_query_values() {
        for kind in ReportKind::ALL {
            assert_eq!(ReportKind::from_query(kind.as_query()), Some(kind));
        }
        assert_eq!(ReportKind::Weekly.as_query(), "week");
        assert_eq!(ReportKind::from_query("year"), None);
    }
}
