//! [`PointStore`] implementation over the Airtable REST API.
//!
//! Talks to `https://api.airtable.com/v0/{base}/{table}` with bearer-token
//! auth. Column names are configurable because the production base predates
//! this service (its latitude column is named "Attitude"). Latitude and
//! longitude are written as strings since the columns are short text.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, warn};
use url::Url;

use crate::config::Config;
use crate::domain::entities::{NewPoint, Point, Role};
use crate::domain::repositories::PointStore;
use crate::error::AppError;
use crate::geo::Coordinate;

const API_BASE: &str = "https://api.airtable.com/v0";

/// Airtable computed field used to list newest records first.
const CREATED_SORT_FIELD: &str = "Created time";

/// Errors from the Airtable API layer.
///
/// Mapped to [`AppError::Upstream`] at the [`PointStore`] boundary.
#[derive(Debug, thiserror::Error)]
pub enum AirtableError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("rate limited")]
    RateLimited,

    #[error("server error: HTTP {0}")]
    Server(u16),

    #[error("API error: {0}")]
    Api(String),

    #[error("malformed record in response")]
    MalformedRecord,
}

impl AirtableError {
    /// Whether a retry can reasonably succeed.
    fn is_retryable(&self) -> bool {
        matches!(self, AirtableError::RateLimited | AirtableError::Server(_))
    }

    /// Stricter predicate for writes: only statuses that guarantee the
    /// record was not created.
    fn is_retryable_write(&self) -> bool {
        matches!(self, AirtableError::RateLimited)
    }
}

impl From<AirtableError> for AppError {
    fn from(e: AirtableError) -> Self {
        AppError::upstream(
            "Point store request failed",
            serde_json::json!({ "reason": e.to_string() }),
        )
    }
}

/// Connection settings for one base/table pair.
#[derive(Debug, Clone)]
pub struct AirtableConfig {
    pub token: String,
    pub base_id: String,
    pub table_id: String,
    pub field_name: String,
    pub field_lat: String,
    pub field_lng: String,
    pub field_role: String,
}

impl AirtableConfig {
    /// Builds the connection settings from service configuration.
    ///
    /// # Panics
    ///
    /// Never panics; callers must only invoke this when
    /// [`Config::is_airtable_enabled`] holds, otherwise the token is empty.
    pub fn from_config(config: &Config) -> Self {
        Self {
            token: config.airtable_token.clone().unwrap_or_default(),
            base_id: config.airtable_base_id.clone(),
            table_id: config.airtable_table_id.clone(),
            field_name: config.field_name.clone(),
            field_lat: config.field_lat.clone(),
            field_lng: config.field_lng.clone(),
            field_role: config.field_role.clone(),
        }
    }
}

/// Point store backed by one Airtable table.
pub struct AirtableStore {
    client: reqwest::Client,
    config: AirtableConfig,
}

#[derive(Debug, Deserialize)]
struct RecordList {
    #[serde(default)]
    records: Vec<Record>,
}

#[derive(Debug, Deserialize)]
struct Record {
    id: String,
    #[serde(rename = "createdTime")]
    created_time: Option<DateTime<Utc>>,
    #[serde(default)]
    fields: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorDetail,
}

/// Airtable reports errors either as `{"error": "NOT_FOUND"}` or as
/// `{"error": {"type": ..., "message": ...}}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApiErrorDetail {
    Structured { message: String },
    Plain(String),
}

impl AirtableStore {
    pub fn new(client: reqwest::Client, config: AirtableConfig) -> Self {
        Self { client, config }
    }

    fn table_url(&self) -> Result<Url, AirtableError> {
        Url::parse(&format!(
            "{API_BASE}/{}/{}",
            self.config.base_id, self.config.table_id
        ))
        .map_err(|e| AirtableError::Api(format!("invalid base/table id: {e}")))
    }

    async fn fetch_records(&self, max: usize) -> Result<Vec<Record>, AirtableError> {
        let mut url = self.table_url()?;
        url.query_pairs_mut()
            .append_pair("maxRecords", &max.to_string())
            .append_pair("sort[0][field]", CREATED_SORT_FIELD)
            .append_pair("sort[0][direction]", "desc");

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.config.token)
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let list: RecordList = response.json().await?;
        Ok(list.records)
    }

    async fn post_record(&self, new_point: &NewPoint) -> Result<Record, AirtableError> {
        let url = self.table_url()?;

        let mut fields = Map::new();
        fields.insert(
            self.config.field_name.clone(),
            Value::String(new_point.name.clone()),
        );
        fields.insert(
            self.config.field_role.clone(),
            Value::String(new_point.role.as_str().to_string()),
        );
        // Short-text columns: numbers go over the wire as strings.
        fields.insert(
            self.config.field_lat.clone(),
            Value::String(new_point.coordinate.lat.to_string()),
        );
        fields.insert(
            self.config.field_lng.clone(),
            Value::String(new_point.coordinate.lng.to_string()),
        );

        let payload = serde_json::json!({ "records": [{ "fields": fields }] });

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.config.token)
            .json(&payload)
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let mut list: RecordList = response.json().await?;
        if list.records.is_empty() {
            return Err(AirtableError::MalformedRecord);
        }
        Ok(list.records.remove(0))
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, AirtableError> {
        let status = response.status();
        if status.as_u16() == 429 {
            return Err(AirtableError::RateLimited);
        }
        if status.is_server_error() {
            return Err(AirtableError::Server(status.as_u16()));
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&text)
                .map(|envelope| match envelope.error {
                    ApiErrorDetail::Structured { message } => message,
                    ApiErrorDetail::Plain(message) => message,
                })
                .unwrap_or_else(|_| format!("HTTP {status}"));
            return Err(AirtableError::Api(message));
        }
        Ok(response)
    }

    fn backoff() -> impl Iterator<Item = std::time::Duration> {
        ExponentialBackoff::from_millis(200).map(jitter).take(2)
    }
}

#[async_trait]
impl PointStore for AirtableStore {
    async fn list_points(&self, max: usize) -> Result<Vec<Point>, AppError> {
        let records = RetryIf::spawn(
            Self::backoff(),
            || self.fetch_records(max),
            AirtableError::is_retryable,
        )
        .await?;

        debug!("fetched {} records from Airtable", records.len());

        Ok(records
            .into_iter()
            .filter_map(|record| point_from_record(&self.config, record))
            .collect())
    }

    async fn create_point(&self, new_point: NewPoint) -> Result<Point, AppError> {
        let record = RetryIf::spawn(
            Self::backoff(),
            || self.post_record(&new_point),
            AirtableError::is_retryable_write,
        )
        .await?;

        point_from_record(&self.config, record)
            .ok_or(AirtableError::MalformedRecord)
            .map_err(AppError::from)
    }
}

/// Converts a raw record into a [`Point`], or `None` when the record is not
/// renderable: missing or blank name, non-finite or missing coordinates, or
/// a role outside the enumeration.
fn point_from_record(config: &AirtableConfig, record: Record) -> Option<Point> {
    let name = string_field(&record.fields, &config.field_name)?;

    let role: Role = match string_field(&record.fields, &config.field_role)?.parse() {
        Ok(role) => role,
        Err(e) => {
            warn!("skipping record {}: {e}", record.id);
            return None;
        }
    };

    let lat = number_field(&record.fields, &config.field_lat)?;
    let lng = number_field(&record.fields, &config.field_lng)?;

    Some(Point {
        id: record.id,
        name,
        role,
        coordinate: Coordinate { lat, lng },
        created_time: record.created_time,
    })
}

fn string_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    let value = fields.get(key)?.as_str()?.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Reads a numeric field that may be stored as a number or as text.
fn number_field(fields: &Map<String, Value>, key: &str) -> Option<f64> {
    let value = match fields.get(key)? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse().ok()?,
        _ => return None,
    };
    value.is_finite().then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_config() -> AirtableConfig {
        AirtableConfig {
            token: "pat-test".to_string(),
            base_id: "appTEST".to_string(),
            table_id: "tblTEST".to_string(),
            field_name: "Name".to_string(),
            field_lat: "Attitude".to_string(),
            field_lng: "Longitude".to_string(),
            field_role: "Role".to_string(),
        }
    }

    fn record(fields: Value) -> Record {
        serde_json::from_value(json!({
            "id": "recABC123",
            "createdTime": "2026-08-01T12:00:00.000Z",
            "fields": fields,
        }))
        .unwrap()
    }

    #[test]
    fn test_point_from_record_with_string_coordinates() {
        let record = record(json!({
            "Name": "Anna",
            "Role": "RED PINS",
            "Attitude": "52.2297",
            "Longitude": "21.0122",
        }));

        let point = point_from_record(&test_config(), record).unwrap();
        assert_eq!(point.id, "recABC123");
        assert_eq!(point.name, "Anna");
        assert_eq!(point.role, Role::RedPins);
        assert_eq!(
            point.coordinate,
            Coordinate {
                lat: 52.2297,
                lng: 21.0122
            }
        );
        assert!(point.created_time.is_some());
    }

    #[test]
    fn test_point_from_record_with_numeric_coordinates() {
        let record = record(json!({
            "Name": "Ola",
            "Role": "BLUE PINS",
            "Attitude": 52.2297,
            "Longitude": 21.0122,
        }));

        let point = point_from_record(&test_config(), record).unwrap();
        assert_eq!(point.coordinate.lat, 52.2297);
    }

    #[test]
    fn test_record_without_name_is_skipped() {
        let record = record(json!({
            "Role": "RED PINS",
            "Attitude": "52.0",
            "Longitude": "21.0",
        }));

        assert!(point_from_record(&test_config(), record).is_none());
    }

    #[test]
    fn test_record_with_blank_name_is_skipped() {
        let record = record(json!({
            "Name": "   ",
            "Role": "RED PINS",
            "Attitude": "52.0",
            "Longitude": "21.0",
        }));

        assert!(point_from_record(&test_config(), record).is_none());
    }

    #[test]
    fn test_record_with_unknown_role_is_skipped() {
        let record = record(json!({
            "Name": "Anna",
            "Role": "GREEN PINS",
            "Attitude": "52.0",
            "Longitude": "21.0",
        }));

        assert!(point_from_record(&test_config(), record).is_none());
    }

    #[test]
    fn test_record_with_non_finite_latitude_is_skipped() {
        // "NaN" parses as an f64 but fails the finite check.
        let record = record(json!({
            "Name": "Anna",
            "Role": "RED PINS",
            "Attitude": "NaN",
            "Longitude": "21.0",
        }));

        assert!(point_from_record(&test_config(), record).is_none());
    }

    #[test]
    fn test_record_with_unparseable_latitude_is_skipped() {
        let record = record(json!({
            "Name": "Anna",
            "Role": "RED PINS",
            "Attitude": "fifty-two",
            "Longitude": "21.0",
        }));

        assert!(point_from_record(&test_config(), record).is_none());
    }

    #[test]
    fn test_api_error_detail_both_shapes() {
        let structured: ApiErrorEnvelope = serde_json::from_str(
            r#"{"error":{"type":"INVALID_REQUEST","message":"Unknown field"}}"#,
        )
        .unwrap();
        match structured.error {
            ApiErrorDetail::Structured { message } => assert_eq!(message, "Unknown field"),
            ApiErrorDetail::Plain(_) => panic!("expected structured error"),
        }

        let plain: ApiErrorEnvelope = serde_json::from_str(r#"{"error":"NOT_FOUND"}"#).unwrap();
        match plain.error {
            ApiErrorDetail::Plain(message) => assert_eq!(message, "NOT_FOUND"),
            ApiErrorDetail::Structured { .. } => panic!("expected plain error"),
        }
    }
}
