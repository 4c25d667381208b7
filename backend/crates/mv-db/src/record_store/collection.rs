use crate::record_store::json_order::kind;
use crate::record_store::{CREATED_AT_FIELD, ID_FIELD};
use crate::{DbError, KvStore, Query, Result as DbErrorResult};

use std::marker::PhantomData;
use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use log::{debug, error, warn};
use mv_config::LatencyConfig;
use mv_core::{Envelope, Record};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use uuid::Uuid;

/// One named collection of records of payload type `T`.
///
/// Rows are persisted as a JSON array under a single key, in insertion
/// order. Rows are never updated or deleted.
pub struct Collection<T> {
    kv: Arc<dyn KvStore>,
    key: String,
    latency: LatencyConfig,
    _payload: PhantomData<fn() -> T>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            kv: Arc::clone(&self.kv),
            key: self.key.clone(),
            latency: self.latency,
            _payload: PhantomData,
        }
    }
}

impl<T> Collection<T> {
    pub(crate) fn new(kv: Arc<dyn KvStore>, key: String, latency: LatencyConfig) -> Self {
        Self {
            kv,
            key,
            latency,
            _payload: PhantomData,
        }
    }

    /// Storage key this collection is persisted under
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned + Send + 'static,
{
    /// Append `payload` with a fresh id and timestamp, then resolve after the
    /// insert latency. The row is persisted before the delay starts.
    pub async fn insert(&self, payload: &T) -> Envelope<Record<T>> {
        let result = self.insert_immediate(payload);
        tokio::time::sleep(self.latency.insert()).await;

        match result {
            Ok(record) => Envelope::ok(record),
            Err(e) => {
                error!("Insert into {} failed: {}", self.key, e);
                Envelope::from_error(&e)
            }
        }
    }

    /// Append `payload` without the artificial latency.
    ///
    /// Generated `id` and `created_at` always win: payload fields with those
    /// names are discarded.
    pub fn insert_immediate(&self, payload: &T) -> DbErrorResult<Record<T>> {
        let row = self.build_row(payload)?;

        self.kv.update(&self.key, &mut |current| {
            let mut rows = rows_from(&self.key, current)?;
            rows.push(row.clone());
            Ok(Value::Array(rows))
        })?;

        debug!("Inserted row into {}", self.key);
        decode_row(&self.key, row)
    }

    /// Begin a query over a snapshot of the collection taken now. Later
    /// inserts are not visible to the returned builder.
    pub fn select(&self) -> Query<T> {
        let rows = self
            .kv
            .read(&self.key)
            .and_then(|current| rows_from(&self.key, current));

        Query::new(self.key.clone(), rows, self.latency.query())
    }

    fn build_row(&self, payload: &T) -> DbErrorResult<Value> {
        let fields = match serde_json::to_value(payload).map_err(|e| DbError::json(&self.key, e))? {
            Value::Object(fields) => fields,
            other => return Err(DbError::not_an_object(&self.key, kind(&other))),
        };

        let mut row = Map::new();
        row.insert(
            ID_FIELD.to_string(),
            Value::String(Uuid::new_v4().to_string()),
        );
        row.insert(
            CREATED_AT_FIELD.to_string(),
            Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)),
        );

        for (name, value) in fields {
            if name == ID_FIELD || name == CREATED_AT_FIELD {
                warn!(
                    "Discarding caller-supplied '{}' on insert into {}",
                    name, self.key
                );
                continue;
            }
            row.insert(name, value);
        }

        Ok(Value::Object(row))
    }
}

/// Interpret a stored value as the collection's row array.
#[track_caller]
pub(crate) fn rows_from(key: &str, current: Option<Value>) -> DbErrorResult<Vec<Value>> {
    match current {
        None => Ok(Vec::new()),
        Some(Value::Array(rows)) => Ok(rows),
        Some(other) => Err(DbError::corrupt_collection(
            key,
            format!("expected an array, found {}", kind(&other)),
        )),
    }
}

pub(crate) fn decode_row<T: DeserializeOwned>(key: &str, row: Value) -> DbErrorResult<Record<T>> {
    serde_json::from_value(row).map_err(|e| DbError::json(key, e))
}
