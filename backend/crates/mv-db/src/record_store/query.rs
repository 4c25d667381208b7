use crate::record_store::collection::decode_row;
use crate::record_store::json_order::compare_fields;
use crate::{DbError, Order, Result as DbErrorResult};

use std::future::IntoFuture;
use std::marker::PhantomData;
use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use log::{debug, error};
use mv_core::{Envelope, Record};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Lazy, chainable query over a collection snapshot.
///
/// Chain methods narrow or reorder the working set; `single`, `fetch` or
/// awaiting the builder directly resolve it after the query latency.
///
/// ```ignore
/// let notes = store
///     .doctor_notes()
///     .select()
///     .eq("diagnosis_id", diagnosis_id)
///     .order("created_at", Order::Ascending)
///     .await;
/// ```
pub struct Query<T> {
    key: String,
    rows: DbErrorResult<Vec<Value>>,
    latency: Duration,
    _payload: PhantomData<fn() -> T>,
}

impl<T> Query<T> {
    pub(crate) fn new(key: String, rows: DbErrorResult<Vec<Value>>, latency: Duration) -> Self {
        Self {
            key,
            rows,
            latency,
            _payload: PhantomData,
        }
    }

    /// Keep rows whose `column` equals `value` exactly (same JSON type and value).
    pub fn eq(mut self, column: &str, value: impl Into<Value>) -> Self {
        let value = value.into();
        if let Ok(rows) = &mut self.rows {
            rows.retain(|row| row.get(column) == Some(&value));
        }
        self
    }

    pub fn order(mut self, column: &str, order: Order) -> Self {
        if let Ok(rows) = &mut self.rows {
            rows.sort_by(|a, b| {
                let ordering = compare_fields(a.get(column), b.get(column));
                match order {
                    Order::Ascending => ordering,
                    Order::Descending => ordering.reverse(),
                }
            });
        }
        self
    }

    /// Truncate the working set to its first `count` rows.
    pub fn limit(mut self, count: usize) -> Self {
        if let Ok(rows) = &mut self.rows {
            rows.truncate(count);
        }
        self
    }

    /// Rows currently in the working set; zero if the snapshot failed.
    pub fn len(&self) -> usize {
        self.rows.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: DeserializeOwned> Query<T> {
    /// First row of the working set, or `data: None` when empty.
    pub async fn single(self) -> Envelope<Record<T>> {
        tokio::time::sleep(self.latency).await;

        let result = self.rows.and_then(|rows| match rows.into_iter().next() {
            Some(row) => decode_row(&self.key, row).map(Some),
            None => Ok(None),
        });

        match result {
            Ok(record) => Envelope::maybe(record),
            Err(e) => failed(&self.key, &e),
        }
    }

    /// The whole working set.
    pub async fn fetch(self) -> Envelope<Vec<Record<T>>> {
        tokio::time::sleep(self.latency).await;

        let result = self.rows.and_then(|rows| {
            rows.into_iter()
                .map(|row| decode_row(&self.key, row))
                .collect::<DbErrorResult<Vec<Record<T>>>>()
        });

        match result {
            Ok(records) => {
                debug!("Query on {} returned {} rows", self.key, records.len());
                Envelope::ok(records)
            }
            Err(e) => failed(&self.key, &e),
        }
    }
}

impl<T> IntoFuture for Query<T>
where
    T: DeserializeOwned + Send + 'static,
{
    type Output = Envelope<Vec<Record<T>>>;
    type IntoFuture = BoxFuture<'static, Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        self.fetch().boxed()
    }
}

fn failed<U>(key: &str, e: &DbError) -> Envelope<U> {
    error!("Query on {} failed: {}", key, e);
    Envelope::from_error(e)
}
