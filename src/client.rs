use std::collections::HashMap;
use std::str::FromStr;

use aws_sdk_dynamodb::model::{AttributeValue, DeleteRequest, KeysAndAttributes, ReturnValue, WriteRequest};
use aws_sdk_dynamodb::output::{BatchWriteItemOutput, UpdateItemOutput};
use http::StatusCode;
use typed_builder::TypedBuilder;

use crate::ddb::batch_get_item::{BatchGetItem, BatchGetItemInput};
use crate::ddb::batch_write_item::{BatchWriteItem, BatchWriteItemInput};
use crate::ddb::delete_item::{DeleteItem, DeleteItemInput};
use crate::ddb::get_item::{GetItem, GetItemInput};
use crate::ddb::put_item::{PutItem, PutItemInput};
use crate::ddb::query::{Query, QueryInput};
use crate::ddb::scan::{Scan, ScanInput};
use crate::ddb::update_item::{UpdateItem, UpdateItemInput};
use crate::ddb::{Adapter, RemoteError};
use crate::error::TableError;
use crate::expression;

/// Wire representation of a stored item: attribute name to tagged value.
/// Forwarded verbatim, never interpreted locally.
pub type Item = HashMap<String, AttributeValue>;

/// Subset of an Item's attributes addressing at most one item in a table.
pub type Key = HashMap<String, AttributeValue>;

/// BatchWriteItem accepts at most this many requests per call.
const MAX_BATCH_WRITE_REQUESTS: usize = 25;

pub trait ThreadSafeDdbClient:
    GetItem + PutItem + DeleteItem + UpdateItem + Query + Scan + BatchGetItem + BatchWriteItem + Send + Sync
{
}
impl<T: GetItem + PutItem + DeleteItem + UpdateItem + Query + Scan + BatchGetItem + BatchWriteItem + Send + Sync>
    ThreadSafeDdbClient for T
{
}

/// Connection parameters for [`TableClient::new`]. Credentials and any value
/// not set here come from the ambient AWS environment.
#[derive(Debug, TypedBuilder)]
pub struct TableClientConfig {
    #[builder(default, setter(strip_option, into))]
    pub region: Option<String>,

    /// Endpoint URL override, e.g. a local DynamoDB instance.
    #[builder(default, setter(strip_option, into))]
    pub endpoint: Option<String>,

    /// When set, failures are logged with their full detail before being
    /// normalized. Logging never affects returned results.
    #[builder(default = false)]
    pub development_mode: bool,
}

/// Thin table client: builds request parameters from call arguments, issues
/// one remote call per operation, and normalizes every failure into a
/// [`TableError`]. No retries, no pagination, no local state beyond the shared
/// connection handle.
pub struct TableClient<T: ThreadSafeDdbClient> {
    ddb: T,
    development_mode: bool,
}

impl TableClient<Adapter> {
    /// Builds a client from the ambient AWS environment, honoring the region
    /// and endpoint overrides in `conf`.
    pub async fn new(conf: &TableClientConfig) -> Result<Self, TableError> {
        let shared_config = aws_config::load_from_env().await;
        let mut builder = aws_sdk_dynamodb::config::Builder::from(&shared_config);

        if let Some(region) = &conf.region {
            log::info!("Using DynamoDB in region: {}.", region);
            builder = builder.region(aws_sdk_dynamodb::Region::new(region.clone()));
        }

        if let Some(endpoint) = &conf.endpoint {
            log::info!("Using DynamoDB with endpoint: {}.", endpoint);
            let uri = http::Uri::from_str(endpoint).map_err(|e| {
                if conf.development_mode {
                    tracing::error!(error = ?e, "Invalid DynamoDB endpoint.");
                }
                TableError::internal()
            })?;
            builder = builder.endpoint_resolver(aws_sdk_dynamodb::Endpoint::immutable(uri));
        }

        let raw = aws_sdk_dynamodb::Client::from_conf(builder.build());
        Ok(TableClient {
            ddb: raw.into(),
            development_mode: conf.development_mode,
        })
    }
}

impl<T: ThreadSafeDdbClient> TableClient<T> {
    /// Wraps an existing remote client. Useful for tests and for callers that
    /// configure the SDK themselves.
    pub fn with_client(ddb: T, development_mode: bool) -> Self {
        TableClient { ddb, development_mode }
    }

    /// Stores `item`, returning it as given. A failed condition expression
    /// maps to 409.
    pub async fn set(&self, table: &str, item: Item, condition_expression: Option<&str>) -> Result<Item, TableError> {
        let input = PutItemInput::builder()
            .table_name(table)
            .item(item.clone())
            .condition_expression(condition_expression.map(String::from))
            .build();

        self.ddb
            .put_item(input)
            .await
            .map_err(|e| self.normalize("PutItem", e, StatusCode::CONFLICT))?;

        Ok(item)
    }

    /// Fetches the item addressed by `key`. An absent item maps to 404.
    pub async fn get(&self, table: &str, key: Key) -> Result<Item, TableError> {
        let input = GetItemInput::builder().table_name(table).key(key).build();

        let output = self.ddb.get_item(input).await.map_err(|e| self.internal("GetItem", e))?;

        output.item.ok_or_else(|| TableError::not_found("Item not found."))
    }

    /// Fetches every item addressed by `keys` in a single call, optionally
    /// restricted to a projection. Unprocessed keys are not resubmitted.
    pub async fn batch_get(
        &self,
        table: &str,
        keys: Vec<Key>,
        projection_expression: Option<&str>,
    ) -> Result<Vec<Item>, TableError> {
        let requests = KeysAndAttributes::builder()
            .set_keys(Some(keys))
            .set_projection_expression(projection_expression.map(String::from))
            .build();
        let input = BatchGetItemInput::builder()
            .request_items(HashMap::from([(table.to_owned(), requests)]))
            .build();

        let output = self
            .ddb
            .batch_get_item(input)
            .await
            .map_err(|e| self.internal("BatchGetItem", e))?;

        let mut responses = output.responses.unwrap_or_default();
        Ok(responses.remove(table).unwrap_or_default())
    }

    /// Applies `requests` (puts and deletes) in a single call, returning the
    /// raw response. Any request left unprocessed maps to 500; the caller must
    /// resubmit, the client never retries.
    pub async fn batch_write(&self, table: &str, requests: Vec<WriteRequest>) -> Result<BatchWriteItemOutput, TableError> {
        let input = BatchWriteItemInput::builder()
            .request_items(HashMap::from([(table.to_owned(), requests)]))
            .build();

        let output = self
            .ddb
            .batch_write_item(input)
            .await
            .map_err(|e| self.internal("BatchWriteItem", e))?;

        let unprocessed: usize = output
            .unprocessed_items
            .as_ref()
            .map_or(0, |items| items.values().map(Vec::len).sum());
        if unprocessed > 0 {
            if self.development_mode {
                tracing::error!(count = unprocessed, "BatchWriteItem left requests unprocessed.");
            }
            return Err(TableError::internal());
        }

        Ok(output)
    }

    /// Applies `update_expression` to the item addressed by `key`, returning
    /// the raw response. The return-value mode defaults to all new values.
    /// A failed condition expression maps to 404.
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        table: &str,
        key: Key,
        update_expression: &str,
        expression_attribute_names: HashMap<String, String>,
        expression_attribute_values: HashMap<String, AttributeValue>,
        condition_expression: Option<&str>,
        return_values: Option<ReturnValue>,
    ) -> Result<UpdateItemOutput, TableError> {
        let input = UpdateItemInput::builder()
            .table_name(table)
            .key(key)
            .update_expression(update_expression)
            .expression_attribute_names((!expression_attribute_names.is_empty()).then(|| expression_attribute_names))
            .expression_attribute_values((!expression_attribute_values.is_empty()).then(|| expression_attribute_values))
            .condition_expression(condition_expression.map(String::from))
            .return_values(Some(return_values.unwrap_or(ReturnValue::AllNew)))
            .build();

        self.ddb
            .update_item(input)
            .await
            .map_err(|e| self.normalize("UpdateItem", e, StatusCode::NOT_FOUND))
    }

    /// Deletes the item addressed by `key`, returning the key as given.
    /// A failed condition expression maps to 404.
    pub async fn delete(&self, table: &str, key: Key, condition_expression: Option<&str>) -> Result<Key, TableError> {
        let input = DeleteItemInput::builder()
            .table_name(table)
            .key(key.clone())
            .condition_expression(condition_expression.map(String::from))
            .build();

        self.ddb
            .delete_item(input)
            .await
            .map_err(|e| self.normalize("DeleteItem", e, StatusCode::NOT_FOUND))?;

        Ok(key)
    }

    /// Returns the items matching `key_condition_expression`, optionally
    /// narrowed by a filter expression. Attribute-name placeholders for the
    /// filter are derived from the filter value keys.
    pub async fn query(
        &self,
        table: &str,
        key_condition_expression: &str,
        key_values: HashMap<String, AttributeValue>,
        filter_expression: Option<&str>,
        filter_values: Option<HashMap<String, AttributeValue>>,
    ) -> Result<Vec<Item>, TableError> {
        let mut values = key_values;
        let mut names = None;
        if let Some(filter_values) = filter_values {
            names = Some(expression::names_from_values(&filter_values, None));
            values.extend(filter_values);
        }

        let input = QueryInput::builder()
            .table_name(table)
            .key_condition_expression(key_condition_expression)
            .filter_expression(filter_expression.map(String::from))
            .expression_attribute_names(names)
            .expression_attribute_values(Some(values))
            .build();

        let output = self.ddb.query(input).await.map_err(|e| self.internal("Query", e))?;

        Ok(output.items.unwrap_or_default())
    }

    /// Like [`TableClient::query`], but against a global secondary index. The
    /// caller-supplied attribute-name map is merged with the names derived
    /// from the filter values; caller entries win.
    #[allow(clippy::too_many_arguments)]
    pub async fn query_by_gsi(
        &self,
        table: &str,
        index_name: &str,
        key_condition_expression: &str,
        expression_attribute_names: HashMap<String, String>,
        key_values: HashMap<String, AttributeValue>,
        filter_expression: Option<&str>,
        filter_values: Option<HashMap<String, AttributeValue>>,
    ) -> Result<Vec<Item>, TableError> {
        let mut values = key_values;
        let mut names = expression_attribute_names;
        if let Some(filter_values) = filter_values {
            names = expression::names_from_values(&filter_values, Some(&names));
            values.extend(filter_values);
        }

        let input = QueryInput::builder()
            .table_name(table)
            .index_name(index_name)
            .key_condition_expression(key_condition_expression)
            .filter_expression(filter_expression.map(String::from))
            .expression_attribute_names((!names.is_empty()).then(|| names))
            .expression_attribute_values(Some(values))
            .build();

        let output = self.ddb.query(input).await.map_err(|e| self.internal("Query", e))?;

        Ok(output.items.unwrap_or_default())
    }

    /// Returns every item in the table, optionally narrowed by a filter
    /// expression. Single page only; no pagination.
    pub async fn scan(
        &self,
        table: &str,
        filter_expression: Option<&str>,
        filter_values: Option<HashMap<String, AttributeValue>>,
    ) -> Result<Vec<Item>, TableError> {
        let mut names = None;
        let mut values = None;
        if let Some(filter_values) = filter_values {
            names = Some(expression::names_from_values(&filter_values, None));
            values = Some(filter_values);
        }

        let input = ScanInput::builder()
            .table_name(table)
            .filter_expression(filter_expression.map(String::from))
            .expression_attribute_names(names)
            .expression_attribute_values(values)
            .build();

        let output = self.ddb.scan(input).await.map_err(|e| self.internal("Scan", e))?;

        Ok(output.items.unwrap_or_default())
    }

    /// Scans the table once and batch-deletes every returned item, reusing
    /// each full item as the delete key. Tables larger than one scan page are
    /// only partially cleared; callers owning such tables must drive the scan
    /// themselves.
    pub async fn clear_table(&self, table: &str) -> Result<(), TableError> {
        let items = self.scan(table, None, None).await?;

        for chunk in items.chunks(MAX_BATCH_WRITE_REQUESTS) {
            let deletes = chunk
                .iter()
                .map(|item| {
                    WriteRequest::builder()
                        .delete_request(DeleteRequest::builder().set_key(Some(item.clone())).build())
                        .build()
                })
                .collect();
            self.batch_write(table, deletes).await?;
        }

        Ok(())
    }

    /// Maps a remote failure for an operation where a conditional check can
    /// fail. The condition case keeps `condition_status`; everything else
    /// collapses to 500.
    fn normalize(&self, operation: &'static str, err: RemoteError, condition_status: StatusCode) -> TableError {
        if self.development_mode {
            tracing::error!(error = ?err, "{} failed.", operation);
        }

        if err.is_conditional_check_failed() {
            TableError::new(condition_status, "The conditional request failed.")
        } else {
            TableError::internal()
        }
    }

    /// Maps a remote failure for an operation with no conditional path.
    fn internal(&self, operation: &'static str, err: RemoteError) -> TableError {
        if self.development_mode {
            tracing::error!(error = ?err, "{} failed.", operation);
        }

        TableError::internal()
    }
}
