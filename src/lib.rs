//! Thin client for DynamoDB tables.
//!
//! Each operation builds the request parameters from its arguments, issues a
//! single call through a shared connection handle, and normalizes any failure
//! into a [`TableError`] carrying an HTTP-like status code: 404 for a missing
//! item or a failed update/delete condition, 409 for a failed create
//! condition, 500 for everything else. The client keeps no state, performs no
//! retries, and handles no pagination; the remote service does all real work.
//!
//! ```no_run
//! use std::collections::HashMap;
//!
//! use aws_sdk_dynamodb::model::AttributeValue;
//! use ddb_table_client::{TableClient, TableClientConfig};
//!
//! # async fn run() -> Result<(), ddb_table_client::TableError> {
//! let conf = TableClientConfig::builder().region("eu-west-1").build();
//! let client = TableClient::new(&conf).await?;
//!
//! let item = HashMap::from([("id".to_owned(), AttributeValue::S("a".to_owned()))]);
//! client.set("books", item.clone(), None).await?;
//! let fetched = client.get("books", item).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod ddb;
pub mod error;
pub mod expression;
pub mod telemetry;

pub use client::{Item, Key, TableClient, TableClientConfig};
pub use error::TableError;
