use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::model::KeysAndAttributes;
use aws_sdk_dynamodb::output::BatchGetItemOutput;
use typed_builder::TypedBuilder;

use super::adapter::Adapter;
use super::remote_error::RemoteError;

#[derive(TypedBuilder)]
pub struct BatchGetItemInput {
    /// Keys (and optional projections) to fetch, grouped by table.
    pub request_items: HashMap<String, KeysAndAttributes>,
}

#[async_trait]
pub trait BatchGetItem {
    async fn batch_get_item(&self, input: BatchGetItemInput) -> Result<BatchGetItemOutput, RemoteError>;
}

#[async_trait]
impl BatchGetItem for Adapter {
    async fn batch_get_item(&self, input: BatchGetItemInput) -> Result<BatchGetItemOutput, RemoteError> {
        self.raw
            .batch_get_item()
            .set_request_items(Some(input.request_items))
            .send()
            .await
            .map_err(RemoteError::from)
    }
}
