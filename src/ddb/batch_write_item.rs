use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::model::WriteRequest;
use aws_sdk_dynamodb::output::BatchWriteItemOutput;
use typed_builder::TypedBuilder;

use super::adapter::Adapter;
use super::remote_error::RemoteError;

#[derive(TypedBuilder)]
pub struct BatchWriteItemInput {
    /// Put and delete requests, grouped by table.
    pub request_items: HashMap<String, Vec<WriteRequest>>,
}

#[async_trait]
pub trait BatchWriteItem {
    async fn batch_write_item(&self, input: BatchWriteItemInput) -> Result<BatchWriteItemOutput, RemoteError>;
}

#[async_trait]
impl BatchWriteItem for Adapter {
    async fn batch_write_item(&self, input: BatchWriteItemInput) -> Result<BatchWriteItemOutput, RemoteError> {
        self.raw
            .batch_write_item()
            .set_request_items(Some(input.request_items))
            .send()
            .await
            .map_err(RemoteError::from)
    }
}
