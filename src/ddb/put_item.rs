use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::model::AttributeValue;
use aws_sdk_dynamodb::model::ReturnValue;
use aws_sdk_dynamodb::output::PutItemOutput;
use typed_builder::TypedBuilder;

use super::adapter::Adapter;
use super::remote_error::RemoteError;

#[derive(TypedBuilder)]
pub struct PutItemInput {
    #[builder(setter(into))]
    pub table_name: String,

    #[builder(setter(into))]
    pub item: HashMap<String, AttributeValue>,

    #[builder(default)]
    pub return_values: Option<ReturnValue>,

    #[builder(default, setter(into))]
    pub condition_expression: Option<String>,

    #[builder(default)]
    pub expression_attribute_names: Option<HashMap<String, String>>,

    #[builder(default)]
    pub expression_attribute_values: Option<HashMap<String, AttributeValue>>,
}

#[async_trait]
pub trait PutItem {
    async fn put_item(&self, input: PutItemInput) -> Result<PutItemOutput, RemoteError>;
}

#[async_trait]
impl PutItem for Adapter {
    async fn put_item(&self, input: PutItemInput) -> Result<PutItemOutput, RemoteError> {
        self.raw
            .put_item()
            .table_name(input.table_name)
            .set_item(Some(input.item))
            .set_return_values(input.return_values)
            .set_condition_expression(input.condition_expression)
            .set_expression_attribute_names(input.expression_attribute_names)
            .set_expression_attribute_values(input.expression_attribute_values)
            .send()
            .await
            .map_err(RemoteError::from)
    }
}
