use aws_sdk_dynamodb::Client as RawClient;

/// Wrapper around the raw DynamoDB client. The raw client is internally
/// reference-counted and safe to share between in-flight calls.
#[derive(Debug, Clone)]
pub struct Adapter {
    pub(crate) raw: RawClient,
}

impl From<RawClient> for Adapter {
    fn from(raw: RawClient) -> Self {
        Adapter { raw }
    }
}
