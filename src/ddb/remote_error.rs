use std::error::Error;

use aws_sdk_dynamodb::error::{
    BatchGetItemError, BatchWriteItemError, DeleteItemError, DeleteItemErrorKind, GetItemError, PutItemError,
    PutItemErrorKind, QueryError, ScanError, UpdateItemError, UpdateItemErrorKind,
};
use aws_sdk_dynamodb::types::SdkError;

/// Failure reported by the remote service, with the conditional-check case
/// discriminated structurally so callers never have to match on the SDK's
/// per-operation error types (or worse, on error names).
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("{}", .0.as_deref().unwrap_or("The conditional request failed."))]
    ConditionalCheckFailed(Option<String>),

    #[error(transparent)]
    Other(Box<dyn Error + Send + Sync + 'static>),
}

impl RemoteError {
    pub fn is_conditional_check_failed(&self) -> bool {
        matches!(self, RemoteError::ConditionalCheckFailed(_))
    }
}

impl From<SdkError<PutItemError>> for RemoteError {
    fn from(err: SdkError<PutItemError>) -> Self {
        match err {
            SdkError::ServiceError {
                err:
                    PutItemError {
                        kind: PutItemErrorKind::ConditionalCheckFailedException(e),
                        ..
                    },
                ..
            } => RemoteError::ConditionalCheckFailed(e.message),
            e => RemoteError::Other(e.into()),
        }
    }
}

impl From<SdkError<DeleteItemError>> for RemoteError {
    fn from(err: SdkError<DeleteItemError>) -> Self {
        match err {
            SdkError::ServiceError {
                err:
                    DeleteItemError {
                        kind: DeleteItemErrorKind::ConditionalCheckFailedException(e),
                        ..
                    },
                ..
            } => RemoteError::ConditionalCheckFailed(e.message),
            e => RemoteError::Other(e.into()),
        }
    }
}

impl From<SdkError<UpdateItemError>> for RemoteError {
    fn from(err: SdkError<UpdateItemError>) -> Self {
        match err {
            SdkError::ServiceError {
                err:
                    UpdateItemError {
                        kind: UpdateItemErrorKind::ConditionalCheckFailedException(e),
                        ..
                    },
                ..
            } => RemoteError::ConditionalCheckFailed(e.message),
            e => RemoteError::Other(e.into()),
        }
    }
}

// Read and batch operations have no conditional-check variant.

impl From<SdkError<GetItemError>> for RemoteError {
    fn from(err: SdkError<GetItemError>) -> Self {
        RemoteError::Other(err.into())
    }
}

impl From<SdkError<QueryError>> for RemoteError {
    fn from(err: SdkError<QueryError>) -> Self {
        RemoteError::Other(err.into())
    }
}

impl From<SdkError<ScanError>> for RemoteError {
    fn from(err: SdkError<ScanError>) -> Self {
        RemoteError::Other(err.into())
    }
}

impl From<SdkError<BatchGetItemError>> for RemoteError {
    fn from(err: SdkError<BatchGetItemError>) -> Self {
        RemoteError::Other(err.into())
    }
}

impl From<SdkError<BatchWriteItemError>> for RemoteError {
    fn from(err: SdkError<BatchWriteItemError>) -> Self {
        RemoteError::Other(err.into())
    }
}
