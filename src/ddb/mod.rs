pub mod adapter;
pub mod batch_get_item;
pub mod batch_write_item;
pub mod delete_item;
pub mod get_item;
pub mod put_item;
pub mod query;
pub mod remote_error;
pub mod scan;
pub mod update_item;

pub use adapter::Adapter;
pub use remote_error::RemoteError;
