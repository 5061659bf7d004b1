//! Validated value types.

mod base_url;
mod rpc_path;

pub use base_url::BaseUrl;
pub use rpc_path::RpcPath;
