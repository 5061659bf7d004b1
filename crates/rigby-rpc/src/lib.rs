//! rigby-rpc - HTTP client and route table for the Rigby control API.
//!
//! All API methods are thin bindings over one transport helper,
//! [`RigbyClient::call`]. The route surface is generated from a single
//! declarative table, see [`routes`].
//!
//! # Example
//!
//! ```no_run
//! use rigby_rpc::{RigbyClient, RouteGroups};
//! use serde_json::json;
//!
//! # async fn example() -> rigby_core::Result<()> {
//! let client = RigbyClient::new("my-token")?;
//!
//! let level = client.levels().get(json!({ "serverId": "abc", "levelId": 128 })).await?;
//! println!("{}", level);
//!
//! let raw = client.call(&["rpc", "user", "me"], serde_json::Value::Null).await?;
//! println!("{}", raw);
//! # Ok(())
//! # }
//! ```

mod client;
pub mod routes;

pub use client::{RigbyClient, RigbyClientBuilder};
pub use routes::{ROUTES, Route, RouteGroups};

pub use rigby_core::{BaseUrl, BearerToken, Caller, ClientConfig, Error, Result, RpcPath};
