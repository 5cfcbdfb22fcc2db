//! Todo Table Client
//!
//! Typed access to the hosted record table that stores todo tasks.
//! - config: endpoint and table identifier, injected at construction
//! - wire: request/response envelopes of the table service
//! - transport: the request seam (reqwest in production, mocks in tests)
//! - client: the four task operations

mod client;
mod config;
mod error;
mod models;
mod transport;
mod wire;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use client::TableClient;
pub use config::{TableConfig, DEFAULT_BASE_URL, DEFAULT_TABLE_ID};
pub use error::{ClientError, ClientResult};
pub use models::{NewTask, ParsePriorityError, Priority, Task, TaskPatch};
pub use transport::{HttpTransport, Method, TableRequest, Transport};
