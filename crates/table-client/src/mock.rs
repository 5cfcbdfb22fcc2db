//! Recording transport for tests.
//!
//! Queue canned responses with `respond`, inspect `requests` afterwards.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{ClientError, ClientResult};
use crate::transport::{TableRequest, Transport};

#[derive(Default)]
pub struct MockTransport {
    pub requests: RefCell<Vec<TableRequest>>,
    responses: RefCell<VecDeque<ClientResult<Value>>>,
}

impl MockTransport {
    pub fn respond(self, response: ClientResult<Value>) -> Self {
        self.responses.borrow_mut().push_back(response);
        self
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: TableRequest) -> ClientResult<Value> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Network("no canned response".to_string())))
    }
}
