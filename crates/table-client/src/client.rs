//! Task Operations
//!
//! list / create / update / delete against the todo table.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use crate::config::TableConfig;
use crate::error::ClientResult;
use crate::models::{NewTask, Task, TaskPatch};
use crate::transport::{HttpTransport, Method, TableRequest, Transport};
use crate::wire::{CreateRequest, QueryRequest, RecordResponse, RecordsResponse, UpdateRequest};

/// Typed client for the todo table
#[derive(Clone)]
pub struct TableClient<T = HttpTransport> {
    config: TableConfig,
    transport: T,
    clock: fn() -> DateTime<Utc>,
}

impl TableClient<HttpTransport> {
    pub fn new(config: TableConfig) -> Self {
        let transport = HttpTransport::new(config.clone());
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> TableClient<T> {
    pub fn with_transport(config: TableConfig, transport: T) -> Self {
        Self {
            config,
            transport,
            clock: Utc::now,
        }
    }

    /// Replace the clock used for `created_at`
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// All tasks, newest first, in the order the service returns them
    pub async fn list_tasks(&self) -> ClientResult<Vec<Task>> {
        let request = TableRequest::new(Method::Post, self.config.query_path())
            .with_body(serde_json::to_value(QueryRequest::all_newest_first())?);
        let value = self.transport.send(request).await?;
        let response: RecordsResponse = serde_json::from_value(value)?;
        tracing::debug!(count = response.records.len(), "listed tasks");
        Ok(response.records)
    }

    /// Create a task; `completed` starts false and `created_at` comes from the client clock
    pub async fn create_task(&self, task: &NewTask) -> ClientResult<Task> {
        let created_at = (self.clock)().to_rfc3339_opts(SecondsFormat::Millis, true);
        let body = CreateRequest::single(task, created_at);
        let request = TableRequest::new(Method::Post, self.config.records_path())
            .with_body(serde_json::to_value(&body)?);
        let value = self.transport.send(request).await?;
        let created = serde_json::from_value::<RecordsResponse>(value)?.into_first()?;
        tracing::debug!(id = created.id, "created task");
        Ok(created)
    }

    /// Apply a partial update and return the record as stored
    pub async fn update_task(&self, id: i64, patch: &TaskPatch) -> ClientResult<Task> {
        let request = TableRequest::new(Method::Patch, self.config.record_path(id))
            .with_body(serde_json::to_value(UpdateRequest { fields: patch })?);
        let value = self.transport.send(request).await?;
        let response: RecordResponse = serde_json::from_value(value)?;
        tracing::debug!(id, "updated task");
        Ok(response.record)
    }

    /// Remove a task. The view never calls this.
    pub async fn delete_task(&self, id: i64) -> ClientResult<()> {
        let request = TableRequest::new(Method::Delete, self.config.record_path(id));
        let _: Value = self.transport.send(request).await?;
        tracing::debug!(id, "deleted task");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::mock::MockTransport;
    use crate::models::Priority;
    use chrono::TimeZone;
    use serde_json::json;

    fn fixed_clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap()
    }

    fn client(transport: MockTransport) -> TableClient<MockTransport> {
        TableClient::with_transport(TableConfig::new("https://example.test", "tbl"), transport)
            .with_clock(fixed_clock)
    }

    #[tokio::test]
    async fn test_list_tasks_keeps_server_order() {
        let transport = MockTransport::default().respond(Ok(json!({
            "records": [
                { "id": 3, "title": "C", "completed": false, "created_at": "2024-01-01T00:00:00.000Z", "priority": "low" },
                { "id": 9, "title": "Z", "completed": true, "created_at": "2024-02-01T00:00:00.000Z", "priority": "high" }
            ]
        })));
        let client = client(transport);

        let tasks = client.list_tasks().await.expect("list failed");
        assert_eq!(tasks.iter().map(|t| t.id).collect::<Vec<_>>(), vec![3, 9]);

        let sent = client.transport().requests.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].path, "/table/tbl/record/query");
        assert_eq!(
            sent[0].body,
            Some(json!({ "amount": "all", "sort": [{ "field": "created_at", "direction": "desc" }] }))
        );
    }

    #[tokio::test]
    async fn test_create_task_sends_fields() {
        let transport = MockTransport::default().respond(Ok(json!({
            "records": [
                { "id": 11, "title": "Buy milk", "completed": false, "created_at": "2024-03-09T14:05:00.000Z", "priority": "high" }
            ]
        })));
        let client = client(transport);

        let created = client
            .create_task(&NewTask::new("Buy milk", Priority::High))
            .await
            .expect("create failed");
        assert_eq!(created.id, 11);
        assert_eq!(created.priority, Priority::High);

        let sent = client.transport().requests.borrow();
        assert_eq!(sent[0].path, "/table/tbl/record");
        assert_eq!(
            sent[0].body,
            Some(json!({
                "records": [{
                    "fields": {
                        "title": "Buy milk",
                        "priority": "high",
                        "completed": false,
                        "created_at": "2024-03-09T14:05:00.000Z"
                    }
                }]
            }))
        );
    }

    #[tokio::test]
    async fn test_update_task_sends_patch() {
        let transport = MockTransport::default().respond(Ok(json!({
            "record": { "id": 1, "title": "A", "completed": true, "created_at": "x", "priority": "low" }
        })));
        let client = client(transport);

        let updated = client
            .update_task(1, &TaskPatch::completed(true))
            .await
            .expect("update failed");
        assert!(updated.completed);

        let sent = client.transport().requests.borrow();
        assert_eq!(sent[0].method, Method::Patch);
        assert_eq!(sent[0].path, "/table/tbl/record/1");
        assert_eq!(sent[0].body, Some(json!({ "fields": { "completed": true } })));
    }

    #[tokio::test]
    async fn test_delete_task_ignores_body() {
        let transport = MockTransport::default().respond(Ok(Value::Null));
        let client = client(transport);

        client.delete_task(5).await.expect("delete failed");

        let sent = client.transport().requests.borrow();
        assert_eq!(sent[0].method, Method::Delete);
        assert_eq!(sent[0].path, "/table/tbl/record/5");
        assert_eq!(sent[0].body, None);
    }

    #[tokio::test]
    async fn test_errors_propagate() {
        let transport = MockTransport::default()
            .respond(Err(ClientError::Server { status: 500, body: "boom".to_string() }))
            .respond(Ok(json!({ "unexpected": true })));
        let client = client(transport);

        let err = client.list_tasks().await.unwrap_err();
        assert!(err.is_server());

        let err = client.update_task(1, &TaskPatch::completed(true)).await.unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[tokio::test]
    async fn test_list_tasks_accepts_large_ids() {
        let transport = MockTransport::default().respond(Ok(json!({
            "records": [
                { "id": 1, "title": "Small", "completed": false, "created_at": "x", "priority": "low" },
                { "id": 5_000_000_000u64, "title": "Large", "completed": false, "created_at": "x", "priority": "high" }
            ]
        })));
        let client = client(transport);

        let tasks = client.list_tasks().await.expect("list failed");
        assert_eq!(tasks.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 5_000_000_000]);
    }

    #[test]
    fn test_default_clock_format() {
        let stamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        assert!(stamp.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&stamp).is_ok());
    }
}
