//! Table Service Envelopes
//!
//! Request and response bodies of the record endpoints.

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};
use crate::models::{NewTask, Task, TaskPatch};

// ========================
// Request Bodies
// ========================

#[derive(Debug, Serialize)]
pub(crate) struct SortKey {
    pub field: &'static str,
    pub direction: &'static str,
}

/// `POST /record/query`
#[derive(Debug, Serialize)]
pub(crate) struct QueryRequest {
    pub amount: &'static str,
    pub sort: Vec<SortKey>,
}

impl QueryRequest {
    /// Every record, newest first
    pub fn all_newest_first() -> Self {
        Self {
            amount: "all",
            sort: vec![SortKey {
                field: "created_at",
                direction: "desc",
            }],
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct NewTaskFields<'a> {
    #[serde(flatten)]
    pub task: &'a NewTask,
    pub completed: bool,
    pub created_at: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct FieldsRecord<F> {
    pub fields: F,
}

/// `POST /record`
#[derive(Debug, Serialize)]
pub(crate) struct CreateRequest<'a> {
    pub records: Vec<FieldsRecord<NewTaskFields<'a>>>,
}

impl<'a> CreateRequest<'a> {
    pub fn single(task: &'a NewTask, created_at: String) -> Self {
        Self {
            records: vec![FieldsRecord {
                fields: NewTaskFields {
                    task,
                    completed: false,
                    created_at,
                },
            }],
        }
    }
}

/// `PATCH /record/{id}`
pub(crate) type UpdateRequest<'a> = FieldsRecord<&'a TaskPatch>;

// ========================
// Response Bodies
// ========================

#[derive(Debug, Deserialize)]
pub(crate) struct RecordsResponse {
    #[serde(default)]
    pub records: Vec<Task>,
}

impl RecordsResponse {
    /// First record, as echoed back by a single-record create
    pub fn into_first(self) -> ClientResult<Task> {
        self.records
            .into_iter()
            .next()
            .ok_or_else(|| ClientError::Decode("response contained no records".to_string()))
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecordResponse {
    pub record: Task,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;
    use serde_json::json;

    #[test]
    fn test_query_body() {
        let body = serde_json::to_value(QueryRequest::all_newest_first()).unwrap();
        assert_eq!(
            body,
            json!({ "amount": "all", "sort": [{ "field": "created_at", "direction": "desc" }] })
        );
    }

    #[test]
    fn test_create_body() {
        let task = NewTask::new("Buy milk", Priority::High);
        let body = serde_json::to_value(CreateRequest::single(&task, "2024-01-01T00:00:00.000Z".to_string())).unwrap();
        assert_eq!(
            body,
            json!({
                "records": [{
                    "fields": {
                        "title": "Buy milk",
                        "priority": "high",
                        "completed": false,
                        "created_at": "2024-01-01T00:00:00.000Z"
                    }
                }]
            })
        );
    }

    #[test]
    fn test_update_body() {
        let patch = TaskPatch::completed(false);
        let body = serde_json::to_value(UpdateRequest { fields: &patch }).unwrap();
        assert_eq!(body, json!({ "fields": { "completed": false } }));
    }

    #[test]
    fn test_empty_records_is_decode_error() {
        let resp: RecordsResponse = serde_json::from_value(json!({ "records": [] })).unwrap();
        assert!(matches!(resp.into_first(), Err(ClientError::Decode(_))));
    }
}
