//! Typed task endpoints and the dashboard's cache patch helpers.
//!
//! The dashboard keeps a transient client-side copy of the last-fetched task
//! collection. Instead of refetching after every mutation, it applies the
//! server's response locally: append on create, replace on update, remove on
//! delete. The helpers here are pure so the patching behavior stays testable
//! without a UI runtime.

use crate::client::{ApiClient, Transport};
use crate::error::ApiError;
use crate::models::{Task, TaskCreate, TaskUpdate};

impl<T: Transport> ApiClient<T> {
    /// `GET /tasks`, with the search term and completion filter only present
    /// in the query string when set.
    pub async fn list_tasks(
        &self,
        search: Option<&str>,
        completed: Option<bool>,
    ) -> Result<Vec<Task>, ApiError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(search) = search {
            if !search.is_empty() {
                query.push(("search", search.to_string()));
            }
        }
        if let Some(completed) = completed {
            query.push(("completed", completed.to_string()));
        }
        self.get("/tasks", &query).await
    }

    pub async fn create_task(&self, task: &TaskCreate) -> Result<Task, ApiError> {
        self.post("/tasks", task).await
    }

    pub async fn update_task(&self, id: i64, update: &TaskUpdate) -> Result<Task, ApiError> {
        self.put(&format!("/tasks/{id}"), update).await
    }

    pub async fn delete_task(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/tasks/{id}")).await
    }
}

/// Append a freshly created task to the cached list.
pub fn apply_created(tasks: &mut Vec<Task>, created: Task) {
    tasks.push(created);
}

/// Replace the cached task with the server's updated copy. A task that is no
/// longer in the cache (filtered out meanwhile) is left alone.
pub fn apply_updated(tasks: &mut Vec<Task>, updated: Task) {
    if let Some(slot) = tasks.iter_mut().find(|task| task.id == updated.id) {
        *slot = updated;
    }
}

/// Drop a deleted task from the cached list.
pub fn apply_removed(tasks: &mut Vec<Task>, id: i64) {
    tasks.retain(|task| task.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{Method, RequestBody};
    use crate::config::ApiConfig;
    use crate::testing::FakeTransport;

    fn client(transport: &FakeTransport) -> ApiClient<FakeTransport> {
        let client = ApiClient::new(ApiConfig::new("http://testserver"), transport.clone());
        client.set_token("tok123");
        client
    }

    fn task(id: i64, title: &str, completed: bool) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: None,
            completed,
            created_at: "2024-01-02T08:00:00".to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_tasks_builds_query_from_set_filters() {
        let transport = FakeTransport::new();
        let client = client(&transport);

        transport.push_json(200, "[]");
        client.list_tasks(Some("milk"), Some(true)).await.unwrap();
        assert_eq!(
            transport.request(0).url,
            "http://testserver/tasks?search=milk&completed=true"
        );

        transport.push_json(200, "[]");
        client.list_tasks(None, None).await.unwrap();
        assert_eq!(transport.request(1).url, "http://testserver/tasks");

        transport.push_json(200, "[]");
        client.list_tasks(Some("a b"), None).await.unwrap();
        assert_eq!(
            transport.request(2).url,
            "http://testserver/tasks?search=a%20b"
        );
    }

    #[tokio::test]
    async fn test_create_appends_locally_without_refetch() {
        let transport = FakeTransport::new();
        let client = client(&transport);
        let mut tasks = vec![task(1, "Existing", false)];

        transport.push_json(
            201,
            r#"{"id":7,"title":"Buy milk","completed":false,"created_at":"2024-01-02T08:00:00"}"#,
        );
        let created = client
            .create_task(&TaskCreate {
                title: "Buy milk".to_string(),
                description: None,
            })
            .await
            .unwrap();
        apply_created(&mut tasks, created);

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].id, 7);
        assert_eq!(tasks[1].title, "Buy milk");
        assert_eq!(tasks[1].created_at, "2024-01-02T08:00:00");
        // One request: the create itself, no list refetch
        assert_eq!(transport.request_count(), 1);
        assert_eq!(transport.request(0).method, Method::Post);
    }

    #[tokio::test]
    async fn test_toggle_sends_partial_update_and_replaces_in_place() {
        let transport = FakeTransport::new();
        let client = client(&transport);
        let mut tasks = vec![task(3, "Water plants", false), task(4, "Other", false)];

        transport.push_json(
            200,
            r#"{"id":3,"title":"Water plants","completed":true,"created_at":"2024-01-02T08:00:00"}"#,
        );
        let updated = client
            .update_task(3, &TaskUpdate::completion(true))
            .await
            .unwrap();
        apply_updated(&mut tasks, updated);

        let request = transport.request(0);
        assert_eq!(request.url, "http://testserver/tasks/3");
        assert_eq!(request.method, Method::Put);
        assert_eq!(
            request.body,
            Some(RequestBody::Json(r#"{"completed":true}"#.to_string()))
        );

        assert!(tasks[0].completed);
        assert!(!tasks[1].completed);
        assert_eq!(tasks.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_removes_locally() {
        let transport = FakeTransport::new();
        let client = client(&transport);
        let mut tasks = vec![task(3, "Water plants", false), task(4, "Other", false)];

        transport.push_json(200, "");
        client.delete_task(3).await.unwrap();
        apply_removed(&mut tasks, 3);

        assert_eq!(transport.request(0).method, Method::Delete);
        assert_eq!(transport.request(0).url, "http://testserver/tasks/3");
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, 4);
    }

    #[test]
    fn test_apply_updated_ignores_unknown_id() {
        let mut tasks = vec![task(1, "Only", false)];
        apply_updated(&mut tasks, task(99, "Ghost", true));
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, 1);
        assert!(!tasks[0].completed);
    }
}
