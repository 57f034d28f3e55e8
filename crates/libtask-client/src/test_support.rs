//! Test Transports
//!
//! `ScriptedTransport` replays canned responses; `FakeBackend` is a small
//! in-memory LibTask server with the same routes and access rules.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::domain::wire::parse_day;
use crate::domain::{
    ReportFilters, Role, StaffProfile, StatusUpdate, Tag, Task, TaskStatus, STATUS_UPDATE_LABELS,
};
use crate::error::{ApiError, ApiResult};
use crate::reports::{summarize_by_staff, summarize_by_tag, summarize_tasks};
use crate::token_store::TokenStore;
use crate::transport::{HttpRequest, HttpResponse, Method, Transport};

// ========================
// Scripted responses
// ========================

#[derive(Default)]
pub struct ScriptedTransport {
    responses: RefCell<VecDeque<HttpResponse>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn push(&self, response: HttpResponse) {
        self.responses.borrow_mut().push_back(response);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| ApiError::Transport("no scripted response left".to_string()))
    }
}

// ========================
// In-memory backend
// ========================

pub const ADMIN_EMAIL: &str = "admin@library.test";
pub const STAFF_EMAIL: &str = "staff@library.test";
pub const NO_ROLE_EMAIL: &str = "guest@library.test";
pub const PASSWORD: &str = "correct horse";

pub struct FakeUser {
    pub id: &'static str,
    pub email: &'static str,
    pub full_name: Option<&'static str>,
    pub role: Cell<Option<Role>>,
}

pub struct FakeBackend {
    users: Vec<FakeUser>,
    tasks: RefCell<Vec<Task>>,
    updates: RefCell<Vec<StatusUpdate>>,
    tags: RefCell<Vec<Tag>>,
    next_id: Cell<u64>,
    /// Status to answer the next request with, regardless of route
    fail_next: Cell<Option<u16>>,
    requests: RefCell<Vec<HttpRequest>>,
}

#[derive(Deserialize)]
struct LoginBody {
    email: String,
    password: String,
}

#[derive(Deserialize)]
struct TaskBody {
    #[serde(default)]
    title: String,
    description: Option<String>,
    #[serde(default)]
    assigned_to: String,
    due_date: Option<String>,
}

#[derive(Deserialize)]
struct StatusBody {
    task_id: String,
    status: String,
    note: Option<String>,
}

#[derive(Deserialize)]
struct TaskPatchBody {
    assigned_to: Option<String>,
}

#[derive(Deserialize)]
struct TagBody {
    name: String,
}

fn respond(status: u16, body: Value) -> HttpResponse {
    HttpResponse::json(status, body.to_string())
}

fn detail(status: u16, message: &str) -> HttpResponse {
    respond(status, json!({ "detail": message }))
}

fn read_body<T: for<'de> Deserialize<'de>>(request: &HttpRequest) -> Option<T> {
    request.body_text().and_then(|text| serde_json::from_str(text).ok())
}

fn query_param(query: &str, name: &str) -> Option<String> {
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

impl FakeBackend {
    /// One admin, one staff member with a name, one staff member without,
    /// and an account with no application role.
    pub fn library() -> Rc<Self> {
        Rc::new(Self {
            users: vec![
                FakeUser {
                    id: "admin-1",
                    email: ADMIN_EMAIL,
                    full_name: Some("Ada Admin"),
                    role: Cell::new(Some(Role::Admin)),
                },
                FakeUser {
                    id: "staff-1",
                    email: STAFF_EMAIL,
                    full_name: Some("Sam Staff"),
                    role: Cell::new(Some(Role::Staff)),
                },
                FakeUser {
                    id: "staff-2",
                    email: "second@library.test",
                    full_name: None,
                    role: Cell::new(Some(Role::Staff)),
                },
                FakeUser {
                    id: "user-9",
                    email: NO_ROLE_EMAIL,
                    full_name: None,
                    role: Cell::new(None),
                },
            ],
            tasks: RefCell::new(Vec::new()),
            updates: RefCell::new(Vec::new()),
            tags: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
            fail_next: Cell::new(None),
            requests: RefCell::new(Vec::new()),
        })
    }

    /// Client talking to this backend with a fresh in-memory token store.
    pub fn client(self: &Rc<Self>) -> ApiClient {
        ApiClient::new(ClientConfig::default(), self.clone(), TokenStore::in_memory())
    }

    /// Change a user's application role, as an administrator would in the database.
    pub fn set_role(&self, user_id: &str, role: Option<Role>) {
        if let Some(user) = self.users.iter().find(|u| u.id == user_id) {
            user.role.set(role);
        }
    }

    pub fn fail_next_with(&self, status: u16) {
        self.fail_next.set(Some(status));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.tasks.borrow().clone()
    }

    /// Insert a task directly, bypassing the API.
    pub fn seed_task(&self, title: &str, assigned_to: &str, status: &str, created_on: &str) -> Task {
        let task = Task {
            id: self.allocate_id(),
            title: title.to_string(),
            description: None,
            assigned_to: assigned_to.to_string(),
            due_date: None,
            status: Some(TaskStatus::parse(status)),
            created_by: Some("admin-1".to_string()),
            created_at: Some(format!("{}T08:30:00+00:00", created_on)),
            tags: Vec::new(),
        };
        self.tasks.borrow_mut().push(task.clone());
        task
    }

    fn allocate_id(&self) -> String {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id.to_string()
    }

    fn token_for(user: &FakeUser) -> String {
        format!("token-{}", user.id)
    }

    fn caller(&self, request: &HttpRequest) -> Option<&FakeUser> {
        let token = request.header("Authorization")?.strip_prefix("Bearer ")?;
        self.users.iter().find(|user| Self::token_for(user) == token)
    }

    fn route(&self, request: &HttpRequest) -> HttpResponse {
        let path = request.url.strip_prefix("/api").unwrap_or(&request.url);
        let (path, query) = path.split_once('?').unwrap_or((path, ""));
        let method = &request.method;

        if *method == Method::POST && path == "/auth/login" {
            return self.login(request);
        }

        let Some(user) = self.caller(request) else {
            return detail(401, "Missing or invalid bearer token.");
        };
        let is_admin = user.role.get() == Some(Role::Admin);

        match (method.as_str(), path) {
            ("GET", "/me") => respond(
                200,
                json!({
                    "user_id": user.id,
                    "email": user.email,
                    "db_role": user.role.get().map(|r| r.as_str()),
                    "app_role": "authenticated",
                    "jwt_role": "authenticated",
                }),
            ),
            ("GET", "/tasks") => {
                let tasks = self.tasks.borrow();
                respond(200, json!({ "items": &*tasks }))
            }
            ("POST", "/tasks") if is_admin => self.create_task(request, user),
            ("GET", "/staff") => {
                let staff: Vec<StaffProfile> = self
                    .users
                    .iter()
                    .filter_map(|u| {
                        u.role.get().map(|role| StaffProfile {
                            id: u.id.to_string(),
                            full_name: u.full_name.map(str::to_string),
                            role,
                        })
                    })
                    .collect();
                respond(200, json!(staff))
            }
            ("GET", "/tags") => {
                let tags = self.tags.borrow();
                respond(200, json!(&*tags))
            }
            ("GET", _) if path.starts_with("/tasks/") => {
                let task_id = &path["/tasks/".len()..];
                let tasks = self.tasks.borrow();
                match tasks.iter().find(|t| t.id == task_id) {
                    Some(task) if is_admin || task.assigned_to == user.id => respond(200, json!(task)),
                    Some(_) => detail(403, "Not allowed to view this task."),
                    None => detail(404, "Task not found."),
                }
            }
            ("PATCH", _) if path.starts_with("/tasks/") && is_admin => {
                let task_id = &path["/tasks/".len()..];
                let Some(body) = read_body::<TaskPatchBody>(request) else {
                    return detail(400, "Invalid task payload");
                };
                let mut tasks = self.tasks.borrow_mut();
                let Some(task) = tasks.iter_mut().find(|t| t.id == task_id) else {
                    return detail(404, "Task not found.");
                };
                if let Some(assigned_to) = body.assigned_to {
                    task.assigned_to = assigned_to;
                }
                respond(200, json!(task))
            }
            ("PATCH", _) if path.starts_with("/tasks/") => detail(403, "Admin access required."),
            ("POST", "/tags") if is_admin => match read_body::<TagBody>(request) {
                Some(body) if !body.name.trim().is_empty() => {
                    let tag = Tag {
                        id: self.allocate_id(),
                        name: body.name.trim().to_string(),
                    };
                    self.tags.borrow_mut().push(tag.clone());
                    respond(201, json!(tag))
                }
                _ => detail(400, "name is required"),
            },
            ("DELETE", _) if path.starts_with("/tags/") && is_admin => {
                let tag_id = &path["/tags/".len()..];
                let mut tags = self.tags.borrow_mut();
                let before = tags.len();
                tags.retain(|t| t.id != tag_id);
                if tags.len() == before {
                    detail(404, "Tag not found.")
                } else {
                    respond(200, json!({ "deleted": true }))
                }
            }
            ("POST", "/status") if is_admin => self.add_status(request, user),
            ("GET", _) if path.starts_with("/status/") => {
                let task_id = &path["/status/".len()..];
                let visible = self
                    .tasks
                    .borrow()
                    .iter()
                    .any(|t| t.id == task_id && (is_admin || t.assigned_to == user.id));
                if !visible {
                    return detail(403, "Not allowed to view this task.");
                }
                // newest first, as the backend orders by created_at desc
                let items: Vec<StatusUpdate> = self
                    .updates
                    .borrow()
                    .iter()
                    .rev()
                    .filter(|u| u.task_id == task_id)
                    .cloned()
                    .collect();
                respond(200, json!({ "items": items }))
            }
            ("GET", _) if path.starts_with("/reports/") && is_admin => {
                self.report(&path["/reports/".len()..], query)
            }
            ("POST", "/tasks" | "/tags" | "/status") => detail(403, "Admin access required."),
            ("DELETE", _) if path.starts_with("/tags/") => detail(403, "Admin access required."),
            ("GET", _) if path.starts_with("/reports/") => detail(403, "Admin access required."),
            _ => detail(404, "Not found"),
        }
    }

    fn login(&self, request: &HttpRequest) -> HttpResponse {
        let Some(body) = read_body::<LoginBody>(request) else {
            return detail(400, "email and password are required");
        };
        match self.users.iter().find(|user| user.email == body.email) {
            Some(user) if body.password == PASSWORD => respond(
                200,
                json!({
                    "access_token": Self::token_for(user),
                    "token_type": "bearer",
                    "expires_in": 3600,
                }),
            ),
            _ => detail(401, "Invalid login credentials"),
        }
    }

    fn create_task(&self, request: &HttpRequest, user: &FakeUser) -> HttpResponse {
        let Some(body) = read_body::<TaskBody>(request) else {
            return detail(400, "Invalid task payload");
        };
        if body.title.trim().is_empty() || body.assigned_to.trim().is_empty() {
            return detail(400, "title and assigned_to are required");
        }
        let task = Task {
            id: self.allocate_id(),
            title: body.title,
            description: body.description,
            assigned_to: body.assigned_to,
            due_date: body.due_date.as_deref().and_then(parse_day),
            status: Some(TaskStatus::Assigned),
            created_by: Some(user.id.to_string()),
            created_at: Some("2026-02-01T09:00:00+00:00".to_string()),
            tags: Vec::new(),
        };
        self.tasks.borrow_mut().push(task.clone());
        respond(201, json!(task))
    }

    fn add_status(&self, request: &HttpRequest, user: &FakeUser) -> HttpResponse {
        let Some(body) = read_body::<StatusBody>(request) else {
            return detail(400, "Invalid status payload");
        };
        if !STATUS_UPDATE_LABELS.contains(&body.status.as_str()) {
            return detail(400, &format!("Invalid status. Allowed: {:?}", STATUS_UPDATE_LABELS));
        }
        let status = TaskStatus::parse(&body.status);
        {
            let mut tasks = self.tasks.borrow_mut();
            let Some(task) = tasks.iter_mut().find(|t| t.id == body.task_id) else {
                return detail(404, "Task not found");
            };
            task.status = Some(status.clone());
        }
        let update = StatusUpdate {
            id: Some(self.allocate_id()),
            task_id: body.task_id,
            status,
            note: body.note,
            updated_by: Some(user.id.to_string()),
            created_at: Some("2026-02-02T10:00:00+00:00".to_string()),
        };
        self.updates.borrow_mut().push(update.clone());
        respond(201, json!(update))
    }

    fn report(&self, name: &str, query: &str) -> HttpResponse {
        let filters = ReportFilters::new(
            query_param(query, "start_date").as_deref().and_then(parse_day),
            query_param(query, "end_date").as_deref().and_then(parse_day),
        );
        let tasks = self.tasks.borrow();
        match name {
            "tasks-summary" => respond(200, json!(summarize_tasks(&tasks, &filters))),
            "staff-summary" => respond(200, json!(summarize_by_staff(&tasks, &filters))),
            "tag-summary" => respond(200, json!(summarize_by_tag(&tasks, &filters))),
            _ => detail(404, "Not found"),
        }
    }
}

#[async_trait(?Send)]
impl Transport for FakeBackend {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        self.requests.borrow_mut().push(request.clone());
        if let Some(status) = self.fail_next.take() {
            return Ok(detail(status, "Injected failure"));
        }
        Ok(self.route(&request))
    }
}
