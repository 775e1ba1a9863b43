// Rust guideline compliant 2026-08-29

//! MCP server runtime for Slate.

use crate::types::{
    AddSubtaskInput, AddSubtaskResult, AddTaskInput, AddTaskResult, ComplexityInput,
    ComplexityResult, EmptyInput, FindCyclesResult, GetTaskInput, GetTaskResult, ItemPayload,
    NextTaskResult, RemoveSubtaskInput, RemoveSubtaskResult, RemoveTaskInput, RemoveTaskResult,
    ReportResult, SetStatusInput, SetStatusResult,
};
use rmcp::handler::server::{router::tool::ToolRouter, wrapper::Parameters};
use rmcp::model::{
    AnnotateAble, CallToolResult, Content, ErrorData, Implementation, ListResourcesResult,
    PaginatedRequestParams, ProtocolVersion, RawResource, ReadResourceRequestParams,
    ReadResourceResult, ResourceContents, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::transport::stdio;
use rmcp::{tool, tool_handler, tool_router, RoleServer, ServiceExt};
use slate_app::{
    parse_priority, parse_status, AppError, ErrorEnvelope, RepoContext, Store, SuccessEnvelope,
};
use slate_core::{
    add_subtask, add_task, complexity, find_cycle, find_item, find_next, find_task, parse_id,
    remove_item, remove_subtask, report, set_status, Config, DepRef, ItemRef, NewItem,
};
use std::fs::OpenOptions;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;

/// Runtime options for the MCP server.
#[derive(Debug)]
pub struct McpOptions {
    /// Repository context the server operates on.
    pub repo: RepoContext,
    /// Whether mutating tools are disabled.
    pub read_only: bool,
    /// Optional log file path; stderr when absent.
    pub log_file: Option<String>,
    /// Logging level.
    pub log_level: String,
}

/// MCP server errors.
#[derive(Debug, Error)]
pub enum McpServerError {
    /// IO errors during runtime setup.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid log level provided.
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
    /// Failure opening the task store.
    #[error("Failed to open task store: {0}")]
    App(#[from] AppError),
    /// Transport or server errors.
    #[error("MCP server error: {0}")]
    Transport(String),
}

/// Runs the MCP server on stdio.
///
/// The store is loaded once at startup and held behind a mutex for the
/// lifetime of the process; every mutating tool persists after applying
/// its change.
///
/// # Arguments
///
/// * `options` - MCP runtime options
///
/// # Returns
///
/// Ok if the server exits gracefully.
///
/// # Errors
///
/// Returns an error if the runtime cannot be initialized or the server
/// fails.
pub fn run(options: McpOptions) -> Result<(), McpServerError> {
    let _guard = init_tracing(&options)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let server = SlateMcp::new(options)?;
        let service = server
            .serve(stdio())
            .await
            .map_err(|err| McpServerError::Transport(err.to_string()))?;
        service
            .waiting()
            .await
            .map_err(|err| McpServerError::Transport(err.to_string()))?;
        Ok(())
    })
}

fn init_tracing(options: &McpOptions) -> Result<Option<WorkerGuard>, McpServerError> {
    let level = parse_log_level(&options.log_level)?;

    if let Some(path) = &options.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .json()
            .with_writer(writer)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(Some(guard));
    }

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .json()
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(None)
}

fn parse_log_level(level: &str) -> Result<Level, McpServerError> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        other => Err(McpServerError::InvalidLogLevel(other.to_string())),
    }
}

#[derive(Clone)]
struct SlateMcp {
    tool_router: ToolRouter<Self>,
    store: Arc<Mutex<Store>>,
    config: Config,
    read_only: bool,
}

impl SlateMcp {
    fn new(options: McpOptions) -> Result<Self, AppError> {
        let store = Store::open(&options.repo)?;
        let config = options.repo.load_config()?;
        Ok(Self {
            tool_router: Self::tool_router(),
            store: Arc::new(Mutex::new(store)),
            config,
            read_only: options.read_only,
        })
    }

    fn store(&self) -> Result<MutexGuard<'_, Store>, AppError> {
        self.store.lock().map_err(|_| {
            AppError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "task store lock poisoned",
            ))
        })
    }

    fn ensure_writable(&self) -> Result<(), AppError> {
        if self.read_only {
            return Err(AppError::InvalidInput(
                "Server is running in read-only mode".to_string(),
            ));
        }
        Ok(())
    }

    fn parse_dependencies(deps: Option<Vec<String>>) -> Result<Vec<DepRef>, AppError> {
        let mut parsed = Vec::new();
        for dep in deps.unwrap_or_default() {
            let Some(dep_ref) = parse_id(&dep) else {
                return Err(AppError::InvalidInput(format!(
                    "Invalid dependency id '{}'",
                    dep
                )));
            };
            parsed.push(dep_ref);
        }
        Ok(parsed)
    }

    fn dropped_warnings(dropped: &[DepRef]) -> Vec<String> {
        dropped
            .iter()
            .map(|dep| format!("Dropped unknown dependency {}", dep))
            .collect()
    }

    fn get_task_tool(&self, input: GetTaskInput) -> Result<GetTaskResult, AppError> {
        let store = self.store()?;
        match find_item(&store.data().tasks, &input.id) {
            Some(ItemRef::Task(task)) => Ok(GetTaskResult {
                complexity: Some(complexity::assess(task).as_str().to_string()),
                item: ItemPayload::Task(task.clone()),
            }),
            Some(ItemRef::Subtask(subtask)) => Ok(GetTaskResult {
                complexity: Some(complexity::assess_subtask(subtask).as_str().to_string()),
                item: ItemPayload::Subtask(subtask.clone()),
            }),
            None => Err(AppError::Core(slate_core::Error::NotFound(input.id))),
        }
    }

    fn next_task_tool(&self) -> Result<(NextTaskResult, Vec<String>), AppError> {
        let store = self.store()?;
        let pick = find_next(&store.data().tasks);
        let result = NextTaskResult {
            message: if pick.task.is_none() {
                Some("No eligible task; everything is done or blocked".to_string())
            } else {
                None
            },
            task: pick.task.cloned(),
        };
        Ok((result, pick.warnings))
    }

    fn set_status_tool(&self, input: SetStatusInput) -> Result<SetStatusResult, AppError> {
        self.ensure_writable()?;
        let new_status = parse_status(&input.status)?;

        let mut store = self.store()?;
        let (data, history) = store.split_mut();
        if !set_status(&mut data.tasks, &input.id, new_status, history) {
            return Err(AppError::Core(slate_core::Error::NotFound(input.id)));
        }
        store.save()?;

        Ok(SetStatusResult {
            id: input.id,
            status: new_status,
        })
    }

    fn add_task_tool(&self, input: AddTaskInput) -> Result<(AddTaskResult, Vec<String>), AppError> {
        self.ensure_writable()?;
        if input.title.trim().is_empty() {
            return Err(AppError::InvalidInput("Title cannot be empty".to_string()));
        }

        let priority = match input.priority.as_deref() {
            Some(priority) => parse_priority(priority)?,
            None => self.config.default_priority,
        };
        let dependencies = Self::parse_dependencies(input.dependencies)?;

        let mut store = self.store()?;
        let (id, dropped) = add_task(
            &mut store.data_mut().tasks,
            NewItem {
                title: input.title,
                description: input.description,
                priority,
                dependencies,
            },
        );
        store.save()?;

        let task = find_task(&store.data().tasks, id)
            .cloned()
            .ok_or_else(|| AppError::Core(slate_core::Error::NotFound(id.to_string())))?;

        Ok((AddTaskResult { task }, Self::dropped_warnings(&dropped)))
    }

    fn add_subtask_tool(
        &self,
        input: AddSubtaskInput,
    ) -> Result<(AddSubtaskResult, Vec<String>), AppError> {
        self.ensure_writable()?;
        if input.title.trim().is_empty() {
            return Err(AppError::InvalidInput("Title cannot be empty".to_string()));
        }

        let priority = match input.priority.as_deref() {
            Some(priority) => parse_priority(priority)?,
            None => self.config.default_priority,
        };
        let dependencies = Self::parse_dependencies(input.dependencies)?;

        let mut store = self.store()?;
        let (dep_ref, dropped) = add_subtask(
            &mut store.data_mut().tasks,
            input.parent,
            NewItem {
                title: input.title,
                description: input.description,
                priority,
                dependencies,
            },
        )?;
        store.save()?;

        let id = dep_ref.to_string();
        let subtask = match find_item(&store.data().tasks, &id) {
            Some(ItemRef::Subtask(subtask)) => subtask.clone(),
            _ => return Err(AppError::Core(slate_core::Error::NotFound(id))),
        };

        Ok((
            AddSubtaskResult { id, subtask },
            Self::dropped_warnings(&dropped),
        ))
    }

    fn remove_task_tool(&self, input: RemoveTaskInput) -> Result<RemoveTaskResult, AppError> {
        self.ensure_writable()?;

        let mut store = self.store()?;
        if !remove_item(&mut store.data_mut().tasks, &input.id) {
            return Err(AppError::Core(slate_core::Error::NotFound(input.id)));
        }
        store.save()?;

        Ok(RemoveTaskResult { id: input.id })
    }

    fn remove_subtask_tool(
        &self,
        input: RemoveSubtaskInput,
    ) -> Result<RemoveSubtaskResult, AppError> {
        self.ensure_writable()?;

        let id = format!("{}.{}", input.parent, input.sub);
        let mut store = self.store()?;
        if !remove_subtask(
            &mut store.data_mut().tasks,
            &input.parent.to_string(),
            input.sub,
        ) {
            return Err(AppError::Core(slate_core::Error::NotFound(id)));
        }
        store.save()?;

        Ok(RemoveSubtaskResult { id })
    }

    fn report_tool(&self) -> Result<ReportResult, AppError> {
        let store = self.store()?;
        Ok(ReportResult {
            report: report::render(store.data()),
        })
    }

    fn find_cycles_tool(&self) -> Result<FindCyclesResult, AppError> {
        let store = self.store()?;
        let cycle = find_cycle(&store.data().tasks);
        Ok(FindCyclesResult {
            has_cycle: cycle.is_some(),
            cycle,
        })
    }

    fn complexity_tool(&self, input: ComplexityInput) -> Result<ComplexityResult, AppError> {
        let store = self.store()?;
        let task = find_task(&store.data().tasks, input.id)
            .ok_or_else(|| AppError::Core(slate_core::Error::NotFound(input.id.to_string())))?;
        let score = complexity::score(task);
        Ok(ComplexityResult {
            id: input.id,
            score,
            level: complexity::level(score).as_str().to_string(),
        })
    }
}

#[tool_router(router = tool_router)]
impl SlateMcp {
    /// Fetches a task or subtask by identifier.
    #[tool(name = "get_task", description = "Get a task or subtask by id.")]
    async fn get_task(
        &self,
        params: Parameters<GetTaskInput>,
    ) -> Result<CallToolResult, ErrorData> {
        let result = self.get_task_tool(params.0).map_err(map_app_error)?;
        success_payload(SuccessEnvelope::new(result))
    }

    /// Returns the next recommended task.
    #[tool(name = "next_task", description = "Return the next eligible task.")]
    async fn next_task(
        &self,
        _params: Parameters<EmptyInput>,
    ) -> Result<CallToolResult, ErrorData> {
        let (result, warnings) = self.next_task_tool().map_err(map_app_error)?;
        success_payload(SuccessEnvelope::with_warnings(result, warnings))
    }

    /// Sets the status of a task or subtask.
    #[tool(name = "set_status", description = "Set the status of a task or subtask.")]
    async fn set_status(
        &self,
        params: Parameters<SetStatusInput>,
    ) -> Result<CallToolResult, ErrorData> {
        let result = self.set_status_tool(params.0).map_err(map_app_error)?;
        success_payload(SuccessEnvelope::new(result))
    }

    /// Adds a top-level task.
    #[tool(name = "add_task", description = "Add a top-level task.")]
    async fn add_task(
        &self,
        params: Parameters<AddTaskInput>,
    ) -> Result<CallToolResult, ErrorData> {
        let (result, warnings) = self.add_task_tool(params.0).map_err(map_app_error)?;
        success_payload(SuccessEnvelope::with_warnings(result, warnings))
    }

    /// Adds a subtask under an existing task.
    #[tool(name = "add_subtask", description = "Add a subtask under a task.")]
    async fn add_subtask(
        &self,
        params: Parameters<AddSubtaskInput>,
    ) -> Result<CallToolResult, ErrorData> {
        let (result, warnings) = self.add_subtask_tool(params.0).map_err(map_app_error)?;
        success_payload(SuccessEnvelope::with_warnings(result, warnings))
    }

    /// Removes a task or subtask.
    #[tool(name = "remove_task", description = "Remove a task or subtask by id.")]
    async fn remove_task(
        &self,
        params: Parameters<RemoveTaskInput>,
    ) -> Result<CallToolResult, ErrorData> {
        let result = self.remove_task_tool(params.0).map_err(map_app_error)?;
        success_payload(SuccessEnvelope::new(result))
    }

    /// Removes a subtask by parent and sibling id.
    #[tool(name = "remove_subtask", description = "Remove a subtask by parent and sibling id.")]
    async fn remove_subtask(
        &self,
        params: Parameters<RemoveSubtaskInput>,
    ) -> Result<CallToolResult, ErrorData> {
        let result = self.remove_subtask_tool(params.0).map_err(map_app_error)?;
        success_payload(SuccessEnvelope::new(result))
    }

    /// Renders the markdown progress report.
    #[tool(name = "report", description = "Render the markdown progress report.")]
    async fn report(&self, _params: Parameters<EmptyInput>) -> Result<CallToolResult, ErrorData> {
        let result = self.report_tool().map_err(map_app_error)?;
        success_payload(SuccessEnvelope::new(result))
    }

    /// Audits the dependency graph for cycles.
    #[tool(name = "find_cycles", description = "Audit the dependency graph for cycles.")]
    async fn find_cycles(
        &self,
        _params: Parameters<EmptyInput>,
    ) -> Result<CallToolResult, ErrorData> {
        let result = self.find_cycles_tool().map_err(map_app_error)?;
        success_payload(SuccessEnvelope::new(result))
    }

    /// Estimates the complexity of a task.
    #[tool(name = "complexity", description = "Estimate the complexity of a task.")]
    async fn complexity(
        &self,
        params: Parameters<ComplexityInput>,
    ) -> Result<CallToolResult, ErrorData> {
        let result = self.complexity_tool(params.0).map_err(map_app_error)?;
        success_payload(SuccessEnvelope::new(result))
    }
}

#[tool_handler(router = self.tool_router)]
impl rmcp::ServerHandler for SlateMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: "slate".to_string(),
                title: Some("Slate MCP".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            ..Default::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        let report = RawResource {
            uri: "slate://report".to_string(),
            name: "report".to_string(),
            title: Some("Progress report".to_string()),
            description: Some("Markdown progress report for the task collection".to_string()),
            mime_type: Some("text/markdown".to_string()),
            size: None,
            icons: None,
            meta: None,
        }
        .no_annotation();

        Ok(ListResourcesResult::with_all_items(vec![report]))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        self.read_resource_by_uri(request.uri.as_str())
    }
}

impl SlateMcp {
    fn read_resource_by_uri(&self, uri: &str) -> Result<ReadResourceResult, ErrorData> {
        if uri == "slate://report" {
            let result = self.report_tool().map_err(map_app_error)?;
            let contents = ResourceContents::TextResourceContents {
                uri: "slate://report".to_string(),
                mime_type: Some("text/markdown".to_string()),
                text: result.report,
                meta: None,
            };
            return Ok(ReadResourceResult {
                contents: vec![contents],
            });
        }

        Err(ErrorData::resource_not_found(
            "Resource not found",
            Some(serde_json::json!({ "uri": uri })),
        ))
    }
}

fn success_payload<T: serde::Serialize>(
    envelope: SuccessEnvelope<T>,
) -> Result<CallToolResult, ErrorData> {
    let payload = serde_json::to_string(&envelope).map_err(|err| {
        ErrorData::internal_error("Failed to serialize response", Some(err.to_string().into()))
    })?;
    Ok(CallToolResult::success(vec![Content::text(payload)]))
}

fn map_app_error(error: AppError) -> ErrorData {
    let envelope = ErrorEnvelope::from_error(&error);
    let data = serde_json::to_value(&envelope).ok();
    match envelope.code {
        slate_app::ErrorCode::NotFound | slate_app::ErrorCode::ParentNotFound => {
            ErrorData::resource_not_found(envelope.message, data)
        }
        slate_app::ErrorCode::ValidationError
        | slate_app::ErrorCode::InvalidInput
        | slate_app::ErrorCode::RepoNotInitialized => {
            ErrorData::invalid_params(envelope.message, data)
        }
        slate_app::ErrorCode::IoError
        | slate_app::ErrorCode::JsonError
        | slate_app::ErrorCode::GenerationError
        | slate_app::ErrorCode::Unknown => ErrorData::internal_error(envelope.message, data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slate_core::Status;
    use tempfile::TempDir;

    fn init_repo() -> (TempDir, RepoContext) {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let ctx = RepoContext::init(Some(temp.path())).expect("Failed to init repo");
        (temp, ctx)
    }

    fn server_for(ctx: &RepoContext, read_only: bool) -> SlateMcp {
        SlateMcp::new(McpOptions {
            repo: ctx.clone(),
            read_only,
            log_file: None,
            log_level: "info".to_string(),
        })
        .expect("Failed to create server")
    }

    fn extract_text(result: ReadResourceResult) -> String {
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => text.clone(),
            ResourceContents::BlobResourceContents { .. } => {
                panic!("Unexpected blob resource contents")
            }
        }
    }

    #[test]
    fn test_add_get_status_next_remove_flow() {
        let (_temp, ctx) = init_repo();
        let server = server_for(&ctx, false);

        let (added, warnings) = server
            .add_task_tool(AddTaskInput {
                title: "Write parser".to_string(),
                description: Some("Tokenize and parse".to_string()),
                priority: Some("high".to_string()),
                dependencies: None,
            })
            .expect("add failed");
        assert_eq!(added.task.id, 1);
        assert!(warnings.is_empty());

        let (second, warnings) = server
            .add_task_tool(AddTaskInput {
                title: "Write evaluator".to_string(),
                description: None,
                priority: None,
                dependencies: Some(vec!["1".to_string(), "99".to_string()]),
            })
            .expect("add failed");
        assert_eq!(second.task.dependencies, vec![DepRef::Task(1)]);
        assert_eq!(warnings.len(), 1);

        let got = server
            .get_task_tool(GetTaskInput {
                id: "1".to_string(),
            })
            .expect("get failed");
        assert!(got.complexity.is_some());

        let (pick, _) = server.next_task_tool().expect("next failed");
        assert_eq!(pick.task.expect("no pick").id, 1);

        let set = server
            .set_status_tool(SetStatusInput {
                id: "1".to_string(),
                status: "done".to_string(),
            })
            .expect("set failed");
        assert_eq!(set.status, Status::Done);

        let (pick, _) = server.next_task_tool().expect("next failed");
        assert_eq!(pick.task.expect("no pick").id, 2);

        server
            .remove_task_tool(RemoveTaskInput {
                id: "2".to_string(),
            })
            .expect("remove failed");
        let missing = server.get_task_tool(GetTaskInput {
            id: "2".to_string(),
        });
        assert!(missing.is_err());
    }

    #[test]
    fn test_subtask_roundtrip() {
        let (_temp, ctx) = init_repo();
        let server = server_for(&ctx, false);

        server
            .add_task_tool(AddTaskInput {
                title: "Parent".to_string(),
                description: None,
                priority: None,
                dependencies: None,
            })
            .expect("add failed");

        let (added, _) = server
            .add_subtask_tool(AddSubtaskInput {
                parent: 1,
                title: "Child".to_string(),
                description: None,
                priority: None,
                dependencies: None,
            })
            .expect("add subtask failed");
        assert_eq!(added.id, "1.1");
        assert_eq!(added.subtask.parent_id, 1);

        let got = server
            .get_task_tool(GetTaskInput {
                id: "1.1".to_string(),
            })
            .expect("get failed");
        assert_eq!(got.complexity.as_deref(), Some("low"));

        let removed = server
            .remove_subtask_tool(RemoveSubtaskInput { parent: 1, sub: 1 })
            .expect("remove subtask failed");
        assert_eq!(removed.id, "1.1");

        let missing = server.remove_subtask_tool(RemoveSubtaskInput { parent: 1, sub: 1 });
        assert!(missing.is_err());
    }

    #[test]
    fn test_add_subtask_unknown_parent() {
        let (_temp, ctx) = init_repo();
        let server = server_for(&ctx, false);

        let result = server.add_subtask_tool(AddSubtaskInput {
            parent: 7,
            title: "Orphan".to_string(),
            description: None,
            priority: None,
            dependencies: None,
        });
        match result {
            Err(error) => assert_eq!(error.code(), slate_app::ErrorCode::ParentNotFound),
            Ok(_) => panic!("expected ParentNotFound"),
        }
    }

    #[test]
    fn test_read_only_rejects_mutation() {
        let (_temp, ctx) = init_repo();
        let server = server_for(&ctx, true);

        let result = server.add_task_tool(AddTaskInput {
            title: "Nope".to_string(),
            description: None,
            priority: None,
            dependencies: None,
        });
        assert!(result.is_err());

        let result = server.set_status_tool(SetStatusInput {
            id: "1".to_string(),
            status: "done".to_string(),
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_report_resource() {
        let (_temp, ctx) = init_repo();
        let server = server_for(&ctx, false);

        server
            .add_task_tool(AddTaskInput {
                title: "Visible in report".to_string(),
                description: None,
                priority: None,
                dependencies: None,
            })
            .expect("add failed");

        let resource = server
            .read_resource_by_uri("slate://report")
            .expect("resource failed");
        let text = extract_text(resource);
        assert!(text.contains("Visible in report"));

        let missing = server.read_resource_by_uri("slate://bogus");
        assert!(missing.is_err());
    }

    #[test]
    fn test_find_cycles_and_complexity() {
        let (_temp, ctx) = init_repo();
        let server = server_for(&ctx, false);

        server
            .add_task_tool(AddTaskInput {
                title: "First".to_string(),
                description: None,
                priority: None,
                dependencies: None,
            })
            .expect("add failed");
        server
            .add_task_tool(AddTaskInput {
                title: "Second".to_string(),
                description: None,
                priority: None,
                dependencies: Some(vec!["1".to_string()]),
            })
            .expect("add failed");

        let audit = server.find_cycles_tool().expect("audit failed");
        assert!(!audit.has_cycle);

        // Close the loop directly; add_task filters unknown forward refs.
        {
            let mut store = server.store().expect("lock failed");
            store.data_mut().tasks[0].dependencies.push(DepRef::Task(2));
        }
        let audit = server.find_cycles_tool().expect("audit failed");
        assert!(audit.has_cycle);
        let cycle = audit.cycle.expect("no witness");
        assert!(cycle.contains(&"1".to_string()));
        assert!(cycle.contains(&"2".to_string()));

        let complexity = server
            .complexity_tool(ComplexityInput { id: 2 })
            .expect("complexity failed");
        assert_eq!(complexity.id, 2);
        assert!(!complexity.level.is_empty());
    }
}
