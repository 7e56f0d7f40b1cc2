//! Subcommand implementations

use clap::{Args, Subcommand};
use taskboard_client::{
    FetchOutcome, StatusFilter, StatusToggle, TaskSource, TaskView, TaskboardClient,
};
use taskboard_core::{InMemoryTaskStore, StatusPolicy, TaskId};
use taskboard_http::{RuntimeConfigBuilder, TaskboardRuntime, build_schema};
use tokio::net::TcpListener;
use tracing::info;

use crate::error::{CliError, CliResult};
use crate::render::{render_detail, render_list, render_stats};

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Interface to bind (overrides TASKBOARD_HOST)
    #[arg(long)]
    host: Option<String>,
    /// Port to bind (overrides TASKBOARD_PORT)
    #[arg(long)]
    port: Option<u16>,
    /// GraphQL endpoint path (overrides TASKBOARD_GRAPHQL_PATH)
    #[arg(long)]
    graphql_path: Option<String>,
    /// Reject statuses other than pending/completed
    #[arg(long)]
    strict: bool,
    /// Do not serve GraphiQL on bare GET requests
    #[arg(long)]
    no_playground: bool,
}

#[derive(Args, Debug)]
pub struct TaskArgs {
    /// GraphQL endpoint of a running server
    #[arg(
        long,
        env = "TASKBOARD_ENDPOINT",
        default_value = "http://127.0.0.1:3000/api/graphql"
    )]
    endpoint: String,
    /// Print raw JSON instead of formatted text
    #[arg(long)]
    json: bool,
    #[command(subcommand)]
    command: TaskCommands,
}

#[derive(Subcommand, Debug)]
pub enum TaskCommands {
    /// List tasks newest first
    List {
        /// Only tasks of this category
        #[arg(long)]
        category: Option<String>,
        /// Maximum number of tasks (server default applies otherwise)
        #[arg(long)]
        take: Option<i32>,
        /// Local status filter: all, pending or completed
        #[arg(long, default_value = "all")]
        status: StatusFilter,
    },
    /// Flip a task between pending and completed
    Toggle {
        /// Task id
        id: String,
    },
    /// Show one task
    Show {
        /// Task id
        id: String,
    },
}

pub async fn run_serve(args: ServeArgs) -> CliResult<()> {
    let mut builder = RuntimeConfigBuilder::from_env()?;
    if let Some(host) = args.host {
        builder = builder.host(host);
    }
    if let Some(port) = args.port {
        builder = builder.port(port);
    }
    if let Some(path) = args.graphql_path {
        builder = builder.graphql_path(path);
    }
    if args.strict {
        builder = builder.status_policy(StatusPolicy::Strict);
    }
    if args.no_playground {
        builder = builder.enable_playground(false);
    }
    let config = builder.build()?;

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| CliError::Bind {
            address: address.clone(),
            source,
        })?;

    let runtime = TaskboardRuntime::new(InMemoryTaskStore::seeded().shared(), config);
    info!(%address, "Starting taskboard server");
    runtime.serve(listener).await.map_err(CliError::Server)
}

pub fn print_schema() {
    let schema = build_schema(InMemoryTaskStore::new().shared(), StatusPolicy::default());
    println!("{}", schema.sdl());
}

pub async fn run_tasks(args: TaskArgs) -> CliResult<()> {
    let client = TaskboardClient::new(&args.endpoint)?;

    match args.command {
        TaskCommands::List {
            category,
            take,
            status,
        } => {
            let view = load_list(&client, category, take, status).await?;

            if args.json {
                println!("{}", serde_json::to_string_pretty(&view.visible_tasks())?);
            } else {
                println!("{}", render_stats(&view.stats()));
                println!("{}", render_list(&view.visible_tasks()));
            }
        }
        TaskCommands::Toggle { id } => {
            let id = TaskId::parse(id)?;
            let current = client.get_task(&id).await?;
            let mut toggle = StatusToggle::new();
            let updated = toggle.toggle(&client, &id, &current.status).await?;

            if args.json {
                println!("{}", serde_json::to_string_pretty(&updated)?);
            } else {
                println!("{} -> {}", current.status, updated.status);
                println!("{}", render_detail(&updated));
            }
        }
        TaskCommands::Show { id } => {
            let task = client.get_task(&TaskId::parse(id)?).await?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&task)?);
            } else {
                println!("{}", render_detail(&task));
            }
        }
    }

    Ok(())
}

/// Fetch one page of tasks into a fresh view, failing when the fetch does
async fn load_list<S: TaskSource + ?Sized>(
    source: &S,
    category: Option<String>,
    take: Option<i32>,
    status: StatusFilter,
) -> CliResult<TaskView> {
    let mut view = match category {
        Some(category) => TaskView::with_category(category),
        None => TaskView::new(),
    }
    .with_take(take);
    view.set_status_filter(status);

    match view.refresh(source).await {
        FetchOutcome::Failed => Err(CliError::Fetch(
            view.error().unwrap_or("unknown error").to_string(),
        )),
        FetchOutcome::Applied | FetchOutcome::Stale => Ok(view),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use taskboard_client::{ClientError, ClientResult};
    use taskboard_core::{Task, TaskQuery, TaskStatus, seed_tasks};

    struct SeedSource {
        fail_with: Option<&'static str>,
    }

    #[async_trait]
    impl TaskSource for SeedSource {
        async fn fetch_tasks(
            &self,
            category: Option<&str>,
            take: Option<i32>,
        ) -> ClientResult<Vec<Task>> {
            if let Some(message) = self.fail_with {
                return Err(ClientError::connection_error(message));
            }
            let query = TaskQuery::from_args(category.map(str::to_string), take).unwrap();
            Ok(query.apply(seed_tasks()))
        }

        async fn update_task_status(&self, id: &TaskId, _: &TaskStatus) -> ClientResult<Task> {
            Err(ClientError::UnknownTask { id: id.to_string() })
        }
    }

    #[tokio::test]
    async fn test_load_list_applies_filter_and_take() {
        let source = SeedSource { fail_with: None };
        let view = load_list(&source, Some("Estudos".into()), Some(2), StatusFilter::All)
            .await
            .unwrap();

        let ids: Vec<_> = view.tasks().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["8", "4"]);
    }

    #[tokio::test]
    async fn test_load_list_failure_is_an_error() {
        let source = SeedSource {
            fail_with: Some("connection refused"),
        };
        let err = load_list(&source, None, None, StatusFilter::All)
            .await
            .unwrap_err();

        assert!(matches!(err, CliError::Fetch(_)));
        assert!(err.to_string().contains("connection refused"));
    }
}
