//! Property-based tests for the `getTasks` pipeline and status updates
//!
//! These run against generated task lists rather than the fixed seed, so
//! ordering, filtering and capping are checked for arbitrary timestamps,
//! duplicates and categories.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use taskboard::core::{
    InMemoryTaskStore, StatusPolicy, Task, TaskId, TaskQuery, TaskStatus, TaskStore, User,
};

const CATEGORIES: &[&str] = &["Trabalho", "Pessoal", "Estudos", "Lazer"];

// Strategy for a task list with unique ids and random timestamps/categories
fn task_list_strategy() -> impl Strategy<Value = Vec<Task>> {
    prop::collection::vec(
        (
            0i64..2_000_000_000,
            0usize..CATEGORIES.len(),
            prop::bool::ANY,
        ),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (secs, category, done))| Task {
                id: TaskId::new_unchecked((i + 1).to_string()),
                title: format!("Task {}", i + 1),
                description: None,
                status: if done {
                    TaskStatus::Completed
                } else {
                    TaskStatus::Pending
                },
                category: CATEGORIES[category].to_string(),
                created_at: Utc.timestamp_opt(secs, 0).single().unwrap_or_default(),
                user: User::new("Ana", "Lima"),
            })
            .collect()
    })
}

fn category_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(
        prop::sample::select(vec!["Trabalho", "Pessoal", "Estudos", "Lazer", "Viagem"])
            .prop_map(str::to_string),
    )
}

proptest! {
    /// Property: results are ordered by creation time, newest first
    #[test]
    fn prop_results_are_sorted_descending(tasks in task_list_strategy(), category in category_strategy()) {
        let result = TaskQuery::from_args(category, None).unwrap().apply(tasks);
        prop_assert!(result.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    /// Property: every returned task matches the requested category
    #[test]
    fn prop_category_filter_is_exact(tasks in task_list_strategy(), category in category_strategy()) {
        let expected = tasks
            .iter()
            .filter(|t| category.as_deref().is_none_or(|c| t.category == c))
            .count();
        let result = TaskQuery::from_args(category.clone(), None).unwrap().apply(tasks);

        prop_assert_eq!(result.len(), expected);
        if let Some(c) = category {
            prop_assert!(result.iter().all(|t| t.category == c));
        }
    }

    /// Property: a capped result is a prefix of the uncapped one
    #[test]
    fn prop_take_is_prefix(
        tasks in task_list_strategy(),
        category in category_strategy(),
        take in 1i32..50,
    ) {
        let full = TaskQuery::from_args(category.clone(), None).unwrap().apply(tasks.clone());
        let capped = TaskQuery::from_args(category, Some(take)).unwrap().apply(tasks);

        prop_assert!(capped.len() <= take as usize);
        prop_assert_eq!(&capped[..], &full[..capped.len()]);
    }

    /// Property: ties keep insertion order
    #[test]
    fn prop_ties_keep_insertion_order(tasks in task_list_strategy()) {
        let result = TaskQuery::new().apply(tasks.clone());
        for pair in result.windows(2) {
            if pair[0].created_at == pair[1].created_at {
                let pos = |t: &Task| tasks.iter().position(|x| x.id == t.id);
                prop_assert!(pos(&pair[0]) < pos(&pair[1]));
            }
        }
    }

    /// Property: a status update changes only the status of the target task
    #[test]
    fn prop_update_changes_only_status(tasks in task_list_strategy(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!tasks.is_empty());
        let store = InMemoryTaskStore::from_tasks(tasks.clone());
        let target = tasks[pick.index(tasks.len())].clone();
        let new_status = target.status.toggled();

        let updated = store.set_status(&target.id, new_status.clone()).unwrap();

        let mut expected = target.clone();
        expected.status = new_status;
        prop_assert_eq!(&updated, &expected);

        let after = store.list().unwrap();
        for (before, now) in tasks.iter().zip(after.iter()) {
            if before.id != target.id {
                prop_assert_eq!(before, now);
            }
        }
    }

    /// Property: toggling twice restores the original status
    #[test]
    fn prop_double_toggle_restores(tasks in task_list_strategy(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!tasks.is_empty());
        let store = InMemoryTaskStore::from_tasks(tasks.clone());
        let target = &tasks[pick.index(tasks.len())];

        let once = store.set_status(&target.id, target.status.toggled()).unwrap();
        let twice = store.set_status(&target.id, once.status.toggled()).unwrap();

        prop_assert_eq!(&twice.status, &target.status);
    }

    /// Property: strict mode admits only the two known statuses
    #[test]
    fn prop_strict_policy_admits_only_known(raw in "[a-z]{1,12}") {
        let admitted = StatusPolicy::Strict.admit(&raw);
        prop_assert_eq!(admitted.is_ok(), raw == "pending" || raw == "completed");
        prop_assert!(StatusPolicy::Lenient.admit(&raw).is_ok());
    }

    /// Property: the schema answers getTasks the same way the core pipeline does
    #[test]
    fn prop_graphql_matches_core(tasks in task_list_strategy(), category in category_strategy(), take in 0i32..20) {
        tokio_test::block_on(async {
            let store = InMemoryTaskStore::from_tasks(tasks.clone());
            let schema = taskboard::http::build_schema(store.shared(), StatusPolicy::Lenient);
            let request = async_graphql_request(category.clone(), take);
            let response = serde_json::to_value(schema.execute(request).await).unwrap();

            let ids: Vec<String> = response["data"]["getTasks"]
                .as_array()
                .unwrap()
                .iter()
                .map(|t| t["id"].as_str().unwrap().to_string())
                .collect();
            let expected: Vec<String> = TaskQuery::from_args(category, Some(take))
                .unwrap()
                .apply(tasks)
                .into_iter()
                .map(|t| t.id.to_string())
                .collect();

            assert_eq!(ids, expected);
        });
    }
}

fn async_graphql_request(category: Option<String>, take: i32) -> async_graphql::Request {
    async_graphql::Request::new(
        "query($category: String, $take: Int) { getTasks(category: $category, take: $take) { id } }",
    )
    .variables(async_graphql::Variables::from_json(serde_json::json!({
        "category": category,
        "take": take,
    })))
}
