//! Terminal rendering of tasks

use taskboard_client::TaskStats;
use taskboard_core::{Task, TaskStatus};

/// Icon shown next to a task's category
pub fn category_icon(category: &str) -> &'static str {
    match category {
        "Trabalho" => "💼",
        "Pessoal" => "🏠",
        "Estudos" => "📚",
        _ => "📋",
    }
}

fn status_mark(status: &TaskStatus) -> &'static str {
    match status {
        TaskStatus::Completed => "[x]",
        TaskStatus::Pending => "[ ]",
        TaskStatus::Other(_) => "[?]",
    }
}

/// `dd/mm/yyyy` creation date
pub fn format_date(task: &Task) -> String {
    task.created_at.format("%d/%m/%Y").to_string()
}

/// One line per task
pub fn render_list(tasks: &[&Task]) -> String {
    if tasks.is_empty() {
        return "No tasks found".to_string();
    }

    tasks
        .iter()
        .map(|task| {
            format!(
                "{} {:>3}  {} {}  ({}, {}, {})",
                status_mark(&task.status),
                task.id.as_str(),
                category_icon(&task.category),
                task.title,
                task.category,
                format_date(task),
                task.user.full_name(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_stats(stats: &TaskStats) -> String {
    format!(
        "Total: {}  Pending: {}  Completed: {}",
        stats.total, stats.pending, stats.completed
    )
}

/// Multi-line view of a single task
pub fn render_detail(task: &Task) -> String {
    let mut lines = vec![format!(
        "{} {} {}",
        status_mark(&task.status),
        category_icon(&task.category),
        task.title
    )];
    if let Some(description) = &task.description {
        lines.push(format!("    {}", description));
    }
    lines.push(format!("    id:       {}", task.id));
    lines.push(format!("    status:   {}", task.status));
    lines.push(format!("    category: {}", task.category));
    lines.push(format!("    created:  {}", format_date(task)));
    lines.push(format!("    author:   {}", task.user.full_name()));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use taskboard_core::seed_tasks;

    fn seed(id: &str) -> Task {
        seed_tasks()
            .into_iter()
            .find(|t| t.id.as_str() == id)
            .unwrap()
    }

    #[rstest]
    #[case("Trabalho", "💼")]
    #[case("Pessoal", "🏠")]
    #[case("Estudos", "📚")]
    #[case("Lazer", "📋")]
    fn test_category_icon(#[case] category: &str, #[case] icon: &str) {
        assert_eq!(category_icon(category), icon);
    }

    #[test]
    fn test_format_date_is_day_month_year() {
        assert_eq!(format_date(&seed("8")), "21/07/2025");
    }

    #[test]
    fn test_render_list_lines() {
        let tasks = seed_tasks();
        let refs: Vec<&Task> = tasks.iter().take(2).collect();
        let rendered = render_list(&refs);

        assert_eq!(rendered.lines().count(), 2);
        assert!(rendered.contains(&tasks[0].title));
        assert!(rendered.contains(&tasks[0].user.full_name()));
    }

    #[test]
    fn test_render_empty_list() {
        assert_eq!(render_list(&[]), "No tasks found");
    }

    #[test]
    fn test_render_detail_includes_description() {
        let task = seed("2");
        let rendered = render_detail(&task);

        assert!(rendered.starts_with("[x]"));
        assert!(rendered.contains(task.description.as_deref().unwrap()));
        assert!(rendered.contains("status:   completed"));
    }
}
