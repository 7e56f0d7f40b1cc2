//! The fixed task list loaded at process start.

use chrono::{DateTime, TimeZone, Utc};

use crate::identifiers::TaskId;
use crate::status::TaskStatus;
use crate::task::{Task, User};

struct SeedRow {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    status: TaskStatus,
    category: &'static str,
    created_at: (i32, u32, u32, u32, u32),
    user: (&'static str, &'static str),
}

fn rows() -> [SeedRow; 10] {
    [
        SeedRow {
            id: "1",
            title: "Estudar GraphQL",
            description: "Ler documentação oficial e fazer exemplos práticos.",
            status: TaskStatus::Pending,
            category: "Estudos",
            created_at: (2025, 7, 1, 8, 0),
            user: ("Ana", "Silva"),
        },
        SeedRow {
            id: "2",
            title: "Reunião com o time",
            description: "Alinhar metas da próxima sprint.",
            status: TaskStatus::Completed,
            category: "Trabalho",
            created_at: (2025, 7, 2, 10, 30),
            user: ("Carlos", "Pereira"),
        },
        SeedRow {
            id: "3",
            title: "Jogo da Fúria",
            description: "Assitir a transmissão da partida de CS2 no Gaules.",
            status: TaskStatus::Pending,
            category: "Pessoal",
            created_at: (2025, 7, 18, 16, 0),
            user: ("Isabela", "Mattos"),
        },
        SeedRow {
            id: "4",
            title: "Estudar IA",
            description: "Aprofundar em machine learning e redes neurais com o curso da Alura.",
            status: TaskStatus::Pending,
            category: "Estudos",
            created_at: (2025, 7, 20, 14, 0),
            user: ("Fernanda", "Lima"),
        },
        SeedRow {
            id: "5",
            title: "Finalizar refatoração do módulo de autenticação",
            description: "Implementar os ajustes de performance sugeridos na review.",
            status: TaskStatus::Completed,
            category: "Trabalho",
            created_at: (2025, 7, 15, 9, 0),
            user: ("Roberto", "Souza"),
        },
        SeedRow {
            id: "6",
            title: "Passear com a Maitê (pinscher caramelo de 30cm)",
            description: "Dar uma volta no parque com a Maitê por 30 minutos.",
            status: TaskStatus::Pending,
            category: "Pessoal",
            created_at: (2025, 7, 19, 17, 30),
            user: ("Mariana", "Costa"),
        },
        SeedRow {
            id: "7",
            title: "Revisar relatório mensal",
            description: "Verificar dados e formatação antes de enviar para o líder.",
            status: TaskStatus::Pending,
            category: "Trabalho",
            created_at: (2025, 7, 22, 11, 0),
            user: ("Pedro", "Alves"),
        },
        SeedRow {
            id: "8",
            title: "Estudar conversação em inglês",
            description: "Participar da aula online com o professor particular.",
            status: TaskStatus::Pending,
            category: "Estudos",
            created_at: (2025, 7, 21, 19, 0),
            user: ("Clara", "Santos"),
        },
        SeedRow {
            id: "9",
            title: "Ligar para os pais",
            description: "Colocar o papo em dia e saber como estão as coisas.",
            status: TaskStatus::Completed,
            category: "Pessoal",
            created_at: (2025, 7, 16, 18, 0),
            user: ("Gustavo", "Nunes"),
        },
        SeedRow {
            id: "10",
            title: "Ver o final da novela",
            description: "Assistir ao último capítulo de \"Terra e Paixão\".",
            status: TaskStatus::Pending,
            category: "Lazer",
            created_at: (2025, 7, 23, 21, 0),
            user: ("Beatriz", "Gomes"),
        },
    ]
}

fn utc(parts: (i32, u32, u32, u32, u32)) -> DateTime<Utc> {
    let (year, month, day, hour, minute) = parts;
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

/// The ten seed tasks, in insertion order
pub fn seed_tasks() -> Vec<Task> {
    rows()
        .into_iter()
        .map(|row| Task {
            id: TaskId::new_unchecked(row.id),
            title: row.title.to_string(),
            description: Some(row.description.to_string()),
            status: row.status,
            category: row.category.to_string(),
            created_at: utc(row.created_at),
            user: User::new(row.user.0, row.user.1),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique_and_ordered() {
        let tasks = seed_tasks();
        assert_eq!(tasks.len(), 10);

        let ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]);
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), 10);
    }

    #[test]
    fn test_seed_timestamps_are_valid() {
        for task in seed_tasks() {
            assert_ne!(task.created_at, DateTime::<Utc>::default(), "task {}", task.id);
        }
        assert_eq!(seed_tasks()[1].created_at_iso(), "2025-07-02T10:30:00.000Z");
    }

    #[test]
    fn test_seed_statuses_are_known() {
        assert!(seed_tasks().iter().all(|t| t.status.is_known()));
        assert!(seed_tasks()[1].is_completed());
    }
}
