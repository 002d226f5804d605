use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Subscribe,
    View,
    Like,
}

impl TaskKind {
    pub fn label(self) -> &'static str {
        match self {
            TaskKind::Subscribe => "Подписаться на канал",
            TaskKind::View => "Посмотреть пост",
            TaskKind::Like => "Поставить лайк",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            TaskKind::Subscribe => "UserPlus",
            TaskKind::View => "Eye",
            TaskKind::Like => "Heart",
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: u32,
    pub kind: TaskKind,
    pub channel: &'static str,
    pub reward: u64,
}

// Fixed catalog. Completing a task never removes it.
pub const TASK_CATALOG: [Task; 5] = [
    Task { id: 1, kind: TaskKind::Subscribe, channel: "@tech_news_ru", reward: 10 },
    Task { id: 2, kind: TaskKind::View, channel: "@crypto_daily", reward: 5 },
    Task { id: 3, kind: TaskKind::Like, channel: "@design_inspo", reward: 3 },
    Task { id: 4, kind: TaskKind::Subscribe, channel: "@startup_stories", reward: 15 },
    Task { id: 5, kind: TaskKind::View, channel: "@travel_notes", reward: 5 },
];

pub fn find_task(id: u32) -> Option<&'static Task> {
    TASK_CATALOG.iter().find(|task| task.id == id)
}
