use thiserror::Error;

use crate::models::Notification;

/// Rejections produced by the session economy. None of them is fatal: the
/// handler turns each one into a destructive notification and leaves the state
/// untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("Required field is empty: {0}")]
    EmptyField(&'static str),

    #[error("No registered user in this session")]
    NotRegistered,

    #[error("No channel to deliver subscribers to")]
    NoChannels,

    #[error("Insufficient balance: have {balance}, need {required}")]
    InsufficientBalance { balance: u64, required: u64 },

    #[error("Unknown task: {0}")]
    UnknownTask(u32),

    #[error("Energy is depleted")]
    NoEnergy,
}

pub type ActionResult<T> = Result<T, ActionError>;

impl ActionError {
    pub fn notification(&self) -> Notification {
        let description = match self {
            ActionError::EmptyField("channel_link") => "Укажите ссылку на канал".to_string(),
            ActionError::EmptyField(_) => "Заполните все поля".to_string(),
            ActionError::NotRegistered => "Сначала зарегистрируйтесь".to_string(),
            ActionError::NoChannels => "Сначала добавьте канал для продвижения".to_string(),
            ActionError::InsufficientBalance { balance, required } => format!(
                "Недостаточно баллов: у вас {}, нужно {}",
                balance, required
            ),
            ActionError::UnknownTask(id) => format!("Задание #{} не найдено", id),
            ActionError::NoEnergy => "Энергия восстанавливается...".to_string(),
        };

        Notification::error(description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;

    #[test]
    fn every_rejection_is_destructive() {
        let errors = [
            ActionError::EmptyField("email"),
            ActionError::NotRegistered,
            ActionError::NoChannels,
            ActionError::InsufficientBalance { balance: 49, required: 50 },
            ActionError::UnknownTask(9),
            ActionError::NoEnergy,
        ];
        for err in errors {
            assert_eq!(err.notification().severity, Severity::Destructive);
        }
    }

    #[test]
    fn insufficient_balance_reports_both_amounts() {
        let toast = ActionError::InsufficientBalance { balance: 30, required: 50 }.notification();
        assert!(toast.description.contains("30"));
        assert!(toast.description.contains("50"));
    }
}
