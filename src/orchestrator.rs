//! Per-session application state and the operations that mutate it.
//!
//! Every handler loads one [`SessionState`], calls exactly one operation on it,
//! records the resulting notification and saves it back. Renderers only ever
//! see a shared reference.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{EconomyConfig, EnergyConfig};
use crate::errors::{ActionError, ActionResult};
use crate::models::{EnergyMeter, Notification, Section, Task, User};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Landing,
    Dashboard,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub view: View,
    pub user: Option<User>,

    // form fields, kept across renders
    pub username_field: String,
    pub email_field: String,
    pub register_error: Option<String>,
    pub channel_link_field: String,

    pub show_register_modal: bool,
    pub show_add_channel_modal: bool,
    pub show_mobile_menu: bool,
    pub active_section: Section,

    pub energy: Option<EnergyMeter>,
    pub notification: Option<Notification>,
}

impl SessionState {
    pub fn is_registered(&self) -> bool {
        self.user.is_some()
    }

    /// Stores the toast for the next render.
    pub fn notify(&mut self, outcome: ActionResult<Notification>) {
        let notification = match outcome {
            Ok(notification) => notification,
            Err(e) => {
                tracing::debug!("Action rejected: {}", e);
                e.notification()
            }
        };
        self.notification = Some(notification);
    }

    pub fn take_notification(&mut self) -> Option<Notification> {
        self.notification.take()
    }

    pub fn register(&mut self, username: String, email: String) -> ActionResult<Notification> {
        self.username_field = username;
        self.email_field = email;

        let missing = if self.username_field.is_empty() {
            Some("username")
        } else if self.email_field.is_empty() {
            Some("email")
        } else {
            None
        };
        if let Some(field) = missing {
            self.register_error = Some("Заполните все поля".to_string());
            return Err(ActionError::EmptyField(field));
        }

        let user = User::new(self.username_field.clone());
        let notification = Notification::success(
            format!("Добро пожаловать, {}!", user.username),
            "Аккаунт создан. Выполняйте задания и получайте подписчиков.",
        );

        self.user = Some(user);
        self.register_error = None;
        self.show_register_modal = false;
        self.show_mobile_menu = false;
        self.view = View::Dashboard;
        Ok(notification)
    }

    pub fn add_channel(&mut self, link: String) -> ActionResult<Notification> {
        let user = self.user.as_mut().ok_or(ActionError::NotRegistered)?;
        if link.is_empty() {
            self.channel_link_field = link;
            return Err(ActionError::EmptyField("channel_link"));
        }

        let notification = Notification::success(
            "Канал добавлен",
            format!("{} добавлен для продвижения", link),
        );
        user.channels.push(link);
        self.show_add_channel_modal = false;
        self.channel_link_field.clear();
        Ok(notification)
    }

    pub fn complete_task(&mut self, task: &Task) -> ActionResult<Notification> {
        let user = self.user.as_mut().ok_or(ActionError::NotRegistered)?;
        user.balance += task.reward;

        Ok(Notification::success(
            format!("+{} баллов", task.reward),
            format!("Задание выполнено. Баланс: {}", user.balance),
        ))
    }

    pub fn order_subscribers(&mut self, economy: &EconomyConfig) -> ActionResult<Notification> {
        let user = self.user.as_mut().ok_or(ActionError::NotRegistered)?;
        if user.channels.is_empty() {
            return Err(ActionError::NoChannels);
        }
        if user.balance < economy.order_cost {
            return Err(ActionError::InsufficientBalance {
                balance: user.balance,
                required: economy.order_cost,
            });
        }

        user.balance -= economy.order_cost;
        Ok(Notification::success(
            "Подписчики заказаны!",
            format!(
                "{} подписчиков поступят на ваши каналы в течение 24 часов. Остаток: {}",
                economy.subscribers_per_order, user.balance
            ),
        ))
    }

    /// One tap of the energy dashboard. Returns the new balance.
    pub fn tap(
        &mut self,
        economy: &EconomyConfig,
        energy: &EnergyConfig,
        now: DateTime<Utc>,
    ) -> ActionResult<u64> {
        let user = self.user.as_mut().ok_or(ActionError::NotRegistered)?;
        let meter = self
            .energy
            .get_or_insert_with(|| EnergyMeter::full(energy, now));
        meter.regenerate(energy, now);
        meter.tap()?;

        user.balance += economy.coins_per_tap;
        Ok(user.balance)
    }

    /// Brings the meter up to date and returns a snapshot of it.
    pub fn energy_at(&mut self, energy: &EnergyConfig, now: DateTime<Utc>) -> EnergyMeter {
        let meter = self
            .energy
            .get_or_insert_with(|| EnergyMeter::full(energy, now));
        meter.regenerate(energy, now);
        meter.clone()
    }

    pub fn navigate_to_section(&mut self, section: Section) {
        self.active_section = section;
        self.show_mobile_menu = false;
        self.view = View::Landing;
    }

    pub fn show_landing(&mut self) {
        self.view = View::Landing;
        self.show_mobile_menu = false;
        self.show_add_channel_modal = false;
    }

    pub fn show_dashboard(&mut self) -> ActionResult<()> {
        if !self.is_registered() {
            return Err(ActionError::NotRegistered);
        }
        self.view = View::Dashboard;
        self.show_mobile_menu = false;
        self.show_register_modal = false;
        Ok(())
    }

    pub fn toggle_view(&mut self) -> ActionResult<()> {
        match self.view {
            View::Landing => self.show_dashboard(),
            View::Dashboard => {
                self.show_landing();
                Ok(())
            }
        }
    }

    pub fn set_register_modal(&mut self, open: bool) {
        self.show_register_modal = open;
        if open {
            self.show_mobile_menu = false;
        } else {
            self.register_error = None;
        }
    }

    pub fn set_add_channel_modal(&mut self, open: bool) -> ActionResult<()> {
        if open && !self.is_registered() {
            return Err(ActionError::NotRegistered);
        }
        self.show_add_channel_modal = open;
        Ok(())
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.show_mobile_menu = !self.show_mobile_menu;
    }
}
