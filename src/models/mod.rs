mod user;
mod forms;
mod task;
mod notification;
mod energy;
mod section;

pub use user::User;
pub use forms::{RegisterForm, ChannelForm, PageQuery};
pub use task::{Task, TaskKind, TASK_CATALOG, find_task};
pub use notification::{Notification, Severity};
pub use energy::EnergyMeter;
pub use section::Section;
