mod api;
mod auth;
mod dashboard;
mod view;

pub use api::get_state;
pub use auth::handle_register;
pub use dashboard::{add_channel, complete_task, order_subscribers, tap};
pub use view::{
    serve_index, navigate_to_section, show_landing, show_dashboard, toggle_view,
    open_register_modal, close_register_modal, open_channel_modal, close_channel_modal,
    toggle_mobile_menu,
};
