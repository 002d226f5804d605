//! Server-side renderers. Every function here is a pure function of its
//! arguments; state changes only happen in the orchestrator.

mod content;
pub mod dashboard;
pub mod landing;
pub mod modals;
pub mod navigation;

use crate::config::Config;
use crate::models::{Notification, Severity};
use crate::orchestrator::{SessionState, View};

pub use content::BRAND;

const LAYOUT: &str = include_str!("../../templates/layout.html");

/// Escape HTML special characters
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub fn icon(name: &str) -> String {
    let glyph = match name {
        "Zap" => "⚡",
        "Sparkles" => "✨",
        "Rocket" => "🚀",
        "PlayCircle" => "▶",
        "Users" => "👥",
        "TrendingUp" => "📈",
        "Shield" => "🛡",
        "UserPlus" => "➕",
        "Link" => "🔗",
        "Target" => "🎯",
        "Trophy" => "🏆",
        "BookOpen" => "📖",
        "Lightbulb" => "💡",
        "Calendar" => "📅",
        "Clock" => "🕒",
        "HelpCircle" => "❔",
        "Mail" => "✉",
        "MessageCircle" => "💬",
        "Coins" => "🪙",
        "Plus" => "+",
        "Send" => "✈",
        "Menu" => "☰",
        "Home" => "🏠",
        "Cog" => "⚙",
        "Eye" => "👁",
        "Heart" => "❤",
        "CheckCircle" => "✔",
        _ => "•",
    };
    format!(r#"<span class="icon" data-icon="{}" aria-hidden="true">{}</span>"#, name, glyph)
}

pub fn render_toast(notification: &Notification) -> String {
    let class = match notification.severity {
        Severity::Normal => "toast",
        Severity::Destructive => "toast toast-destructive",
    };
    format!(
        r#"<div class="{}" role="status">
            <strong>{}</strong>
            <p>{}</p>
        </div>"#,
        class,
        escape(&notification.title),
        escape(&notification.description)
    )
}

/// Renders the whole page for the session's current view.
pub fn render_page(state: &SessionState, toast: Option<&Notification>, config: &Config) -> String {
    let (title, navigation, main) = match (&state.view, &state.user) {
        (View::Dashboard, Some(user)) => {
            let nav = navigation::render(&navigation::NavProps {
                dashboard: true,
                registered: true,
                balance: Some(user.balance),
                active: state.active_section,
                show_menu: state.show_mobile_menu,
            });
            let main = dashboard::render(&dashboard::DashboardProps {
                user,
                mode: config.dashboard.mode,
                energy: state.energy.as_ref(),
                economy: &config.economy,
                energy_config: &config.energy,
            });
            (format!("{} — кабинет", BRAND), nav, main)
        }
        _ => {
            let nav = navigation::render(&navigation::NavProps {
                dashboard: false,
                registered: state.is_registered(),
                balance: None,
                active: state.active_section,
                show_menu: state.show_mobile_menu,
            });
            (BRAND.to_string(), nav, landing::render())
        }
    };

    let modals = modals::render(&modals::ModalProps {
        show_register: state.show_register_modal,
        show_add_channel: state.show_add_channel_modal && state.is_registered(),
        username: &state.username_field,
        email: &state.email_field,
        register_error: state.register_error.as_deref(),
        channel_link: &state.channel_link_field,
    });

    let view = match state.view {
        View::Landing => "landing",
        View::Dashboard => "dashboard",
    };

    let toast = toast.map(render_toast).unwrap_or_default();
    fill(LAYOUT, &[
        ("title", title.as_str()),
        ("view", view),
        ("navigation", navigation.as_str()),
        ("main", main.as_str()),
        ("modals", modals.as_str()),
        ("toast", toast.as_str()),
    ])
}

// Single pass over the template so user text that happens to contain a
// placeholder is never expanded.
fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };

        let key = &after[..end];
        match vars.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + end + 4]),
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}
