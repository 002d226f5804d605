use crate::config::{DashboardMode, EconomyConfig, EnergyConfig};
use crate::models::{EnergyMeter, User, TASK_CATALOG};
use super::{escape, icon};

pub struct DashboardProps<'a> {
    pub user: &'a User,
    pub mode: DashboardMode,
    pub energy: Option<&'a EnergyMeter>,
    pub economy: &'a EconomyConfig,
    pub energy_config: &'a EnergyConfig,
}

pub fn render(props: &DashboardProps) -> String {
    let user = props.user;
    let subtitle = match props.mode {
        DashboardMode::Tasks => "Выполняй задания и зарабатывай баллы для подписчиков",
        DashboardMode::Energy => "Тапай и зарабатывай коины для подписчиков",
    };

    let main_panel = match props.mode {
        DashboardMode::Tasks => task_list(),
        DashboardMode::Energy => energy_panel(props),
    };

    format!(
        r#"<section class="dashboard">
            <div class="container">
                <header class="dashboard-header">
                    <h1>Привет, <span class="gradient-text">{}</span>! 👋</h1>
                    <p class="muted">{}</p>
                </header>
                <div class="grid grid-3">
                    {}
                    {}
                    {}
                </div>
                {}
                {}
            </div>
        </section>"#,
        escape(&user.username),
        subtitle,
        balance_card(props),
        channels_card(user),
        order_card(props),
        channel_list(user),
        main_panel
    )
}

fn balance_card(props: &DashboardProps) -> String {
    let (title, caption) = match props.mode {
        DashboardMode::Tasks => ("Баланс", "баллов доступно"),
        DashboardMode::Energy => ("Коины", "коинов доступно"),
    };
    format!(
        r#"<article class="card">
            <h3>{} {}</h3>
            <div class="big-number" id="balance">{}</div>
            <p class="muted">{}</p>
        </article>"#,
        icon("Coins"),
        title,
        props.user.balance,
        caption
    )
}

fn channels_card(user: &User) -> String {
    format!(
        r#"<article class="card">
            <h3>{} Мои каналы</h3>
            <div class="big-number" id="channel-count">{}</div>
            <a class="btn btn-outline btn-block" href="/modals/channel/open">{} Добавить канал</a>
        </article>"#,
        icon("Users"),
        user.channels.len(),
        icon("Plus")
    )
}

// The button state mirrors the orchestrator's checks; the POST is still
// validated server side.
fn order_card(props: &DashboardProps) -> String {
    let economy = props.economy;
    let unit = match props.mode {
        DashboardMode::Tasks => "баллов",
        DashboardMode::Energy => "коинов",
    };
    let can_order = props.user.balance >= economy.order_cost && !props.user.channels.is_empty();
    format!(
        r#"<article class="card">
            <h3>{} Заказать подписчиков</h3>
            <div class="price">{} {} = {} подписчиков</div>
            <form method="post" action="/orders">
                <button class="btn btn-primary btn-block" type="submit"{}>{} Получить подписчиков</button>
            </form>
        </article>"#,
        icon("TrendingUp"),
        economy.order_cost,
        unit,
        economy.subscribers_per_order,
        if can_order { "" } else { " disabled" },
        icon("Rocket")
    )
}

fn channel_list(user: &User) -> String {
    if user.channels.is_empty() {
        return String::new();
    }

    let rows = user
        .channels
        .iter()
        .map(|channel| {
            format!(
                r#"<li class="row">
                    <span class="avatar">{}</span>
                    <span class="row-title">{}</span>
                    <span class="btn btn-outline btn-sm">Статистика</span>
                </li>"#,
                icon("Send"),
                escape(channel)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<article class="card">
            <h3>Мои каналы для продвижения</h3>
            <ul class="rows" id="channel-list">{}</ul>
        </article>"#,
        rows
    )
}

fn task_list() -> String {
    let rows = TASK_CATALOG
        .iter()
        .map(|task| {
            format!(
                r#"<li class="row task">
                    <span class="avatar">{}</span>
                    <span class="row-title">{}<br><small class="muted">{}</small></span>
                    <span class="reward">+{}</span>
                    <form method="post" action="/tasks/{}/complete">
                        <button class="btn btn-primary btn-sm" type="submit">Выполнить</button>
                    </form>
                </li>"#,
                icon(task.kind.icon()),
                task.kind.label(),
                task.channel,
                task.reward,
                task.id
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<article class="card">
            <h3>{} Доступные задания</h3>
            <ul class="rows" id="task-list">{}</ul>
        </article>"#,
        icon("Target"),
        rows
    )
}

fn energy_panel(props: &DashboardProps) -> String {
    let config = props.energy_config;
    // a session that never tapped has a full meter
    let (energy, percent) = match props.energy {
        Some(meter) => (meter.energy, meter.percent(config)),
        None => (config.max, 100),
    };
    let hint = if energy > 0 {
        "Тапай и зарабатывай коины!"
    } else {
        "Энергия восстанавливается..."
    };

    format!(
        r#"<article class="card energy-card center" data-energy-max="{}" data-energy-rate="{}">
            <h3>{} Энергия: <span id="energy">{}</span>/{}</h3>
            <div class="bar"><div class="bar-fill" id="energy-bar" style="width: {}%"></div></div>
            <p class="muted">+{} энергия каждую секунду</p>
            <form method="post" action="/tap">
                <button class="tap-button" type="submit"{}>💎</button>
            </form>
            <p class="muted" id="energy-hint">{}</p>
        </article>"#,
        config.max,
        config.per_second,
        icon("Zap"),
        energy,
        config.max,
        percent,
        config.per_second,
        if energy == 0 { " disabled" } else { "" },
        hint
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user(balance: u64, channels: &[&str]) -> User {
        User {
            username: "alice".into(),
            balance,
            channels: channels.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn render_for(user: &User, mode: DashboardMode, energy: Option<&EnergyMeter>) -> String {
        render(&DashboardProps {
            user,
            mode,
            energy,
            economy: &EconomyConfig::default(),
            energy_config: &EnergyConfig::default(),
        })
    }

    fn order_button_disabled(html: &str) -> bool {
        let form = html
            .split(r#"action="/orders""#)
            .nth(1)
            .and_then(|rest| rest.split("</form>").next())
            .unwrap();
        form.contains("disabled")
    }

    #[test]
    fn order_button_tracks_balance_and_channels() {
        assert!(order_button_disabled(&render_for(&user(50, &[]), DashboardMode::Tasks, None)));
        assert!(order_button_disabled(&render_for(&user(49, &["@x"]), DashboardMode::Tasks, None)));
        assert!(!order_button_disabled(&render_for(&user(50, &["@x"]), DashboardMode::Tasks, None)));
    }

    #[test]
    fn task_mode_lists_the_catalog() {
        let html = render_for(&user(0, &[]), DashboardMode::Tasks, None);
        for task in TASK_CATALOG.iter() {
            assert!(html.contains(&format!("/tasks/{}/complete", task.id)));
        }
        assert!(!html.contains("/tap"));
        assert!(!html.contains("channel-list"));
    }

    #[test]
    fn channels_are_listed_escaped() {
        let html = render_for(&user(0, &["@a", "<b>"]), DashboardMode::Tasks, None);
        assert!(html.contains(r#"<div class="big-number" id="channel-count">2</div>"#));
        assert!(html.contains("&lt;b&gt;"));
    }

    #[test]
    fn energy_mode_disables_tap_when_empty() {
        let meter = EnergyMeter { energy: 0, last_regen: Utc::now() };
        let html = render_for(&user(0, &[]), DashboardMode::Energy, Some(&meter));
        assert!(html.contains(r#"<span id="energy">0</span>/100"#));
        assert!(html.contains(r#"<button class="tap-button" type="submit" disabled>"#));
        assert!(html.contains("Энергия восстанавливается..."));
        assert!(!html.contains("task-list"));
    }

    #[test]
    fn energy_mode_defaults_to_full_meter() {
        let html = render_for(&user(0, &[]), DashboardMode::Energy, None);
        assert!(html.contains(r#"<span id="energy">100</span>/100"#));
        assert!(html.contains("width: 100%"));
    }
}
