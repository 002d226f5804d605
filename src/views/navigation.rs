use crate::models::Section;
use super::{icon, BRAND};

pub struct NavProps {
    pub dashboard: bool,
    pub registered: bool,
    pub balance: Option<u64>,
    pub active: Section,
    pub show_menu: bool,
}

fn brand() -> String {
    format!(
        r#"<a class="brand" href="/sections/home">
            <span class="brand-mark">{}</span>
            <span class="brand-name">{}</span>
        </a>"#,
        icon("Zap"),
        BRAND
    )
}

// Landing mode: section links plus the "start" call to action.
// Dashboard mode: balance badge plus the way back.
pub fn render(props: &NavProps) -> String {
    let (center, actions, sheet) = if props.dashboard {
        dashboard_parts(props)
    } else {
        landing_parts(props)
    };

    let sheet = if props.show_menu {
        format!(
            r#"<aside class="sheet" id="mobile-menu">
                <header class="sheet-header">
                    <h2>Меню</h2>
                    <a class="sheet-close" href="/menu/toggle" aria-label="Закрыть">×</a>
                </header>
                <div class="sheet-body">{}</div>
            </aside>"#,
            sheet
        )
    } else {
        String::new()
    };

    format!(
        r#"<nav class="topbar">
            <div class="container topbar-inner">
                {}
                {}
                <div class="topbar-actions">
                    {}
                    <a class="btn btn-ghost menu-toggle" href="/menu/toggle" aria-label="Меню">{}</a>
                </div>
            </div>
        </nav>
        {}"#,
        brand(),
        center,
        actions,
        icon("Menu"),
        sheet
    )
}

fn landing_parts(props: &NavProps) -> (String, String, String) {
    let links = Section::ALL
        .iter()
        .map(|section| {
            let class = if *section == props.active { "nav-link active" } else { "nav-link" };
            format!(
                r#"<a class="{}" href="/sections/{}">{}</a>"#,
                class,
                section.anchor(),
                section.label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let (cta_href, cta_label) = if props.registered {
        ("/view/dashboard", "Мой кабинет")
    } else {
        ("/modals/register/open", "Начать бесплатно")
    };

    let sheet_links = Section::ALL
        .iter()
        .map(|section| {
            format!(
                r#"<a class="btn btn-ghost btn-block" href="/sections/{}">{} {}</a>"#,
                section.anchor(),
                icon(section.icon()),
                section.label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    (
        format!(r#"<div class="nav-links">{}</div>"#, links),
        format!(r#"<a class="btn btn-primary desktop-only" href="{}">{}</a>"#, cta_href, cta_label),
        format!(
            r#"{}
            <a class="btn btn-primary btn-block" href="{}">{}</a>"#,
            sheet_links, cta_href, cta_label
        ),
    )
}

fn dashboard_parts(props: &NavProps) -> (String, String, String) {
    let badge = format!(
        r#"<div class="balance-badge">{} <span id="nav-balance">{}</span></div>
        <a class="btn btn-outline desktop-only" href="/view/landing">На главную</a>"#,
        icon("Coins"),
        props.balance.unwrap_or(0)
    );
    let sheet = format!(
        r#"<a class="btn btn-outline btn-block" href="/view/landing">{} На главную</a>"#,
        icon("Home")
    );
    (String::new(), badge, sheet)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(dashboard: bool) -> NavProps {
        NavProps {
            dashboard,
            registered: dashboard,
            balance: dashboard.then_some(30),
            active: Section::Blog,
            show_menu: false,
        }
    }

    #[test]
    fn landing_header_links_every_section() {
        let html = render(&props(false));
        for section in Section::ALL {
            assert!(html.contains(&format!("/sections/{}", section.anchor())));
        }
        assert!(html.contains(r#"class="nav-link active" href="/sections/blog""#));
        assert!(html.contains("/modals/register/open"));
        assert!(!html.contains("nav-balance"));
    }

    #[test]
    fn dashboard_header_shows_balance_and_back() {
        let html = render(&props(true));
        assert!(html.contains(r#"<span id="nav-balance">30</span>"#));
        assert!(html.contains("/view/landing"));
        assert!(!html.contains("/sections/faq"));
    }

    #[test]
    fn registered_visitor_gets_dashboard_link() {
        let mut p = props(false);
        p.registered = true;
        let html = render(&p);
        assert!(html.contains("/view/dashboard"));
        assert!(!html.contains("/modals/register/open"));
    }

    #[test]
    fn sheet_only_when_open() {
        let mut p = props(false);
        assert!(!render(&p).contains("mobile-menu"));
        p.show_menu = true;
        assert!(render(&p).contains(r#"id="mobile-menu""#));
    }
}
