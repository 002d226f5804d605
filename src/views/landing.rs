use super::content::{ARTICLES, BRAND, CONTACTS, FAQ, STATS, STEPS};
use super::icon;

pub fn render() -> String {
    [hero(), how_it_works(), blog(), faq(), contacts(), footer()].join("\n")
}

fn section_header(title: &str, accent: &str, subtitle: &str) -> String {
    format!(
        r#"<div class="section-header">
            <h2>{} <span class="gradient-text">{}</span></h2>
            <p class="muted">{}</p>
        </div>"#,
        title, accent, subtitle
    )
}

fn hero() -> String {
    let stats = STATS
        .iter()
        .map(|stat| {
            format!(
                r#"<div class="stat">
                    <div class="stat-icon">{}</div>
                    <div class="stat-value">{}</div>
                    <div class="muted">{}</div>
                </div>"#,
                icon(stat.icon),
                stat.value,
                stat.label
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<section id="home" class="hero">
            <div class="container center">
                <div class="pill">{} 100% Бесплатно навсегда</div>
                <h1>
                    <span class="gradient-text">Продвигай свой Telegram</span><br>
                    <span>без вложений</span>
                </h1>
                <p class="lead muted">
                    Получай настоящих подписчиков в Telegram абсолютно бесплатно.
                    Без ботов, без обмана, без скрытых платежей.
                </p>
                <div class="hero-actions">
                    <a class="btn btn-primary btn-lg" href="/modals/register/open">{} Попробовать сейчас</a>
                    <a class="btn btn-outline btn-lg" href="/sections/how-it-works">{} Как это работает</a>
                </div>
                <div class="grid grid-4 stats">{}</div>
            </div>
        </section>"#,
        icon("Sparkles"),
        icon("Rocket"),
        icon("PlayCircle"),
        stats
    )
}

fn how_it_works() -> String {
    let cards = STEPS
        .iter()
        .map(|item| {
            format!(
                r#"<article class="card step-card">
                    <div class="step-number">{}</div>
                    <div class="card-icon">{}</div>
                    <h3>{}</h3>
                    <p class="muted">{}</p>
                </article>"#,
                item.step,
                icon(item.icon),
                item.title,
                item.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<section id="how-it-works" class="band">
            <div class="container">
                {}
                <div class="grid grid-4">{}</div>
            </div>
        </section>"#,
        section_header("Как это", "работает?", "Простой процесс в 4 шага для роста вашего канала"),
        cards
    )
}

fn blog() -> String {
    let cards = ARTICLES
        .iter()
        .map(|article| {
            format!(
                r#"<article class="card article-card">
                    <div class="card-icon">{}</div>
                    <h3>{}</h3>
                    <p class="muted">{}</p>
                    <div class="meta">
                        <span>{} {}</span>
                        <span>{} {}</span>
                    </div>
                </article>"#,
                icon(article.icon),
                article.title,
                article.description,
                icon("Calendar"),
                article.date,
                icon("Clock"),
                article.read_time
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<section id="blog">
            <div class="container">
                {}
                <div class="grid grid-3">{}</div>
            </div>
        </section>"#,
        section_header("Полезные", "статьи", "Узнайте больше о продвижении в Telegram"),
        cards
    )
}

fn faq() -> String {
    let items = FAQ
        .iter()
        .map(|item| {
            format!(
                r#"<article class="card faq-card">
                    <h3>{} {}</h3>
                    <p class="muted">{}</p>
                </article>"#,
                icon("HelpCircle"),
                item.question,
                item.answer
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<section id="faq" class="band">
            <div class="container narrow">
                {}
                <div class="stack">{}</div>
            </div>
        </section>"#,
        section_header("Часто задаваемые", "вопросы", "Ответы на популярные вопросы о сервисе"),
        items
    )
}

fn contacts() -> String {
    let cards = CONTACTS
        .iter()
        .map(|contact| {
            format!(
                r#"<article class="card contact-card center">
                    <div class="card-icon">{}</div>
                    <h3>{}</h3>
                    <a href="{}">{}</a>
                </article>"#,
                icon(contact.icon),
                contact.title,
                contact.link,
                contact.content
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<section id="contacts">
            <div class="container">
                {}
                <div class="grid grid-3">{}</div>
            </div>
        </section>"#,
        section_header("Связаться с", "нами", "Остались вопросы? Мы всегда на связи!"),
        cards
    )
}

fn footer() -> String {
    format!(
        r#"<footer class="footer">
            <div class="container footer-inner">
                <span class="brand-name">{} {}</span>
                <div class="footer-links muted">
                    <a href="/sections/home">Политика конфиденциальности</a>
                    <a href="/sections/home">Условия использования</a>
                </div>
                <div class="muted">© 2024 {}. Все права защищены.</div>
            </div>
        </footer>"#,
        icon("Zap"),
        BRAND,
        BRAND
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Section;

    #[test]
    fn every_anchor_is_present() {
        let html = render();
        for section in Section::ALL {
            assert!(html.contains(&format!(r#"id="{}""#, section.anchor())), "{:?}", section);
        }
    }

    #[test]
    fn renders_all_literal_content() {
        let html = render();
        assert_eq!(html.matches("faq-card").count(), FAQ.len());
        assert_eq!(html.matches("article-card").count(), ARTICLES.len());
        assert_eq!(html.matches("step-card").count(), STEPS.len());
        assert!(html.contains("support@telegrowth.ru"));
        assert!(html.contains("© 2024 TeleGrowth"));
    }
}
