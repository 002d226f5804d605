use super::escape;

pub struct ModalProps<'a> {
    pub show_register: bool,
    pub show_add_channel: bool,
    pub username: &'a str,
    pub email: &'a str,
    pub register_error: Option<&'a str>,
    pub channel_link: &'a str,
}

fn dialog(id: &str, title: &str, description: &str, close_href: &str, body: &str) -> String {
    format!(
        r#"<div class="overlay" id="{}">
            <div class="dialog" role="dialog" aria-modal="true" aria-labelledby="{}-title">
                <a class="dialog-close" href="{}" aria-label="Закрыть">×</a>
                <header>
                    <h2 id="{}-title">{}</h2>
                    <p class="muted">{}</p>
                </header>
                {}
            </div>
        </div>"#,
        id, id, close_href, id, title, description, body
    )
}

pub fn render(props: &ModalProps) -> String {
    let mut html = String::new();

    if props.show_register {
        let error = props
            .register_error
            .map(|msg| format!(r#"<p class="field-error">{}</p>"#, escape(msg)))
            .unwrap_or_default();
        let body = format!(
            r#"<form class="stack" method="post" action="/register">
                <label for="username">Имя пользователя</label>
                <input id="username" name="username" placeholder="Ваше имя" value="{}">
                <label for="email">Email</label>
                <input id="email" name="email" type="email" placeholder="your@email.com" value="{}">
                {}
                <button class="btn btn-primary btn-block" type="submit">Зарегистрироваться</button>
            </form>"#,
            escape(props.username),
            escape(props.email),
            error
        );
        html.push_str(&dialog(
            "register-modal",
            "Начать бесплатно",
            "Создайте аккаунт за 30 секунд. Никаких карт не требуется.",
            "/modals/register/close",
            &body,
        ));
    }

    if props.show_add_channel {
        let body = format!(
            r#"<form class="stack" method="post" action="/channels">
                <label for="channel-link">Ссылка на канал</label>
                <input id="channel-link" name="channel_link" placeholder="@your_channel или t.me/your_channel" value="{}">
                <button class="btn btn-primary btn-block" type="submit">Добавить канал</button>
            </form>"#,
            escape(props.channel_link)
        );
        html.push_str(&dialog(
            "channel-modal",
            "Добавить канал",
            "Укажите ссылку на ваш Telegram-канал или группу",
            "/modals/channel/close",
            &body,
        ));
    }

    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn closed() -> ModalProps<'static> {
        ModalProps {
            show_register: false,
            show_add_channel: false,
            username: "",
            email: "",
            register_error: None,
            channel_link: "",
        }
    }

    #[test]
    fn nothing_when_closed() {
        assert!(render(&closed()).is_empty());
    }

    #[test]
    fn register_dialog_keeps_typed_values_escaped() {
        let props = ModalProps {
            show_register: true,
            username: r#"<al"ice>"#,
            email: "a@b.com",
            register_error: Some("Заполните все поля"),
            ..closed()
        };
        let html = render(&props);
        assert!(html.contains(r#"action="/register""#));
        assert!(html.contains(r#"value="&lt;al&quot;ice&gt;""#));
        assert!(html.contains(r#"value="a@b.com""#));
        assert!(html.contains("field-error"));
        assert!(!html.contains("channel-modal"));
    }

    #[test]
    fn channel_dialog_posts_link() {
        let props = ModalProps { show_add_channel: true, channel_link: "@x", ..closed() };
        let html = render(&props);
        assert!(html.contains(r#"name="channel_link""#));
        assert!(html.contains(r#"value="@x""#));
    }
}
