use serde::{Deserialize, Serialize};

/// Anchored sections of the landing page, in page order.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    HowItWorks,
    Blog,
    Faq,
    Contacts,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::HowItWorks,
        Section::Blog,
        Section::Faq,
        Section::Contacts,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::HowItWorks => "how-it-works",
            Section::Blog => "blog",
            Section::Faq => "faq",
            Section::Contacts => "contacts",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Главная",
            Section::HowItWorks => "Как работает",
            Section::Blog => "Блог",
            Section::Faq => "FAQ",
            Section::Contacts => "Контакты",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::HowItWorks => "Cog",
            Section::Blog => "BookOpen",
            Section::Faq => "HelpCircle",
            Section::Contacts => "MessageCircle",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_resolve_back() {
        for section in Section::ALL {
            assert_eq!(Section::from_anchor(section.anchor()), Some(section));
        }
        assert_eq!(Section::from_anchor("pricing"), None);
    }
}
