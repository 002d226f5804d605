// Literal marketing content of the landing page.

pub struct Stat {
    pub icon: &'static str,
    pub value: &'static str,
    pub label: &'static str,
}

pub struct Step {
    pub step: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Article {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
}

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub struct Contact {
    pub icon: &'static str,
    pub title: &'static str,
    pub content: &'static str,
    pub link: &'static str,
}

pub const BRAND: &str = "TeleGrowth";

pub const STATS: [Stat; 4] = [
    Stat { icon: "Users", value: "50K+", label: "Активных пользователей" },
    Stat { icon: "TrendingUp", value: "1M+", label: "Новых подписчиков" },
    Stat { icon: "Shield", value: "100%", label: "Безопасность" },
    Stat { icon: "Zap", value: "24/7", label: "Поддержка" },
];

pub const STEPS: [Step; 4] = [
    Step {
        step: "01",
        icon: "UserPlus",
        title: "Регистрация",
        description: "Создайте бесплатный аккаунт за 30 секунд. Никаких кредитных карт не требуется.",
    },
    Step {
        step: "02",
        icon: "Link",
        title: "Добавьте канал",
        description: "Укажите ссылку на ваш Telegram-канал или группу для продвижения.",
    },
    Step {
        step: "03",
        icon: "Target",
        title: "Получайте задания",
        description: "Выполняйте простые задания: подписки, лайки, просмотры других каналов.",
    },
    Step {
        step: "04",
        icon: "Trophy",
        title: "Растите аудиторию",
        description: "Получайте настоящих подписчиков на свой канал в обмен на выполненные задания.",
    },
];

pub const ARTICLES: [Article; 3] = [
    Article {
        icon: "BookOpen",
        title: "10 способов увеличить охват в Telegram",
        description: "Проверенные методы для роста вашей аудитории без рекламного бюджета.",
        date: "15 декабря 2024",
        read_time: "5 мин",
    },
    Article {
        icon: "Lightbulb",
        title: "Как создать вирусный контент",
        description: "Секреты создания постов, которые будут активно репостить подписчики.",
        date: "12 декабря 2024",
        read_time: "7 мин",
    },
    Article {
        icon: "TrendingUp",
        title: "Монетизация Telegram-канала",
        description: "Реальные способы заработка на аудитории от 1000 подписчиков.",
        date: "10 декабря 2024",
        read_time: "6 мин",
    },
];

pub const FAQ: [Faq; 5] = [
    Faq {
        question: "Действительно ли сервис полностью бесплатный?",
        answer: "Да, TeleGrowth полностью бесплатен. Нет никаких скрытых платежей, подписок или премиум-версий. Мы верим в честное продвижение и взаимопомощь.",
    },
    Faq {
        question: "Это не боты? Подписчики настоящие?",
        answer: "Все подписчики — реальные люди, которые также используют наш сервис для продвижения своих каналов. Мы строго против ботов и фейковых аккаунтов.",
    },
    Faq {
        question: "Как быстро я получу подписчиков?",
        answer: "Скорость роста зависит от вашей активности. Чем больше заданий вы выполняете, тем больше подписчиков получаете. В среднем — 10-50 новых подписчиков в день.",
    },
    Faq {
        question: "Могу ли я продвигать несколько каналов?",
        answer: "Да, вы можете добавить неограниченное количество каналов и распределять полученные баллы между ними по своему усмотрению.",
    },
    Faq {
        question: "Это безопасно для моего аккаунта?",
        answer: "Абсолютно безопасно. Мы используем официальное API Telegram и не требуем доступа к вашему аккаунту. Все действия выполняются в рамках правил Telegram.",
    },
];

pub const CONTACTS: [Contact; 3] = [
    Contact {
        icon: "Mail",
        title: "Email",
        content: "support@telegrowth.ru",
        link: "mailto:support@telegrowth.ru",
    },
    Contact {
        icon: "MessageCircle",
        title: "Telegram",
        content: "@TeleGrowth_Support",
        link: "https://t.me/TeleGrowth_Support",
    },
    Contact {
        icon: "Users",
        title: "Сообщество",
        content: "Наш Telegram-канал",
        link: "https://t.me/TeleGrowth_News",
    },
];
