use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct ChannelForm {
    #[serde(default)]
    pub channel_link: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct PageQuery {
    pub error: Option<String>,
}
