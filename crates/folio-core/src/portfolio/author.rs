use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Author {
    pub name: &'static str,
    /// Asset path of the avatar image.
    pub avatar: &'static str,
    /// Main profile link (GitHub for now).
    pub url: &'static str,
}

pub static AUTHOR: Author = Author {
    name: "Achraf Salimi",
    avatar: "assets/images/sample-avatar.jpg",
    url: "https://github.com/AchrafSL",
};
