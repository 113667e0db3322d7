use serde::{Deserialize, Serialize};

/// Closed set of roles the frontend reasons about. The backend speaks in raw
/// strings with historical aliases; [`Role::from_raw`] folds every known
/// alias onto one variant and everything else onto `Guest`, so a malformed
/// session can only ever lose privileges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Guest,
    Reader,
    Author,
    Reporter,
    OpinionAuthor,
    Reviewer,
    CommentsModerator,
    Analyst,
    Advertiser,
    Editor,
    Admin,
}

impl Role {
    /// Maps one raw backend role string onto the closed set. Total: unknown
    /// input is `Guest`, never an error.
    pub fn from_raw(raw: &str) -> Role {
        match raw {
            "admin" | "system_admin" | "superadmin" | "super_admin" => Role::Admin,
            "editor" | "chief_editor" | "managing_editor" | "editor_in_chief" => Role::Editor,
            "author" | "content_creator" | "writer" => Role::Author,
            "reporter" | "correspondent" | "journalist" => Role::Reporter,
            "opinion_author" | "opinion_writer" | "columnist" => Role::OpinionAuthor,
            "reviewer" | "fact_checker" => Role::Reviewer,
            "comments_moderator" | "comment_moderator" => Role::CommentsModerator,
            "analyst" | "data_analyst" => Role::Analyst,
            "advertiser" | "ad_manager" => Role::Advertiser,
            "reader" | "subscriber" | "member" => Role::Reader,
            _ => Role::Guest,
        }
    }

    /// Folds a session's whole role list onto its most privileged canonical
    /// role. An empty list is `Guest`.
    pub fn from_raw_many<S: AsRef<str>>(raws: &[S]) -> Role {
        raws.iter()
            .map(|raw| Role::from_raw(raw.as_ref()))
            .max_by_key(|role| role.precedence())
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::Reader => "reader",
            Role::Author => "author",
            Role::Reporter => "reporter",
            Role::OpinionAuthor => "opinion_author",
            Role::Reviewer => "reviewer",
            Role::CommentsModerator => "comments_moderator",
            Role::Analyst => "analyst",
            Role::Advertiser => "advertiser",
            Role::Editor => "editor",
            Role::Admin => "admin",
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            Role::Guest => 0,
            Role::Reader => 1,
            Role::Advertiser => 2,
            Role::Analyst => 3,
            Role::CommentsModerator => 4,
            Role::OpinionAuthor => 5,
            Role::Reporter => 6,
            Role::Author => 7,
            Role::Reviewer => 8,
            Role::Editor => 9,
            Role::Admin => 10,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
