use super::*;
use kansou_entities as e;

impl From<e::comment::Comment> for Comment {
    fn from(from: e::comment::Comment) -> Self {
        let e::comment::Comment {
            id,
            content,
            created_at,
            user_id,
        } = from;
        Self {
            id: id.into(),
            content,
            created_at: created_at.into(),
            user_id: user_id.map(Into::into),
        }
    }
}

impl From<Comment> for e::comment::Comment {
    fn from(from: Comment) -> Self {
        let Comment {
            id,
            content,
            created_at,
            user_id,
        } = from;
        Self {
            id: id.into(),
            content,
            created_at: created_at.into(),
            user_id: user_id.map(Into::into),
        }
    }
}

impl From<e::comment::NewComment> for NewComment {
    fn from(from: e::comment::NewComment) -> Self {
        let e::comment::NewComment { content, user_id } = from;
        Self {
            content,
            user_id: user_id.map(Into::into),
        }
    }
}

impl From<e::auth::Credentials> for Credentials {
    fn from(from: e::auth::Credentials) -> Self {
        let e::auth::Credentials { email, password } = from;
        Self { email, password }
    }
}

impl From<Credentials> for e::auth::Credentials {
    fn from(from: Credentials) -> Self {
        let Credentials { email, password } = from;
        Self { email, password }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User { id, email } = from;
        Self {
            id: id.into(),
            email,
        }
    }
}

impl From<User> for e::user::User {
    fn from(from: User) -> Self {
        let User { id, email } = from;
        Self {
            id: id.into(),
            email,
        }
    }
}

impl From<e::auth::Session> for Session {
    fn from(from: e::auth::Session) -> Self {
        let e::auth::Session {
            access_token,
            refresh_token,
            expires_at,
            user,
        } = from;
        Self {
            access_token,
            token_type: default_token_type(),
            expires_in: None,
            expires_at: expires_at.map(e::time::Timestamp::unix_seconds),
            refresh_token,
            user: user.into(),
        }
    }
}

impl From<Session> for e::auth::Session {
    fn from(from: Session) -> Self {
        let Session {
            access_token,
            refresh_token,
            expires_at,
            user,
            token_type: _,
            expires_in: _,
        } = from;
        Self {
            access_token,
            refresh_token,
            expires_at: expires_at.and_then(|s| e::time::Timestamp::from_unix_seconds(s).ok()),
            user: user.into(),
        }
    }
}

impl From<SignUpResponse> for e::auth::SignUp {
    fn from(from: SignUpResponse) -> Self {
        match from {
            SignUpResponse::Session(session) => Self::SignedIn(session.into()),
            SignUpResponse::User(user) => Self::ConfirmationPending(user.into()),
        }
    }
}
