pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{comment_builder::*, session_builder::*};

pub mod comment_builder {

    use super::*;
    use crate::{comment::*, time::*};

    #[derive(Debug)]
    pub struct CommentBuild {
        comment: Comment,
    }

    impl CommentBuild {
        pub fn id(mut self, id: i64) -> Self {
            self.comment.id = id.into();
            self
        }
        pub fn content(mut self, content: &str) -> Self {
            self.comment.content = content.into();
            self
        }
        /// Seconds since the Unix epoch.
        pub fn created_at(mut self, seconds: i64) -> Self {
            self.comment.created_at = Timestamp::from_unix_seconds(seconds).unwrap();
            self
        }
        pub fn user_id(mut self, user_id: &str) -> Self {
            self.comment.user_id = Some(user_id.into());
            self
        }
        pub fn finish(self) -> Comment {
            self.comment
        }
    }

    impl Builder for Comment {
        type Build = CommentBuild;
        fn build() -> CommentBuild {
            CommentBuild {
                comment: Comment {
                    id: CommentId::new(0),
                    content: String::new(),
                    created_at: Timestamp::from_unix_seconds(0).unwrap(),
                    user_id: None,
                },
            }
        }
    }
}

pub mod session_builder {

    use super::*;
    use crate::{auth::*, user::*};

    #[derive(Debug)]
    pub struct SessionBuild {
        session: Session,
    }

    impl SessionBuild {
        pub fn user_id(mut self, id: &str) -> Self {
            self.session.user.id = id.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.session.user.email = Some(email.into());
            self
        }
        pub fn access_token(mut self, token: &str) -> Self {
            self.session.access_token = token.into();
            self
        }
        pub fn finish(self) -> Session {
            self.session
        }
    }

    impl Builder for Session {
        type Build = SessionBuild;
        fn build() -> SessionBuild {
            SessionBuild {
                session: Session {
                    access_token: "access-token".into(),
                    refresh_token: "refresh-token".into(),
                    expires_at: None,
                    user: User {
                        id: "00000000-0000-0000-0000-000000000000".into(),
                        email: None,
                    },
                },
            }
        }
    }
}
