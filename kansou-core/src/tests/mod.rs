mod feed;

pub mod prelude {
    use std::{
        cell::{Cell, RefCell},
        collections::VecDeque,
        future::Future,
        rc::Rc,
    };

    use tokio::sync::oneshot;

    pub use kansou_entities::builders::*;

    pub use crate::{
        entities::*,
        gateways::{
            auth::{self, AuthGateway},
            dialog::DialogGateway,
        },
        pages::*,
        repositories::{self, CommentRepo},
        util::{
            listeners::{Listeners, Subscription},
            spawn::{LocalTask, Spawner},
        },
    };

    pub fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Drive `fut` and all tasks spawned by it on a single thread.
    pub fn run_local<F: Future>(fut: F) -> F::Output {
        init_logging();
        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("runtime");
        tokio::task::LocalSet::new().block_on(&rt, fut)
    }

    /// Let all spawned tasks run until they wait for something.
    pub async fn settle() {
        for _ in 0..32 {
            tokio::task::yield_now().await;
        }
    }

    pub struct TokioSpawner;

    impl Spawner for TokioSpawner {
        fn spawn_local(&self, task: LocalTask) {
            tokio::task::spawn_local(task);
        }
    }

    pub type Gate<T> = oneshot::Sender<T>;

    #[derive(Default)]
    pub struct MockCommentRepo {
        pub comments: RefCell<Vec<Comment>>,
        pub inserted: RefCell<Vec<NewComment>>,
        pub deleted: RefCell<Vec<CommentId>>,
        pub load_calls: Cell<usize>,
        pub fail_load: Cell<bool>,
        pub fail_insert: Cell<bool>,
        pub fail_delete: Cell<bool>,
        gates: RefCell<VecDeque<oneshot::Receiver<Vec<Comment>>>>,
        next_id: Cell<i64>,
    }

    impl MockCommentRepo {
        pub fn with_comments(comments: Vec<Comment>) -> Rc<Self> {
            let next_id = comments.iter().map(|c| c.id.to_inner()).max().unwrap_or(0) + 1;
            Rc::new(Self {
                comments: RefCell::new(comments),
                next_id: Cell::new(next_id),
                ..Default::default()
            })
        }

        /// The next load waits until the returned gate is resolved
        /// and then responds with the comments sent through it.
        pub fn gate_next_load(&self) -> Gate<Vec<Comment>> {
            let (tx, rx) = oneshot::channel();
            self.gates.borrow_mut().push_back(rx);
            tx
        }

        pub fn ids(comments: &[Comment]) -> Vec<i64> {
            comments.iter().map(|c| c.id.to_inner()).collect()
        }
    }

    impl CommentRepo for Rc<MockCommentRepo> {
        async fn recent_comments(&self) -> repositories::Result<Vec<Comment>> {
            self.load_calls.set(self.load_calls.get() + 1);
            let gate = self.gates.borrow_mut().pop_front();
            if let Some(gate) = gate {
                return gate
                    .await
                    .map_err(|_| repositories::Error::Transport("gate closed".into()));
            }
            if self.fail_load.get() {
                return Err(repositories::Error::Transport("offline".into()));
            }
            Ok(self.comments.borrow().clone())
        }

        async fn create_comment(&self, comment: NewComment) -> repositories::Result<()> {
            if self.fail_insert.get() {
                return Err(repositories::Error::Backend(
                    "new row violates row-level security policy".into(),
                ));
            }
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.comments.borrow_mut().push(Comment {
                id: id.into(),
                content: comment.content.clone(),
                created_at: Timestamp::from_unix_seconds(1_700_000_000 + id).unwrap(),
                user_id: comment.user_id.clone(),
            });
            self.inserted.borrow_mut().push(comment);
            Ok(())
        }

        async fn delete_comment(&self, id: CommentId) -> repositories::Result<()> {
            if self.fail_delete.get() {
                return Err(repositories::Error::Backend("permission denied".into()));
            }
            self.comments.borrow_mut().retain(|c| c.id != id);
            self.deleted.borrow_mut().push(id);
            Ok(())
        }
    }

    pub const VALID_PASSWORD: &str = "correct horse";

    #[derive(Default)]
    pub struct MockAuth {
        pub listeners: Listeners<AuthEvent>,
        pub current_user: RefCell<Option<User>>,
        pub calls: Cell<usize>,
        user_gate: RefCell<Option<oneshot::Receiver<Option<User>>>>,
    }

    impl MockAuth {
        pub fn new() -> Rc<Self> {
            Rc::default()
        }

        pub fn logged_in_as(user: User) -> Rc<Self> {
            let auth = Self::new();
            *auth.current_user.borrow_mut() = Some(user);
            auth
        }

        pub fn gate_current_user(&self) -> Gate<Option<User>> {
            let (tx, rx) = oneshot::channel();
            *self.user_gate.borrow_mut() = Some(rx);
            tx
        }

        pub fn emit(&self, event: AuthEvent) {
            *self.current_user.borrow_mut() = event.user().cloned();
            self.listeners.emit(&event);
        }
    }

    pub fn session_of(email: &str) -> Session {
        Session::build()
            .user_id(&format!("id-of-{email}"))
            .email(email)
            .finish()
    }

    impl AuthGateway for Rc<MockAuth> {
        async fn sign_in_with_password(&self, credentials: &Credentials) -> auth::Result<Session> {
            self.calls.set(self.calls.get() + 1);
            if credentials.password != VALID_PASSWORD {
                return Err(auth::Error::Rejected("Invalid login credentials".into()));
            }
            let session = session_of(&credentials.email);
            self.emit(AuthEvent::signed_in(session.clone()));
            Ok(session)
        }

        async fn sign_up(&self, credentials: &Credentials) -> auth::Result<SignUp> {
            self.calls.set(self.calls.get() + 1);
            if credentials.email.starts_with("taken") {
                return Err(auth::Error::Rejected("User already registered".into()));
            }
            Ok(SignUp::ConfirmationPending(session_of(&credentials.email).user))
        }

        async fn sign_out(&self) -> auth::Result<()> {
            self.calls.set(self.calls.get() + 1);
            self.emit(AuthEvent::signed_out());
            Ok(())
        }

        async fn current_user(&self) -> auth::Result<Option<User>> {
            let gate = self.user_gate.borrow_mut().take();
            if let Some(gate) = gate {
                return gate
                    .await
                    .map_err(|_| auth::Error::Transport("gate closed".into()));
            }
            Ok(self.current_user.borrow().clone())
        }

        fn on_auth_state_change<F>(&self, listener: F) -> Subscription
        where
            F: Fn(&AuthEvent) + 'static,
        {
            self.listeners.subscribe(listener)
        }
    }

    #[derive(Default)]
    pub struct MockDialogs {
        pub alerts: RefCell<Vec<String>>,
        pub confirmations: RefCell<Vec<String>>,
        pub confirm_answer: Cell<bool>,
    }

    impl MockDialogs {
        pub fn answering(confirm_answer: bool) -> Rc<Self> {
            let dialogs = Rc::new(Self::default());
            dialogs.confirm_answer.set(confirm_answer);
            dialogs
        }
    }

    impl DialogGateway for Rc<MockDialogs> {
        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_owned());
        }
        fn confirm(&self, message: &str) -> bool {
            self.confirmations.borrow_mut().push(message.to_owned());
            self.confirm_answer.get()
        }
    }
}
