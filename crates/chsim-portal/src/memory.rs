//! In-memory stand-in for the managed backend.

use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, info};

use crate::backend::PortalBackend;
use crate::error::PortalError;
use crate::model::{Credentials, NewPost, NewsPost, User};

/// Shortest password the credential store accepts.
pub const MIN_PASSWORD_LEN: usize = 6;

type Clock = Box<dyn Fn() -> u64 + Send + Sync>;

struct Account {
    user: User,
    password: String,
}

pub struct InMemoryBackend {
    accounts: HashMap<String, Account>,
    session: Option<User>,
    news: Vec<NewsPost>,
    next_user: u64,
    next_post: u64,
    clock: Clock,
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn system_now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

fn normalize_email(email: &str) -> Result<String, PortalError> {
    let email = email.trim().to_lowercase();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(email)
        }
        _ => Err(PortalError::InvalidEmail),
    }
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::with_clock(Box::new(system_now_ms))
    }

    /// Use `clock` for `created_at` stamps.
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            accounts: HashMap::new(),
            session: None,
            news: Vec::new(),
            next_user: 1,
            next_post: 1,
            clock,
        }
    }
}

impl PortalBackend for InMemoryBackend {
    fn sign_in(&mut self, credentials: &Credentials) -> Result<User, PortalError> {
        let email = normalize_email(&credentials.email).map_err(|_| PortalError::InvalidCredentials)?;
        let account = self
            .accounts
            .get(&email)
            .filter(|a| a.password == credentials.password)
            .ok_or(PortalError::InvalidCredentials)?;
        info!("{} signed in", account.user.email);
        self.session = Some(account.user.clone());
        Ok(account.user.clone())
    }

    fn sign_up(&mut self, credentials: &Credentials) -> Result<User, PortalError> {
        let email = normalize_email(&credentials.email)?;
        if credentials.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(PortalError::WeakPassword {
                min: MIN_PASSWORD_LEN,
            });
        }
        if self.accounts.contains_key(&email) {
            return Err(PortalError::AlreadyRegistered);
        }

        let user = User {
            id: format!("user-{:04}", self.next_user),
            email: email.clone(),
        };
        self.next_user += 1;
        self.accounts.insert(
            email,
            Account {
                user: user.clone(),
                password: credentials.password.clone(),
            },
        );
        info!("{} signed up as {}", user.email, user.id);
        self.session = Some(user.clone());
        Ok(user)
    }

    fn sign_out(&mut self) {
        if let Some(user) = self.session.take() {
            info!("{} signed out", user.email);
        }
    }

    fn current_user(&self) -> Option<&User> {
        self.session.as_ref()
    }

    fn insert_news(&mut self, author: &User, post: NewPost) -> Result<NewsPost, PortalError> {
        if self.session.as_ref() != Some(author) {
            return Err(PortalError::NotAuthenticated);
        }
        let title = post.title.trim();
        let content = post.content.trim();
        if title.is_empty() {
            return Err(PortalError::InvalidPost("title is empty".into()));
        }
        if content.is_empty() {
            return Err(PortalError::InvalidPost("content is empty".into()));
        }

        let row = NewsPost {
            id: self.next_post,
            title: title.to_string(),
            content: content.to_string(),
            author_id: author.id.clone(),
            image_url: None,
            created_at: (self.clock)(),
        };
        self.next_post += 1;
        debug!("news #{} inserted by {}", row.id, row.author_id);
        self.news.push(row.clone());
        Ok(row)
    }

    fn list_news(&self) -> Result<Vec<NewsPost>, PortalError> {
        let mut rows = self.news.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    use rstest::rstest;

    fn operator() -> Credentials {
        Credentials::new("Operator@Kernel.ch", "fondue42")
    }

    #[test]
    fn test_sign_up_then_sign_in() {
        let mut backend = InMemoryBackend::new();
        let user = backend.sign_up(&operator()).unwrap();
        assert_eq!(user.email, "operator@kernel.ch");
        assert_eq!(backend.current_user(), Some(&user));

        backend.sign_out();
        assert!(backend.current_user().is_none());
        backend.sign_out();

        let again = backend
            .sign_in(&Credentials::new("operator@kernel.ch", "fondue42"))
            .unwrap();
        assert_eq!(again, user);
    }

    #[rstest]
    #[case("nobody", "fondue42", PortalError::InvalidEmail)]
    #[case("@kernel.ch", "fondue42", PortalError::InvalidEmail)]
    #[case("a@b@c", "fondue42", PortalError::InvalidEmail)]
    #[case("cow@alp.ch", "moo", PortalError::WeakPassword { min: 6 })]
    fn test_sign_up_validation(
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: PortalError,
    ) {
        let mut backend = InMemoryBackend::new();
        assert_eq!(
            backend.sign_up(&Credentials::new(email, password)),
            Err(expected)
        );
        assert!(backend.current_user().is_none());
    }

    #[test]
    fn test_duplicate_sign_up_rejected() {
        let mut backend = InMemoryBackend::new();
        backend.sign_up(&operator()).unwrap();
        assert_eq!(
            backend.sign_up(&operator()),
            Err(PortalError::AlreadyRegistered)
        );
    }

    #[test]
    fn test_wrong_password_rejected() {
        let mut backend = InMemoryBackend::new();
        backend.sign_up(&operator()).unwrap();
        backend.sign_out();
        let result = backend.sign_in(&Credentials::new("operator@kernel.ch", "raclette"));
        assert_eq!(result, Err(PortalError::InvalidCredentials));
        assert!(backend.current_user().is_none());
    }

    #[test]
    fn test_news_requires_session_author() {
        let mut backend = InMemoryBackend::new();
        let user = backend.sign_up(&operator()).unwrap();
        backend.sign_out();
        let post = NewPost {
            title: "Breach".into(),
            content: "Swans inbound".into(),
        };
        assert_eq!(
            backend.insert_news(&user, post),
            Err(PortalError::NotAuthenticated)
        );
    }

    #[test]
    fn test_news_listed_newest_first() {
        let ticks = Arc::new(AtomicU64::new(1_000));
        let clock_ticks = Arc::clone(&ticks);
        let mut backend =
            InMemoryBackend::with_clock(Box::new(move || clock_ticks.fetch_add(10, Ordering::SeqCst)));
        let user = backend.sign_up(&operator()).unwrap();

        for title in ["first", "second", "third"] {
            backend
                .insert_news(
                    &user,
                    NewPost {
                        title: title.into(),
                        content: "  body  ".into(),
                    },
                )
                .unwrap();
        }

        let rows = backend.list_news().unwrap();
        let titles: Vec<&str> = rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["third", "second", "first"]);
        assert_eq!(rows[0].created_at, 1_020);
        assert_eq!(rows[0].content, "body");
        assert_eq!(rows[0].author_id, user.id);
    }

    #[test]
    fn test_empty_title_rejected() {
        let mut backend = InMemoryBackend::new();
        let user = backend.sign_up(&operator()).unwrap();
        let result = backend.insert_news(
            &user,
            NewPost {
                title: "   ".into(),
                content: "x".into(),
            },
        );
        assert!(matches!(result, Err(PortalError::InvalidPost(_))));
        assert!(backend.list_news().unwrap().is_empty());
    }
}
