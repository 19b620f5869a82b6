//! Page actions: call the backend, pick the next route.

use log::{error, info, warn};
use serde::{Deserialize, Serialize};

use crate::backend::PortalBackend;
use crate::model::{Credentials, NewPost, NewsPost};

/// Where the browser lands after an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum Route {
    /// Landing page, optionally carrying the backend's error message.
    Landing { error: Option<String> },
    Kernel,
    News,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing { .. } => "/",
            Route::Kernel => "/kernel",
            Route::News => "/news",
        }
    }
}

pub fn login<B: PortalBackend>(backend: &mut B, credentials: &Credentials) -> Route {
    match backend.sign_in(credentials) {
        Ok(_) => Route::Kernel,
        Err(e) => {
            warn!("login failed: {e}");
            Route::Landing {
                error: Some(e.to_string()),
            }
        }
    }
}

pub fn signup<B: PortalBackend>(backend: &mut B, credentials: &Credentials) -> Route {
    match backend.sign_up(credentials) {
        Ok(_) => Route::Kernel,
        Err(e) => {
            warn!("signup failed: {e}");
            Route::Landing {
                error: Some(e.to_string()),
            }
        }
    }
}

/// Publish an announcement as the signed-in user.
///
/// Returns `None` when nobody is signed in; the page stays where it is.
/// Insert failures are logged and still route to the feed.
pub fn publish_news<B: PortalBackend>(backend: &mut B, post: NewPost) -> Option<Route> {
    let Some(author) = backend.current_user().cloned() else {
        warn!("publish ignored: no active session");
        return None;
    };
    match backend.insert_news(&author, post) {
        Ok(row) => info!("published news #{} \"{}\"", row.id, row.title),
        Err(e) => error!("failed to publish news: {e}"),
    }
    Some(Route::News)
}

pub fn signout<B: PortalBackend>(backend: &mut B) -> Route {
    backend.sign_out();
    Route::Landing { error: None }
}

/// Rows for the news page. A failed query renders an empty feed.
pub fn news_feed<B: PortalBackend>(backend: &B) -> Vec<NewsPost> {
    backend.list_news().unwrap_or_else(|e| {
        error!("failed to load news: {e}");
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryBackend;
    use rstest::{fixture, rstest};

    #[fixture]
    fn backend() -> InMemoryBackend {
        InMemoryBackend::new()
    }

    fn creds() -> Credentials {
        Credentials::new("heidi@alp.ch", "matterhorn")
    }

    fn post(title: &str) -> NewPost {
        NewPost {
            title: title.into(),
            content: "Mesh density restored.".into(),
        }
    }

    #[rstest]
    fn test_signup_routes_to_kernel(mut backend: InMemoryBackend) {
        assert_eq!(signup(&mut backend, &creds()), Route::Kernel);
        assert!(backend.current_user().is_some());
    }

    #[rstest]
    fn test_login_failure_carries_message(mut backend: InMemoryBackend) {
        let route = login(&mut backend, &creds());
        assert_eq!(
            route,
            Route::Landing {
                error: Some("Invalid login credentials".into())
            }
        );
        assert_eq!(route.path(), "/");
    }

    #[rstest]
    fn test_login_after_signout(mut backend: InMemoryBackend) {
        signup(&mut backend, &creds());
        assert_eq!(signout(&mut backend), Route::Landing { error: None });
        assert!(backend.current_user().is_none());
        assert_eq!(login(&mut backend, &creds()), Route::Kernel);
    }

    #[rstest]
    fn test_publish_without_session_is_ignored(mut backend: InMemoryBackend) {
        assert_eq!(publish_news(&mut backend, post("Swans")), None);
        assert!(news_feed(&backend).is_empty());
    }

    #[rstest]
    fn test_publish_routes_to_news(mut backend: InMemoryBackend) {
        signup(&mut backend, &creds());
        let route = publish_news(&mut backend, post("Swans sighted"));
        assert_eq!(route, Some(Route::News));
        assert_eq!(route.map(|r| r.path()), Some("/news"));

        let feed = news_feed(&backend);
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].title, "Swans sighted");
    }

    #[rstest]
    fn test_failed_publish_still_routes_to_news(mut backend: InMemoryBackend) {
        signup(&mut backend, &creds());
        assert_eq!(publish_news(&mut backend, post("")), Some(Route::News));
        assert!(news_feed(&backend).is_empty());
    }

    #[test]
    fn test_route_serializes_tagged() {
        let json = serde_json::to_value(Route::Landing {
            error: Some("nope".into()),
        })
        .unwrap();
        assert_eq!(json["route"], "landing");
        assert_eq!(json["error"], "nope");
    }
}
