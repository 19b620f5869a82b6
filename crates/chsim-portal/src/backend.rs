use crate::error::PortalError;
use crate::model::{Credentials, NewPost, NewsPost, User};

/// Operations the pages perform against the managed backend.
pub trait PortalBackend {
    fn sign_in(&mut self, credentials: &Credentials) -> Result<User, PortalError>;

    fn sign_up(&mut self, credentials: &Credentials) -> Result<User, PortalError>;

    /// Ends the current session. Signing out twice is fine.
    fn sign_out(&mut self);

    fn current_user(&self) -> Option<&User>;

    /// Insert a row into `news` on behalf of `author`.
    fn insert_news(&mut self, author: &User, post: NewPost) -> Result<NewsPost, PortalError>;

    /// All rows of `news`, newest first.
    fn list_news(&self) -> Result<Vec<NewsPost>, PortalError>;
}
