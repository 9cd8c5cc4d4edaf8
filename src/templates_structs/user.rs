use askama::Template;

use super::{Header, PageContext};
use crate::models::user::UserRow;

#[derive(Template)]
#[template(path = "all_users.html")]
pub struct UserListTemplate {
    pub ctx: PageContext,
    pub header: Header,
    pub users: Vec<UserRow>,
}
