use actix_web::{HttpRequest, HttpResponse, web};

use crate::errors::{AppError, render};
use crate::models::user::UserRow;
use crate::state::AppState;
use crate::templates_structs::{Header, PageContext, UserListTemplate};

pub async fn list(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&state, req.path());
    let users: Vec<UserRow> = state.constants.users.iter().map(UserRow::from).collect();

    let tmpl = UserListTemplate {
        ctx,
        header: Header::new("Manage Users", "Filter, sort, and access detailed user profiles"),
        users,
    };
    render(tmpl)
}
