use askama::Template;

use crate::models::GithubProfile;

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate;

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate;

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate;

#[derive(Template)]
#[template(path = "user.html")]
pub struct UserTemplate {
    pub userid: String,
}

#[derive(Template)]
#[template(path = "github.html")]
pub struct GithubTemplate {
    pub profile: GithubProfile,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub message: String,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub path: String,
}
