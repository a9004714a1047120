use askama::Template;
use shared::Task;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage<'a> {
    pub tasks: &'a [Task],
}
