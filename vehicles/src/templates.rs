use askama::Template;
use shared::Vehicle;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage<'a> {
    pub vehicles: &'a [Vehicle],
    pub search: &'a str,
}

#[derive(Template)]
#[template(path = "editar.html")]
pub struct EditPage<'a> {
    pub vehicle: &'a Vehicle,
}
