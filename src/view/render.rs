use tera::{Context, Tera};

use crate::view::ListPage;
use crate::view::table::{COLUMN_COUNT, NO_DATA};

const INDEX_TEMPLATE: &str = "index.html";

/// HTML renderer for the list page. The template is compiled into the binary.
pub struct PageRenderer {
    tera: Tera,
    page_size_options: Vec<u32>,
}

impl PageRenderer {
    pub fn new(page_size_options: &[u32]) -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_template(INDEX_TEMPLATE, include_str!("../../templates/index.html"))?;

        Ok(Self {
            tera,
            page_size_options: page_size_options.to_vec(),
        })
    }

    /// Full re-render of the page; nothing is reused between calls.
    pub fn render(&self, list: &ListPage) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("list", list);
        context.insert("page_size_options", &self.options_for(list.query.page_size));
        context.insert("columns", &COLUMN_COUNT);
        context.insert("no_data", NO_DATA);

        self.tera.render(INDEX_TEMPLATE, &context)
    }

    /// Configured sizes plus the current one, so the selector always shows
    /// what is on screen.
    fn options_for(&self, current: u32) -> Vec<u32> {
        let mut options = self.page_size_options.clone();
        if !options.contains(&current) {
            options.push(current);
            options.sort_unstable();
        }
        options
    }
}
