use core::panic;
use std::sync::OnceLock;

use tera::{Context, Tera};
use tracing::info;

/// Loads every template under `templates/` once per process and hands out a shared handle.
#[derive(Debug, Clone, Copy)]
pub struct TemplateManager {
    tera: &'static Tera,
}

impl TemplateManager {
    pub fn init() -> Self {
        info!(
            "{:<20} - Initializing the Template manager",
            "templ manager"
        );
        static TERA: OnceLock<Tera> = OnceLock::new();
        let tera = TERA.get_or_init(|| {
            Tera::new("templates/**/*").unwrap_or_else(|e| panic!("Parsing error(s): {e}"))
        });
        Self { tera }
    }

    /// Renders a template file from the 'html/' directory with the given `Context`.
    pub fn render_html_to_string(
        &self,
        ctx: &Context,
        template_file: &str,
    ) -> Result<String, tera::Error> {
        let template = format!("html/{template_file}");
        self.tera().render(&template, ctx)
    }

    pub fn tera(&self) -> &Tera {
        self.tera
    }
}
