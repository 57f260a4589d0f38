use crate::error::log_error_chain;
use include_dir::{include_dir, Dir};
use minijinja::{context, Environment, Error, Value};
use once_cell::sync::Lazy;

static TEMPLATE_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

pub static ENV: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();

    for entry in TEMPLATE_DIR
        .find("**/*.html")
        .expect("Unable to walk Template Directory")
    {
        let Some(file) = entry.as_file() else {
            continue;
        };
        let Some(name) = file.path().to_str() else {
            tracing::warn!("Skipping template with non UTF-8 path: {:?}", file.path());
            continue;
        };

        let contents = String::from_utf8_lossy(file.contents()).to_string();
        if let Err(err) = env.add_template_owned(name.to_string(), contents) {
            tracing::error!("Could not compile template {name}");
            log_error_chain(&err);
        }
    }

    env
});

pub fn render(name: &str, ctx: Value) -> Result<String, Error> {
    ENV.get_template(name)?.render(ctx)
}

pub fn handle_template_error(err: Error) -> String {
    tracing::error!("Could not render template");
    log_error_chain(&err);
    String::from("<h1>Error rendering Template</h1></br> See the server log for more information")
}

/// Body of the generic failure page.
pub fn render_error_page() -> String {
    render("body/error.html", context! {}).unwrap_or_else(handle_template_error)
}
