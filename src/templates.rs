//! Template Environment
//!
//! Manages the C++ source templates using the minijinja template engine.
//! The core treats rendering as an external collaborator: it hands over a
//! fully derived context and gets text back.
//!
//! Two guarantees matter here:
//!
//! - **Strict undefined behavior**: a template referencing a key the context
//!   does not populate is a hard render error, never silently empty output.
//! - **Stable addressing**: templates are addressed by name (`texture.hh`);
//!   the loader appends `.tmpl` and, in debug builds, prefers the physical
//!   `src/templates/` directory over the embedded bundle so template edits
//!   show up without a rebuild.

use std::borrow::Cow;
use std::sync::OnceLock;

use minijinja::{Environment, Error, ErrorKind, UndefinedBehavior, syntax::SyntaxConfig};
use rust_embed::RustEmbed;
use serde::Serialize;

use crate::errors::Result;

pub static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

#[derive(RustEmbed)]
#[folder = "src/templates"]
struct TemplateAssets;

pub fn get_env() -> &'static Environment<'static> {
    TEMPLATE_ENV.get_or_init(|| {
        let mut env = Environment::new();

        // 生成目标是 C++ 源码，花括号太常见，块语法换成 {$ $}，
        // 行首 $$ 作为行语句前缀
        let syntax = SyntaxConfig::builder()
            .block_delimiters("{$", "$}")
            .variable_delimiters("{{", "}}")
            .line_statement_prefix("$$")
            .build()
            .expect("Failed to configure template syntax");

        env.set_syntax(syntax);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        env.set_loader(template_loader);

        env
    })
}

fn template_loader(name: &str) -> std::result::Result<Option<String>, Error> {
    let filename = if std::path::Path::new(name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("tmpl"))
    {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("{name}.tmpl"))
    };

    #[cfg(debug_assertions)]
    {
        let path = std::path::Path::new("src/templates").join(filename.as_ref());
        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(source) => return Ok(Some(source)),
                Err(e) => {
                    return Err(Error::new(
                        ErrorKind::TemplateNotFound,
                        format!("Failed to read file: {e}"),
                    ));
                }
            }
        }
    }

    if let Some(file) = TemplateAssets::get(&filename)
        && let Ok(source) = std::str::from_utf8(file.data.as_ref())
    {
        return Ok(Some(source.to_string()));
    }

    Ok(None)
}

/// Renders one template against a serializable context.
pub fn render<S: Serialize>(name: &str, ctx: &S) -> Result<String> {
    let template = get_env().get_template(name)?;
    Ok(template.render(ctx)?)
}
