use serde::Serialize;

use super::shell::Shell;
use crate::middleware::{ApiResult, IntoApiResponse};

#[derive(Debug, Serialize)]
pub struct CopyrightPage {
    pub page: &'static str,
    pub shell: Shell,
    /// Endpoint the form loads from (GET) and saves to (PUT)
    pub resource: &'static str,
}

/// Toolbar setup handed to the client-side rich-text widget
#[derive(Debug, Serialize)]
pub struct EditorConfig {
    pub toolbar: &'static [&'static str],
    pub placeholder: &'static str,
    pub height: u32,
}

pub const EDITOR_TOOLBAR: &[&str] = &[
    "undo", "redo", "|", "bold", "italic", "underline", "|",
    "heading", "blockquote", "code", "|", "bullist", "numlist", "|", "link", "image",
];

#[derive(Debug, Serialize)]
pub struct EditorPage {
    pub page: &'static str,
    pub shell: Shell,
    pub editor: EditorConfig,
}

/// GET /copyright - copyright text editor
pub async fn copyright_page() -> ApiResult<CopyrightPage> {
    Ok(CopyrightPage {
        page: "copyright",
        shell: Shell::new("copyright"),
        resource: "/api/copyright",
    }
    .into_api_response())
}

/// GET /editor - rich-text editor wrapper
pub async fn editor_page() -> ApiResult<EditorPage> {
    Ok(EditorPage {
        page: "editor",
        shell: Shell::new("editor"),
        editor: EditorConfig {
            toolbar: EDITOR_TOOLBAR,
            placeholder: "Start writing...",
            height: 500,
        },
    }
    .into_api_response())
}
