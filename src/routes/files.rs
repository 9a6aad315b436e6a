use std::fs;
use std::path::Path;

use super::*;

pub async fn script(
    State(state): State<AppState>,
    ReqPath(file_name): ReqPath<String>,
) -> Response {
    static_file(&state.static_dir.join("scripts"), &file_name, "text/javascript")
}

pub async fn style(
    State(state): State<AppState>,
    ReqPath(file_name): ReqPath<String>,
) -> Response {
    static_file(&state.static_dir.join("styles"), &file_name, "text/css")
}

fn static_file(dir: &Path, file_name: &str, content_type: &'static str) -> Response {
    if file_name.contains(['/', '\\']) || file_name.contains("..") {
        tracing::warn!(file_name, "rejected static file name");
        return StatusCode::NOT_FOUND.into_response();
    }

    let path = dir.join(file_name);
    match fs::read_to_string(&path) {
        Ok(content) => ([(header::CONTENT_TYPE, content_type)], content).into_response(),
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "static file not found");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
