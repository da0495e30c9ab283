//! Platform glue for fetching the dataset source.

/// Read `source` as text. On the web it is fetched relative to the page;
/// natively it is read from the bundled `assets/` directory or the working
/// directory.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_text(source: &str) -> Result<String, String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let window = web_sys::window().ok_or_else(|| "no browser window".to_string())?;
    let response = JsFuture::from(window.fetch_with_str(source))
        .await
        .map_err(js_error)?;
    let response: web_sys::Response = response.dyn_into().map_err(js_error)?;
    if !response.ok() {
        return Err(format!(
            "HTTP {} {}",
            response.status(),
            response.status_text()
        ));
    }

    let body = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    body.as_string()
        .ok_or_else(|| "response body was not text".to_string())
}

#[cfg(target_arch = "wasm32")]
fn js_error(value: wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_text(source: &str) -> Result<String, String> {
    let path = resolve_native_path(source);
    tokio::fs::read_to_string(&path)
        .await
        .map_err(|err| format!("{}: {err}", path.display()))
}

/// Resolve a relative `source` against `asset_dir` when the file exists
/// there, otherwise leave it relative to the working directory.
#[cfg(not(target_arch = "wasm32"))]
pub fn resolve_in(source: &str, asset_dir: &std::path::Path) -> std::path::PathBuf {
    let path = std::path::Path::new(source);
    if path.is_absolute() {
        return path.to_path_buf();
    }

    let candidate = asset_dir.join(path);
    if candidate.exists() {
        candidate
    } else {
        path.to_path_buf()
    }
}

/// Bundled builds ship their data in `<exe dir>/assets/`.
#[cfg(not(target_arch = "wasm32"))]
fn resolve_native_path(source: &str) -> std::path::PathBuf {
    let asset_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("assets")));
    match asset_dir {
        Some(asset_dir) => resolve_in(source, &asset_dir),
        None => std::path::PathBuf::from(source),
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn absolute_paths_are_used_verbatim() {
        let absolute = std::env::temp_dir().join("teams.csv");
        assert_eq!(resolve_native_path(absolute.to_str().unwrap()), absolute);
    }

    #[test]
    fn relative_source_prefers_the_asset_dir() {
        let asset_dir =
            std::env::temp_dir().join(format!("basepath-assets-{}", std::process::id()));
        std::fs::create_dir_all(&asset_dir).unwrap();
        std::fs::write(asset_dir.join("Teams.csv"), "yearID\n").unwrap();

        assert_eq!(resolve_in("Teams.csv", &asset_dir), asset_dir.join("Teams.csv"));
        assert_eq!(
            resolve_in("Missing.csv", &asset_dir),
            std::path::PathBuf::from("Missing.csv")
        );

        std::fs::remove_dir_all(&asset_dir).unwrap();
    }

    #[test]
    fn missing_file_reports_the_path() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let err = runtime
            .block_on(fetch_text("definitely-not-here/Teams.csv"))
            .unwrap_err();
        assert!(err.contains("Teams.csv"));
    }
}
