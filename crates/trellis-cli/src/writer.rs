//! Artifact persistence.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use trellis_codegen::ComponentBundle;

/// Write one bundle under `out_dir/<dir_name>/`.
///
/// The component directory is created if needed; existing files are
/// overwritten, so rerunning the generator converges on the same tree.
/// Returns the directory the four files were written into.
pub fn write_bundle(out_dir: &Path, bundle: &ComponentBundle) -> io::Result<PathBuf> {
    let component_dir = out_dir.join(&bundle.dir_name);
    fs::create_dir_all(&component_dir)?;

    for (file_name, content) in bundle.files() {
        fs::write(component_dir.join(file_name), content)?;
    }

    Ok(component_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_codegen::emit_component;
    use trellis_core::DesignNode;

    fn frame() -> DesignNode {
        serde_json::from_value(serde_json::json!({
            "id": "1:0", "name": "Login Screen", "type": "FRAME",
            "absoluteBoundingBox": { "x": 0.0, "y": 0.0, "width": 375.0, "height": 812.0 }
        }))
        .unwrap()
    }

    #[test]
    fn test_writes_four_files_into_component_dir() {
        let out = tempfile::tempdir().unwrap();
        let bundle = emit_component(&frame());

        let dir = write_bundle(out.path(), &bundle).unwrap();
        assert_eq!(dir, out.path().join("login-screen"));

        for name in [
            "login-screen.component.ts",
            "login-screen.component.html",
            "login-screen.component.scss",
            "login-screen.module.ts",
        ] {
            let content = fs::read_to_string(dir.join(name)).unwrap();
            assert!(!content.is_empty(), "{name} should not be empty");
        }
    }

    #[test]
    fn test_rerun_overwrites_in_place() {
        let out = tempfile::tempdir().unwrap();
        let bundle = emit_component(&frame());

        write_bundle(out.path(), &bundle).unwrap();
        let dir = write_bundle(out.path(), &bundle).unwrap();

        let ts = fs::read_to_string(dir.join("login-screen.component.ts")).unwrap();
        assert_eq!(ts, bundle.behavior_source);
    }
}
