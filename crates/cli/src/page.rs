//! Host page generator
//!
//! Writes the `index.html` the WASM bundle is served from. The page owns the
//! stylesheet: the severity colors and surface colors the dashboard refers to
//! by variable name are defined here, and the mount container carries the
//! configured host element id.

use crate::error::{Error, Result};
use issue_infographic_core::DashboardConfig;
use minijinja::{context, Environment};
use std::path::{Path, PathBuf};

const HOST_PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }}</title>
    <style>
        :root {
            --bg-primary: #0d1117;
            --bg-secondary: #161b22;
            --bg-tertiary: #21262d;
            --text-primary: #c9d1d9;
            --text-secondary: #8b949e;
            --text-muted: #6e7681;
            --border-color: #30363d;
            --sev-1: #f85149;
            --sev-2: #d29922;
            --sev-3: #58a6ff;
            --sev-4: #a371f7;
        }

        * { margin: 0; padding: 0; box-sizing: border-box; }
        html, body { min-height: 100%; background: var(--bg-primary); }
    </style>
</head>
<body>
    <div id="{{ host_element_id }}"></div>
    <script type="module">
        import init from './{{ bundle }}.js';
        init();
    </script>
</body>
</html>
"#;

/// Name of the wasm-bindgen output for the dashboard crate
const BUNDLE_NAME: &str = "issue_infographic_dashboard";

/// Render the host page for `config`
pub fn generate_host_page(config: &DashboardConfig) -> Result<String> {
    let mut env = Environment::new();
    env.add_template("index.html", HOST_PAGE_TEMPLATE)?;

    let template = env.get_template("index.html")?;
    let html = template.render(context! {
        title => &config.title,
        host_element_id => &config.host_element_id,
        bundle => BUNDLE_NAME,
    })?;

    Ok(html)
}

/// Write `index.html` into `output_dir`, creating it if needed
pub fn write_host_page(config: &DashboardConfig, output_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir).map_err(|e| Error::FileWrite {
        path: output_dir.display().to_string(),
        source: e,
    })?;

    let html = generate_host_page(config)?;
    let index_path = output_dir.join("index.html");
    std::fs::write(&index_path, html).map_err(|e| Error::FileWrite {
        path: index_path.display().to_string(),
        source: e,
    })?;

    Ok(index_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use issue_infographic_core::SeverityTier;

    #[test]
    fn test_host_page_defines_tier_variables() {
        let html = generate_host_page(&DashboardConfig::default()).unwrap();
        for tier in SeverityTier::ALL {
            assert!(html.contains(&format!("--{}:", tier.as_str())));
        }
        assert!(html.contains(r#"<div id="issue-dashboard"></div>"#));
        assert!(html.contains("./issue_infographic_dashboard.js"));
    }

    #[test]
    fn test_host_page_escapes_title() {
        let config = DashboardConfig {
            title: "Issues <beta>".to_string(),
            ..Default::default()
        };
        let html = generate_host_page(&config).unwrap();
        assert!(html.contains("Issues &lt;beta&gt;"));
    }

    #[test]
    fn test_write_host_page() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("dist");
        let config = DashboardConfig {
            host_element_id: "mount-here".to_string(),
            ..Default::default()
        };

        let path = write_host_page(&config, &out).unwrap();
        assert_eq!(path, out.join("index.html"));

        let written = std::fs::read_to_string(path).unwrap();
        assert!(written.contains(r#"id="mount-here""#));
    }
}
