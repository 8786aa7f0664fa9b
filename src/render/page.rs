//! The host document around the release widget.

use html_escape::{encode_double_quoted_attribute, encode_safe, encode_text};

use crate::config::SiteConfig;

const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

const STYLE: &str = r#"
:root {
  --bg: #0d1117;
  --card-bg: #161b22;
  --border: #30363d;
  --text-primary: #e6edf3;
  --text-secondary: #8b949e;
  --accent: #2f81f7;
  --success: #3fb950;
  --danger: #f85149;
}
* { box-sizing: border-box; }
body { margin: 0; background: var(--bg); color: var(--text-secondary); font-family: system-ui, -apple-system, "Segoe UI", sans-serif; line-height: 1.6; }
header { display: flex; justify-content: space-between; align-items: center; max-width: 860px; margin: 0 auto; padding: 1.5rem 1rem; }
header a { color: var(--text-primary); text-decoration: none; font-weight: 600; }
main { max-width: 860px; margin: 0 auto; padding: 0 1rem 3rem; }
.release-card { position: relative; background: var(--card-bg); border: 1px solid var(--border); border-radius: 12px; padding: 1.5rem; margin-bottom: 1.5rem; }
.latest-badge { display: inline-block; background: var(--success); color: #fff; font-size: 0.75rem; font-weight: 600; border-radius: 999px; padding: 0.15rem 0.75rem; margin-bottom: 0.75rem; }
.release-header { display: flex; justify-content: space-between; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 1rem; }
.release-title-group { display: flex; align-items: center; gap: 0.75rem; }
.release-name { color: var(--text-primary); font-size: 1.4rem; font-weight: 700; }
.release-tag { border: 1px solid var(--border); border-radius: 6px; padding: 0.1rem 0.5rem; font-family: ui-monospace, monospace; font-size: 0.85rem; }
.release-date { font-size: 0.9rem; }
.release-body h2, .release-body h3 { color: var(--text-primary); }
.release-body code { background: var(--bg); border-radius: 4px; padding: 0.1rem 0.3rem; }
.assets-section { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-top: 1rem; border-top: 1px solid var(--border); padding-top: 1rem; }
.asset-button { display: inline-flex; align-items: center; gap: 0.4rem; color: var(--text-primary); background: var(--bg); border: 1px solid var(--border); border-radius: 8px; padding: 0.4rem 0.8rem; text-decoration: none; font-size: 0.9rem; }
.asset-button:hover { border-color: var(--accent); }
.archive-controls { display: flex; justify-content: space-between; align-items: center; flex-wrap: wrap; gap: 0.75rem; margin-bottom: 1rem; }
.archive-label { color: var(--text-primary); font-weight: 600; }
.version-select { background: var(--card-bg); color: var(--text-primary); border: 1px solid var(--border); border-radius: 8px; padding: 0.5rem 0.75rem; }
.loading-container, .error-container { text-align: center; padding: 3rem 1rem; }
.error-container i { color: var(--danger); font-size: 2rem; }
"#;

const SELECTOR_SCRIPT: &str = r#"
document.addEventListener('DOMContentLoaded', () => {
  const select = document.getElementById('version-select');
  const display = document.getElementById('older-release-display');
  if (!select || !display) return;
  select.addEventListener('change', (e) => {
    const template = document.getElementById(`release-${e.target.value}`);
    if (!template) return;
    display.replaceChildren(template.content.cloneNode(true));
    display.scrollIntoView({ behavior: 'smooth', block: 'start' });
  });
});
"#;

/// Wraps rendered content in the host document: title, repository link,
/// account branding link and the `#content` container. The dropdown change
/// handler is only included when the content has an archive.
pub fn render_page(site: &SiteConfig, content: &str, has_archive: bool) -> String {
    let repo = &site.repo;
    let title = format!("{} / releases - {}", repo.repo, repo.owner);
    let script = if has_archive {
        format!("<script>{}</script>\n", SELECTOR_SCRIPT)
    } else {
        String::new()
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<link rel="stylesheet" href="{fa}">
<style>{style}</style>
</head>
<body>
<header>
<a id="repo-link" href="{repo_url}"><i class="fa-brands fa-github"></i> {repo_name}</a>
<a id="brand-link" href="{profile_url}">{owner}</a>
</header>
<main id="content">
{content}</main>
{script}</body>
</html>
"#,
        lang = site.language.messages().html_lang,
        title = encode_text(&title),
        fa = FONT_AWESOME_CSS,
        style = STYLE,
        repo_url = encode_double_quoted_attribute(&repo.html_url()),
        repo_name = encode_safe(&repo.repo),
        profile_url = encode_double_quoted_attribute(&repo.profile_url()),
        owner = encode_safe(&repo.owner),
        content = content,
        script = script,
    )
}
