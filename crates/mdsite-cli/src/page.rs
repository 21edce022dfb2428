//! Page rendering and generation.

use std::fs;
use std::path::Path;

use crate::{Result, SiteError};

const TITLE_PLACEHOLDER: &str = "{{ Title }}";
const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Text of the first `# ` heading line
pub fn extract_title(markdown: &str) -> Option<&str> {
    markdown
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with("# ") && line.len() > 2)
        .map(|line| line[1..].trim())
}

/// Fill the template placeholders and rewrite root-relative links for `base_path`
pub fn render_template(template: &str, title: &str, content: &str, base_path: &str) -> String {
    let html = template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content);

    if base_path == "/" {
        return html;
    }
    html.replace("href=\"/", &format!("href=\"{}", base_path))
        .replace("src=\"/", &format!("src=\"{}", base_path))
}

/// Render a markdown document into a full page.
///
/// `source` is only used for error context.
pub fn render_page(
    source: &Path,
    markdown: &str,
    template: &str,
    base_path: &str,
) -> Result<String> {
    let content = mdsite::markdown_to_html(markdown).map_err(|err| SiteError::Convert {
        path: source.to_path_buf(),
        source: err,
    })?;
    let title = extract_title(markdown).ok_or_else(|| SiteError::MissingTitle {
        path: source.to_path_buf(),
    })?;
    Ok(render_template(template, title, &content, base_path))
}

/// Generate one page from a markdown file, creating parent directories of `dest`
pub fn generate_page(
    from: &Path,
    template_path: &Path,
    dest: &Path,
    base_path: &str,
) -> Result<()> {
    let template = read(template_path)?;
    write_page(from, &template, dest, base_path)
}

pub(crate) fn write_page(from: &Path, template: &str, dest: &Path, base_path: &str) -> Result<()> {
    log::info!(
        "Generating page from {} to {}",
        from.display(),
        dest.display()
    );

    let markdown = read(from)?;
    let html = render_page(from, &markdown, template, base_path)?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|source| SiteError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(dest, html).map_err(|source| SiteError::Write {
        path: dest.to_path_buf(),
        source,
    })
}

pub(crate) fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| SiteError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const TEMPLATE: &str = "<html><head><title>{{ Title }}</title>\
        <link href=\"/index.css\" rel=\"stylesheet\"></head>\
        <body>{{ Content }}</body></html>";

    #[test]
    fn test_basic_h1() {
        assert_eq!(extract_title("# Hello World"), Some("Hello World"));
    }

    #[test]
    fn test_h1_with_whitespace() {
        assert_eq!(extract_title("   #   My Title   "), Some("My Title"));
    }

    #[test]
    fn test_title_is_first_h1() {
        assert_eq!(
            extract_title("intro\n## Sub\n# First\n# Second"),
            Some("First")
        );
    }

    #[test]
    fn test_no_h1() {
        assert_eq!(extract_title("## Not an h1\nSome text"), None);
        assert_eq!(extract_title("# "), None);
    }

    #[test]
    fn test_render_template() {
        let html = render_template(TEMPLATE, "Home", "<div>x</div>", "/");
        assert_eq!(
            html,
            "<html><head><title>Home</title>\
             <link href=\"/index.css\" rel=\"stylesheet\"></head>\
             <body><div>x</div></body></html>"
        );
    }

    #[test]
    fn test_render_template_rewrites_base_path() {
        let content = "<div><a href=\"/blog\">b</a><img src=\"/a.png\" alt=\"\" /></div>";
        let html = render_template(TEMPLATE, "Home", content, "/site/");
        assert!(html.contains("href=\"/site/index.css\""));
        assert!(html.contains("href=\"/site/blog\""));
        assert!(html.contains("src=\"/site/a.png\""));
        assert!(!html.contains("href=\"/index.css\""));
    }

    #[test]
    fn test_render_page_requires_title() {
        let err = render_page(Path::new("a.md"), "no heading", TEMPLATE, "/").unwrap_err();
        assert!(matches!(err, SiteError::MissingTitle { .. }));
        assert_eq!(err.to_string(), "No h1 header found in a.md");
    }

    #[test]
    fn test_render_page_reports_conversion_errors() {
        let err = render_page(Path::new("bad.md"), "# T\n\n**oops", TEMPLATE, "/").unwrap_err();
        assert!(matches!(err, SiteError::Convert { .. }));
        assert!(err.to_string().starts_with("Failed to convert bad.md"));
    }

    #[test]
    fn test_generate_page_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("index.md");
        let template = dir.path().join("template.html");
        let dest = dir.path().join("public/nested/index.html");
        fs::write(&source, "# Welcome\n\nHello **there**").unwrap();
        fs::write(&template, "<title>{{ Title }}</title>{{ Content }}").unwrap();

        generate_page(&source, &template, &dest, "/").unwrap();

        assert_eq!(
            fs::read_to_string(&dest).unwrap(),
            "<title>Welcome</title><div><h1>Welcome</h1><p>Hello <b>there</b></p></div>"
        );
    }

    #[test]
    fn test_generate_page_missing_source() {
        let dir = TempDir::new().unwrap();
        let template = dir.path().join("template.html");
        fs::write(&template, "{{ Content }}").unwrap();

        let err = generate_page(
            &dir.path().join("missing.md"),
            &template,
            &dir.path().join("out.html"),
            "/",
        )
        .unwrap_err();
        assert!(matches!(err, SiteError::Read { .. }));
    }
}
