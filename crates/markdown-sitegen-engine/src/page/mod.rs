//! # Page Generation
//!
//! Turns markdown files into complete HTML pages by rendering them and
//! filling a shared template.
//!
//! Template placeholders:
//! - `{{ Title }}`: the document's first `# ` heading
//! - `{{ Content }}`: the rendered document
//!
//! Root-relative `href="/` and `src="/` references are then rewritten to the
//! configured base path, so a site can be served from a sub-path.

use std::path::{Path, PathBuf};

use relative_path::RelativePathBuf;
use serde::{Deserialize, Serialize};

use crate::io::{self, IoError};
use crate::parsing::blocks::kinds::Heading;
use crate::parsing::{ConvertError, render_document};

pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const HTML_EXTENSION: &str = "html";

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("No top-level `# ` heading found to use as the page title")]
    NoTitleFound,
    #[error("Failed to convert markdown: {0}")]
    Convert(#[from] ConvertError),
    #[error(transparent)]
    Io(#[from] IoError),
    #[error("Path is not inside the content directory: {0}")]
    InvalidPath(PathBuf),
    #[error("Failed to generate page from {path}: {source}")]
    Page {
        path: PathBuf,
        #[source]
        source: Box<PageError>,
    },
}

/// What to do when one page of a multi-page run fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop at the first failing page and return its error.
    #[default]
    Abort,
    /// Log the failure, record it in the report, and carry on.
    Skip,
}

/// A page written by [`generate_pages_recursive`], relative to the content
/// and output directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPage {
    pub source: RelativePathBuf,
    pub output: RelativePathBuf,
}

#[derive(Debug, Default)]
pub struct GenerationReport {
    pub generated: Vec<GeneratedPage>,
    /// Pages left out under [`FailurePolicy::Skip`].
    pub skipped: Vec<(RelativePathBuf, PageError)>,
}

/// Returns the text of the first line that is a level-one heading.
///
/// Lines are trimmed before matching, so indented headings count. Any later
/// level-one headings are ignored.
pub fn extract_title(markdown: &str) -> Result<String, PageError> {
    markdown
        .lines()
        .filter_map(|line| Heading::parse(line.trim()))
        .find(|(level, _)| *level == 1)
        .map(|(_, title)| title.trim().to_string())
        .ok_or(PageError::NoTitleFound)
}

/// Substitutes the placeholders in `template` and rewrites root-relative
/// links to `base_path`.
///
/// A base path without a trailing `/` gets one.
pub fn fill_template(template: &str, title: &str, content: &str, base_path: &str) -> String {
    let base_path = if base_path.ends_with('/') {
        base_path.to_string()
    } else {
        format!("{base_path}/")
    };

    template
        .replace(CONTENT_PLACEHOLDER, content)
        .replace(TITLE_PLACEHOLDER, title)
        .replace("href=\"/", &format!("href=\"{base_path}"))
        .replace("src=\"/", &format!("src=\"{base_path}"))
}

/// Renders one markdown document into a complete page.
pub fn render_page(markdown: &str, template: &str, base_path: &str) -> Result<String, PageError> {
    let content = render_document(markdown)?;
    let title = extract_title(markdown)?;
    Ok(fill_template(template, &title, &content, base_path))
}

/// Generates `dest` from the markdown file `from` using the template file at `template_path`.
pub fn generate_page(
    from: &Path,
    template_path: &Path,
    dest: &Path,
    base_path: &str,
) -> Result<(), PageError> {
    let template = io::read_file(template_path)?;
    write_page(from, &template, dest, base_path)
}

fn write_page(from: &Path, template: &str, dest: &Path, base_path: &str) -> Result<(), PageError> {
    log::info!("Generating page from {} to {}", from.display(), dest.display());
    let markdown = io::read_file(from)?;
    let html = render_page(&markdown, template, base_path)?;
    io::write_file(dest, &html)?;
    Ok(())
}

/// Generates a page for every markdown file under `content_dir`.
///
/// The directory structure is mirrored into `dest_dir` and each `.md` file
/// becomes a `.html` file. Files are processed in sorted path order.
///
/// # Errors
/// Under [`FailurePolicy::Abort`] the first failing page is returned as
/// [`PageError::Page`]. Under [`FailurePolicy::Skip`] only errors reading the
/// template or walking `content_dir` are returned.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    base_path: &str,
    policy: FailurePolicy,
) -> Result<GenerationReport, PageError> {
    let template = io::read_file(template_path)?;
    let mut report = GenerationReport::default();

    for path in io::scan_markdown_files(content_dir)? {
        let source = relative_to(content_dir, &path)?;
        let output = source.with_extension(HTML_EXTENSION);
        let dest = output.to_path(dest_dir);

        match write_page(&path, &template, &dest, base_path) {
            Ok(()) => report.generated.push(GeneratedPage { source, output }),
            Err(e) => {
                let e = PageError::Page {
                    path: path.clone(),
                    source: Box::new(e),
                };
                match policy {
                    FailurePolicy::Abort => return Err(e),
                    FailurePolicy::Skip => {
                        log::warn!("{e}");
                        report.skipped.push((source, e));
                    }
                }
            }
        }
    }

    Ok(report)
}

fn relative_to(root: &Path, path: &Path) -> Result<RelativePathBuf, PageError> {
    path.strip_prefix(root)
        .ok()
        .and_then(|rel| RelativePathBuf::from_path(rel).ok())
        .ok_or_else(|| PageError::InvalidPath(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_dir, create_test_file};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const TEMPLATE: &str = r#"<html><head><title>{{ Title }}</title><link href="/index.css"></head><body>{{ Content }}</body></html>"#;

    #[test]
    fn test_extract_title_simple() {
        assert_eq!(extract_title("# Hello").unwrap(), "Hello");
    }

    #[test]
    fn test_extract_title_indented() {
        let markdown = "
        # My todo-list

        This is a little markdown paragraph

        ## bucket list
        - buy some clothes
        ";
        assert_eq!(extract_title(markdown).unwrap(), "My todo-list");
    }

    #[test]
    fn test_extract_title_not_on_first_line() {
        let markdown = "Intro paragraph\n\n## Sub\n\n# My todo-list\n\ntext";
        assert_eq!(extract_title(markdown).unwrap(), "My todo-list");
    }

    #[test]
    fn test_extract_title_uses_first_h1() {
        let markdown = "# My little markdown file\ntext\n\n# My todo-list";
        assert_eq!(extract_title(markdown).unwrap(), "My little markdown file");
    }

    #[rstest]
    #[case("## My little markdown file\n\n### bucket list")]
    #[case("#NoSpace")]
    #[case("")]
    fn test_extract_title_missing(#[case] markdown: &str) {
        assert!(matches!(
            extract_title(markdown),
            Err(PageError::NoTitleFound)
        ));
    }

    #[test]
    fn test_fill_template_default_base_path() {
        let html = fill_template(TEMPLATE, "Hi", "<div><p>x</p></div>", "/");
        assert_eq!(
            html,
            r#"<html><head><title>Hi</title><link href="/index.css"></head><body><div><p>x</p></div></body></html>"#
        );
    }

    #[rstest]
    #[case("/repo/")]
    #[case("/repo")]
    fn test_fill_template_rewrites_root_relative_links(#[case] base_path: &str) {
        let content = r#"<div><a href="/blog">b</a><img src="/a.png" alt=""><a href="https://x.org/">x</a></div>"#;
        let html = fill_template("{{ Content }}", "t", content, base_path);
        assert_eq!(
            html,
            r#"<div><a href="/repo/blog">b</a><img src="/repo/a.png" alt=""><a href="https://x.org/">x</a></div>"#
        );
    }

    #[test]
    fn test_render_page() {
        let html = render_page("# Tolkien Fan Club\n\nWelcome!", "{{ Title }}|{{ Content }}", "/")
            .unwrap();
        assert_eq!(
            html,
            "Tolkien Fan Club|<div><h1>Tolkien Fan Club</h1><p>Welcome!</p></div>"
        );
    }

    #[test]
    fn test_render_page_without_title_fails() {
        assert!(matches!(
            render_page("just text", TEMPLATE, "/"),
            Err(PageError::NoTitleFound)
        ));
    }

    #[test]
    fn test_generate_page_writes_file() {
        let dir = create_test_dir();
        let from = create_test_file(&dir, "content/index.md", "# Home\n\nHello **there**");
        let template = create_test_file(&dir, "template.html", "<title>{{ Title }}</title>{{ Content }}");
        let dest = dir.path().join("public/index.html");

        generate_page(&from, &template, &dest, "/").unwrap();

        assert_eq!(
            std::fs::read_to_string(dest).unwrap(),
            "<title>Home</title><div><h1>Home</h1><p>Hello <b>there</b></p></div>"
        );
    }

    #[test]
    fn test_generate_pages_recursive_mirrors_tree() {
        let dir = create_test_dir();
        create_test_file(&dir, "content/index.md", "# Home");
        create_test_file(&dir, "content/blog/tom/index.md", "# Tom\n\nA mistake.");
        create_test_file(&dir, "content/blog/notes.txt", "not markdown");
        let template = create_test_file(&dir, "template.html", "{{ Content }}");
        let dest = dir.path().join("public");

        let report = generate_pages_recursive(
            &dir.path().join("content"),
            &template,
            &dest,
            "/",
            FailurePolicy::Abort,
        )
        .unwrap();

        assert_eq!(
            report.generated,
            vec![
                GeneratedPage {
                    source: RelativePathBuf::from("blog/tom/index.md"),
                    output: RelativePathBuf::from("blog/tom/index.html"),
                },
                GeneratedPage {
                    source: RelativePathBuf::from("index.md"),
                    output: RelativePathBuf::from("index.html"),
                },
            ]
        );
        assert!(report.skipped.is_empty());
        assert_eq!(
            std::fs::read_to_string(dest.join("blog/tom/index.html")).unwrap(),
            "<div><h1>Tom</h1><p>A mistake.</p></div>"
        );
        assert!(!dest.join("blog/notes.txt").exists());
    }

    #[test]
    fn test_generate_pages_recursive_abort_policy() {
        let dir = create_test_dir();
        create_test_file(&dir, "content/a.md", "# A");
        create_test_file(&dir, "content/b.md", "no title here");
        create_test_file(&dir, "content/c.md", "# C");
        let template = create_test_file(&dir, "template.html", "{{ Content }}");
        let dest = dir.path().join("public");

        let err = generate_pages_recursive(
            &dir.path().join("content"),
            &template,
            &dest,
            "/",
            FailurePolicy::Abort,
        )
        .unwrap_err();

        match err {
            PageError::Page { path, source } => {
                assert!(path.ends_with("b.md"));
                assert!(matches!(*source, PageError::NoTitleFound));
            }
            other => panic!("expected Page error, got {other:?}"),
        }
        assert!(dest.join("a.html").exists());
        assert!(!dest.join("c.html").exists());
    }

    #[test]
    fn test_generate_pages_recursive_skip_policy() {
        let dir = create_test_dir();
        create_test_file(&dir, "content/a.md", "# A");
        create_test_file(&dir, "content/b.md", "# B\n\nbroken **bold");
        create_test_file(&dir, "content/c.md", "# C");
        let template = create_test_file(&dir, "template.html", "{{ Content }}");
        let dest = dir.path().join("public");

        let report = generate_pages_recursive(
            &dir.path().join("content"),
            &template,
            &dest,
            "/",
            FailurePolicy::Skip,
        )
        .unwrap();

        assert_eq!(report.generated.len(), 2);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].0, RelativePathBuf::from("b.md"));
        assert!(dest.join("c.html").exists());
        assert!(!dest.join("b.html").exists());
    }

    #[test]
    fn test_generate_pages_recursive_missing_template() {
        let dir = create_test_dir();
        create_test_file(&dir, "content/a.md", "# A");

        let result = generate_pages_recursive(
            &dir.path().join("content"),
            &dir.path().join("missing.html"),
            &dir.path().join("public"),
            "/",
            FailurePolicy::Skip,
        );

        assert!(matches!(result, Err(PageError::Io(IoError::NotFound(_)))));
    }
}
