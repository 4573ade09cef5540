use crate::github::types::RepoRecord;
use crate::showcase::html::{escape, safe_url, with_scheme};
use crate::showcase::time::format_relative;
use chrono::{DateTime, Utc};

pub const NO_DESCRIPTION: &str = "No description available";
pub const UNKNOWN_LANGUAGE: &str = "Unknown";
pub const DEFAULT_LANGUAGE_COLOR: &str = "#8b949e";

const LANGUAGE_COLORS: &[(&str, &str)] = &[
    ("JavaScript", "#f1e05a"),
    ("TypeScript", "#3178c6"),
    ("Python", "#3572A5"),
    ("Java", "#b07219"),
    ("HTML", "#e34c26"),
    ("CSS", "#563d7c"),
    ("SCSS", "#c6538c"),
    ("Rust", "#dea584"),
    ("Go", "#00ADD8"),
    ("C", "#555555"),
    ("C++", "#f34b7d"),
    ("C#", "#178600"),
    ("Ruby", "#701516"),
    ("PHP", "#4F5D95"),
    ("Swift", "#F05138"),
    ("Kotlin", "#A97BFF"),
    ("Dart", "#00B4AB"),
    ("Shell", "#89e051"),
    ("Vue", "#41b883"),
    ("Jupyter Notebook", "#DA5B0B"),
    ("Haskell", "#5e5086"),
    ("Lua", "#000080"),
];

pub fn language_color(language: Option<&str>) -> &'static str {
    language
        .and_then(|lang| {
            LANGUAGE_COLORS
                .iter()
                .find(|(name, _)| *name == lang)
                .map(|(_, color)| *color)
        })
        .unwrap_or(DEFAULT_LANGUAGE_COLOR)
}

/// Display fields for one project card, shared by the HTML and terminal views.
///
/// Text here is raw; escaping happens in [`Card::to_html`].
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub title: String,
    pub url: String,
    pub is_fork: bool,
    pub description: String,
    pub language: String,
    pub language_color: &'static str,
    pub stars: u64,
    pub forks: u64,
    pub updated: String,
    pub demo_url: Option<String>,
}

impl Card {
    pub fn from_repo(repo: &RepoRecord, now: &DateTime<Utc>) -> Self {
        Self {
            title: repo.name.clone(),
            url: repo.html_url.clone(),
            is_fork: repo.fork,
            description: repo
                .description
                .clone()
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            language: repo
                .language
                .clone()
                .unwrap_or_else(|| UNKNOWN_LANGUAGE.to_string()),
            language_color: language_color(repo.language.as_deref()),
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            updated: format_relative(&repo.updated_at, now),
            demo_url: repo.homepage.as_deref().map(with_scheme),
        }
    }

    pub fn to_html(&self) -> String {
        let badge = if self.is_fork {
            r#"<span class="fork-badge">fork</span>"#
        } else {
            ""
        };
        let links = match self.demo_url {
            Some(ref url) => format!(
                r#"<div class="project-links"><a class="demo-link" href="{}" target="_blank" rel="noopener noreferrer">Demo</a></div>"#,
                safe_url(url)
            ),
            None => String::new(),
        };

        format!(
            r#"<article class="project-card{fork_class}">
  <header class="project-header">
    <h3 class="project-title"><a href="{url}" target="_blank" rel="noopener noreferrer">{title}</a></h3>
    {badge}
  </header>
  <p class="project-description">{description}</p>
  <div class="project-meta">
    <span class="project-language"><span class="language-color" style="background-color: {color}"></span>{language}</span>
    <span class="project-stars" title="Stars">&#9733; {stars}</span>
    <span class="project-forks" title="Forks">&#9282; {forks}</span>
    <span class="project-updated">Updated {updated}</span>
  </div>
  {links}
</article>
"#,
            fork_class = if self.is_fork { " is-fork" } else { "" },
            url = safe_url(&self.url),
            title = escape(&self.title),
            description = escape(&self.description),
            color = self.language_color,
            language = escape(&self.language),
            stars = self.stars,
            forks = self.forks,
            updated = self.updated,
        )
    }
}

pub fn render_card(repo: &RepoRecord, now: &DateTime<Utc>) -> String {
    Card::from_repo(repo, now).to_html()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{fixed_now, make_repo};

    #[test]
    fn fork_gets_badge() {
        let mut repo = make_repo("forked", true, 3);
        repo.language = Some("Rust".to_string());
        let html = render_card(&repo, &fixed_now());
        assert!(html.contains(r#"class="fork-badge""#));
        assert!(html.contains("Updated 3 days ago"));

        let original = make_repo("mine", false, 3);
        assert!(!render_card(&original, &fixed_now()).contains("fork-badge"));
    }

    #[test]
    fn demo_link_only_with_homepage() {
        let mut repo = make_repo("site", false, 0);
        repo.homepage = None;
        assert!(!render_card(&repo, &fixed_now()).contains("demo-link"));

        repo.homepage = Some("https://ann.dev/site".to_string());
        let html = render_card(&repo, &fixed_now());
        assert!(html.contains(r#"class="demo-link" href="https://ann.dev/site""#));
    }

    #[test]
    fn bare_homepage_links_over_https() {
        let mut repo = make_repo("site", false, 0);
        repo.homepage = Some("ann.dev".to_string());
        let html = render_card(&repo, &fixed_now());
        assert!(html.contains(r#"class="demo-link" href="https://ann.dev""#));
    }

    #[test]
    fn missing_language_uses_default_swatch() {
        let mut repo = make_repo("bare", false, 0);
        repo.language = None;
        let html = render_card(&repo, &fixed_now());
        assert!(html.contains(&format!("background-color: {DEFAULT_LANGUAGE_COLOR}")));
        assert!(html.contains(UNKNOWN_LANGUAGE));
    }

    #[test]
    fn known_and_unknown_language_colors() {
        assert_eq!(language_color(Some("Rust")), "#dea584");
        assert_eq!(language_color(Some("COBOL")), DEFAULT_LANGUAGE_COLOR);
        assert_eq!(language_color(None), DEFAULT_LANGUAGE_COLOR);
    }

    #[test]
    fn missing_description_uses_placeholder() {
        let mut repo = make_repo("quiet", false, 0);
        repo.description = None;
        let card = Card::from_repo(&repo, &fixed_now());
        assert_eq!(card.description, NO_DESCRIPTION);
    }

    #[test]
    fn api_fields_are_escaped() {
        let mut repo = make_repo("<b>name</b>", false, 0);
        repo.description = Some("<script>alert(1)</script>".to_string());
        repo.language = Some("\"><img>".to_string());
        repo.homepage = Some("javascript:alert(1)".to_string());
        let html = render_card(&repo, &fixed_now());

        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>name"));
        assert!(!html.contains("<img>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains(r##"class="demo-link" href="#""##));
    }
}
