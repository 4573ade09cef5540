//! Whole-page documents for the static site.
//!
//! Every element a renderer writes into carries a stable `id`: `avatar`,
//! `name`, `bio`, `repo-count`, `followers`, `following`, `blog`, `about`
//! and `projects-grid`.

use crate::showcase::controls::FilterControls;
use crate::showcase::html::{escape, safe_url};
use crate::showcase::profile::ProfileView;

pub const LOAD_ERROR: &str = "Failed to load repositories. Please try again later.";

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #0d1117; color: #c9d1d9; }
main { max-width: 1100px; margin: 0 auto; padding: 2rem; }
.profile { display: flex; gap: 1.5rem; align-items: center; }
.profile img { width: 120px; height: 120px; border-radius: 50%; }
.stats { display: flex; gap: 1rem; color: #8b949e; }
.filter-controls { display: flex; gap: .5rem; margin: 2rem 0 1rem; }
.filter-btn { padding: .4rem .9rem; border: 1px solid #30363d; border-radius: 6px; color: inherit; text-decoration: none; }
.filter-btn.active { background: #238636; border-color: #238636; }
.projects-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 1rem; }
.project-card { border: 1px solid #30363d; border-radius: 8px; padding: 1rem; }
.project-header { display: flex; justify-content: space-between; align-items: center; }
.fork-badge { font-size: .75rem; border: 1px solid #8b949e; border-radius: 1em; padding: 0 .5em; }
.project-meta { display: flex; flex-wrap: wrap; gap: .8rem; font-size: .85rem; color: #8b949e; }
.language-color { display: inline-block; width: .75em; height: .75em; border-radius: 50%; margin-right: .3em; }
.error-message, .no-projects { text-align: center; color: #8b949e; }
"#;

pub fn render_document(view: &ProfileView, controls: &FilterControls, grid: &str) -> String {
    let bio = match view.bio {
        Some(ref bio) => format!(r#"<p id="bio" class="bio">{}</p>"#, escape(bio)),
        None => r#"<p id="bio" class="bio" hidden></p>"#.to_string(),
    };
    let blog = match view.blog {
        Some(ref blog) => format!(
            r#"<a id="blog" href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
            safe_url(&blog.href),
            escape(&blog.text)
        ),
        None => r#"<a id="blog" hidden></a>"#.to_string(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{name} &middot; Projects</title>
<style>{STYLE}</style>
</head>
<body>
<main>
<section class="profile">
  <img id="avatar" src="{avatar_src}" alt="{avatar_alt}">
  <div>
    <h1 id="name">{name}</h1>
    {bio}
    <div class="stats">
      <span><strong id="repo-count">{public_repos}</strong> repositories</span>
      <span><strong id="followers">{followers}</strong> followers</span>
      <span><strong id="following">{following}</strong> following</span>
    </div>
    {blog}
  </div>
</section>
<section class="about">
  <h2>About</h2>
  <p id="about">{about}</p>
</section>
<section class="projects">
  <h2>Projects</h2>
  {controls}
  <div id="projects-grid" class="projects-grid">
{grid}
  </div>
</section>
</main>
</body>
</html>
"#,
        name = escape(&view.name),
        avatar_src = safe_url(&view.avatar_src),
        avatar_alt = escape(&view.avatar_alt),
        public_repos = view.public_repos,
        followers = view.followers,
        following = view.following,
        about = escape(&view.about),
        controls = controls.to_html(),
    )
}

/// Page shown when the startup fetches fail; the button reloads everything.
pub fn render_error_document(message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Projects</title>
<style>{STYLE}</style>
</head>
<body>
<main>
  <div id="projects-grid" class="projects-grid">
    <div class="error-message">
      <p>{message}</p>
      <button type="button" onclick="location.reload()">Retry</button>
    </div>
  </div>
</main>
</body>
</html>
"#,
        message = escape(message),
    )
}
