use crate::github::types::RepoRecord;
use crate::showcase::card::render_card;
use crate::showcase::filter::RepoFilter;
use chrono::{DateTime, Utc};
use itertools::Itertools;

pub const NO_REPOSITORIES: &str = r#"<p class="no-projects">No repositories found.</p>"#;

/// Markup for the projects grid under `filter`.
pub fn render_grid(repos: &[RepoRecord], filter: RepoFilter, now: &DateTime<Utc>) -> String {
    let visible = filter.apply(repos);
    if visible.is_empty() {
        return NO_REPOSITORIES.to_string();
    }
    visible.iter().map(|repo| render_card(repo, now)).join("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{fixed_now, make_repo};

    #[test]
    fn forks_filter_without_forks_shows_placeholder() {
        let repos = vec![make_repo("a", false, 1), make_repo("b", false, 2)];
        assert_eq!(render_grid(&repos, RepoFilter::Forks, &fixed_now()), NO_REPOSITORIES);
    }

    #[test]
    fn empty_list_shows_placeholder() {
        assert_eq!(render_grid(&[], RepoFilter::All, &fixed_now()), NO_REPOSITORIES);
    }

    #[test]
    fn renders_one_card_per_visible_repo_in_order() {
        let repos = vec![
            make_repo("alpha", false, 1),
            make_repo("beta", false, 2),
            make_repo("gamma", true, 3),
        ];
        let html = render_grid(&repos, RepoFilter::All, &fixed_now());
        assert_eq!(html.matches("<article").count(), 3);
        let a = html.find("alpha").unwrap();
        let b = html.find("beta").unwrap();
        let g = html.find("gamma").unwrap();
        assert!(a < b && b < g);

        let originals = render_grid(&repos, RepoFilter::Original, &fixed_now());
        assert_eq!(originals.matches("<article").count(), 2);
        assert!(!originals.contains("gamma"));
    }
}
