pub mod card;
pub mod controls;
pub mod filter;
pub mod grid;
pub mod html;
pub mod page;
pub mod profile;
pub mod site;
pub mod sort;
pub mod time;

use crate::error::Result;
use crate::github::types::{ProfileRecord, RepoRecord};
use async_trait::async_trait;
use card::Card;
use chrono::{DateTime, Utc};
use controls::FilterControls;
use filter::RepoFilter;
use profile::ProfileView;

/// Where a showcase gets its profile and repository list from.
#[async_trait]
pub trait ShowcaseSource: Sync {
    async fn fetch_profile(&self) -> Result<ProfileRecord>;
    async fn fetch_repos(&self) -> Result<Vec<RepoRecord>>;
}

/// A loaded showcase: the fetched profile, the sorted repository list and
/// the filter the grid is currently rendered under.
///
/// The repository list is fixed at construction; filter changes only
/// re-render the grid from it.
#[derive(Debug, Clone)]
pub struct Showcase {
    profile: ProfileRecord,
    repos: Vec<RepoRecord>,
    controls: FilterControls,
    grid: String,
    rendered_at: DateTime<Utc>,
}

impl Showcase {
    /// Fetches profile and repositories concurrently; both must succeed.
    pub async fn load<S>(source: &S) -> Result<Self>
    where
        S: ShowcaseSource + ?Sized,
    {
        let (profile, repos) = tokio::try_join!(source.fetch_profile(), source.fetch_repos())?;
        Ok(Self::new(profile, repos, Utc::now()))
    }

    pub fn new(profile: ProfileRecord, repos: Vec<RepoRecord>, now: DateTime<Utc>) -> Self {
        let repos = sort::sort_repos(repos);
        let controls = FilterControls::default();
        let grid = grid::render_grid(&repos, controls.active(), &now);
        Self {
            profile,
            repos,
            controls,
            grid,
            rendered_at: now,
        }
    }

    pub fn profile_view(&self) -> ProfileView {
        ProfileView::from_profile(&self.profile)
    }

    pub fn repos(&self) -> &[RepoRecord] {
        &self.repos
    }

    pub fn filter(&self) -> RepoFilter {
        self.controls.active()
    }

    /// Current contents of the projects grid.
    pub fn grid(&self) -> &str {
        &self.grid
    }

    pub fn visible(&self) -> Vec<&RepoRecord> {
        self.filter().apply(&self.repos)
    }

    pub fn cards(&self) -> Vec<Card> {
        self.visible()
            .into_iter()
            .map(|repo| Card::from_repo(repo, &self.rendered_at))
            .collect()
    }

    /// Switches the active filter control and re-renders the grid.
    pub fn activate(&mut self, filter: RepoFilter) {
        self.controls.activate(filter);
        self.grid = grid::render_grid(&self.repos, filter, &self.rendered_at);
        tracing::debug!(%filter, visible = self.visible().len(), "filter changed");
    }

    pub fn document(&self) -> String {
        page::render_document(&self.profile_view(), &self.controls, &self.grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShowcaseError;
    use crate::test_utils::{fixed_now, make_profile, make_repo};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockSource {
        profile: Option<ProfileRecord>,
        repos: Vec<RepoRecord>,
        repo_calls: AtomicUsize,
    }

    #[async_trait]
    impl ShowcaseSource for MockSource {
        async fn fetch_profile(&self) -> Result<ProfileRecord> {
            self.profile
                .clone()
                .ok_or_else(|| ShowcaseError::GitHub("Not Found (404 Not Found)".into()))
        }

        async fn fetch_repos(&self) -> Result<Vec<RepoRecord>> {
            self.repo_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.repos.clone())
        }
    }

    fn sample() -> Vec<RepoRecord> {
        vec![
            make_repo("fork-new", true, 1),
            make_repo("orig-old", false, 90),
            make_repo("orig-new", false, 2),
        ]
    }

    #[tokio::test]
    async fn load_sorts_and_renders_all() {
        let source = MockSource {
            profile: Some(make_profile("ann")),
            repos: sample(),
            repo_calls: AtomicUsize::new(0),
        };
        let showcase = Showcase::load(&source).await.unwrap();

        let names: Vec<_> = showcase.repos().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["orig-new", "orig-old", "fork-new"]);
        assert_eq!(showcase.filter(), RepoFilter::All);
        assert_eq!(showcase.grid().matches("<article").count(), 3);
        assert_eq!(source.repo_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn load_fails_when_either_fetch_fails() {
        let source = MockSource {
            profile: None,
            repos: sample(),
            repo_calls: AtomicUsize::new(0),
        };
        assert!(Showcase::load(&source).await.is_err());
    }

    #[test]
    fn activate_rerenders_without_touching_repos() {
        let mut showcase = Showcase::new(make_profile("ann"), sample(), fixed_now());
        let before = showcase.repos().to_vec();

        showcase.activate(RepoFilter::Forks);
        assert_eq!(showcase.filter(), RepoFilter::Forks);
        assert_eq!(showcase.grid().matches("<article").count(), 1);
        assert!(showcase.grid().contains("fork-new"));

        showcase.activate(RepoFilter::Original);
        assert_eq!(showcase.cards().len(), 2);
        assert!(!showcase.grid().contains("fork-new"));

        assert_eq!(showcase.repos(), before.as_slice());
    }

    #[test]
    fn forks_view_without_forks_is_empty_state() {
        let repos = vec![make_repo("only", false, 1)];
        let mut showcase = Showcase::new(make_profile("ann"), repos, fixed_now());
        showcase.activate(RepoFilter::Forks);
        assert_eq!(showcase.grid(), grid::NO_REPOSITORIES);
    }

    #[test]
    fn end_to_end_about_text() {
        let mut profile = make_profile("ann");
        profile.name = Some("Ann".to_string());
        profile.bio = None;
        profile.company = Some("Acme".to_string());
        profile.location = None;
        let showcase = Showcase::new(profile, sample(), fixed_now());

        assert_eq!(
            showcase.profile_view().about,
            "I'm a software developer passionate about building great software. Currently working at Acme."
        );
        let doc = showcase.document();
        assert!(doc.contains(
            r#"<p id="about">I&#39;m a software developer passionate about building great software. Currently working at Acme.</p>"#
        ));
        assert!(doc.contains(r#"<h1 id="name">Ann</h1>"#));
    }
}
