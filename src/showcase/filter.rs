use crate::github::types::RepoRecord;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RepoFilter {
    #[default]
    All,
    Original,
    Forks,
}

impl RepoFilter {
    pub const ALL: [RepoFilter; 3] = [RepoFilter::All, RepoFilter::Original, RepoFilter::Forks];

    /// Value carried by the control's `data-filter` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            RepoFilter::All => "all",
            RepoFilter::Original => "original",
            RepoFilter::Forks => "forks",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RepoFilter::All => "All",
            RepoFilter::Original => "Original",
            RepoFilter::Forks => "Forks",
        }
    }

    /// Page the static site renders this view into.
    pub fn page_name(self) -> &'static str {
        match self {
            RepoFilter::All => "index.html",
            RepoFilter::Original => "original.html",
            RepoFilter::Forks => "forks.html",
        }
    }

    pub fn matches(self, repo: &RepoRecord) -> bool {
        match self {
            RepoFilter::All => true,
            RepoFilter::Original => !repo.fork,
            RepoFilter::Forks => repo.fork,
        }
    }

    /// A view over `repos`, order preserved.
    pub fn apply(self, repos: &[RepoRecord]) -> Vec<&RepoRecord> {
        repos.iter().filter(|r| self.matches(r)).collect()
    }
}

impl fmt::Display for RepoFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepoFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(RepoFilter::All),
            "original" => Ok(RepoFilter::Original),
            "forks" => Ok(RepoFilter::Forks),
            other => Err(format!("unknown filter '{other}' (expected all, original or forks)")),
        }
    }
}
