use crate::github::types::RepoRecord;
use std::cmp::Reverse;

/// Originals first, then forks; each bucket most recently updated first.
///
/// Both the partition and the sort are stable, so equal timestamps keep
/// their input order.
pub fn sort_repos(repos: Vec<RepoRecord>) -> Vec<RepoRecord> {
    let (mut originals, mut forks): (Vec<_>, Vec<_>) = repos.into_iter().partition(|r| !r.fork);
    originals.sort_by_key(|r| Reverse(r.updated_at));
    forks.sort_by_key(|r| Reverse(r.updated_at));
    originals.extend(forks);
    originals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::make_repo;

    fn names(repos: &[RepoRecord]) -> Vec<&str> {
        repos.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn originals_before_forks_by_recency() {
        let input = vec![
            make_repo("old-fork", true, 50),
            make_repo("old", false, 40),
            make_repo("new-fork", true, 1),
            make_repo("new", false, 2),
            make_repo("mid", false, 10),
        ];
        let sorted = sort_repos(input);
        assert_eq!(names(&sorted), vec!["new", "mid", "old", "new-fork", "old-fork"]);
    }

    #[test]
    fn equal_timestamps_keep_input_order() {
        let input = vec![
            make_repo("b", false, 5),
            make_repo("f1", true, 5),
            make_repo("a", false, 5),
            make_repo("f2", true, 5),
            make_repo("c", false, 5),
        ];
        let sorted = sort_repos(input);
        assert_eq!(names(&sorted), vec!["b", "a", "c", "f1", "f2"]);
    }

    #[test]
    fn bucket_invariants_hold() {
        let input: Vec<_> = (0..30)
            .map(|i| make_repo(&format!("r{i}"), i % 3 == 0, (i * 7 % 11) as i64))
            .collect();
        let sorted = sort_repos(input);

        let first_fork = sorted.iter().position(|r| r.fork).unwrap();
        assert!(sorted[..first_fork].iter().all(|r| !r.fork));
        assert!(sorted[first_fork..].iter().all(|r| r.fork));
        for bucket in [&sorted[..first_fork], &sorted[first_fork..]] {
            assert!(bucket.windows(2).all(|w| w[0].updated_at >= w[1].updated_at));
        }
    }

    #[test]
    fn empty_input() {
        assert!(sort_repos(Vec::new()).is_empty());
    }
}
