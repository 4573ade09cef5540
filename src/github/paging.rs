use crate::error::{Result, ShowcaseError};
use async_trait::async_trait;

/// A paginated collection, addressed by 1-based page number.
#[async_trait]
pub trait PageSource: Sync {
    type Item: Send;

    async fn fetch_page(&self, page: u32, per_page: u8) -> Result<Vec<Self::Item>>;
}

/// Walks pages from 1 until a page comes back shorter than `per_page`.
///
/// Pages are requested one after another since the end is only known once a
/// short page arrives. The first failing page aborts the walk.
pub async fn fetch_all_pages<S>(source: &S, per_page: u8) -> Result<Vec<S::Item>>
where
    S: PageSource + ?Sized,
{
    if per_page == 0 {
        return Err(ShowcaseError::InvalidPageSize(per_page));
    }

    let mut items = Vec::new();
    let mut page = 1u32;

    loop {
        let batch = source.fetch_page(page, per_page).await?;
        let len = batch.len();
        tracing::debug!(page, len, "fetched page");
        items.extend(batch);

        if len < per_page as usize {
            break;
        }
        page += 1;
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct MockSource {
        pages: Vec<Vec<u32>>,
        fail_on: Option<u32>,
        requested: Mutex<Vec<u32>>,
    }

    impl MockSource {
        fn new(pages: Vec<Vec<u32>>) -> Self {
            Self {
                pages,
                fail_on: None,
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl PageSource for MockSource {
        type Item = u32;

        async fn fetch_page(&self, page: u32, _per_page: u8) -> Result<Vec<u32>> {
            self.requested.lock().unwrap().push(page);
            if self.fail_on == Some(page) {
                return Err(ShowcaseError::GitHub("500 Internal Server Error".into()));
            }
            Ok(self
                .pages
                .get(page as usize - 1)
                .cloned()
                .unwrap_or_default())
        }
    }

    fn numbered_pages(full: usize, size: usize, last: usize) -> Vec<Vec<u32>> {
        let mut next = 1u32;
        let mut pages = Vec::new();
        for count in std::iter::repeat(size).take(full).chain([last]) {
            let count = count as u32;
            pages.push((next..next + count).collect());
            next += count;
        }
        pages
    }

    #[tokio::test]
    async fn full_pages_then_short_page() {
        let source = MockSource::new(numbered_pages(3, 5, 2));
        let items = fetch_all_pages(&source, 5).await.unwrap();

        assert_eq!(items.len(), 3 * 5 + 2);
        assert_eq!(items, (1..=17).collect::<Vec<_>>());
        assert_eq!(*source.requested.lock().unwrap(), vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn immediate_short_page() {
        let source = MockSource::new(vec![vec![9, 8, 7]]);
        let items = fetch_all_pages(&source, 100).await.unwrap();

        assert_eq!(items, vec![9, 8, 7]);
        assert_eq!(*source.requested.lock().unwrap(), vec![1]);
    }

    #[tokio::test]
    async fn exact_multiple_ends_on_empty_page() {
        let source = MockSource::new(numbered_pages(2, 4, 0));
        let items = fetch_all_pages(&source, 4).await.unwrap();

        assert_eq!(items.len(), 8);
        assert_eq!(*source.requested.lock().unwrap(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn failing_page_aborts_without_retry() {
        let mut source = MockSource::new(numbered_pages(3, 2, 1));
        source.fail_on = Some(2);
        let err = fetch_all_pages(&source, 2).await.unwrap_err();

        assert!(matches!(err, ShowcaseError::GitHub(_)));
        assert_eq!(*source.requested.lock().unwrap(), vec![1, 2]);
    }

    #[tokio::test]
    async fn zero_page_size_rejected() {
        let source = MockSource::new(vec![]);
        let err = fetch_all_pages(&source, 0).await.unwrap_err();
        assert!(matches!(err, ShowcaseError::InvalidPageSize(0)));
        assert!(source.requested.lock().unwrap().is_empty());
    }
}
