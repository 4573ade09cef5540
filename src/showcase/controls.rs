use crate::showcase::filter::RepoFilter;
use crate::showcase::html::escape;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControl {
    pub filter: RepoFilter,
    pub active: bool,
}

/// One control per filter value; exactly one is active at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControls {
    controls: Vec<FilterControl>,
}

impl Default for FilterControls {
    fn default() -> Self {
        Self::new(RepoFilter::default())
    }
}

impl FilterControls {
    pub fn new(active: RepoFilter) -> Self {
        let controls = RepoFilter::ALL
            .iter()
            .map(|&filter| FilterControl {
                filter,
                active: filter == active,
            })
            .collect();
        Self { controls }
    }

    pub fn activate(&mut self, filter: RepoFilter) {
        for control in &mut self.controls {
            control.active = control.filter == filter;
        }
    }

    pub fn active(&self) -> RepoFilter {
        self.controls
            .iter()
            .find(|c| c.active)
            .map(|c| c.filter)
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FilterControl> {
        self.controls.iter()
    }

    /// Control bar for the static site; each control links to its filter's page.
    pub fn to_html(&self) -> String {
        let mut out = String::from(r#"<nav class="filter-controls">"#);
        for control in &self.controls {
            let class = if control.active {
                "filter-btn active"
            } else {
                "filter-btn"
            };
            out.push_str(&format!(
                r#"<a class="{class}" data-filter="{value}" href="{href}">{label}</a>"#,
                value = control.filter.as_str(),
                href = escape(control.filter.page_name()),
                label = control.filter.label(),
            ));
        }
        out.push_str("</nav>");
        out
    }
}
