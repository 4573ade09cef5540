use crate::github::types::ProfileRecord;
use crate::showcase::html::with_scheme;

pub const DEFAULT_ABOUT: &str = "I'm a software developer passionate about building great software.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogLink {
    pub href: String,
    pub text: String,
}

/// Display fields for the profile summary. Raw text; callers escape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub avatar_src: String,
    pub avatar_alt: String,
    pub name: String,
    pub login: String,
    pub bio: Option<String>,
    pub public_repos: u64,
    pub followers: u64,
    pub following: u64,
    pub blog: Option<BlogLink>,
    pub about: String,
}

impl ProfileView {
    pub fn from_profile(profile: &ProfileRecord) -> Self {
        let name = profile
            .name
            .clone()
            .unwrap_or_else(|| profile.login.clone());

        Self {
            avatar_src: profile.avatar_url.clone(),
            avatar_alt: name.clone(),
            name,
            login: profile.login.clone(),
            bio: profile.bio.clone(),
            public_repos: profile.public_repos,
            followers: profile.followers,
            following: profile.following,
            blog: profile.blog.as_deref().map(blog_link),
            about: about_text(profile),
        }
    }
}

fn blog_link(raw: &str) -> BlogLink {
    BlogLink {
        href: with_scheme(raw),
        text: raw.trim().to_string(),
    }
}

pub fn about_text(profile: &ProfileRecord) -> String {
    let mut about = profile
        .bio
        .clone()
        .unwrap_or_else(|| DEFAULT_ABOUT.to_string());
    if let Some(ref company) = profile.company {
        about.push_str(&format!(" Currently working at {company}."));
    }
    if let Some(ref location) = profile.location {
        about.push_str(&format!(" Based in {location}."));
    }
    about
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::make_profile;

    #[test]
    fn about_with_company_only() {
        let mut profile = make_profile("ann");
        profile.name = Some("Ann".to_string());
        profile.bio = None;
        profile.company = Some("Acme".to_string());
        profile.location = None;
        assert_eq!(
            about_text(&profile),
            "I'm a software developer passionate about building great software. Currently working at Acme."
        );
    }

    #[test]
    fn about_prefers_bio_and_appends_location() {
        let mut profile = make_profile("ann");
        profile.bio = Some("Builds compilers.".to_string());
        profile.company = Some("Acme".to_string());
        profile.location = Some("Lisbon".to_string());
        assert_eq!(
            about_text(&profile),
            "Builds compilers. Currently working at Acme. Based in Lisbon."
        );
    }

    #[test]
    fn name_falls_back_to_login() {
        let profile = make_profile("ann");
        let view = ProfileView::from_profile(&profile);
        assert_eq!(view.name, "ann");
        assert_eq!(view.avatar_alt, "ann");
        assert_eq!(view.bio, None);
        assert_eq!(view.blog, None);
    }

    #[test]
    fn blog_gets_scheme_when_missing() {
        let mut profile = make_profile("ann");
        profile.blog = Some("ann.dev".to_string());
        let view = ProfileView::from_profile(&profile);
        assert_eq!(
            view.blog,
            Some(BlogLink {
                href: "https://ann.dev".to_string(),
                text: "ann.dev".to_string()
            })
        );

        profile.blog = Some("http://ann.dev".to_string());
        let view = ProfileView::from_profile(&profile);
        assert_eq!(view.blog.unwrap().href, "http://ann.dev");
    }
}
