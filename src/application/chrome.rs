use crate::config::SiteSettings;
use crate::presentation::views::{BrandView, LayoutChrome, PageMetaView};

/// Site-wide layout data: brand link and document metadata.
#[derive(Clone)]
pub struct ChromeService {
    chrome: LayoutChrome,
    public_url: String,
}

impl ChromeService {
    pub fn new(site: &SiteSettings) -> Self {
        let public_url = normalize_public_site_url(&site.public_url);
        let chrome = LayoutChrome {
            brand: BrandView {
                title: site.title.clone(),
                href: "/".to_string(),
            },
            meta: PageMetaView {
                title: site.title.clone(),
                description: site.description.clone(),
                canonical: public_url.clone(),
            },
        };

        Self { chrome, public_url }
    }

    pub fn load(&self) -> LayoutChrome {
        self.chrome.clone()
    }

    /// Chrome whose canonical link points at `path` on the public site.
    pub fn for_path(&self, path: &str) -> LayoutChrome {
        let canonical = canonical_url(&self.public_url, path);
        self.load().with_canonical(canonical)
    }
}

pub(crate) fn canonical_url(base: &str, path: &str) -> String {
    let root = normalize_public_site_url(base);
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() {
        root
    } else {
        format!("{root}{trimmed}")
    }
}

fn normalize_public_site_url(url: &str) -> String {
    let trimmed = url.trim_end_matches('/');
    format!("{trimmed}/")
}
