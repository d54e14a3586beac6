use reqwest::Url;

/// Display fields requested for every message.
pub const META_FIELDS: &[&str] = &["subtitle", "link", "icon", "date", "title"];

/// Topics that flood a package feed without telling the reader anything.
pub const EXCLUDED_TOPICS: &[&str] = &[
    "org.fedoraproject.prod.mdapi.repo.update",
    "org.fedoraproject.prod.buildsys.rpm.sign",
    "org.fedoraproject.prod.buildsys.tag",
    "org.fedoraproject.prod.buildsys.untag",
    "org.fedoraproject.prod.buildsys.package.list.change",
    "org.release-monitoring.prod.anitya.project.version.update",
];

/// Paging and time-window options. Each one is forwarded as-is when set,
/// `Some(0)` included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryOptions {
    pub page: Option<u64>,
    /// Trailing window length in seconds.
    pub delta: Option<u64>,
    /// Epoch seconds.
    pub start: Option<i64>,
    /// Epoch seconds.
    pub end: Option<i64>,
}

impl QueryOptions {
    pub fn page(page: u64) -> Self {
        Self {
            page: Some(page),
            ..Default::default()
        }
    }
}

/// `<endpoint>/raw` with the full parameter set, appended after any query
/// the endpoint already carries.
pub(crate) fn build_url(endpoint: &Url, package: &str, opts: &QueryOptions) -> Url {
    let mut url = endpoint.clone();
    let path = format!("{}/raw", endpoint.path().trim_end_matches('/'));
    url.set_path(&path);

    {
        let mut q = url.query_pairs_mut();
        q.append_pair("package", package);
        for field in META_FIELDS {
            q.append_pair("meta", field);
        }
        for topic in EXCLUDED_TOPICS {
            q.append_pair("not_topic", topic);
        }
        if let Some(page) = opts.page {
            q.append_pair("page", &page.to_string());
        }
        if let Some(delta) = opts.delta {
            q.append_pair("delta", &delta.to_string());
        }
        if let Some(end) = opts.end {
            q.append_pair("end", &end.to_string());
        }
        if let Some(start) = opts.start {
            q.append_pair("start", &start.to_string());
        }
    }

    url
}
