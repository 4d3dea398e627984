//
//  stash-client
//  api/server/repositories.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Stash Repository API
//!
//! Repositories are listed per project. The project's own `link.url`
//! (`/projects/PRJ`) is used to address its repository listing:
//!
//! ```text
//! GET /rest/api/1.0/projects/{projectKey}/repos   (paged)
//! ```
//!
//! A repository record exposes `name`, `slug`, `project` and a
//! `link.url` pointing at its browse page, which the commit and change
//! operations derive their paths from.

use tracing::debug;

use crate::api::client::StashClient;
use crate::api::common::{find_named, record_str, Record, Result};
use crate::api::transport::Transport;

impl<T: Transport> StashClient<T> {
    /// Lists every repository of every project.
    ///
    /// Each project's listing is fetched in full, and the results are
    /// flattened in project order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingField`](crate::api::ApiError::MissingField)
    /// if a project record has no `link.url`.
    pub fn repositories(&self) -> Result<Vec<Record>> {
        let mut repositories = Vec::new();

        for project in self.projects()? {
            let path = format!("{}/repos", record_str(&project, "link.url")?);
            debug!("listing repositories under {}", path);
            repositories.extend(self.fetch_all(self.resolve(&path)?)?);
        }

        Ok(repositories)
    }

    /// Returns the first repository whose `name` equals `name`.
    pub fn repository_named(&self, name: &str) -> Result<Option<Record>> {
        Ok(find_named(self.repositories()?, name))
    }
}

#[cfg(test)]
mod tests {
    use crate::api::common::ApiError;
    use crate::api::endpoint::ClientOptions;
    use crate::api::transport::testing::{page, ScriptedTransport};
    use crate::api::StashClient;
    use serde_json::json;

    fn client(transport: &ScriptedTransport) -> StashClient<&ScriptedTransport> {
        StashClient::with_transport(ClientOptions::new().host("h"), transport).unwrap()
    }

    fn projects_page() -> String {
        page(
            json!([
                {"key": "A", "name": "Alpha", "link": {"url": "/projects/A"}},
                {"key": "B", "name": "Beta", "link": {"url": "/projects/B"}}
            ]),
            0,
            true,
            None,
        )
    }

    #[test]
    fn test_repositories_flattens_in_project_order() {
        let transport = ScriptedTransport::new([
            projects_page(),
            page(json!([{"name": "a1"}]), 0, false, None),
            page(json!([{"name": "a2"}]), 1, true, None),
            page(json!([{"name": "b1"}]), 0, true, None),
        ]);

        let repos = client(&transport).repositories().unwrap();

        let names: Vec<_> = repos.iter().map(|r| r["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["a1", "a2", "b1"]);

        let urls: Vec<_> = transport
            .requests()
            .iter()
            .map(|u| u.as_str().to_string())
            .collect();
        assert_eq!(
            urls,
            vec![
                "http://h/rest/api/1.0/projects",
                "http://h/rest/api/1.0/projects/A/repos",
                "http://h/rest/api/1.0/projects/A/repos?start=1",
                "http://h/rest/api/1.0/projects/B/repos",
            ]
        );
    }

    #[test]
    fn test_repositories_requires_project_link() {
        let transport = ScriptedTransport::new([page(
            json!([{"key": "A", "name": "Alpha"}]),
            0,
            true,
            None,
        )]);

        let err = client(&transport).repositories().unwrap_err();
        assert!(matches!(err, ApiError::MissingField(field) if field == "link.url"));
    }

    #[test]
    fn test_repository_named() {
        let transport = ScriptedTransport::new([
            projects_page(),
            page(json!([{"name": "core"}, {"name": "web"}]), 0, true, None),
            page(json!([{"name": "web", "slug": "web-b"}]), 0, true, None),
        ]);

        let repo = client(&transport).repository_named("web").unwrap().unwrap();
        assert!(repo.get("slug").is_none());
    }
}
