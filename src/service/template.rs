use super::client::{Error, TestRail};
use testrail_model::Template;

/// Access to the templates of a TestRail instance.
#[derive(Clone, Copy, Debug)]
pub struct Templates<'a> {
    client: &'a TestRail,
}

impl<'a> Templates<'a> {
    pub(crate) fn new(client: &'a TestRail) -> Self {
        Self { client }
    }

    /// Lists the templates available in the given project.
    pub async fn list(&self, project_id: i64) -> Result<Vec<Template>, Error> {
        tracing::debug!("listing templates of project {}", project_id);
        let templates: Vec<Template> = self
            .client
            .get(&format!("get_templates/{project_id}"))
            .await?;
        tracing::debug!(
            "found {} templates in project {}",
            templates.len(),
            project_id
        );
        Ok(templates)
    }
}
