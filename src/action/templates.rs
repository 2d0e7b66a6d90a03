use super::Error;
use testrail::config::Configuration;
use testrail::Template;

#[derive(clap::Parser)]
pub(crate) struct Action {
    /// Identifier of the project to list the templates from.
    #[clap(short, long)]
    pub project_id: i64,
    /// Only shows the default template of the project.
    #[clap(long)]
    pub default_only: bool,
    /// Prints the templates as json.
    #[clap(long)]
    pub json: bool,
}

impl Action {
    fn filter(&self, templates: Vec<Template>) -> Vec<Template> {
        if self.default_only {
            templates.into_iter().filter(|t| t.is_default()).collect()
        } else {
            templates
        }
    }

    fn render(&self, templates: &[Template]) -> Result<String, Error> {
        if self.json {
            Ok(serde_json::to_string_pretty(templates)?)
        } else {
            Ok(templates
                .iter()
                .map(|template| template.to_string())
                .collect::<Vec<_>>()
                .join("\n"))
        }
    }

    pub(crate) async fn execute(self, config: Configuration) -> Result<(), Error> {
        let client = config.client.build()?;
        let templates = self.filter(client.templates().list(self.project_id).await?);
        let output = self.render(&templates)?;
        if !output.is_empty() {
            println!("{output}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Action;
    use testrail::Template;

    fn action(default_only: bool, json: bool) -> Action {
        Action {
            project_id: 1,
            default_only,
            json,
        }
    }

    fn templates() -> Vec<Template> {
        vec![
            Template::new().with_id(1).with_name("Test Case (Text)"),
            Template::new()
                .with_id(2)
                .with_default(true)
                .with_name("Test Case (Steps)"),
            Template::new().with_id(3).with_name("Exploratory Session"),
        ]
    }

    #[test]
    fn should_keep_every_template() {
        let result = action(false, false).filter(templates());
        assert_eq!(result, templates());
    }

    #[test]
    fn should_keep_default_template_only() {
        let result = action(true, false).filter(templates());
        assert_eq!(
            result,
            vec![Template::new()
                .with_id(2)
                .with_default(true)
                .with_name("Test Case (Steps)")]
        );
    }

    #[test]
    fn should_render_lines() {
        let output = action(false, false).render(&templates()).unwrap();
        assert_eq!(
            output,
            "1 - Test Case (Text)\n2 - Test Case (Steps) (default)\n3 - Exploratory Session"
        );
    }

    #[test]
    fn should_render_json_with_wire_names() {
        let output = action(false, true).render(&templates()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {"id": 1, "is_default": false, "name": "Test Case (Text)"},
                {"id": 2, "is_default": true, "name": "Test Case (Steps)"},
                {"id": 3, "is_default": false, "name": "Exploratory Session"},
            ])
        );
        assert!(!output.contains("isDefault"));
    }

    #[test]
    fn should_render_empty_json_array() {
        let output = action(true, true).render(&[]).unwrap();
        assert_eq!(output, "[]");
    }
}
