mod templates;

use testrail::config::Configuration;

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
    #[error(transparent)]
    Client(#[from] testrail::Error),
    #[error("unable to write output: {0}")]
    Output(#[from] serde_json::Error),
}

#[derive(clap::Subcommand)]
pub(crate) enum Action {
    /// List the templates of a project
    Templates(templates::Action),
}

impl Action {
    pub(crate) async fn execute(self, config: Configuration) -> Result<(), Error> {
        match self {
            Self::Templates(inner) => inner.execute(config).await,
        }
    }
}
