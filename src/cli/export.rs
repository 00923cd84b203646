//! Export command handler

use log::info;

use crate::cli::Cli;
use crate::client::ApiManagerClient;
use crate::config::{Settings, StageProfile};
use crate::error::Result;
use crate::export::{ExportDocument, Exporter};

/// Run the export: resolve settings, fetch, assemble, write.
pub async fn run(cli: Cli) -> Result<()> {
    let profile = StageProfile::load(cli.stage.as_deref())?;
    let settings = Settings::resolve(
        cli.host.clone(),
        cli.port,
        cli.username.clone(),
        cli.password.clone(),
        &profile,
    );

    info!("Exporting '{}' from {}", cli.api_id, settings.origin());

    let client = ApiManagerClient::new(
        settings.origin(),
        settings.username.clone(),
        settings.password.clone(),
    )?;
    let exporter = Exporter::new(client);

    let state = exporter.export(&cli.api_id).await?;
    let document = ExportDocument::from_state(&state)?;
    document.write_to(&cli.output)?;

    info!("Wrote {}", cli.output.display());
    Ok(())
}
