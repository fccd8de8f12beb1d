use anyhow::Context;
use kosei_config::KoseiConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration and apply command-line overrides on top.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<KoseiConfig> {
    let mut config = KoseiConfig::load_with_dotenv().context("failed to load kosei configuration")?;
    apply_overrides(&mut config, flags)?;
    tracing::debug!(endpoint = %config.service.endpoint, "configuration loaded");
    Ok(config)
}

fn apply_overrides(config: &mut KoseiConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(endpoint) = &flags.endpoint {
        config.service.endpoint.clone_from(endpoint);
        config
            .validate()
            .context("invalid --endpoint")?;
    }
    Ok(())
}
