//! Remote provisioning of the registry container.

use crate::config::{AuthOptions, RegistryOptions};
use crate::error::Result;
use crate::template::{render, CommandContext, REGISTRY_RUN_TEMPLATE};
use async_trait::async_trait;
use tracing::debug;

/// Port the docker engine on the provisioned machine listens on.
pub const DOCKER_PORT: u16 = 2376;

/// A configured, reachable target machine plus the ability to run
/// commands on it.
///
/// Transport concerns such as timeouts and cancellation belong to the
/// implementation; a hanging transport hangs the provisioning call.
#[async_trait]
pub trait Provisioner: Send + Sync {
    /// Resolves the machine's IP address.
    async fn ip(&self) -> Result<String>;

    /// Remote directory holding the machine's docker options and TLS material.
    fn docker_options_dir(&self) -> String;

    /// Runs a command on the machine and returns its output.
    async fn ssh_command(&self, command: &str) -> Result<String>;
}

/// Pulls the registry image and launches the registry container on the
/// target machine.
///
/// Returns immediately with success when `options.enabled` is false,
/// without touching the machine. When enabled, the image pull always
/// precedes the launch, and the first error aborts the whole operation,
/// returned unchanged to the caller. There is no retry and no rollback:
/// a pull that succeeded before a failed launch stays pulled.
pub async fn configure_registry<P>(
    provisioner: &P,
    options: &RegistryOptions,
    auth: &AuthOptions,
) -> Result<()>
where
    P: Provisioner + ?Sized,
{
    if !options.enabled {
        return Ok(());
    }

    let ip = provisioner.ip().await?;
    let port = options.host_port()?;
    let docker_dir = provisioner.docker_options_dir();

    let ctx = CommandContext {
        container_name: String::new(),
        docker_dir,
        docker_port: DOCKER_PORT,
        ip,
        port,
        auth: auth.clone(),
        options: options.clone(),
        image: options.image.clone(),
    };

    provisioner
        .ssh_command(&format!("sudo docker pull {}", options.image))
        .await?;

    let command = render(REGISTRY_RUN_TEMPLATE, &ctx)?;
    debug!("Rendered registry command: {}", command);

    debug!("Launching docker registry");
    provisioner.ssh_command(&command).await?;

    Ok(())
}
