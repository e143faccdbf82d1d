pub mod config;
pub mod error;
pub mod provision;
pub mod template;

pub use config::{AuthOptions, RegistryOptions};
pub use error::{ProvisionError, Result};
pub use provision::{configure_registry, Provisioner, DOCKER_PORT};
pub use template::{CommandContext, REGISTRY_RUN_TEMPLATE};
