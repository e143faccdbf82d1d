//! The fixed registry launch command and its renderer.
//!
//! There is exactly one template and one context shape; this is not a
//! general-purpose engine. Substituted values are interpolated without
//! shell quoting, preserving the wire-compatible command text: callers
//! are trusted not to pass values containing shell metacharacters.

use crate::config::{AuthOptions, RegistryOptions};
use crate::error::{ProvisionError, Result};
use std::borrow::Cow;

/// Launch command for the registry container, executed over the remote
/// shell as a single multi-line invocation. The container is always
/// named `registry`; re-running against a machine that still has one
/// fails loudly rather than replacing it.
pub const REGISTRY_RUN_TEMPLATE: &str = r"sudo docker run -d \
--restart=always \
--name registry \
-p {{port}}:{{port}} \
-v {{docker_dir}}:{{docker_dir}} \
{{image}} \
manage \
--tlsverify \
--tlscacert={{ca_cert}} \
--tlscert={{server_cert}} \
--tlskey={{server_key}} \
-H {{host}} \
{{flags}} {{discovery}}
";

/// Everything the launch template references, gathered for one
/// provisioning attempt and discarded afterwards.
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Reserved; currently always empty.
    pub container_name: String,
    /// Remote directory holding the machine's docker TLS material.
    pub docker_dir: String,
    /// Port the machine's docker engine listens on.
    pub docker_port: u16,
    /// Resolved IP address of the target machine.
    pub ip: String,
    /// Port extracted from the configured registry host.
    pub port: String,
    pub auth: AuthOptions,
    pub options: RegistryOptions,
    pub image: String,
}

impl CommandContext {
    fn value_of(&self, key: &str) -> Option<Cow<'_, str>> {
        let value = match key {
            "container_name" => Cow::Borrowed(self.container_name.as_str()),
            "docker_dir" => Cow::Borrowed(self.docker_dir.as_str()),
            "docker_port" => Cow::Owned(self.docker_port.to_string()),
            "ip" => Cow::Borrowed(self.ip.as_str()),
            "port" => Cow::Borrowed(self.port.as_str()),
            "image" => Cow::Borrowed(self.image.as_str()),
            "host" => Cow::Borrowed(self.options.host.as_str()),
            "discovery" => Cow::Borrowed(self.options.discovery.as_str()),
            "ca_cert" => Cow::Borrowed(self.auth.ca_cert_remote_path.as_str()),
            "server_cert" => Cow::Borrowed(self.auth.server_cert_remote_path.as_str()),
            "server_key" => Cow::Borrowed(self.auth.server_key_remote_path.as_str()),
            "flags" => Cow::Owned(self.rendered_flags()),
            _ => return None,
        };
        Some(value)
    }

    // One " --<flag>" per arbitrary flag, in configuration order.
    fn rendered_flags(&self) -> String {
        self.options
            .arbitrary_flags
            .iter()
            .map(|flag| format!(" --{flag}"))
            .collect()
    }
}

/// Substitutes every `{{key}}` placeholder in `template` from `ctx`.
///
/// Rendering is deterministic. An unterminated or unknown placeholder
/// means the embedded template itself is broken, which surfaces as
/// [`ProvisionError::Template`] rather than a panic.
pub fn render(template: &str, ctx: &CommandContext) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 2..];
        let end = tail
            .find("}}")
            .ok_or_else(|| ProvisionError::Template("unterminated placeholder".to_string()))?;
        let key = &tail[..end];
        let value = ctx
            .value_of(key)
            .ok_or_else(|| ProvisionError::Template(format!("unknown placeholder {key:?}")))?;
        out.push_str(&value);
        rest = &tail[end + 2..];
    }
    out.push_str(rest);

    Ok(out)
}
