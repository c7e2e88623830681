use serde::{Deserialize, Serialize};

// ── Well-known contract values ───────────────────────────────────────────────

/// Cloud name used when no custom cloud is configured.
pub const DEFAULT_CLOUD_NAME: &str = "AzurePublicCloud";

/// Custom cloud environment name that enables the custom-cloud env file.
pub const AKS_CUSTOM_CLOUD_NAME: &str = "AKSCustomCloud";

/// Cloud name reported for any custom cloud environment.
pub const AZURE_STACK_CLOUD: &str = "AzureStackCloud";

/// Admin user created when the contract leaves the username empty.
pub const DEFAULT_LINUX_USER: &str = "azureuser";

/// Environment file written on nodes that run in the AKS custom cloud.
pub const AKS_CUSTOM_CLOUD_ENV_FILEPATH: &str = "/etc/kubernetes/akscustom.json";

pub const VM_SIZE_STANDARD_DC2S: &str = "Standard_DC2s";

/// Confidential-computing (SGX) VM sizes. Matching is exact and case-sensitive.
pub const SGX_ENABLED_VM_SIZES: &[&str] = &[
    "Standard_DC1s_v2",
    VM_SIZE_STANDARD_DC2S,
    "Standard_DC2s_v2",
    "Standard_DC4s",
    "Standard_DC4s_v2",
    "Standard_DC8_v2",
];

// ── Enums ────────────────────────────────────────────────────────────────────

/// Pod network plugin.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum NetworkPlugin {
    #[default]
    None,
    Azure,
    Kubenet,
}

/// Network policy engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum NetworkPolicy {
    #[default]
    None,
    Azure,
    Calico,
}

impl NetworkPlugin {
    /// Lowercase name as written in the contract.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Azure => "azure",
            Self::Kubenet => "kubenet",
        }
    }
}

impl NetworkPolicy {
    /// Lowercase name as written in the contract.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Azure => "azure",
            Self::Calico => "calico",
        }
    }
}
