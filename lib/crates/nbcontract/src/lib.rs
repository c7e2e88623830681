pub mod contract;
pub mod types;
pub mod version;

pub use contract::{
    Configuration, CustomCloudConfig, CustomLinuxOsConfig, CustomSearchDomainConfig,
    HttpProxyConfig, K8sComponents, KubeletConfig, NetworkConfig, SysctlConfig, UlimitConfig,
};
pub use types::*;
pub use version::{VersionError, is_kubernetes_version_ge, parse_kubernetes_version};
