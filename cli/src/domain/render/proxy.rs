//! HTTP proxy predicates and the shell export fragment.

use nbcontract::HttpProxyConfig;

use super::kv::stringified_array;

/// At least one of the HTTP or HTTPS proxy URLs is set.
#[must_use]
pub fn should_configure_http_proxy(proxy: Option<&HttpProxyConfig>) -> bool {
    proxy.is_some_and(|p| !p.http_proxy.is_empty() || !p.https_proxy.is_empty())
}

/// A proxy is configured and it carries a trusted CA bundle.
#[must_use]
pub fn should_configure_http_proxy_ca(proxy: Option<&HttpProxyConfig>) -> bool {
    should_configure_http_proxy(proxy) && proxy.is_some_and(|p| !p.proxy_trusted_ca.is_empty())
}

/// Shell `export` statements for the proxy, upper and lower case.
///
/// `NO_PROXY` comes first, then `HTTPS_PROXY`, then `HTTP_PROXY`. Returns
/// `""` when nothing is configured.
#[must_use]
pub fn proxy_variables(proxy: Option<&HttpProxyConfig>) -> String {
    let Some(p) = proxy else {
        return String::new();
    };

    let mut exports: Vec<String> = Vec::new();
    if !p.no_proxy_entries.is_empty() {
        let no_proxy = stringified_array(&p.no_proxy_entries, ",");
        exports.push(export_both("NO_PROXY", &no_proxy));
    }
    if !p.https_proxy.is_empty() {
        exports.push(export_both("HTTPS_PROXY", &p.https_proxy));
    }
    if !p.http_proxy.is_empty() {
        exports.push(export_both("HTTP_PROXY", &p.http_proxy));
    }
    exports.join(" ")
}

fn export_both(name: &str, value: &str) -> String {
    format!(
        "export {name}=\"{value}\"; export {}=\"{value}\";",
        name.to_lowercase()
    )
}
