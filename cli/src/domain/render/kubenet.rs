//! kubenet CNI conflist template.
//!
//! The template is static and keeps Go-template placeholders for the pod
//! CIDR ranges and routes. containerd expands them at runtime from
//! `conf_template`; [`expand_kubenet_template`] performs the same expansion
//! for callers that need the concrete conflist up front.

use serde_json::Value;

use super::encoding::encode;
use crate::domain::error::RenderError;

/// Where the template is written on the node; referenced from the
/// containerd CRI `conf_template` setting.
pub const KUBENET_TEMPLATE_PATH: &str = "/etc/containerd/kubenet_template.conf";

macro_rules! ranges_placeholder {
    () => {
        r#"[{{range $i, $range := .PodCIDRRanges}}{{if $i}}, {{end}}[{"subnet": "{{$range}}"}]{{end}}]"#
    };
}

macro_rules! routes_placeholder {
    () => {
        r#"[{{range $i, $route := .Routes}}{{if $i}}, {{end}}{"dst": "{{$route}}"}{{end}}]"#
    };
}

pub const RANGES_PLACEHOLDER: &str = ranges_placeholder!();
pub const ROUTES_PLACEHOLDER: &str = routes_placeholder!();

const KUBENET_TEMPLATE: &str = concat!(
    "{\n",
    "\t\"cniVersion\": \"0.3.1\",\n",
    "\t\"name\": \"kubenet\",\n",
    "\t\"plugins\": [{\n",
    "\t\t\"type\": \"bridge\",\n",
    "\t\t\"bridge\": \"cbr0\",\n",
    "\t\t\"mtu\": 1500,\n",
    "\t\t\"addIf\": \"eth0\",\n",
    "\t\t\"isGateway\": true,\n",
    "\t\t\"ipMasq\": false,\n",
    "\t\t\"promiscMode\": true,\n",
    "\t\t\"hairpinMode\": false,\n",
    "\t\t\"ipam\": {\n",
    "\t\t\t\"type\": \"host-local\",\n",
    "\t\t\t\"ranges\": ",
    ranges_placeholder!(),
    ",\n",
    "\t\t\t\"routes\": ",
    routes_placeholder!(),
    "\n",
    "\t\t}\n",
    "\t},\n",
    "\t{\n",
    "\t\t\"type\": \"portmap\",\n",
    "\t\t\"capabilities\": {\"portMappings\": true},\n",
    "\t\t\"externalSetMarkChain\": \"KUBE-MARK-MASQ\"\n",
    "\t}]\n",
    "}\n",
);

/// Plain-text template with placeholders intact.
#[must_use]
pub fn kubenet_template_text() -> &'static str {
    KUBENET_TEMPLATE
}

/// Base64-encoded template.
#[must_use]
pub fn kubenet_template() -> String {
    encode(KUBENET_TEMPLATE)
}

/// Substitute concrete pod CIDR ranges and routes into a kubenet template.
///
/// Each range becomes `[{"subnet": "<cidr>"}]`, each route `{"dst": "<dst>"}`,
/// joined with `", "`. Empty inputs give `[]`.
///
/// # Errors
///
/// Returns an error if `template` lacks either placeholder.
pub fn expand_kubenet_template<R, D>(
    template: &str,
    pod_cidr_ranges: &[R],
    routes: &[D],
) -> Result<String, RenderError>
where
    R: AsRef<str>,
    D: AsRef<str>,
{
    if !template.contains(RANGES_PLACEHOLDER) {
        return Err(RenderError::MissingPlaceholder("PodCIDRRanges"));
    }
    if !template.contains(ROUTES_PLACEHOLDER) {
        return Err(RenderError::MissingPlaceholder("Routes"));
    }

    let ranges = json_array(pod_cidr_ranges, |cidr| format!("[{{\"subnet\": {cidr}}}]"));
    let routes = json_array(routes, |dst| format!("{{\"dst\": {dst}}}"));

    Ok(template
        .replace(RANGES_PLACEHOLDER, &ranges)
        .replace(ROUTES_PLACEHOLDER, &routes))
}

fn json_array<S: AsRef<str>>(items: &[S], item: impl Fn(&str) -> String) -> String {
    let rendered: Vec<String> = items
        .iter()
        .map(|s| item(&Value::String(s.as_ref().to_owned()).to_string()))
        .collect();
    format!("[{}]", rendered.join(", "))
}
