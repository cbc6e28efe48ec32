use clap::ValueEnum;
use routefinder_domain::Resolution;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn render(resolution: &Resolution, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(resolution)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(resolution)?),
    }
}

fn render_text(resolution: &Resolution) -> String {
    let mut lines = Vec::new();

    match resolution {
        Resolution::ExactDomainMatch { domain } => {
            lines.push(format!("It's a domain! GUID: {}", domain.guid));
        }
        Resolution::RoutesFound { subdomain, .. } => {
            let routes = resolution.routes();
            lines.extend(routes.iter().map(|_| format!("Subdomain match! {}", subdomain)));
            lines.push(format!("{} matching route(s) found.", routes.len()));
            lines.extend(routes.iter().map(|route| {
                format!(
                    "  {} domain={}",
                    route.guid,
                    route.domain_guid.as_deref().unwrap_or("-")
                )
            }));
        }
        Resolution::NoRoutesFound { .. } => lines.push("Domain not found.".to_string()),
        Resolution::NoDomainFound { .. } => {
            lines.push("Could not find matching domain.".to_string())
        }
    }

    lines.iter().map(|line| format!("{}\n", line)).collect()
}

/// 0 when the hostname resolved to something, 1 otherwise.
pub fn exit_code(resolution: &Resolution) -> u8 {
    if resolution.is_found() {
        0
    } else {
        1
    }
}
