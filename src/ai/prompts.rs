use crate::core::domain::{Catalog, Domain, DomainProfile};

pub const FOOTFALL_SYSTEM_PROMPT: &str = "I want you to act as a GeoServer WFS API expert. \
Your role is to generate correct WFS API URLs based on user requirements for filtering and \
querying spatial datasets. You should understand CQL filters, WFS parameters, and how to \
properly encode URLs.";

pub const TRAFFIC_SYSTEM_PROMPT: &str = "I want you to act as a GeoServer WFS API expert \
specializing in traffic data analysis. Your role is to generate WFS API URLs with simple, \
efficient CQL filters for traffic pattern analysis. Focus on creating straightforward filters \
using basic operators (=, >, <, OR, AND) rather than complex operators like EXCEPT or IN.";

/// Reference mean the model can compare `avg_traffic_den` against.
pub const TRAFFIC_DENSITY_MEAN: &str = "2.426102";
pub const TRAFFIC_DATE_FORMAT: &str = "'yyyy-mm-ddT00:00:00Z'";

/// System/user instruction pair for one completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

pub struct PromptBuilder {
    catalog: Catalog,
}

impl PromptBuilder {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Renders the instruction pair for `domain`. The query is interpolated
    /// verbatim, empty or not.
    pub fn build(&self, domain: Domain, query: &str) -> Prompt {
        let profile = self.catalog.profile(domain);
        let system = match domain {
            Domain::Footfall => FOOTFALL_SYSTEM_PROMPT,
            Domain::Traffic => TRAFFIC_SYSTEM_PROMPT,
        };

        let header = self.request_header(profile);
        let properties = render_properties(profile);
        let user = match domain {
            Domain::Footfall => format!(
                r#"Based on the following base URL and parameters, generate a complete WFS request URL with the specified filters.

{header}

Given query:
{query}

Available Properties:
{properties}

Please provide the complete, properly encoded URL that meets these requirements.
Just provide the URL, no explanation is required.
Generated URL:
"#
            ),
            Domain::Traffic => format!(
                r#"Based on the following base URL and parameters, generate a complete WFS request URL with the specified filters.

{header}
Given that avg_traffic_den = {TRAFFIC_DENSITY_MEAN}
date format is: {TRAFFIC_DATE_FORMAT}

Given query:
{query}

Available Properties:
{properties}

Note: Use simple operators (=, >, <, OR, AND) and avoid complex operators like EXCEPT or IN.

Please provide the complete, properly encoded URL that meets these requirements.
Just provide the URL, no explanation is required.
Generated URL:
"#
            ),
        };

        Prompt {
            system: system.to_string(),
            user,
        }
    }

    fn request_header(&self, profile: &DomainProfile) -> String {
        let svc = &self.catalog.service;
        format!(
            "Base URL: \"{}\"\nService: {}\nVersion: {}\nTypeName: \"{}\"\nMaxFeatures: {}\nOutputFormat: {}",
            svc.base_url,
            svc.service,
            svc.version,
            profile.type_name,
            svc.max_features,
            svc.output_format
        )
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

fn render_properties(profile: &DomainProfile) -> String {
    profile
        .schema
        .iter()
        .map(|f| format!("- {}: {}", f.name, f.description))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn build_prompt(domain: Domain, query: &str) -> Prompt {
    PromptBuilder::default().build(domain, query)
}
