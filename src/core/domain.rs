use serde::{Deserialize, Serialize};
use std::fmt;

/// Dataset category a query is answered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Footfall,
    Traffic,
}

impl Domain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Footfall => "footfall",
            Domain::Traffic => "traffic",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One queryable property of a layer and what it means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaField {
    pub name: &'static str,
    pub description: &'static str,
}

const fn field(name: &'static str, description: &'static str) -> SchemaField {
    SchemaField { name, description }
}

/// Everything the classifier and prompt builder need to know about a domain.
#[derive(Debug, Clone, Copy)]
pub struct DomainProfile {
    pub domain: Domain,
    /// Lowercase tokens matched as substrings of the lowercased query.
    pub keywords: &'static [&'static str],
    /// WFS `typeName` of the backing layer.
    pub type_name: &'static str,
    pub schema: &'static [SchemaField],
}

/// Parameters shared by every WFS request the model is asked to produce.
#[derive(Debug, Clone, Copy)]
pub struct WfsService {
    pub base_url: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub max_features: u32,
    pub output_format: &'static str,
}

pub const WFS_SERVICE: WfsService = WfsService {
    base_url: "https://mapstack2.mapit.co.za/geoserver/mtn/ows",
    service: "WFS",
    version: "1.0.0",
    max_features: 5000,
    output_format: "application/json",
};

const FOOTFALL_KEYWORDS: &[&str] = &[
    "mall",
    "competitor",
    "income",
    "morning",
    "midday",
    "afternoon",
    "evening",
    "weekend",
    "weekday",
    "footfall",
    "visit",
    "shopping",
    "store",
    "retail",
    "customer",
];

const TRAFFIC_KEYWORDS: &[&str] = &[
    "traffic",
    "density",
    "hits",
    "road",
    "segment",
    "avg_traffic",
    "avg_hits",
    "total_hits",
    "vehicle",
    "cars",
    "congestion",
    "busy",
];

const FOOTFALL_SCHEMA: &[SchemaField] = &[
    field("ff_rivil", "total footfall mall only"),
    field("ffc_rivil", "total footfall competitors only"),
    field("ffmc_rivil", "total footfall mall and competitors"),
    field("ff_morning_rivil", "morning footfall mall"),
    field("ff_midday_rivil", "midday footfall mall"),
    field("ff_afternoon_rivil", "afternoon footfall mall"),
    field("ff_evening_rivil", "evening footfall mall"),
    field("ffc_morning_rivil", "morning footfall competitors"),
    field("ffc_midday_rivil", "midday footfall competitors"),
    field("ffc_afternoon_rivil", "afternoon footfall competitors"),
    field("ffc_evening_rivil", "evening footfall competitors"),
    field("ffc_week_rivil", "weekday footfall competitors"),
    field("ffc_weekend_rivil", "weekend footfall competitors"),
    field(
        "income_class",
        "dominant income class, uses a capital first letter for each word",
    ),
    field("ff_week_rivil", "weekday footfall mall"),
    field("ff_weekend_rivil", "weekend footfall mall"),
];

const TRAFFIC_SCHEMA: &[SchemaField] = &[
    field("day", "Day of week (Monday-Sunday)"),
    field("avg_traffic_den", "Average daily traffic density"),
    field("avg_hits", "Average daily traffic count"),
    field("total_hits", "Total traffic count for period"),
    field("daily_ts", "Timestamp for start of day"),
];

/// Profiles in tie-break order: on equal keyword scores the earlier entry wins.
static PROFILES: [DomainProfile; 2] = [
    DomainProfile {
        domain: Domain::Footfall,
        keywords: FOOTFALL_KEYWORDS,
        type_name: "mtn:mtn_rivonia_ff_dataset",
        schema: FOOTFALL_SCHEMA,
    },
    DomainProfile {
        domain: Domain::Traffic,
        keywords: TRAFFIC_KEYWORDS,
        type_name: "mtn:mtn_rivonia_geom_traffic",
        schema: TRAFFIC_SCHEMA,
    },
];

/// Immutable domain configuration, fixed for the life of the process.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    profiles: &'static [DomainProfile],
    pub service: WfsService,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            profiles: &PROFILES,
            service: WFS_SERVICE,
        }
    }

    pub fn profiles(&self) -> &'static [DomainProfile] {
        self.profiles
    }

    pub fn profile(&self, domain: Domain) -> &'static DomainProfile {
        // Every Domain variant has an entry in PROFILES.
        self.profiles
            .iter()
            .find(|p| p.domain == domain)
            .unwrap_or(&PROFILES[0])
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
