//! Job payload types
//!
//! A [`Job`] is the JSON document sent to the GEMtractor execute endpoint.
//! It carries the export options, the filter criteria and the verbatim text
//! of the model file.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator the service expects between the genes of an enzyme complex
pub const ENZYME_COMPLEX_SEPARATOR: &str = " + ";

/// Network representation the service should extract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum NetworkType {
    /// Enzyme network
    #[default]
    En,
    /// Reaction network
    Rn,
    /// Metabolite network
    Mn,
}

impl NetworkType {
    /// Wire value of this network type
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkType::En => "en",
            NetworkType::Rn => "rn",
            NetworkType::Mn => "mn",
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for NetworkType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for NetworkType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(NetworkType::En),
            "rn" => Ok(NetworkType::Rn),
            "mn" => Ok(NetworkType::Mn),
            _ => Err(format!(
                "Invalid network_type '{s}'. Must be one of: en, rn, mn"
            )),
        }
    }
}

/// File format of the exported network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum NetworkFormat {
    Sbml,
    #[default]
    Dot,
    Graphml,
    Gml,
    Csv,
}

impl NetworkFormat {
    /// Wire value of this format
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkFormat::Sbml => "sbml",
            NetworkFormat::Dot => "dot",
            NetworkFormat::Graphml => "graphml",
            NetworkFormat::Gml => "gml",
            NetworkFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for NetworkFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for NetworkFormat {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for NetworkFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sbml" => Ok(NetworkFormat::Sbml),
            "dot" => Ok(NetworkFormat::Dot),
            "graphml" => Ok(NetworkFormat::Graphml),
            "gml" => Ok(NetworkFormat::Gml),
            "csv" => Ok(NetworkFormat::Csv),
            _ => Err(format!(
                "Invalid network_format '{s}'. Must be one of: sbml, dot, graphml, gml, csv"
            )),
        }
    }
}

/// Export section of a job
///
/// The three optional flags are omitted from the payload when unset so that
/// the service applies its own defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ExportOptions {
    #[serde(default)]
    pub network_type: NetworkType,

    #[serde(default)]
    pub network_format: NetworkFormat,

    /// Drop reactions whose enzymes were all filtered out
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_reaction_enzymes_removed: Option<bool>,

    /// Drop reactions that lost one of their species to the filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_reaction_missing_species: Option<bool>,

    /// Do not invent enzymes for reactions without gene associations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discard_fake_enzymes: Option<bool>,
}

/// Filter section of a job
///
/// Each list names entities the service should remove from the model.
/// Element order is preserved on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub species: Vec<String>,

    #[serde(default)]
    pub reactions: Vec<String>,

    #[serde(default)]
    pub enzymes: Vec<String>,

    #[serde(default)]
    pub enzyme_complexes: Vec<String>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            species: vec!["a".to_string(), "d".to_string()],
            reactions: vec!["r2".to_string()],
            enzymes: vec!["gene_abc".to_string(), "gene_x".to_string()],
            enzyme_complexes: vec![
                "b + c".to_string(),
                "x + Y".to_string(),
                "b_098 + r_abc".to_string(),
            ],
        }
    }
}

impl FilterCriteria {
    /// An empty filter that keeps the whole model
    pub fn empty() -> Self {
        Self {
            species: Vec::new(),
            reactions: Vec::new(),
            enzymes: Vec::new(),
            enzyme_complexes: Vec::new(),
        }
    }

    /// Total number of filter entries across all lists
    pub fn len(&self) -> usize {
        self.species.len() + self.reactions.len() + self.enzymes.len() + self.enzyme_complexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks every enzyme complex for the `" + "` separator
    pub fn validate(&self) -> Result<(), String> {
        for complex in &self.enzyme_complexes {
            if !complex.contains(ENZYME_COMPLEX_SEPARATOR) {
                return Err(format!(
                    "Invalid enzyme complex '{complex}'. Genes must be joined with '{ENZYME_COMPLEX_SEPARATOR}'"
                ));
            }
        }
        Ok(())
    }
}

/// The document posted to the execute endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub export: ExportOptions,
    pub filter: FilterCriteria,
    /// Verbatim model text
    pub file: String,
}

impl Job {
    pub fn new(export: ExportOptions, filter: FilterCriteria, file: impl Into<String>) -> Self {
        Self {
            export,
            filter,
            file: file.into(),
        }
    }

    /// Serializes the job to its JSON wire form
    pub fn to_json(&self) -> crate::domain::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case("en", NetworkType::En)]
    #[test_case("RN", NetworkType::Rn)]
    #[test_case("mn", NetworkType::Mn)]
    fn test_network_type_from_str(input: &str, expected: NetworkType) {
        assert_eq!(input.parse::<NetworkType>().unwrap(), expected);
    }

    #[test_case("sbml", NetworkFormat::Sbml)]
    #[test_case("dot", NetworkFormat::Dot)]
    #[test_case("GraphML", NetworkFormat::Graphml)]
    #[test_case("gml", NetworkFormat::Gml)]
    #[test_case("csv", NetworkFormat::Csv)]
    fn test_network_format_from_str(input: &str, expected: NetworkFormat) {
        assert_eq!(input.parse::<NetworkFormat>().unwrap(), expected);
    }

    #[test]
    fn test_deserialize_ignores_case() {
        let export: ExportOptions =
            serde_json::from_value(json!({"network_type": "MN", "network_format": "Csv"}))
                .unwrap();
        assert_eq!(export.network_type, NetworkType::Mn);
        assert_eq!(export.network_format, NetworkFormat::Csv);

        // Serialized values stay lowercase
        let value = serde_json::to_value(&export).unwrap();
        assert_eq!(value["network_type"], "mn");
        assert_eq!(value["network_format"], "csv");

        let err = serde_json::from_value::<ExportOptions>(json!({"network_type": "xn"}))
            .unwrap_err();
        assert!(err.to_string().contains("en, rn, mn"));
    }

    #[test]
    fn test_invalid_network_values() {
        assert!("xn".parse::<NetworkType>().is_err());
        assert!("png".parse::<NetworkFormat>().is_err());
    }

    #[test]
    fn test_reference_job_json() {
        let job = Job::new(ExportOptions::default(), FilterCriteria::default(), "<model/>");
        let value: serde_json::Value = serde_json::from_str(&job.to_json().unwrap()).unwrap();

        assert_eq!(
            value,
            json!({
                "export": {"network_type": "en", "network_format": "dot"},
                "filter": {
                    "species": ["a", "d"],
                    "reactions": ["r2"],
                    "enzymes": ["gene_abc", "gene_x"],
                    "enzyme_complexes": ["b + c", "x + Y", "b_098 + r_abc"]
                },
                "file": "<model/>"
            })
        );
    }

    #[test]
    fn test_export_flags_serialized_when_set() {
        let export = ExportOptions {
            network_type: NetworkType::Rn,
            network_format: NetworkFormat::Sbml,
            remove_reaction_enzymes_removed: Some(false),
            remove_reaction_missing_species: None,
            discard_fake_enzymes: Some(true),
        };
        let value = serde_json::to_value(&export).unwrap();
        assert_eq!(
            value,
            json!({
                "network_type": "rn",
                "network_format": "sbml",
                "remove_reaction_enzymes_removed": false,
                "discard_fake_enzymes": true
            })
        );
    }

    #[test]
    fn test_file_content_with_special_characters() {
        let content = "line \"one\"\n\tline two \\ ünïcødé\r\n";
        let job = Job::new(ExportOptions::default(), FilterCriteria::empty(), content);
        let parsed: Job = serde_json::from_str(&job.to_json().unwrap()).unwrap();
        assert_eq!(parsed.file, content);
    }

    #[test]
    fn test_filter_validate() {
        assert!(FilterCriteria::default().validate().is_ok());

        let mut filter = FilterCriteria::empty();
        filter.enzyme_complexes.push("b+c".to_string());
        let err = filter.validate().unwrap_err();
        assert!(err.contains("b+c"));
    }

    #[test]
    fn test_filter_len() {
        assert_eq!(FilterCriteria::default().len(), 8);
        assert!(FilterCriteria::empty().is_empty());
    }
}
