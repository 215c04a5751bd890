//! Record shapes of the CX aspects the exporter understands.

use super::value::AttributeValue;
use serde::{Deserialize, Deserializer, Serialize};

/// CX identifier of a node, edge, citation or support.
pub type CxId = i64;

/// Entry of the `nodes` aspect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CxNode {
    /// CX-assigned node id
    #[serde(rename = "@id")]
    pub id: CxId,
    /// Display name
    #[serde(rename = "n", default)]
    pub name: Option<String>,
    /// External identifier the node represents (often a CURIE)
    #[serde(rename = "r", default)]
    pub represents: Option<String>,
}

/// Entry of the `edges` aspect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CxEdge {
    /// CX-assigned edge id
    #[serde(rename = "@id")]
    pub id: CxId,
    /// Source node id
    #[serde(rename = "s")]
    pub source: CxId,
    /// Target node id
    #[serde(rename = "t")]
    pub target: CxId,
    /// Interaction type (e.g. `increases`)
    #[serde(rename = "i", default)]
    pub interaction: Option<String>,
}

/// Entry of the `nodeAttributes` or `edgeAttributes` aspect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CxAttribute {
    /// Id of the node or edge this attribute belongs to
    #[serde(rename = "po")]
    pub property_of: CxId,
    /// Attribute name
    #[serde(rename = "n")]
    pub name: String,
    /// Attribute value (scalar or list)
    #[serde(rename = "v")]
    pub value: AttributeValue,
    /// CX data type, e.g. `string`, `double`, `list_of_string`
    #[serde(rename = "d", default)]
    pub data_type: Option<String>,
}

/// Entry of the `networkAttributes` aspect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CxNetworkAttribute {
    /// Attribute name
    #[serde(rename = "n")]
    pub name: String,
    /// Attribute value (scalar or list)
    #[serde(rename = "v")]
    pub value: AttributeValue,
    /// CX data type
    #[serde(rename = "d", default)]
    pub data_type: Option<String>,
}

/// Entry of the `citations` aspect (Dublin Core fields).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CxCitation {
    /// CX-assigned citation id
    #[serde(rename = "@id")]
    pub id: CxId,
    /// `dc:title`
    #[serde(rename = "dc:title", default)]
    pub title: Option<String>,
    /// `dc:contributor`
    #[serde(rename = "dc:contributor", default)]
    pub contributor: Option<String>,
    /// `dc:identifier`
    #[serde(rename = "dc:identifier", default)]
    pub identifier: Option<String>,
    /// `dc:type`
    #[serde(rename = "dc:type", default)]
    pub citation_type: Option<String>,
    /// `dc:description`
    #[serde(rename = "dc:description", default)]
    pub description: Option<String>,
}

/// Entry of the `supports` aspect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CxSupport {
    /// CX-assigned support id
    #[serde(rename = "@id")]
    pub id: CxId,
    /// Supporting text
    #[serde(default)]
    pub text: Option<String>,
    /// Citation this support comes from
    #[serde(default)]
    pub citation: Option<CxId>,
}

/// Entry of `edgeCitations` / `nodeCitations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CxCitationLink {
    /// Ids of the nodes or edges being cited
    #[serde(rename = "po", deserialize_with = "one_or_many")]
    pub property_of: Vec<CxId>,
    /// Citation ids
    #[serde(deserialize_with = "one_or_many")]
    pub citations: Vec<CxId>,
}

/// Entry of `edgeSupports` / `nodeSupports`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CxSupportLink {
    /// Ids of the nodes or edges being supported
    #[serde(rename = "po", deserialize_with = "one_or_many")]
    pub property_of: Vec<CxId>,
    /// Support ids
    #[serde(deserialize_with = "one_or_many")]
    pub supports: Vec<CxId>,
}

/// One `prefix → namespace` declaration from the `@context` aspect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CxNamespace {
    /// Declared prefix
    pub prefix: String,
    /// Namespace URI
    pub uri: String,
}

// Some writers emit a bare id where a list is expected
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<CxId>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(CxId),
        Many(Vec<CxId>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(id) => vec![id],
        OneOrMany::Many(ids) => ids,
    })
}
