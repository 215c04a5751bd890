//! CX attribute values and their literal forms.

use cxrdf_graph::vocab::xsd;
use cxrdf_graph::{Literal, NamedNode};
use log::debug;
use serde::{Deserialize, Serialize};

/// Value of a CX attribute as it appears in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// JSON `null`
    Null,
    /// JSON boolean
    Bool(bool),
    /// JSON integer
    Integer(i64),
    /// JSON number with a fractional part (or outside `i64`)
    Double(f64),
    /// JSON string
    String(String),
    /// JSON array
    List(Vec<AttributeValue>),
}

impl AttributeValue {
    /// Literals for this value, one per list element.
    ///
    /// `data_type` is the CX `d` field. Strings declared as `double`,
    /// `integer`, `long` or `boolean` become typed literals when their
    /// lexical form parses; everything else stays a plain string. `null`
    /// yields nothing.
    pub fn to_literals(&self, data_type: Option<&str>) -> Vec<Literal> {
        let element_type = data_type.map(|d| d.strip_prefix("list_of_").unwrap_or(d));
        let mut literals = Vec::new();
        self.collect_literals(element_type, &mut literals);
        literals
    }

    /// String elements of this value (scalars and list members).
    pub fn strings(&self) -> Vec<&str> {
        match self {
            AttributeValue::String(s) => vec![s.as_str()],
            AttributeValue::List(items) => items.iter().flat_map(|v| v.strings()).collect(),
            _ => Vec::new(),
        }
    }

    fn collect_literals(&self, element_type: Option<&str>, out: &mut Vec<Literal>) {
        match self {
            AttributeValue::Null => {}
            AttributeValue::Bool(b) => out.push(Literal::from(*b)),
            AttributeValue::Integer(i) => out.push(match element_type {
                Some("double") => Literal::from(*i as f64),
                Some("long") => long_literal(*i),
                _ => Literal::from(*i),
            }),
            AttributeValue::Double(d) => out.push(Literal::from(*d)),
            AttributeValue::String(s) => out.push(typed_string(s, element_type)),
            AttributeValue::List(items) => {
                for item in items {
                    item.collect_literals(element_type, out);
                }
            }
        }
    }
}

fn typed_string(value: &str, element_type: Option<&str>) -> Literal {
    let parsed = match element_type {
        Some("double") => value.trim().parse::<f64>().ok().map(Literal::from),
        Some("integer") => value.trim().parse::<i64>().ok().map(Literal::from),
        Some("long") => value.trim().parse::<i64>().ok().map(long_literal),
        Some("boolean") => match value.trim().to_ascii_lowercase().as_str() {
            "true" => Some(Literal::from(true)),
            "false" => Some(Literal::from(false)),
            _ => None,
        },
        _ => return Literal::new_simple_literal(value),
    };

    parsed.unwrap_or_else(|| {
        debug!("Value {value:?} does not parse as {element_type:?}, keeping it as a string");
        Literal::new_simple_literal(value)
    })
}

fn long_literal(value: i64) -> Literal {
    Literal::new_typed_literal(value.to_string(), NamedNode::new_unchecked(xsd::LONG))
}
