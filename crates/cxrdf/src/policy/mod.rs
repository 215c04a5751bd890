//! Export policies.
//!
//! A policy decides which triple shapes represent nodes, edges and
//! attributes. Identity, document linkage and attachments come from the
//! shared [`Exporter`] and are the same under every policy.
//!
//! | Policy      | Attributes                          | Edges                                   |
//! |-------------|-------------------------------------|-----------------------------------------|
//! | `aspect`    | attribute entities                  | edge entity with source/target links    |
//! | `predicate` | `(owner, cxa:<name>, value)`        | edge entity with source/target links    |
//! | `abstract`  | as `predicate`, CURIEs resolved     | plus `(source, cxi:<interaction>, target)` |

mod abstraction;
mod aspect;
mod predicate;

pub use abstraction::AbstractExporter;
pub use aspect::AspectExporter;
pub use predicate::PredicateExporter;

use crate::error::{ExportError, Result};
use crate::exporter::{Export, Exporter};
use crate::stats::ExportStats;
use cxrdf_graph::RdfGraph;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Runs one policy over an exporter.
pub type ExportFn = fn(Exporter, &Value) -> Result<(RdfGraph, ExportStats)>;

/// Export policy selectable by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Mirror CX aspects as entities
    #[default]
    Aspect,
    /// Attributes as direct predicates
    Predicate,
    /// Network-level interaction statements
    Abstract,
}

// Indexed by `Policy as usize`
const DISPATCH: [ExportFn; 3] = [
    run::<AspectExporter>,
    run::<PredicateExporter>,
    run::<AbstractExporter>,
];

fn run<P: Export>(exporter: Exporter, cx_json: &Value) -> Result<(RdfGraph, ExportStats)> {
    P::new(exporter).export_with_stats(cx_json)
}

impl Policy {
    /// Every policy.
    pub const ALL: [Policy; 3] = [Policy::Aspect, Policy::Predicate, Policy::Abstract];

    /// Name accepted by [`Policy::from_str`].
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Aspect => AspectExporter::NAME,
            Policy::Predicate => PredicateExporter::NAME,
            Policy::Abstract => AbstractExporter::NAME,
        }
    }

    /// Export function for this policy.
    pub fn export_fn(self) -> ExportFn {
        DISPATCH[self as usize]
    }

    /// Run this policy over `exporter`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Structure`] for malformed CX input.
    pub fn run(self, exporter: Exporter, cx_json: &Value) -> Result<(RdfGraph, ExportStats)> {
        (self.export_fn())(exporter, cx_json)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Policy::ALL
            .into_iter()
            .find(|policy| policy.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ExportError::UnknownPolicy {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_names() {
        assert_eq!("aspect".parse::<Policy>().unwrap(), Policy::Aspect);
        assert_eq!(" Predicate ".parse::<Policy>().unwrap(), Policy::Predicate);
        assert_eq!("ABSTRACT".parse::<Policy>().unwrap(), Policy::Abstract);
    }

    #[test]
    fn test_unknown_name() {
        let err = "reified".parse::<Policy>().unwrap_err();
        assert!(matches!(err, ExportError::UnknownPolicy { ref name } if name == "reified"));
        assert!("".parse::<Policy>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for policy in Policy::ALL {
            assert_eq!(policy.to_string().parse::<Policy>().unwrap(), policy);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_value(Policy::Abstract).unwrap(), json!("abstract"));
        let policy: Policy = serde_json::from_value(json!("predicate")).unwrap();
        assert_eq!(policy, Policy::Predicate);
    }

    #[test]
    fn test_dispatch_table_matches_policy() {
        let cx = json!([{"nodes": [{"@id": 0}]}]);
        for policy in Policy::ALL {
            let (_, stats) = policy.run(Exporter::new(), &cx).unwrap();
            assert_eq!(stats.policy, policy.name());
        }
    }
}
