//! Plain-text reporter.

use std::collections::BTreeSet;
use std::fmt::{Display, Write};

use netconform_core::errors::OutlierError;
use serde_json::Value;

use super::Reporter;
use crate::fleet::ServerSet;
use crate::outliers::{Hypothesis, NamedStructureOutlierSet, OutlierSet, OutliersAnswer};

/// Human-readable report. Property findings come first, then named
/// structure findings, each followed by its outlier and conformer lists.
pub struct TextReporter;

impl Reporter for TextReporter {
    fn name(&self) -> &'static str {
        "text"
    }

    fn generate(&self, answer: &OutliersAnswer) -> Result<String, String> {
        if answer.is_empty() {
            return Ok(String::new());
        }

        let mut out = String::from("Results for outliers\n");
        for finding in &answer.server_outliers {
            write_property_finding(&mut out, finding).map_err(|e| e.to_string())?;
        }
        for finding in &answer.named_structure_outliers {
            write_structure_finding(&mut out, finding)?;
        }
        Ok(out)
    }
}

fn write_property_finding(out: &mut String, finding: &OutlierSet<ServerSet>) -> std::fmt::Result {
    writeln!(
        out,
        "  Hypothesis: every node has the following set of {}: {}",
        finding.name,
        bracketed(&finding.definition)
    )?;
    write_partition(out, &finding.conformers, &finding.outliers)
}

/// Fails for a hypothesis that never produces structure findings.
fn write_structure_finding(
    out: &mut String,
    finding: &NamedStructureOutlierSet<Value>,
) -> Result<(), String> {
    let headline = match finding.hypothesis {
        Hypothesis::SameName => {
            let quantifier = if finding.named_structure.is_some() {
                "every"
            } else {
                "no"
            };
            format!(
                "  Hypothesis: {} node should define a {} named {}",
                quantifier, finding.struct_type, finding.name
            )
        }
        Hypothesis::SameDefinition => format!(
            "  Hypothesis: every {} named {} has the same definition",
            finding.struct_type, finding.name
        ),
        Hypothesis::SameServers => {
            return Err(OutlierError::UnknownHypothesis(finding.hypothesis.to_string()).to_string());
        }
    };
    out.push_str(&headline);
    out.push('\n');
    write_partition(out, &finding.conformers, &finding.outliers).map_err(|e| e.to_string())
}

fn write_partition(
    out: &mut String,
    conformers: &BTreeSet<String>,
    outliers: &BTreeSet<String>,
) -> std::fmt::Result {
    writeln!(out, "  Outliers: {}", bracketed(outliers))?;
    writeln!(out, "  Conformers: {}", bracketed(conformers))?;
    writeln!(out)
}

/// `[a, b, c]`
fn bracketed<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let joined = items
        .into_iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn structure(
        hypothesis: Hypothesis,
        named_structure: Option<Value>,
    ) -> NamedStructureOutlierSet<Value> {
        NamedStructureOutlierSet {
            hypothesis,
            struct_type: "RoutingPolicy".to_string(),
            name: "routemap1".to_string(),
            named_structure,
            conformers: set(&["a", "b", "c", "d"]),
            outliers: set(&["e"]),
        }
    }

    #[test]
    fn test_empty_answer_renders_nothing() {
        assert_eq!(TextReporter.generate(&OutliersAnswer::default()).unwrap(), "");
    }

    #[test]
    fn test_same_name_present_majority() {
        let answer =
            OutliersAnswer::new(vec![structure(Hypothesis::SameName, Some(json!(1)))], vec![]);
        let text = TextReporter.generate(&answer).unwrap();
        assert_eq!(
            text,
            "Results for outliers\n\
             \x20 Hypothesis: every node should define a RoutingPolicy named routemap1\n\
             \x20 Outliers: [e]\n\
             \x20 Conformers: [a, b, c, d]\n\n"
        );
    }

    #[test]
    fn test_same_name_absent_majority() {
        let answer = OutliersAnswer::new(vec![structure(Hypothesis::SameName, None)], vec![]);
        let text = TextReporter.generate(&answer).unwrap();
        assert!(
            text.contains("  Hypothesis: no node should define a RoutingPolicy named routemap1\n")
        );
    }

    #[test]
    fn test_same_definition() {
        let answer = OutliersAnswer::new(
            vec![structure(Hypothesis::SameDefinition, Some(json!({"x": 1})))],
            vec![],
        );
        let text = TextReporter.generate(&answer).unwrap();
        let headline = "  Hypothesis: every RoutingPolicy named routemap1 \
                        has the same definition\n";
        assert!(text.contains(headline));
    }

    #[test]
    fn test_property_finding() {
        let answer = OutliersAnswer::new(
            vec![],
            vec![OutlierSet {
                name: "NtpServers".to_string(),
                definition: set(&["10.0.0.1", "10.0.0.2"]),
                conformers: set(&["a", "b", "c"]),
                outliers: set(&["d"]),
            }],
        );
        let text = TextReporter.generate(&answer).unwrap();
        assert!(text.contains(
            "  Hypothesis: every node has the following set of NtpServers: [10.0.0.1, 10.0.0.2]\n"
        ));
        assert!(text.contains("  Outliers: [d]\n  Conformers: [a, b, c]\n\n"));
    }

    #[test]
    fn test_structure_finding_under_same_servers_is_rejected() {
        let answer: OutliersAnswer = serde_json::from_value(json!({
            "namedStructureOutliers": [{
                "hypothesis": "sameServers",
                "structType": "IpAccessList",
                "name": "acl1",
                "namedStructure": {"lines": []},
                "conformers": ["a", "b", "c"],
                "outliers": ["d"]
            }],
            "serverOutliers": []
        }))
        .unwrap();

        let err = TextReporter.generate(&answer).unwrap_err();
        assert_eq!(err, "Unexpected outlier detection hypothesis: sameServers");
    }
}
