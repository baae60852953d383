//! Query entry point: filter the fleet, gather equivalence classes, apply
//! the hypothesis, rank, and assemble a sorted answer.

use std::collections::BTreeSet;
use std::time::Instant;

use netconform_core::config::{NetconformConfig, OutliersConfig};
use netconform_core::constants::OUTLIERS_THRESHOLD;
use netconform_core::errors::{AnalysisError, ConfigError, OutlierError};
use netconform_core::tracing::metrics;
use rayon::prelude::*;
use serde_json::Value;

use super::hypothesis::{to_name_only, Hypothesis};
use super::properties;
use super::ranking::rank_significant;
use super::types::{NamedStructureOutlierSet, OutliersAnswer};
use crate::equivalence::{EquivalenceSource, NamedStructureEquivalenceSets};
use crate::fleet::{FleetSnapshot, NodeFilter};
use crate::report;

/// Parameters of one outliers query.
#[derive(Debug, Clone, Default)]
pub struct OutliersQuery {
    pub hypothesis: Hypothesis,
    pub node_filter: NodeFilter,
    /// Structure types to analyze. Empty means all.
    pub named_struct_types: BTreeSet<String>,
}

impl OutliersQuery {
    pub fn new(hypothesis: Hypothesis) -> Self {
        Self {
            hypothesis,
            ..Default::default()
        }
    }

    pub fn with_node_regex(mut self, pattern: &str) -> Result<Self, OutlierError> {
        self.node_filter = NodeFilter::new(pattern)?;
        Ok(self)
    }

    pub fn with_struct_types<I, S>(mut self, struct_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.named_struct_types = struct_types.into_iter().map(Into::into).collect();
        self
    }

    /// Build a query from config. The hypothesis name and node regex are
    /// both checked here, before any analysis runs.
    pub fn from_config(config: &OutliersConfig) -> Result<Self, OutlierError> {
        let hypothesis: Hypothesis = config.effective_hypothesis().parse()?;
        Ok(Self::new(hypothesis)
            .with_node_regex(config.effective_node_regex())?
            .with_struct_types(config.named_struct_types.iter().cloned()))
    }
}

/// Runs outliers queries against one immutable fleet snapshot.
pub struct OutlierEngine<'a> {
    fleet: &'a FleetSnapshot,
    source: &'a dyn EquivalenceSource,
}

impl<'a> OutlierEngine<'a> {
    pub fn new(fleet: &'a FleetSnapshot, source: &'a dyn EquivalenceSource) -> Self {
        Self { fleet, source }
    }

    /// Answer `query`. Either every subject is analyzed or the whole query
    /// fails; there are no partial answers.
    pub fn answer(&self, query: &OutliersQuery) -> Result<OutliersAnswer, OutlierError> {
        let start = Instant::now();
        let nodes = query.node_filter.matching_nodes(self.fleet);

        if nodes.is_empty() {
            tracing::info!(
                { metrics::NODE_REGEX } = query.node_filter.pattern(),
                "no devices match the node filter"
            );
            return Ok(OutliersAnswer::default());
        }

        let answer = match query.hypothesis {
            Hypothesis::SameDefinition | Hypothesis::SameName => OutliersAnswer::new(
                self.named_structure_outliers(query, &nodes)?,
                Vec::new(),
            ),
            Hypothesis::SameServers => {
                OutliersAnswer::new(Vec::new(), properties::scan_all(self.fleet, &nodes)?)
            }
        };

        tracing::info!(
            { metrics::HYPOTHESIS } = %query.hypothesis,
            { metrics::IN_SCOPE_DEVICES } = nodes.len(),
            { metrics::FINDINGS } = answer.finding_count(),
            { metrics::QUERY_TIME_MS } = start.elapsed().as_millis() as u64,
            "outliers query complete"
        );
        Ok(answer)
    }

    fn named_structure_outliers(
        &self,
        query: &OutliersQuery,
        nodes: &BTreeSet<String>,
    ) -> Result<Vec<NamedStructureOutlierSet<Value>>, OutlierError> {
        let equivalence_sets =
            self.source
                .equivalence_sets(self.fleet, nodes, &query.named_struct_types)?;

        let per_type: Vec<Vec<NamedStructureOutlierSet<Value>>> = equivalence_sets
            .into_par_iter()
            .map(|(_, sets)| struct_type_outliers(query.hypothesis, sets, nodes))
            .collect::<Result<_, _>>()?;

        Ok(per_type.into_iter().flatten().collect())
    }
}

/// Rank every name of one structure type under `hypothesis`.
fn struct_type_outliers(
    hypothesis: Hypothesis,
    mut sets: NamedStructureEquivalenceSets<Value>,
    nodes: &BTreeSet<String>,
) -> Result<Vec<NamedStructureOutlierSet<Value>>, OutlierError> {
    sets.ensure_classes()?;

    let dropped = sets.retain_nodes(nodes);
    if dropped > 0 {
        tracing::warn!(
            { metrics::STRUCT_TYPE } = sets.struct_type(),
            { metrics::DROPPED_DEVICES } = dropped,
            "equivalence source returned devices outside the node filter"
        );
    }
    sets.clean();

    let sets = match hypothesis {
        Hypothesis::SameName => to_name_only(sets, nodes),
        Hypothesis::SameDefinition => sets,
        Hypothesis::SameServers => {
            return Err(OutlierError::UnknownHypothesis(hypothesis.to_string()));
        }
    };

    let (struct_type, by_name) = sets.into_parts();
    let mut findings = Vec::new();
    for (name, classes) in by_name {
        let subject = format!("Named structure {struct_type} {name}");
        let Some(ranked) = rank_significant(&subject, classes, OUTLIERS_THRESHOLD)? else {
            continue;
        };
        tracing::debug!(
            { metrics::STRUCT_TYPE } = %struct_type,
            { metrics::STRUCT_NAME } = %name,
            { metrics::OUTLIERS } = ranked.outliers.len(),
            "named structure outliers found"
        );
        findings.push(NamedStructureOutlierSet {
            hypothesis,
            struct_type: struct_type.clone(),
            name,
            named_structure: ranked.majority,
            conformers: ranked.conformers,
            outliers: ranked.outliers,
        });
    }
    Ok(findings)
}

/// Build a query from `config`, answer it, and render the answer in the
/// configured report format.
pub fn run(
    config: &NetconformConfig,
    fleet: &FleetSnapshot,
    source: &dyn EquivalenceSource,
) -> Result<String, AnalysisError> {
    let format = config.report.effective_format();
    let reporter = report::create_reporter(format).ok_or_else(|| ConfigError::ValidationFailed {
        field: "report.format".to_string(),
        message: format!(
            "unknown format '{format}', expected one of {:?}",
            report::available_formats()
        ),
    })?;

    let query = OutliersQuery::from_config(&config.outliers)?;
    let answer = OutlierEngine::new(fleet, source).answer(&query)?;
    reporter.generate(&answer).map_err(AnalysisError::Report)
}
