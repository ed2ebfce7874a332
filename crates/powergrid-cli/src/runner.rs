//! Scenario loading and execution.

use std::io::{Read, Write};

use powergrid_topology::demo::{self, Scenario};
use powergrid_topology::{process_queries, process_queries_strict};
use serde::Deserialize;

use crate::config::{RunnerConfig, ScenarioSource};
use crate::error::{Error, Result};

/// A scenario document: one scenario or a list of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ScenarioDocument {
    One(Scenario),
    Many(Vec<Scenario>),
}

impl From<ScenarioDocument> for Vec<Scenario> {
    fn from(doc: ScenarioDocument) -> Self {
        match doc {
            ScenarioDocument::One(s) => vec![s],
            ScenarioDocument::Many(list) => list,
        }
    }
}

/// A loaded scenario, with expected results when it is a reference scenario.
#[derive(Debug, Clone)]
pub struct Job {
    pub scenario: Scenario,
    pub expected: Option<Vec<i64>>,
}

/// Parse a JSON scenario document.
pub fn parse_scenarios(json: &str) -> Result<Vec<Scenario>> {
    let doc: ScenarioDocument = serde_json::from_str(json)?;
    let scenarios: Vec<Scenario> = doc.into();
    if scenarios.is_empty() {
        return Err(Error::InvalidInput("scenario document is empty".to_string()));
    }
    Ok(scenarios)
}

/// Load the jobs named by a scenario source.
pub fn load(source: &ScenarioSource) -> Result<Vec<Job>> {
    let scenarios = match source {
        ScenarioSource::Demo => {
            return Ok(demo::scenarios()
                .into_iter()
                .map(|(scenario, expected)| Job {
                    scenario,
                    expected: Some(expected),
                })
                .collect());
        }
        ScenarioSource::Stdin => {
            let mut json = String::new();
            std::io::stdin().read_to_string(&mut json)?;
            parse_scenarios(&json)?
        }
        ScenarioSource::File(path) => parse_scenarios(&std::fs::read_to_string(path)?)?,
    };
    Ok(scenarios
        .into_iter()
        .map(|scenario| Job {
            scenario,
            expected: None,
        })
        .collect())
}

/// Run one scenario.
pub fn run_scenario(scenario: &Scenario, strict: bool) -> Result<Vec<i64>> {
    let Scenario {
        station_count,
        connections,
        queries,
    } = scenario;
    if strict {
        Ok(process_queries_strict(*station_count, connections, queries)?)
    } else {
        Ok(process_queries(*station_count, connections, queries))
    }
}

/// Run every job, writing one JSON result array per line.
///
/// Returns the number of reference scenarios whose results diverged.
pub fn run<W: Write>(config: &RunnerConfig, jobs: &[Job], out: &mut W) -> Result<usize> {
    let mut mismatches = 0;
    for (index, job) in jobs.iter().enumerate() {
        let results = run_scenario(&job.scenario, config.strict)?;
        tracing::info!(
            index,
            stations = job.scenario.station_count,
            queries = job.scenario.queries.len(),
            results = results.len(),
            "scenario complete"
        );
        if let Some(expected) = &job.expected {
            if *expected != results {
                tracing::warn!(index, ?expected, ?results, "scenario diverged from reference");
                mismatches += 1;
            }
        }
        writeln!(out, "{}", serde_json::to_string(&results)?)?;
    }
    Ok(mismatches)
}

/// Like [`run`], but fails with [`Error::Diverged`] if any reference
/// scenario produced unexpected results.
pub fn run_checked<W: Write>(config: &RunnerConfig, jobs: &[Job], out: &mut W) -> Result<()> {
    match run(config, jobs, out)? {
        0 => Ok(()),
        mismatches => Err(Error::Diverged(mismatches)),
    }
}
