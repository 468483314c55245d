#![allow(dead_code)]

use schemasync_core::{
    async_trait,
    driver::{ColumnInfo, Connection, ProgressMonitor, Rows, Value},
    Error, Result,
};

/// A connection that answers queries from a script and records everything
/// it is asked to run.
#[derive(Default)]
pub struct ScriptedConnection {
    answers: Vec<Answer>,

    /// Queries run, with their parameters, in order.
    pub queries: Vec<(String, Vec<Value>)>,

    /// Statements executed, in order.
    pub executed: Vec<String>,
}

struct Answer {
    /// Matches any query containing this text.
    needle: String,

    /// When set, only matches queries bound with these parameters.
    params: Option<Vec<Value>>,

    outcome: Outcome,
}

enum Outcome {
    Rows {
        columns: Vec<ColumnInfo>,
        rows: Vec<Vec<Value>>,
    },
    Fail(&'static str),
}

pub fn columns(names: &[&str]) -> Vec<ColumnInfo> {
    names
        .iter()
        .map(|name| ColumnInfo {
            name: name.to_string(),
            auto_increment: false,
        })
        .collect()
}

impl ScriptedConnection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(&mut self, needle: &str, names: &[&str], rows: Vec<Vec<Value>>) -> &mut Self {
        self.answers.push(Answer {
            needle: needle.to_string(),
            params: None,
            outcome: Outcome::Rows {
                columns: columns(names),
                rows,
            },
        });
        self
    }

    pub fn answer_for(
        &mut self,
        needle: &str,
        params: Vec<Value>,
        names: &[&str],
        rows: Vec<Vec<Value>>,
    ) -> &mut Self {
        self.answers.push(Answer {
            needle: needle.to_string(),
            params: Some(params),
            outcome: Outcome::Rows {
                columns: columns(names),
                rows,
            },
        });
        self
    }

    /// Answers with an empty result set described by `columns`.
    pub fn answer_columns(&mut self, needle: &str, columns: Vec<ColumnInfo>) -> &mut Self {
        self.answers.push(Answer {
            needle: needle.to_string(),
            params: None,
            outcome: Outcome::Rows {
                columns,
                rows: vec![],
            },
        });
        self
    }

    pub fn fail(&mut self, needle: &str, message: &'static str) -> &mut Self {
        self.answers.push(Answer {
            needle: needle.to_string(),
            params: None,
            outcome: Outcome::Fail(message),
        });
        self
    }

    pub fn queried(&self, needle: &str) -> bool {
        self.queries.iter().any(|(sql, _)| sql.contains(needle))
    }
}

#[async_trait]
impl Connection for ScriptedConnection {
    async fn query(&mut self, sql: &str, params: &[Value]) -> Result<Rows> {
        self.queries.push((sql.to_string(), params.to_vec()));

        let answer = self.answers.iter().find(|answer| {
            sql.contains(&answer.needle)
                && answer
                    .params
                    .as_ref()
                    .map_or(true, |expected| expected[..] == params[..])
        });

        match answer.map(|answer| &answer.outcome) {
            Some(Outcome::Rows { columns, rows }) => {
                Ok(Rows::from_values(columns.clone(), rows.clone()))
            }
            Some(Outcome::Fail(message)) => Err(Error::driver_operation_failed(
                std::io::Error::new(std::io::ErrorKind::Other, *message),
            )),
            None => Ok(Rows::from_values(vec![], vec![])),
        }
    }

    async fn execute(&mut self, sql: &str) -> Result<u64> {
        self.executed.push(sql.to_string());
        Ok(0)
    }
}

/// Records progress calls; cancels once `cancel_after` units of work are done.
#[derive(Debug, Default)]
pub struct RecordingProgress {
    pub events: Vec<String>,
    pub worked: usize,
    pub cancel_after: Option<usize>,
}

impl RecordingProgress {
    pub fn cancel_after(worked: usize) -> Self {
        Self {
            cancel_after: Some(worked),
            ..Self::default()
        }
    }
}

impl ProgressMonitor for RecordingProgress {
    fn begin_task(&mut self, name: &str, total: Option<usize>) {
        self.events.push(format!("begin {name} {total:?}"));
    }

    fn set_task_name(&mut self, name: &str) {
        self.events.push(format!("task {name}"));
    }

    fn worked(&mut self, amount: usize) {
        self.worked += amount;
    }

    fn done(&mut self) {
        self.events.push("done".to_string());
    }

    fn is_canceled(&self) -> bool {
        self.cancel_after.is_some_and(|limit| self.worked >= limit)
    }
}
