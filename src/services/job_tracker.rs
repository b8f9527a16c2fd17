//! In-memory tracking for background analysis jobs.
//!
//! Each submitted job gets a uuid, a status following the
//! pending → running → completed/failed lifecycle, the submitted parameter
//! blob, timestamped progress logs, and a result or error once finished.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// A single progress log entry.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LogEntry {
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub level: LogLevel,
    pub message: String,
}

#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Job status enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// Accepted but not yet picked up by the runner.
    Pending,
    Running,
    Completed,
    Failed,
}

impl JobStatus {
    /// Whether the job can still make progress.
    pub fn is_active(self) -> bool {
        matches!(self, JobStatus::Pending | JobStatus::Running)
    }
}

/// Job record: parameters, lifecycle timestamps, logs, and outcome.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Job {
    pub job_id: String,
    pub status: JobStatus,
    /// Parameters the job was submitted with, kept as an opaque blob.
    pub params: serde_json::Value,
    pub logs: Vec<LogEntry>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub completed_at: Option<chrono::DateTime<chrono::Utc>>,
    /// Result payload for completed jobs.
    pub result: Option<serde_json::Value>,
    /// Failure message for failed jobs.
    pub error: Option<String>,
}

/// Shared in-memory job tracker.
#[derive(Clone)]
pub struct JobTracker {
    jobs: Arc<RwLock<HashMap<String, Job>>>,
}

impl JobTracker {
    pub fn new() -> Self {
        Self {
            jobs: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a new pending job and return its ID.
    pub fn create_job(&self, params: serde_json::Value) -> String {
        let job_id = Uuid::new_v4().to_string();
        let job = Job {
            job_id: job_id.clone(),
            status: JobStatus::Pending,
            params,
            logs: vec![],
            created_at: chrono::Utc::now(),
            completed_at: None,
            result: None,
            error: None,
        };
        self.jobs.write().insert(job_id.clone(), job);
        job_id
    }

    /// Mark a job as picked up by the runner.
    pub fn start_job(&self, job_id: &str) {
        let mut jobs = self.jobs.write();
        if let Some(job) = jobs.get_mut(job_id) {
            job.status = JobStatus::Running;
        }
    }

    /// Append a progress log entry.
    pub fn log(&self, job_id: &str, level: LogLevel, message: impl Into<String>) {
        let mut jobs = self.jobs.write();
        if let Some(job) = jobs.get_mut(job_id) {
            job.logs.push(LogEntry {
                timestamp: chrono::Utc::now(),
                level,
                message: message.into(),
            });
        }
    }

    /// Mark a job as completed with an optional result payload.
    pub fn complete_job(&self, job_id: &str, result: Option<serde_json::Value>) {
        let mut jobs = self.jobs.write();
        if let Some(job) = jobs.get_mut(job_id) {
            job.status = JobStatus::Completed;
            job.completed_at = Some(chrono::Utc::now());
            job.result = result;
        }
    }

    /// Mark a job as failed, recording the failure both as the job error and
    /// as a final log entry.
    pub fn fail_job(&self, job_id: &str, error_message: impl Into<String>) {
        let message = error_message.into();
        let mut jobs = self.jobs.write();
        if let Some(job) = jobs.get_mut(job_id) {
            job.status = JobStatus::Failed;
            job.completed_at = Some(chrono::Utc::now());
            job.error = Some(message.clone());
            job.logs.push(LogEntry {
                timestamp: chrono::Utc::now(),
                level: LogLevel::Error,
                message,
            });
        }
    }

    pub fn get_job(&self, job_id: &str) -> Option<Job> {
        self.jobs.read().get(job_id).cloned()
    }

    pub fn get_logs(&self, job_id: &str) -> Vec<LogEntry> {
        self.jobs
            .read()
            .get(job_id)
            .map(|job| job.logs.clone())
            .unwrap_or_default()
    }
}

impl Default for JobTracker {
    fn default() -> Self {
        Self::new()
    }
}
