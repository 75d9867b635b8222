use serde::{Serialize, Deserialize};
use std::fmt;

pub const DEFAULT_OPTION_COLOR: &str = "#000";

/// Free-form poll status. Only `active` means anything to the service:
/// votes are accepted iff the status equals it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PollStatus(String);

impl PollStatus {
    pub const ACTIVE: &'static str = "active";

    pub fn active() -> Self {
        Self(Self::ACTIVE.to_string())
    }

    pub fn is_active(&self) -> bool {
        self.0 == Self::ACTIVE
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for PollStatus {
    fn from(status: String) -> Self {
        Self(status)
    }
}

impl From<&str> for PollStatus {
    fn from(status: &str) -> Self {
        Self(status.to_string())
    }
}

impl fmt::Display for PollStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Poll {
    #[serde(rename = "poll_str_id")]
    pub id: String,
    pub question: String,
    pub status: PollStatus,
    pub options: Vec<PollOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PollOption {
    #[serde(rename = "option_str_id")]
    pub id: String,
    pub text: String,
    pub color: String,
    #[serde(rename = "votes")]
    pub vote_count: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreatePollRequest {
    #[serde(default)]
    pub poll_str_id: Option<String>,
    pub question: String,
    pub options: Vec<OptionInput>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OptionInput {
    pub text: String,
    #[serde(default)]
    pub fav_color_poll: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct VoteRequest {
    pub option_str_id: String,
    #[serde(default)]
    pub user_identifier: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StatusUpdateRequest {
    pub status: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum VoteOutcome {
    #[serde(rename = "vote_counted")]
    Counted,
    #[serde(rename = "already_voted")]
    AlreadyVoted,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PollResults {
    pub poll_str_id: String,
    pub question: String,
    pub results: Vec<OptionResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptionResult {
    pub option_str_id: String,
    pub text: String,
    pub color: String,
    pub votes: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivePoll {
    pub poll_str_id: String,
    pub question: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusChange {
    pub poll_str_id: String,
    pub status: PollStatus,
}

impl Poll {
    pub fn option_id(poll_id: &str, position: usize) -> String {
        format!("{}_option_{}", poll_id, position)
    }

    /// Builds a fresh active poll with zeroed counters. Options are numbered
    /// from 1 in input order.
    pub fn new(id: String, question: String, options: Vec<OptionInput>) -> Self {
        let options = options
            .into_iter()
            .enumerate()
            .map(|(i, opt)| PollOption {
                id: Self::option_id(&id, i + 1),
                text: opt.text,
                color: opt.fav_color_poll
                    .filter(|color| !color.is_empty())
                    .unwrap_or_else(|| DEFAULT_OPTION_COLOR.to_string()),
                vote_count: 0,
            })
            .collect();

        Self { id, question, status: PollStatus::active(), options }
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub fn option_mut(&mut self, option_id: &str) -> Option<&mut PollOption> {
        self.options.iter_mut().find(|opt| opt.id == option_id)
    }

    pub fn total_votes(&self) -> u64 {
        self.options.iter().map(|opt| opt.vote_count).sum()
    }

    pub fn results(&self) -> PollResults {
        PollResults {
            poll_str_id: self.id.clone(),
            question: self.question.clone(),
            results: self.options.iter().map(PollOption::result).collect(),
        }
    }

    pub fn summary(&self) -> ActivePoll {
        ActivePoll {
            poll_str_id: self.id.clone(),
            question: self.question.clone(),
        }
    }

    pub fn status_change(&self) -> StatusChange {
        StatusChange {
            poll_str_id: self.id.clone(),
            status: self.status.clone(),
        }
    }
}

impl PollOption {
    pub fn record_vote(&mut self) {
        self.vote_count += 1;
    }

    pub fn result(&self) -> OptionResult {
        OptionResult {
            option_str_id: self.id.clone(),
            text: self.text.clone(),
            color: self.color.clone(),
            votes: self.vote_count,
        }
    }
}
