use std::collections::{HashMap, HashSet};
use time::OffsetDateTime;
use crate::error::{PollError, Result};
use crate::models::{ActivePoll, CreatePollRequest, Poll, PollResults, PollStatus, StatusChange, VoteOutcome};

#[derive(Debug)]
struct PollRecord {
    poll: Poll,
    voters: HashSet<String>,
}

/// All polls and their voter sets. Not synchronized: every operation takes
/// `&mut self` or `&self` and the caller owns the locking.
#[derive(Debug, Default)]
pub struct PollRegistry {
    polls: HashMap<String, PollRecord>,
    creation_order: Vec<String>,
}

impl PollRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize { self.polls.len() }

    pub fn is_empty(&self) -> bool { self.polls.is_empty() }

    pub fn poll(&self, poll_id: &str) -> Option<Poll> {
        self.polls.get(poll_id).map(|record| record.poll.clone())
    }

    pub fn create_poll(&mut self, request: CreatePollRequest) -> Result<Poll> {
        let id = match request.poll_str_id.filter(|id| !id.is_empty()) {
            Some(id) if self.polls.contains_key(&id) => return Err(PollError::Conflict(id)),
            Some(id) => id,
            None => self.generate_poll_id(),
        };

        let poll = Poll::new(id.clone(), request.question, request.options);
        self.creation_order.push(id.clone());
        self.polls.insert(id, PollRecord { poll: poll.clone(), voters: HashSet::new() });
        Ok(poll)
    }

    /// Checks run in a fixed order: existence, status, prior voter, option.
    /// An empty voter id counts as anonymous.
    pub fn cast_vote(&mut self, poll_id: &str, option_id: &str, voter_id: Option<&str>) -> Result<VoteOutcome> {
        let record = self.polls.get_mut(poll_id)
            .ok_or_else(|| PollError::NotFound(poll_id.to_string()))?;

        if !record.poll.is_active() {
            return Err(PollError::PollClosed(poll_id.to_string()));
        }

        let voter_id = voter_id.filter(|voter| !voter.is_empty());
        if voter_id.is_some_and(|voter| record.voters.contains(voter)) {
            return Ok(VoteOutcome::AlreadyVoted);
        }

        let option = record.poll.option_mut(option_id)
            .ok_or_else(|| PollError::InvalidOption(option_id.to_string()))?;
        option.record_vote();

        if let Some(voter) = voter_id {
            record.voters.insert(voter.to_string());
        }
        Ok(VoteOutcome::Counted)
    }

    pub fn get_results(&self, poll_id: &str) -> Result<PollResults> {
        self.polls.get(poll_id)
            .map(|record| record.poll.results())
            .ok_or_else(|| PollError::NotFound(poll_id.to_string()))
    }

    pub fn list_active_polls(&self) -> Vec<ActivePoll> {
        self.creation_order.iter()
            .filter_map(|id| self.polls.get(id))
            .filter(|record| record.poll.is_active())
            .map(|record| record.poll.summary())
            .collect()
    }

    pub fn set_status(&mut self, poll_id: &str, status: impl Into<PollStatus>) -> Result<StatusChange> {
        let record = self.polls.get_mut(poll_id)
            .ok_or_else(|| PollError::NotFound(poll_id.to_string()))?;
        record.poll.status = status.into();
        Ok(record.poll.status_change())
    }

    pub fn has_voted(&self, poll_id: &str, voter_id: &str) -> bool {
        self.polls.get(poll_id).is_some_and(|record| record.voters.contains(voter_id))
    }

    // Millisecond timestamp, bumped forward while taken.
    fn generate_poll_id(&self) -> String {
        let mut millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        loop {
            let id = millis.to_string();
            if !self.polls.contains_key(&id) {
                return id;
            }
            millis += 1;
        }
    }
}
