#[cfg(test)]
mod tests {
    use crate::error::PollError;
    use crate::models::*;
    use crate::poll_logic::PollRegistry;
    use crate::validation::{validate_poll_request, ValidationError, MAX_OPTIONS};

    fn request(id: Option<&str>, options: &[&str]) -> CreatePollRequest {
        CreatePollRequest {
            poll_str_id: id.map(String::from),
            question: "Favorite color?".into(),
            options: options.iter()
                .map(|text| OptionInput { text: text.to_string(), fav_color_poll: None })
                .collect(),
        }
    }

    fn registry_with(id: &str, options: &[&str]) -> PollRegistry {
        let mut registry = PollRegistry::new();
        registry.create_poll(request(Some(id), options)).unwrap();
        registry
    }

    fn votes(registry: &PollRegistry, poll_id: &str) -> Vec<u64> {
        registry.get_results(poll_id).unwrap().results.iter().map(|r| r.votes).collect()
    }

    #[test]
    fn test_create_poll() {
        let mut registry = PollRegistry::new();
        let mut req = request(Some("P1"), &["Red", "Blue"]);
        req.options[1].fav_color_poll = Some("#00f".into());

        let poll = registry.create_poll(req).unwrap();
        assert_eq!(poll.id, "P1");
        assert!(poll.is_active());
        assert_eq!(poll.options.len(), 2);
        assert_eq!(poll.options[0].id, "P1_option_1");
        assert_eq!(poll.options[0].color, DEFAULT_OPTION_COLOR);
        assert_eq!(poll.options[1].id, "P1_option_2");
        assert_eq!(poll.options[1].color, "#00f");
        assert!(poll.options.iter().all(|opt| opt.vote_count == 0));
        assert_eq!(registry.poll("P1"), Some(poll));
    }

    #[test]
    fn test_empty_inputs_fall_back_to_defaults() {
        let mut registry = PollRegistry::new();
        let mut req = request(Some(""), &["Red"]);
        req.options[0].fav_color_poll = Some(String::new());

        let poll = registry.create_poll(req).unwrap();
        assert!(!poll.id.is_empty());
        assert!(poll.id.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(poll.options[0].color, "#000");
    }

    #[test]
    fn test_duplicate_id_conflicts_without_mutation() {
        let mut registry = registry_with("P1", &["Red", "Blue"]);
        registry.cast_vote("P1", "P1_option_1", None).unwrap();
        let before = registry.poll("P1");

        let err = registry.create_poll(request(Some("P1"), &["Green"])).unwrap_err();
        assert_eq!(err, PollError::Conflict("P1".into()));
        assert_eq!(registry.poll("P1"), before);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let mut registry = PollRegistry::new();
        let ids: Vec<_> = (0..20)
            .map(|_| registry.create_poll(request(None, &["A"])).unwrap().id)
            .collect();

        let unique: std::collections::HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
        assert_eq!(registry.len(), 20);
    }

    #[test]
    fn test_distinct_voters_all_count() {
        let mut registry = registry_with("P1", &["Red", "Blue"]);
        for i in 0..25 {
            let voter = format!("user-{}", i);
            assert_eq!(
                registry.cast_vote("P1", "P1_option_2", Some(&voter)).unwrap(),
                VoteOutcome::Counted
            );
        }
        assert_eq!(votes(&registry, "P1"), vec![0, 25]);
    }

    #[test]
    fn test_repeat_voter_is_not_counted() {
        let mut registry = registry_with("P1", &["Red", "Blue"]);
        assert_eq!(registry.cast_vote("P1", "P1_option_1", Some("alice")).unwrap(), VoteOutcome::Counted);
        assert_eq!(registry.cast_vote("P1", "P1_option_2", Some("alice")).unwrap(), VoteOutcome::AlreadyVoted);
        assert_eq!(registry.cast_vote("P1", "P1_option_1", Some("alice")).unwrap(), VoteOutcome::AlreadyVoted);
        assert_eq!(votes(&registry, "P1"), vec![1, 0]);
        assert!(registry.has_voted("P1", "alice"));
    }

    #[test]
    fn test_already_voted_wins_over_invalid_option() {
        let mut registry = registry_with("P1", &["Red"]);
        registry.cast_vote("P1", "P1_option_1", Some("alice")).unwrap();
        assert_eq!(registry.cast_vote("P1", "nope", Some("alice")).unwrap(), VoteOutcome::AlreadyVoted);
    }

    #[test]
    fn test_anonymous_votes_always_count() {
        let mut registry = registry_with("P1", &["Red", "Blue"]);
        registry.cast_vote("P1", "P1_option_1", None).unwrap();
        registry.cast_vote("P1", "P1_option_1", None).unwrap();
        registry.cast_vote("P1", "P1_option_1", Some("")).unwrap();
        registry.cast_vote("P1", "P1_option_1", Some("")).unwrap();
        assert_eq!(votes(&registry, "P1"), vec![4, 0]);
        assert!(!registry.has_voted("P1", ""));
    }

    #[test]
    fn test_invalid_option_does_not_record_voter() {
        let mut registry = registry_with("P1", &["Red"]);
        let err = registry.cast_vote("P1", "P1_option_9", Some("alice")).unwrap_err();
        assert_eq!(err, PollError::InvalidOption("P1_option_9".into()));
        assert!(!registry.has_voted("P1", "alice"));
        assert_eq!(registry.cast_vote("P1", "P1_option_1", Some("alice")).unwrap(), VoteOutcome::Counted);
    }

    #[test]
    fn test_vote_on_unknown_poll() {
        let mut registry = PollRegistry::new();
        assert_eq!(
            registry.cast_vote("missing", "missing_option_1", None).unwrap_err(),
            PollError::NotFound("missing".into())
        );
        assert!(matches!(registry.get_results("missing"), Err(PollError::NotFound(_))));
        assert!(matches!(registry.set_status("missing", "closed"), Err(PollError::NotFound(_))));
    }

    #[test]
    fn test_closed_poll_rejects_every_vote() {
        let mut registry = registry_with("P1", &["Red"]);
        registry.set_status("P1", "closed").unwrap();

        for option in ["P1_option_1", "bogus"] {
            assert_eq!(
                registry.cast_vote("P1", option, Some("alice")).unwrap_err(),
                PollError::PollClosed("P1".into())
            );
        }
        assert_eq!(votes(&registry, "P1"), vec![0]);
        assert!(!registry.has_voted("P1", "alice"));
    }

    #[test]
    fn test_status_is_free_form_and_reopenable() {
        let mut registry = registry_with("P1", &["Red"]);

        let change = registry.set_status("P1", "Active").unwrap();
        assert_eq!(change.status.as_str(), "Active");
        assert!(matches!(registry.cast_vote("P1", "P1_option_1", None), Err(PollError::PollClosed(_))));

        let change = registry.set_status("P1", PollStatus::ACTIVE).unwrap();
        assert_eq!(change, StatusChange { poll_str_id: "P1".into(), status: PollStatus::active() });
        assert_eq!(registry.cast_vote("P1", "P1_option_1", None).unwrap(), VoteOutcome::Counted);
    }

    #[test]
    fn test_results_preserve_creation_order() {
        let mut registry = registry_with("P1", &["C", "A", "B"]);
        registry.cast_vote("P1", "P1_option_3", None).unwrap();
        registry.cast_vote("P1", "P1_option_3", None).unwrap();
        registry.cast_vote("P1", "P1_option_1", None).unwrap();

        let results = registry.get_results("P1").unwrap();
        assert_eq!(results.poll_str_id, "P1");
        assert_eq!(results.question, "Favorite color?");
        let texts: Vec<_> = results.results.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["C", "A", "B"]);
        assert_eq!(votes(&registry, "P1"), vec![1, 0, 2]);
    }

    #[test]
    fn test_list_active_polls() {
        let mut registry = PollRegistry::new();
        for id in ["a", "b", "c"] {
            registry.create_poll(request(Some(id), &["x"])).unwrap();
        }
        registry.set_status("b", "closed").unwrap();

        let active: Vec<_> = registry.list_active_polls().into_iter().map(|p| p.poll_str_id).collect();
        assert_eq!(active, vec!["a", "c"]);

        registry.set_status("b", "active").unwrap();
        registry.set_status("a", "archived").unwrap();
        let active: Vec<_> = registry.list_active_polls().into_iter().map(|p| p.poll_str_id).collect();
        assert_eq!(active, vec!["b", "c"]);
    }

    #[test]
    fn test_validation() {
        assert_eq!(validate_poll_request(&request(None, &[])), Err(ValidationError::TooFewOptions));
        assert!(validate_poll_request(&request(None, &["only"])).is_ok());

        let many: Vec<&str> = std::iter::repeat("x").take(MAX_OPTIONS + 1).collect();
        assert_eq!(validate_poll_request(&request(None, &many)), Err(ValidationError::TooManyOptions));
    }

    #[test]
    fn test_wire_shapes() {
        let mut registry = registry_with("P1", &["Red"]);
        let poll = registry.poll("P1").unwrap();
        assert_eq!(
            serde_json::to_value(&poll).unwrap(),
            serde_json::json!({
                "poll_str_id": "P1",
                "question": "Favorite color?",
                "status": "active",
                "options": [{ "option_str_id": "P1_option_1", "text": "Red", "color": "#000", "votes": 0 }]
            })
        );

        let outcome = registry.cast_vote("P1", "P1_option_1", Some("bob")).unwrap();
        assert_eq!(serde_json::to_value(outcome).unwrap(), serde_json::json!({ "status": "vote_counted" }));
        assert_eq!(
            serde_json::to_value(VoteOutcome::AlreadyVoted).unwrap(),
            serde_json::json!({ "status": "already_voted" })
        );

        let parsed: CreatePollRequest = serde_json::from_str(
            r#"{"question":"Q","options":[{"text":"A","fav_color_poll":"red"},{"text":"B"}]}"#
        ).unwrap();
        assert!(parsed.poll_str_id.is_none());
        assert_eq!(parsed.options[0].fav_color_poll.as_deref(), Some("red"));
        assert!(parsed.options[1].fav_color_poll.is_none());
    }
}
