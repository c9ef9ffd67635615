use serde::Deserialize;

///
/// A named business event somewhere in the portal that should surface
/// as a notification.
///
/// Deserializes from `{"kind": "...", ...payload}`, which is the shape
/// upstream feature pages send through the string entry point. Payload
/// keys are accepted in both snake_case and the camelCase the older
/// feature pages still send (`senderName`, `topicTitle`, ...).
///
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Activity {
    MessageReceived {
        #[serde(alias = "senderName")]
        sender_name: String,
        #[serde(alias = "senderId")]
        sender_id: Option<String>,
        #[serde(alias = "senderAvatar")]
        sender_avatar: Option<String>,
    },
    MessageSent {
        #[serde(alias = "recipientName")]
        recipient_name: String,
    },
    ForumPost {
        #[serde(alias = "authorName")]
        author_name: String,
        #[serde(alias = "topicTitle")]
        topic_title: String,
    },
    ForumReply {
        #[serde(alias = "authorName")]
        author_name: String,
        #[serde(alias = "topicTitle")]
        topic_title: String,
    },
    ForumMention {
        #[serde(alias = "authorName")]
        author_name: String,
        #[serde(alias = "topicTitle")]
        topic_title: String,
    },
    ReactionAdded {
        #[serde(alias = "userName")]
        user_name: String,
        target: String,
    },
    ReactionRemoved {
        #[serde(alias = "userName")]
        user_name: String,
        target: String,
    },
    AssignmentDue {
        #[serde(alias = "assignmentTitle")]
        assignment_title: String,
        #[serde(alias = "dueIn")]
        due_in: String,
    },
    AssignmentGraded {
        #[serde(alias = "assignmentTitle")]
        assignment_title: String,
        grade: String,
    },
    CourseUpdated {
        #[serde(alias = "courseName")]
        course_name: String,
    },
    EventCreated {
        #[serde(alias = "eventTitle")]
        event_title: String,
    },
    EventReminder {
        #[serde(alias = "eventTitle")]
        event_title: String,
        #[serde(alias = "startsIn")]
        starts_in: String,
    },
    EventCancelled {
        #[serde(alias = "eventTitle")]
        event_title: String,
    },
    StudyGroupInvitation {
        #[serde(alias = "groupName")]
        group_name: String,
        #[serde(alias = "inviterName")]
        inviter_name: String,
        #[serde(alias = "inviterId")]
        inviter_id: Option<String>,
    },
    StudyGroupJoined {
        #[serde(alias = "groupName")]
        group_name: String,
        #[serde(alias = "memberName")]
        member_name: String,
    },
    StudyGroupSession {
        #[serde(alias = "groupName")]
        group_name: String,
        #[serde(alias = "startsIn")]
        starts_in: String,
    },
    PollCreated {
        #[serde(alias = "pollTitle")]
        poll_title: String,
    },
    PollClosing {
        #[serde(alias = "pollTitle")]
        poll_title: String,
        #[serde(alias = "closesIn")]
        closes_in: String,
    },
    PollResults {
        #[serde(alias = "pollTitle")]
        poll_title: String,
    },
    AnnouncementPosted {
        title: String,
    },
    ConnectionRequest {
        #[serde(alias = "userName")]
        user_name: String,
        #[serde(alias = "userId")]
        user_id: Option<String>,
        #[serde(alias = "userAvatar")]
        user_avatar: Option<String>,
    },
    ConnectionAccepted {
        #[serde(alias = "userName")]
        user_name: String,
        #[serde(alias = "userId")]
        user_id: Option<String>,
        #[serde(alias = "userAvatar")]
        user_avatar: Option<String>,
    },
    SupportResponse {
        #[serde(alias = "ticketSubject")]
        ticket_subject: String,
    },
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn activity_json_deserialize_ok() {
        let json = r#"{
            "kind": "message_received",
            "sender_name": "Ada",
            "sender_id": "u1"
        }"#;

        let activity = serde_json::from_str::<Activity>(json).unwrap();

        assert!(matches!(
            activity,
            Activity::MessageReceived {
                sender_name,
                sender_id: Some(sender_id),
                sender_avatar: None,
            } if sender_name == "Ada" && sender_id == "u1"
        ));
    }

    #[test]
    fn activity_json_deserialize_camel_case_payload() {
        let json = r#"{
            "kind": "message_received",
            "senderName": "Ada",
            "senderId": "u1"
        }"#;

        let activity = serde_json::from_str::<Activity>(json).unwrap();

        assert!(matches!(
            activity,
            Activity::MessageReceived {
                sender_name,
                sender_id: Some(sender_id),
                sender_avatar: None,
            } if sender_name == "Ada" && sender_id == "u1"
        ));
    }

    #[test]
    fn activity_json_deserialize_camel_case_multi_field() {
        let json = r#"{
            "kind": "poll_closing",
            "pollTitle": "Budget vote",
            "closesIn": "in 2 hours"
        }"#;

        let activity = serde_json::from_str::<Activity>(json).unwrap();

        assert!(matches!(
            activity,
            Activity::PollClosing { poll_title, closes_in }
                if poll_title == "Budget vote" && closes_in == "in 2 hours"
        ));
    }

    #[test]
    fn activity_json_deserialize_unknown_kind() {
        let json = r#"{"kind": "not_a_real_kind"}"#;

        let activity = serde_json::from_str::<Activity>(json);

        assert!(activity.is_err());
    }

    #[test]
    fn activity_json_deserialize_missing_payload_field() {
        let json = r#"{"kind": "poll_closing", "poll_title": "Budget vote"}"#;

        let activity = serde_json::from_str::<Activity>(json);

        assert!(activity.is_err());
    }
}
