use crate::dto::{
    input::{Activity, NewNotification},
    NotificationCategory, NotificationPriority, NotificationType,
};

///
/// Translates a portal activity into notification content.
///
/// Total over [Activity]; unknown kinds only exist as strings and are
/// rejected when parsing into the enum, before this function runs.
///
pub fn map_activity(activity: &Activity) -> NewNotification {
    match activity {
        Activity::MessageReceived {
            sender_name,
            sender_id,
            sender_avatar,
        } => template("New Message", format!("{sender_name} sent you a message"))
            .category(NotificationCategory::Message)
            .icon("💬")
            .related(sender_name, sender_id, sender_avatar)
            .build(),
        Activity::MessageSent { recipient_name } => template(
            "Message Sent",
            format!("Your message to {recipient_name} was delivered"),
        )
        .r#type(NotificationType::Success)
        .category(NotificationCategory::Message)
        .priority(NotificationPriority::Low)
        .icon("📨")
        .build(),
        Activity::ForumPost {
            author_name,
            topic_title,
        } => template(
            "New Forum Post",
            format!("{author_name} started \"{topic_title}\""),
        )
        .category(NotificationCategory::Forum)
        .icon("📝")
        .related(author_name, &None, &None)
        .build(),
        Activity::ForumReply {
            author_name,
            topic_title,
        } => template(
            "New Reply",
            format!("{author_name} replied in \"{topic_title}\""),
        )
        .category(NotificationCategory::Forum)
        .icon("💬")
        .related(author_name, &None, &None)
        .build(),
        Activity::ForumMention {
            author_name,
            topic_title,
        } => template(
            "You Were Mentioned",
            format!("{author_name} mentioned you in \"{topic_title}\""),
        )
        .category(NotificationCategory::Forum)
        .priority(NotificationPriority::High)
        .icon("📣")
        .related(author_name, &None, &None)
        .build(),
        Activity::ReactionAdded { user_name, target } => template(
            "New Reaction",
            format!("{user_name} reacted to your {target}"),
        )
        .r#type(NotificationType::Success)
        .category(NotificationCategory::Reaction)
        .priority(NotificationPriority::Low)
        .icon("👍")
        .related(user_name, &None, &None)
        .build(),
        Activity::ReactionRemoved { user_name, target } => template(
            "Reaction Removed",
            format!("{user_name} removed their reaction from your {target}"),
        )
        .category(NotificationCategory::Reaction)
        .priority(NotificationPriority::Low)
        .icon("💭")
        .related(user_name, &None, &None)
        .build(),
        Activity::AssignmentDue {
            assignment_title,
            due_in,
        } => template(
            "Assignment Due Soon",
            format!("\"{assignment_title}\" is due {due_in}"),
        )
        .r#type(NotificationType::Warning)
        .category(NotificationCategory::Academic)
        .priority(NotificationPriority::High)
        .icon("⏰")
        .build(),
        Activity::AssignmentGraded {
            assignment_title,
            grade,
        } => template(
            "Assignment Graded",
            format!("You received {grade} on \"{assignment_title}\""),
        )
        .r#type(NotificationType::Success)
        .category(NotificationCategory::Academic)
        .icon("🎓")
        .build(),
        Activity::CourseUpdated { course_name } => template(
            "Course Updated",
            format!("{course_name} has new material available"),
        )
        .category(NotificationCategory::Academic)
        .priority(NotificationPriority::Low)
        .icon("📚")
        .build(),
        Activity::EventCreated { event_title } => {
            template("New Event", format!("\"{event_title}\" was scheduled"))
                .category(NotificationCategory::Event)
                .icon("📅")
                .build()
        }
        Activity::EventReminder {
            event_title,
            starts_in,
        } => template(
            "Event Reminder",
            format!("\"{event_title}\" starts {starts_in}"),
        )
        .r#type(NotificationType::Warning)
        .category(NotificationCategory::Event)
        .priority(NotificationPriority::High)
        .icon("🔔")
        .build(),
        Activity::EventCancelled { event_title } => template(
            "Event Cancelled",
            format!("\"{event_title}\" was cancelled"),
        )
        .r#type(NotificationType::Warning)
        .category(NotificationCategory::Event)
        .priority(NotificationPriority::High)
        .icon("❌")
        .build(),
        Activity::StudyGroupInvitation {
            group_name,
            inviter_name,
            inviter_id,
        } => template(
            "Study Group Invitation",
            format!("{inviter_name} invited you to join {group_name}"),
        )
        .category(NotificationCategory::StudyGroup)
        .icon("👥")
        .related(inviter_name, inviter_id, &None)
        .build(),
        Activity::StudyGroupJoined {
            group_name,
            member_name,
        } => template(
            "New Group Member",
            format!("{member_name} joined {group_name}"),
        )
        .r#type(NotificationType::Success)
        .category(NotificationCategory::StudyGroup)
        .priority(NotificationPriority::Low)
        .icon("👥")
        .related(member_name, &None, &None)
        .build(),
        Activity::StudyGroupSession {
            group_name,
            starts_in,
        } => template(
            "Study Session Starting",
            format!("{group_name} meets {starts_in}"),
        )
        .r#type(NotificationType::Warning)
        .category(NotificationCategory::StudyGroup)
        .priority(NotificationPriority::High)
        .icon("📖")
        .build(),
        Activity::PollCreated { poll_title } => {
            template("New Poll", format!("\"{poll_title}\" is open for voting"))
                .category(NotificationCategory::Poll)
                .priority(NotificationPriority::Low)
                .icon("📊")
                .build()
        }
        Activity::PollClosing {
            poll_title,
            closes_in,
        } => template(
            "Poll Closing Soon",
            format!("\"{poll_title}\" closes {closes_in}"),
        )
        .r#type(NotificationType::Warning)
        .category(NotificationCategory::Poll)
        .icon("⏳")
        .build(),
        Activity::PollResults { poll_title } => template(
            "Poll Results Available",
            format!("Results for \"{poll_title}\" are in"),
        )
        .category(NotificationCategory::Poll)
        .priority(NotificationPriority::Low)
        .icon("📊")
        .build(),
        Activity::AnnouncementPosted { title } => {
            template("New Announcement", title.clone())
                .category(NotificationCategory::Announcement)
                .priority(NotificationPriority::High)
                .icon("📢")
                .build()
        }
        Activity::ConnectionRequest {
            user_name,
            user_id,
            user_avatar,
        } => template(
            "Connection Request",
            format!("{user_name} wants to connect with you"),
        )
        .category(NotificationCategory::Social)
        .icon("🤝")
        .related(user_name, user_id, user_avatar)
        .build(),
        Activity::ConnectionAccepted {
            user_name,
            user_id,
            user_avatar,
        } => template(
            "Connection Accepted",
            format!("{user_name} accepted your connection request"),
        )
        .r#type(NotificationType::Success)
        .category(NotificationCategory::Social)
        .priority(NotificationPriority::Low)
        .icon("🤝")
        .related(user_name, user_id, user_avatar)
        .build(),
        Activity::SupportResponse { ticket_subject } => template(
            "Support Response",
            format!("A staff member replied to \"{ticket_subject}\""),
        )
        .category(NotificationCategory::Support)
        .priority(NotificationPriority::High)
        .icon("🎧")
        .build(),
    }
}

fn template(title: &str, message: String) -> Template {
    Template {
        notification: NewNotification {
            title: title.to_string(),
            message,
            r#type: NotificationType::Info,
            category: None,
            priority: None,
            icon: None,
            related_user_id: None,
            related_user_name: None,
            related_user_avatar: None,
        },
    }
}

struct Template {
    notification: NewNotification,
}

impl Template {
    fn r#type(mut self, r#type: NotificationType) -> Self {
        self.notification.r#type = r#type;
        self
    }

    fn category(mut self, category: NotificationCategory) -> Self {
        self.notification.category = Some(category);
        self
    }

    fn priority(mut self, priority: NotificationPriority) -> Self {
        self.notification.priority = Some(priority);
        self
    }

    fn icon(mut self, icon: &str) -> Self {
        self.notification.icon = Some(icon.to_string());
        self
    }

    fn related(mut self, name: &str, id: &Option<String>, avatar: &Option<String>) -> Self {
        self.notification.related_user_name = Some(name.to_string());
        self.notification.related_user_id = id.clone();
        self.notification.related_user_avatar = avatar.clone();
        self
    }

    fn build(self) -> NewNotification {
        self.notification
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn message_received() {
        let activity = Activity::MessageReceived {
            sender_name: "Ada".to_string(),
            sender_id: Some("u1".to_string()),
            sender_avatar: None,
        };

        let notification = map_activity(&activity);

        assert!(notification.title.contains("New Message"));
        assert_eq!(notification.category, Some(NotificationCategory::Message));
        assert_eq!(notification.related_user_name.as_deref(), Some("Ada"));
        assert_eq!(notification.related_user_id.as_deref(), Some("u1"));
        assert!(notification.message.contains("Ada"));
    }

    #[test]
    fn assignment_due_is_high_priority_warning() {
        let activity = Activity::AssignmentDue {
            assignment_title: "Problem Set 3".to_string(),
            due_in: "tomorrow".to_string(),
        };

        let notification = map_activity(&activity);

        assert_eq!(notification.r#type, NotificationType::Warning);
        assert_eq!(notification.category, Some(NotificationCategory::Academic));
        assert_eq!(notification.priority, Some(NotificationPriority::High));
        assert!(notification.message.contains("Problem Set 3"));
        assert!(notification.message.contains("tomorrow"));
    }

    #[test]
    fn poll_closing() {
        let activity = Activity::PollClosing {
            poll_title: "Exam date".to_string(),
            closes_in: "in 2 hours".to_string(),
        };

        let notification = map_activity(&activity);

        assert_eq!(notification.category, Some(NotificationCategory::Poll));
        assert!(notification.message.contains("Exam date"));
    }

    #[test]
    fn announcement_posted_carries_announcement_title() {
        let activity = Activity::AnnouncementPosted {
            title: "Midterm moved to week 9".to_string(),
        };

        let notification = map_activity(&activity);

        assert_eq!(notification.title, "New Announcement");
        assert_eq!(notification.message, "Midterm moved to week 9");
        assert_eq!(
            notification.category,
            Some(NotificationCategory::Announcement)
        );
    }

    #[test]
    fn every_activity_maps_to_a_category() {
        let activities = [
            Activity::MessageSent {
                recipient_name: "Ada".to_string(),
            },
            Activity::ForumMention {
                author_name: "Grace".to_string(),
                topic_title: "Elasticity".to_string(),
            },
            Activity::ReactionAdded {
                user_name: "Alan".to_string(),
                target: "post".to_string(),
            },
            Activity::EventCancelled {
                event_title: "Review session".to_string(),
            },
            Activity::StudyGroupSession {
                group_name: "Macro study group".to_string(),
                starts_in: "in 15 minutes".to_string(),
            },
            Activity::ConnectionRequest {
                user_name: "John".to_string(),
                user_id: None,
                user_avatar: None,
            },
            Activity::SupportResponse {
                ticket_subject: "Cannot open quiz".to_string(),
            },
        ];

        for activity in &activities {
            let notification = map_activity(activity);
            assert!(notification.category.is_some(), "{activity:?}");
            assert!(!notification.title.is_empty(), "{activity:?}");
            assert!(!notification.message.is_empty(), "{activity:?}");
        }
    }
}
