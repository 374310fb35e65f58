use enisey_domain as domain;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub acknowledgment: domain::Acknowledgment,
}

/// Acknowledgments currently shown to the user, oldest first.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NotificationQueue {
    last_id: u64,
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    /// Adds a notification and returns its id. Ids are never reused.
    pub fn push(&mut self, acknowledgment: domain::Acknowledgment) -> u64 {
        self.last_id += 1;
        self.notifications.push(Notification {
            id: self.last_id,
            acknowledgment,
        });
        self.last_id
    }

    pub fn remove(&mut self, id: u64) {
        self.notifications.retain(|n| n.id != id);
    }

    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }
}
