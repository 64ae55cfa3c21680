//! Agenda appointment reminders.
//!
//! Each appointment gets one one-shot job per fixed offset (7 days, 24
//! hours, 30 minutes before the start). Jobs are keyed by
//! `appointment_reminder_<id>_<offsetMin>`, so scheduling the same
//! appointment again replaces its previous jobs instead of stacking
//! duplicates, and cancelling removes every job of the appointment.
//! Offsets already in the past are silently skipped.
//!
//! Displaying the notification is platform work; the shell passes a
//! callback that receives the fired [`ReminderNotification`].

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};
use uuid::Uuid;

/// Minutes before the appointment start at which reminders fire.
pub const DEFAULT_OFFSETS_MIN: [i64; 3] = [
    7 * 24 * 60, // 7 days
    24 * 60,     // 24h
    30,          // 30 min
];

/// Payload handed to the shell's notification callback.
#[derive(Clone, Debug)]
pub struct ReminderNotification {
    pub appointment_id: i32,
    pub title: String,
    pub offset_label: String,
    pub start_at: DateTime<Utc>,
}

pub type NotifyFn = Arc<dyn Fn(ReminderNotification) + Send + Sync>;

/// Short label shown in the notification ("7j", "24h", "30min").
pub fn offset_label(offset_min: i64) -> String {
    match offset_min {
        10080 => "7j".to_string(),
        1440 => "24h".to_string(),
        30 => "30min".to_string(),
        other => format!("{}min", other),
    }
}

/// Computes the future fire instants for an appointment.
///
/// Duplicated offsets collapse to one entry and offsets whose fire time is
/// not strictly after `now` are dropped.
pub fn fire_times(
    start_at: DateTime<Utc>,
    now: DateTime<Utc>,
    offsets_min: &[i64],
) -> Vec<(i64, DateTime<Utc>)> {
    let mut seen = Vec::new();

    offsets_min
        .iter()
        .copied()
        .filter(|offset| {
            if seen.contains(offset) {
                false
            } else {
                seen.push(*offset);
                true
            }
        })
        .filter_map(|offset| {
            let trigger = start_at - Duration::minutes(offset);
            (trigger > now).then_some((offset, trigger))
        })
        .collect()
}

/// Schedules keyed one-shot reminder jobs for agenda appointments.
pub struct ReminderScheduler {
    scheduler: JobScheduler,
    jobs: Arc<Mutex<HashMap<String, Uuid>>>,
    notify: NotifyFn,
}

impl ReminderScheduler {
    pub async fn new(notify: NotifyFn) -> Result<Self, JobSchedulerError> {
        let scheduler = JobScheduler::new().await?;
        scheduler.start().await?;

        Ok(Self {
            scheduler,
            jobs: Arc::new(Mutex::new(HashMap::new())),
            notify,
        })
    }

    fn job_key(appointment_id: i32, offset_min: i64) -> String {
        format!("appointment_reminder_{}_{}", appointment_id, offset_min)
    }

    fn appointment_prefix(appointment_id: i32) -> String {
        format!("appointment_reminder_{}_", appointment_id)
    }

    /// Schedules the default offsets for an appointment.
    pub async fn schedule_all(
        &self,
        appointment_id: i32,
        title: &str,
        start_at: DateTime<Utc>,
    ) -> Result<(), JobSchedulerError> {
        self.schedule_with_offsets(appointment_id, title, start_at, &DEFAULT_OFFSETS_MIN)
            .await
    }

    /// Registers one one-shot job per future offset.
    ///
    /// Re-registering with the same appointment id replaces the previous
    /// jobs, so rescheduling a moved appointment is idempotent.
    pub async fn schedule_with_offsets(
        &self,
        appointment_id: i32,
        title: &str,
        start_at: DateTime<Utc>,
        offsets_min: &[i64],
    ) -> Result<(), JobSchedulerError> {
        for (offset_min, trigger) in fire_times(start_at, Utc::now(), offsets_min) {
            let key = Self::job_key(appointment_id, offset_min);
            self.remove_job(&key).await?;

            let notification = ReminderNotification {
                appointment_id,
                title: title.to_string(),
                offset_label: offset_label(offset_min),
                start_at,
            };
            let notify = self.notify.clone();

            let delay = (trigger - Utc::now()).to_std().unwrap_or_default();
            let job = Job::new_one_shot_async(delay, move |_uuid, _lock| {
                let notify = notify.clone();
                let notification = notification.clone();

                Box::pin(async move {
                    notify(notification);
                })
            })?;

            let job_id = self.scheduler.add(job).await?;
            self.jobs.lock().await.insert(key, job_id);
        }

        Ok(())
    }

    /// Cancels every pending reminder of an appointment.
    pub async fn cancel_all(&self, appointment_id: i32) -> Result<(), JobSchedulerError> {
        let prefix = Self::appointment_prefix(appointment_id);

        let keys: Vec<String> = self
            .jobs
            .lock()
            .await
            .keys()
            .filter(|key| key.starts_with(&prefix))
            .cloned()
            .collect();

        for key in keys {
            self.remove_job(&key).await?;
        }

        Ok(())
    }

    /// Number of pending jobs for an appointment.
    pub async fn pending_count(&self, appointment_id: i32) -> usize {
        let prefix = Self::appointment_prefix(appointment_id);

        self.jobs
            .lock()
            .await
            .keys()
            .filter(|key| key.starts_with(&prefix))
            .count()
    }

    async fn remove_job(&self, key: &str) -> Result<(), JobSchedulerError> {
        let removed = self.jobs.lock().await.remove(key);

        if let Some(job_id) = removed {
            self.scheduler.remove(&job_id).await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        use chrono::TimeZone;
        Utc.with_ymd_and_hms(2026, 6, 10, h, m, 0).unwrap()
    }

    #[test]
    fn computes_one_fire_time_per_offset() {
        let start = at(12, 0);
        let now = start - Duration::days(30);

        let times = fire_times(start, now, &DEFAULT_OFFSETS_MIN);

        assert_eq!(
            times,
            vec![
                (10080, start - Duration::days(7)),
                (1440, start - Duration::hours(24)),
                (30, start - Duration::minutes(30)),
            ]
        );
    }

    #[test]
    fn skips_offsets_already_in_the_past() {
        let start = at(12, 0);
        // Two hours before the appointment: the 7-day and 24-hour marks are
        // already gone.
        let now = start - Duration::hours(2);

        let times = fire_times(start, now, &DEFAULT_OFFSETS_MIN);

        assert_eq!(times, vec![(30, start - Duration::minutes(30))]);
    }

    #[test]
    fn duplicate_offsets_collapse() {
        let start = at(12, 0);
        let now = start - Duration::days(1);

        let times = fire_times(start, now, &[30, 30, 60]);

        assert_eq!(
            times,
            vec![
                (30, start - Duration::minutes(30)),
                (60, start - Duration::minutes(60)),
            ]
        );
    }

    #[test]
    fn labels_match_the_product_wording() {
        assert_eq!(offset_label(10080), "7j");
        assert_eq!(offset_label(1440), "24h");
        assert_eq!(offset_label(30), "30min");
        assert_eq!(offset_label(45), "45min");
    }

    #[tokio::test]
    async fn rescheduling_replaces_instead_of_stacking() -> Result<(), JobSchedulerError> {
        let scheduler = ReminderScheduler::new(Arc::new(|_| {})).await?;
        let start = Utc::now() + Duration::days(30);

        scheduler.schedule_all(5, "Vétérinaire", start).await?;
        assert_eq!(scheduler.pending_count(5).await, 3);

        // Appointment moved: same key set, same count.
        scheduler
            .schedule_all(5, "Vétérinaire", start + Duration::days(1))
            .await?;
        assert_eq!(scheduler.pending_count(5).await, 3);

        scheduler.cancel_all(5).await?;
        assert_eq!(scheduler.pending_count(5).await, 0);

        Ok(())
    }

    #[tokio::test]
    async fn imminent_appointment_gets_only_late_offsets() -> Result<(), JobSchedulerError> {
        let scheduler = ReminderScheduler::new(Arc::new(|_| {})).await?;

        // In two hours: only the 30-minute reminder is still ahead.
        let start = Utc::now() + Duration::hours(2);
        scheduler.schedule_all(9, "Toilettage", start).await?;

        assert_eq!(scheduler.pending_count(9).await, 1);

        scheduler.cancel_all(9).await?;
        Ok(())
    }
}
