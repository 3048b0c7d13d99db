//! Application state: the registry of open page views

use std::collections::HashMap;
use std::sync::Arc;

use techfix_config::BookingConfig;
use techfix_core::{BannerTicket, BookingView, Clock, FormField, FormState, Submission, SystemClock};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use uuid::Uuid;

use crate::error::{Result, WebError};

struct ViewSlot {
    view: BookingView,
    touched_at: Instant,
}

/// Shared application state
pub struct AppState {
    /// Open page views (view id -> view)
    views: RwLock<HashMap<Uuid, ViewSlot>>,
    clock: Arc<dyn Clock>,
    booking: BookingConfig,
}

impl AppState {
    pub fn new(booking: BookingConfig) -> Self {
        Self::with_clock(booking, Arc::new(SystemClock))
    }

    pub fn with_clock(booking: BookingConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            views: RwLock::new(HashMap::new()),
            clock,
            booking,
        }
    }

    pub fn booking(&self) -> &BookingConfig {
        &self.booking
    }

    /// Start a new page view with the seed repairs
    pub async fn open_view(&self) -> Uuid {
        let id = Uuid::new_v4();
        let slot = ViewSlot {
            view: BookingView::new(),
            touched_at: Instant::now(),
        };
        let open = {
            let mut views = self.views.write().await;
            views.insert(id, slot);
            views.len()
        };
        tracing::debug!(view = %id, open, "opened view");
        id
    }

    /// Run `f` against a view, marking it as recently used
    pub async fn with_view<T>(&self, id: Uuid, f: impl FnOnce(&mut BookingView) -> T) -> Result<T> {
        let mut views = self.views.write().await;
        let slot = views.get_mut(&id).ok_or(WebError::ViewNotFound(id))?;
        slot.touched_at = Instant::now();
        Ok(f(&mut slot.view))
    }

    pub async fn update_field(&self, id: Uuid, field: FormField, value: &str) -> Result<()> {
        self.with_view(id, |view| view.update_field(field, value)).await??;
        tracing::debug!(view = %id, %field, "field updated");
        Ok(())
    }

    /// Take the posted form, book it, and schedule the banner to hide.
    pub async fn submit(self: &Arc<Self>, id: Uuid, form: FormState) -> Result<Submission> {
        let today = self.clock.today();
        let submission = self
            .with_view(id, |view| {
                view.form = form;
                view.submit(today)
            })
            .await?;

        tracing::info!(
            view = %id,
            repair = submission.record.id,
            device = %submission.record.device,
            "repair booked"
        );

        let state = Arc::clone(self);
        let ticket = submission.ticket;
        let delay = self.booking.banner_duration();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            state.expire_banner(id, ticket).await;
        });

        Ok(submission)
    }

    /// Hide the banner of a view if `ticket` is still current.
    ///
    /// A view that has been swept in the meantime is ignored.
    pub async fn expire_banner(&self, id: Uuid, ticket: BannerTicket) -> bool {
        let mut views = self.views.write().await;
        let hidden = views
            .get_mut(&id)
            .map(|slot| slot.view.expire_banner(ticket))
            .unwrap_or(false);
        if hidden {
            tracing::debug!(view = %id, "success banner hidden");
        }
        hidden
    }

    /// Drop views idle for longer than the configured TTL
    pub async fn sweep_idle(&self) -> usize {
        let ttl = self.booking.view_ttl();
        let now = Instant::now();
        let mut views = self.views.write().await;
        let before = views.len();
        views.retain(|_, slot| now.duration_since(slot.touched_at) <= ttl);
        let removed = before - views.len();
        if removed > 0 {
            tracing::info!(removed, open = views.len(), "swept idle views");
        }
        removed
    }

    /// Sweep idle views every `sweep_interval`
    pub fn spawn_sweeper(self: &Arc<Self>) -> JoinHandle<()> {
        let state = Arc::clone(self);
        let period = self.booking.sweep_interval();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                state.sweep_idle().await;
            }
        })
    }

    pub async fn view_count(&self) -> usize {
        self.views.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::time::Duration;
    use techfix_core::{FixedClock, RepairStatus, Urgency};

    fn state() -> Arc<AppState> {
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        Arc::new(AppState::with_clock(
            BookingConfig::default(),
            Arc::new(FixedClock(today)),
        ))
    }

    fn ana_lee() -> FormState {
        FormState {
            name: "Ana Lee".into(),
            email: "a@x.com".into(),
            phone: "555-0000".into(),
            device: "Pixel 7".into(),
            issue: "No charging".into(),
            urgency: Urgency::Urgent,
        }
    }

    async fn banner_visible(state: &AppState, id: Uuid) -> bool {
        state.with_view(id, |v| v.banner.is_visible()).await.unwrap()
    }

    #[tokio::test]
    async fn test_views_are_independent() {
        let state = state();
        let a = state.open_view().await;
        let b = state.open_view().await;
        assert_ne!(a, b);

        state.submit(a, ana_lee()).await.unwrap();

        let len_a = state.with_view(a, |v| v.repairs.len()).await.unwrap();
        let len_b = state.with_view(b, |v| v.repairs.len()).await.unwrap();
        assert_eq!(len_a, 4);
        assert_eq!(len_b, 3);
    }

    #[tokio::test]
    async fn test_submit_uses_clock_date() {
        let state = state();
        let id = state.open_view().await;
        let submission = state.submit(id, ana_lee()).await.unwrap();

        assert_eq!(submission.record.id, 4);
        assert_eq!(submission.record.status, RepairStatus::Pending);
        assert_eq!(submission.record.date_label(), "2026-10-17");

        let form = state.with_view(id, |v| v.form.clone()).await.unwrap();
        assert_eq!(form, FormState::default());
    }

    #[tokio::test]
    async fn test_unknown_view() {
        let state = state();
        let err = state
            .update_field(Uuid::new_v4(), FormField::Name, "x")
            .await
            .unwrap_err();
        assert!(matches!(err, WebError::ViewNotFound(_)));
    }

    #[tokio::test]
    async fn test_bad_urgency_is_form_error() {
        let state = state();
        let id = state.open_view().await;
        let err = state
            .update_field(id, FormField::Urgency, "yesterday")
            .await
            .unwrap_err();
        assert!(matches!(err, WebError::Form(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_banner_hides_after_duration() {
        let state = state();
        let id = state.open_view().await;
        state.submit(id, ana_lee()).await.unwrap();
        assert!(banner_visible(&state, id).await);

        tokio::time::sleep(Duration::from_millis(4999)).await;
        assert!(banner_visible(&state, id).await);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(!banner_visible(&state, id).await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_submit_restarts_banner_window() {
        let state = state();
        let id = state.open_view().await;
        state.submit(id, ana_lee()).await.unwrap();

        tokio::time::sleep(Duration::from_millis(3000)).await;
        state.submit(id, ana_lee()).await.unwrap();

        // First timer fires at 5000 ms but its ticket is stale
        tokio::time::sleep(Duration::from_millis(2500)).await;
        assert!(banner_visible(&state, id).await);

        tokio::time::sleep(Duration::from_millis(2600)).await;
        assert!(!banner_visible(&state, id).await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweep_idle_views() {
        let state = state();
        let stale = state.open_view().await;

        tokio::time::advance(Duration::from_secs(20 * 60)).await;
        let fresh = state.open_view().await;

        tokio::time::advance(Duration::from_secs(11 * 60)).await;
        assert_eq!(state.sweep_idle().await, 1);
        assert_eq!(state.view_count().await, 1);

        assert!(state.with_view(fresh, |_| ()).await.is_ok());
        assert!(matches!(
            state.with_view(stale, |_| ()).await,
            Err(WebError::ViewNotFound(_))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_expire_after_sweep_is_ignored() {
        let state = state();
        let id = state.open_view().await;
        let ticket = state.submit(id, ana_lee()).await.unwrap().ticket;

        tokio::time::advance(Duration::from_secs(31 * 60)).await;
        state.sweep_idle().await;
        assert!(!state.expire_banner(id, ticket).await);
    }
}
