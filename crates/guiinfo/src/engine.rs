#![forbid(unsafe_code)]

use crate::samplers::{MiscFlags, TimeshiftInput, playing, timeshift};
use crate::snapshot::Snapshot;
use crate::sources::{Services, SourceError, TimerClass};
use config::Config;
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::task::yield_now;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace, warn};

struct Shared {
    config: Config,
    services: Services,
    snapshot: Mutex<Snapshot>,
    /// Armed by any query path that touches backend-derived fields, cleared
    /// by the coarse refresh. Backends are never polled while nothing
    /// displays backend info.
    backend_refresh_requested: AtomicBool,
}

/// The telemetry cache. One clone runs the sampling loop; any number of
/// clones serve queries from other threads. All queries are non-blocking
/// reads of the last completed sample.
pub struct GuiInfoCache {
    shared: Arc<Shared>,
}

impl Clone for GuiInfoCache {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl GuiInfoCache {
    pub fn new(config: Config, services: Services) -> Self {
        Self {
            shared: Arc::new(Shared {
                config: config.normalized(),
                services,
                snapshot: Mutex::new(Snapshot::new()),
                backend_refresh_requested: AtomicBool::new(true),
            }),
        }
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, Snapshot> {
        self.shared.snapshot.lock()
    }

    pub(crate) fn config(&self) -> &Config {
        &self.shared.config
    }

    pub(crate) fn services(&self) -> &Services {
        &self.shared.services
    }

    pub(crate) fn request_backend_refresh(&self) {
        self.shared
            .backend_refresh_requested
            .store(true, Ordering::SeqCst);
    }

    /// Run the sampling loop until the token is cancelled. Cancellation is
    /// checked between sub-steps, so shutdown latency is bounded by a single
    /// step rather than a full cycle.
    pub async fn run(&self, cancel: CancellationToken) {
        info!("gui info cache started");
        self.lock().reset();
        self.request_backend_refresh();
        self.refresh_timer_caches();

        let cycle_len = self.shared.config.polling.cycle;
        let mut cycle: u64 = 0;

        while !cancel.is_cancelled() {
            self.tick(cycle, &cancel).await;
            cycle = (cycle + 1) % 1000;

            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = self.shared.services.clock.sleep(cycle_len) => {}
            }
        }

        self.lock().reset_playing_event();
        info!("gui info cache stopped");
    }

    /// One full sampling pass in fixed order. Remaining steps are skipped
    /// once cancellation is requested.
    pub async fn tick(&self, cycle: u64, cancel: &CancellationToken) {
        if cancel.is_cancelled() {
            return;
        }
        self.update_quality();
        yield_now().await;

        if cancel.is_cancelled() {
            return;
        }
        self.update_descramble();
        yield_now().await;

        if cancel.is_cancelled() {
            return;
        }
        self.update_misc();
        yield_now().await;

        if cancel.is_cancelled() {
            return;
        }
        self.update_timeshift();
        yield_now().await;

        if cancel.is_cancelled() {
            return;
        }
        self.update_playing_event();
        yield_now().await;

        if cancel.is_cancelled() {
            return;
        }
        self.update_timer_toggles();
        yield_now().await;

        if cancel.is_cancelled() {
            return;
        }
        self.update_next_timers();
        yield_now().await;

        if cancel.is_cancelled() {
            return;
        }
        self.update_event_window();
        yield_now().await;

        if cancel.is_cancelled() {
            return;
        }
        // The backend list is expensive; refresh it at the coarse cadence.
        if cycle % self.shared.config.polling.toggle_cycles() == 0 {
            self.update_backend_stats();
        }
    }

    /// Re-query the absolute timer counts and repopulate the display slots.
    /// Hosts call this when their timer store changes.
    pub fn notify_timers_changed(&self) {
        self.refresh_timer_caches();
    }

    fn refresh_timer_caches(&self) {
        debug!("reloading timer caches");
        for class in TimerClass::ALL {
            let timers = self.shared.services.timers.active_timer_count(class);
            let recordings = self.shared.services.timers.active_recording_count(class);
            self.lock()
                .timers_mut(class)
                .update_counts(timers, recordings);
            self.toggle_class(class);
        }
    }

    fn update_quality(&self) {
        if !self.shared.config.display.signal_quality {
            return;
        }
        match self.shared.services.backend.signal_quality() {
            Ok(quality) => self.lock().quality = quality,
            Err(SourceError::NotPlaying) => {
                trace!("no playing client, keeping cached signal quality");
            }
            Err(err) => warn!(%err, "signal quality query failed, keeping cached values"),
        }
    }

    fn update_descramble(&self) {
        match self.shared.services.backend.descramble_info() {
            Ok(descramble) => self.lock().descramble = descramble,
            Err(SourceError::NotPlaying) => {
                trace!("no playing client, keeping cached descramble info");
            }
            Err(err) => warn!(%err, "descramble query failed, keeping cached values"),
        }
    }

    fn update_misc(&self) {
        let misc = MiscFlags::sample(self.shared.services.status.as_ref());
        self.lock().misc = misc;
    }

    fn update_timeshift(&self) {
        let services = &self.shared.services;
        let playing = services.status.is_playing_tv() || services.status.is_playing_radio();

        let input = if playing {
            let timeshifting = services.backend.is_timeshifting();
            TimeshiftInput {
                playing: true,
                timeshifting,
                start_time: services.player.start_time(),
                play_position_secs: services.player.play_time_ms() / 1000,
                min_offset_secs: if timeshifting {
                    services.player.min_time_ms() / 1000
                } else {
                    0
                },
                max_offset_secs: if timeshifting {
                    services.player.max_time_ms() / 1000
                } else {
                    0
                },
                at_normal_speed: services.player.speed() == 1.0,
            }
        } else {
            TimeshiftInput::default()
        };

        let now = services.clock.wall_secs();
        timeshift::reconcile(&mut self.lock().timebase, &input, now);
    }

    fn update_playing_event(&self) {
        let services = &self.shared.services;
        let channel = services.status.playing_channel();
        let epg_event = services.status.playing_epg_event();
        let now = services.clock.wall_secs();

        if channel.is_some() || epg_event.is_some() {
            let cached = self.lock().playing.event.clone();
            if !playing::needs_refresh(cached.as_deref(), channel.as_deref(), now) {
                return;
            }
            // Prefer an explicit playing tag, else look up what's on now.
            let resolved = epg_event.or_else(|| {
                channel
                    .as_ref()
                    .and_then(|channel| services.epg.event_now(channel.id))
            });
            let mut snapshot = self.lock();
            let window_width = snapshot.timebase.window_width();
            snapshot.playing.install_live(resolved, window_width);
        } else if let Some(recording) = services.status.playing_recording() {
            self.lock().playing.install_recording(recording.duration_secs);
        }
    }

    fn update_timer_toggles(&self) {
        for class in TimerClass::ALL {
            self.toggle_class(class);
        }
    }

    fn toggle_class(&self, class: TimerClass) {
        let now_ms = self.shared.services.clock.monotonic_ms();
        let interval_ms = self.shared.config.polling.toggle_interval.as_millis() as u64;

        let advanced = self
            .lock()
            .timers_mut(class)
            .update_toggle(now_ms, interval_ms);
        if !advanced {
            return;
        }
        let recordings = self.shared.services.timers.active_recordings(class);
        self.lock().timers_mut(class).apply_active(&recordings);
    }

    fn update_next_timers(&self) {
        for class in TimerClass::ALL {
            let next = self.shared.services.timers.next_active_timer(class);
            self.lock().timers_mut(class).apply_next(next.as_deref());
        }
    }

    fn update_event_window(&self) {
        let now = self.shared.services.clock.wall_secs();
        let mut snapshot = self.lock();
        let window =
            playing::event_window(&snapshot.timebase, snapshot.playing.event.as_deref(), now);
        snapshot.event_window = window;
    }

    fn update_backend_stats(&self) {
        let fetch = self.lock().backends.at_refresh_slot()
            && self.shared.backend_refresh_requested.load(Ordering::SeqCst);

        // The multi-backend query may block on the network; it runs with the
        // snapshot lock released, and the result is installed afterwards.
        let fresh = if fetch {
            let records = self.shared.services.backend.backend_properties();
            debug!(backends = records.len(), "refreshed backend property list");
            self.shared
                .backend_refresh_requested
                .store(false, Ordering::SeqCst);
            Some(records)
        } else {
            None
        };

        let mut snapshot = self.lock();
        if let Some(records) = fresh {
            snapshot.backends.install(records);
        }
        snapshot.backends.rotate();
    }
}
